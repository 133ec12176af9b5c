//! The solve loop: one session per puzzle.

use dedoku_core::{CellChange, Grid};

use crate::{
    ProgressMonitor, UnsolvableError,
    technique::{DirectElimination, ExclusivePlacement, Technique as _},
};

/// Where a session stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveState {
    /// The solve loop has not finished.
    Running,
    /// Every cell has a value.
    Solved,
    /// Deduction stagnated with cells still unsolved.
    Stuck,
}

/// Statistics collected while solving.
///
/// Tracks how often each technique assigned a cell and how many iterations
/// the loop ran; carried inside [`UnsolvableError`] when the solver gives up
/// so a stuck outcome is as observable as a solved one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveReport {
    /// Number of loop iterations executed.
    pub iterations: usize,
    /// Cells assigned by direct elimination.
    pub eliminations: usize,
    /// Cells assigned by group-exclusive placement.
    pub exclusive_placements: usize,
    /// Cells still unsolved when the loop exited.
    pub unsolved_remaining: usize,
}

/// A single solve invocation over one grid.
///
/// A session owns its [`Grid`] and runs synchronously to completion; nothing
/// is shared across invocations, so concurrent solves simply construct
/// independent sessions. The grid is retained after the loop exits, solved
/// or stuck, so the final diff can always be reported.
///
/// Each iteration runs one direct-elimination sweep and, when that sweep
/// changed nothing, one group-exclusive-placement sweep. The progress
/// monitor watches the unsolved-cell count and fails the session after 3
/// consecutive iterations without progress. The whole procedure is
/// deterministic: identical input always produces the identical outcome.
///
/// # Examples
///
/// ```
/// use dedoku_core::Grid;
/// use dedoku_solver::Session;
///
/// let grid: Grid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
///
/// let mut session = Session::new(grid);
/// let report = session.solve().expect("puzzle yields to deduction");
/// assert!(session.state().is_solved());
/// assert_eq!(session.changed_cells().len(), 51);
/// assert!(report.iterations > 0);
/// # Ok::<(), dedoku_core::InputError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    state: SolveState,
}

impl Session {
    /// Creates a session over a freshly constructed grid.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: SolveState::Running,
        }
    }

    /// Returns the session's current state.
    #[must_use]
    pub const fn state(&self) -> SolveState {
        self.state
    }

    /// Returns the grid in its current (possibly partially solved) form.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Reports every cell changed since the initial snapshot.
    ///
    /// Valid after both outcomes: a stuck session reports the partial
    /// progress deduction managed before stagnating.
    #[must_use]
    pub fn changed_cells(&self) -> Vec<CellChange> {
        self.grid.changed_cells()
    }

    /// Runs deduction to a fixpoint.
    ///
    /// # Errors
    ///
    /// Returns [`UnsolvableError`] when the unsolved-cell count fails to
    /// drop for 3 consecutive iterations. The session transitions to
    /// [`SolveState::Stuck`] and keeps whatever progress was made.
    pub fn solve(&mut self) -> Result<SolveReport, UnsolvableError> {
        let elimination = DirectElimination::new();
        let exclusive = ExclusivePlacement::new();
        let mut monitor = ProgressMonitor::new();
        let mut report = SolveReport::default();

        let mut unsolved = self.grid.unsolved_count();
        while unsolved > 0 {
            if monitor.is_stalled(unsolved) {
                self.state = SolveState::Stuck;
                report.unsolved_remaining = unsolved;
                log::warn!(
                    "giving up after {} iterations with {unsolved} cells unsolved",
                    report.iterations
                );
                return Err(UnsolvableError { report });
            }
            monitor.record(unsolved);
            report.iterations += 1;

            report.eliminations += elimination.apply(&mut self.grid);
            let after_elimination = self.grid.unsolved_count();
            if after_elimination == unsolved {
                log::debug!(
                    "iteration {}: {} made no progress, running {}",
                    report.iterations,
                    elimination.name(),
                    exclusive.name()
                );
                report.exclusive_placements += exclusive.apply(&mut self.grid);
            }
            unsolved = self.grid.unsolved_count();
        }

        self.state = SolveState::Solved;
        log::debug!(
            "solved in {} iterations ({} eliminations, {} exclusive placements)",
            report.iterations,
            report.eliminations,
            report.exclusive_placements
        );
        Ok(report)
    }
}
