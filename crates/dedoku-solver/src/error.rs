//! Solver failure taxonomy.

use dedoku_core::InputError;

use crate::SolveReport;

/// The deduction techniques exhausted themselves without solving the puzzle.
///
/// Raised when the progress monitor observes 3 consecutive iterations with no
/// change in the unsolved-cell count. This is an expected, reportable outcome
/// rather than a crash: the puzzle needs search beyond pure deduction, or its
/// givens are contradictory. Rerunning the same input deterministically
/// reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "unable to solve: no progress for 3 iterations, {} cells left after {} iterations",
    report.unsolved_remaining,
    report.iterations
)]
pub struct UnsolvableError {
    /// Statistics up to the point the solver gave up.
    pub report: SolveReport,
}

/// Any failure a solve invocation can surface to its caller.
///
/// A single tagged type so callers can distinguish "bad input" (reject the
/// puzzle) from "could not solve" (report the partial result) without string
/// matching.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The puzzle was rejected before solving began.
    #[display("invalid puzzle input: {_0}")]
    Input(InputError),
    /// Deduction stagnated before the puzzle was complete.
    #[display("{_0}")]
    Unsolvable(UnsolvableError),
}
