//! Stagnation detection for the solve loop.

/// Tracks unsolved-cell counts across iterations to detect stagnation.
///
/// The monitor keeps the last 3 recorded counts as a shift register, oldest
/// dropped first. The loop records the count observed at the start of each
/// iteration; when all 3 recorded counts equal each other *and* equal the
/// current count, deduction has made no progress for 3 full iterations and
/// the puzzle is declared stuck.
///
/// # Examples
///
/// ```
/// use dedoku_solver::ProgressMonitor;
///
/// let mut monitor = ProgressMonitor::new();
/// monitor.record(51);
/// monitor.record(51);
/// monitor.record(51);
/// assert!(monitor.is_stalled(51));
/// assert!(!monitor.is_stalled(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgressMonitor {
    history: [usize; 3],
}

impl ProgressMonitor {
    /// Creates a monitor with an empty history.
    ///
    /// The initial history is all zeros, which can never stall a puzzle that
    /// has unsolved cells.
    #[must_use]
    pub const fn new() -> Self {
        Self { history: [0; 3] }
    }

    /// Records an unsolved-cell count, dropping the oldest entry.
    pub const fn record(&mut self, unsolved: usize) {
        self.history = [self.history[1], self.history[2], unsolved];
    }

    /// Returns `true` when the last 3 recorded counts and `current` are all
    /// equal.
    #[must_use]
    pub const fn is_stalled(&self, current: usize) -> bool {
        self.history[0] == self.history[1]
            && self.history[1] == self.history[2]
            && self.history[2] == current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_monitor_never_stalled_for_nonzero_count() {
        let monitor = ProgressMonitor::new();
        assert!(!monitor.is_stalled(81));
        assert!(!monitor.is_stalled(1));
    }

    #[test]
    fn test_stalls_after_three_equal_records() {
        let mut monitor = ProgressMonitor::new();
        monitor.record(10);
        assert!(!monitor.is_stalled(10));
        monitor.record(10);
        assert!(!monitor.is_stalled(10));
        monitor.record(10);
        assert!(monitor.is_stalled(10));
    }

    #[test]
    fn test_progress_resets_the_window() {
        let mut monitor = ProgressMonitor::new();
        monitor.record(10);
        monitor.record(10);
        monitor.record(9);
        assert!(!monitor.is_stalled(9));
        monitor.record(9);
        monitor.record(9);
        assert!(monitor.is_stalled(9));
    }

    #[test]
    fn test_current_count_must_match_history() {
        let mut monitor = ProgressMonitor::new();
        monitor.record(10);
        monitor.record(10);
        monitor.record(10);
        // Progress in the current iteration clears the stall
        assert!(!monitor.is_stalled(8));
    }
}
