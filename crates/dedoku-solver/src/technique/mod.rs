//! The two deduction techniques.
//!
//! Each technique performs one full sweep over the grid per call and reports
//! how many cell values it assigned. Both are monotonic: they only narrow
//! candidate sets and fill cells, never clear them, so sweep order does not
//! affect the final fixpoint.

use std::fmt::Debug;

use dedoku_core::Grid;

pub use self::{
    direct_elimination::DirectElimination, exclusive_placement::ExclusivePlacement,
};

mod direct_elimination;
mod exclusive_placement;

/// A deduction technique applied by the solve loop.
pub trait Technique: Debug {
    /// Returns the name of the technique, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Performs one sweep over the grid.
    ///
    /// Returns the number of cells assigned during the sweep. Assignments
    /// take effect immediately and are visible to the rest of the same
    /// sweep.
    fn apply(&self, grid: &mut Grid) -> usize;
}
