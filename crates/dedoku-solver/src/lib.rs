//! Deduction-only solving engine for dedoku.
//!
//! The engine applies exactly two techniques, [`DirectElimination`] (naked
//! singles) and [`ExclusivePlacement`] (hidden singles), in a fixpoint loop
//! with bounded-stagnation detection. Puzzles that need search beyond these
//! deductions are reported as [`UnsolvableError`] rather than guessed at.
//!
//! A [`Session`] is constructed per puzzle around a
//! [`Grid`](dedoku_core::Grid) and runs synchronously to completion:
//!
//! ```
//! use dedoku_core::Grid;
//! use dedoku_solver::{Session, SolveError};
//!
//! fn solve(grid: Grid) -> Result<Vec<dedoku_core::CellChange>, SolveError> {
//!     let mut session = Session::new(grid);
//!     session.solve()?;
//!     Ok(session.changed_cells())
//! }
//! ```
//!
//! [`DirectElimination`]: technique::DirectElimination
//! [`ExclusivePlacement`]: technique::ExclusivePlacement

pub mod error;
pub mod progress;
pub mod session;
pub mod technique;

pub use self::{
    error::{SolveError, UnsolvableError},
    progress::ProgressMonitor,
    session::{Session, SolveReport, SolveState},
};
