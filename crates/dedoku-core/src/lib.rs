//! Core data model for the dedoku deduction solver.
//!
//! This crate holds everything the solving engine operates on, with no
//! solving logic of its own:
//!
//! - [`digit`]: type-safe digits 1-9, candidate sets, and given-value parsing
//! - [`coordinate`]: board positions and their `x-#-y-#` wire encoding
//! - [`group`]: the 27 rows/columns/boxes and the arena index types
//! - [`grid`]: the per-solve model of immutable snapshot, working cells,
//!   cross-linked groups, and the final diff
//! - [`error`]: input validation errors
//!
//! A [`Grid`] is constructed fresh for every puzzle and is never shared
//! between solves. Cells and groups reference each other through arena
//! indices, so the bidirectional cell↔group relationship involves no
//! ownership cycles.
//!
//! # Examples
//!
//! ```
//! use dedoku_core::{Digit, Grid};
//!
//! let mut grid: Grid = "
//!     123456789
//!     456789123
//!     789123456
//!     234567891
//!     567891234
//!     891234567
//!     345678912
//!     678912345
//!     91234567.
//! "
//! .parse()?;
//!
//! assert_eq!(grid.unsolved_count(), 1);
//! let last = grid.cell_ids().last().unwrap();
//! grid.set_value(last, Digit::D8);
//! assert!(grid.is_solved());
//! assert_eq!(grid.changed_cells().len(), 1);
//! # Ok::<(), dedoku_core::InputError>(())
//! ```

pub mod coordinate;
pub mod digit;
pub mod error;
pub mod grid;
pub mod group;

pub use self::{
    coordinate::Coordinate,
    digit::{Digit, DigitSet},
    error::InputError,
    grid::{Cell, CellChange, GivenCell, Grid},
    group::{CellId, Group, GroupId, GroupKind},
};
