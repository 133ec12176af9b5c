//! Wire shapes for the solve request and response.

use dedoku_core::CellChange;
use serde::{Deserialize, Serialize};

/// One cell on the wire: a coordinate name and a value string.
///
/// The request body is an ordered array of these, one per board cell. The
/// coordinate is the `x-#-y-#` form; the value is a decimal digit string
/// where empty/whitespace and `"0"` both mean "unknown". The same shape is
/// reused for response entries, where `value` is always a solved digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAssignment {
    /// Coordinate name in `x-#-y-#` form.
    pub coordinate: String,
    /// Cell value digit string; empty means unknown.
    pub value: String,
}

/// The response for one solve call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    /// Every cell whose value changed during solving, in request order.
    pub updated_values: Vec<CellAssignment>,
    /// `true` when the puzzle was solved completely; `false` when deduction
    /// stagnated and `updated_values` holds only partial progress.
    pub solved: bool,
}

impl From<&CellChange> for CellAssignment {
    fn from(change: &CellChange) -> Self {
        Self {
            coordinate: change.coordinate.to_string(),
            value: change.value.to_string(),
        }
    }
}

impl SolveResponse {
    /// Builds a response from the session diff and outcome.
    #[must_use]
    pub fn new(changes: &[CellChange], solved: bool) -> Self {
        Self {
            updated_values: changes.iter().map(CellAssignment::from).collect(),
            solved,
        }
    }
}
