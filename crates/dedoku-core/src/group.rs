//! Cell groups: rows, columns, and 3×3 boxes.

use std::fmt::{self, Display};

/// Arena index of a working cell inside a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Arena index of a group inside a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub(crate) usize);

impl GroupId {
    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The defining dimension of a group: a row, a column, or a 3×3 box.
///
/// A solved group contains each digit 1-9 exactly once. Every cell belongs to
/// exactly one group of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// A row identified by its y coordinate (1-9).
    Row {
        /// Row coordinate (1-9).
        y: u8,
    },
    /// A column identified by its x coordinate (1-9).
    Column {
        /// Column coordinate (1-9).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl GroupKind {
    /// All 27 group kinds in construction order: rows 1-9, columns 1-9,
    /// boxes 0-8.
    ///
    /// This order is stable; the solver's determinism depends on it.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 1 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 + 1 };
            all[i + 9] = Self::Column { x: i as u8 + 1 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns `true` when the cell at `(x, y)` belongs to this group.
    #[must_use]
    pub const fn contains(self, x: u8, y: u8) -> bool {
        match self {
            Self::Row { y: row } => y == row,
            Self::Column { x: column } => x == column,
            Self::Box { index } => (y - 1) / 3 * 3 + (x - 1) / 3 == index,
        }
    }
}

impl Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {y}"),
            Self::Column { x } => write!(f, "column {x}"),
            Self::Box { index } => write!(f, "box {index}"),
        }
    }
}

/// One of the 27 groups of a grid: its kind plus the 9 member cells.
///
/// Membership is fixed at construction; only the referenced cells' values
/// change while solving.
#[derive(Debug, Clone)]
pub struct Group {
    kind: GroupKind,
    cells: [CellId; 9],
}

impl Group {
    pub(crate) const fn new(kind: GroupKind, cells: [CellId; 9]) -> Self {
        Self { kind, cells }
    }

    /// Returns the group's defining dimension, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Returns the 9 member cells in construction order.
    #[must_use]
    pub const fn cells(&self) -> &[CellId; 9] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_27_distinct_kinds() {
        assert_eq!(GroupKind::ALL.len(), 27);
        for (i, a) in GroupKind::ALL.iter().enumerate() {
            for b in &GroupKind::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_every_cell_in_three_kinds() {
        for y in 1..=9 {
            for x in 1..=9 {
                let count = GroupKind::ALL
                    .iter()
                    .filter(|kind| kind.contains(x, y))
                    .count();
                assert_eq!(count, 3, "cell ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_box_membership() {
        // Box 4 is the center: x and y both in 4-6
        let center = GroupKind::Box { index: 4 };
        assert!(center.contains(4, 4));
        assert!(center.contains(6, 6));
        assert!(!center.contains(3, 4));
        assert!(!center.contains(4, 7));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(GroupKind::Row { y: 5 }.to_string(), "row 5");
        assert_eq!(GroupKind::Column { x: 2 }.to_string(), "column 2");
        assert_eq!(GroupKind::Box { index: 8 }.to_string(), "box 8");
    }
}
