//! The solve-session grid model: snapshot, working cells, and group index.

use std::str::FromStr;

use crate::{
    CellId, Coordinate, Digit, Group, GroupId, GroupKind, InputError,
    digit::parse_given,
};

/// Immutable record of one cell's starting value.
///
/// Built once from the input and never mutated; retained only so the final
/// working grid can be diffed against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GivenCell {
    coordinate: Coordinate,
    value: Option<Digit>,
}

impl GivenCell {
    /// Returns the cell's position.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the starting value, `None` for an unknown cell.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }
}

/// Mutable record of one working cell.
///
/// Owned by the [`Grid`]; the deduction passes are the only writers. The
/// `groups` links are populated once, after all 27 groups exist.
#[derive(Debug, Clone)]
pub struct Cell {
    coordinate: Coordinate,
    value: Option<Digit>,
    groups: [GroupId; 3],
}

impl Cell {
    /// Returns the cell's position.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the current value, `None` while still unsolved.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns the ids of the exactly 3 groups containing this cell.
    #[must_use]
    pub const fn groups(&self) -> &[GroupId; 3] {
        &self.groups
    }
}

/// One entry of the final diff: a cell whose value changed during solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    /// Position of the changed cell.
    pub coordinate: Coordinate,
    /// The value the solver assigned.
    pub value: Digit,
}

/// The full model for one solve: initial snapshot, 81 working cells, and the
/// 27 cross-linked groups.
///
/// A `Grid` is private to one solve invocation. Nothing is shared between
/// solves; each incoming puzzle constructs a fresh instance. Cells and groups
/// live in arenas and reference each other by index ([`CellId`], [`GroupId`]),
/// giving O(1) lookup in both directions without ownership cycles.
///
/// # Examples
///
/// ```
/// use dedoku_core::Grid;
///
/// let assignments = (1..=9_u8)
///     .flat_map(|y| (1..=9_u8).map(move |x| (format!("x-{x}-y-{y}"), String::new())));
/// let grid = Grid::from_assignments(assignments)?;
///
/// assert_eq!(grid.unsolved_count(), 81);
/// assert!(grid.changed_cells().is_empty());
/// # Ok::<(), dedoku_core::InputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    givens: Vec<GivenCell>,
    cells: Vec<Cell>,
    groups: Vec<Group>,
}

impl Grid {
    /// Builds a grid from `(coordinate-name, value-string)` pairs.
    ///
    /// The input must describe all 81 cells, each coordinate exactly once, in
    /// any order. The input order is preserved: it becomes the cell arena
    /// order and thereby the order of [`changed_cells`](Self::changed_cells).
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] for a malformed or out-of-range coordinate
    /// name, a non-numeric or out-of-range value, a duplicated coordinate, or
    /// an input that is not exactly 81 assignments long.
    pub fn from_assignments<I, S, T>(assignments: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut givens = Vec::with_capacity(81);
        let mut cells = Vec::with_capacity(81);
        let mut seen = [false; 81];
        for (name, value) in assignments {
            let coordinate: Coordinate = name.as_ref().parse()?;
            let value = parse_given(value.as_ref())?;
            let slot = usize::from(coordinate.y() - 1) * 9 + usize::from(coordinate.x() - 1);
            if seen[slot] {
                return Err(InputError::DuplicateCoordinate {
                    name: coordinate.to_string(),
                });
            }
            seen[slot] = true;
            // The snapshot and the working cell are built from the same
            // parse, but stay independent records.
            givens.push(GivenCell { coordinate, value });
            cells.push(Cell {
                coordinate,
                value,
                groups: [GroupId(0); 3],
            });
        }
        if cells.len() != 81 {
            return Err(InputError::WrongCellCount { count: cells.len() });
        }

        let groups = Self::build_groups(&cells);
        let mut grid = Self {
            givens,
            cells,
            groups,
        };
        grid.link_cells_to_groups();
        Ok(grid)
    }

    /// Builds the 27 groups in stable order: rows 1-9, columns 1-9, boxes 0-8.
    fn build_groups(cells: &[Cell]) -> Vec<Group> {
        GroupKind::ALL
            .iter()
            .map(|kind| {
                let mut members = [CellId(0); 9];
                let mut len = 0;
                for (index, cell) in cells.iter().enumerate() {
                    if kind.contains(cell.coordinate.x(), cell.coordinate.y()) {
                        members[len] = CellId(index);
                        len += 1;
                    }
                }
                // Guaranteed by the validated 81-cell universe.
                assert_eq!(len, 9, "{kind} must contain 9 cells");
                Group::new(*kind, members)
            })
            .collect()
    }

    /// Populates the cell→group back references by scanning group membership.
    fn link_cells_to_groups(&mut self) {
        let mut filled = [0_usize; 81];
        for (index, group) in self.groups.iter().enumerate() {
            for cell_id in group.cells() {
                let slot = &mut filled[cell_id.index()];
                self.cells[cell_id.index()].groups[*slot] = GroupId(index);
                *slot += 1;
            }
        }
        // One row, one column, one box each.
        assert!(filled.iter().all(|count| *count == 3));
    }

    /// Returns the ids of all cells in arena (input) order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.cells.len()).map(CellId)
    }

    /// Returns the cell with the given id.
    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// Returns the ids of all 27 groups in construction order.
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> {
        (0..self.groups.len()).map(GroupId)
    }

    /// Returns the group with the given id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.index()]
    }

    /// Returns the current value of a cell.
    #[must_use]
    pub fn value(&self, id: CellId) -> Option<Digit> {
        self.cells[id.index()].value
    }

    /// Assigns a value to an unsolved cell.
    ///
    /// Values are only ever narrowed in, never cleared or overwritten.
    pub fn set_value(&mut self, id: CellId, value: Digit) {
        let cell = &mut self.cells[id.index()];
        debug_assert!(cell.value.is_none(), "{} already solved", cell.coordinate);
        cell.value = Some(value);
    }

    /// Returns the number of cells still without a value.
    #[must_use]
    pub fn unsolved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.value.is_none()).count()
    }

    /// Returns `true` when every cell has a value.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.value.is_some())
    }

    /// Reports every cell whose value differs from the initial snapshot, in
    /// cell arena order.
    ///
    /// Pure comparison; valid after both a solved and a stuck outcome.
    #[must_use]
    pub fn changed_cells(&self) -> Vec<CellChange> {
        self.givens
            .iter()
            .zip(&self.cells)
            .filter(|(given, cell)| given.value != cell.value)
            .filter_map(|(_, cell)| {
                cell.value.map(|value| CellChange {
                    coordinate: cell.coordinate,
                    value,
                })
            })
            .collect()
    }
}

impl FromStr for Grid {
    type Err = InputError;

    /// Parses a grid from 81 digit characters in row-major order.
    ///
    /// `1`-`9` are givens; `0`, `.`, and `_` are unknown cells; whitespace is
    /// ignored. This is the compact fixture format used by tests and
    /// benchmarks; the service path goes through
    /// [`from_assignments`](Self::from_assignments).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut assignments = Vec::with_capacity(81);
        for (index, ch) in s.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
            let x = index % 9 + 1;
            let y = index / 9 + 1;
            let value = match ch {
                '.' | '_' => String::new(),
                _ => ch.to_string(),
            };
            assignments.push((format!("x-{x}-y-{y}"), value));
        }
        Self::from_assignments(assignments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_assignments() -> Vec<(String, String)> {
        (1..=9_u8)
            .flat_map(|y| (1..=9_u8).map(move |x| (format!("x-{x}-y-{y}"), String::new())))
            .collect()
    }

    #[test]
    fn test_builds_27_groups_of_9_cells() {
        let grid = Grid::from_assignments(empty_assignments()).unwrap();
        assert_eq!(grid.group_ids().count(), 27);
        for id in grid.group_ids() {
            let group = grid.group(id);
            let mut members: Vec<_> = group.cells().to_vec();
            members.sort_unstable();
            members.dedup();
            assert_eq!(members.len(), 9, "{}", group.kind());
        }
    }

    #[test]
    fn test_cells_link_back_to_their_groups() {
        let grid = Grid::from_assignments(empty_assignments()).unwrap();
        for id in grid.cell_ids() {
            let cell = grid.cell(id);
            let mut kinds: Vec<_> = cell
                .groups()
                .iter()
                .map(|group_id| grid.group(*group_id).kind())
                .collect();
            // Each cell links one row, one column, one box, and every linked
            // group actually contains it.
            for group_id in cell.groups() {
                assert!(grid.group(*group_id).cells().contains(&id));
            }
            kinds.sort_by_key(|kind| match kind {
                GroupKind::Row { .. } => 0,
                GroupKind::Column { .. } => 1,
                GroupKind::Box { .. } => 2,
            });
            assert!(matches!(kinds[0], GroupKind::Row { y } if y == cell.coordinate().y()));
            assert!(matches!(kinds[1], GroupKind::Column { x } if x == cell.coordinate().x()));
            assert!(
                matches!(kinds[2], GroupKind::Box { index } if index == cell.coordinate().box_index())
            );
        }
    }

    #[test]
    fn test_rejects_duplicate_coordinate() {
        let mut assignments = empty_assignments();
        assignments[80] = ("x-1-y-1".to_owned(), String::new());
        let err = Grid::from_assignments(assignments).unwrap_err();
        assert_eq!(
            err,
            InputError::DuplicateCoordinate {
                name: "x-1-y-1".to_owned()
            }
        );
    }

    #[test]
    fn test_rejects_incomplete_universe() {
        let mut assignments = empty_assignments();
        assignments.pop();
        let err = Grid::from_assignments(assignments).unwrap_err();
        assert_eq!(err, InputError::WrongCellCount { count: 80 });
    }

    #[test]
    fn test_rejects_bad_value() {
        let mut assignments = empty_assignments();
        assignments[0].1 = "15".to_owned();
        let err = Grid::from_assignments(assignments).unwrap_err();
        assert_eq!(err, InputError::ValueOutOfRange { value: 15 });
    }

    #[test]
    fn test_diff_tracks_assignments_in_input_order() {
        let mut grid = Grid::from_assignments(empty_assignments()).unwrap();
        assert!(grid.changed_cells().is_empty());

        let ids: Vec<_> = grid.cell_ids().collect();
        grid.set_value(ids[80], Digit::D1);
        grid.set_value(ids[0], Digit::D9);
        let diff = grid.changed_cells();
        assert_eq!(diff.len(), 2);
        // Arena order, not assignment order
        assert_eq!(diff[0].coordinate.to_string(), "x-1-y-1");
        assert_eq!(diff[0].value, Digit::D9);
        assert_eq!(diff[1].coordinate.to_string(), "x-9-y-9");
        assert_eq!(diff[1].value, Digit::D1);
    }

    #[test]
    fn test_givens_are_not_reported_as_changes() {
        let grid: Grid = "53..7....\
                          6..195...\
                          .98....6.\
                          8...6...3\
                          4..8.3..1\
                          7...2...6\
                          .6....28.\
                          ...419..5\
                          ....8..79"
            .parse()
            .unwrap();
        assert_eq!(grid.unsolved_count(), 51);
        assert!(grid.changed_cells().is_empty());
    }

    #[test]
    fn test_from_str_rejects_short_input() {
        let err = "53..7....".parse::<Grid>().unwrap_err();
        assert_eq!(err, InputError::WrongCellCount { count: 9 });
    }
}
