use dedoku_core::{CellId, Digit, DigitSet, Grid, GroupId};

use super::Technique;

const NAME: &str = "group-exclusive placement";

/// Assigns digits that have only one legal home left within a group.
///
/// For each group, every digit not yet placed there is tried against the
/// group's unfilled cells: a cell can hold the digit when none of the cell's
/// *other* groups already contains it. If exactly one cell qualifies, the
/// digit goes there (a "hidden single"), even though that cell by itself may
/// still have several surviving candidates. Zero or several qualifying cells
/// mean no assignment for that digit; there is no guessing.
///
/// The solve loop invokes this technique only when a
/// [`DirectElimination`](super::DirectElimination) sweep made no progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExclusivePlacement;

impl ExclusivePlacement {
    /// Creates a new `ExclusivePlacement` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Returns `true` when `digit` may be placed in `cell` as far as the cell's
/// groups other than `within` are concerned.
fn is_legal(grid: &Grid, cell: CellId, within: GroupId, digit: Digit) -> bool {
    grid.cell(cell)
        .groups()
        .iter()
        .filter(|group_id| **group_id != within)
        .all(|group_id| {
            grid.group(*group_id)
                .cells()
                .iter()
                .all(|member| grid.value(*member) != Some(digit))
        })
}

impl Technique for ExclusivePlacement {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, grid: &mut Grid) -> usize {
        let mut placed = 0;
        let group_ids: Vec<_> = grid.group_ids().collect();
        for group_id in group_ids {
            let members = *grid.group(group_id).cells();
            let mut available = DigitSet::FULL;
            for member in members {
                if let Some(value) = grid.value(member) {
                    available.remove(value);
                }
            }
            for digit in available.iter() {
                let mut matched = None;
                let mut matches = 0;
                for member in members {
                    // Re-checked live: an earlier placement in this same
                    // pass may have filled the cell since the sweep began.
                    if grid.value(member).is_some() {
                        continue;
                    }
                    if is_legal(grid, member, group_id, digit) {
                        matched = Some(member);
                        matches += 1;
                    }
                }
                if let Some(cell) = matched
                    && matches == 1
                {
                    grid.set_value(cell, digit);
                    log::trace!(
                        "{NAME}: placed {digit} at {} ({} had one legal cell)",
                        grid.cell(cell).coordinate(),
                        grid.group(group_id).kind(),
                    );
                    placed += 1;
                }
            }
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use dedoku_core::Coordinate;

    use super::*;
    use crate::technique::DirectElimination;

    /// A grid holding only eight 5s, arranged so they share no group, cover
    /// columns 1-8 and rows 2-9, and leave box 2 untouched.
    fn eight_fives() -> Grid {
        let positions = [
            (1, 2),
            (2, 5),
            (3, 8),
            (4, 3),
            (5, 6),
            (6, 9),
            (7, 4),
            (8, 7),
        ];
        let assignments: Vec<_> = (1..=9_u8)
            .flat_map(|y| (1..=9_u8).map(move |x| (x, y)))
            .map(|(x, y)| {
                let value = if positions.contains(&(x, y)) { "5" } else { "" };
                (format!("x-{x}-y-{y}"), value.to_owned())
            })
            .collect();
        Grid::from_assignments(assignments).unwrap()
    }

    #[test]
    fn test_places_digit_with_single_legal_cell() {
        // In row 1, the 5 is blocked from columns 1-8 by the other rows'
        // 5s, so x-9-y-1 is its only legal home. That cell still has eight
        // surviving candidates, which is why elimination alone cannot find
        // it.
        let mut grid = eight_fives();
        assert_eq!(DirectElimination::new().apply(&mut grid), 0);

        let placed = ExclusivePlacement::new().apply(&mut grid);
        assert_eq!(placed, 1);
        let target: Coordinate = "x-9-y-1".parse().unwrap();
        let id = grid
            .cell_ids()
            .find(|id| grid.cell(*id).coordinate() == target)
            .unwrap();
        assert_eq!(grid.value(id), Some(Digit::D5));
    }

    #[test]
    fn test_no_assignment_when_several_cells_qualify() {
        // An empty grid gives every digit nine legal cells per group.
        let assignments = (1..=9_u8)
            .flat_map(|y| (1..=9_u8).map(move |x| (format!("x-{x}-y-{y}"), String::new())));
        let mut grid = Grid::from_assignments(assignments).unwrap();
        assert_eq!(ExclusivePlacement::new().apply(&mut grid), 0);
        assert_eq!(grid.unsolved_count(), 81);
    }

    #[test]
    fn test_name() {
        assert_eq!(ExclusivePlacement::new().name(), "group-exclusive placement");
    }
}
