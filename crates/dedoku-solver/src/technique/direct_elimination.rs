use dedoku_core::{DigitSet, Grid};

use super::Technique;

const NAME: &str = "direct elimination";

/// Assigns cells whose value is forced because only one candidate survives.
///
/// For every unsolved cell, the candidate set starts at all of 1-9 and drops
/// each digit already placed somewhere in the cell's row, column, or box.
/// When exactly one candidate remains (a "naked single"), it is assigned on
/// the spot, so cells visited later in the same sweep see the new value.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectElimination;

impl DirectElimination {
    /// Creates a new `DirectElimination` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Technique for DirectElimination {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, grid: &mut Grid) -> usize {
        let mut placed = 0;
        let ids: Vec<_> = grid.cell_ids().collect();
        for id in ids {
            if grid.value(id).is_some() {
                continue;
            }
            let mut candidates = DigitSet::FULL;
            for group_id in *grid.cell(id).groups() {
                for member in grid.group(group_id).cells() {
                    if let Some(value) = grid.value(*member) {
                        candidates.remove(value);
                    }
                }
            }
            if let Some(digit) = candidates.as_single() {
                grid.set_value(id, digit);
                log::trace!("{NAME}: placed {digit} at {}", grid.cell(id).coordinate());
                placed += 1;
            }
        }
        placed
    }
}
