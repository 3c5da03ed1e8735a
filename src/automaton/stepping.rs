//! Wireworld generation stepping.

use super::cell::Cell;
use super::grid::Grid;
use crate::state::Automaton;

/// Whether a step changed the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Changed,
    Unchanged,
}

impl StepOutcome {
    #[inline]
    pub fn is_changed(self) -> bool {
        self == StepOutcome::Changed
    }
}

/// Compute the next generation of `current` into `next`.
///
/// Wireworld rules:
/// - Head becomes Tail
/// - Tail becomes Conductor
/// - Conductor becomes Head with exactly 1 or 2 Head neighbors
/// - Empty stays Empty
///
/// Reads only `current`, so every cell updates simultaneously. `next` is
/// resized to match when needed. Returns whether any cell differs.
pub fn next_generation(current: &Grid, next: &mut Grid) -> bool {
    next.match_dimensions(current);

    let mut changed = false;
    for row in 0..current.height() {
        for col in 0..current.width() {
            let idx = current.index_of(row, col);
            let cell = current.cells()[idx];
            let neighbors = if cell == Cell::Conductor {
                current.count_head_neighbors(row, col)
            } else {
                0
            };

            let updated = cell.next(neighbors);
            changed |= updated != cell;
            next.set(row, col, updated);
        }
    }

    changed
}

/// Step the automaton forward by one generation, ignoring the paused flag.
///
/// The next generation is computed into the automaton's scratch buffer and
/// swapped in only when something changed.
pub fn step_automaton(automaton: &mut Automaton) -> StepOutcome {
    let (current, next) = automaton.step_buffers();
    if next_generation(current, next) {
        automaton.commit_step();
        StepOutcome::Changed
    } else {
        StepOutcome::Unchanged
    }
}
