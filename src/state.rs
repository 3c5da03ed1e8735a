//! The Wireworld automaton: live grid, reset snapshot and run state.

use std::path::Path;

use tracing::{debug, trace, warn};

use crate::automaton::{self, Anchor, Cell, Grid, Pattern, StepOutcome};
use crate::config::{EditPolicy, EngineConfig};
use crate::error::{EngineError, Result};

/// A Wireworld automaton advanced one generation at a time.
///
/// `current` and `scratch` are the two step buffers; a committed step swaps
/// them. `initial` is the snapshot that [`Automaton::reset`] restores. All
/// three always share the same dimensions.
#[derive(Clone, Debug)]
pub struct Automaton {
    current: Grid,
    scratch: Grid,
    initial: Grid,
    generation: u64,
    paused: bool,
    padding: usize,
    edit_policy: EditPolicy,
}

impl Automaton {
    /// Create an all-`Empty` automaton, paused at generation 0.
    pub fn new(width: usize, height: usize) -> Self {
        debug!(width, height, "creating automaton");
        let current = Grid::new(width, height);
        Automaton {
            scratch: current.clone(),
            initial: current.clone(),
            current,
            generation: 0,
            paused: true,
            padding: 0,
            edit_policy: EditPolicy::default(),
        }
    }

    /// Create an automaton from validated configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let mut automaton = Self::new(config.width, config.height);
        automaton.padding = config.padding;
        automaton.edit_policy = config.edit_policy;
        Ok(automaton)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.current.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.current.height()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn padding(&self) -> usize {
        self.padding
    }

    #[inline]
    pub fn edit_policy(&self) -> EditPolicy {
        self.edit_policy
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// The snapshot restored by [`Automaton::reset`].
    pub fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    /// Read a live cell, or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.current.get(row, col)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Advance one generation unless paused.
    pub fn step(&mut self) -> StepOutcome {
        if self.paused {
            return StepOutcome::Unchanged;
        }
        self.force_step()
    }

    /// Advance one generation regardless of the paused flag.
    pub fn force_step(&mut self) -> StepOutcome {
        automaton::step_automaton(self)
    }

    /// Pause, then advance exactly one generation.
    pub fn single_step(&mut self) -> StepOutcome {
        self.paused = true;
        self.force_step()
    }

    /// Restore the snapshot taken at the last load, clear or edit.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.initial);
        self.generation = 0;
        self.paused = true;
        debug!("automaton reset");
    }

    /// Empty every cell and make the empty grid the new snapshot.
    pub fn clear(&mut self) {
        self.current.fill_empty();
        self.initial.clone_from(&self.current);
        self.generation = 0;
        self.paused = true;
        debug!(width = self.width(), height = self.height(), "automaton cleared");
    }

    /// Replace the grid with parsed circuit text.
    ///
    /// Blank or whitespace-only text is the same as [`Automaton::clear`].
    /// The loaded grid becomes the reset snapshot.
    pub fn load_from_text(&mut self, text: &str) {
        let Some(grid) = automaton::parse_grid(text, self.padding) else {
            debug!("blank circuit text, clearing");
            self.clear();
            return;
        };

        self.initial.clone_from(&grid);
        self.scratch.match_dimensions(&grid);
        self.current = grid;
        self.generation = 0;
        self.paused = true;
        debug!(
            width = self.width(),
            height = self.height(),
            padding = self.padding,
            "circuit loaded"
        );
    }

    /// Read a circuit file and load it. On error the automaton is untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            warn!(path = %path.display(), %source, "failed to read circuit file");
            EngineError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.load_from_text(&text);
        Ok(())
    }

    /// Write the live grid to a circuit file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.serialize()).map_err(|source| EngineError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Serialize the live grid as circuit text.
    pub fn serialize(&self) -> String {
        automaton::serialize(&self.current)
    }

    /// Set a cell by hand. Returns whether the live value changed.
    ///
    /// Out-of-bounds coordinates are ignored. Under [`EditPolicy::Rebaseline`]
    /// the reset snapshot gets the same value.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        let Some(previous) = self.current.set(row, col, cell) else {
            return false;
        };
        if self.edit_policy == EditPolicy::Rebaseline {
            self.initial.set(row, col, cell);
        }
        previous != cell
    }

    /// Drawing-tool edit: toggles between `brush` and `Empty`.
    pub fn paint_cell(&mut self, row: usize, col: usize, brush: Cell) -> bool {
        match self.current.get(row, col) {
            Some(existing) if existing == brush => self.set_cell(row, col, Cell::Empty),
            Some(_) => self.set_cell(row, col, brush),
            None => false,
        }
    }

    /// Stamp a pattern into the live grid. Returns the number of cells written.
    ///
    /// Under [`EditPolicy::Rebaseline`] the whole live grid becomes the reset
    /// snapshot.
    pub fn stamp(&mut self, pattern: &Pattern, row: usize, col: usize, anchor: Anchor) -> usize {
        let written = automaton::stamp_pattern(&mut self.current, pattern, row, col, anchor);
        if self.edit_policy == EditPolicy::Rebaseline {
            self.initial.clone_from(&self.current);
        }
        debug!(row, col, ?anchor, written, "pattern stamped");
        written
    }

    /// Swap in the freshly computed generation.
    pub(crate) fn commit_step(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(generation = self.generation, "step committed");
    }

    /// Split borrow of the live grid and the scratch buffer.
    pub(crate) fn step_buffers(&mut self) -> (&Grid, &mut Grid) {
        (&self.current, &mut self.scratch)
    }
}

impl Default for Automaton {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self::new(config.width, config.height)
    }
}
