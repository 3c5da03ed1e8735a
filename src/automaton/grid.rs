//! Fixed-size 2D cell storage and neighbor counting.

use std::fmt;

use super::cell::Cell;

/// A row-major grid of cells with the origin at the top-left.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-`Empty` grid with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |row| {
            let start = self.index_of(row, 0);
            &self.cells[start..start + self.width]
        })
    }

    /// Calculate the linear index for a (row, col) coordinate.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Read a cell, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index_of(row, col)])
        } else {
            None
        }
    }

    /// Write a cell and return the previous value.
    /// Out-of-bounds writes are ignored and return `None`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Option<Cell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        let idx = self.index_of(row, col);
        Some(std::mem::replace(&mut self.cells[idx], cell))
    }

    /// Reset every cell to `Empty`, keeping the dimensions.
    pub fn fill_empty(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// True when no cell is anything but `Empty`.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == Cell::Empty)
    }

    /// Give this grid the same dimensions as `other`, reusing the allocation.
    /// Cell contents are unspecified afterward.
    pub fn match_dimensions(&mut self, other: &Grid) {
        if self.width != other.width || self.height != other.height {
            self.width = other.width;
            self.height = other.height;
            self.cells.resize(other.cells.len(), Cell::Empty);
        }
    }

    /// Count `Head` cells in the Moore neighborhood (8 neighbors).
    /// Out-of-bounds neighbors don't count; the grid does not wrap.
    pub fn count_head_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                // Skip the center cell
                if dr == 0 && dc == 0 {
                    continue;
                }

                let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    continue;
                };

                if self.get(nr, nc) == Some(Cell::Head) {
                    count += 1;
                }
            }
        }

        count
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                write!(f, "{}", self.cells[self.index_of(row, col)])?;
            }
        }
        Ok(())
    }
}
