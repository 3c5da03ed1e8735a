//! Region extraction for renderers.

use super::grid::Grid;

/// Copy the cell codes of a rectangular region into a flat buffer.
///
/// The region is the half-open rectangle `[min_row, max_row) x [min_col, max_col)`,
/// clamped to the grid. The buffer is filled in row-major order (row changes
/// slowest, column fastest) with [`super::Cell::code`] values.
///
/// # Returns
/// Number of bytes written, or 0 for an empty region or a short buffer.
pub fn extract_region(
    grid: &Grid,
    out_buf: &mut [u8],
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
) -> usize {
    // Clamp coordinates to grid bounds
    let max_row = max_row.min(grid.height());
    let max_col = max_col.min(grid.width());

    if min_row >= max_row || min_col >= max_col {
        return 0;
    }

    let total_size = (max_row - min_row) * (max_col - min_col);
    if out_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for row in min_row..max_row {
        let start = grid.index_of(row, min_col);
        let end = grid.index_of(row, max_col);
        for cell in &grid.cells()[start..end] {
            out_buf[offset] = cell.code();
            offset += 1;
        }
    }

    offset
}
