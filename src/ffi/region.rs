//! Region extraction for host renderers.

use crate::automaton;
use crate::state::Automaton;

/// Extracts the cell codes of a rectangular region into a flat output buffer.
///
/// # Layout
/// The region is `[min_row, max_row) x [min_col, max_col)`, clamped to the
/// grid, written in row-major order (row changes slowest, column fastest).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
/// - `out_buf` must point to a buffer with at least
///   `(max_row - min_row) * (max_col - min_col)` bytes
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn ww_extract_region(
    ptr: *const Automaton,
    out_buf: *mut u8,
    min_row: i32,
    min_col: i32,
    max_row: i32,
    max_col: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let min_row = min_row.max(0) as usize;
    let min_col = min_col.max(0) as usize;
    let max_row = max_row.max(0) as usize;
    let max_col = max_col.max(0) as usize;

    let height = max_row.saturating_sub(min_row);
    let width = max_col.saturating_sub(min_col);
    if width == 0 || height == 0 {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, width * height);
    automaton::extract_region((*ptr).grid(), buf_slice, min_row, min_col, max_row, max_col) as u64
}
