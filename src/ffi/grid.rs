//! Cell access, stepping, and run-state control.

use crate::automaton::{Cell, StepOutcome};
use crate::state::Automaton;

/// Convert ABI coordinates, rejecting negatives.
#[inline]
pub(crate) fn to_coords(row: i32, col: i32) -> Option<(usize, usize)> {
    Some((usize::try_from(row).ok()?, usize::try_from(col).ok()?))
}

#[inline]
fn outcome_code(outcome: StepOutcome) -> u8 {
    u8::from(outcome.is_changed())
}

/// Gets the grid width, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_width(ptr: *const Automaton) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).width() as u32
}

/// Gets the grid height, or 0 if ptr is null.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_height(ptr: *const Automaton) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).height() as u32
}

/// Gets the code of a cell (0 empty, 1 conductor, 2 head, 3 tail).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// 0 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn ww_get_cell(ptr: *const Automaton, row: i32, col: i32) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    to_coords(row, col)
        .and_then(|(row, col)| (*ptr).cell(row, col))
        .map_or(0, Cell::code)
}

/// Sets a cell from its code. Unknown codes are treated as empty.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// 1 if the cell changed, 0 otherwise (including out of bounds).
#[no_mangle]
pub unsafe extern "C" fn ww_set_cell(ptr: *mut Automaton, row: i32, col: i32, code: u8) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    let Some((row, col)) = to_coords(row, col) else {
        return 0;
    };
    u8::from((*ptr).set_cell(row, col, Cell::from_code(code)))
}

/// Drawing-tool toggle: the cell flips between `code` and empty.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// 1 if the cell changed, 0 otherwise.
#[no_mangle]
pub unsafe extern "C" fn ww_paint_cell(ptr: *mut Automaton, row: i32, col: i32, code: u8) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    let Some((row, col)) = to_coords(row, col) else {
        return 0;
    };
    u8::from((*ptr).paint_cell(row, col, Cell::from_code(code)))
}

/// Advances one generation unless paused.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// 1 if the grid changed, 0 otherwise.
#[no_mangle]
pub unsafe extern "C" fn ww_step(ptr: *mut Automaton) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    outcome_code((*ptr).step())
}

/// Advances one generation, ignoring the paused flag.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_force_step(ptr: *mut Automaton) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    outcome_code((*ptr).force_step())
}

/// Pauses, then advances exactly one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_single_step(ptr: *mut Automaton) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    outcome_code((*ptr).single_step())
}

/// Restores the reset snapshot.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_reset(ptr: *mut Automaton) {
    if !ptr.is_null() {
        (*ptr).reset();
    }
}

/// Empties the grid and the reset snapshot.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_clear(ptr: *mut Automaton) {
    if !ptr.is_null() {
        (*ptr).clear();
    }
}

/// Flips the paused flag.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_toggle_pause(ptr: *mut Automaton) {
    if !ptr.is_null() {
        (*ptr).toggle_pause();
    }
}

/// Returns 1 if paused. A null pointer reads as paused.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_is_paused(ptr: *const Automaton) -> u8 {
    if ptr.is_null() {
        return 1;
    }
    u8::from((*ptr).is_paused())
}
