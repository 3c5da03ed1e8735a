//! Automaton creation, destruction, and generation queries.

use std::ptr;

use tracing::warn;

use crate::config::MAX_DIMENSION;
use crate::state::Automaton;

/// Creates a new automaton with an all-empty grid and returns an opaque pointer.
/// Negative dimensions are treated as 0.
///
/// # Returns
/// A pointer to a new Automaton, or null if either dimension exceeds
/// `MAX_DIMENSION`.
///
/// # Safety
/// The returned pointer must eventually be freed with `ww_destroy()`.
#[no_mangle]
pub extern "C" fn ww_create(width: i32, height: i32) -> *mut Automaton {
    let width = width.max(0) as usize;
    let height = height.max(0) as usize;
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        warn!(width, height, max = MAX_DIMENSION, "refusing oversized grid");
        return ptr::null_mut();
    }
    Box::into_raw(Box::new(Automaton::new(width, height)))
}

/// Destroys an automaton and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ww_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ww_destroy(ptr: *mut Automaton) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the current generation counter.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ww_get_generation(ptr: *const Automaton) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
