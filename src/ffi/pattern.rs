//! Preset stamping.

use tracing::warn;

use crate::automaton::{Anchor, Preset};
use crate::ffi::grid::to_coords;
use crate::state::Automaton;

/// Stamps a built-in preset at (row, col).
///
/// Preset codes: 0 diode, 1 transistor, 2 xor, 3 clock.
/// Anchor codes: 0 centre, 1 top-left.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
///
/// # Returns
/// Number of cells written, or 0 on null pointer, unknown preset, or
/// negative coordinates.
#[no_mangle]
pub unsafe extern "C" fn ww_stamp_preset(
    ptr: *mut Automaton,
    preset: u8,
    row: i32,
    col: i32,
    anchor: u8,
) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    let Some(preset) = Preset::from_code(preset) else {
        warn!(code = preset, "unknown preset code");
        return 0;
    };
    let Some((row, col)) = to_coords(row, col) else {
        return 0;
    };

    (*ptr).stamp(&preset.pattern(), row, col, Anchor::from_code(anchor)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ptr;

    #[test]
    fn test_stamp_preset() {
        unsafe {
            let automaton = lifecycle::ww_create(8, 5);

            assert_eq!(ww_stamp_preset(automaton, 3, 1, 1, 1), 10);
            assert_eq!(
                (*automaton).serialize(),
                "........\n..wwth..\n.w....w.\n..wwww..\n........"
            );

            lifecycle::ww_destroy(automaton);
        }
    }

    #[test]
    fn test_rejected_input() {
        unsafe {
            let automaton = lifecycle::ww_create(8, 8);
            assert_eq!(ww_stamp_preset(automaton, 9, 4, 4, 0), 0);
            assert_eq!(ww_stamp_preset(automaton, 0, -1, 4, 0), 0);
            assert!((*automaton).grid().is_blank());
            lifecycle::ww_destroy(automaton);

            assert_eq!(ww_stamp_preset(ptr::null_mut(), 0, 1, 1, 0), 0);
        }
    }
}
