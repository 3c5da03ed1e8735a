//! Circuit text loading and serialization.

use std::ffi::{c_char, CStr};

use tracing::warn;

use crate::state::Automaton;

/// Loads circuit text from a NUL-terminated UTF-8 string.
///
/// Blank text clears the grid. Text that is not valid UTF-8 is rejected and
/// the automaton is left unchanged.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
/// - `text` must point to a NUL-terminated string, or be null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on invalid UTF-8.
#[no_mangle]
pub unsafe extern "C" fn ww_load_text(ptr: *mut Automaton, text: *const c_char) -> i32 {
    if ptr.is_null() || text.is_null() {
        return 1;
    }

    match CStr::from_ptr(text).to_str() {
        Ok(text) => {
            (*ptr).load_from_text(text);
            0
        }
        Err(err) => {
            warn!(%err, "rejecting circuit text that is not valid UTF-8");
            2
        }
    }
}

/// Number of bytes `ww_serialize` needs (no NUL terminator).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
#[no_mangle]
pub unsafe extern "C" fn ww_serialized_len(ptr: *const Automaton) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    let automaton = &*ptr;
    // One byte per cell plus a newline between rows
    let (width, height) = (automaton.width(), automaton.height());
    (width * height + height.saturating_sub(1)) as u64
}

/// Writes the serialized grid into `out_buf`. No NUL terminator is written.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Automaton, or null
/// - `out_buf` must point to at least `buf_len` writable bytes
///
/// # Returns
/// Number of bytes written, or 0 on null pointer or short buffer.
#[no_mangle]
pub unsafe extern "C" fn ww_serialize(ptr: *const Automaton, out_buf: *mut u8, buf_len: u64) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let text = (*ptr).serialize();
    if (buf_len as usize) < text.len() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, text.len());
    buf_slice.copy_from_slice(text.as_bytes());
    text.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_load_and_serialize() {
        unsafe {
            let automaton = lifecycle::ww_create(2, 2);
            let text = CString::new("#H\r\nt\r\n").unwrap();

            assert_eq!(ww_load_text(automaton, text.as_ptr()), 0);
            assert_eq!(ww_serialized_len(automaton), 5);

            let mut buf = [0u8; 16];
            let written = ww_serialize(automaton, buf.as_mut_ptr(), buf.len() as u64);
            assert_eq!(written, 5);
            assert_eq!(&buf[..5], b"wh\nt.");

            lifecycle::ww_destroy(automaton);
        }
    }

    #[test]
    fn test_serialize_short_buffer() {
        unsafe {
            let automaton = lifecycle::ww_create(3, 3);
            let mut buf = [0u8; 10];

            assert_eq!(ww_serialized_len(automaton), 11);
            assert_eq!(ww_serialize(automaton, buf.as_mut_ptr(), buf.len() as u64), 0);

            lifecycle::ww_destroy(automaton);
        }
    }

    #[test]
    fn test_invalid_utf8_leaves_state() {
        unsafe {
            let automaton = lifecycle::ww_create(2, 1);
            let good = CString::new("hw").unwrap();
            ww_load_text(automaton, good.as_ptr());

            let bad = CString::new(vec![b'w', 0xff, b'h']).unwrap();
            assert_eq!(ww_load_text(automaton, bad.as_ptr()), 2);
            assert_eq!((*automaton).serialize(), "hw");

            lifecycle::ww_destroy(automaton);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            let automaton = lifecycle::ww_create(2, 2);
            assert_eq!(ww_load_text(automaton, ptr::null()), 1);
            assert_eq!(ww_serialize(automaton, ptr::null_mut(), 16), 0);
            lifecycle::ww_destroy(automaton);

            let text = CString::new("w").unwrap();
            assert_eq!(ww_load_text(ptr::null_mut(), text.as_ptr()), 1);
            assert_eq!(ww_serialized_len(ptr::null()), 0);
        }
    }
}
