//! C FFI layer for host UIs and renderers.
//!
//! This module exports C ABI functions that drive an [`crate::Automaton`]
//! through an opaque pointer. All functions are marked with `#[no_mangle]`
//! and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module and [`crate::Automaton`].
//! These functions are thin wrappers that handle null checks, pointer safety,
//! and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod pattern;
pub mod region;
pub mod text;

pub use grid::{
    ww_clear, ww_force_step, ww_get_cell, ww_height, ww_is_paused, ww_paint_cell, ww_reset,
    ww_set_cell, ww_single_step, ww_step, ww_toggle_pause, ww_width,
};
pub use lifecycle::{ww_create, ww_destroy, ww_get_generation};
pub use pattern::ww_stamp_preset;
pub use region::ww_extract_region;
pub use text::{ww_load_text, ww_serialize, ww_serialized_len};
