//! C FFI layer for external renderers.
//!
//! This module exports C ABI functions so a renderer in any language can drive
//! the simulation through an opaque `Grid` handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;

pub use grid::{
    tl_grid_advance, tl_grid_dimensions, tl_grid_is_alive, tl_grid_population,
    tl_grid_set_alive,
};
pub use lifecycle::{tl_grid_create, tl_grid_destroy, tl_grid_generation};
