//! Core automaton logic.
//!
//! This module contains the grid data model, the per-cell transition rule,
//! toroidal neighbor lookup, and two-phase stepping.
//! The FFI layer in `ffi/` calls into these types.

pub mod cell;
pub mod grid;
pub mod stepping;

pub use cell::{next_state, Cell};
pub use grid::Grid;
