//! Toroidal Life - Conway's Game of Life on a fixed-size wrapping grid
//!
//! The simulation core is a [`Grid`] of double-buffered [`Cell`]s advanced in
//! two rayon-parallel phases. Rendering is left to the caller, either through
//! the Rust API or the C ABI in [`ffi`].

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;

pub use automaton::{next_state, Cell, Grid};
pub use config::SimConfig;
pub use error::{ConfigError, LifeError};
