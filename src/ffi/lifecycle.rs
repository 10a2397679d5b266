//! Grid creation, destruction, and generation queries.

use log::warn;

use crate::automaton::Grid;

/// Creates a new grid and returns an opaque pointer.
///
/// `num_threads` of 0 lets rayon size the worker pool.
///
/// # Returns
/// A pointer to a new Grid, or null if the configuration is invalid
/// (zero dimension, probability outside [0, 1]) or the worker pool fails.
///
/// # Safety
/// The returned pointer must eventually be freed with `tl_grid_destroy()`.
#[no_mangle]
pub extern "C" fn tl_grid_create(
    cols: u32,
    rows: u32,
    live_probability: f64,
    seed: u64,
    num_threads: u8,
) -> *mut Grid {
    match Grid::with_threads(
        cols as usize,
        rows as usize,
        live_probability,
        seed,
        num_threads as usize,
    ) {
        Ok(grid) => Box::into_raw(Box::new(grid)),
        Err(err) => {
            warn!("tl_grid_create failed: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Destroys a grid and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `tl_grid_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn tl_grid_destroy(ptr: *mut Grid) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of completed generations.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn tl_grid_generation(ptr: *const Grid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
