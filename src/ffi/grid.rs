//! Cell access, dimensions, and stepping.

use crate::automaton::Grid;

/// Sets a cell to alive (non-zero) or dead (0) between ticks.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn tl_grid_set_alive(ptr: *mut Grid, x: i32, y: i32, alive: u8) {
    if ptr.is_null() || x < 0 || y < 0 {
        return;
    }

    let grid = &mut *ptr;
    grid.set_alive(x as usize, y as usize, alive != 0);
}

/// Gets the committed state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn tl_grid_is_alive(ptr: *const Grid, x: i32, y: i32) -> u8 {
    if ptr.is_null() || x < 0 || y < 0 {
        return 0;
    }

    let grid = &*ptr;
    grid.is_alive(x as usize, y as usize) as u8
}

/// Writes the grid dimensions into `out_cols` and `out_rows`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
/// - `out_cols` and `out_rows` must be valid for writes, or null
///
/// # Returns
/// 0 on success, 1 on failure (null pointer)
#[no_mangle]
pub unsafe extern "C" fn tl_grid_dimensions(
    ptr: *const Grid,
    out_cols: *mut u32,
    out_rows: *mut u32,
) -> i32 {
    if ptr.is_null() || out_cols.is_null() || out_rows.is_null() {
        return 1;
    }

    let (cols, rows) = (*ptr).dimensions();
    *out_cols = cols as u32;
    *out_rows = rows as u32;
    0
}

/// Counts alive cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn tl_grid_population(ptr: *const Grid) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).population() as u64
}

/// Advances the grid by one generation.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Grid, or null
#[no_mangle]
pub unsafe extern "C" fn tl_grid_advance(ptr: *mut Grid) {
    if ptr.is_null() {
        return;
    }

    let grid = &mut *ptr;
    grid.advance();
}
