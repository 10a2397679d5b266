//! Grid construction, toroidal neighbor lookup, and cell access.

use log::{debug, info};
use rand::prelude::*;

use super::cell::Cell;
use crate::config::{validate_grid_params, SimConfig};
use crate::error::{LifeError, Result};

/// A fixed-size toroidal board of cells, stored row-major.
#[derive(Debug)]
pub struct Grid {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) generation: u64,

    /// Rayon thread pool running both phases of `advance`.
    pub(crate) thread_pool: rayon::ThreadPool,
}

impl Grid {
    /// Create a grid whose cells start alive with probability `live_probability`.
    ///
    /// Fails with [`LifeError::InvalidConfig`] if either dimension is zero or
    /// the probability is outside `[0, 1]`. No cells are allocated on failure.
    pub fn new(cols: usize, rows: usize, live_probability: f64, seed: u64) -> Result<Self> {
        Self::with_threads(cols, rows, live_probability, seed, 0)
    }

    /// Same as [`Grid::new`] with an explicit worker count (0 = rayon default).
    pub fn with_threads(
        cols: usize,
        rows: usize,
        live_probability: f64,
        seed: u64,
        threads: usize,
    ) -> Result<Self> {
        validate_grid_params(cols, rows, live_probability)?;
        let size = cols
            .checked_mul(rows)
            .ok_or(LifeError::InvalidConfig("grid dimensions overflow"))?;

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let mut cells = Vec::with_capacity(size);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(Cell::new(x, y, rng.gen::<f64>() < live_probability));
            }
        }

        let grid = Grid {
            cols,
            rows,
            cells,
            generation: 0,
            thread_pool,
        };
        debug!(
            "created {}x{} grid, seed={}, population={}, threads={}",
            cols,
            rows,
            seed,
            grid.population(),
            grid.num_threads()
        );
        Ok(grid)
    }

    /// Build from a config. A missing seed is drawn from OS entropy and logged.
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                info!("no seed configured, using {}", seed);
                seed
            }
        };
        Self::with_threads(
            config.cols,
            config.rows,
            config.live_probability,
            seed,
            config.threads,
        )
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of completed generations.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Calculate the linear index for an in-range coordinate.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    /// Committed state of a cell. Out-of-range coordinates read as dead.
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_alive)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(&self.cells[self.index_of(x, y)])
    }

    /// Set a cell between ticks. Out-of-range coordinates are ignored.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index_of(x, y);
        self.cells[idx].set(alive);
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.set(false);
        }
    }

    /// Wrap `x + dx` onto `[0, cols)` and `y + dy` onto `[0, rows)`.
    #[inline]
    pub fn wrap(&self, x: usize, y: usize, dx: isize, dy: isize) -> (usize, usize) {
        let nx = (x as isize + dx).rem_euclid(self.cols as isize) as usize;
        let ny = (y as isize + dy).rem_euclid(self.rows as isize) as usize;
        (nx, ny)
    }

    /// Committed state of the neighbor at offset `(dx, dy)`, wrapping at edges.
    #[inline]
    pub fn neighbor_alive(&self, x: usize, y: usize, dx: isize, dy: isize) -> bool {
        let (nx, ny) = self.wrap(x, y, dx, dy);
        self.cells[self.index_of(nx, ny)].is_alive()
    }

    /// Count alive neighbors using the Moore neighborhood (8 neighbors).
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 {
                    continue;
                }
                if self.neighbor_alive(x, y, dx, dy) {
                    count += 1;
                }
            }
        }

        count
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every alive cell, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| (c.x(), c.y()))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid(cols: usize, rows: usize) -> Grid {
        Grid::with_threads(cols, rows, 0.0, 0, 1).unwrap()
    }

    #[test]
    fn test_create_grid() {
        let grid = empty_grid(8, 6);
        assert_eq!(grid.dimensions(), (8, 6));
        assert_eq!(grid.cells().len(), 48);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_cells_know_their_position() {
        let grid = empty_grid(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                let cell = grid.cell(x, y).unwrap();
                assert_eq!((cell.x(), cell.y()), (x, y));
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = Grid::new(0, 10, 0.5, 1).unwrap_err();
        assert!(matches!(err, LifeError::InvalidConfig(_)));

        let err = Grid::new(10, 0, 0.5, 1).unwrap_err();
        assert!(matches!(err, LifeError::InvalidConfig(_)));
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        assert!(Grid::new(4, 4, 1.01, 1).is_err());
        assert!(Grid::new(4, 4, -0.5, 1).is_err());
        assert!(Grid::new(4, 4, f64::NAN, 1).is_err());
    }

    #[test]
    fn test_probability_extremes() {
        let dead = Grid::with_threads(16, 16, 0.0, 3, 1).unwrap();
        assert_eq!(dead.population(), 0);

        let full = Grid::with_threads(16, 16, 1.0, 3, 1).unwrap();
        assert_eq!(full.population(), 256);
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = Grid::with_threads(32, 32, 0.15, 99, 1).unwrap();
        let b = Grid::with_threads(32, 32, 0.15, 99, 2).unwrap();
        let cells_a: Vec<_> = a.alive_cells().collect();
        let cells_b: Vec<_> = b.alive_cells().collect();
        assert_eq!(cells_a, cells_b);
        assert!(!cells_a.is_empty());
    }

    #[test]
    fn test_index_of() {
        let grid = empty_grid(4, 3);
        assert_eq!(grid.index_of(0, 0), 0);
        assert_eq!(grid.index_of(3, 2), 11);
        assert_eq!(grid.index_of(1, 0), 1);
        assert_eq!(grid.index_of(0, 1), 4);
    }

    #[test]
    fn test_in_bounds() {
        let grid = empty_grid(4, 4);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 3));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, 4));
    }

    #[test]
    fn test_set_and_query() {
        let mut grid = empty_grid(5, 5);
        grid.set_alive(2, 3, true);
        assert!(grid.is_alive(2, 3));
        assert!(!grid.is_alive(3, 2));

        grid.set_alive(2, 3, false);
        assert!(!grid.is_alive(2, 3));

        // Ignored / dead outside the board
        grid.set_alive(5, 0, true);
        assert!(!grid.is_alive(5, 0));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_neighbor_wraps_corners() {
        let mut grid = empty_grid(10, 10);
        grid.set_alive(9, 9, true);
        assert!(grid.neighbor_alive(0, 0, -1, -1));
        assert!(!grid.neighbor_alive(0, 0, 1, 1));

        grid.clear();
        grid.set_alive(0, 0, true);
        assert!(grid.neighbor_alive(9, 9, 1, 1));
    }

    #[test]
    fn test_wrap() {
        let grid = empty_grid(10, 7);
        assert_eq!(grid.wrap(0, 0, -1, -1), (9, 6));
        assert_eq!(grid.wrap(9, 6, 1, 1), (0, 0));
        assert_eq!(grid.wrap(4, 3, 0, 1), (4, 4));
    }

    #[test]
    fn test_live_neighbors() {
        let mut grid = empty_grid(8, 8);

        // Plus shape around (4, 4)
        grid.set_alive(4, 4, true);
        grid.set_alive(3, 4, true);
        grid.set_alive(5, 4, true);
        grid.set_alive(4, 3, true);
        grid.set_alive(4, 5, true);

        assert_eq!(grid.live_neighbors(4, 4), 4);
        // center plus the two arms it touches diagonally
        assert_eq!(grid.live_neighbors(3, 4), 3);
        assert_eq!(grid.live_neighbors(3, 3), 3);
        assert_eq!(grid.live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_live_neighbors_across_edges() {
        let mut grid = empty_grid(6, 6);
        grid.set_alive(5, 0, true);
        grid.set_alive(0, 5, true);
        grid.set_alive(5, 5, true);
        assert_eq!(grid.live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_tiny_grid_counts_self_through_wrap() {
        // On a 1x1 torus every offset lands on the cell itself
        let mut grid = empty_grid(1, 1);
        grid.set_alive(0, 0, true);
        assert_eq!(grid.live_neighbors(0, 0), 8);
    }
}
