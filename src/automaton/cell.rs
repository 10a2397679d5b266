//! Cell state and the B3/S23 transition rule.

use std::sync::atomic::{AtomicBool, Ordering};

use super::grid::Grid;

/// One grid position with double-buffered state.
///
/// `alive` holds the committed generation and is the only flag neighbors ever
/// read. `pending_alive` receives the next generation during the compute phase
/// and is copied over `alive` in the commit phase. It is atomic so that cells
/// can write it through a shared borrow of the grid while other workers read
/// `alive`; the phase joins in `Grid::advance` order every access, so relaxed
/// loads and stores are enough.
#[derive(Debug)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
    pending_alive: AtomicBool,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize, alive: bool) -> Self {
        Cell {
            x,
            y,
            alive,
            pending_alive: AtomicBool::new(alive),
        }
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    /// Committed state, as seen by neighbors and renderers.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Next-generation state computed by the last compute phase.
    #[inline]
    pub fn pending_alive(&self) -> bool {
        self.pending_alive.load(Ordering::Relaxed)
    }

    /// Compute phase: read the committed neighborhood, write only our own
    /// pending flag.
    #[inline]
    pub(crate) fn evaluate(&self, grid: &Grid) {
        let live_count = grid.live_neighbors(self.x, self.y);
        self.pending_alive
            .store(next_state(self.alive, live_count), Ordering::Relaxed);
    }

    /// Commit phase: publish the pending state.
    #[inline]
    pub(crate) fn commit(&mut self) {
        self.alive = *self.pending_alive.get_mut();
    }

    /// Overwrite both buffers, used when seeding patterns between ticks.
    pub(crate) fn set(&mut self, alive: bool) {
        self.alive = alive;
        *self.pending_alive.get_mut() = alive;
    }
}

/// Conway's rule: birth on exactly 3, survival on 2 or 3.
#[inline]
pub fn next_state(alive: bool, live_count: u8) -> bool {
    matches!((alive, live_count), (true, 2) | (true, 3) | (false, 3))
}
