//! Two-phase generation stepping.
//!
//! Compute phase: every cell reads its neighbors' committed `alive` flags and
//! writes only its own `pending_alive`. Commit phase: every cell copies
//! `pending_alive` over `alive`. Each phase is a rayon fan-out over rows that
//! joins before the next phase starts, so no cell ever counts a neighbor that
//! has already been committed for the same tick.

use log::trace;
use rayon::prelude::*;

use super::grid::Grid;

impl Grid {
    /// Advance every cell by exactly one generation.
    pub fn advance(&mut self) {
        self.compute_pending();
        self.commit_pending();
        self.generation += 1;
        trace!(
            "generation {} population {}",
            self.generation,
            self.population()
        );
    }

    fn compute_pending(&self) {
        let cols = self.cols;
        self.thread_pool.install(|| {
            self.cells.par_chunks(cols).for_each(|row| {
                for cell in row {
                    cell.evaluate(self);
                }
            });
        });
    }

    fn commit_pending(&mut self) {
        let cols = self.cols;
        let cells = &mut self.cells;
        self.thread_pool.install(|| {
            cells.par_chunks_mut(cols).for_each(|row| {
                for cell in row {
                    cell.commit();
                }
            });
        });
    }
}
