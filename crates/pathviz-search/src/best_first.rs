//! Greedy best-first search ranked by Manhattan distance to the end cell.
//!
//! The frontier is a [`PriorityQueue`] where a cell closer to the target
//! outranks a farther one. Cells of equal distance leave the queue in the
//! heap's swap order, so the search is not guaranteed to find a shortest
//! route when several cells tie.

use pathviz_core::{CellId, Dims, Point, RunToken};

use crate::frontier::Sweep;
use crate::heap::{Priority, PriorityQueue};

/// Ranks cells by ascending Manhattan distance to a fixed target.
#[derive(Debug, Clone, Copy)]
pub struct Closer {
    dims: Dims,
    target: Point,
}

impl Closer {
    /// Rank cells of a `dims` grid by their distance to `target`.
    pub fn new(dims: Dims, target: CellId) -> Self {
        Self {
            dims,
            target: dims.point(target),
        }
    }

    /// Manhattan distance from `id` to the target.
    #[inline]
    pub fn distance(&self, id: CellId) -> i32 {
        self.dims.point(id).manhattan(self.target)
    }
}

impl Priority<CellId> for Closer {
    #[inline]
    fn higher(&self, a: &CellId, b: &CellId) -> bool {
        self.distance(*a) < self.distance(*b)
    }
}

/// Best-first traversal over a distance-ranked frontier.
pub type BestFirst = Sweep<PriorityQueue<CellId, Closer>>;

impl BestFirst {
    /// Start a best-first run from `origin` heading for `target`.
    ///
    /// The target is fixed for the lifetime of the run: moving the end cell
    /// mid-run changes when the run stops, not how it ranks cells.
    pub fn new(origin: CellId, token: RunToken, dims: Dims, target: CellId) -> Self {
        let frontier = PriorityQueue::with_priority(Closer::new(dims, target));
        Sweep::with_frontier(origin, token, frontier)
    }
}
