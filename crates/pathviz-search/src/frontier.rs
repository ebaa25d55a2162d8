//! Frontier-driven traversal shared by breadth-first and best-first search.
//!
//! Both strategies enqueue every in-bounds neighbour blindly and filter
//! walls and visited cells when the cell leaves the frontier, so a wall
//! placed on a queued cell mid-run is honoured. They differ only in the
//! order their [`Frontier`] releases cells.

use std::collections::VecDeque;

use pathviz_core::{CellId, RunToken};

use crate::heap::{Priority, PriorityQueue};
use crate::traversal::{Outcome, SearchContext, Step, Traversal};

/// Container of cells waiting to be considered.
pub trait Frontier {
    fn push(&mut self, id: CellId);
    fn pop(&mut self) -> Option<CellId>;
    fn is_empty(&self) -> bool;
}

impl Frontier for VecDeque<CellId> {
    #[inline]
    fn push(&mut self, id: CellId) {
        self.push_back(id);
    }

    #[inline]
    fn pop(&mut self) -> Option<CellId> {
        self.pop_front()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<P: Priority<CellId>> Frontier for PriorityQueue<CellId, P> {
    #[inline]
    fn push(&mut self, id: CellId) {
        PriorityQueue::push(self, id);
    }

    #[inline]
    fn pop(&mut self) -> Option<CellId> {
        PriorityQueue::pop(self).ok()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }
}

/// A traversal that repeatedly takes one cell from its frontier, accepts it
/// if open, and pushes its neighbours.
#[derive(Debug)]
pub struct Sweep<F> {
    token: RunToken,
    origin: CellId,
    frontier: F,
}

impl<F: Frontier> Sweep<F> {
    /// Start a sweep from `origin`, seeding `frontier` with it.
    pub fn with_frontier(origin: CellId, token: RunToken, mut frontier: F) -> Self {
        frontier.push(origin);
        Self {
            token,
            origin,
            frontier,
        }
    }

    /// The cell the sweep started from.
    pub fn origin(&self) -> CellId {
        self.origin
    }
}

impl<F: Frontier> Traversal for Sweep<F> {
    fn token(&self) -> RunToken {
        self.token
    }

    fn step(&mut self, ctx: &mut SearchContext<'_>) -> Step {
        loop {
            if !ctx.is_current(self.token) {
                return Step::Finished(Outcome::Superseded);
            }
            if ctx.grid.end_visited() {
                return Step::Finished(Outcome::Reached);
            }
            if self.frontier.is_empty() {
                return Step::Finished(Outcome::Exhausted);
            }
            let Some(id) = self.frontier.pop() else {
                return Step::Finished(Outcome::Exhausted);
            };
            if !ctx.grid.at(id).is_open() {
                continue;
            }

            let accepted = id != self.origin && ctx.grid.mark_visited(id);
            if accepted {
                log::trace!("{} accepted {id}", self.token);
            }

            if ctx.grid.is_end(id) {
                // The end is only ever left unaccepted when it sits on the
                // origin; there is nothing further to explore.
                return if accepted {
                    Step::Suspended(Some(id))
                } else {
                    Step::Finished(Outcome::Exhausted)
                };
            }
            for n in ctx.grid.neighbors(id) {
                self.frontier.push(n);
            }
            if accepted {
                return Step::Suspended(Some(id));
            }
        }
    }
}
