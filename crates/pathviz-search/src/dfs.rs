//! Depth-first traversal with an explicit frame stack.
//!
//! The traversal behaves like the recursive formulation: entering a cell
//! returns immediately if the cell is visited, the run is stale, or the end
//! has been visited; otherwise the cell is accepted and its neighbours are
//! entered one by one. A neighbour is skipped up front only when it is the
//! start or a wall; whether it is visited is left to the entry check, so a
//! cell may be queued for entry several times before it is marked.

use pathviz_core::{CellId, Direction, RunToken};

use crate::traversal::{Outcome, SearchContext, Step, Traversal};

/// A cell whose neighbours are being entered.
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: CellId,
    /// Index into [`Direction::ALL`] of the next neighbour to try.
    next: usize,
}

/// Depth-first traversal.
#[derive(Debug)]
pub struct DepthFirst {
    token: RunToken,
    stack: Vec<Frame>,
    /// Cell to enter on the next step, before resuming the top frame.
    entering: Option<CellId>,
    /// Number of entry attempts, including ones rejected on entry.
    entries: usize,
}

impl DepthFirst {
    /// Start a depth-first run from `origin`.
    pub fn new(origin: CellId, token: RunToken) -> Self {
        Self {
            token,
            stack: Vec::new(),
            entering: Some(origin),
            entries: 0,
        }
    }

    /// How many times a cell has been entered so far, counting entries that
    /// returned immediately.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Next cell to enter, resuming the deepest frame with neighbours left.
    fn next_entry(&mut self, ctx: &SearchContext<'_>) -> Option<CellId> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(&dir) = Direction::ALL.get(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;
            let Some(n) = ctx.grid.neighbor(frame.cell, dir) else {
                continue;
            };
            if ctx.grid.is_start(n) || ctx.grid.is_blocked(n) {
                continue;
            }
            return Some(n);
        }
    }
}

impl Traversal for DepthFirst {
    fn token(&self) -> RunToken {
        self.token
    }

    fn step(&mut self, ctx: &mut SearchContext<'_>) -> Step {
        loop {
            if !ctx.is_current(self.token) {
                // Every pending entry would return at its own token check.
                self.stack.clear();
                self.entering = None;
                return Step::Finished(Outcome::Superseded);
            }
            let Some(id) = self.entering.take().or_else(|| self.next_entry(ctx)) else {
                let outcome = if ctx.grid.end_visited() {
                    Outcome::Reached
                } else {
                    Outcome::Exhausted
                };
                return Step::Finished(outcome);
            };
            self.entries += 1;

            if ctx.grid.end_visited() {
                self.stack.clear();
                return Step::Finished(Outcome::Reached);
            }
            if ctx.grid.is_visited(id) {
                continue;
            }

            let accepted = ctx.grid.mark_visited(id);
            if accepted {
                log::trace!("{} accepted {id}", self.token);
            }
            self.stack.push(Frame { cell: id, next: 0 });
            return Step::Suspended(accepted.then_some(id));
        }
    }
}
