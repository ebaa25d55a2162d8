//! Visitation events and their consumers.

use pathviz_core::{CellId, RunToken};

/// One accepted cell, in the order the engine accepted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    pub run: RunToken,
    pub cell: CellId,
}

/// Receives visitation events.
pub trait VisitSink {
    fn cell_visited(&mut self, visit: Visit);
}

impl VisitSink for Vec<Visit> {
    fn cell_visited(&mut self, visit: Visit) {
        self.push(visit);
    }
}

/// Adapts a closure into a [`VisitSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(Visit)> VisitSink for FnSink<F> {
    fn cell_visited(&mut self, visit: Visit) {
        (self.0)(visit);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl VisitSink for Discard {
    fn cell_visited(&mut self, _visit: Visit) {}
}
