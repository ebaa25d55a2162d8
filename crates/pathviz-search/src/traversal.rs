use std::fmt;

use pathviz_core::{CellId, Grid, RunToken};

/// How a traversal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The end cell was visited.
    Reached,
    /// The frontier ran dry without visiting the end cell.
    Exhausted,
    /// A newer run took over before this one finished.
    Superseded,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reached => "reached",
            Self::Exhausted => "exhausted",
            Self::Superseded => "superseded",
        })
    }
}

/// Result of advancing a traversal to its next suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The traversal paused. Carries the cell accepted just before pausing,
    /// if any.
    Suspended(Option<CellId>),
    /// The traversal is over and will not touch the grid again.
    Finished(Outcome),
}

/// What a traversal sees while it runs: the live grid and the token of the
/// currently authoritative run.
pub struct SearchContext<'a> {
    pub grid: &'a mut Grid,
    pub current: RunToken,
}

impl SearchContext<'_> {
    /// Whether a run holding `token` is still authoritative.
    #[inline]
    pub fn is_current(&self, token: RunToken) -> bool {
        self.current == token
    }
}

/// A resumable grid traversal.
///
/// Each call to [`step`](Traversal::step) runs until the next suspension
/// point. Implementations compare their token against
/// [`SearchContext::current`] before every grid mutation and finish with
/// [`Outcome::Superseded`] on mismatch.
pub trait Traversal {
    /// The token captured when the run started.
    fn token(&self) -> RunToken;

    /// Advance to the next suspension point.
    fn step(&mut self, ctx: &mut SearchContext<'_>) -> Step;

    /// Step without pausing until the traversal finishes, treating this
    /// run as authoritative throughout. Returns the accepted cells in order.
    fn run_to_end(&mut self, grid: &mut Grid) -> (Vec<CellId>, Outcome) {
        let mut ctx = SearchContext {
            grid,
            current: self.token(),
        };
        let mut visited = Vec::new();
        loop {
            match self.step(&mut ctx) {
                Step::Suspended(Some(id)) => visited.push(id),
                Step::Suspended(None) => {}
                Step::Finished(outcome) => return (visited, outcome),
            }
        }
    }
}
