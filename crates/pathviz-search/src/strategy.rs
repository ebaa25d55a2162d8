//! Strategy selection and the [`Search`] sum type over all traversals.

use std::fmt;
use std::str::FromStr;

use pathviz_core::{CellId, Grid, RunToken};

use crate::best_first::BestFirst;
use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::traversal::{SearchContext, Step, Traversal};

/// The traversal strategies a run can use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    #[default]
    BreadthFirst,
    DepthFirst,
    BestFirst,
}

impl Strategy {
    /// All strategies in menu order.
    pub const ALL: [Strategy; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::BestFirst];

    /// Human-readable menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth First Search",
            Self::DepthFirst => "Depth First Search",
            Self::BestFirst => "A*",
        }
    }

    /// Short command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::BestFirst => "best-first",
        }
    }

    /// Create a traversal of this kind starting at `origin`.
    ///
    /// Best-first ranks cells by distance to the end cell of `grid` as it
    /// is now.
    pub fn begin(self, origin: CellId, token: RunToken, grid: &Grid) -> Search {
        match self {
            Self::BreadthFirst => Search::BreadthFirst(BreadthFirst::new(origin, token)),
            Self::DepthFirst => Search::DepthFirst(DepthFirst::new(origin, token)),
            Self::BestFirst => {
                Search::BestFirst(BestFirst::new(origin, token, grid.dims(), grid.end()))
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?} (expected bfs, dfs or best-first)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    /// Accepts short names, menu labels, and a few common aliases,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "bfs" | "breadth-first" | "breadth first search" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" | "depth first search" => Ok(Self::DepthFirst),
            "best-first" | "greedy" | "astar" | "a*" => Ok(Self::BestFirst),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// A running traversal of any strategy.
#[derive(Debug)]
pub enum Search {
    BreadthFirst(BreadthFirst),
    DepthFirst(DepthFirst),
    BestFirst(BestFirst),
}

impl Search {
    /// Which strategy this search runs.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::BreadthFirst(_) => Strategy::BreadthFirst,
            Self::DepthFirst(_) => Strategy::DepthFirst,
            Self::BestFirst(_) => Strategy::BestFirst,
        }
    }
}

impl Traversal for Search {
    fn token(&self) -> RunToken {
        match self {
            Self::BreadthFirst(s) => s.token(),
            Self::DepthFirst(s) => s.token(),
            Self::BestFirst(s) => s.token(),
        }
    }

    fn step(&mut self, ctx: &mut SearchContext<'_>) -> Step {
        match self {
            Self::BreadthFirst(s) => s.step(ctx),
            Self::DepthFirst(s) => s.step(ctx),
            Self::BestFirst(s) => s.step(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::Outcome;
    use pathviz_core::Dims;

    #[test]
    fn parse_names_and_labels() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
            assert_eq!(s.label().parse::<Strategy>(), Ok(s));
        }
        assert_eq!(" BFS ".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        let err = "dijkstra".parse::<Strategy>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown strategy \"dijkstra\" (expected bfs, dfs or best-first)"
        );
    }

    #[test]
    fn every_strategy_reaches_an_open_end() {
        for s in Strategy::ALL {
            let mut g = Grid::new(Dims::new(10, 20), CellId(0), CellId(110)).unwrap();
            let mut search = s.begin(g.start(), RunToken::NONE.next(), &g);
            assert_eq!(search.strategy(), s);
            let (visited, outcome) = search.run_to_end(&mut g);
            assert_eq!(outcome, Outcome::Reached, "{s}");
            assert_eq!(visited.last(), Some(&CellId(110)), "{s}");
        }
    }
}
