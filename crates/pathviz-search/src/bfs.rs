use std::collections::VecDeque;

use pathviz_core::{CellId, RunToken};

use crate::frontier::Sweep;

/// Breadth-first traversal: a FIFO frontier seeded with the origin.
pub type BreadthFirst = Sweep<VecDeque<CellId>>;

impl BreadthFirst {
    /// Start a breadth-first run from `origin`.
    pub fn new(origin: CellId, token: RunToken) -> Self {
        Sweep::with_frontier(origin, token, VecDeque::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::{Outcome, SearchContext, Step, Traversal};
    use pathviz_core::{Dims, Grid};

    fn open_grid() -> Grid {
        Grid::new(Dims::new(10, 20), CellId(0), CellId(110)).unwrap()
    }

    #[test]
    fn open_grid_visits_in_distance_order() {
        let mut g = open_grid();
        let mut bfs = BreadthFirst::new(CellId(0), RunToken::NONE.next());
        let (visited, outcome) = bfs.run_to_end(&mut g);
        assert_eq!(outcome, Outcome::Reached);
        assert_eq!(visited.last(), Some(&CellId(110)));

        let start = g.point(CellId(0));
        let dists: Vec<i32> = visited
            .iter()
            .map(|&id| g.point(id).manhattan(start))
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(dists[0], 1);
        assert_eq!(*dists.last().unwrap(), 15);

        // Every cell at distance < 15 from the corner comes before the end,
        // followed by part of the distance-15 layer.
        let closer = g
            .iter()
            .filter(|&(id, _)| id != CellId(0) && g.point(id).manhattan(start) < 15)
            .count();
        assert!(visited.len() > closer);
        assert_eq!(visited.len(), 110);
        assert_eq!(g.visited_count(), visited.len());
    }

    #[test]
    fn open_grid_is_reproducible() {
        let run = || {
            let mut g = open_grid();
            BreadthFirst::new(CellId(0), RunToken::NONE.next())
                .run_to_end(&mut g)
                .0
        };
        let a = run();
        assert_eq!(a, run());
        // First layer follows neighbour order: right, then down.
        assert_eq!(&a[..2], &[CellId(1), CellId(20)]);
    }

    #[test]
    fn start_is_never_reported() {
        let mut g = open_grid();
        let (visited, _) =
            BreadthFirst::new(CellId(0), RunToken::NONE.next()).run_to_end(&mut g);
        assert!(!visited.contains(&CellId(0)));
        assert!(!g.is_visited(CellId(0)));
    }

    #[test]
    fn walled_off_end_exhausts() {
        let mut g = open_grid();
        for id in g.neighbors(CellId(110)).collect::<Vec<_>>() {
            g.toggle_wall(id);
        }
        let (visited, outcome) =
            BreadthFirst::new(CellId(0), RunToken::NONE.next()).run_to_end(&mut g);
        assert_eq!(outcome, Outcome::Exhausted);
        // All cells except start, end, and the four walls.
        assert_eq!(visited.len(), 200 - 6);
        assert!(!g.end_visited());
    }

    #[test]
    fn wall_placed_on_queued_cell_is_honoured() {
        let mut g = open_grid();
        let token = RunToken::NONE.next();
        let mut bfs = BreadthFirst::new(CellId(0), token);
        let mut ctx = SearchContext {
            grid: &mut g,
            current: token,
        };
        // First step accepts cell 1 and queues its neighbours, including 2.
        assert_eq!(bfs.step(&mut ctx), Step::Suspended(Some(CellId(1))));
        ctx.grid.toggle_wall(CellId(2));
        let mut rest = Vec::new();
        while let Step::Suspended(Some(id)) = bfs.step(&mut ctx) {
            rest.push(id);
        }
        assert!(!rest.contains(&CellId(2)));
        assert!(g.is_blocked(CellId(2)));
    }

    #[test]
    fn stale_token_stops_without_mutation() {
        let mut g = open_grid();
        let token = RunToken::NONE.next();
        let mut bfs = BreadthFirst::new(CellId(0), token);
        let mut ctx = SearchContext {
            grid: &mut g,
            current: token,
        };
        assert!(matches!(bfs.step(&mut ctx), Step::Suspended(Some(_))));
        let before = ctx.grid.visited_count();
        ctx.current = token.next();
        assert_eq!(bfs.step(&mut ctx), Step::Finished(Outcome::Superseded));
        assert_eq!(g.visited_count(), before);
    }
}
