//! A fixed-size matrix of [`Cell`]s with one start and one end.
//!
//! Queries taking a [`CellId`] are lenient: an out-of-range id reads as a
//! default cell and mutations on it are no-ops, so traversals never have to
//! handle errors. Callers at the command boundary validate ids first with
//! [`Grid::check`].

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{CellId, Dims, Direction, Point};

/// A `rows × columns` matrix of [`Cell`]s.
///
/// Exactly one cell is the start and exactly one is the end. They never
/// coincide, neither is ever a wall, and the start is never visited.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    dims: Dims,
    cells: Vec<Cell>,
    start: CellId,
    end: CellId,
}

impl Grid {
    /// Create an open grid with the given endpoints.
    pub fn new(dims: Dims, start: CellId, end: CellId) -> Result<Self, GridError> {
        if dims.is_empty() {
            return Err(GridError::EmptyDims(dims));
        }
        let Some(len) = dims.checked_len() else {
            return Err(GridError::TooLarge(dims));
        };
        for id in [start, end] {
            if !dims.contains_id(id) {
                return Err(GridError::InvalidCell { id, len });
            }
        }
        if start == end {
            return Err(GridError::SameEndpoints(start));
        }
        let mut cells = vec![Cell::default(); len];
        cells[start.0].start = true;
        cells[end.0].end = true;
        Ok(Self {
            dims,
            cells,
            start,
            end,
        })
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid holds at least one row and column.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> CellId {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> CellId {
        self.end
    }

    /// `(column, row)` of `id`.
    #[inline]
    pub fn point(&self, id: CellId) -> Point {
        self.dims.point(id)
    }

    /// Validate `id` against the grid size.
    pub fn check(&self, id: CellId) -> Result<CellId, GridError> {
        if self.dims.contains_id(id) {
            Ok(id)
        } else {
            Err(GridError::InvalidCell {
                id,
                len: self.len(),
            })
        }
    }

    /// Read the cell at `id`. Returns `Cell::default()` if out of range.
    #[inline]
    pub fn at(&self, id: CellId) -> Cell {
        self.cells.get(id.0).copied().unwrap_or_default()
    }

    /// Whether `id` is a wall.
    #[inline]
    pub fn is_blocked(&self, id: CellId) -> bool {
        self.at(id).wall
    }

    /// Whether `id` has been visited by the current run.
    #[inline]
    pub fn is_visited(&self, id: CellId) -> bool {
        self.at(id).visited
    }

    /// Whether `id` is the start cell.
    #[inline]
    pub fn is_start(&self, id: CellId) -> bool {
        id == self.start
    }

    /// Whether `id` is the end cell.
    #[inline]
    pub fn is_end(&self, id: CellId) -> bool {
        id == self.end
    }

    /// Whether the end cell has been visited.
    #[inline]
    pub fn end_visited(&self) -> bool {
        self.is_visited(self.end)
    }

    /// The cell one step from `id` in direction `d`, if inside the grid.
    #[inline]
    pub fn neighbor(&self, id: CellId, d: Direction) -> Option<CellId> {
        if !self.dims.contains_id(id) {
            return None;
        }
        self.dims.id(self.point(id).step(d))
    }

    /// The in-bounds orthogonal neighbours of `id`, in [`Direction::ALL`]
    /// order (up, right, down, left).
    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(id, d))
    }

    /// Mark `id` visited. Returns whether the flag was newly set.
    ///
    /// The start cell is never marked, and neither is a wall.
    pub fn mark_visited(&mut self, id: CellId) -> bool {
        if self.is_start(id) {
            return false;
        }
        match self.cells.get_mut(id.0) {
            Some(c) if !c.wall && !c.visited => {
                c.visited = true;
                true
            }
            _ => false,
        }
    }

    /// Clear every visited flag. Walls and endpoints are untouched.
    pub fn reset(&mut self) {
        for c in &mut self.cells {
            c.visited = false;
        }
    }

    /// Toggle a wall on `id`. Returns whether the grid changed.
    ///
    /// The start and end cells reject walls. Placing a wall clears the
    /// visited flag.
    pub fn toggle_wall(&mut self, id: CellId) -> bool {
        match self.cells.get_mut(id.0) {
            Some(c) if !c.is_endpoint() => {
                c.wall = !c.wall;
                c.visited = false;
                true
            }
            _ => false,
        }
    }

    /// Move the start to `id`. Returns whether the grid changed.
    ///
    /// Walls and the end cell are rejected.
    pub fn relocate_start(&mut self, id: CellId) -> bool {
        if !self.can_host_endpoint(id) || id == self.end {
            return false;
        }
        self.cells[self.start.0].start = false;
        let c = &mut self.cells[id.0];
        c.start = true;
        c.visited = false;
        self.start = id;
        true
    }

    /// Move the end to `id`. Returns whether the grid changed.
    ///
    /// Walls and the start cell are rejected.
    pub fn relocate_end(&mut self, id: CellId) -> bool {
        if !self.can_host_endpoint(id) || id == self.start {
            return false;
        }
        self.cells[self.end.0].end = false;
        let c = &mut self.cells[id.0];
        c.end = true;
        c.visited = false;
        self.end = id;
        true
    }

    fn can_host_endpoint(&self, id: CellId) -> bool {
        self.dims.contains_id(id) && !self.is_blocked(id)
    }

    /// Number of visited cells.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// Row-major iterator over `(CellId, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, &c)| (CellId(i), c))
    }

    /// Iterator over the cells of row `row`, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let columns = self.dims.columns;
        self.cells
            .iter()
            .skip(row * columns)
            .take(if row < self.dims.rows { columns } else { 0 })
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(Dims::new(10, 20), CellId(0), CellId(110)).unwrap()
    }

    #[test]
    fn new_sets_endpoints() {
        let g = grid();
        assert_eq!(g.len(), 200);
        assert!(g.at(CellId(0)).start);
        assert!(g.at(CellId(110)).end);
        assert_eq!(g.iter().filter(|(_, c)| c.start).count(), 1);
        assert_eq!(g.iter().filter(|(_, c)| c.end).count(), 1);
    }

    #[test]
    fn new_rejects_bad_endpoints() {
        let d = Dims::new(2, 2);
        assert_eq!(
            Grid::new(d, CellId(1), CellId(1)),
            Err(GridError::SameEndpoints(CellId(1)))
        );
        assert_eq!(
            Grid::new(d, CellId(0), CellId(4)),
            Err(GridError::InvalidCell {
                id: CellId(4),
                len: 4
            })
        );
        assert!(matches!(
            Grid::new(Dims::new(0, 5), CellId(0), CellId(1)),
            Err(GridError::EmptyDims(_))
        ));
        let huge = Dims::new(usize::MAX, 2);
        assert_eq!(
            Grid::new(huge, CellId(0), CellId(1)),
            Err(GridError::TooLarge(huge))
        );
    }

    #[test]
    fn check_bounds() {
        let g = grid();
        assert_eq!(g.check(CellId(199)), Ok(CellId(199)));
        assert!(g.check(CellId(200)).is_err());
        // Lenient reads outside the grid.
        assert_eq!(g.at(CellId(500)), Cell::default());
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let g = grid();
        // Interior cell at row 5, col 10.
        let n: Vec<_> = g.neighbors(CellId(110)).collect();
        assert_eq!(n, vec![CellId(90), CellId(111), CellId(130), CellId(109)]);
        // Top-left corner only has right and down.
        let n: Vec<_> = g.neighbors(CellId(0)).collect();
        assert_eq!(n, vec![CellId(1), CellId(20)]);
        // Right edge never wraps to the next row.
        let n: Vec<_> = g.neighbors(CellId(19)).collect();
        assert_eq!(n, vec![CellId(39), CellId(18)]);
        // Bottom-right corner.
        let n: Vec<_> = g.neighbors(CellId(199)).collect();
        assert_eq!(n, vec![CellId(179), CellId(198)]);
    }

    #[test]
    fn mark_visited_skips_start() {
        let mut g = grid();
        assert!(!g.mark_visited(CellId(0)));
        assert!(!g.is_visited(CellId(0)));
        assert!(g.mark_visited(CellId(5)));
        assert!(!g.mark_visited(CellId(5)));
        assert!(g.is_visited(CellId(5)));
    }

    #[test]
    fn reset_preserves_walls_and_endpoints() {
        let mut g = grid();
        g.toggle_wall(CellId(3));
        g.toggle_wall(CellId(44));
        for id in [1, 2, 21, 22, 110] {
            g.mark_visited(CellId(id));
        }
        let before: Vec<_> = g.iter().map(|(_, c)| (c.wall, c.start, c.end)).collect();
        g.reset();
        assert_eq!(g.visited_count(), 0);
        let after: Vec<_> = g.iter().map(|(_, c)| (c.wall, c.start, c.end)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_wall_rejects_endpoints() {
        let mut g = grid();
        assert!(!g.toggle_wall(CellId(0)));
        assert!(!g.toggle_wall(CellId(110)));
        assert!(g.toggle_wall(CellId(7)));
        assert!(g.is_blocked(CellId(7)));
        assert!(g.toggle_wall(CellId(7)));
        assert!(!g.is_blocked(CellId(7)));
    }

    #[test]
    fn wall_clears_visited() {
        let mut g = grid();
        g.mark_visited(CellId(9));
        g.toggle_wall(CellId(9));
        let c = g.at(CellId(9));
        assert!(c.wall && !c.visited);
        assert!(!g.mark_visited(CellId(9)));
    }

    #[test]
    fn relocate_endpoints() {
        let mut g = grid();
        g.toggle_wall(CellId(50));
        assert!(!g.relocate_end(CellId(50)));
        assert!(!g.relocate_end(CellId(0)));
        assert!(!g.relocate_end(CellId(999)));
        assert_eq!(g.end(), CellId(110));

        g.mark_visited(CellId(60));
        assert!(g.relocate_end(CellId(60)));
        assert_eq!(g.end(), CellId(60));
        assert!(!g.at(CellId(110)).end);
        assert!(g.at(CellId(60)).end);
        assert!(!g.end_visited());

        assert!(!g.relocate_start(CellId(60)));
        assert!(!g.relocate_start(CellId(50)));
        assert!(g.relocate_start(CellId(61)));
        assert_eq!(g.start(), CellId(61));
        assert!(!g.at(CellId(0)).start);
    }

    #[test]
    fn rows_iterate_left_to_right() {
        let g = Grid::new(Dims::new(2, 3), CellId(0), CellId(5)).unwrap();
        let glyphs: String = g.row(1).map(Cell::glyph).collect();
        assert_eq!(glyphs, "  E");
        assert_eq!(g.row(2).count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_flags() {
        let mut g = Grid::new(Dims::new(1, 3), CellId(0), CellId(2)).unwrap();
        g.toggle_wall(CellId(1));
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["start"], 0);
        assert_eq!(json["end"], 2);
        assert_eq!(json["cells"][1]["wall"], true);
        assert_eq!(json["dims"]["columns"], 3);
    }
}
