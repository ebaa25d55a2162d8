//! Geometry primitives: [`Point`], [`Direction`], [`CellId`] and [`Dims`].
//!
//! Cells are addressed by a linear [`CellId`] in row-major order. [`Dims`]
//! converts between ids and `(column, row)` points.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X is the column (grows right), Y is the row (grows
/// down).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The point one step away in direction `d`.
    #[inline]
    pub const fn step(self, d: Direction) -> Self {
        let delta = d.delta();
        self.shift(delta.x, delta.y)
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal moves.
///
/// [`Direction::ALL`] fixes the neighbour order used by every traversal:
/// up, right, down, left. Ties in the searches resolve in this order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in neighbour order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit offset of this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Right => Point::new(1, 0),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// CellId
// ---------------------------------------------------------------------------

/// Linear, row-major index of a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CellId(pub usize);

impl From<usize> for CellId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

impl From<CellId> for usize {
    fn from(id: CellId) -> Self {
        id.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions in rows and columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: usize,
    pub columns: usize,
}

impl Dims {
    /// Create new dimensions.
    #[inline]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Total number of cells, saturating at `usize::MAX`.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Total number of cells, or `None` if these dimensions cannot back a
    /// grid: the count overflows or a side exceeds the `i32` range of
    /// [`Point`] coordinates.
    pub const fn checked_len(self) -> Option<usize> {
        if self.rows > i32::MAX as usize || self.columns > i32::MAX as usize {
            return None;
        }
        self.rows.checked_mul(self.columns)
    }

    /// Whether the dimensions describe zero cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Whether `id` addresses a cell inside these dimensions.
    #[inline]
    pub const fn contains_id(self, id: CellId) -> bool {
        id.0 < self.len()
    }

    /// Whether `p` lies inside these dimensions.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.columns && (p.y as usize) < self.rows
    }

    /// Convert a point to a cell id. Returns `None` if out of bounds.
    #[inline]
    pub fn id(self, p: Point) -> Option<CellId> {
        if !self.contains(p) {
            return None;
        }
        Some(CellId(p.y as usize * self.columns + p.x as usize))
    }

    /// Convert a cell id to its `(column, row)` point.
    ///
    /// The id is not bounds-checked.
    #[inline]
    pub fn point(self, id: CellId) -> Point {
        let columns = self.columns.max(1);
        Point::new((id.0 % columns) as i32, (id.0 / columns) as i32)
    }

    /// Row-major iterator over every cell id.
    #[inline]
    pub fn ids(self) -> impl Iterator<Item = CellId> {
        (0..self.len()).map(CellId)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.manhattan(b), 4);
        assert_eq!(b.manhattan(a), 4);
    }

    #[test]
    fn direction_order_is_up_right_down_left() {
        let p = Point::new(5, 5);
        let steps: Vec<_> = Direction::ALL.iter().map(|&d| p.step(d)).collect();
        assert_eq!(
            steps,
            vec![
                Point::new(5, 4),
                Point::new(6, 5),
                Point::new(5, 6),
                Point::new(4, 5),
            ]
        );
    }

    #[test]
    fn dims_id_point_conversion() {
        let d = Dims::new(10, 20);
        assert_eq!(d.len(), 200);
        assert_eq!(d.id(Point::new(10, 5)), Some(CellId(110)));
        assert_eq!(d.point(CellId(110)), Point::new(10, 5));
        assert_eq!(d.point(CellId(19)), Point::new(19, 0));
        assert_eq!(d.point(CellId(20)), Point::new(0, 1));
    }

    #[test]
    fn dims_bounds() {
        let d = Dims::new(2, 3);
        assert!(d.contains(Point::new(2, 1)));
        assert!(!d.contains(Point::new(3, 0)));
        assert!(!d.contains(Point::new(0, 2)));
        assert!(!d.contains(Point::new(-1, 0)));
        assert_eq!(d.id(Point::new(0, -1)), None);
        assert!(d.contains_id(CellId(5)));
        assert!(!d.contains_id(CellId(6)));
        assert_eq!(d.ids().count(), 6);
    }

    #[test]
    fn checked_len_rejects_oversized() {
        assert_eq!(Dims::new(10, 20).checked_len(), Some(200));
        assert_eq!(Dims::new(usize::MAX, 2).checked_len(), None);
        assert_eq!(Dims::new(1, i32::MAX as usize + 1).checked_len(), None);
        assert_eq!(Dims::new(usize::MAX, 2).len(), usize::MAX);
    }
}
