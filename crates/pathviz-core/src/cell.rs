//! Per-location state flags.

/// State of a single grid location.
///
/// A cell is a wall, visited, or neither. Endpoints are never walls and the
/// start is never visited; [`Grid`](crate::Grid) maintains these rules.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub wall: bool,
    pub visited: bool,
    pub start: bool,
    pub end: bool,
}

impl Cell {
    /// Whether the cell is the start or the end.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        self.start || self.end
    }

    /// Whether a traversal may accept this cell: neither wall nor visited.
    #[inline]
    pub const fn is_open(self) -> bool {
        !self.wall && !self.visited
    }

    /// Single-character glyph used by text renderers.
    pub const fn glyph(self) -> char {
        if self.start {
            'S'
        } else if self.end {
            'E'
        } else if self.wall {
            '#'
        } else if self.visited {
            '.'
        } else {
            ' '
        }
    }
}
