//! Text frames of a grid snapshot.

use pathviz_core::Grid;

/// Render `grid` as a bordered block of glyphs, one line per row.
pub fn frame(grid: &Grid) -> String {
    let dims = grid.dims();
    let border: String = std::iter::once('+')
        .chain(std::iter::repeat_n('-', dims.columns))
        .chain(std::iter::once('+'))
        .collect();

    let mut out = String::with_capacity((dims.columns + 3) * (dims.rows + 2));
    out.push_str(&border);
    out.push('\n');
    for row in 0..dims.rows {
        out.push('|');
        out.extend(grid.row(row).map(|c| c.glyph()));
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push('\n');
    out
}

/// One-line legend and counters shown under a frame.
pub fn legend(grid: &Grid) -> String {
    let walls = grid.iter().filter(|(_, c)| c.wall).count();
    format!(
        "S start {}  E end {}  # walls {walls}  . visited {}",
        grid.point(grid.start()),
        grid.point(grid.end()),
        grid.visited_count()
    )
}
