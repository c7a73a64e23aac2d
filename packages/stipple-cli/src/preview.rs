//! Console rendering of a grid

use std::fmt::Write;

use stipple::Summary;
use stipple::constants::GRID_COLS;
use stipple::grid::Grid;

const INDENT: &str = "  ";
const LIT: char = '█';
const UNLIT: char = ' ';

/// The grid inside a box-drawn frame, one line per weekday, newline terminated
pub fn render_box(grid: &Grid) -> String {
    let bar = "─".repeat(GRID_COLS);
    let mut out = String::new();

    let _ = writeln!(out, "{INDENT}┌{bar}┐");
    for row in grid.to_row_strings() {
        let cells: String = row
            .chars()
            .map(|cell| if cell == '1' { LIT } else { UNLIT })
            .collect();
        let _ = writeln!(out, "{INDENT}│{cells}│");
    }
    let _ = writeln!(out, "{INDENT}└{bar}┘");

    out
}

/// The line printed under a preview
pub fn summary_line(word: &str, summary: &Summary) -> String {
    if summary.overflow_warning {
        format!(
            "{INDENT}warning: '{}' is long ({} chars), some letters may be clipped!",
            word, summary.char_count
        )
    } else {
        format!("{INDENT}({} active pixels)", summary.lit_count)
    }
}
