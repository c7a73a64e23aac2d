//! Diagnostics derived from a rendered grid

use crate::grid::{GRID_COLS, Grid};
use crate::raster::GLYPH_PITCH;

/// Longest word guaranteed to fit on the grid without clipping
pub const MAX_UNCLIPPED_CHARS: usize = GRID_COLS / GLYPH_PITCH;

/// Lit-pixel count and the long-word warning for one rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub lit_count: usize,
    /// Word has more characters than fit at a six-column pitch. This is a
    /// length heuristic and is set whether or not clipping happened.
    pub overflow_warning: bool,
    pub char_count: usize,
}

/// Summarize a grid rendered from `word`
pub fn summarize(word: &str, grid: &Grid) -> Summary {
    let char_count = word.chars().count();
    Summary {
        lit_count: grid.lit_count(),
        overflow_warning: char_count > MAX_UNCLIPPED_CHARS,
        char_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_characters_fit() {
        assert_eq!(MAX_UNCLIPPED_CHARS, 8);
        let summary = summarize("ABCDEFGH", &Grid::new());
        assert!(!summary.overflow_warning);
        assert_eq!(summary.char_count, 8);
        assert_eq!(summary.lit_count, 0);
    }

    #[test]
    fn long_sentence_warns() {
        let word = "THISISAVERYLONGSENTENCEWORD";
        let summary = summarize(word, &Grid::new());
        assert_eq!(summary.char_count, 27);
        assert!(summary.overflow_warning);
    }

    #[test]
    fn warning_ignores_actual_clipping() {
        // only the character count matters, not what was drawn
        let mut grid = Grid::new();
        grid.set(0, 0, true);
        grid.set(6, 51, true);
        let summary = summarize(".........", &grid);
        assert!(summary.overflow_warning);
        assert_eq!(summary.lit_count, 2);
    }
}
