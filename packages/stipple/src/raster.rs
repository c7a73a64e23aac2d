//! Word rasterization onto the heatmap grid
//!
//! Glyphs are laid out left to right with one blank column between
//! neighbours, then the whole strip is placed on the grid. Columns that land
//! past the right edge are dropped without complaint; the length heuristic in
//! [`crate::report`] is what warns about long words.

use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH, GlyphTable};
use crate::grid::{GRID_COLS, GRID_ROWS, Grid};

const _: () = assert!(GLYPH_HEIGHT == GRID_ROWS);

/// Blank columns between consecutive glyphs
pub const LETTER_SPACING: usize = 1;

/// Horizontal footprint of one character including its spacer
pub const GLYPH_PITCH: usize = GLYPH_WIDTH + LETTER_SPACING;

/// Starting column when a word is not centered
pub const LEFT_MARGIN: usize = 1;

/// Width in columns of the strip a word of `glyph_count` characters occupies
#[inline]
pub const fn strip_width(glyph_count: usize) -> usize {
    if glyph_count == 0 {
        0
    } else {
        glyph_count * GLYPH_WIDTH + (glyph_count - 1) * LETTER_SPACING
    }
}

/// First grid column of a strip of `width` columns
#[inline]
pub const fn column_offset(width: usize, center: bool) -> usize {
    if center {
        GRID_COLS.saturating_sub(width) / 2
    } else {
        LEFT_MARGIN
    }
}

/// A rendered grid together with how it was placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub grid: Grid,
    /// Width of the glyph strip before placement
    pub strip_width: usize,
    /// Grid column the strip starts at
    pub offset: usize,
    /// Strip columns that fell outside the grid
    pub clipped_columns: usize,
    /// Input characters (uppercased) drawn with the fallback glyph
    pub substituted: Vec<char>,
}

impl Rendering {
    #[inline]
    pub fn is_clipped(&self) -> bool {
        self.clipped_columns > 0
    }
}

/// Renders words with a borrowed glyph table
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer<'a> {
    table: &'a GlyphTable,
}

impl<'a> Rasterizer<'a> {
    pub fn new(table: &'a GlyphTable) -> Self {
        Self { table }
    }

    /// Render `word` centered on the grid
    #[inline]
    pub fn render_centered(&self, word: &str) -> Grid {
        self.render(word, true)
    }

    /// Render `word`, centered or starting at [`LEFT_MARGIN`]
    #[inline]
    pub fn render(&self, word: &str, center: bool) -> Grid {
        self.render_detailed(word, center).grid
    }

    /// Render `word` and report placement facts alongside the grid
    pub fn render_detailed(&self, word: &str, center: bool) -> Rendering {
        let upper = word.to_uppercase();
        let glyph_count = upper.chars().count();
        let width = strip_width(glyph_count);

        let mut strip: Vec<[bool; GLYPH_HEIGHT]> = Vec::with_capacity(width);
        let mut substituted = Vec::new();

        for (index, ch) in upper.chars().enumerate() {
            if index > 0 {
                strip.extend(std::iter::repeat_n([false; GLYPH_HEIGHT], LETTER_SPACING));
            }
            if !self.table.contains(ch) {
                substituted.push(ch);
            }
            let glyph = self.table.get(ch);
            strip.extend((0..GLYPH_WIDTH).map(|col| glyph.column(col)));
        }
        debug_assert_eq!(strip.len(), width);

        let offset = column_offset(width, center);
        let mut grid = Grid::new();
        let mut clipped_columns = 0;

        for (index, column) in strip.iter().enumerate() {
            let dest = offset + index;
            if dest >= GRID_COLS {
                clipped_columns += 1;
                continue;
            }
            for (row, &lit) in column.iter().enumerate() {
                if lit {
                    grid.set(row, dest, true);
                }
            }
        }

        Rendering {
            grid,
            strip_width: width,
            offset,
            clipped_columns,
            substituted,
        }
    }
}
