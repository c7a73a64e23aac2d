//! Word rendering for activity heatmaps
//!
//! This crate draws a short word onto the 7x52 grid of a yearly activity
//! heatmap (rows are weekdays starting on Sunday, columns are weeks) and maps
//! every lit pixel to a calendar date in a target year:
//! - A fixed 5x7 bitmap font covering `A-Z`, `0-9`, space and `! ? . , - ' #`
//! - Rasterization with one-column letter spacing, centering and clipping
//! - Grid-to-date mapping anchored on the last Sunday on or before January 1
//! - Lit-pixel counts and a long-word warning
//!
//! Every operation is a pure function of its inputs. The only shared state is
//! the built-in glyph table, validated once and read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use stipple::Stipple;
//!
//! # fn example() -> Result<(), stipple::StippleError> {
//! let stipple = Stipple::new()?;
//!
//! let grid = stipple.render("HI", true);
//! let dates = stipple.bitmap_to_dates(&grid, 2022)?;
//! let summary = stipple.summarize("HI", &grid);
//!
//! assert_eq!(dates.len(), summary.lit_count);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod calendar;
mod error;
pub mod glyph;
pub mod grid;
pub mod raster;
pub mod report;

use chrono::NaiveDate;

pub use error::{StippleError, StippleErrorSeverity, StippleResult};
pub use glyph::{Glyph, GlyphTable};
pub use grid::Grid;
pub use raster::{Rasterizer, Rendering};
pub use report::Summary;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry point bundling the glyph table with the four core operations
#[derive(Debug, Clone, Copy)]
pub struct Stipple {
    table: &'static GlyphTable,
}

impl Stipple {
    /// Use the built-in font. Fails only if the font definitions are malformed.
    pub fn new() -> StippleResult<Self> {
        Ok(Self {
            table: GlyphTable::builtin()?,
        })
    }

    #[inline]
    pub fn glyphs(&self) -> &'static GlyphTable {
        self.table
    }

    #[inline]
    pub fn rasterizer(&self) -> Rasterizer<'static> {
        Rasterizer::new(self.table)
    }

    /// Render `word` onto a fresh grid
    #[inline]
    pub fn render(&self, word: &str, center: bool) -> Grid {
        self.rasterizer().render(word, center)
    }

    /// Render `word` and report how it was placed
    #[inline]
    pub fn render_detailed(&self, word: &str, center: bool) -> Rendering {
        self.rasterizer().render_detailed(word, center)
    }

    /// Date of row 0, column 0 for `year`
    #[inline]
    pub fn grid_origin(&self, year: i32) -> StippleResult<NaiveDate> {
        calendar::grid_origin(year)
    }

    /// One date per lit cell, ascending
    #[inline]
    pub fn bitmap_to_dates(&self, grid: &Grid, year: i32) -> StippleResult<Vec<NaiveDate>> {
        calendar::bitmap_to_dates(grid, year)
    }

    #[inline]
    pub fn summarize(&self, word: &str, grid: &Grid) -> Summary {
        report::summarize(word, grid)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{
        Glyph, GlyphTable, Grid, Rasterizer, Rendering, Stipple, StippleError, StippleResult,
        Summary,
    };
    pub use super::calendar::{bitmap_to_dates, grid_origin};
    pub use super::report::summarize;
}

/// Grid and font geometry
pub mod constants {
    pub use super::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};
    pub use super::grid::{GRID_COLS, GRID_ROWS};
    pub use super::raster::{GLYPH_PITCH, LEFT_MARGIN, LETTER_SPACING};
    pub use super::report::MAX_UNCLIPPED_CHARS;
}
