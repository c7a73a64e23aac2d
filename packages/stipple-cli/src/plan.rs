//! Commit schedules for rendered words

use chrono::NaiveDate;
use serde::Serialize;
use stipple::{Grid, Stipple, Summary};

use crate::config::RunConfig;
use crate::error::CliResult;

/// Pixels between progress reports while writing
pub const PROGRESS_INTERVAL: usize = 10;

/// Author and committer timestamp for commits on `date` (noon UTC)
pub fn commit_timestamp(date: NaiveDate) -> String {
    format!("{}T12:00:00 +0000", date.format("%Y-%m-%d"))
}

/// One lit pixel and the timestamp its commits carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedPixel {
    pub date: NaiveDate,
    pub timestamp: String,
}

impl PlannedPixel {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            timestamp: commit_timestamp(date),
        }
    }
}

/// Everything needed to draw one word in one year
#[derive(Debug, Clone, Serialize)]
pub struct CommitPlan {
    pub word: String,
    pub year: i32,
    pub commits_per_pixel: u32,
    pub lit_count: usize,
    pub overflow_warning: bool,
    /// Grid rows as `0`/`1` strings, Sunday first
    pub bitmap: Vec<String>,
    pub pixels: Vec<PlannedPixel>,
    #[serde(skip)]
    pub grid: Grid,
    #[serde(skip)]
    pub summary: Summary,
}

impl CommitPlan {
    /// Plan a word drawn centered on the grid
    pub fn for_word(
        stipple: &Stipple,
        word: &str,
        year: i32,
        commits_per_pixel: u32,
    ) -> CliResult<Self> {
        Self::with_alignment(stipple, word, year, commits_per_pixel, true)
    }

    pub fn with_alignment(
        stipple: &Stipple,
        word: &str,
        year: i32,
        commits_per_pixel: u32,
        center: bool,
    ) -> CliResult<Self> {
        let grid = stipple.render(word, center);
        let summary = stipple.summarize(word, &grid);
        let pixels = stipple
            .bitmap_to_dates(&grid, year)?
            .into_iter()
            .map(PlannedPixel::new)
            .collect();

        Ok(Self {
            word: word.to_string(),
            year,
            commits_per_pixel,
            lit_count: summary.lit_count,
            overflow_warning: summary.overflow_warning,
            bitmap: grid.to_row_strings(),
            pixels,
            grid,
            summary,
        })
    }

    /// Commits needed to draw the whole word
    #[inline]
    pub fn total_commits(&self) -> usize {
        self.pixels.len() * self.commits_per_pixel as usize
    }
}

/// Plan every word of the configured sentence, one year per word
pub fn plan_sentence(stipple: &Stipple, config: &RunConfig) -> CliResult<Vec<CommitPlan>> {
    config
        .word_years()
        .map(|(word, year)| {
            CommitPlan::with_alignment(
                stipple,
                word,
                year,
                config.commits_per_pixel,
                config.center,
            )
        })
        .collect()
}
