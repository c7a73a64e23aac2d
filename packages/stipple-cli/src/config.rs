use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};
use crate::git;

/// Commits per lit pixel when none is given (a medium shade on the heatmap)
pub const DEFAULT_COMMITS_PER_PIXEL: u32 = 3;

/// Validated settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub sentence: String,
    /// Words of the sentence; word `i` is drawn in year `start_year + i`
    pub words: Vec<String>,
    pub start_year: i32,
    pub repo: PathBuf,
    pub commits_per_pixel: u32,
    pub dry_run: bool,
    pub json: bool,
    pub center: bool,
}

impl RunConfig {
    /// Year the `index`-th word is drawn in
    #[inline]
    pub fn year_for(&self, index: usize) -> i32 {
        self.start_year.saturating_add(i32::try_from(index).unwrap_or(i32::MAX))
    }

    /// Last year any word is drawn in
    pub fn end_year(&self) -> i32 {
        self.year_for(self.words.len().saturating_sub(1))
    }

    /// Words paired with their years
    pub fn word_years(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(index, word)| (word.as_str(), self.year_for(index)))
    }
}

/// Configuration builder for a run with fluent API
#[derive(Debug, Clone)]
pub struct RunConfigBuilder {
    pub sentence: String,
    pub start_year: i32,
    pub repo_path: PathBuf,
    pub commits_per_pixel: u32,
    pub dry_run: bool,
    pub json: bool,
    pub center: bool,
}

impl RunConfigBuilder {
    pub fn new(
        sentence: impl Into<String>,
        start_year: i32,
        repo_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sentence: sentence.into(),
            start_year,
            repo_path: repo_path.into(),
            commits_per_pixel: DEFAULT_COMMITS_PER_PIXEL,
            dry_run: false,
            json: false,
            center: true,
        }
    }

    #[inline]
    pub fn with_commits_per_pixel(mut self, commits: u32) -> Self {
        self.commits_per_pixel = commits;
        self
    }

    /// Preview only, create no commits
    #[inline]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Emit plans as JSON instead of the console preview
    #[inline]
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Start words at the left margin instead of centering them
    #[inline]
    pub fn left_align(mut self) -> Self {
        self.center = false;
        self
    }

    fn words(&self) -> Vec<String> {
        self.sentence.split_whitespace().map(str::to_owned).collect()
    }

    /// Validate configuration before building
    pub fn validate(&self) -> CliResult<()> {
        let words = self.words();
        if words.is_empty() {
            return Err(CliError::Config("empty sentence".to_string()));
        }

        let last_offset = i32::try_from(words.len() - 1).ok();
        if last_offset
            .and_then(|offset| self.start_year.checked_add(offset))
            .is_none()
        {
            return Err(CliError::Config(format!(
                "{} words starting in {} run past the last supported year",
                words.len(),
                self.start_year
            )));
        }

        if !self.dry_run {
            if !git::is_git_repository(&self.repo_path) {
                return Err(CliError::NotARepository(self.repo_path.clone()));
            }
            if self.commits_per_pixel < 1 {
                return Err(CliError::Config(
                    "--commits-per-pixel must be at least 1".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Build the run configuration with the specified settings
    pub fn build(self) -> CliResult<RunConfig> {
        self.validate()?;

        let words = self.words();
        let repo = absolute(&self.repo_path)?;

        Ok(RunConfig {
            sentence: self.sentence,
            words,
            start_year: self.start_year,
            repo,
            commits_per_pixel: self.commits_per_pixel,
            dry_run: self.dry_run,
            json: self.json,
            center: self.center,
        })
    }
}

fn absolute(path: &Path) -> CliResult<PathBuf> {
    Ok(std::path::absolute(path)?)
}
