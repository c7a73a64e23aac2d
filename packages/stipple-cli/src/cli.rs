use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_COMMITS_PER_PIXEL, RunConfig, RunConfigBuilder};
use crate::error::CliResult;

const AFTER_HELP: &str = "\
examples:
  # Preview without making any commits:
  stipple --dry-run \"YOLO PUSHED\" 2023 .

  # Write the commits (medium intensity):
  stipple \"YOLO PUSHED\" 2023 /path/to/repo

  # Darker squares (more commits per pixel):
  stipple \"YOLO PUSHED\" 2023 /path/to/repo -c 6

notes:
  One word is written per year, starting from START_YEAR.
  The repository's git user.email must match your account email.
  After running, push with: cd /path/to/repo && git push origin main";

/// Write words in a contribution heatmap via backdated commits
#[derive(Parser, Debug)]
#[command(name = "stipple", version, about, after_help = AFTER_HELP)]
pub struct Cli {
    /// Sentence to write, one word per year
    pub sentence: String,

    /// First year to start writing from
    #[arg(allow_negative_numbers = true)]
    pub start_year: i32,

    /// Path to the local git repository
    pub repo_path: PathBuf,

    /// Commits per lit pixel; higher gives a darker square
    #[arg(short = 'c', long, value_name = "N", default_value_t = DEFAULT_COMMITS_PER_PIXEL)]
    pub commits_per_pixel: u32,

    /// Preview bitmaps only, do not create any commits
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print commit plans as JSON instead of the preview
    #[arg(long)]
    pub json: bool,

    /// Start each word one column from the left edge instead of centering it
    #[arg(long)]
    pub left_align: bool,
}

impl Cli {
    pub fn builder(&self) -> RunConfigBuilder {
        let builder = RunConfigBuilder::new(&*self.sentence, self.start_year, &self.repo_path)
            .with_commits_per_pixel(self.commits_per_pixel)
            .dry_run(self.dry_run)
            .json(self.json);

        if self.left_align {
            builder.left_align()
        } else {
            builder
        }
    }

    pub fn into_config(self) -> CliResult<RunConfig> {
        self.builder().build()
    }
}
