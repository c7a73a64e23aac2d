//! Backdated commit creation
//!
//! Each commit appends the pixel date to a marker file in the repository and
//! commits it with author and committer dates pinned to the pixel.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::command::run_command;
use crate::error::{CliError, CliResult};
use crate::plan::{CommitPlan, PROGRESS_INTERVAL, PlannedPixel};

/// File inside the repository that every pixel commit touches
pub const MARKER_FILE: &str = ".graph_art";

/// Whether `path` contains a `.git` directory
pub fn is_git_repository(path: &Path) -> bool {
    path.join(".git").is_dir()
}

/// Sink for pixel commits
pub trait CommitWriter {
    /// Create one commit dated at the pixel's timestamp
    fn write_commit(&mut self, pixel: &PlannedPixel) -> CliResult<()>;
}

/// Writes commits through the `git` executable
#[derive(Debug, Clone)]
pub struct GitCommitWriter {
    repo: PathBuf,
}

impl GitCommitWriter {
    /// Open an existing repository
    pub fn open(repo: impl Into<PathBuf>) -> CliResult<Self> {
        let repo = repo.into();
        if !is_git_repository(&repo) {
            return Err(CliError::NotARepository(repo));
        }
        Ok(Self { repo })
    }

    fn git(&self, args: &[&str], envs: &[(&str, &str)]) -> CliResult<()> {
        let output = run_command("git", args, Some(&self.repo), envs)?;
        if !output.success() {
            log::warn!("git error: {}", output.stderr.trim());
            return Err(CliError::Git {
                command: args.join(" "),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(())
    }
}

impl CommitWriter for GitCommitWriter {
    fn write_commit(&mut self, pixel: &PlannedPixel) -> CliResult<()> {
        let day = pixel.date.format("%Y-%m-%d").to_string();

        let mut marker = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.repo.join(MARKER_FILE))?;
        writeln!(marker, "{}", day)?;

        self.git(&["add", MARKER_FILE], &[])?;
        self.git(
            &["commit", "-m", &format!("graph: pixel {}", day)],
            &[
                ("GIT_AUTHOR_DATE", pixel.timestamp.as_str()),
                ("GIT_COMMITTER_DATE", pixel.timestamp.as_str()),
            ],
        )
    }
}

/// Write every commit of `plan` in date order
///
/// `progress` is called with `(pixels_done, pixels_total)` every
/// [`PROGRESS_INTERVAL`] pixels and after the last one; an error from it stops
/// the run. Returns the number of commits created.
pub fn execute_plan<W, F>(plan: &CommitPlan, writer: &mut W, mut progress: F) -> CliResult<usize>
where
    W: CommitWriter + ?Sized,
    F: FnMut(usize, usize) -> CliResult<()>,
{
    let total = plan.pixels.len();
    let mut created = 0;

    for (index, pixel) in plan.pixels.iter().enumerate() {
        for _ in 0..plan.commits_per_pixel {
            writer.write_commit(pixel)?;
            created += 1;
        }

        let done = index + 1;
        if done % PROGRESS_INTERVAL == 0 || done == total {
            progress(done, total)?;
        }
    }

    log::info!("{} '{}' written ({} commits created)", plan.year, plan.word, created);
    Ok(created)
}
