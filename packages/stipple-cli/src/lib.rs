//! Orchestration for drawing sentences on a git contribution heatmap
//!
//! The sentence is split into words, word `i` is rendered onto the grid for
//! year `start_year + i`, and every lit pixel becomes `commits_per_pixel`
//! backdated commits in the target repository. A dry run stops after the
//! console preview.

pub mod cli;
pub mod command;
pub mod config;
mod error;
pub mod git;
pub mod plan;
pub mod preview;

use std::io::Write;

use stipple::Stipple;

pub use cli::Cli;
pub use config::{RunConfig, RunConfigBuilder};
pub use error::{CliError, CliResult};
pub use git::{CommitWriter, GitCommitWriter};
pub use plan::{CommitPlan, PlannedPixel};

/// Plan the configured sentence and, unless this is a dry run, write it into
/// the repository with git
pub fn run(config: &RunConfig, out: &mut impl Write) -> CliResult<()> {
    if config.dry_run {
        run_with_writer(config, None, out)
    } else {
        let mut writer = GitCommitWriter::open(&config.repo)?;
        run_with_writer(config, Some(&mut writer), out)
    }
}

/// Plan the configured sentence and hand its commits to `writer`, if any
pub fn run_with_writer(
    config: &RunConfig,
    mut writer: Option<&mut dyn CommitWriter>,
    out: &mut impl Write,
) -> CliResult<()> {
    let stipple = Stipple::new()?;
    let plans = plan::plan_sentence(&stipple, config)?;

    if config.json {
        serde_json::to_writer_pretty(&mut *out, &plans)?;
        writeln!(out)?;
        if let Some(writer) = writer.as_deref_mut() {
            for plan in &plans {
                git::execute_plan(plan, writer, |done, total| {
                    log::info!("{}: {}/{} pixels done", plan.year, done, total);
                    Ok(())
                })?;
            }
        }
        return Ok(());
    }

    write_header(config, out)?;

    for plan in &plans {
        writeln!(out, "Year {}  ->  '{}'", plan.year, plan.word)?;
        write!(out, "{}", preview::render_box(&plan.grid))?;
        writeln!(out, "{}", preview::summary_line(&plan.word, &plan.summary))?;

        if let Some(writer) = writer.as_deref_mut() {
            writeln!(
                out,
                "  -> {} pixels x {} commits = {} commits ...",
                plan.pixels.len(),
                plan.commits_per_pixel,
                plan.total_commits()
            )?;
            let created = git::execute_plan(plan, writer, |done, total| {
                writeln!(out, "{}", progress_line(done, total))?;
                out.flush()?;
                Ok(())
            })?;
            writeln!(
                out,
                "  {} - '{}' written ({} commits created).",
                plan.year, plan.word, created
            )?;
        }
        writeln!(out)?;
    }

    if writer.is_some() {
        writeln!(out, "All done! Push with:")?;
        writeln!(out, "    cd {} && git push origin main", config.repo.display())?;
    } else {
        writeln!(out, "Dry run complete. Re-run without --dry-run to create commits.")?;
    }

    Ok(())
}

/// Console line reporting pixels written so far for one word
fn progress_line(done: usize, total: usize) -> String {
    format!("  ├─ {}/{} pixels done ...", done, total)
}

fn write_header(config: &RunConfig, out: &mut impl Write) -> CliResult<()> {
    let mode = if config.dry_run {
        "DRY RUN - preview only".to_string()
    } else {
        format!("{} commit(s)/pixel", config.commits_per_pixel)
    };

    writeln!(out, "Contribution Heatmap Writer")?;
    writeln!(out, "  Sentence : {}", config.sentence)?;
    writeln!(out, "  Years    : {} - {}", config.start_year, config.end_year())?;
    writeln!(out, "  Mode     : {}", mode)?;
    writeln!(out)?;
    Ok(())
}
