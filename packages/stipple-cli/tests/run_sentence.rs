use std::path::Path;
use std::process::Command;

use stipple_cli::command::run_command;
use stipple_cli::git::MARKER_FILE;
use stipple_cli::{CliResult, CommitWriter, PlannedPixel, RunConfigBuilder, run, run_with_writer};

fn output_of(config: &stipple_cli::RunConfig) -> String {
    let mut out = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn dry_run_previews_every_word() {
    let config = RunConfigBuilder::new("HELLO WORLD", 2022, ".")
        .dry_run(true)
        .build()
        .unwrap();
    let text = output_of(&config);

    assert!(text.contains("Years    : 2022 - 2023"));
    assert!(text.contains("DRY RUN"));
    assert!(text.contains("Year 2022  ->  'HELLO'"));
    assert!(text.contains("Year 2023  ->  'WORLD'"));
    assert_eq!(text.matches('┌').count(), 2);
    assert!(text.contains("active pixels"));
    assert!(text.trim_end().ends_with("Re-run without --dry-run to create commits."));
}

#[test]
fn dry_run_warns_about_long_words() {
    let config = RunConfigBuilder::new("THISISAVERYLONGSENTENCEWORD", 2022, ".")
        .dry_run(true)
        .build()
        .unwrap();
    let text = output_of(&config);
    assert!(text.contains("is long (27 chars)"));
}

#[test]
fn json_output_lists_plans() {
    let config = RunConfigBuilder::new("A B", 2022, ".")
        .dry_run(true)
        .json(true)
        .with_commits_per_pixel(4)
        .build()
        .unwrap();
    let text = output_of(&config);
    let plans: serde_json::Value = serde_json::from_str(&text).unwrap();
    let plans = plans.as_array().unwrap();

    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["word"], "A");
    assert_eq!(plans[1]["year"], 2023);
    assert_eq!(plans[0]["commits_per_pixel"], 4);
    assert_eq!(plans[0]["pixels"].as_array().unwrap().len(), 18);
}

#[derive(Default)]
struct RecordingWriter {
    pixels: Vec<PlannedPixel>,
}

impl CommitWriter for RecordingWriter {
    fn write_commit(&mut self, pixel: &PlannedPixel) -> CliResult<()> {
        self.pixels.push(pixel.clone());
        Ok(())
    }
}

#[test]
fn progress_is_printed_while_writing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    let config = RunConfigBuilder::new("HI", 2022, dir.path())
        .with_commits_per_pixel(1)
        .build()
        .unwrap();

    let mut writer = RecordingWriter::default();
    let mut out = Vec::new();
    run_with_writer(&config, Some(&mut writer), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let progress: Vec<_> = text.lines().filter(|line| line.contains("pixels done")).collect();
    assert_eq!(
        progress,
        vec![
            "  ├─ 10/32 pixels done ...",
            "  ├─ 20/32 pixels done ...",
            "  ├─ 30/32 pixels done ...",
            "  ├─ 32/32 pixels done ...",
        ]
    );
    assert!(text.contains("2022 - 'HI' written (32 commits created)."));
    assert_eq!(writer.pixels.len(), 32);
}

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

fn git(repo: &Path, args: &[&str]) -> String {
    let out = run_command("git", args, Some(repo), &[]).unwrap();
    assert!(out.success(), "git {:?}: {}", args, out.stderr);
    out.stdout
}

#[test]
fn writes_backdated_commits() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let repo = dir.path();
    git(repo, &["init", "-q"]);
    git(repo, &["config", "user.email", "stipple@example.com"]);
    git(repo, &["config", "user.name", "Stipple Test"]);
    git(repo, &["config", "commit.gpgsign", "false"]);

    let config = RunConfigBuilder::new("!", 2022, repo)
        .with_commits_per_pixel(1)
        .build()
        .unwrap();
    let text = output_of(&config);
    assert!(text.contains("(6 commits created)"));
    assert!(text.contains("git push origin main"));

    let marker = std::fs::read_to_string(repo.join(MARKER_FILE)).unwrap();
    assert_eq!(marker.lines().count(), 6);
    assert_eq!(marker.lines().next(), Some("2022-06-19"));

    let log = git(repo, &["log", "--reverse", "--format=%ad|%s", "--date=short"]);
    let first = log.lines().next().unwrap();
    assert_eq!(first, "2022-06-19|graph: pixel 2022-06-19");
    assert_eq!(log.lines().count(), 6);
}
