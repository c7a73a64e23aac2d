//! Thin wrapper over `std::process::Command` for running external tools.

use std::path::Path;

use crate::error::CliResult;

/// The output of an executed command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// The standard output of the command.
    pub stdout: String,

    /// The standard error of the command.
    pub stderr: String,

    /// The exit status code of the command, `-1` when killed by a signal.
    pub status: i32,
}

impl CommandOutput {
    #[inline]
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Executes a command synchronously and captures its output.
///
/// # Arguments
/// * `command` - The command to execute.
/// * `args` - The arguments to pass to the command.
/// * `cwd` - The working directory for the command, if any.
/// * `envs` - Extra environment variables layered over the inherited ones.
///
/// A non-zero exit status is not an error here; callers inspect
/// [`CommandOutput::status`].
pub fn run_command(
    command: &str,
    args: &[&str],
    cwd: Option<&Path>,
    envs: &[(&str, &str)],
) -> CliResult<CommandOutput> {
    let mut cmd = std::process::Command::new(command);
    cmd.args(args);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    cmd.envs(envs.iter().copied());

    log::trace!("running {} {}", command, args.join(" "));
    let output = cmd.output()?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        status: output.status.code().unwrap_or(-1),
    })
}
