//! Shell runner: executes command lines through `sh -c`.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;
use yu_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::Completion,
    error::{YuError, YuResult},
};

/// Production runner.
///
/// Command lines are handed to `sh -c` unchanged, so `&&`, `cd` and
/// redirections behave as they would in a terminal.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    working_dir: Option<PathBuf>,
}

impl ShellRunner {
    /// Run commands in the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run commands in `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }

    fn command(&self, line: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, show_output: bool) -> YuResult<Completion> {
        let mut cmd = self.command(command);
        if !show_output {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = cmd.status().map_err(|e| spawn_failed(command, e))?;
        debug!(command, status = %status, "command finished");

        Ok(Completion {
            code: status.code(),
        })
    }

    #[cfg(unix)]
    fn take_over(&self, command: &str) -> YuResult<()> {
        use std::os::unix::process::CommandExt;

        // Only returns on failure.
        let err = self.command(command).exec();
        Err(spawn_failed(command, err))
    }

    #[cfg(not(unix))]
    fn take_over(&self, command: &str) -> YuResult<()> {
        let status = self
            .command(command)
            .status()
            .map_err(|e| spawn_failed(command, e))?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn spawn_failed(command: &str, e: std::io::Error) -> YuError {
    ApplicationError::SpawnFailed {
        command: command.to_string(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn exit_codes_are_reported_not_raised() {
        let runner = ShellRunner::new();
        assert!(runner.run("true", false).unwrap().is_success());

        let completion = runner.run("exit 3", false).unwrap();
        assert_eq!(completion.code, Some(3));
    }

    #[test]
    fn shell_operators_are_interpreted() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("web")).unwrap();

        let runner = ShellRunner::in_dir(tmp.path());
        runner
            .run("cd web && echo packaged > marker", false)
            .unwrap();

        let marker = std::fs::read_to_string(tmp.path().join("web/marker")).unwrap();
        assert_eq!(marker.trim(), "packaged");
    }

    #[test]
    fn missing_working_directory_is_spawn_failure() {
        let runner = ShellRunner::in_dir("/definitely/not/here");
        let err = runner.run("true", false).unwrap_err();
        assert!(err.to_string().contains("Could not start command"));
    }
}
