//! Shell command invocations and their outcomes.

use std::fmt;

/// What happens when an invocation exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole command with the failing command line.
    #[default]
    Exit,
    /// Hand the failed [`Completion`] back to the caller for aggregation.
    Report,
}

/// A generated shell command line plus how to run it.
///
/// Ephemeral: built, executed, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    command: String,
    show_output: bool,
    on_failure: FailurePolicy,
}

impl Invocation {
    /// Output shown, failure aborts.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            show_output: true,
            on_failure: FailurePolicy::Exit,
        }
    }

    /// Discard the command's stdout/stderr (unless verbose mode is on).
    pub fn silent(mut self) -> Self {
        self.show_output = false;
        self
    }

    /// Return failures to the caller instead of aborting.
    pub fn reporting(mut self) -> Self {
        self.on_failure = FailurePolicy::Report;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn shows_output(&self) -> bool {
        self.show_output
    }

    pub fn on_failure(&self) -> FailurePolicy {
        self.on_failure
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// Exit status of a finished command.
///
/// `code` is `None` when the child was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub code: Option<i32>,
}

impl Completion {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success() -> Self {
        Self::from_code(0)
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_output_and_exit() {
        let inv = Invocation::new("docker-compose kill");
        assert!(inv.shows_output());
        assert_eq!(inv.on_failure(), FailurePolicy::Exit);
    }

    #[test]
    fn builders_flip_flags() {
        let inv = Invocation::new("docker").silent().reporting();
        assert!(!inv.shows_output());
        assert_eq!(inv.on_failure(), FailurePolicy::Report);
        assert_eq!(inv.to_string(), "docker");
    }

    #[test]
    fn signal_termination_is_failure() {
        assert!(!Completion { code: None }.is_success());
        assert!(Completion::success().is_success());
        assert_eq!(Completion::from_code(2).to_string(), "exit status 2");
    }
}
