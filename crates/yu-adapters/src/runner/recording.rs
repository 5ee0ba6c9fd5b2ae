//! Recording runner for testing.

use std::sync::{Arc, Mutex, MutexGuard};

use yu_core::{application::ports::CommandRunner, domain::Completion, error::YuResult};

/// One command the runner was asked to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: String,
    pub show_output: bool,
    /// Issued through `take_over` rather than `run`.
    pub took_over: bool,
}

/// Records every command instead of executing it.
///
/// Commands succeed unless they contain a pattern registered with
/// [`RecordingRunner::fail_on`].  Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    calls: Vec<RecordedCall>,
    failures: Vec<(String, i32)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make any command containing `pattern` exit with `code`.
    pub fn fail_on(self, pattern: impl Into<String>, code: i32) -> Self {
        self.lock().failures.push((pattern.into(), code));
        self
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// The command strings so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.lock()
            .calls
            .iter()
            .map(|c| c.command.clone())
            .collect()
    }

    fn record(&self, command: &str, show_output: bool, took_over: bool) -> Completion {
        let mut inner = self.lock();
        inner.calls.push(RecordedCall {
            command: command.to_string(),
            show_output,
            took_over,
        });

        inner
            .failures
            .iter()
            .find(|(pattern, _)| command.contains(pattern.as_str()))
            .map(|(_, code)| Completion::from_code(*code))
            .unwrap_or_else(Completion::success)
    }

    fn lock(&self) -> MutexGuard<'_, RecordingInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str, show_output: bool) -> YuResult<Completion> {
        Ok(self.record(command, show_output, false))
    }

    fn take_over(&self, command: &str) -> YuResult<()> {
        self.record(command, true, true);
        Ok(())
    }
}
