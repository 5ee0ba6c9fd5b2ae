//! Command Executor - failure policy on top of a [`CommandRunner`].
//!
//! Two paths:
//! - [`Executor::run`]: run and await; the invocation's [`FailurePolicy`]
//!   decides whether a non-zero exit aborts or is handed back.
//! - [`Executor::take_over`]: replace the process with the final,
//!   user-facing command (interactive shells, streamed builds).

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Reporter},
    },
    domain::{Completion, FailurePolicy, Invocation},
    error::YuResult,
};

/// Runs invocations and applies their failure policy.
pub struct Executor {
    runner: Box<dyn CommandRunner>,
    reporter: Arc<dyn Reporter>,
    verbose: bool,
}

impl Executor {
    pub fn new(runner: Box<dyn CommandRunner>, reporter: Arc<dyn Reporter>, verbose: bool) -> Self {
        Self {
            runner,
            reporter,
            verbose,
        }
    }

    /// Run an invocation to completion.
    ///
    /// A failure under [`FailurePolicy::Exit`] becomes
    /// [`ApplicationError::CommandFailed`]; under [`FailurePolicy::Report`] the
    /// failed [`Completion`] is returned.
    #[instrument(skip_all, fields(command = %invocation))]
    pub fn run(&self, invocation: &Invocation) -> YuResult<Completion> {
        let completion = self.spawn(invocation)?;

        if !completion.is_success() && invocation.on_failure() == FailurePolicy::Exit {
            warn!(status = %completion, "command failed, aborting");
            return Err(ApplicationError::CommandFailed {
                command: invocation.command().to_owned(),
                code: completion.code,
            }
            .into());
        }

        Ok(completion)
    }

    /// Run an invocation and hand any failure to `on_failure`.
    ///
    /// The handler replaces the invocation's own policy; returning `Err`
    /// aborts, returning `Ok` carries on with the failed completion.
    pub fn run_or_else<F>(&self, invocation: &Invocation, on_failure: F) -> YuResult<Completion>
    where
        F: FnOnce(&Completion) -> YuResult<()>,
    {
        let completion = self.spawn(invocation)?;
        if !completion.is_success() {
            on_failure(&completion)?;
        }
        Ok(completion)
    }

    /// Hand the terminal over to `command`.
    #[instrument(skip(self))]
    pub fn take_over(&self, command: &str) -> YuResult<()> {
        self.announce(command);
        self.runner.take_over(command)
    }

    fn spawn(&self, invocation: &Invocation) -> YuResult<Completion> {
        self.announce(invocation.command());
        let show_output = invocation.shows_output() || self.verbose;
        let completion = self.runner.run(invocation.command(), show_output)?;
        debug!(status = %completion, show_output, "command finished");
        Ok(completion)
    }

    fn announce(&self, command: &str) {
        if self.verbose {
            self.reporter.progress(&format!("Executing: {command}"));
        }
    }
}
