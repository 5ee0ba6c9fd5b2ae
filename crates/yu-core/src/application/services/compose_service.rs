//! Compose Service - the docker-compose workflows behind each subcommand.
//!
//! Every workflow is a short linear sequence: build a command line, run it,
//! check the exit status, continue or abort.  The only exception is
//! [`ComposeService::test`], which runs every target and fails at the end.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem, Reporter},
        services::{Executor, ServiceDiscovery},
    },
    domain::{Compose, Invocation, Marker, ProjectSettings, ServiceName},
    error::YuResult,
};

/// Runs the docker-compose workflows for one project directory.
pub struct ComposeService {
    executor: Executor,
    filesystem: Box<dyn Filesystem>,
    reporter: Arc<dyn Reporter>,
    settings: ProjectSettings,
    root: PathBuf,
}

impl ComposeService {
    /// Create a compose service for the project at `root`.
    ///
    /// `runner` must execute commands with `root` as working directory.
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        reporter: Arc<dyn Reporter>,
        settings: ProjectSettings,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            executor: Executor::new(runner, Arc::clone(&reporter), settings.verbose),
            filesystem,
            reporter,
            settings,
            root: root.into(),
        }
    }

    /// Run each target's test entrypoint in an ephemeral container.
    ///
    /// All targets run even when one fails; the result is
    /// [`ApplicationError::TestsFailed`] listing the failures.
    #[instrument(skip_all)]
    pub fn test<S: AsRef<str>>(&self, args: &[S]) -> YuResult<()> {
        let targets = self
            .discovery()
            .targets_or_marked(args, Marker::TestEntrypoint)?;

        let mut failed = Vec::new();
        for service in &targets {
            self.reporter
                .progress(&format!("Running tests for {service}..."));
            let line = self.compose().test(service);
            let completion = self.executor.run(&Invocation::new(line).reporting())?;
            if !completion.is_success() {
                failed.push(service.to_string());
            }
        }

        info!(total = targets.len(), failed = failed.len(), "tests finished");
        if failed.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::TestsFailed { failed }.into())
        }
    }

    /// Package dependencies, then build images for the named (or all)
    /// services.
    #[instrument(skip_all)]
    pub fn build<S: AsRef<str>>(&self, args: &[S]) -> YuResult<()> {
        let targets = ServiceName::from_args(args)?;
        let packageable = self
            .discovery()
            .services_with_marker(Marker::DependencyManifest)?;

        let selected: Vec<_> = if targets.is_empty() {
            packageable
        } else {
            packageable
                .into_iter()
                .filter(|svc| targets.contains(svc))
                .collect()
        };

        for service in &selected {
            self.package(service)?;
        }

        self.reporter.progress("Building images...");
        let line = self.compose().build(&targets, false);
        self.executor.take_over(&line.render())
    }

    /// Open an interactive shell in a new container for exactly one service.
    #[instrument(skip_all)]
    pub fn shell<S: AsRef<str>>(&self, args: &[S], test_env: bool) -> YuResult<()> {
        let service = match args {
            [] => {
                return Err(ApplicationError::InvalidInput("Please provide service".into()).into());
            }
            [one] => ServiceName::from_arg(one.as_ref())?,
            _ => {
                return Err(ApplicationError::InvalidInput("One at a time please!".into()).into());
            }
        };

        let mode = if test_env { "test shell" } else { "shell" };
        self.reporter
            .progress(&format!("Loading {mode} for {service}..."));
        let line = self.compose().shell(&service, test_env);
        self.executor.take_over(&line.render())
    }

    /// Package, kill, remove, rebuild, seed and bring everything back up.
    #[instrument(skip(self))]
    pub fn reset(&self, without_cache: bool) -> YuResult<()> {
        let compose = self.compose();

        self.reporter.progress(&format!(
            "Packaging dependencies in all services containing a {}",
            self.settings.manifest.display()
        ));
        for service in self
            .discovery()
            .services_with_marker(Marker::DependencyManifest)?
        {
            self.package(&service)?;
        }

        self.reporter.progress("Killing any running containers");
        self.executor.run(&Invocation::new(compose.kill(&[])))?;

        self.reporter.progress("Removing all existing containers");
        self.executor.run(&Invocation::new(compose.remove(&[])))?;

        self.reporter.progress("Building fresh images");
        self.executor
            .run(&Invocation::new(compose.build(&[], without_cache)))?;

        self.seed()?;

        self.reporter
            .progress("Bringing containers up for all services");
        self.executor.run(&Invocation::new(compose.up(&[])))?;
        Ok(())
    }

    /// Check that the runtime and compose are usable and a composition file
    /// exists, stopping at the first failure.
    #[instrument(skip_all)]
    pub fn doctor(&self) -> YuResult<()> {
        let runtime = &self.settings.runtime_program;
        let compose_program = &self.settings.compose_program;

        self.executor.run_or_else(
            &Invocation::new(format!("{runtime} info")).silent(),
            |_| {
                Err(ApplicationError::CheckFailed {
                    check: "container runtime",
                    hint: format!("Please ensure you have {runtime} working"),
                }
                .into())
            },
        )?;

        self.executor
            .run_or_else(&Invocation::new(self.compose().version()).silent(), |_| {
                Err(ApplicationError::CheckFailed {
                    check: "compose version",
                    hint: format!("Please ensure you have {compose_program} working"),
                }
                .into())
            })?;

        let compose_file = self.root.join(&self.settings.compose_file);
        if !self.filesystem.is_file(&compose_file) {
            return Err(ApplicationError::CheckFailed {
                check: "composition file",
                hint: format!(
                    "Your current directory does not contain a {}",
                    self.settings.compose_file.display()
                ),
            }
            .into());
        }

        self.reporter.success("Everything looks good.");
        Ok(())
    }

    /// Bring the named (or all) services up without recreating containers.
    #[instrument(skip_all)]
    pub fn start<S: AsRef<str>>(&self, args: &[S]) -> YuResult<()> {
        let services = ServiceName::from_args(args)?;
        self.executor
            .run(&Invocation::new(self.compose().up(&services)))?;
        Ok(())
    }

    /// Kill the named (or all) services, then bring them up again.
    #[instrument(skip_all)]
    pub fn restart<S: AsRef<str>>(&self, args: &[S]) -> YuResult<()> {
        let services = ServiceName::from_args(args)?;
        let compose = self.compose();
        self.executor.run(&Invocation::new(compose.kill(&services)))?;
        self.executor.run(&Invocation::new(compose.up(&services)))?;
        Ok(())
    }

    /// Kill and remove the named (or all) services' containers, seed, and
    /// bring them up fresh.
    #[instrument(skip_all)]
    pub fn recreate<S: AsRef<str>>(&self, args: &[S]) -> YuResult<()> {
        let services = ServiceName::from_args(args)?;
        let compose = self.compose();
        self.executor.run(&Invocation::new(compose.kill(&services)))?;
        self.executor
            .run(&Invocation::new(compose.remove(&services)))?;
        self.seed()?;
        self.executor.run(&Invocation::new(compose.up(&services)))?;
        Ok(())
    }

    /// Run an ad-hoc command line in a new ephemeral container.
    #[instrument(skip_all)]
    pub fn run<S: AsRef<str>>(&self, args: &[S], test_env: bool) -> YuResult<()> {
        if args.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "Please provide a service and a command to run".into(),
            )
            .into());
        }

        let line = self
            .compose()
            .run(test_env)
            .args(args.iter().map(|a| a.as_ref().to_owned()));
        self.executor.take_over(&line.render())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn compose(&self) -> Compose<'_> {
        Compose::new(&self.settings)
    }

    fn discovery(&self) -> ServiceDiscovery<'_> {
        ServiceDiscovery::new(self.filesystem.as_ref(), &self.root, &self.settings)
    }

    fn package(&self, service: &ServiceName) -> YuResult<()> {
        self.reporter
            .progress(&format!("Packaging dependencies for {service}"));
        self.executor
            .run(&Invocation::new(self.compose().package(service)))?;
        Ok(())
    }

    /// Run the project's seed script when it exists and is executable.
    fn seed(&self) -> YuResult<()> {
        let script = self.root.join(&self.settings.seed_script);
        if !self.filesystem.is_file(&script) {
            return Ok(());
        }
        if !self.filesystem.is_executable(&script) {
            warn!(path = %script.display(), "seed script is not executable, skipping");
            self.reporter.progress(&format!(
                "Skipping {}: not executable",
                self.settings.seed_script
            ));
            return Ok(());
        }

        self.reporter.progress("Seeding system state");
        self.executor
            .run(&Invocation::new(self.compose().seed()))?;
        Ok(())
    }
}
