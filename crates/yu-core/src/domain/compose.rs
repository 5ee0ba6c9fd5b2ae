//! Shell command line construction.
//!
//! Every command `yu` runs is a plain shell line.  [`CommandLine`] assembles
//! one from segments and skips the empty ones, so optional flags never leave
//! doubled spaces behind.  [`Compose`] knows the docker-compose subcommands
//! `yu` uses and how the project settings shape them.

use std::fmt;

use super::{ProjectSettings, ServiceName};

/// A shell command line assembled from segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    segments: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self::default().arg(program)
    }

    /// Append a segment.  Blank segments are dropped.
    pub fn arg(mut self, segment: impl Into<String>) -> Self {
        let segment = segment.into();
        if !segment.trim().is_empty() {
            self.segments.push(segment);
        }
        self
    }

    /// Append a segment only when `condition` holds.
    pub fn arg_if(self, condition: bool, segment: impl Into<String>) -> Self {
        if condition { self.arg(segment) } else { self }
    }

    pub fn args<I, S>(self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        segments.into_iter().fold(self, |line, s| line.arg(s))
    }

    pub fn render(&self) -> String {
        self.segments.join(" ")
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<CommandLine> for String {
    fn from(line: CommandLine) -> Self {
        line.render()
    }
}

/// docker-compose command lines for a project.
#[derive(Debug, Clone, Copy)]
pub struct Compose<'a> {
    settings: &'a ProjectSettings,
}

impl<'a> Compose<'a> {
    pub fn new(settings: &'a ProjectSettings) -> Self {
        Self { settings }
    }

    fn subcommand(&self, name: &str) -> CommandLine {
        CommandLine::new(&self.settings.compose_program).arg(name)
    }

    /// `run [--rm] [-e <test env>]`: an ephemeral container.
    pub fn run(&self, test_env: bool) -> CommandLine {
        self.subcommand("run")
            .arg_if(self.settings.remove_containers, "--rm")
            .arg_if(test_env, format!("-e {}", self.settings.test_env))
    }

    /// `run [--rm] <service> <test command>`.
    pub fn test(&self, service: &ServiceName) -> CommandLine {
        self.run(false)
            .arg(service.as_str())
            .arg(&self.settings.test_command)
    }

    /// `run [--rm] [-e <test env>] <service> <shell>`.
    pub fn shell(&self, service: &ServiceName, test_env: bool) -> CommandLine {
        self.run(test_env)
            .arg(service.as_str())
            .arg(&self.settings.shell)
    }

    pub fn build(&self, services: &[ServiceName], without_cache: bool) -> CommandLine {
        self.subcommand("build")
            .arg_if(without_cache, "--no-cache")
            .args(services.iter().map(ServiceName::as_str))
    }

    pub fn kill(&self, services: &[ServiceName]) -> CommandLine {
        self.subcommand("kill")
            .args(services.iter().map(ServiceName::as_str))
    }

    pub fn remove(&self, services: &[ServiceName]) -> CommandLine {
        self.subcommand("rm")
            .arg("--force")
            .args(services.iter().map(ServiceName::as_str))
    }

    /// `up -d --no-recreate [services...]`.
    pub fn up(&self, services: &[ServiceName]) -> CommandLine {
        self.subcommand("up")
            .args(["-d", "--no-recreate"])
            .args(services.iter().map(ServiceName::as_str))
    }

    pub fn version(&self) -> CommandLine {
        self.subcommand("--version")
    }

    /// `cd <service> && <package command>`.
    pub fn package(&self, service: &ServiceName) -> CommandLine {
        CommandLine::new("cd")
            .arg(service.as_str())
            .arg("&&")
            .arg(&self.settings.package_command)
    }

    /// `./<seed script>`.
    pub fn seed(&self) -> CommandLine {
        CommandLine::new(format!("./{}", self.settings.seed_script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<ServiceName> {
        raw.iter().map(|n| ServiceName::new(*n).unwrap()).collect()
    }

    #[test]
    fn segments_are_space_joined() {
        let line = CommandLine::new("docker-compose").arg("up").args(["-d", "--no-recreate"]);
        assert_eq!(line.render(), "docker-compose up -d --no-recreate");
    }

    #[test]
    fn blank_segments_are_skipped() {
        let line = CommandLine::new("docker-compose")
            .arg("run")
            .arg("")
            .arg_if(false, "--rm")
            .arg("web")
            .arg("bash");
        assert_eq!(line.to_string(), "docker-compose run web bash");
    }

    #[test]
    fn arg_if_true_appends() {
        let line = CommandLine::new("docker-compose").arg("build").arg_if(true, "--no-cache");
        assert_eq!(String::from(line), "docker-compose build --no-cache");
    }

    #[test]
    fn run_includes_rm_by_default() {
        let settings = ProjectSettings::default();
        let svc = ServiceName::new("web").unwrap();
        assert_eq!(
            Compose::new(&settings).test(&svc).render(),
            "docker-compose run --rm web bin/test"
        );
    }

    #[test]
    fn no_rm_and_test_env() {
        let settings = ProjectSettings::default().with_remove_containers(false);
        let svc = ServiceName::new("web").unwrap();
        assert_eq!(
            Compose::new(&settings).shell(&svc, true).render(),
            "docker-compose run -e APP_ENV=test web bash"
        );
    }

    #[test]
    fn build_without_services_builds_everything() {
        let settings = ProjectSettings::default();
        let compose = Compose::new(&settings);
        assert_eq!(compose.build(&[], false).render(), "docker-compose build");
        assert_eq!(
            compose.build(&names(&["a", "b"]), true).render(),
            "docker-compose build --no-cache a b"
        );
    }

    #[test]
    fn lifecycle_commands() {
        let settings = ProjectSettings::default();
        let compose = Compose::new(&settings);
        let svcs = names(&["api"]);
        assert_eq!(compose.kill(&svcs).render(), "docker-compose kill api");
        assert_eq!(compose.remove(&svcs).render(), "docker-compose rm --force api");
        assert_eq!(compose.up(&[]).render(), "docker-compose up -d --no-recreate");
    }

    #[test]
    fn package_and_seed() {
        let settings = ProjectSettings::default();
        let compose = Compose::new(&settings);
        let svc = ServiceName::new("api").unwrap();
        assert_eq!(
            compose.package(&svc).render(),
            "cd api && bundle package --all --no-install"
        );
        assert_eq!(compose.seed().render(), "./seed");
        assert_eq!(compose.version().render(), "docker-compose --version");
    }
}
