//! Project settings threaded from the CLI into every workflow.

use std::path::{Path, PathBuf};

use super::Marker;

/// Everything the workflows need to know about the project and the tools
/// around it.
///
/// Built once by the CLI from configuration and flags; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSettings {
    /// Orchestration tool, e.g. `docker-compose`.
    pub compose_program: String,
    /// Container runtime checked by `doctor`, e.g. `docker`.
    pub runtime_program: String,
    /// Composition file in the working directory.
    pub compose_file: PathBuf,
    /// Program started by `shell`.
    pub shell: String,
    /// Environment assignment injected by `--test`.
    pub test_env: String,

    pub manifest: PathBuf,
    pub test_entrypoint: PathBuf,
    /// Command run inside the container by `test`.
    pub test_command: String,
    /// Run inside each service directory before building.
    pub package_command: String,
    /// Optional seed script at the project root.
    pub seed_script: String,

    /// Suffix marking template files to render.
    pub marker_suffix: String,
    /// Compose fragment shipped in a scaffold.
    pub fragment: PathBuf,

    /// Echo every command and never silence output.
    pub verbose: bool,
    /// Pass `--rm` to ephemeral `run` containers.
    pub remove_containers: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            compose_program: "docker-compose".into(),
            runtime_program: "docker".into(),
            compose_file: PathBuf::from("docker-compose.yml"),
            shell: "bash".into(),
            test_env: "APP_ENV=test".into(),
            manifest: PathBuf::from("Gemfile"),
            test_entrypoint: PathBuf::from("bin/test"),
            test_command: "bin/test".into(),
            package_command: "bundle package --all --no-install".into(),
            seed_script: "seed".into(),
            marker_suffix: ".erb".into(),
            fragment: PathBuf::from("_docker-compose.yml"),
            verbose: false,
            remove_containers: true,
        }
    }
}

impl ProjectSettings {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_remove_containers(mut self, remove: bool) -> Self {
        self.remove_containers = remove;
        self
    }

    /// Relative path of the file that identifies `marker`.
    pub fn marker_path(&self, marker: Marker) -> &Path {
        match marker {
            Marker::DependencyManifest => &self.manifest,
            Marker::TestEntrypoint => &self.test_entrypoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_ruby_conventions() {
        let s = ProjectSettings::default();
        assert_eq!(s.marker_path(Marker::DependencyManifest), Path::new("Gemfile"));
        assert_eq!(s.marker_path(Marker::TestEntrypoint), Path::new("bin/test"));
        assert!(s.remove_containers);
        assert!(!s.verbose);
    }

    #[test]
    fn toggles_are_builder_style() {
        let s = ProjectSettings::default()
            .with_verbose(true)
            .with_remove_containers(false);
        assert!(s.verbose);
        assert!(!s.remove_containers);
    }
}
