//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and turned into the core's
//! [`ProjectSettings`].  The CLI layer owns config; the core crate never
//! sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied in [`AppConfig::project_settings`])
//! 2. `YU_*` environment variables, `__` between section and key
//!    (`YU_COMPOSE__PROGRAM=podman-compose`)
//! 3. The `--config` file, or `yu.toml` in the project directory
//! 4. The per-user file at [`AppConfig::config_path`]
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use yu_core::domain::ProjectSettings;

use crate::cli::global::GlobalArgs;

/// Name of the optional project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "yu.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External tools and the composition file.
    pub compose: ComposeConfig,
    /// Marker files and per-service commands.
    pub services: ServicesConfig,
    /// Service scaffolding.
    pub scaffold: ScaffoldConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposeConfig {
    pub program: String,
    pub runtime: String,
    pub file: PathBuf,
    pub shell: String,
    pub test_env: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub manifest: PathBuf,
    pub test_entrypoint: PathBuf,
    pub test_command: String,
    pub package_command: String,
    pub seed_script: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Template directory used instead of the built-in template.
    pub template_dir: Option<PathBuf>,
    pub marker_suffix: String,
    pub fragment: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

// Section defaults come from the core's settings so the two never drift.

impl Default for ComposeConfig {
    fn default() -> Self {
        let s = ProjectSettings::default();
        Self {
            program: s.compose_program,
            runtime: s.runtime_program,
            file: s.compose_file,
            shell: s.shell,
            test_env: s.test_env,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        let s = ProjectSettings::default();
        Self {
            manifest: s.manifest,
            test_entrypoint: s.test_entrypoint,
            test_command: s.test_command,
            package_command: s.package_command,
            seed_script: s.seed_script,
        }
    }
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        let s = ProjectSettings::default();
        Self {
            template_dir: None,
            marker_suffix: s.marker_suffix,
            fragment: s.fragment,
        }
    }
}

impl AppConfig {
    /// Load configuration for the project in `project_dir`.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it, `yu.toml` in `project_dir` is read when present.
    pub fn load(config_file: Option<&Path>, project_dir: &Path) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        if let Some(user) = Self::config_path() {
            debug!(path = %user.display(), "user config candidate");
            builder = builder.add_source(File::from(user).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(
                File::from(project_dir.join(PROJECT_CONFIG_FILE)).required(false),
            ),
        };

        builder = builder.add_source(
            Environment::with_prefix("YU")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness;
    /// `None` when no home directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "yu").map(|d| d.config_dir().join("config.toml"))
    }

    /// The core settings for this configuration with `global` flags applied.
    pub fn project_settings(&self, global: &GlobalArgs) -> ProjectSettings {
        ProjectSettings {
            compose_program: self.compose.program.clone(),
            runtime_program: self.compose.runtime.clone(),
            compose_file: self.compose.file.clone(),
            shell: self.compose.shell.clone(),
            test_env: self.compose.test_env.clone(),
            manifest: self.services.manifest.clone(),
            test_entrypoint: self.services.test_entrypoint.clone(),
            test_command: self.services.test_command.clone(),
            package_command: self.services.package_command.clone(),
            seed_script: self.services.seed_script.clone(),
            marker_suffix: self.scaffold.marker_suffix.clone(),
            fragment: self.scaffold.fragment.clone(),
            ..ProjectSettings::default()
        }
        .with_verbose(global.is_verbose())
        .with_remove_containers(!global.no_rm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_core_settings() {
        let settings = AppConfig::default().project_settings(&GlobalArgs::default());
        assert_eq!(settings, ProjectSettings::default());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn flags_override_config() {
        let global = GlobalArgs {
            verbose: 1,
            no_rm: true,
            ..GlobalArgs::default()
        };
        let settings = AppConfig::default().project_settings(&global);
        assert!(settings.verbose);
        assert!(!settings.remove_containers);
    }

    #[test]
    fn project_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(PROJECT_CONFIG_FILE),
            "[compose]\nprogram = \"podman-compose\"\n\n[services]\nmanifest = \"package.json\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(None, tmp.path()).unwrap();
        assert_eq!(cfg.compose.program, "podman-compose");
        assert_eq!(cfg.services.manifest, PathBuf::from("package.json"));
        // Untouched keys keep their defaults.
        assert_eq!(cfg.compose.runtime, "docker");
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing), tmp.path()).is_err());
    }

    #[test]
    fn explicit_config_file_replaces_project_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(PROJECT_CONFIG_FILE),
            "[compose]\nshell = \"zsh\"\n",
        )
        .unwrap();
        let custom = tmp.path().join("custom.toml");
        std::fs::write(&custom, "[scaffold]\ntemplate_dir = \"tpl\"\n").unwrap();

        let cfg = AppConfig::load(Some(&custom), tmp.path()).unwrap();
        assert_eq!(cfg.scaffold.template_dir, Some(PathBuf::from("tpl")));
        assert_eq!(cfg.compose.shell, "bash");
    }

    #[test]
    fn config_path_ends_with_config_toml() {
        if let Some(p) = AppConfig::config_path() {
            assert!(p.ends_with("config.toml"));
        }
    }
}
