//! Command handlers, one module per subcommand.
//!
//! Each handler wires the production adapters into a core service and maps
//! the outcome to the terminal.  No workflow logic lives here.

pub mod build;
pub mod completions;
pub mod doctor;
pub mod lifecycle;
pub mod reset;
pub mod run;
pub mod service;
pub mod shell;

use std::path::PathBuf;
use std::sync::Arc;

use yu_adapters::{LocalFilesystem, ShellRunner};
use yu_core::{
    application::{ComposeService, ScaffoldService, ports::TemplateSource},
    domain::ProjectSettings,
};

use crate::{cli::GlobalArgs, config::AppConfig, output::OutputManager};

/// Everything a handler needs, resolved once in `main`.
pub struct Context {
    /// Project directory all commands run in.
    pub root: PathBuf,
    pub settings: ProjectSettings,
    pub config: AppConfig,
    pub output: Arc<OutputManager>,
}

impl Context {
    pub fn new(global: &GlobalArgs, config: AppConfig, output: OutputManager) -> Self {
        Self {
            root: global.project_dir(),
            settings: config.project_settings(global),
            config,
            output: Arc::new(output),
        }
    }

    /// Compose workflows running real commands in the project directory.
    pub fn compose_service(&self) -> ComposeService {
        ComposeService::new(
            Box::new(ShellRunner::in_dir(&self.root)),
            Box::new(LocalFilesystem::new()),
            self.output.clone(),
            self.settings.clone(),
            &self.root,
        )
    }

    /// Scaffolding into the project directory from `template`.
    pub fn scaffold_service(&self, template: Box<dyn TemplateSource>) -> ScaffoldService {
        ScaffoldService::new(
            template,
            Box::new(LocalFilesystem::new()),
            self.output.clone(),
            self.settings.clone(),
            &self.root,
        )
    }
}
