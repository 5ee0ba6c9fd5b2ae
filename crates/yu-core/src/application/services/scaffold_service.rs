//! Scaffold Service - generate new service directories from a template.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Refuse the whole batch if any target directory already exists
//! 2. Copy the template into a directory named after each service
//! 3. Render and remove every marked file
//! 4. Append the compose fragment to the composition file
//!
//! There is no rollback: a failure part-way leaves the files written so far.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter, TemplateSource},
    },
    domain::{ProjectSettings, RenderContext, ServiceName, strip_marker},
    error::YuResult,
};

/// Scaffolding service.
pub struct ScaffoldService {
    template: Box<dyn TemplateSource>,
    filesystem: Box<dyn Filesystem>,
    reporter: Arc<dyn Reporter>,
    settings: ProjectSettings,
    root: PathBuf,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        template: Box<dyn TemplateSource>,
        filesystem: Box<dyn Filesystem>,
        reporter: Arc<dyn Reporter>,
        settings: ProjectSettings,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template,
            filesystem,
            reporter,
            settings,
            root: root.into(),
        }
    }

    /// Scaffold one service per argument.
    ///
    /// Arguments are normalised to service names and de-duplicated.  If any
    /// of them already exists nothing is written and
    /// [`ApplicationError::ServicesExist`] lists every conflict.
    #[instrument(skip_all, fields(template = %self.template.name()))]
    pub fn create<S: AsRef<str>>(&self, args: &[S]) -> YuResult<Vec<ServiceName>> {
        let mut names = ServiceName::from_args(args)?;
        if names.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "Please provide at least one service name".into(),
            )
            .into());
        }
        dedup_in_order(&mut names);

        let existing: Vec<String> = names
            .iter()
            .filter(|name| self.filesystem.exists(&self.root.join(name)))
            .map(ToString::to_string)
            .collect();
        if !existing.is_empty() {
            return Err(ApplicationError::ServicesExist { names: existing }.into());
        }

        for name in &names {
            self.reporter
                .progress(&format!("Generating service scaffold for {name}..."));
            let dir = self.root.join(name);

            self.copy_template(&dir)?;
            self.render_marked_files(&dir, &RenderContext::new(name))?;
            self.append_fragment(&dir)?;

            info!(service = %name, "scaffold created");
        }

        Ok(names)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Copy every template file below `dir`, keeping executable bits.
    fn copy_template(&self, dir: &Path) -> YuResult<()> {
        self.filesystem.create_dir_all(dir)?;

        for file in self.template.files()? {
            let target = dir.join(file.path());
            if let Some(parent) = target.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&target, file.contents())?;
            if file.is_executable() {
                self.filesystem.set_permissions(&target, true)?;
            }
        }

        Ok(())
    }

    /// Render each `*<suffix>` file to its unsuffixed path and delete it.
    fn render_marked_files(&self, dir: &Path, context: &RenderContext) -> YuResult<()> {
        let suffix = &self.settings.marker_suffix;

        for path in self.filesystem.walk_files(dir)? {
            let Some(target) = strip_marker(&path, suffix) else {
                continue;
            };

            let source = self.filesystem.read_to_string(&path)?;
            let rendered = context
                .render(&source)
                .map_err(|source| ApplicationError::RenderFailed {
                    path: path.clone(),
                    source,
                })?;

            self.filesystem.write_file(&target, rendered.as_bytes())?;
            if self.filesystem.is_executable(&path) {
                self.filesystem.set_permissions(&target, true)?;
            }
            self.filesystem.remove_file(&path)?;
            debug!(from = %path.display(), to = %target.display(), "rendered");
        }

        Ok(())
    }

    /// Move the compose fragment, if any, onto the end of the composition file.
    fn append_fragment(&self, dir: &Path) -> YuResult<()> {
        let fragment = dir.join(&self.settings.fragment);
        if !self.filesystem.is_file(&fragment) {
            debug!(path = %fragment.display(), "no compose fragment");
            return Ok(());
        }

        let contents = self.filesystem.read_to_string(&fragment)?;
        let compose_file = self.root.join(&self.settings.compose_file);
        self.filesystem
            .append_file(&compose_file, contents.as_bytes())?;
        self.filesystem.remove_file(&fragment)?;

        info!(to = %compose_file.display(), "appended compose fragment");
        Ok(())
    }
}

fn dedup_in_order(names: &mut Vec<ServiceName>) {
    let mut seen = std::collections::HashSet::new();
    names.retain(|name| seen.insert(name.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let mut names = ServiceName::from_args(&["web", "api", "web", "./api"]).unwrap();
        dedup_in_order(&mut names);
        let names: Vec<_> = names.iter().map(ServiceName::as_str).collect();
        assert_eq!(names, ["web", "api"]);
    }
}
