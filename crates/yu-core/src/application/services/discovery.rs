//! Service Discovery - which subdirectories are services.
//!
//! Always reads the filesystem at call time; nothing is cached between calls.
//! Hidden directories (`.git`, `.cache`) are never services.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{Marker, ProjectSettings, Service, ServiceName},
    error::YuResult,
};

/// Scans the immediate subdirectories of a project root.
pub struct ServiceDiscovery<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
    settings: &'a ProjectSettings,
}

impl<'a> ServiceDiscovery<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        root: &'a Path,
        settings: &'a ProjectSettings,
    ) -> Self {
        Self {
            filesystem,
            root,
            settings,
        }
    }

    /// Every subdirectory with the markers found in it, sorted by name.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn discover(&self) -> YuResult<Vec<Service>> {
        let mut dirs = self.filesystem.subdirectories(self.root)?;
        dirs.sort();
        dirs.dedup();

        let services = dirs
            .into_iter()
            .filter(|dir| !dir.starts_with('.'))
            .filter_map(|dir| ServiceName::new(dir).ok())
            .map(|name| Service {
                has_manifest: self.has_marker(&name, Marker::DependencyManifest),
                has_test_entrypoint: self.has_marker(&name, Marker::TestEntrypoint),
                name,
            })
            .collect::<Vec<_>>();

        debug!(count = services.len(), "discovered directories");
        Ok(services)
    }

    /// Names of the subdirectories containing `marker`, sorted.
    pub fn services_with_marker(&self, marker: Marker) -> YuResult<Vec<ServiceName>> {
        let names: Vec<_> = self
            .discover()?
            .into_iter()
            .filter(|svc| svc.has(marker))
            .map(|svc| svc.name)
            .collect();

        debug!(%marker, services = ?names, "services with marker");
        Ok(names)
    }

    /// Explicit arguments when given, otherwise the services with `marker`.
    pub fn targets_or_marked<S: AsRef<str>>(
        &self,
        args: &[S],
        marker: Marker,
    ) -> YuResult<Vec<ServiceName>> {
        if args.is_empty() {
            self.services_with_marker(marker)
        } else {
            Ok(ServiceName::from_args(args)?)
        }
    }

    fn has_marker(&self, name: &ServiceName, marker: Marker) -> bool {
        let path = self
            .root
            .join(name)
            .join(self.settings.marker_path(marker));
        self.filesystem.is_file(&path)
    }
}
