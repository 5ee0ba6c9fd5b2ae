//! Built-in templates.
//!
//! The files live under `templates/` in this crate and are embedded at
//! compile time, so the `yu` binary needs nothing on disk to scaffold.

use super::inline::{InlineFile, InlineTemplate};

/// Name of the template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "ruby_base";

// ── ruby_base ─────────────────────────────────────────────────────────────────

/// A minimal Rack service with a bundler `Gemfile`, an rspec `bin/test`
/// entrypoint and a compose fragment.
pub fn ruby_base() -> InlineTemplate {
    InlineTemplate::new(
        DEFAULT_TEMPLATE,
        vec![
            InlineFile::new(
                "Dockerfile",
                include_str!("../../templates/ruby_base/Dockerfile"),
            ),
            InlineFile::new("Gemfile", include_str!("../../templates/ruby_base/Gemfile")),
            InlineFile::executable(
                "bin/test",
                include_str!("../../templates/ruby_base/bin/test"),
            ),
            InlineFile::new(
                "config.ru.erb",
                include_str!("../../templates/ruby_base/config.ru.erb"),
            ),
            InlineFile::new(
                ".dockerignore.erb",
                include_str!("../../templates/ruby_base/.dockerignore.erb"),
            ),
            InlineFile::new(
                "_docker-compose.yml.erb",
                include_str!("../../templates/ruby_base/_docker-compose.yml.erb"),
            ),
        ],
    )
}
