//! Template source held entirely in memory.

use yu_core::{application::ports::TemplateSource, domain::TemplateFile, error::YuResult};

/// One entry of an [`InlineTemplate`].
#[derive(Debug, Clone, Copy)]
pub struct InlineFile {
    pub path: &'static str,
    pub contents: &'static str,
    pub executable: bool,
}

impl InlineFile {
    pub const fn new(path: &'static str, contents: &'static str) -> Self {
        Self {
            path,
            contents,
            executable: false,
        }
    }

    pub const fn executable(path: &'static str, contents: &'static str) -> Self {
        Self {
            path,
            contents,
            executable: true,
        }
    }
}

/// A template whose files are compiled into the binary (or built by a test).
#[derive(Debug, Clone)]
pub struct InlineTemplate {
    name: String,
    files: Vec<InlineFile>,
}

impl InlineTemplate {
    pub fn new(name: impl Into<String>, files: Vec<InlineFile>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

impl TemplateSource for InlineTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn files(&self) -> YuResult<Vec<TemplateFile>> {
        self.files
            .iter()
            .map(|f| TemplateFile::new(f.path, f.contents, f.executable).map_err(Into::into))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_paths_that_escape_the_service_directory() {
        let template = InlineTemplate::new("bad", vec![InlineFile::new("../evil", "")]);
        assert!(template.files().is_err());
    }
}
