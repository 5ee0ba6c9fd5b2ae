//! Rendering of marked template files.
//!
//! Templates use ERB-style output tags.  A scaffold binds exactly one
//! variable, `service_name`, so the supported syntax is small:
//!
//! | Syntax                   | Result                           |
//! |--------------------------|----------------------------------|
//! | `<%= service_name %>`    | the service name                 |
//! | `<%# anything %>`        | nothing (comment)                |
//! | `<%%`                    | a literal `<%`                   |
//! | any other `<% ... %>`    | [`DomainError::UnsupportedTemplateTag`] |

use std::collections::HashMap;

use super::{DomainError, ServiceName};

const OPEN: &str = "<%";
const CLOSE: &str = "%>";

/// Variables bound while rendering a scaffold.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(service_name: &ServiceName) -> Self {
        let mut variables = HashMap::new();
        variables.insert("service_name".to_string(), service_name.to_string());
        Self { variables }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Render `source`, substituting every output tag.
    pub fn render(&self, source: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(source.len());
        let mut rest = source;
        let mut consumed = 0;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            if let Some(escaped) = after_open.strip_prefix('%') {
                out.push_str(OPEN);
                consumed += start + OPEN.len() + 1;
                rest = escaped;
                continue;
            }

            let end = after_open
                .find(CLOSE)
                .ok_or(DomainError::UnterminatedTemplateTag {
                    offset: consumed + start,
                })?;
            let tag = &after_open[..end];
            out.push_str(&self.evaluate(tag)?);

            let advance = start + OPEN.len() + end + CLOSE.len();
            consumed += advance;
            rest = &rest[advance..];
        }

        out.push_str(rest);
        Ok(out)
    }

    fn evaluate(&self, tag: &str) -> Result<String, DomainError> {
        if tag.starts_with('#') {
            return Ok(String::new());
        }

        let Some(expr) = tag.strip_prefix('=') else {
            return Err(DomainError::UnsupportedTemplateTag { tag: tag.into() });
        };
        let name = expr.trim().trim_end_matches('-').trim();

        self.get(name)
            .map(str::to_owned)
            .ok_or_else(|| DomainError::UnknownTemplateVariable { name: name.into() })
    }
}
