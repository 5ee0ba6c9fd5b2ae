//! Scaffold template sources.

mod builtin;
mod directory;
mod inline;

pub use builtin::{DEFAULT_TEMPLATE, ruby_base};
pub use directory::DirectoryTemplate;
pub use inline::{InlineFile, InlineTemplate};
