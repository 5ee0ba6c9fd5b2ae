//! Command runner adapters.

mod recording;
mod shell;

pub use recording::{RecordedCall, RecordingRunner};
pub use shell::ShellRunner;
