//! Output management and formatting.
//!
//! Everything user-facing goes to stdout through [`OutputManager`]; the
//! core's progress and success messages reach it through the
//! [`Reporter`] port.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use tracing::debug;
use yu_core::application::ports::Reporter;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is off when requested by flag, `NO_COLOR` or config, and when
    /// stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let no_color = args.no_color || config.output.no_color || !io::stdout().is_terminal();
        Self::with_options(args.quiet, no_color)
    }

    pub fn with_options(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.success_line(msg))
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.info_line(msg))
    }

    // ── Formatting ────────────────────────────────────────────────────────

    fn success_line(&self, msg: &str) -> String {
        if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        }
    }

    fn info_line(&self, msg: &str) -> String {
        if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        }
    }
}

impl Reporter for OutputManager {
    fn progress(&self, message: &str) {
        if let Err(e) = self.info(message) {
            debug!(error = %e, "failed to write progress");
        }
    }

    fn success(&self, message: &str) {
        if let Err(e) = OutputManager::success(self, message) {
            debug!(error = %e, "failed to write success");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_suppresses_info() {
        let out = OutputManager::with_options(true, true);
        assert!(out.info("hello").is_ok());
        assert!(out.success("done").is_ok());
    }

    #[test]
    fn plain_lines_carry_symbols() {
        let out = OutputManager::with_options(false, true);
        assert_eq!(out.success_line("done"), "\u{2713} done");
        assert_eq!(out.info_line("Building images..."), "\u{2139} Building images...");
    }

    #[test]
    fn colored_lines_contain_ansi() {
        let out = OutputManager::with_options(false, false);
        assert!(out.success_line("done").contains('\u{1b}'));
    }

    #[test]
    fn config_disables_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert!(!out.success_line("done").contains('\u{1b}'));
    }
}
