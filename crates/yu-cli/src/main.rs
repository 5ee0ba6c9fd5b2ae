//! # yu CLI
//!
//! Container framework based on docker-compose.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit;
//!    an unknown subcommand also prints the full help listing).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults, config files, `YU_*` environment).
//! 4. Build the [`OutputManager`] and the command [`Context`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                      |
//! |------|------------------------------|
//! |  0   | Success                      |
//! |  1   | Any failure                  |
//! |  2   | Command-line parse error     |

use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    commands::Context,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.  A missing
    // .env is not an error.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, with exit code 0.
            let _ = e.print();
            if e.kind() == ErrorKind::InvalidSubcommand {
                eprint!("\n{}", Cli::command().render_help());
            }
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_rm = cli.global.no_rm,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.is_verbose();
    let no_color = cli.global.no_color;
    match run(cli) {
        Ok(()) => {
            info!("yu completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

/// Load configuration, then dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let Some(command) = cli.command else {
        Cli::command()
            .print_help()
            .with_cli_context(|| "failed to print help")?;
        return Ok(());
    };

    // Completions need neither a project nor configuration.
    if let Commands::Completions(args) = command {
        return commands::completions::execute(args);
    }

    // ── 3. Load configuration ─────────────────────────────────────────────
    let root = cli.global.project_dir();
    if !root.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", root.display()),
        });
    }
    let config = AppConfig::load(cli.global.config.as_deref(), &root)
        .with_cli_context(|| "failed to load configuration")?;

    // ── 4. Build output manager and context ───────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let ctx = Context::new(&cli.global, config, output);

    // ── 5. Dispatch ───────────────────────────────────────────────────────
    dispatch(command, &ctx)
}

fn dispatch(command: Commands, ctx: &Context) -> CliResult<()> {
    match command {
        Commands::Test(args) => commands::test::execute(args, ctx),
        Commands::Build(args) => commands::build::execute(args, ctx),
        Commands::Shell(args) => commands::shell::execute(args, ctx),
        Commands::Reset(args) => commands::reset::execute(args, ctx),
        Commands::Doctor => commands::doctor::execute(ctx),
        Commands::Restart(args) => commands::lifecycle::restart(args, ctx),
        Commands::Start(args) => commands::lifecycle::start(args, ctx),
        Commands::Recreate(args) => commands::lifecycle::recreate(args, ctx),
        Commands::Run(args) => commands::run::execute(args, ctx),
        Commands::Service(args) => commands::service::execute(args, ctx),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Translate a `CliError` into a user message and an exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if !no_color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
