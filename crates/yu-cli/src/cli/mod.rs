//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "yu",
    bin_name = "yu",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Container framework based on docker-compose",
    long_about = "yu turns short invocations into docker-compose command \
                  sequences: dependency packaging before builds, per-service \
                  tests, service scaffolding and an environment check.",
    after_help = "EXAMPLES:\n\
        \x20 yu doctor\n\
        \x20 yu service billing\n\
        \x20 yu build\n\
        \x20 yu test billing\n\
        \x20 yu run --test billing rake db:migrate",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; help is printed when absent.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run tests for the named services, or every service with a test
    /// entrypoint.
    #[command(
        about = "Run service tests",
        after_help = "EXAMPLES:\n\
            \x20 yu test\n\
            \x20 yu test billing accounts"
    )]
    Test(ServicesArgs),

    /// Package dependencies, then build images.
    #[command(about = "Package dependencies and build images")]
    Build(ServicesArgs),

    /// Open a shell in a new container for one service.
    #[command(
        about = "Open a shell in a service container",
        after_help = "EXAMPLES:\n\
            \x20 yu shell billing\n\
            \x20 yu shell --test billing"
    )]
    Shell(ShellArgs),

    /// Rebuild everything from scratch and bring it back up.
    #[command(about = "Kill, remove, rebuild, seed and start all containers")]
    Reset(ResetArgs),

    /// Check that docker and docker-compose are usable here.
    #[command(about = "Check the local environment")]
    Doctor,

    /// Kill and start the named (or all) services.
    #[command(about = "Restart containers")]
    Restart(ServicesArgs),

    /// Start the named (or all) services.
    #[command(about = "Start containers")]
    Start(ServicesArgs),

    /// Kill, remove, seed and start the named (or all) services.
    #[command(about = "Recreate containers")]
    Recreate(ServicesArgs),

    /// Run a command in a new ephemeral container.
    #[command(
        about = "Run a one-off command in a container",
        after_help = "EXAMPLES:\n\
            \x20 yu run billing rake db:migrate\n\
            \x20 yu run --test billing bin/console"
    )]
    Run(RunArgs),

    /// Scaffold new services from a template.
    #[command(
        about = "Generate new services",
        after_help = "EXAMPLES:\n\
            \x20 yu service billing\n\
            \x20 yu service billing accounts --template ./templates/ruby"
    )]
    Service(ServiceArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 yu completions bash > ~/.local/share/bash-completion/completions/yu\n\
            \x20 yu completions zsh  > ~/.zfunc/_yu\n\
            \x20 yu completions fish > ~/.config/fish/completions/yu.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// An optional list of services.
#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// Service names or paths; only the final path component is used.
    #[arg(value_name = "SERVICE")]
    pub services: Vec<String>,
}

// ── shell ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Load the test environment.
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Exactly one service.
    #[arg(value_name = "SERVICE")]
    pub services: Vec<String>,
}

// ── reset ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Build images without the layer cache.
    #[arg(long = "without-cache")]
    pub without_cache: bool,
}

// ── run ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Load the test environment.
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Service followed by the command to run in it.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

// ── service ───────────────────────────────────────────────────────────────────

/// Arguments for `yu service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Names of the services to create.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Template directory to copy instead of the built-in template,
    /// relative to the project directory.
    #[arg(long = "template", value_name = "DIR")]
    pub template: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `yu completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_parses_without_command() {
        let cli = Cli::try_parse_from(["yu"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_test_with_services() {
        let cli = Cli::parse_from(["yu", "test", "billing", "./services/accounts"]);
        match cli.command {
            Some(Commands::Test(args)) => {
                assert_eq!(args.services, ["billing", "./services/accounts"]);
            }
            other => panic!("expected Test, got {other:?}"),
        }
    }

    #[test]
    fn run_keeps_hyphenated_arguments() {
        let cli = Cli::parse_from(["yu", "run", "--test", "web", "rspec", "-fd", "--tag", "slow"]);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert!(args.test);
                assert_eq!(args.args, ["web", "rspec", "-fd", "--tag", "slow"]);
            }
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["yu", "start", "web", "--no-rm", "-vv"]);
        assert!(cli.global.no_rm);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn reset_without_cache_flag() {
        let cli = Cli::parse_from(["yu", "reset", "--without-cache"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Reset(ResetArgs { without_cache: true }))
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["yu", "--quiet", "--verbose", "doctor"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["yu", "deploy"]).is_err());
    }
}
