use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod suites;

/// Minimal unit-testing harness.
///
/// Runs the bundled test suites in registration order, printing a `.` per
/// passing assertion, an `F` plus message per failing test, and a closing
/// summary with real and CPU timings.
///
/// EXAMPLES:
///     minunit                      Run every suite
///     minunit run --no-color       Run without colored markers
///     minunit list                 List registered suites
///
/// ENVIRONMENT VARIABLES:
///     MINUNIT_LOG       Log filter for stderr diagnostics (default: warn)
///     MINUNIT_NO_COLOR  Set to disable colored output
///     NO_COLOR          Set to disable colored output
#[derive(Parser)]
#[command(name = "minunit")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every registered suite and print the summary
    ///
    /// Test failures are reported but never change the exit status.
    ///
    /// EXAMPLES:
    ///     minunit run                  Run all suites
    ///     minunit run -v               Log suite and test events to stderr
    #[command(visible_alias = "r")]
    Run {
        /// Disable colored progress markers (also MINUNIT_NO_COLOR, NO_COLOR)
        #[arg(long)]
        no_color: bool,
        /// Log suite and test events at debug level
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// List registered suites in the order they run
    #[command(visible_alias = "l")]
    List,

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     minunit completions bash > ~/.bash_completions/minunit.bash
    ///     minunit completions zsh > ~/.zfunc/_minunit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Install the stderr log subscriber.
///
/// A malformed filter falls back to [`config::DEFAULT_LOG_FILTER`] so a bad
/// `MINUNIT_LOG` never stops the run.
fn init_tracing(filter: &str) -> Result<()> {
    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(e) => (EnvFilter::new(config::DEFAULT_LOG_FILTER), Some(e)),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    if let Some(e) = rejected {
        warn!(filter, "invalid log filter, using {}: {}", config::DEFAULT_LOG_FILTER, e);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();

    let command = cli.command.unwrap_or(Commands::Run {
        no_color: false,
        verbose: false,
    });

    match command {
        Commands::Run { no_color, verbose } => {
            init_tracing(cli_config.log_filter(verbose))?;
            let args = commands::run::RunArgs {
                // Command-line flag or either environment variable
                no_color: no_color || cli_config.no_color,
            };
            commands::run::run(args)?;
        }
        Commands::List => {
            init_tracing(cli_config.log_filter(false))?;
            commands::list::run()?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }

    Ok(())
}
