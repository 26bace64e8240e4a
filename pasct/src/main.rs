//! Pasct CLI - Token dump tool for the pasc scanner.
//!
//! This is the main entry point for the pasct CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_demo, run_lex, DemoArgs, LexArgs};
use config::{Config, OutputFormat};
use error::{PasctError, Result};

/// Pasct - print the tokens of Pascal-subset programs
#[derive(Parser, Debug)]
#[command(name = "pasct")]
#[command(author = "Pasc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the tokens of Pascal-subset programs", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PASCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PASCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PASCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the pasct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the built-in sample program
    ///
    /// Prints one `type=<TYPE>\tvalue=<value>` line per token, ending with
    /// the EOF token.
    Demo(DemoCommand),

    /// Scan a source file
    ///
    /// Prints the tokens of FILE, or of standard input when FILE is `-`.
    /// Stops with a diagnostic at the first lexical error.
    Lex(LexCommand),
}

/// Arguments for the demo subcommand.
#[derive(Parser, Debug)]
struct DemoCommand {
    /// Prefix each token with its line and column
    #[arg(short, long)]
    positions: bool,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file, or `-` for standard input
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Prefix each token with its line and column
    #[arg(short, long)]
    positions: bool,
}

/// Main entry point for the pasct CLI.
///
/// Prints `error: ...` and exits with status 1 when the command fails.
/// Lexical errors have already been rendered as a diagnostic, so only the
/// exit status is reported for them.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !is_reported(&err) {
                eprintln!("error: {:#}", err);
            }
            ExitCode::FAILURE
        },
    }
}

/// Returns true if the failure was already printed as a diagnostic.
fn is_reported(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<PasctError>(), Some(PasctError::Lex(_)))
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, &config, cli.no_color)?;
    Ok(())
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Log lines go to
/// stderr so token output on stdout stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PasctError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config, no_color: bool) -> Result<()> {
    match command {
        Commands::Demo(args) => run_demo(DemoArgs {
            show_positions: args.positions || config.output.show_positions,
        }),
        Commands::Lex(args) => run_lex(LexArgs {
            input: args.input,
            format: args.format.unwrap_or(config.output.format),
            show_positions: args.positions || config.output.show_positions,
            use_color: !no_color,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_demo() {
        let cli = Cli::parse_from(["pasct", "demo"]);
        assert!(matches!(cli.command, Commands::Demo(DemoCommand { positions: false })));
    }

    #[test]
    fn test_cli_parse_demo_with_positions() {
        let cli = Cli::parse_from(["pasct", "demo", "--positions"]);
        assert!(matches!(cli.command, Commands::Demo(DemoCommand { positions: true })));
    }

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::parse_from(["pasct", "lex", "prog.pas"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("prog.pas"));
            assert_eq!(args.format, None);
            assert!(!args.positions);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_stdin() {
        let cli = Cli::parse_from(["pasct", "lex", "-"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("-"));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_format() {
        let cli = Cli::parse_from(["pasct", "lex", "prog.pas", "--format", "json"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_rejects_unknown_format() {
        let result = Cli::try_parse_from(["pasct", "lex", "prog.pas", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_lex_requires_input() {
        assert!(Cli::try_parse_from(["pasct", "lex"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["pasct", "--verbose", "demo"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["pasct", "demo", "--config", "/path/to/pasct.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/pasct.toml")));
    }

    #[test]
    fn test_lex_errors_are_not_echoed() {
        let lex_err = pasc_lex::LexError::UnexpectedCharacter {
            character: '@',
            span: pasc_util::Span::new(2, 3, 1, 3),
        };
        assert!(is_reported(&anyhow::Error::from(PasctError::from(lex_err))));

        let file_err = PasctError::FileOperation("prog.pas: not found".to_string());
        assert!(!is_reported(&anyhow::Error::from(file_err)));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["pasct", "--no-color", "demo"]);
        assert!(cli.no_color);
    }
}
