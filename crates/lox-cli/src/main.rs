//! Lox CLI - scan a script or an interactive prompt and echo the tokens.

use clap::Parser;
use lox_driver::{DriverConfig, EX_USAGE};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

/// Lox - tokenize Lox scripts
#[derive(Parser)]
#[command(name = "lox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Script to scan (starts an interactive prompt when omitted)
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--help` and `--version` also arrive here, on stdout.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EX_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let config = DriverConfig {
        verbose: cli.verbose,
    };

    let result = match cli.script {
        Some(script) => commands::run::run(&script, &config),
        None => commands::repl::run(&config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(report) => {
            eprintln!("{:?}", report);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_script_argument() {
        let cli = Cli::try_parse_from(["lox", "-v", "hello.lox"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.script, Some(PathBuf::from("hello.lox")));

        let cli = Cli::try_parse_from(["lox"]).unwrap();
        assert!(cli.script.is_none());
    }

    #[test]
    fn test_too_many_scripts_is_a_usage_error() {
        let err = Cli::try_parse_from(["lox", "a.lox", "b.lox"]).err().unwrap();
        assert!(err.use_stderr());
    }
}
