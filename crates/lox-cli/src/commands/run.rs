//! Run command - scan a script file and echo its tokens.

use lox_driver::{DriverConfig, ScanReport};
use std::path::Path;

pub fn run(file: &Path, config: &DriverConfig) -> miette::Result<u8> {
    tracing::debug!("Scanning: {}", file.display());

    let report = lox_driver::run_file(file, config)?;
    print_report(&report);

    Ok(report.exit_code())
}

/// Echo every token on stdout and every error on stderr.
pub(crate) fn print_report(report: &ScanReport) {
    for err in &report.errors {
        eprintln!("{}", err);
    }
    for token in &report.tokens {
        println!("{}", token);
    }
}
