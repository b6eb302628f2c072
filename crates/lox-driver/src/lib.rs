//! Driver for the Lox front end.
//!
//! Supplies source text to the scanner and collects what it reports:
//! 1. Read the script (or take a prompt line)
//! 2. Scan it into tokens
//! 3. Turn lexer errors into reportable diagnostics
//! 4. Pick the process exit status
//!
//! Errors are carried in the returned [`ScanReport`]; there is no shared
//! "had error" state, so every run starts clean.

use lox_lexer::{LexError, Token};
use std::fmt;
use std::path::Path;

/// Exit status for command-line usage errors (`EX_USAGE`).
pub const EX_USAGE: u8 = 64;

/// Exit status when the input contained errors (`EX_DATAERR`).
pub const EX_DATAERR: u8 = 65;

/// Driver configuration.
#[derive(Debug, Default, Clone)]
pub struct DriverConfig {
    /// Enable verbose output.
    pub verbose: bool,
}

/// Result of scanning one source text.
#[derive(Debug)]
pub struct ScanReport {
    /// Tokens in source order, ending with EOF.
    pub tokens: Vec<Token>,
    /// Errors encountered.
    pub errors: Vec<ReportedError>,
}

impl ScanReport {
    /// Whether any error was reported during the scan.
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The exit status a script run should end with.
    pub fn exit_code(&self) -> u8 {
        if self.had_error() {
            EX_DATAERR
        } else {
            0
        }
    }
}

/// An error reported by the scanner, tied to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedError {
    pub line: usize,
    pub message: String,
    pub file: Option<String>,
}

impl ReportedError {
    fn from_lex(err: &LexError, file: Option<&Path>) -> Self {
        Self {
            line: err.line(),
            message: err.to_string(),
            file: file.map(|p| p.display().to_string()),
        }
    }
}

impl fmt::Display for ReportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Scan a source file.
pub fn run_file(path: &Path, config: &DriverConfig) -> miette::Result<ScanReport> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;

    Ok(run_source(&source, Some(path), config))
}

/// Scan source text.
pub fn run_source(source: &str, source_path: Option<&Path>, config: &DriverConfig) -> ScanReport {
    if config.verbose {
        tracing::info!("Scanning {} bytes...", source.len());
    }

    let (tokens, lex_errors) = lox_lexer::tokenize(source);

    let errors: Vec<_> = lex_errors
        .iter()
        .map(|err| ReportedError::from_lex(err, source_path))
        .collect();

    for err in &errors {
        tracing::debug!(line = err.line, file = ?err.file, "{}", err.message);
    }

    if config.verbose {
        tracing::info!("{} tokens, {} errors", tokens.len(), errors.len());
    }

    ScanReport { tokens, errors }
}
