//! Interactive prompt - scan one line at a time.

use super::run::print_report;
use lox_driver::DriverConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = "> ";

pub fn run(config: &DriverConfig) -> miette::Result<u8> {
    let mut editor =
        DefaultEditor::new().map_err(|e| miette::miette!("Failed to start prompt: {}", e))?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                // Errors are shown but never end the session.
                let report = lox_driver::run_source(&line, None, config);
                print_report(&report);
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(miette::miette!("Failed to read line: {}", err)),
        }
    }

    Ok(0)
}
