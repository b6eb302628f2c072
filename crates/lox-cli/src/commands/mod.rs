//! CLI commands.

pub mod repl;
pub mod run;
