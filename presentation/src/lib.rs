//! Presentation layer for butler
//!
//! This crate contains the CLI definitions, console output formatting,
//! and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
