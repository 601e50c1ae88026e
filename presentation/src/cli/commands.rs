//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for butler
#[derive(Parser, Debug)]
#[command(name = "butler")]
#[command(
    author,
    version,
    about = "The Butler - concierge for the Scaters Raptor Roadshow 2026"
)]
#[command(long_about = r#"
The Butler answers questions about the Scaters Raptor Roadshow 2026 and
The Predatory Hunt: tour stops, dates, the Raptor deck collection,
registration deadlines, prizes and safety.

Responses come from a layered pipeline: curated answers for the common
questions, a remote model for everything else in scope, and a built-in
fallback so the session keeps working without network or API keys.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./butler.toml       Project-level config
3. ~/.config/butler/config.toml   Global config

API keys are read from GEMINI_API_KEY and OPENAI_API_KEY (or a .env
file in the working directory).

Example:
  butler "When does registration close?"
  butler --chat
  butler --chat --log-conversation
"#)]
pub struct Cli {
    /// One-shot question (omit and pass --chat for interactive mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the startup banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write a JSONL transcript of the conversation
    #[arg(long)]
    pub log_conversation: bool,
}
