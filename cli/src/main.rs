//! CLI entrypoint for The Butler
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use butler_application::{ChatTurnUseCase, ConversationLogger};
use butler_domain::DomainError;
use butler_infrastructure::{
    select_providers, ConfigLoader, JsonlConversationLogger, VaderSentimentAnalyzer,
};
use butler_presentation::{ChatRepl, Cli, ConsoleFormatter};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GEMINI_API_KEY / OPENAI_API_KEY from a local .env, if any
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting The Butler");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    // === Dependency Injection ===
    let selection = select_providers(&config.providers);
    let active_kind = selection.active_kind();

    let mut use_case = ChatTurnUseCase::new(
        selection.active,
        selection.standby,
        Arc::new(VaderSentimentAnalyzer::new()),
        config.chat.to_chat_params(),
    );

    // Conversation transcript (flag or config)
    if cli.log_conversation || config.log.conversation {
        let path = config
            .log
            .conversation_file
            .as_ref()
            .map(std::path::PathBuf::from)
            .or_else(JsonlConversationLogger::default_path);

        if let Some(logger) = path.and_then(|p| JsonlConversationLogger::new(&p)) {
            info!("Writing conversation transcript to {}", logger.path().display());
            use_case =
                use_case.with_conversation_logger(Arc::new(logger) as Arc<dyn ConversationLogger>);
        }
    }

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case, active_kind).with_banner(!cli.quiet);
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };
    if question.trim().is_empty() {
        bail!(DomainError::EmptyMessage);
    }

    let outcome = use_case.execute(&question).await;
    ConsoleFormatter::print_butler(&outcome.text);

    Ok(())
}
