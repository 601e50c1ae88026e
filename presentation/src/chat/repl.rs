//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use butler_application::ChatTurnUseCase;
use butler_domain::ProviderKind;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: ChatTurnUseCase,
    provider: Option<ProviderKind>,
    show_banner: bool,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(use_case: ChatTurnUseCase, provider: Option<ProviderKind>) -> Self {
        Self {
            use_case,
            provider,
            show_banner: true,
        }
    }

    /// Set whether to show the startup banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("butler").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            ConsoleFormatter::print_banner(self.provider);
        }

        loop {
            let readline = rl.readline(&ConsoleFormatter::user_prompt());

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle control words
                    match line.to_lowercase().as_str() {
                        "quit" | "exit" | "q" => {
                            ConsoleFormatter::print_farewell();
                            break;
                        }
                        "clear" => {
                            self.use_case.clear_history();
                            println!("Conversation history cleared.");
                            continue;
                        }
                        _ => {}
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    let outcome = self.use_case.execute(line).await;
                    ConsoleFormatter::print_butler(&outcome.text);
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    ConsoleFormatter::print_farewell();
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }
}
