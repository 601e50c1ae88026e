//! Console formatting for chat output
//!
//! Butler replies are word-wrapped to a fixed column and prefixed with
//! a `[HH:MM:SS] BUTLER:` header; the user's prompt carries the same
//! timestamped shape so the transcript reads like a dialogue.

use butler_domain::ProviderKind;
use colored::Colorize;

/// Column the reply text wraps at.
pub const WRAP_WIDTH: usize = 70;

/// Console formatter for chat messages
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Word-wrap `text` to `width` columns.
    ///
    /// Existing line breaks and blank lines are preserved; only
    /// overlong lines are re-broken at word boundaries. A single word
    /// longer than the width gets its own line, unbroken.
    pub fn wrap(text: &str, width: usize) -> String {
        let mut out = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                out.push(String::new());
                continue;
            }

            let mut current = String::new();
            for word in line.split_whitespace() {
                if current.is_empty() {
                    current.push_str(word);
                } else if current.chars().count() + 1 + word.chars().count() <= width {
                    current.push(' ');
                    current.push_str(word);
                } else {
                    out.push(std::mem::take(&mut current));
                    current.push_str(word);
                }
            }
            out.push(current);
        }

        out.join("\n")
    }

    fn timestamp() -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }

    /// Readline prompt for the user's turn.
    pub fn user_prompt() -> String {
        format!("[{}] YOU: ", Self::timestamp())
    }

    /// Print one Butler reply with its timestamped header.
    pub fn print_butler(text: &str) {
        println!();
        println!(
            "{} {}",
            format!("[{}]", Self::timestamp()).dimmed(),
            "BUTLER:".cyan().bold()
        );
        println!("{}", Self::wrap(text, WRAP_WIDTH));
        println!();
    }

    /// Print the startup banner with the session's provider status.
    pub fn print_banner(provider: Option<ProviderKind>) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│   The Butler - Raptor Roadshow 2026          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        match provider {
            Some(kind) => println!("Remote provider: {}", kind.to_string().green()),
            None => println!(
                "{}",
                "No remote provider available - running on built-in answers only".yellow()
            ),
        }
        println!();
        println!("Commands:");
        println!("  quit, exit, q  - End the conversation");
        println!("  clear          - Forget the conversation so far");
        println!();
    }

    /// Print the parting message.
    pub fn print_farewell() {
        Self::print_butler(
            "It has been a pleasure to serve. \
             Do enjoy the Raptor Roadshow - and mind the deadlines!",
        );
    }
}
