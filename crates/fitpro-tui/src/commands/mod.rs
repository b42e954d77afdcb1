// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, page::Page, theme::Theme};
use fitpro_core::auth::AuthMode;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Switch to a page by id
    Page(Page),
    // Open the auth modal in sign-in mode
    Login,
    // Open the auth modal in sign-up mode
    Signup,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "login" | "signin" => Ok(Command::Login),
            "signup" => Ok(Command::Signup),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "page" => match Page::from_id(rest) {
                Some(page) => Ok(Command::Page(page)),
                None => Err(format!(
                    "usage: page <home|exercises|calculator|nutrition|dashboard|trainers>, got {rest:?}"
                )),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::Page(page) => {
            tracing::debug!(page = page.id(), "command: page switch");
            s.page = page;
        }
        Command::Login => {
            s.open_auth(AuthMode::SignIn);
        }
        Command::Signup => {
            s.open_auth(AuthMode::SignUp);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
