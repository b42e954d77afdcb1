//! fitpro TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod page;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use page::Page;

/// Start the TUI with the user's config (or built-in defaults when no config
/// file can be read).
pub fn run() -> anyhow::Result<()> {
    let config = fitpro_core::config::Config::load()
        .unwrap_or_else(|_| fitpro_core::config::Config::defaults());
    let theme = theme::Theme::by_name(&config.ui.theme);
    App::new(config, theme).run()
}
