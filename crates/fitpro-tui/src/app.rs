//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    page::Page,
    theme::Theme,
    widgets::{
        auth_modal::{AuthModal, AuthModalState},
        calculator::{Calculator, CalculatorState},
        command_bar::{CommandBar, CommandBarState},
        dashboard::Dashboard,
        exercise_library::{ExerciseLibrary, ExerciseLibraryState},
        help::HelpPopup,
        hero::Hero,
        nutrition::{Nutrition, NutritionState},
        search_bar::{SearchBar, SearchBarState, SearchDropdown},
        tab_bar::TabBar,
        trainers::{Trainers, TrainersState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fitpro_core::auth::{AuthMode, IdentityProvider, TracingProvider};
use fitpro_core::config::Config;
use fitpro_core::search::SearchHit;
use fitpro_core::stats;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The active page's content pane.
    Content,
    SearchBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub page: Page,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub search: SearchBarState,
    pub command_bar: CommandBarState,
    pub auth: AuthModalState,
    /// Boundary to the external identity provider.
    pub provider: Box<dyn IdentityProvider>,
    pub library: ExerciseLibraryState,
    pub nutrition: NutritionState,
    pub calculator: CalculatorState,
    pub trainers: TrainersState,
    pub quit: bool,
}

impl AppState {
    /// Switch to `page` with `entity_id` selected on arrival. This is the
    /// navigation callback search results fire; the search surface itself
    /// never changes pages.
    pub fn navigate(&mut self, page: Page, entity_id: &str) {
        tracing::debug!(page = page.id(), entity_id, "navigate");
        self.page = page;
        match page {
            Page::Exercises => self.library.select_id(entity_id),
            Page::Nutrition => self.nutrition.select_id(entity_id),
            _ => {}
        }
    }

    /// Open the auth modal and signal the identity provider.
    pub fn open_auth(&mut self, mode: AuthMode) {
        self.auth.open(mode);
        self.provider.open(mode);
    }

    /// Confirm the highlighted search result: navigate to its page with its
    /// identifier, then clear the query and return focus to the content.
    fn select_search_result(&mut self) {
        let Some(hit) = self.search.selected_hit() else {
            return;
        };
        let page = match hit {
            SearchHit::Exercise(_) => Page::Exercises,
            SearchHit::MealPlan(_) => Page::Nutrition,
        };
        let id = hit.id().to_string();
        self.navigate(page, &id);
        self.search.clear();
        self.focus = Focus::Content;
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Self {
        let search = SearchBarState::new(config.ui.search_results_limit);
        let calculator = CalculatorState::new(&config.calculator);

        let state = AppState {
            page: Page::Home,
            focus: Focus::Content,
            prev_focus: Focus::Content,
            theme,
            config,
            show_help: false,
            search,
            command_bar: CommandBarState::default(),
            auth: AuthModalState::default(),
            provider: Box::new(TracingProvider),
            library: ExerciseLibraryState::default(),
            nutrition: NutritionState::default(),
            calculator,
            trainers: TrainersState::default(),
            quit: false,
        };

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Auth modal intercepts all events while open.
        if s.auth.open {
            match event {
                AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("auth modal closed");
                    s.auth.close();
                    s.provider.close();
                }
                AppEvent::Nav(Direction::Left)
                | AppEvent::Nav(Direction::Right)
                | AppEvent::FocusNext => {
                    let mode = s.auth.toggle_mode();
                    s.provider.mode_changed(mode);
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the search bar)
            AppEvent::Char('?') if s.focus != Focus::SearchBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the search bar)
            AppEvent::Char(':') if s.focus != Focus::SearchBar => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            // Open the auth modal
            AppEvent::Char('L') if s.focus == Focus::Content => {
                s.open_auth(AuthMode::SignIn);
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from the search bar
            AppEvent::Escape => {
                if s.focus == Focus::SearchBar {
                    tracing::debug!("focus: SearchBar -> Content");
                    s.focus = Focus::Content;
                }
            }

            // Tab-cycle focus: Content ↔ SearchBar
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Content => Focus::SearchBar,
                    Focus::SearchBar | Focus::Command => Focus::Content,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Jump to the search bar
            AppEvent::SearchFocus => {
                tracing::debug!("focus -> SearchBar");
                s.focus = Focus::SearchBar;
            }

            // Page switching works regardless of focus
            AppEvent::PageNext => {
                s.page = s.page.next();
                tracing::debug!(page = s.page.id(), "page next");
            }
            AppEvent::PagePrev => {
                s.page = s.page.prev();
                tracing::debug!(page = s.page.id(), "page prev");
            }

            // Confirm: search selection, page action, or calculator compute
            AppEvent::Enter => match s.focus {
                Focus::SearchBar => s.select_search_result(),
                Focus::Content => match s.page {
                    // "Get started" on the hero banner
                    Page::Home => {
                        tracing::debug!("get started -> dashboard");
                        s.page = Page::Dashboard;
                    }
                    Page::Calculator => s.calculator.handle(&AppEvent::Enter),
                    _ => {}
                },
                Focus::Command => {} // handled before dispatch, should not reach here
            },

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::SearchBar | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::SearchBar => s.search.handle(&event),
        Focus::Content => match s.page {
            Page::Exercises => s.library.handle(&event),
            Page::Nutrition => s.nutrition.handle(&event),
            Page::Calculator => s.calculator.handle(&event),
            Page::Trainers => s.trainers.handle(&event),
            Page::Home | Page::Dashboard => {}
        },
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line tab bar | 3-line search bar | page body
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    frame.render_widget(
        TabBar::new(state.page, state.config.ui.show_hints, &state.theme),
        vert[0],
    );

    let search_focused = state.focus == Focus::SearchBar;
    frame.render_widget(
        SearchBar::new(&state.search, search_focused, &state.theme),
        vert[1],
    );

    let body = vert[2];
    let content_focused = state.focus == Focus::Content;
    match state.page {
        Page::Home => frame.render_widget(Hero::new(&state.theme), body),
        Page::Exercises => frame.render_widget(
            ExerciseLibrary::new(&state.library, content_focused, &state.theme),
            body,
        ),
        Page::Calculator => frame.render_widget(
            Calculator::new(&state.calculator, content_focused, &state.theme),
            body,
        ),
        Page::Nutrition => frame.render_widget(
            Nutrition::new(&state.nutrition, content_focused, &state.theme),
            body,
        ),
        Page::Dashboard => frame.render_widget(
            Dashboard::new(stats::demo_snapshot(), &state.theme),
            body,
        ),
        Page::Trainers => frame.render_widget(
            Trainers::new(&state.trainers, content_focused, &state.theme),
            body,
        ),
    }

    // Results dropdown hangs below the search bar while it is in use
    if search_focused && !state.search.query.trim().is_empty() {
        let dropdown = Rect {
            width: body.width.min(60),
            ..body
        };
        frame.render_widget(SearchDropdown::new(&state.search, &state.theme), dropdown);
    }

    if state.auth.open {
        frame.render_widget(AuthModal::new(&state.auth, &state.theme), area);
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom() - 1, height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip search-bar cursor below
    }

    // Position the terminal cursor when the search bar is focused
    if search_focused {
        let sb = SearchBar::new(&state.search, true, &state.theme);
        let (cx, cy) = sb.cursor_position(vert[1]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
