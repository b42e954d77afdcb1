//! Auth modal — centred overlay hosting the external identity provider.
//!
//! The modal owns only its chrome: the sign-in / sign-up toggle and the
//! panel the provider's own UI would occupy. Every state change is reported
//! to the app shell, which forwards it through
//! [`IdentityProvider`](fitpro_core::auth::IdentityProvider); nothing here
//! touches credentials.
//!
//! Open with `L` or `:login` / `:signup`; switch modes with `←` / `→` or
//! `Tab`; close with `Escape`.

use crate::theme::Theme;
use fitpro_core::auth::AuthMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct AuthModalState {
    pub open: bool,
    pub mode: AuthMode,
}

impl Default for AuthModalState {
    fn default() -> Self {
        Self { open: false, mode: AuthMode::SignIn }
    }
}

impl AuthModalState {
    /// Open the modal in the given mode.
    pub fn open(&mut self, mode: AuthMode) {
        self.open = true;
        self.mode = mode;
    }

    /// Dismiss the modal.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip between sign-in and sign-up, returning the new mode.
    pub fn toggle_mode(&mut self) -> AuthMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct AuthModal<'a> {
    state: &'a AuthModalState,
    theme: &'a Theme,
}

impl<'a> AuthModal<'a> {
    pub fn new(state: &'a AuthModalState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for AuthModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(46, 12, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" FitPro account (Esc to close) ")
            .border_style(self.theme.border_modal);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let tab = |label: &str, active: bool| {
            if active {
                Span::styled(format!("  [{label}]  "), self.theme.brand)
            } else {
                Span::styled(
                    format!("   {label}   "),
                    Style::default().add_modifier(Modifier::DIM),
                )
            }
        };

        let lines = vec![
            Line::default(),
            Line::from(vec![
                tab("Sign In", self.state.mode == AuthMode::SignIn),
                tab("Sign Up", self.state.mode == AuthMode::SignUp),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "  ┌────────────────────────────────────┐",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                format!("  │  identity provider: {:<14} │", self.state.mode.to_string()),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                "  │  (handled outside this app)        │",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(Span::styled(
                "  └────────────────────────────────────┘",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::default(),
            Line::from(Span::styled(
                "  ←/→ switch mode",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
