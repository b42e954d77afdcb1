//! Tab bar widget — renders the strip of pages at the top of the screen.

use crate::page::Page;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line strip of pages at the top of the screen.
///
/// The active page is highlighted. Keybinding hints (`q:quit  ?:help`) are
/// right-aligned in the same row when hints are enabled.
pub struct TabBar<'a> {
    active: Page,
    show_hints: bool,
    _theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Page, show_hints: bool, theme: &'a Theme) -> Self {
        Self { active, show_hints, _theme: theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = Page::ALL
            .iter()
            .map(|page| Line::from(format!(" {} ", page.title())))
            .collect();

        Tabs::new(labels)
            .select(self.active.index())
            .highlight_style(
                Style::default()
                    .bg(ratatui::style::Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("")
            .render(area, buf);

        // Keybinding hints at the right edge
        if self.show_hints {
            let hint = " [/]:page  /:search  q:quit  ?:help ";
            let hint_x = area.right().saturating_sub(hint.len() as u16);
            buf.set_string(
                hint_x,
                area.y,
                hint,
                Style::default().add_modifier(Modifier::DIM),
            );
        }
    }
}
