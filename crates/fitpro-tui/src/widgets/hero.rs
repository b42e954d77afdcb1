//! Home page — hero banner plus the testimonial strip.
//!
//! `Enter` anywhere on this page jumps straight to the dashboard (the
//! "Get Started" action); the app shell owns that transition.

use crate::theme::Theme;
use fitpro_core::catalog;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct Hero<'a> {
    theme: &'a Theme,
}

impl<'a> Hero<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Hero<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(7), Constraint::Fill(1)])
            .split(area);

        // Banner
        let banner = vec![
            Line::default(),
            Line::from(Span::styled(
                "  FitPro — Transform Your Body, Transform Your Life",
                self.theme.brand,
            )),
            Line::default(),
            Line::from("  Exercise library, calorie calculator, meal plans, and trainers —"),
            Line::from("  all from your terminal."),
            Line::default(),
            Line::from(Span::styled(
                "  press Enter to get started",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        Paragraph::new(banner).render(chunks[0], buf);

        // Testimonial strip
        let block = Block::bordered()
            .title("Success stories")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(chunks[1]);
        block.render(chunks[1], buf);

        let mut lines: Vec<Line> = Vec::new();
        for t in catalog().testimonials() {
            let stars = "★".repeat(t.rating as usize);
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", t.name), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("({})  ", t.transformation), self.theme.earned),
                Span::styled(stars, Style::default().add_modifier(Modifier::DIM)),
            ]));
            lines.push(Line::from(format!("   {}", t.story)));
            lines.push(Line::default());
        }
        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}
