//! Trainers page — directory list on the left, bio and programs on the right.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use fitpro_core::catalog;
use fitpro_core::types::Trainer;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TrainersState {
    /// Index of the highlighted trainer.
    pub selected: usize,
}

impl TrainersState {
    pub fn selected_trainer(&self) -> Option<&'static Trainer> {
        catalog().trainers().get(self.selected)
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < catalog().trainers().len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Trainers<'a> {
    state: &'a TrainersState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Trainers<'a> {
    pub fn new(state: &'a TrainersState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for Trainers<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let body = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Fill(1)])
            .split(area);

        let trainers = catalog().trainers();

        let items: Vec<ListItem> = trainers
            .iter()
            .map(|t| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<16}", t.name), Style::default()),
                    Span::styled(
                        format!("★ {:.1}  {} yrs", t.rating, t.experience_years),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        if !trainers.is_empty() {
            list_state.select(Some(self.state.selected.min(trainers.len() - 1)));
        }

        StatefulWidget::render(
            List::new(items)
                .block(Block::bordered().title("Trainers").border_style(border_style))
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
            body[0],
            buf,
            &mut list_state,
        );

        let detail_block = Block::bordered()
            .title("Profile")
            .border_style(self.theme.border_unfocused);
        let inner = detail_block.inner(body[1]);
        detail_block.render(body[1], buf);

        let Some(trainer) = self.state.selected_trainer() else {
            return;
        };

        let mut lines = vec![Line::from(Span::styled(trainer.name.clone(), self.theme.brand))];
        let mut specialty_spans: Vec<Span> = Vec::new();
        for s in &trainer.specialties {
            specialty_spans.push(Span::styled(format!("{s}  "), self.theme.category_style(s)));
        }
        lines.push(Line::from(specialty_spans));
        lines.push(Line::from(trainer.bio.clone()));
        lines.push(Line::default());
        for program in &trainer.programs {
            lines.push(Line::from(vec![
                Span::styled(program.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {} · ${}", program.duration, program.price_usd),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
            lines.push(Line::from(format!("  {}", program.description)));
            for feature in &program.features {
                lines.push(Line::from(Span::styled(
                    format!("  · {feature}"),
                    Style::default().add_modifier(Modifier::DIM),
                )));
            }
        }
        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
