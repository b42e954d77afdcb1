//! Exercise library page — category filter, exercise list, and detail pane.
//!
//! # Navigation (when the page is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k`, `↓` / `j` | Move the list selection |
//! | `←` / `h`, `→` / `l` | Cycle the category filter |
//!
//! The filter works on the catalog in fixture order; "All" is position 0,
//! followed by each category.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use fitpro_core::catalog;
use fitpro_core::types::{Category, Exercise};
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
pub struct ExerciseLibraryState {
    /// Active category filter; `None` shows every exercise.
    pub category: Option<Category>,
    /// Index of the highlighted exercise within the filtered list.
    pub selected: usize,
}

impl ExerciseLibraryState {
    /// Exercises visible under the current filter, in fixture order.
    pub fn filtered(&self) -> Vec<&'static Exercise> {
        catalog()
            .exercises()
            .iter()
            .filter(|e| self.category.is_none_or(|c| e.category == c))
            .collect()
    }

    /// The highlighted exercise, if the filtered list is non-empty.
    pub fn selected_exercise(&self) -> Option<&'static Exercise> {
        self.filtered().get(self.selected).copied()
    }

    /// Jump to the exercise with the given id, clearing the filter so the
    /// target is always visible. Used by search-result navigation.
    pub fn select_id(&mut self, id: &str) {
        self.category = None;
        self.selected = catalog()
            .exercises()
            .iter()
            .position(|e| e.id == id)
            .unwrap_or(0);
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < self.filtered().len() {
                    self.selected += 1;
                }
            }
            AppEvent::Nav(Direction::Right) => {
                self.category = next_filter(self.category);
                self.selected = 0;
                tracing::debug!(category = ?self.category, "library: filter changed");
            }
            AppEvent::Nav(Direction::Left) => {
                self.category = prev_filter(self.category);
                self.selected = 0;
                tracing::debug!(category = ?self.category, "library: filter changed");
            }
            _ => {}
        }
    }
}

/// All → Cardio → … → HIIT → All.
fn next_filter(current: Option<Category>) -> Option<Category> {
    match current {
        None => Some(Category::ALL[0]),
        Some(c) => {
            let idx = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
            if idx + 1 < Category::ALL.len() {
                Some(Category::ALL[idx + 1])
            } else {
                None
            }
        }
    }
}

fn prev_filter(current: Option<Category>) -> Option<Category> {
    match current {
        None => Some(Category::ALL[Category::ALL.len() - 1]),
        Some(c) => {
            let idx = Category::ALL.iter().position(|x| *x == c).unwrap_or(0);
            if idx == 0 {
                None
            } else {
                Some(Category::ALL[idx - 1])
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ExerciseLibrary<'a> {
    state: &'a ExerciseLibraryState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ExerciseLibrary<'a> {
    pub fn new(state: &'a ExerciseLibraryState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for ExerciseLibrary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([Constraint::Length(1), Constraint::Fill(1)])
            .split(area);

        // Filter strip: All plus every category, active one highlighted.
        let mut spans: Vec<Span> = vec![Span::styled(
            " Filter: ",
            Style::default().add_modifier(Modifier::DIM),
        )];
        let active_label = |active: bool, label: &str, style: Style| {
            if active {
                Span::styled(format!("[{label}] "), style.add_modifier(Modifier::BOLD))
            } else {
                Span::styled(format!(" {label}  "), Style::default().add_modifier(Modifier::DIM))
            }
        };
        spans.push(active_label(self.state.category.is_none(), "All", self.theme.brand));
        for cat in Category::ALL {
            spans.push(active_label(
                self.state.category == Some(cat),
                &cat.to_string(),
                self.theme.category_style(&cat.to_string()),
            ));
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        // List | detail split
        let body = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Fill(1)])
            .split(chunks[1]);

        let exercises = self.state.filtered();

        let items: Vec<ListItem> = exercises
            .iter()
            .map(|e| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<20}", e.name), Style::default()),
                    Span::styled(e.category.to_string(), self.theme.category_style(&e.category.to_string())),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        if !exercises.is_empty() {
            list_state.select(Some(self.state.selected.min(exercises.len() - 1)));
        }

        let list_block = Block::bordered().title("Exercises").border_style(border_style);
        StatefulWidget::render(
            List::new(items)
                .block(list_block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED)),
            body[0],
            buf,
            &mut list_state,
        );

        // Detail pane for the highlighted exercise
        let detail_block = Block::bordered().title("Details").border_style(self.theme.border_unfocused);
        let inner = detail_block.inner(body[1]);
        detail_block.render(body[1], buf);

        let Some(exercise) = self.state.selected_exercise() else {
            Paragraph::new("No exercises in this category.").render(inner, buf);
            return;
        };

        let mut lines = vec![
            Line::from(Span::styled(exercise.name.clone(), self.theme.brand)),
            Line::from(vec![
                Span::styled(
                    exercise.difficulty.to_string(),
                    self.theme.difficulty_style(exercise.difficulty),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} kcal/min", exercise.calories_per_minute),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{}s", exercise.duration_secs),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]),
            Line::from(format!("Targets: {}", exercise.muscles_targeted.join(", "))),
            Line::default(),
        ];
        for (i, step) in exercise.instructions.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {step}", i + 1)));
        }
        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
