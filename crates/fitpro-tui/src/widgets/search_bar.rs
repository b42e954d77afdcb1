//! Search bar widget — text input at the top of the screen plus the results
//! dropdown rendered over the page body.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor and re-runs the matcher.
//! - `Backspace` deletes the character before the cursor and re-runs it.
//! - `Nav(Left)` / `Nav(Right)` move the cursor (arrow keys while focused).
//! - `Nav(Up)` / `Nav(Down)` move the highlighted result.
//!
//! The matcher runs synchronously on every edit — results are a pure
//! function of the query, so there is nothing to invalidate or debounce.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use fitpro_core::catalog;
use fitpro_core::search::{search_limited, SearchHit};
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

/// Persistent search-bar state. Hits borrow from the process-wide catalog,
/// so they are `'static` and can live here between frames.
#[derive(Debug)]
pub struct SearchBarState {
    /// The query typed by the user.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
    /// Index of the highlighted result within `results`.
    pub selected: usize,
    /// Current matcher output for `query`, capped at `limit`.
    pub results: Vec<SearchHit<'static>>,
    /// Result cap, from `[ui] search_results_limit`.
    pub limit: usize,
}

impl SearchBarState {
    pub fn new(limit: usize) -> Self {
        Self {
            query: String::new(),
            cursor: 0,
            selected: 0,
            results: Vec::new(),
            limit,
        }
    }

    /// The highlighted hit, if any.
    pub fn selected_hit(&self) -> Option<SearchHit<'static>> {
        self.results.get(self.selected).copied()
    }

    /// Reset to an empty query with no results. Called after a result is
    /// chosen, mirroring the input clearing once navigation fires.
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
        self.selected = 0;
        self.results.clear();
    }

    /// Handle a key event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.refresh();
                tracing::debug!(query = %self.query, hits = self.results.len(), "search: char inserted");
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    // Walk back one char boundary
                    let prev = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    self.query.remove(prev);
                    self.cursor = prev;
                    self.refresh();
                    tracing::debug!(query = %self.query, hits = self.results.len(), "search: backspace");
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.query.len() {
                    let next = self.query[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.query.len());
                    self.cursor = next;
                }
            }
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }

    /// Re-run the matcher over the catalog and clamp the selection.
    fn refresh(&mut self) {
        self.results = search_limited(catalog(), &self.query, self.limit);
        if self.selected >= self.results.len() {
            self.selected = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Input widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a SearchBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Search")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let query_line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search exercises, meals...",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(query_line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Dropdown widget
// ---------------------------------------------------------------------------

/// Results dropdown, rendered over the top of the page body while the search
/// bar is focused and the query is non-empty.
pub struct SearchDropdown<'a> {
    state: &'a SearchBarState,
    theme: &'a Theme,
}

impl<'a> SearchDropdown<'a> {
    pub fn new(state: &'a SearchBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for SearchDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Height: one row per result (or the empty-state line), plus borders.
        let rows = self.state.results.len().max(1) as u16;
        let height = (rows + 2).min(area.height);
        let popup = Rect { height, ..area };

        Clear.render(popup, buf);
        let block = Block::bordered()
            .title("Results")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        if self.state.results.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No results found.",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self
            .state
            .results
            .iter()
            .enumerate()
            .map(|(row, hit)| {
                let glyph = match hit {
                    SearchHit::Exercise(_) => "▪",
                    SearchHit::MealPlan(_) => "●",
                };
                let mut line = Line::from(vec![
                    Span::styled(format!(" {glyph} "), self.theme.category_style(&hit.tag())),
                    Span::raw(hit.name().to_string()),
                    Span::styled(
                        format!("  {}", hit.tag()),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ]);
                if row == self.state.selected {
                    line = line.patch_style(self.theme.search_highlight);
                }
                line
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
