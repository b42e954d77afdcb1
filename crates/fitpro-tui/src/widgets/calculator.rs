//! Calorie calculator page — input form on the left, results on the right.
//!
//! # Navigation (when the page is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `↓` | Move between form fields |
//! | `←` / `→` | Cycle activity / intensity values |
//! | digits, `.` | Edit the weight / duration fields |
//! | `Enter` | Compute the estimate |
//!
//! The form is a text-input surface, so the app shell keeps this page in
//! insert mode while it is focused.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use fitpro_core::calculator::{estimate, Activity, Estimate, Intensity};
use fitpro_core::config::CalculatorConfig;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Sparkline, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Which form field holds the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Duration,
    Activity,
    Intensity,
}

#[derive(Debug)]
pub struct CalculatorState {
    pub weight_input: String,
    pub duration_input: String,
    pub activity: usize,
    pub intensity: usize,
    pub field: Field,
    pub result: Option<Estimate>,
    /// Validation message from the last failed computation.
    pub error: Option<String>,
}

impl CalculatorState {
    /// Build the form pre-filled from `[calculator]` config defaults.
    pub fn new(cfg: &CalculatorConfig) -> Self {
        Self {
            weight_input: cfg.default_weight_kg.to_string(),
            duration_input: cfg.default_duration_min.to_string(),
            activity: 0,
            // Default to Moderate, the middle intensity.
            intensity: 1,
            field: Field::Weight,
            result: None,
            error: None,
        }
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.field {
            Field::Weight => Some(&mut self.weight_input),
            Field::Duration => Some(&mut self.duration_input),
            Field::Activity | Field::Intensity => None,
        }
    }

    /// Handle a key event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.field = match self.field {
                    Field::Weight => Field::Intensity,
                    Field::Duration => Field::Weight,
                    Field::Activity => Field::Duration,
                    Field::Intensity => Field::Activity,
                };
            }
            AppEvent::Nav(Direction::Down) => {
                self.field = match self.field {
                    Field::Weight => Field::Duration,
                    Field::Duration => Field::Activity,
                    Field::Activity => Field::Intensity,
                    Field::Intensity => Field::Weight,
                };
            }
            AppEvent::Nav(Direction::Right) => match self.field {
                Field::Activity => {
                    self.activity = (self.activity + 1) % Activity::ALL.len();
                }
                Field::Intensity => {
                    self.intensity = (self.intensity + 1) % Intensity::ALL.len();
                }
                _ => {}
            },
            AppEvent::Nav(Direction::Left) => match self.field {
                Field::Activity => {
                    self.activity =
                        (self.activity + Activity::ALL.len() - 1) % Activity::ALL.len();
                }
                Field::Intensity => {
                    self.intensity =
                        (self.intensity + Intensity::ALL.len() - 1) % Intensity::ALL.len();
                }
                _ => {}
            },
            AppEvent::Char(c) if c.is_ascii_digit() || *c == '.' => {
                let c = *c;
                if let Some(input) = self.focused_input() {
                    input.push(c);
                }
            }
            AppEvent::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
            }
            AppEvent::Enter => self.compute(),
            _ => {}
        }
    }

    /// Parse the form and run the estimator, recording either a result or a
    /// user-facing error message.
    pub fn compute(&mut self) {
        self.error = None;

        let weight: f64 = match self.weight_input.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.error = Some("weight must be a number of kilograms".to_string());
                return;
            }
        };
        let duration: f64 = match self.duration_input.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.error = Some("duration must be a number of minutes".to_string());
                return;
            }
        };

        match estimate(
            weight,
            duration,
            Activity::ALL[self.activity],
            Intensity::ALL[self.intensity],
        ) {
            Ok(est) => self.result = Some(est),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Calculator<'a> {
    state: &'a CalculatorState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Calculator<'a> {
    pub fn new(state: &'a CalculatorState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    fn form_line(&self, field: Field, label: &str, value: String) -> Line<'static> {
        let marker = if self.state.field == field && self.focused {
            "▶"
        } else {
            " "
        };
        Line::from(vec![
            Span::raw(format!(" {marker} ")),
            Span::styled(format!("{label:<18}"), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(value),
        ])
    }
}

impl Widget for Calculator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let body = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Fill(1)])
            .split(area);

        // Form
        let form_block = Block::bordered()
            .title("Workout calculator")
            .border_style(border_style);
        let form_inner = form_block.inner(body[0]);
        form_block.render(body[0], buf);

        let mut lines = vec![
            Line::default(),
            self.form_line(Field::Weight, "Weight (kg)", self.state.weight_input.clone()),
            self.form_line(
                Field::Duration,
                "Duration (min)",
                self.state.duration_input.clone(),
            ),
            self.form_line(
                Field::Activity,
                "Activity",
                format!("◀ {} ▶", Activity::ALL[self.state.activity]),
            ),
            self.form_line(
                Field::Intensity,
                "Intensity",
                format!("◀ {} ▶", Intensity::ALL[self.state.intensity]),
            ),
            Line::default(),
            Line::from(Span::styled(
                "   Enter to calculate",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        if let Some(ref err) = self.state.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("   {err}"),
                Style::default()
                    .fg(ratatui::style::Color::Red)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Paragraph::new(lines).render(form_inner, buf);

        // Results
        let result_block = Block::bordered()
            .title("Results")
            .border_style(self.theme.border_unfocused);
        let result_inner = result_block.inner(body[1]);
        result_block.render(body[1], buf);

        let Some(ref est) = self.state.result else {
            Paragraph::new(Line::from(Span::styled(
                "Fill in the form and press Enter.",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(result_inner, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .split(result_inner);

        Paragraph::new(vec![Line::from(Span::styled(
            format!(" {} kcal burned", est.calories),
            self.theme.brand,
        ))])
        .render(chunks[0], buf);

        // Energy-source breakdown as one gauge per macro
        let total = est.calories.max(1) as f64;
        let gauges = [
            ("fat", est.breakdown.fat),
            ("carbs", est.breakdown.carbs),
            ("protein", est.breakdown.protein),
        ];
        for (i, (label, kcal)) in gauges.iter().enumerate() {
            Gauge::default()
                .gauge_style(self.theme.category_style(label))
                .ratio((*kcal as f64 / total).min(1.0))
                .label(format!("{label} {kcal} kcal"))
                .render(chunks[1 + i], buf);
        }

        // Weekly projection sparkline
        Paragraph::new(Line::from(Span::styled(
            " projected week (Mon–Sun):",
            Style::default().add_modifier(Modifier::DIM),
        )))
        .render(chunks[4], buf);
        Sparkline::default()
            .style(self.theme.brand)
            .data(est.weekly_projection.iter().map(|v| *v as u64))
            .render(chunks[5], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
