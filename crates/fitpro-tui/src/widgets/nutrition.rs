//! Nutrition page — goal selector and meal-plan cards.
//!
//! # Navigation (when the page is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `←` / `h`, `→` / `l` | Cycle the goal selector |
//! | `↑` / `k`, `↓` / `j` | Move between plans under the goal |

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use fitpro_core::catalog;
use fitpro_core::types::{Goal, MealPlan};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct NutritionState {
    /// Active dietary goal.
    pub goal: Goal,
    /// Index of the highlighted plan within the goal's plans.
    pub selected: usize,
}

impl Default for NutritionState {
    fn default() -> Self {
        Self { goal: Goal::WeightLoss, selected: 0 }
    }
}

impl NutritionState {
    /// Meal plans under the active goal, in fixture order.
    pub fn filtered(&self) -> Vec<&'static MealPlan> {
        catalog()
            .meal_plans()
            .iter()
            .filter(|p| p.goal == self.goal)
            .collect()
    }

    /// The highlighted plan, if the goal has any.
    pub fn selected_plan(&self) -> Option<&'static MealPlan> {
        self.filtered().get(self.selected).copied()
    }

    /// Jump to the plan with the given id, switching the goal selector so the
    /// target is visible. Used by search-result navigation.
    pub fn select_id(&mut self, id: &str) {
        if let Some(plan) = catalog().meal_plan_by_id(id) {
            self.goal = plan.goal;
            self.selected = self
                .filtered()
                .iter()
                .position(|p| p.id == id)
                .unwrap_or(0);
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Nav(Direction::Right) => {
                self.goal = cycle(self.goal, 1);
                self.selected = 0;
                tracing::debug!(goal = %self.goal, "nutrition: goal changed");
            }
            AppEvent::Nav(Direction::Left) => {
                self.goal = cycle(self.goal, Goal::ALL.len() - 1);
                self.selected = 0;
                tracing::debug!(goal = %self.goal, "nutrition: goal changed");
            }
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < self.filtered().len() {
                    self.selected += 1;
                }
            }
            _ => {}
        }
    }
}

fn cycle(goal: Goal, step: usize) -> Goal {
    let idx = Goal::ALL.iter().position(|g| *g == goal).unwrap_or(0);
    Goal::ALL[(idx + step) % Goal::ALL.len()]
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Nutrition<'a> {
    state: &'a NutritionState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Nutrition<'a> {
    pub fn new(state: &'a NutritionState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for Nutrition<'_> {
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

        // Goal selector strip
        let mut spans: Vec<Span> = vec![Span::styled(
            " Goal: ",
            Style::default().add_modifier(Modifier::DIM),
        )];
        for goal in Goal::ALL {
            let label = goal.to_string();
            if goal == self.state.goal {
                spans.push(Span::styled(
                    format!("[{label}] "),
                    self.theme.brand,
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {label}  "),
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        let block = Block::bordered().title("Meal plans").border_style(border_style);
        let inner = block.inner(chunks[1]);
        block.render(chunks[1], buf);

        let plans = self.state.filtered();
        if plans.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No plans for this goal yet.",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (i, plan) in plans.iter().enumerate() {
            let marker = if i == self.state.selected { "▶" } else { " " };
            lines.push(Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(plan.name.clone(), self.theme.brand),
                Span::styled(
                    format!(
                        "  {} kcal · P{}g C{}g F{}g",
                        plan.calories, plan.protein_g, plan.carbs_g, plan.fats_g
                    ),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]));
            if i == self.state.selected {
                for meal in &plan.meals {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("    {:<10}", meal.meal_type.to_string()),
                            Style::default().add_modifier(Modifier::DIM),
                        ),
                        Span::raw(format!("{:<24}", meal.name)),
                        Span::styled(
                            format!("{} kcal", meal.calories),
                            Style::default().add_modifier(Modifier::DIM),
                        ),
                    ]));
                    lines.push(Line::from(Span::styled(
                        format!("              {}", meal.ingredients.join(", ")),
                        Style::default().add_modifier(Modifier::DIM),
                    )));
                }
            }
            lines.push(Line::default());
        }
        Paragraph::new(lines).wrap(Wrap { trim: false }).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
