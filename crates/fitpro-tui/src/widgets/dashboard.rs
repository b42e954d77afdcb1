//! Dashboard page — stat cards, weekly burn sparkline, goal gauges, and the
//! achievements list, all fed by the demo progress snapshot.

use crate::theme::Theme;
use fitpro_core::stats::ProgressSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Sparkline, Widget},
};

pub struct Dashboard<'a> {
    snapshot: &'a ProgressSnapshot,
    theme: &'a Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(snapshot: &'a ProgressSnapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snap = self.snapshot;

        let chunks = Layout::default()
            .direction(LayoutDir::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .split(area);

        // Stat cards in one row
        let cards = Line::from(vec![
            Span::styled(format!(" {} ", snap.user_name), self.theme.brand),
            Span::raw("  "),
            Span::styled(format!("🔥 {} day streak", snap.current_streak), Style::default()),
            Span::raw("   "),
            Span::raw(format!("{} workouts", snap.total_workouts)),
            Span::raw("   "),
            Span::raw(format!("{} kcal burned", snap.total_calories_burned)),
            Span::raw("   "),
            Span::raw(format!("{} kg", snap.progress.current_weight_kg)),
        ]);
        Paragraph::new(cards).render(chunks[0], buf);

        // Weekly burn sparkline
        let week_block = Block::bordered()
            .title("Calories this week (Mon–Sun)")
            .border_style(self.theme.border_unfocused);
        let week_inner = week_block.inner(chunks[1]);
        week_block.render(chunks[1], buf);
        Sparkline::default()
            .style(self.theme.brand)
            .data(snap.weekly_calories.iter().map(|v| *v as u64))
            .render(week_inner, buf);

        // Goal gauges
        let goal_row = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Fill(1)])
            .split(chunks[2]);
        Gauge::default()
            .gauge_style(self.theme.earned)
            .ratio(
                (snap.progress.today_calories as f64 / snap.goals.daily_calories.max(1) as f64)
                    .min(1.0),
            )
            .label(format!(
                "today {}/{} kcal",
                snap.progress.today_calories, snap.goals.daily_calories
            ))
            .render(goal_row[0], buf);
        Gauge::default()
            .gauge_style(self.theme.brand)
            .ratio(
                (snap.progress.week_workouts as f64 / snap.goals.weekly_workouts.max(1) as f64)
                    .min(1.0),
            )
            .label(format!(
                "week {}/{} workouts",
                snap.progress.week_workouts, snap.goals.weekly_workouts
            ))
            .render(goal_row[1], buf);

        // Workout type split
        let mut split_spans: Vec<Span> = vec![Span::styled(
            " Split: ",
            Style::default().add_modifier(Modifier::DIM),
        )];
        for (category, pct) in &snap.workout_split {
            split_spans.push(Span::styled(
                format!("{category} {pct}%  "),
                self.theme.category_style(&category.to_string()),
            ));
        }
        Paragraph::new(Line::from(split_spans)).render(chunks[3], buf);

        // Achievements
        let ach_block = Block::bordered()
            .title("Achievements")
            .border_style(self.theme.border_unfocused);
        let ach_inner = ach_block.inner(chunks[4]);
        ach_block.render(chunks[4], buf);

        let lines: Vec<Line> = snap
            .achievements
            .iter()
            .map(|a| {
                let style = if a.earned { self.theme.earned } else { self.theme.pending };
                let suffix = match a.earned_on {
                    Some(date) => format!("earned {}", date.format("%b %d, %Y")),
                    None => "in progress".to_string(),
                };
                Line::from(vec![
                    Span::raw(format!(" {} ", a.icon)),
                    Span::styled(format!("{:<20}", a.name), style),
                    Span::styled(suffix, Style::default().add_modifier(Modifier::DIM)),
                ])
            })
            .collect();
        Paragraph::new(lines).render(ach_inner, buf);
    }
}
