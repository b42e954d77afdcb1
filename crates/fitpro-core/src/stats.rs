//! Dashboard statistics — the demo progress snapshot.
//!
//! Like the rest of the catalog this is fixture data: one hard-coded user
//! snapshot built at first access and never mutated. Real tracking is out of
//! scope; the dashboard renders whatever this module hands it.

use crate::types::Category;
use chrono::NaiveDate;
use std::sync::LazyLock;

static SNAPSHOT: LazyLock<ProgressSnapshot> = LazyLock::new(ProgressSnapshot::demo);

/// The process-wide demo snapshot.
pub fn demo_snapshot() -> &'static ProgressSnapshot {
    &SNAPSHOT
}

/// Everything the dashboard page shows for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub user_name: String,
    /// Consecutive workout days.
    pub current_streak: u32,
    pub total_workouts: u32,
    pub total_calories_burned: u32,
    pub goals: GoalTargets,
    pub progress: CurrentProgress,
    /// Calories burned per day, Monday first.
    pub weekly_calories: [u32; 7],
    /// Share of workouts per category, in percent. Sums to 100.
    pub workout_split: Vec<(Category, u8)>,
    /// Workouts completed in each of the last four weeks.
    pub monthly_workouts: [u32; 4],
    pub achievements: Vec<Achievement>,
}

/// Targets the user is working toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTargets {
    pub daily_calories: u32,
    pub weekly_workouts: u32,
    pub weight_loss_kg: u32,
}

/// Where the user currently stands against [`GoalTargets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentProgress {
    pub today_calories: u32,
    pub week_workouts: u32,
    pub current_weight_kg: u32,
}

/// A badge the user has earned or is still chasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub name: String,
    /// Emoji badge shown next to the name.
    pub icon: String,
    pub earned: bool,
    pub earned_on: Option<NaiveDate>,
}

impl ProgressSnapshot {
    /// Build the demo snapshot. [`demo_snapshot`] memoises this.
    pub fn demo() -> Self {
        let date = |y, m, d| {
            NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates must be valid")
        };
        let achievement = |name: &str, icon: &str, earned_on: Option<NaiveDate>| Achievement {
            name: name.to_string(),
            icon: icon.to_string(),
            earned: earned_on.is_some(),
            earned_on,
        };

        ProgressSnapshot {
            user_name: "Alex Johnson".to_string(),
            current_streak: 7,
            total_workouts: 45,
            total_calories_burned: 12_450,
            goals: GoalTargets {
                daily_calories: 400,
                weekly_workouts: 5,
                weight_loss_kg: 10,
            },
            progress: CurrentProgress {
                today_calories: 320,
                week_workouts: 4,
                current_weight_kg: 75,
            },
            weekly_calories: [450, 320, 580, 400, 620, 350, 480],
            workout_split: vec![
                (Category::Cardio, 35),
                (Category::Strength, 25),
                (Category::Yoga, 20),
                (Category::Hiit, 20),
            ],
            monthly_workouts: [4, 5, 6, 4],
            achievements: vec![
                achievement("First Workout", "🏃", Some(date(2024, 1, 15))),
                achievement("7-Day Streak", "🔥", Some(date(2024, 1, 22))),
                achievement("Calorie Crusher", "⚡", Some(date(2024, 1, 20))),
                achievement("30-Day Challenge", "🏆", None),
                achievement("Strength Master", "💪", None),
                achievement("Yoga Guru", "🧘", None),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_split_sums_to_100() {
        let snap = ProgressSnapshot::demo();
        let total: u32 = snap.workout_split.iter().map(|(_, pct)| *pct as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn earned_achievements_have_dates() {
        let snap = ProgressSnapshot::demo();
        for a in &snap.achievements {
            assert_eq!(a.earned, a.earned_on.is_some(), "achievement {:?}", a.name);
        }
    }
}
