//! Calorie calculator — the fixed workout-burn formula.
//!
//! `calories = weight_lb * activity_mult * intensity_mult * hours`, where
//! weight is converted from kilograms at 2.205 lb/kg. The macro breakdown and
//! the seven-day projection are derived from that single number; there is no
//! physiological model beyond it.

use thiserror::Error;

/// Pounds per kilogram, as used by the burn formula.
const LB_PER_KG: f64 = 2.205;

/// Share of burned energy attributed to each macro source.
const FAT_SHARE: f64 = 0.4;
const CARB_SHARE: f64 = 0.5;
const PROTEIN_SHARE: f64 = 0.1;

/// Workout activity, each with a fixed burn multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Running,
    Cycling,
    Swimming,
    WeightLifting,
    Yoga,
    Dancing,
    Hiking,
    Boxing,
}

impl Activity {
    /// All activities in display order.
    pub const ALL: [Activity; 8] = [
        Activity::Running,
        Activity::Cycling,
        Activity::Swimming,
        Activity::WeightLifting,
        Activity::Yoga,
        Activity::Dancing,
        Activity::Hiking,
        Activity::Boxing,
    ];

    /// Burn multiplier in kcal per pound-hour.
    pub fn multiplier(self) -> f64 {
        match self {
            Activity::Running => 11.4,
            Activity::Cycling => 8.0,
            Activity::Swimming => 12.1,
            Activity::WeightLifting => 6.0,
            Activity::Yoga => 3.0,
            Activity::Dancing => 7.2,
            Activity::Hiking => 7.8,
            Activity::Boxing => 13.2,
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Activity::Running => write!(f, "Running"),
            Activity::Cycling => write!(f, "Cycling"),
            Activity::Swimming => write!(f, "Swimming"),
            Activity::WeightLifting => write!(f, "Weight Lifting"),
            Activity::Yoga => write!(f, "Yoga"),
            Activity::Dancing => write!(f, "Dancing"),
            Activity::Hiking => write!(f, "Hiking"),
            Activity::Boxing => write!(f, "Boxing"),
        }
    }
}

/// How hard the workout was pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    Light,
    Moderate,
    Vigorous,
}

impl Intensity {
    /// All intensities in display order.
    pub const ALL: [Intensity; 3] = [Intensity::Light, Intensity::Moderate, Intensity::Vigorous];

    pub fn multiplier(self) -> f64 {
        match self {
            Intensity::Light => 0.8,
            Intensity::Moderate => 1.0,
            Intensity::Vigorous => 1.3,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Light => write!(f, "Light"),
            Intensity::Moderate => write!(f, "Moderate"),
            Intensity::Vigorous => write!(f, "Vigorous"),
        }
    }
}

/// Result of one estimate: total burn, macro split, and a week of projected
/// daily burns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    pub calories: u32,
    pub breakdown: MacroBreakdown,
    /// Projected burn for each of the next seven days, Monday first.
    pub weekly_projection: [u32; 7],
}

/// Energy-source split of a burn total, in kcal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroBreakdown {
    pub fat: u32,
    pub carbs: u32,
    pub protein: u32,
}

/// Rejected calculator input.
#[derive(Debug, Error, PartialEq)]
pub enum EstimateError {
    #[error("weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),
    #[error("duration must be a positive number of minutes, got {0}")]
    InvalidDuration(f64),
}

/// Estimate calories burned for one workout.
///
/// Returns an error for zero, negative, or non-finite weight or duration;
/// every other input goes through the same fixed formula.
pub fn estimate(
    weight_kg: f64,
    duration_min: f64,
    activity: Activity,
    intensity: Intensity,
) -> Result<Estimate, EstimateError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(EstimateError::InvalidWeight(weight_kg));
    }
    if !duration_min.is_finite() || duration_min <= 0.0 {
        return Err(EstimateError::InvalidDuration(duration_min));
    }

    let calories = (weight_kg * LB_PER_KG
        * activity.multiplier()
        * intensity.multiplier()
        * (duration_min / 60.0))
        .round() as u32;

    let breakdown = MacroBreakdown {
        fat: (calories as f64 * FAT_SHARE).round() as u32,
        carbs: (calories as f64 * CARB_SHARE).round() as u32,
        protein: (calories as f64 * PROTEIN_SHARE).round() as u32,
    };

    let weekly_projection = std::array::from_fn(|day| projected_burn(calories, day));

    tracing::debug!(
        %activity,
        %intensity,
        weight_kg,
        duration_min,
        calories,
        "estimate computed"
    );

    Ok(Estimate { calories, breakdown, weekly_projection })
}

/// Projected burn for one day of the week: the base burn nudged by a stable
/// per-day jitter within ±10%. Deterministic so estimates are repeatable.
fn projected_burn(calories: u32, day: usize) -> u32 {
    // djb2-style fold, same idea the theme layer uses for colour assignment.
    let hash = [day as u8, 0x9e, 0x37]
        .iter()
        .fold(5381usize, |acc, b| acc.wrapping_mul(31).wrapping_add(*b as usize));
    let jitter_pct = (hash % 21) as i64 - 10;
    let adjusted = calories as i64 + calories as i64 * jitter_pct / 100;
    adjusted.max(0) as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
