//! Search layer — case-insensitive substring matching over the catalog.
//!
//! # Contract
//!
//! - An empty or whitespace-only query returns no results.
//! - A non-empty query is trimmed and case-folded, then tested as a substring
//!   against every candidate field. No tokenization, no fuzzy distance, no
//!   relevance scoring.
//! - Exercises match on name or category label; meal plans match on plan
//!   name, goal label, meal names, and meal ingredients.
//! - Results come back in scan order: exercises before meal plans, fixture
//!   order within each collection. A record appears at most once per query.
//! - The scan is a pure function of `(query, catalog)` — recomputed in full
//!   on every call, no caching, no side effects.

use crate::catalog::Catalog;
use crate::types::{Exercise, MealPlan};

/// Default cap on the number of results a single query may return. Callers
/// with a configured limit pass their own to [`search_limited`].
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// A matched record, tagged with the collection it came from.
///
/// Hits borrow from the catalog; with the process-wide
/// [`catalog`](crate::catalog::catalog) they are `SearchHit<'static>` and can
/// be stored freely in UI state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchHit<'a> {
    Exercise(&'a Exercise),
    MealPlan(&'a MealPlan),
}

impl<'a> SearchHit<'a> {
    /// Collection tag, stable for machine consumption.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchHit::Exercise(_) => "exercise",
            SearchHit::MealPlan(_) => "mealplan",
        }
    }

    /// Identifier of the underlying record.
    pub fn id(&self) -> &'a str {
        match self {
            SearchHit::Exercise(e) => &e.id,
            SearchHit::MealPlan(p) => &p.id,
        }
    }

    /// Display name of the underlying record.
    pub fn name(&self) -> &'a str {
        match self {
            SearchHit::Exercise(e) => &e.name,
            SearchHit::MealPlan(p) => &p.name,
        }
    }

    /// Secondary label shown under the name: the exercise category or the
    /// plan's goal.
    pub fn tag(&self) -> String {
        match self {
            SearchHit::Exercise(e) => e.category.to_string(),
            SearchHit::MealPlan(p) => p.goal.to_string(),
        }
    }
}

/// Run a query over the catalog with the default result cap.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<SearchHit<'a>> {
    search_limited(catalog, query, DEFAULT_RESULT_LIMIT)
}

/// Run a query over the catalog, returning at most `limit` hits.
pub fn search_limited<'a>(catalog: &'a Catalog, query: &str, limit: usize) -> Vec<SearchHit<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    for exercise in catalog.exercises() {
        if hits.len() >= limit {
            break;
        }
        if exercise_matches(exercise, &needle) {
            hits.push(SearchHit::Exercise(exercise));
        }
    }

    for plan in catalog.meal_plans() {
        if hits.len() >= limit {
            break;
        }
        if meal_plan_matches(plan, &needle) {
            hits.push(SearchHit::MealPlan(plan));
        }
    }

    tracing::debug!(query = %needle, hits = hits.len(), "search completed");
    hits
}

fn exercise_matches(exercise: &Exercise, needle: &str) -> bool {
    contains_fold(&exercise.name, needle) || contains_fold(&exercise.category.to_string(), needle)
}

fn meal_plan_matches(plan: &MealPlan, needle: &str) -> bool {
    contains_fold(&plan.name, needle)
        || contains_fold(&plan.goal.to_string(), needle)
        || plan.meals.iter().any(|meal| {
            contains_fold(&meal.name, needle)
                || meal.ingredients.iter().any(|i| contains_fold(i, needle))
        })
}

/// Case-folded substring test. `needle` must already be lowercase.
fn contains_fold(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
