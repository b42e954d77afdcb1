//! Domain-specific assertion macros for fitpro harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *what* search invariant was violated and *which* hits were
//! involved.

use fitpro_core::search::SearchHit;

// ---------------------------------------------------------------------------
// Hit-list assertions
// ---------------------------------------------------------------------------

/// Assert that a hit list contains at least one hit matching a predicate.
///
/// ```rust
/// assert_hits_contain!(hits, |h| h.name() == "Yoga Flow");
/// ```
#[macro_export]
macro_rules! assert_hits_contain {
    ($hits:expr, $pred:expr) => {{
        let hits: &[fitpro_core::search::SearchHit] = &$hits;
        let pred = $pred;
        if !hits.iter().any(|h| pred(h)) {
            panic!(
                "assert_hits_contain! failed: no hit matched predicate.\n  hits: {:?}",
                hits.iter().map(|h| h.name()).collect::<Vec<_>>()
            );
        }
    }};
}

/// Assert that every hit in a list satisfies a predicate.
///
/// ```rust
/// assert_hits_all!(hits, |h| h.kind() == "exercise");
/// ```
#[macro_export]
macro_rules! assert_hits_all {
    ($hits:expr, $pred:expr) => {{
        let hits: &[fitpro_core::search::SearchHit] = &$hits;
        let pred = $pred;
        let failing: Vec<_> = hits.iter().filter(|&h| !pred(h)).map(|h| h.name()).collect();
        if !failing.is_empty() {
            panic!(
                "assert_hits_all! failed: {} of {} hits did not satisfy predicate: {:?}",
                failing.len(),
                hits.len(),
                failing
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Ordered-name assertion
// ---------------------------------------------------------------------------

/// Assert that the hit names equal `expected`, in order. Order is part of the
/// search contract (exercises before plans, fixture order within each), so
/// most scenario tests go through this.
pub fn assert_hit_names(hits: &[SearchHit], expected: &[&str]) {
    let names: Vec<&str> = hits.iter().map(|h| h.name()).collect();
    pretty_assertions::assert_eq!(names, expected.to_vec());
}

/// Assert that every hit's searchable text contains `needle`
/// case-insensitively. "Searchable text" covers the fields the matcher scans:
/// name and tag, plus meal names and ingredients for plans.
pub fn assert_hits_match_query(hits: &[SearchHit], needle: &str) {
    let needle = needle.trim().to_lowercase();
    for hit in hits {
        let mut haystacks = vec![hit.name().to_lowercase(), hit.tag().to_lowercase()];
        if let SearchHit::MealPlan(plan) = hit {
            for meal in &plan.meals {
                haystacks.push(meal.name.to_lowercase());
                haystacks.extend(meal.ingredients.iter().map(|i| i.to_lowercase()));
            }
        }
        assert!(
            haystacks.iter().any(|h| h.contains(&needle)),
            "hit {:?} does not contain query {:?} in any searched field",
            hit.name(),
            needle
        );
    }
}
