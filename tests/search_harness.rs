//! Search layer integration harness.
//!
//! # What this covers
//!
//! The matcher's full contract, from the outside:
//!
//! - **Empty queries**: empty or whitespace-only input returns an empty list.
//! - **Soundness**: every returned hit contains the query case-insensitively
//!   in one of its searched fields (name, tag, meal names, ingredients).
//! - **Completeness**: every record whose name contains the query appears in
//!   the result set.
//! - **Ordering**: exercises before meal plans, fixture order within each
//!   collection. No relevance scoring exists to reorder anything.
//! - **Idempotence**: the same query over the same catalog yields an
//!   identical ordered list.
//! - **Result cap**: `search_limited` never returns more than its limit.
//! - **Scenarios**: the "yoga", "chicken", and empty-string walkthroughs over
//!   the fixture catalog.
//! - **Properties** (proptest): soundness, completeness, and idempotence over
//!   random catalogs and queries.
//!
//! # What this does NOT cover
//!
//! - Result selection and navigation (app-shell tests in fitpro-tui)
//! - Dropdown rendering
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::assertions::{assert_hit_names, assert_hits_match_query};
use common::*;

use fitpro_core::search::{search, search_limited, SearchHit, DEFAULT_RESULT_LIMIT};
use fitpro_core::types::{Category, Goal};
use fitpro_core::Catalog;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Empty queries
// ---------------------------------------------------------------------------

/// Empty and whitespace-only queries return nothing, for any catalog.
#[rstest]
#[case("")]
#[case(" ")]
#[case("   ")]
#[case("\t")]
#[case(" \t \n ")]
fn blank_query_returns_empty(#[case] query: &str) {
    let cat = Catalog::fixture();
    assert!(search(&cat, query).is_empty());
}

// ---------------------------------------------------------------------------
// Soundness
// ---------------------------------------------------------------------------

/// Every hit for a non-empty query contains that query case-insensitively in
/// one of the fields the matcher scans.
#[rstest]
#[case("yoga")]
#[case("PLAN")]
#[case("chicken")]
#[case("a")]
#[case("strength")]
fn hits_contain_query(#[case] query: &str) {
    let cat = Catalog::fixture();
    let hits = search(&cat, query);
    assert_hits_match_query(&hits, query);
}

/// Queries matching nothing return an empty list — a normal outcome, not an
/// error.
#[test]
fn unmatched_query_returns_empty() {
    let cat = Catalog::fixture();
    assert!(search(&cat, "zumba").is_empty());
    assert!(search(&cat, "完全に存在しない").is_empty());
}

/// Non-ASCII and emoji queries go through the same normalize-and-scan path.
#[test]
fn non_ascii_queries_are_handled() {
    let cat = Catalog::fixture();
    assert!(search(&cat, "🏋️").is_empty());
    assert!(search(&cat, "é").is_empty());
}

// ---------------------------------------------------------------------------
// Completeness
// ---------------------------------------------------------------------------

/// Every exercise whose name contains the query appears in the results.
#[test]
fn all_name_matches_are_returned() {
    let cat = Catalog::fixture();
    let query = "o"; // matches several fixture names
    let hits = search(&cat, query);
    for exercise in cat.exercises() {
        if exercise.name.to_lowercase().contains(query) {
            assert_hits_contain!(hits, |h: &SearchHit| h.id() == exercise.id
                && h.kind() == "exercise");
        }
    }
}

/// The query is trimmed before matching, so padded input behaves like the
/// bare query.
#[test]
fn query_is_trimmed() {
    let cat = Catalog::fixture();
    assert_eq!(search(&cat, "  yoga  "), search(&cat, "yoga"));
}

/// Upper, lower, and mixed case queries all return the same hits.
#[test]
fn case_insensitive_equivalence() {
    let cat = Catalog::fixture();
    let lower = search(&cat, "grilled chicken");
    let upper = search(&cat, "GRILLED CHICKEN");
    let mixed = search(&cat, "GrIlLeD cHiCkEn");
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    assert!(!lower.is_empty());
}

// ---------------------------------------------------------------------------
// Ordering and dedup
// ---------------------------------------------------------------------------

/// Exercises come before meal plans, and each collection keeps fixture order.
#[test]
fn scan_order_is_the_contract() {
    let cat = Catalog::fixture();
    // "an" matches two exercise names and both plan names.
    let hits = search(&cat, "an");
    let first_plan = hits.iter().position(|h| h.kind() == "mealplan");
    if let Some(boundary) = first_plan {
        assert!(
            hits[boundary..].iter().all(|h| h.kind() == "mealplan"),
            "exercises must not appear after the first meal plan"
        );
    }

    // Fixture order within the exercise prefix: ids ascend in catalog order.
    let exercise_ids: Vec<&str> = hits
        .iter()
        .filter(|h| h.kind() == "exercise")
        .map(|h| h.id())
        .collect();
    let mut expected = exercise_ids.clone();
    expected.sort_by_key(|id| {
        cat.exercises().iter().position(|e| e.id == *id).unwrap()
    });
    assert_eq!(exercise_ids, expected);
}

/// A record matching on several fields at once still appears exactly once:
/// "yoga" hits the Yoga Flow name and its category label.
#[test]
fn multi_field_match_is_not_duplicated() {
    let cat = Catalog::fixture();
    let hits = search(&cat, "yoga");
    let yoga_hits = hits.iter().filter(|h| h.id() == "4").count();
    assert_eq!(yoga_hits, 1);
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

/// Two runs of the same query over an unchanged catalog produce an identical
/// ordered list.
#[test]
fn repeated_query_is_identical() {
    let cat = Catalog::fixture();
    for query in ["yoga", "chicken", "plan", "e"] {
        assert_eq!(search(&cat, query), search(&cat, query), "query {query:?}");
    }
}

// ---------------------------------------------------------------------------
// Result cap
// ---------------------------------------------------------------------------

/// The default cap bounds the dropdown even when the whole catalog matches.
#[test]
fn default_limit_caps_wide_queries() {
    let cat = synthetic_catalog(100);
    let hits = search(&cat, "exercise");
    assert_eq!(hits.len(), DEFAULT_RESULT_LIMIT);
}

/// A caller-supplied limit wins over the default.
#[test]
fn explicit_limit_is_honoured() {
    let cat = synthetic_catalog(100);
    assert_eq!(search_limited(&cat, "exercise", 5).len(), 5);
    assert_eq!(search_limited(&cat, "exercise", 0).len(), 0);
}

// ---------------------------------------------------------------------------
// Fixture scenarios
// ---------------------------------------------------------------------------

/// "yoga" returns the Yoga Flow exercise and no meal plans.
#[test]
fn scenario_yoga() {
    let cat = Catalog::fixture();
    let hits = search(&cat, "yoga");
    assert_hit_names(&hits, &["Yoga Flow"]);
    assert_hits_all!(hits, |h: &SearchHit| h.kind() == "exercise");
}

/// "chicken" surfaces both fixture plans — the Weight Loss Plan through its
/// Grilled Chicken Salad meal and the Muscle Gain Plan through the chicken
/// breast in its Quinoa Power Bowl — in fixture order.
#[test]
fn scenario_chicken() {
    let cat = Catalog::fixture();
    let hits = search(&cat, "chicken");
    assert_hit_names(&hits, &["Weight Loss Plan", "Muscle Gain Plan"]);
    assert_hits_all!(hits, |h: &SearchHit| h.kind() == "mealplan");
}

/// The empty query returns an empty list regardless of catalog contents.
#[test]
fn scenario_empty_query() {
    assert!(search(&Catalog::fixture(), "").is_empty());
    assert!(search(&synthetic_catalog(50), "").is_empty());
    assert!(search(&catalog_of(Vec::new(), Vec::new()), "").is_empty());
}

/// Goal tags are searchable: "weight loss" finds the plan through its tag as
/// well as its name.
#[test]
fn goal_tag_matches() {
    let cat = catalog_of(
        Vec::new(),
        vec![MealPlanBuilder::new("Cutting Block")
            .id("77")
            .goal(Goal::WeightLoss)
            .build()],
    );
    let hits = search(&cat, "weight loss");
    assert_hit_names(&hits, &["Cutting Block"]);
}

/// Category labels are searchable even when no name matches.
#[test]
fn category_label_matches() {
    let cat = catalog_of(
        vec![ExerciseBuilder::new("Sprints")
            .id("9")
            .category(Category::Cardio)
            .build()],
        Vec::new(),
    );
    let hits = search(&cat, "cardio");
    assert_hit_names(&hits, &["Sprints"]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z ]{1,12}"
}

proptest! {
    /// Property: results are sound — every hit contains the query in a
    /// searched field — and never exceed the catalog size.
    #[test]
    fn prop_hits_are_sound(
        names in prop::collection::vec(name_strategy(), 0..20),
        query in "[A-Za-z]{1,6}",
    ) {
        let exercises = names
            .iter()
            .enumerate()
            .map(|(i, name)| ExerciseBuilder::new(name.clone()).id(i.to_string()).build())
            .collect();
        let cat = catalog_of(exercises, Vec::new());
        let hits = search_limited(&cat, &query, usize::MAX);

        prop_assert!(hits.len() <= cat.exercises().len());
        let needle = query.to_lowercase();
        for hit in &hits {
            let name = hit.name().to_lowercase();
            let tag = hit.tag().to_lowercase();
            prop_assert!(
                name.contains(&needle) || tag.contains(&needle),
                "hit {:?} does not contain {:?}", hit.name(), needle
            );
        }
    }

    /// Property: completeness — every exercise whose name contains the query
    /// shows up when no cap is in play.
    #[test]
    fn prop_name_matches_are_complete(
        names in prop::collection::vec(name_strategy(), 0..20),
        query in "[A-Za-z]{1,6}",
    ) {
        let exercises: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| ExerciseBuilder::new(name.clone()).id(i.to_string()).build())
            .collect();
        let cat = catalog_of(exercises, Vec::new());
        let hits = search_limited(&cat, &query, usize::MAX);

        let needle = query.to_lowercase();
        for exercise in cat.exercises() {
            if exercise.name.to_lowercase().contains(&needle) {
                prop_assert!(
                    hits.iter().any(|h| h.id() == exercise.id),
                    "exercise {:?} missing from results for {:?}", exercise.name, needle
                );
            }
        }
    }

    /// Property: idempotence — the matcher is a pure function of
    /// (query, catalog).
    #[test]
    fn prop_search_is_idempotent(
        names in prop::collection::vec(name_strategy(), 0..20),
        query in "[A-Za-z ]{0,8}",
    ) {
        let exercises = names
            .iter()
            .enumerate()
            .map(|(i, name)| ExerciseBuilder::new(name.clone()).id(i.to_string()).build())
            .collect();
        let cat = catalog_of(exercises, Vec::new());
        prop_assert_eq!(search(&cat, &query), search(&cat, &query));
    }
}
