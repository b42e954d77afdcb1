//! Catalog store integration harness.
//!
//! # What this covers
//!
//! - **Identifier uniqueness**: ids are unique within each collection (the
//!   core catalog invariant; cross-collection collisions are allowed and do
//!   occur in the fixtures).
//! - **Stable order**: the accessors return declaration order, every time.
//! - **Fixture integrity**: every record carries the fields display code
//!   relies on (instructions, ingredients, images, macro totals).
//! - **Read-only surface**: accessors hand out the same data on every call;
//!   there is no mutation API to test.
//!
//! # Running
//!
//! ```sh
//! cargo test --test catalog_harness
//! ```

mod common;

use common::*;
use fitpro_core::types::{Goal, MealType};
use fitpro_core::{catalog, Catalog};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Identifier uniqueness
// ---------------------------------------------------------------------------

/// Exercise ids are unique within the exercise collection.
#[test]
fn exercise_ids_are_unique() {
    let cat = Catalog::fixture();
    let ids: HashSet<&str> = cat.exercises().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), cat.exercises().len());
}

/// Meal plan ids are unique within the meal plan collection.
#[test]
fn meal_plan_ids_are_unique() {
    let cat = Catalog::fixture();
    let ids: HashSet<&str> = cat.meal_plans().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), cat.meal_plans().len());
}

/// Trainer and testimonial ids are unique within their collections too.
#[test]
fn display_collection_ids_are_unique() {
    let cat = Catalog::fixture();
    let trainer_ids: HashSet<&str> = cat.trainers().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(trainer_ids.len(), cat.trainers().len());
    let testimonial_ids: HashSet<&str> =
        cat.testimonials().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(testimonial_ids.len(), cat.testimonials().len());
}

// ---------------------------------------------------------------------------
// Stable order
// ---------------------------------------------------------------------------

/// The exercise collection comes back in declaration order, every time.
#[test]
fn exercises_keep_declaration_order() {
    let names: Vec<&str> = catalog().exercises().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Burpees",
            "Mountain Climbers",
            "Deadlifts",
            "Yoga Flow",
            "Plank Hold",
            "Stretching Routine",
        ]
    );
}

/// Meal plans keep declaration order, and meals keep serving order within
/// each plan.
#[test]
fn meal_plans_keep_declaration_order() {
    let cat = catalog();
    let names: Vec<&str> = cat.meal_plans().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Weight Loss Plan", "Muscle Gain Plan"]);

    for plan in cat.meal_plans() {
        let types: Vec<MealType> = plan.meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(
            types,
            vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack]
        );
    }
}

/// Two independent builds of the fixture catalog are identical — the data is
/// static, not generated.
#[test]
fn fixture_builds_are_reproducible() {
    let a = Catalog::fixture();
    let b = Catalog::fixture();
    assert_eq!(a.exercises(), b.exercises());
    assert_eq!(a.meal_plans(), b.meal_plans());
    assert_eq!(a.trainers(), b.trainers());
    assert_eq!(a.testimonials(), b.testimonials());
}

// ---------------------------------------------------------------------------
// Fixture integrity
// ---------------------------------------------------------------------------

/// Every exercise has ordered instructions, at least one target muscle, a
/// positive burn rate, and an image reference.
#[test]
fn exercises_are_fully_populated() {
    for exercise in catalog().exercises() {
        assert!(!exercise.instructions.is_empty(), "{} has no instructions", exercise.name);
        assert!(!exercise.muscles_targeted.is_empty(), "{} has no muscles", exercise.name);
        assert!(exercise.calories_per_minute > 0, "{} has no burn rate", exercise.name);
        assert!(exercise.duration_secs > 0, "{} has no duration", exercise.name);
        assert!(exercise.image.starts_with("https://"), "{} has no image", exercise.name);
    }
}

/// Every meal has ingredients and calories; plan macro totals are positive.
#[test]
fn meal_plans_are_fully_populated() {
    for plan in catalog().meal_plans() {
        assert!(plan.calories > 0);
        assert!(plan.protein_g > 0 && plan.carbs_g > 0 && plan.fats_g > 0);
        assert_eq!(plan.meals.len(), 4, "{} should cover four sittings", plan.name);
        for meal in &plan.meals {
            assert!(!meal.ingredients.is_empty(), "{} has no ingredients", meal.name);
            assert!(meal.calories > 0, "{} has no calories", meal.name);
        }
    }
}

/// The fixture goals cover weight loss and muscle gain; balanced has no plan
/// yet (the nutrition page shows an empty state for it).
#[test]
fn fixture_goal_coverage() {
    let cat = catalog();
    let goals: HashSet<Goal> = cat.meal_plans().iter().map(|p| p.goal).collect();
    assert!(goals.contains(&Goal::WeightLoss));
    assert!(goals.contains(&Goal::MuscleGain));
    assert!(!goals.contains(&Goal::Balanced));
}

/// Trainers each offer at least one priced program.
#[test]
fn trainers_offer_programs() {
    for trainer in catalog().trainers() {
        assert!(!trainer.programs.is_empty(), "{} has no programs", trainer.name);
        assert!((0.0..=5.0).contains(&trainer.rating));
        for program in &trainer.programs {
            assert!(program.price_usd > 0);
            assert!(!program.features.is_empty());
        }
    }
}

// ---------------------------------------------------------------------------
// Constructed catalogs
// ---------------------------------------------------------------------------

/// `Catalog::new` preserves whatever order the caller passes — scan order is
/// the caller's contract.
#[test]
fn constructed_catalog_preserves_order() {
    let cat = catalog_of(
        vec![
            ExerciseBuilder::new("Zebra Walk").id("z").build(),
            ExerciseBuilder::new("Alpha Stretch").id("a").build(),
        ],
        Vec::new(),
    );
    let names: Vec<&str> = cat.exercises().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Zebra Walk", "Alpha Stretch"]);
}
