//! Test builders — ergonomic constructors for catalog records and catalogs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fitpro_core::types::{Category, Difficulty, Exercise, Goal, Meal, MealPlan, MealType};
use fitpro_core::Catalog;

// ---------------------------------------------------------------------------
// ExerciseBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Exercise`] test fixtures.
///
/// # Example
///
/// ```rust
/// let exercise = ExerciseBuilder::new("Jump Rope")
///     .id("99")
///     .category(Category::Cardio)
///     .difficulty(Difficulty::Beginner)
///     .build();
/// ```
pub struct ExerciseBuilder {
    id: String,
    name: String,
    category: Category,
    muscles_targeted: Vec<String>,
    calories_per_minute: u32,
    difficulty: Difficulty,
    duration_secs: u32,
    instructions: Vec<String>,
    image: String,
}

impl ExerciseBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: "test-exercise".to_string(),
            name: name.into(),
            category: Category::Cardio,
            muscles_targeted: vec!["Core".to_string()],
            calories_per_minute: 8,
            difficulty: Difficulty::Beginner,
            duration_secs: 60,
            instructions: vec!["Do the movement".to_string()],
            image: "https://example.test/exercise.jpeg".to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn calories_per_minute(mut self, kcal: u32) -> Self {
        self.calories_per_minute = kcal;
        self
    }

    pub fn build(self) -> Exercise {
        Exercise {
            id: self.id,
            name: self.name,
            category: self.category,
            muscles_targeted: self.muscles_targeted,
            calories_per_minute: self.calories_per_minute,
            difficulty: self.difficulty,
            duration_secs: self.duration_secs,
            instructions: self.instructions,
            image: self.image,
        }
    }
}

// ---------------------------------------------------------------------------
// MealPlanBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`MealPlan`] test fixtures. Starts with no meals; add
/// them with [`MealPlanBuilder::meal`].
pub struct MealPlanBuilder {
    id: String,
    name: String,
    goal: Goal,
    calories: u32,
    meals: Vec<Meal>,
}

impl MealPlanBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: "test-plan".to_string(),
            name: name.into(),
            goal: Goal::Balanced,
            calories: 2000,
            meals: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    pub fn meal(mut self, name: impl Into<String>, ingredients: &[&str]) -> Self {
        self.meals.push(Meal {
            meal_type: MealType::Lunch,
            name: name.into(),
            calories: 500,
            ingredients: ingredients.iter().map(|s| (*s).to_string()).collect(),
            image: "https://example.test/meal.jpeg".to_string(),
        });
        self
    }

    pub fn build(self) -> MealPlan {
        MealPlan {
            id: self.id,
            name: self.name,
            goal: self.goal,
            calories: self.calories,
            protein_g: 100,
            carbs_g: 200,
            fats_g: 70,
            meals: self.meals,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog helpers
// ---------------------------------------------------------------------------

/// Catalog with just the given exercises and meal plans (no trainers or
/// testimonials — the matcher never reads those).
pub fn catalog_of(exercises: Vec<Exercise>, meal_plans: Vec<MealPlan>) -> Catalog {
    Catalog::new(exercises, meal_plans, Vec::new(), Vec::new())
}

/// Catalog of `n` exercises named `exercise-0` … `exercise-{n-1}`, for
/// scaling and cap tests.
pub fn synthetic_catalog(n: usize) -> Catalog {
    let exercises = (0..n)
        .map(|i| {
            ExerciseBuilder::new(format!("exercise-{i}"))
                .id(i.to_string())
                .category(Category::ALL[i % Category::ALL.len()])
                .build()
        })
        .collect();
    catalog_of(exercises, Vec::new())
}
