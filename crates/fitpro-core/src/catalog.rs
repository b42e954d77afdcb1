//! Catalog — the process-wide, read-only store of fixture records.
//!
//! The catalog is the single source of truth; the search layer and every page
//! widget read from it, never from private copies. It is built once on first
//! access and lives for the process lifetime. There is no mutation API.

use crate::types::{
    Category, Difficulty, Exercise, Goal, Meal, MealPlan, MealType, Testimonial, Trainer,
    TrainerProgram,
};
use std::sync::LazyLock;

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::fixture);

/// The process-wide catalog singleton.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Immutable collections of fixture records, in declaration order.
#[derive(Debug)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    meal_plans: Vec<MealPlan>,
    trainers: Vec<Trainer>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// Assemble a catalog from explicit collections. Order is preserved —
    /// scan order is the search contract, so callers choose it here.
    pub fn new(
        exercises: Vec<Exercise>,
        meal_plans: Vec<MealPlan>,
        trainers: Vec<Trainer>,
        testimonials: Vec<Testimonial>,
    ) -> Self {
        Catalog { exercises, meal_plans, trainers, testimonials }
    }

    /// All exercises, in fixture order.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// All meal plans, in fixture order.
    pub fn meal_plans(&self) -> &[MealPlan] {
        &self.meal_plans
    }

    /// All trainers, in fixture order.
    pub fn trainers(&self) -> &[Trainer] {
        &self.trainers
    }

    /// All testimonials, in fixture order.
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Look up an exercise by identifier.
    pub fn exercise_by_id(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Look up a meal plan by identifier.
    pub fn meal_plan_by_id(&self, id: &str) -> Option<&MealPlan> {
        self.meal_plans.iter().find(|p| p.id == id)
    }

    /// Build the built-in fixture catalog.
    ///
    /// [`catalog`] memoises this; tests that want a fresh, owned catalog can
    /// call it directly.
    pub fn fixture() -> Self {
        Catalog {
            exercises: fixture_exercises(),
            meal_plans: fixture_meal_plans(),
            trainers: fixture_trainers(),
            testimonials: fixture_testimonials(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

// ---------------------------------------------------------------------------
// Exercise fixtures
// ---------------------------------------------------------------------------

fn fixture_exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            id: "1".to_string(),
            name: "Burpees".to_string(),
            category: Category::Hiit,
            muscles_targeted: strings(&["Full Body", "Core", "Legs", "Arms"]),
            calories_per_minute: 12,
            difficulty: Difficulty::Advanced,
            duration_secs: 30,
            instructions: strings(&[
                "Start in a standing position",
                "Drop into a squat and place hands on the ground",
                "Jump feet back into a plank position",
                "Do a push-up",
                "Jump feet back to squat position",
                "Explode up with arms overhead",
            ]),
            image: "https://images.pexels.com/photos/4162449/pexels-photo-4162449.jpeg"
                .to_string(),
        },
        Exercise {
            id: "2".to_string(),
            name: "Mountain Climbers".to_string(),
            category: Category::Cardio,
            muscles_targeted: strings(&["Core", "Shoulders", "Legs"]),
            calories_per_minute: 10,
            difficulty: Difficulty::Intermediate,
            duration_secs: 45,
            instructions: strings(&[
                "Start in plank position",
                "Alternate bringing knees to chest",
                "Keep core engaged",
                "Maintain steady rhythm",
            ]),
            image: "https://images.pexels.com/photos/4162438/pexels-photo-4162438.jpeg"
                .to_string(),
        },
        Exercise {
            id: "3".to_string(),
            name: "Deadlifts".to_string(),
            category: Category::Strength,
            muscles_targeted: strings(&["Hamstrings", "Glutes", "Lower Back"]),
            calories_per_minute: 8,
            difficulty: Difficulty::Intermediate,
            duration_secs: 60,
            instructions: strings(&[
                "Stand with feet hip-width apart",
                "Hold barbell with overhand grip",
                "Keep back straight, chest up",
                "Hinge at hips, lower bar to shins",
                "Drive hips forward to return to standing",
            ]),
            image: "https://images.pexels.com/photos/1552252/pexels-photo-1552252.jpeg"
                .to_string(),
        },
        Exercise {
            id: "4".to_string(),
            name: "Yoga Flow".to_string(),
            category: Category::Yoga,
            muscles_targeted: strings(&["Full Body", "Core", "Flexibility"]),
            calories_per_minute: 4,
            difficulty: Difficulty::Beginner,
            duration_secs: 120,
            instructions: strings(&[
                "Start in mountain pose",
                "Flow through sun salutations",
                "Hold each pose for 30 seconds",
                "Focus on breath and alignment",
            ]),
            image: "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg"
                .to_string(),
        },
        Exercise {
            id: "5".to_string(),
            name: "Plank Hold".to_string(),
            category: Category::Strength,
            muscles_targeted: strings(&["Core", "Shoulders", "Arms"]),
            calories_per_minute: 6,
            difficulty: Difficulty::Beginner,
            duration_secs: 60,
            instructions: strings(&[
                "Start in push-up position",
                "Hold body straight",
                "Engage core muscles",
                "Keep breathing steady",
            ]),
            image: "https://images.pexels.com/photos/4162494/pexels-photo-4162494.jpeg"
                .to_string(),
        },
        Exercise {
            id: "6".to_string(),
            name: "Stretching Routine".to_string(),
            category: Category::Flexibility,
            muscles_targeted: strings(&["Full Body", "Hamstrings", "Hip Flexors"]),
            calories_per_minute: 3,
            difficulty: Difficulty::Beginner,
            duration_secs: 90,
            instructions: strings(&[
                "Start with gentle neck rolls",
                "Stretch each muscle group",
                "Hold stretches for 30 seconds",
                "Focus on relaxation and breathing",
            ]),
            image: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg"
                .to_string(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Meal plan fixtures
// ---------------------------------------------------------------------------

fn fixture_meal_plans() -> Vec<MealPlan> {
    vec![
        MealPlan {
            id: "1".to_string(),
            name: "Weight Loss Plan".to_string(),
            goal: Goal::WeightLoss,
            calories: 1600,
            protein_g: 120,
            carbs_g: 150,
            fats_g: 60,
            meals: vec![
                Meal {
                    meal_type: MealType::Breakfast,
                    name: "Greek Yogurt Bowl".to_string(),
                    calories: 300,
                    ingredients: strings(&["Greek yogurt", "Berries", "Granola", "Honey"]),
                    image: "https://images.pexels.com/photos/1092730/pexels-photo-1092730.jpeg"
                        .to_string(),
                },
                Meal {
                    meal_type: MealType::Lunch,
                    name: "Grilled Chicken Salad".to_string(),
                    calories: 450,
                    ingredients: strings(&[
                        "Grilled chicken",
                        "Mixed greens",
                        "Tomatoes",
                        "Avocado",
                        "Olive oil",
                    ]),
                    image: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg"
                        .to_string(),
                },
                Meal {
                    meal_type: MealType::Dinner,
                    name: "Salmon with Vegetables".to_string(),
                    calories: 500,
                    ingredients: strings(&[
                        "Salmon fillet",
                        "Broccoli",
                        "Sweet potato",
                        "Lemon",
                    ]),
                    image: "https://images.pexels.com/photos/1516415/pexels-photo-1516415.jpeg"
                        .to_string(),
                },
                Meal {
                    meal_type: MealType::Snack,
                    name: "Protein Smoothie".to_string(),
                    calories: 350,
                    ingredients: strings(&[
                        "Protein powder",
                        "Banana",
                        "Spinach",
                        "Almond milk",
                    ]),
                    image: "https://images.pexels.com/photos/1092730/pexels-photo-1092730.jpeg"
                        .to_string(),
                },
            ],
        },
        MealPlan {
            id: "2".to_string(),
            name: "Muscle Gain Plan".to_string(),
            goal: Goal::MuscleGain,
            calories: 2800,
            protein_g: 200,
            carbs_g: 300,
            fats_g: 100,
            meals: vec![
                Meal {
                    meal_type: MealType::Breakfast,
                    name: "Protein Pancakes".to_string(),
                    calories: 600,
                    ingredients: strings(&[
                        "Oats",
                        "Protein powder",
                        "Eggs",
                        "Banana",
                        "Maple syrup",
                    ]),
                    image: "https://images.pexels.com/photos/1092730/pexels-photo-1092730.jpeg"
                        .to_string(),
                },
                Meal {
                    meal_type: MealType::Lunch,
                    name: "Quinoa Power Bowl".to_string(),
                    calories: 750,
                    ingredients: strings(&[
                        "Quinoa",
                        "Chicken breast",
                        "Black beans",
                        "Avocado",
                        "Nuts",
                    ]),
                    image: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg"
                        .to_string(),
                },
                Meal {
                    meal_type: MealType::Dinner,
                    name: "Steak & Rice".to_string(),
                    calories: 900,
                    ingredients: strings(&[
                        "Lean steak",
                        "Brown rice",
                        "Asparagus",
                        "Sweet potato",
                    ]),
                    image: "https://images.pexels.com/photos/1516415/pexels-photo-1516415.jpeg"
                        .to_string(),
                },
                Meal {
                    meal_type: MealType::Snack,
                    name: "Post-Workout Shake".to_string(),
                    calories: 550,
                    ingredients: strings(&[
                        "Whey protein",
                        "Banana",
                        "Oats",
                        "Peanut butter",
                        "Milk",
                    ]),
                    image: "https://images.pexels.com/photos/1092730/pexels-photo-1092730.jpeg"
                        .to_string(),
                },
            ],
        },
    ]
}

// ---------------------------------------------------------------------------
// Trainer fixtures
// ---------------------------------------------------------------------------

fn fixture_trainers() -> Vec<Trainer> {
    vec![
        Trainer {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            specialties: strings(&["HIIT", "Weight Loss", "Cardio"]),
            experience_years: 8,
            rating: 4.9,
            image: "https://images.pexels.com/photos/3768911/pexels-photo-3768911.jpeg"
                .to_string(),
            bio: "Certified personal trainer specializing in high-intensity workouts and \
                  sustainable weight loss programs."
                .to_string(),
            programs: vec![TrainerProgram {
                id: "1".to_string(),
                name: "HIIT Transformation".to_string(),
                duration: "12 weeks".to_string(),
                price_usd: 299,
                description: "Complete body transformation through high-intensity interval \
                              training"
                    .to_string(),
                features: strings(&[
                    "3 workouts/week",
                    "Nutrition guide",
                    "Progress tracking",
                    "24/7 support",
                ]),
            }],
        },
        Trainer {
            id: "2".to_string(),
            name: "Mike Rodriguez".to_string(),
            specialties: strings(&["Strength Training", "Muscle Building"]),
            experience_years: 12,
            rating: 4.8,
            image: "https://images.pexels.com/photos/1431282/pexels-photo-1431282.jpeg"
                .to_string(),
            bio: "Former competitive bodybuilder with expertise in strength training and \
                  muscle development."
                .to_string(),
            programs: vec![TrainerProgram {
                id: "2".to_string(),
                name: "Strength Builder".to_string(),
                duration: "16 weeks".to_string(),
                price_usd: 399,
                description: "Progressive strength training program for serious muscle gains"
                    .to_string(),
                features: strings(&[
                    "4 workouts/week",
                    "Custom meal plans",
                    "Form coaching",
                    "Supplement guide",
                ]),
            }],
        },
        Trainer {
            id: "3".to_string(),
            name: "Emma Chen".to_string(),
            specialties: strings(&["Yoga", "Flexibility", "Mindfulness"]),
            experience_years: 6,
            rating: 4.9,
            image: "https://images.pexels.com/photos/3757954/pexels-photo-3757954.jpeg"
                .to_string(),
            bio: "Yoga instructor focused on mindful movement, flexibility, and mental \
                  wellness."
                .to_string(),
            programs: vec![TrainerProgram {
                id: "3".to_string(),
                name: "Mindful Movement".to_string(),
                duration: "8 weeks".to_string(),
                price_usd: 199,
                description: "Transform your body and mind through yoga and meditation"
                    .to_string(),
                features: strings(&[
                    "Daily sessions",
                    "Meditation guide",
                    "Flexibility tracking",
                    "Community access",
                ]),
            }],
        },
    ]
}

// ---------------------------------------------------------------------------
// Testimonial fixtures
// ---------------------------------------------------------------------------

fn fixture_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "1".to_string(),
            name: "Jessica Martinez".to_string(),
            image: "https://images.pexels.com/photos/3768911/pexels-photo-3768911.jpeg"
                .to_string(),
            before_image: "https://images.pexels.com/photos/3768263/pexels-photo-3768263.jpeg"
                .to_string(),
            after_image: "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg"
                .to_string(),
            story: "Lost 30 pounds in 6 months and gained incredible confidence. The \
                    personalized workout plans and nutrition guidance made all the difference!"
                .to_string(),
            transformation: "30 lbs lost".to_string(),
            rating: 5,
        },
        Testimonial {
            id: "2".to_string(),
            name: "David Thompson".to_string(),
            image: "https://images.pexels.com/photos/1431282/pexels-photo-1431282.jpeg"
                .to_string(),
            before_image: "https://images.pexels.com/photos/1552252/pexels-photo-1552252.jpeg"
                .to_string(),
            after_image: "https://images.pexels.com/photos/1552106/pexels-photo-1552106.jpeg"
                .to_string(),
            story: "Built 15 pounds of muscle and achieved my dream physique. The strength \
                    training programs are incredibly effective!"
                .to_string(),
            transformation: "15 lbs muscle gained".to_string(),
            rating: 5,
        },
        Testimonial {
            id: "3".to_string(),
            name: "Maria Santos".to_string(),
            image: "https://images.pexels.com/photos/3757954/pexels-photo-3757954.jpeg"
                .to_string(),
            before_image: "https://images.pexels.com/photos/4056723/pexels-photo-4056723.jpeg"
                .to_string(),
            after_image: "https://images.pexels.com/photos/3822622/pexels-photo-3822622.jpeg"
                .to_string(),
            story: "Improved my flexibility and found inner peace through yoga. My stress \
                    levels dropped significantly and I feel amazing!"
                .to_string(),
            transformation: "Complete wellness".to_string(),
            rating: 5,
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
