//! fitpro-core — fitness catalog core library.
//!
//! This crate holds everything below the presentation layer, plus the shared
//! types used across all of it.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Search ──► UI
//!    │
//!    └──► Calculator / Stats (read-only consumers)
//! ```
//!
//! The catalog is immutable after first access; every query is a synchronous
//! full scan, so there is no shared mutable state and no locking discipline
//! beyond `LazyLock` initialisation.

pub mod auth;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod search;
pub mod stats;
pub mod types;

pub use catalog::{catalog, Catalog};
pub use search::{search, SearchHit};
pub use types::{Category, Difficulty, Exercise, Goal, Meal, MealPlan, MealType, Testimonial, Trainer};
