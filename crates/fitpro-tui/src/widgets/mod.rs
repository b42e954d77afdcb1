//! Ratatui widgets for the fitpro TUI.

pub mod auth_modal;
pub mod calculator;
pub mod command_bar;
pub mod dashboard;
pub mod exercise_library;
pub mod help;
pub mod hero;
pub mod nutrition;
pub mod search_bar;
pub mod tab_bar;
pub mod trainers;
