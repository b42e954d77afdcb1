//! Configuration types for fitpro.
//!
//! [`Config::load`] reads `~/.config/fitpro/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
theme                = "default"
show_hints           = true
search_results_limit = 20

[calculator]
default_weight_kg    = 70
default_duration_min = 30
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/fitpro/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
    #[serde(default = "default_search_results_limit")]
    pub search_results_limit: usize,
}

fn default_theme() -> String { "default".to_string() }
fn default_show_hints() -> bool { true }
fn default_search_results_limit() -> usize { 20 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_hints: default_show_hints(),
            search_results_limit: default_search_results_limit(),
        }
    }
}

/// `[calculator]` section of `config.toml` — form values pre-filled on the
/// calculator page.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_weight_kg")]
    pub default_weight_kg: u32,
    #[serde(default = "default_duration_min")]
    pub default_duration_min: u32,
}

fn default_weight_kg() -> u32 { 70 }
fn default_duration_min() -> u32 { 30 }

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_weight_kg: default_weight_kg(),
            default_duration_min: default_duration_min(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/fitpro/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fitpro")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
