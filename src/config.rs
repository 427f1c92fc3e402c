//! Runtime configuration
//!
//! Read from the environment (optionally via `.env`). Bad values fall back
//! to defaults with a warning so the service always starts.

use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

use crate::analysis::DEFAULT_MAX_KEYWORDS;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RESOURCES_FILE: &str = "resources.json";

#[derive(Debug, Clone, PartialEq)]
pub struct TriageConfig {
    pub port: u16,
    pub resources_file: PathBuf,
    /// Write the embedded catalog when the resources file is missing
    pub seed_resources_file: bool,
    /// Base seed for reproducible replies; None means entropy per request
    pub seed: Option<u64>,
    pub max_keywords: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            resources_file: PathBuf::from(DEFAULT_RESOURCES_FILE),
            seed_resources_file: false,
            seed: None,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }
}

impl TriageConfig {
    /// Load from process environment after reading `.env` if present
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key → value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = lookup("PORT")
            .or_else(|| lookup("API_PORT"))
            .map(|v| parse_or("PORT", &v, defaults.port))
            .unwrap_or(defaults.port);

        let resources_file = lookup("RESOURCES_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.resources_file);

        let seed_resources_file = lookup("SEED_RESOURCES_FILE")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.seed_resources_file);

        let seed = lookup("TRIAGE_SEED").and_then(|v| match v.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("Ignoring invalid TRIAGE_SEED '{}'", v);
                None
            }
        });

        let max_keywords = lookup("MAX_KEYWORDS")
            .map(|v| parse_or("MAX_KEYWORDS", &v, defaults.max_keywords))
            .filter(|&n| {
                if n == 0 {
                    warn!("MAX_KEYWORDS must be at least 1, using {}", DEFAULT_MAX_KEYWORDS);
                }
                n > 0
            })
            .unwrap_or(defaults.max_keywords);

        Self {
            port,
            resources_file,
            seed_resources_file,
            seed,
            max_keywords,
        }
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, value: &str, default: T) -> T {
    value.trim().parse().unwrap_or_else(|_| {
        warn!("Invalid {} '{}', using {}", key, value, default);
        default
    })
}
