//! Host configuration from environment variables.
//!
//! - `TRIS_SEED`: RNG seed for the session (default: derived from the system clock)
//! - `TRIS_GRAVITY_MS`: gravity interval in milliseconds (default: 800)
//! - `TRIS_LOG_PATH`: append touchdown records as JSON lines to this file (default: off)
//!
//! Unparseable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_GRAVITY_MS, MIN_GRAVITY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: u32,
    pub gravity_ms: u32,
    pub log_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity_ms: DEFAULT_GRAVITY_MS,
            log_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let gravity_ms = lookup("TRIS_GRAVITY_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(MIN_GRAVITY_MS))
            .unwrap_or(DEFAULT_GRAVITY_MS);

        let log_path = lookup("TRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            gravity_ms,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
