//! Configuration management for the counter-todos application.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A value that is present but does not parse falls back to its default.

use serde::{Deserialize, Serialize};
use std::env;
use unistate_runtime::StoreConfig;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "counter_todos=info,unistate_runtime=info";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `tracing` filter directive (`RUST_LOG`)
    pub log_filter: String,
    /// Install the Prometheus recorder (`METRICS_ENABLED`)
    pub metrics_enabled: bool,
    /// Capacity of the action broadcast channel (`BROADCAST_CAPACITY`)
    pub broadcast_capacity: usize,
    /// Profile header
    pub profile: ProfileConfig,
}

/// Profile header configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Display name (`PROFILE_NAME`)
    pub name: String,
    /// Job title (`PROFILE_JOB`)
    pub job: String,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            metrics_enabled: lookup("METRICS_ENABLED")
                .and_then(|s| parse_bool(&s))
                .unwrap_or(false),
            broadcast_capacity: lookup("BROADCAST_CAPACITY")
                .and_then(|s| s.parse().ok())
                .unwrap_or(16),
            profile: ProfileConfig {
                name: lookup("PROFILE_NAME").unwrap_or_else(|| "lucas".to_string()),
                job: lookup("PROFILE_JOB").unwrap_or_else(|| "developer".to_string()),
            },
        }
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.broadcast_capacity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
