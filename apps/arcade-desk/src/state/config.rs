//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ARCADE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default log filter when neither `RUST_LOG` nor `ARCADE_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,arcade=debug";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (report title)
    pub store_name: String,

    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_filter: String,

    /// JSON file replayed into the store at startup
    pub seed_file: Option<PathBuf>,

    /// Tier label for seed registrations that omit one
    pub default_tier: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Central P2-CG"
    /// - Log filter: `info,arcade=debug`
    /// - Seed file: none
    /// - Default tier: "Entry"
    fn default() -> Self {
        ConfigState {
            store_name: "Central P2-CG".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_file: None,
            default_tier: "Entry".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ARCADE_STORE_NAME`: Override store name
    /// - `ARCADE_LOG`: Override default log filter
    /// - `ARCADE_SEED_FILE`: Path of a seed file to replay
    /// - `ARCADE_DEFAULT_TIER`: Tier label for seed entries without one
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values are
    /// ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = get("ARCADE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(log_filter) = get("ARCADE_LOG") {
            config.log_filter = log_filter;
        }

        if let Some(seed_file) = get("ARCADE_SEED_FILE") {
            config.seed_file = Some(PathBuf::from(seed_file));
        }

        if let Some(default_tier) = get("ARCADE_DEFAULT_TIER") {
            config.default_tier = default_tier;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[]));
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.store_name, "Central P2-CG");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("ARCADE_STORE_NAME", "Loja Norte"),
            ("ARCADE_LOG", "debug"),
            ("ARCADE_SEED_FILE", "/tmp/seed.json"),
            ("ARCADE_DEFAULT_TIER", "veteran"),
        ]));

        assert_eq!(config.store_name, "Loja Norte");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.seed_file, Some(PathBuf::from("/tmp/seed.json")));
        assert_eq!(config.default_tier, "veteran");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ConfigState::from_lookup(lookup(&[("ARCADE_STORE_NAME", "  ")]));
        assert_eq!(config.store_name, "Central P2-CG");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["storeName"], "Central P2-CG");
        assert_eq!(json["defaultTier"], "Entry");
        assert!(json["seedFile"].is_null());
    }
}
