//! Config file and environment handling.
//!
//! Sources, lowest precedence first: built-in defaults, the optional TOML file
//! given with `--config`, `CUSTLEDGER__<SECTION>__<KEY>` environment variables,
//! and finally command-line flags.

use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result};
use custledger_core::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

use crate::render::DEFAULT_ADDRESS_WIDTH;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub capacity: Option<usize>,
    pub seed_defaults: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DisplaySection {
    pub address_width: Option<usize>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: Option<StoreSection>,
    #[serde(default)]
    pub display: Option<DisplaySection>,
}

/// Effective settings after every source has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub capacity: usize,
    pub seed_defaults: bool,
    pub address_width: usize,
}

impl AppConfig {
    pub fn resolve(&self, capacity: Option<usize>, seed: Option<bool>) -> Result<Settings> {
        let store = self.store.clone().unwrap_or_default();
        let display = self.display.clone().unwrap_or_default();
        let settings = Settings {
            capacity: capacity.or(store.capacity).unwrap_or(DEFAULT_CAPACITY),
            seed_defaults: seed.or(store.seed_defaults).unwrap_or(true),
            address_width: display.address_width.unwrap_or(DEFAULT_ADDRESS_WIDTH),
        };
        if settings.capacity == 0 {
            return Err(eyre!("store capacity must be at least 1"));
        }
        Ok(settings)
    }
}

fn expand_path(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(input)
}

pub fn load_config(path: Option<&str>) -> Result<AppConfig> {
    let mut builder = config::Config::builder();

    if let Some(raw) = path {
        let expanded = expand_path(raw);
        if !expanded.exists() {
            tracing::warn!(
                path = expanded.display().to_string(),
                "config file not found; continuing with defaults and env overrides"
            );
        }
        builder = builder.add_source(
            config::File::from(expanded)
                .format(config::FileFormat::Toml)
                .required(false),
        );
    }

    // Added last so environment values win over the file.
    builder = builder.add_source(
        config::Environment::with_prefix("CUSTLEDGER")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let cfg = builder
        .build()
        .map_err(|e| eyre!("config load error: {}", e))?;
    cfg.try_deserialize()
        .map_err(|e| eyre!("config parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_without_sources() {
        let settings = AppConfig::default().resolve(None, None).unwrap();
        assert_eq!(
            settings,
            Settings {
                capacity: 500,
                seed_defaults: true,
                address_width: DEFAULT_ADDRESS_WIDTH,
            }
        );
    }

    #[test]
    fn flags_override_file_values() {
        let cfg = AppConfig {
            store: Some(StoreSection {
                capacity: Some(20),
                seed_defaults: Some(false),
            }),
            display: Some(DisplaySection {
                address_width: Some(12),
            }),
        };
        let from_file = cfg.resolve(None, None).unwrap();
        assert_eq!(from_file.capacity, 20);
        assert!(!from_file.seed_defaults);
        assert_eq!(from_file.address_width, 12);

        let overridden = cfg.resolve(Some(3), Some(true)).unwrap();
        assert_eq!(overridden.capacity, 3);
        assert!(overridden.seed_defaults);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(AppConfig::default().resolve(Some(0), None).is_err());
    }

    #[test]
    fn reads_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custledger.toml");
        fs::write(
            &path,
            "[store]\ncapacity = 42\nseed_defaults = false\n\n[display]\naddress_width = 16\n",
        )
        .unwrap();
        let cfg = load_config(path.to_str()).unwrap();
        let settings = cfg.resolve(None, None).unwrap();
        assert_eq!(settings.capacity, 42);
        assert!(!settings.seed_defaults);
        assert_eq!(settings.address_width, 16);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config(Some("/nonexistent/custledger.toml")).unwrap();
        assert!(cfg.store.is_none());
    }
}
