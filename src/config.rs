//! Engine configuration.
//!
//! Read from `<config dir>/wheelmate/config.toml` when present. Every field is
//! optional; a missing file means defaults (embedded rules, `info` logging).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::recommend::{default_rules, load_rules, RuleSet};

/// Environment variable that overrides `rules_path`.
pub const RULES_ENV: &str = "WHEELMATE_RULES";

const APP_DIR: &str = "wheelmate";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Replacement rule file; the embedded rules are used when unset
    pub rules_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location, then apply the environment override.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        if let Some(rules) = std::env::var_os(RULES_ENV).filter(|v| !v.is_empty()) {
            debug!("{} overrides rules path", RULES_ENV);
            config.rules_path = Some(PathBuf::from(rules));
        }
        Ok(config)
    }

    /// Load from an explicit file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the rule repository this config points at.
    pub fn rule_set(&self) -> Result<RuleSet> {
        let rules = match &self.rules_path {
            Some(path) => load_rules(path)?,
            None => default_rules(),
        };
        let set = RuleSet::from(rules);
        info!("Rule repository ready with {} rules", set.len());
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.rules_path.is_none());
        assert_eq!(config.log_filter, "info");
        assert!(!config.rule_set().unwrap().is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"wheelmate=debug\"").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter, "wheelmate=debug");
        assert!(config.rules_path.is_none());
    }

    #[test]
    fn test_rules_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("rules.toml");
        std::fs::write(
            &rules_path,
            r#"
[[single]]
id = "only"
notation_mode = "standard"
[single.conditions]
discipline = ["slides"]
weight_range_kg = { min = 1.0, max = 200.0 }
age_range = { min = 1.0, max = 100.0 }
[single.recommendation]
hardness = "Firm"
profile = "Elliptical"
notes = "only rule"
"#,
        )
        .unwrap();

        let config = EngineConfig {
            rules_path: Some(rules_path),
            ..EngineConfig::default()
        };
        assert_eq!(config.rule_set().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_rules_file_errors() {
        let config = EngineConfig {
            rules_path: Some(PathBuf::from("/nonexistent/rules.toml")),
            ..EngineConfig::default()
        };
        assert!(config.rule_set().is_err());
    }

    #[test]
    fn test_invalid_config_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = 7").unwrap();
        assert!(EngineConfig::from_file(file.path()).is_err());
    }
}
