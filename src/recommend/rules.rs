//! TOML rule loading for the recommendation engine.
//!
//! Provides two loading methods:
//! - `default_rules()` - Loads embedded rules compiled into the binary
//! - `load_rules(path)` - Loads a replacement rule set from a file path

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::types::RulesConfig;

/// Default rules embedded in the binary at compile time.
/// These are loaded from `config/wheel_rules.toml`.
const DEFAULT_RULES: &str = include_str!("../../config/wheel_rules.toml");

/// Load rules from a TOML file at the given path.
///
/// # Returns
/// * `Ok(RulesConfig)` - Parsed rules
/// * `Err` - If the file cannot be read or the TOML does not match the rule shape
pub fn load_rules(path: &Path) -> Result<RulesConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading rule file {}", path.display()))?;
    let config: RulesConfig = toml::from_str(&content)
        .with_context(|| format!("parsing rule file {}", path.display()))?;
    info!(
        "Loaded {} mixed and {} single rules from {}",
        config.mixed.len(),
        config.single.len(),
        path.display()
    );
    Ok(config)
}

/// Get the default rules embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_rules() -> RulesConfig {
    toml::from_str(DEFAULT_RULES).expect("embedded wheel_rules.toml must be valid TOML")
}
