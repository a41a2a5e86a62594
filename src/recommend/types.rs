//! Type definitions for the wheel recommendation engine.
//!
//! Rule types deserialize from TOML (the rule data files); output types
//! serialize to JSON for the form collaborator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::profile::{
    Discipline, ExperienceLevel, HardnessNotation, Priority, RidingStyle, Surface, Temperature,
};

// =============================================================================
// RULE DATA (loaded from TOML)
// =============================================================================

/// Root of a rule data file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesConfig {
    /// Rules that carry a per-position mixed configuration
    #[serde(default)]
    pub mixed: Vec<Rule>,
    /// Rules that recommend one hardness for the whole set
    #[serde(default)]
    pub single: Vec<Rule>,
}

/// A declarative condition-to-recommendation mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    pub id: String,
    /// Which hardness notation the recommendation is written in
    pub notation_mode: HardnessNotation,
    pub conditions: RuleConditions,
    pub recommendation: RuleRecommendation,
}

impl Rule {
    pub fn is_mixed_capable(&self) -> bool {
        self.recommendation.mixed_config.is_some()
    }
}

/// Conditions a profile is scored against.
///
/// Discipline is mandatory. Every other set may be left out of the file, in
/// which case it never contributes points.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConditions {
    pub discipline: Vec<Discipline>,
    pub weight_range_kg: Range,
    pub age_range: Range,
    #[serde(default)]
    pub experience: Vec<ExperienceLevel>,
    #[serde(default)]
    pub style: Vec<RidingStyle>,
    #[serde(default)]
    pub surface: Vec<Surface>,
    #[serde(default)]
    pub temperature: Vec<Temperature>,
    #[serde(default)]
    pub priority: Vec<Priority>,
}

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// What a rule recommends when it wins.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleRecommendation {
    pub hardness: String,
    /// Wheel cross-section shape, e.g. "Elliptical"
    pub profile: String,
    pub notes: String,
    #[serde(default)]
    pub mixed_config: Option<MixedConfig>,
}

/// Per-position hardness map for one foot (positions "1".."4", front to back).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixedConfig {
    pub positions: BTreeMap<String, String>,
    pub description: String,
}

impl MixedConfig {
    /// Build a config from the four position labels, front to back.
    pub fn from_positions(labels: [&str; 4], description: &str) -> Self {
        let positions = labels
            .iter()
            .enumerate()
            .map(|(i, label)| ((i + 1).to_string(), label.to_string()))
            .collect();
        Self {
            positions,
            description: description.to_string(),
        }
    }

    /// Positions 1-2 get `front`, positions 3-4 get `rear`.
    pub fn front_rear(front: &str, rear: &str, description: &str) -> Self {
        Self::from_positions([front, front, rear, rear], description)
    }

    pub fn position(&self, position: u8) -> Option<&str> {
        self.positions.get(&position.to_string()).map(String::as_str)
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Outcome of scoring one rule against one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScore {
    /// Discipline not in the rule's set; never compared against other rules
    Disqualified,
    /// Discipline matched; total points earned (10..=43)
    Qualified(u32),
}

/// The rule picked by the selector and the score it won with.
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch<'a> {
    pub rule: &'a Rule,
    pub score: u32,
}

// =============================================================================
// OUTPUT (serialized to the form collaborator)
// =============================================================================

/// Final recommendation handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub hardness: String,
    pub profile: String,
    pub notes: String,
    pub mixed_config: Option<MixedConfig>,
    /// Wheel diameter in mm, echoed from the profile
    pub wheel_size: u32,
    pub is_fallback: bool,
    /// 0 for fallback recommendations
    pub match_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}
