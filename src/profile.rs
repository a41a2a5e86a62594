//! Skater profile: the fully-populated input both pipelines work from.
//!
//! Wire labels match the values the form collaborator submits, so a profile
//! deserializes straight from the request JSON and rule files can name the same
//! values in their condition sets.

use serde::{Deserialize, Serialize};

use crate::error::WheelMateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Discipline {
    #[serde(rename = "speed")]
    Speed,
    #[serde(rename = "endurance")]
    Endurance,
    #[serde(rename = "skate cross")]
    SkateCross,
    #[serde(rename = "slides")]
    Slides,
    #[serde(rename = "freestyle-street")]
    FreestyleStreet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "intermediate")]
    Intermediate,
    #[serde(rename = "advanced")]
    Advanced,
    #[serde(rename = "high competition")]
    HighCompetition,
    #[serde(rename = "high performance")]
    HighPerformance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RidingStyle {
    #[serde(rename = "explosive (speed)")]
    Explosive,
    #[serde(rename = "endurance")]
    Endurance,
    #[serde(rename = "mixed")]
    Mixed,
    #[serde(rename = "technical")]
    Technical,
    #[serde(rename = "freestyle")]
    Freestyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    #[serde(rename = "track")]
    Track,
    #[serde(rename = "smooth asphalt")]
    SmoothAsphalt,
    #[serde(rename = "rough asphalt")]
    RoughAsphalt,
    #[serde(rename = "indoor")]
    Indoor,
    #[serde(rename = "street")]
    Street,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Temperature {
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    #[serde(rename = "cold")]
    Cold,
    #[serde(rename = "mild")]
    Mild,
    #[serde(rename = "hot")]
    Hot,
}

/// What the skater wants the set to favour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "more grip")]
    MoreGrip,
    #[serde(rename = "more speed")]
    MoreSpeed,
    #[serde(rename = "balance")]
    Balance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HardnessNotation {
    /// Durometer labels, 82A..90A
    Numeric,
    /// Firm / XFirm / XXFirm
    Standard,
}

/// How a single base recommendation is spread over the four positions of a foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetConfigMode {
    #[serde(rename = "automatic per rule")]
    AutomaticPerRule,
    #[serde(rename = "single hardness")]
    SingleHardness,
    #[serde(rename = "front grip rear speed")]
    FrontGripRearSpeed,
    #[serde(rename = "control and grip")]
    ControlAndGrip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterProfile {
    pub discipline: Discipline,
    pub weight_kg: f64,
    pub age: f64,
    pub experience_level: ExperienceLevel,
    pub riding_style: RidingStyle,
    pub surface: Surface,
    #[serde(default)]
    pub temperature: Temperature,
    pub priority: Priority,
    pub hardness_notation: HardnessNotation,
    pub wheel_diameter_mm: u32,
    pub set_configuration_mode: SetConfigMode,
}

impl SkaterProfile {
    /// Reject numeric fields the scorer cannot meaningfully compare.
    pub fn validate(&self) -> Result<(), WheelMateError> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(WheelMateError::InvalidProfile(format!(
                "weightKg must be positive, got {}",
                self.weight_kg
            )));
        }
        if !(self.age.is_finite() && self.age > 0.0) {
            return Err(WheelMateError::InvalidProfile(format!(
                "age must be positive, got {}",
                self.age
            )));
        }
        if self.wheel_diameter_mm == 0 {
            return Err(WheelMateError::InvalidProfile(
                "wheelDiameterMm must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// The slice of a profile the position allocator reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningProfile {
    pub discipline: Discipline,
    pub priority: Priority,
    pub riding_style: RidingStyle,
    pub surface: Surface,
    #[serde(default)]
    pub temperature: Temperature,
}

impl From<&SkaterProfile> for PositioningProfile {
    fn from(profile: &SkaterProfile) -> Self {
        Self {
            discipline: profile.discipline,
            priority: profile.priority,
            riding_style: profile.riding_style,
            surface: profile.surface,
            temperature: profile.temperature,
        }
    }
}
