//! Default recommendation used when no rule qualifies.

use crate::profile::{HardnessNotation, Priority, SkaterProfile};

use super::types::Recommendation;

pub const FALLBACK_PROFILE: &str = "Elliptical";
pub const FALLBACK_NOTES: &str = "General recommendation based on your preferences.";

/// Hardness picked from the (notation, priority) table.
pub fn fallback_hardness(notation: HardnessNotation, priority: Priority) -> &'static str {
    match (notation, priority) {
        (HardnessNotation::Numeric, Priority::MoreGrip) => "84A",
        (HardnessNotation::Numeric, Priority::MoreSpeed) => "87A",
        (HardnessNotation::Numeric, Priority::Balance) => "85A",
        (HardnessNotation::Standard, Priority::MoreGrip) => "Firm",
        (HardnessNotation::Standard, _) => "XFirm",
    }
}

/// Build the fallback recommendation. Never fails.
pub fn fallback(profile: &SkaterProfile) -> Recommendation {
    Recommendation {
        hardness: fallback_hardness(profile.hardness_notation, profile.priority).to_string(),
        profile: FALLBACK_PROFILE.to_string(),
        notes: FALLBACK_NOTES.to_string(),
        mixed_config: None,
        wheel_size: profile.wheel_diameter_mm,
        is_fallback: true,
        match_score: 0,
        rule_id: None,
    }
}
