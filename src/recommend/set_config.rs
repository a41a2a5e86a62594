//! Set-configuration transform.
//!
//! Spreads a base recommendation over the four positions of a foot according to
//! the profile's `SetConfigMode`. Only `mixed_config` and `notes` are touched;
//! notes are appended to, never replaced.

use crate::hardness::{numeric_label, numeric_value};
use crate::profile::{HardnessNotation, SetConfigMode, SkaterProfile};

use super::types::{MixedConfig, Recommendation};

const FRONT_REAR_DESCRIPTION: &str = "Softer front for grip; harder rear for speed.";
const FRONT_REAR_NOTE: &str = "Mixed configuration: more grip in front, more speed at the rear.";
const CONTROL_NUMERIC_DESCRIPTION: &str =
    "Balanced configuration for maximum control and grip in every position.";
const CONTROL_STANDARD_DESCRIPTION: &str = "Balanced configuration for maximum control and grip.";
const CONTROL_NOTE: &str = "Configuration oriented to control and grip.";

/// Apply the profile's set configuration mode to `recommendation`.
pub fn apply_set_config(
    mut recommendation: Recommendation,
    profile: &SkaterProfile,
) -> Recommendation {
    let notation = profile.hardness_notation;

    match profile.set_configuration_mode {
        SetConfigMode::AutomaticPerRule => {}
        SetConfigMode::SingleHardness => {
            recommendation.mixed_config = None;
            let note = format!(
                "Simplified configuration: all wheels at hardness {}.",
                recommendation.hardness
            );
            append_note(&mut recommendation.notes, &note);
        }
        SetConfigMode::FrontGripRearSpeed => {
            let config = front_grip_rear_speed(&recommendation.hardness, notation);
            recommendation.mixed_config = Some(config);
            append_note(&mut recommendation.notes, FRONT_REAR_NOTE);
        }
        SetConfigMode::ControlAndGrip => {
            let config = control_and_grip(&recommendation.hardness, notation);
            recommendation.mixed_config = Some(config);
            append_note(&mut recommendation.notes, CONTROL_NOTE);
        }
    }

    recommendation
}

fn front_grip_rear_speed(base: &str, notation: HardnessNotation) -> MixedConfig {
    match notation {
        HardnessNotation::Numeric => {
            let value = i16::from(numeric_value(base));
            let front = numeric_label(value - 1);
            let rear = numeric_label(value + 1);
            MixedConfig::front_rear(&front, &rear, FRONT_REAR_DESCRIPTION)
        }
        HardnessNotation::Standard => {
            let (front, rear) = match base {
                "XXFirm" => ("XFirm", "XXFirm"),
                // Firm, XFirm and anything unmapped
                _ => ("Firm", "XFirm"),
            };
            MixedConfig::front_rear(front, rear, FRONT_REAR_DESCRIPTION)
        }
    }
}

fn control_and_grip(base: &str, notation: HardnessNotation) -> MixedConfig {
    match notation {
        HardnessNotation::Numeric => {
            let softer = numeric_label(i16::from(numeric_value(base)) - 1);
            MixedConfig::from_positions(
                [softer.as_str(), softer.as_str(), softer.as_str(), base],
                CONTROL_NUMERIC_DESCRIPTION,
            )
        }
        HardnessNotation::Standard => MixedConfig::from_positions(
            ["Firm", "Firm", "Firm", "XFirm"],
            CONTROL_STANDARD_DESCRIPTION,
        ),
    }
}

fn append_note(notes: &mut String, note: &str) {
    if !notes.is_empty() {
        notes.push(' ');
    }
    notes.push_str(note);
}
