//! Rule-to-profile compatibility scoring.

use crate::profile::SkaterProfile;

use super::types::{MatchScore, Rule};

pub const DISCIPLINE_POINTS: u32 = 10;
pub const WEIGHT_POINTS: u32 = 5;
pub const AGE_POINTS: u32 = 5;
pub const EXPERIENCE_POINTS: u32 = 5;
pub const STYLE_POINTS: u32 = 5;
pub const SURFACE_POINTS: u32 = 5;
pub const TEMPERATURE_POINTS: u32 = 3;
pub const PRIORITY_POINTS: u32 = 5;

/// A rule must reach this to be selected; discipline alone gets there.
pub const MIN_QUALIFYING_SCORE: u32 = DISCIPLINE_POINTS;

pub const MAX_SCORE: u32 = DISCIPLINE_POINTS
    + WEIGHT_POINTS
    + AGE_POINTS
    + EXPERIENCE_POINTS
    + STYLE_POINTS
    + SURFACE_POINTS
    + TEMPERATURE_POINTS
    + PRIORITY_POINTS;

/// Score `rule` against `profile`.
///
/// Discipline is a hard gate. Every other criterion adds its points only when
/// fully satisfied; ranges are inclusive on both ends.
pub fn score(rule: &Rule, profile: &SkaterProfile) -> MatchScore {
    let c = &rule.conditions;

    if !c.discipline.contains(&profile.discipline) {
        return MatchScore::Disqualified;
    }

    let criteria = [
        (c.weight_range_kg.contains(profile.weight_kg), WEIGHT_POINTS),
        (c.age_range.contains(profile.age), AGE_POINTS),
        (c.experience.contains(&profile.experience_level), EXPERIENCE_POINTS),
        (c.style.contains(&profile.riding_style), STYLE_POINTS),
        (c.surface.contains(&profile.surface), SURFACE_POINTS),
        (c.temperature.contains(&profile.temperature), TEMPERATURE_POINTS),
        (c.priority.contains(&profile.priority), PRIORITY_POINTS),
    ];

    let bonus: u32 = criteria
        .iter()
        .filter(|(met, _)| *met)
        .map(|(_, points)| points)
        .sum();

    MatchScore::Qualified(DISCIPLINE_POINTS + bonus)
}
