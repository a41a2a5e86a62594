//! Positioning strategy: turn a profile into a front/speed bias pair.

use crate::profile::{Discipline, PositioningProfile, Priority, RidingStyle, Surface, Temperature};

use super::types::PositioningStrategy;

const NEUTRAL_BIAS: f64 = 0.5;
const HIGH_THRESHOLD: f64 = 0.6;
const LOW_THRESHOLD: f64 = 0.4;

/// Compute the bias pair for a profile.
///
/// Priority sets the starting point; discipline, style, surface and
/// temperature then nudge it. Both biases are clamped to [0, 1] and rounded to
/// hundredths.
pub fn positioning_strategy(profile: &PositioningProfile) -> PositioningStrategy {
    let (mut front, mut speed) = match profile.priority {
        Priority::MoreGrip => (0.7, 0.2),
        Priority::MoreSpeed => (0.3, 0.8),
        Priority::Balance => (NEUTRAL_BIAS, NEUTRAL_BIAS),
    };

    match profile.discipline {
        Discipline::Speed => {
            speed += 0.2;
            front -= 0.1;
        }
        Discipline::Endurance => {
            front += 0.1;
            speed -= 0.1;
        }
        Discipline::SkateCross | Discipline::Slides | Discipline::FreestyleStreet => {
            front += 0.2;
            speed -= 0.2;
        }
    }

    match profile.riding_style {
        RidingStyle::Explosive => speed += 0.1,
        RidingStyle::Technical | RidingStyle::Freestyle => front += 0.1,
        RidingStyle::Endurance | RidingStyle::Mixed => {}
    }

    match profile.surface {
        Surface::RoughAsphalt | Surface::Street => front += 0.15,
        Surface::Track => speed += 0.1,
        Surface::SmoothAsphalt | Surface::Indoor => {}
    }

    match profile.temperature {
        Temperature::Cold => front += 0.1,
        Temperature::Hot => speed += 0.1,
        Temperature::Mild | Temperature::Unspecified => {}
    }

    let front_bias = normalize(front);
    let speed_bias = normalize(speed);

    PositioningStrategy {
        front_bias,
        speed_bias,
        description: describe(front_bias, speed_bias),
    }
}

fn normalize(bias: f64) -> f64 {
    (bias.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

fn describe(front_bias: f64, speed_bias: f64) -> String {
    let mut parts = Vec::new();

    if front_bias > HIGH_THRESHOLD {
        parts.push("softer wheels in front for grip");
    } else if front_bias < LOW_THRESHOLD {
        parts.push("harder wheels in front for speed");
    }

    if speed_bias > HIGH_THRESHOLD {
        parts.push("harder wheels at the rear to keep speed");
    } else if speed_bias < LOW_THRESHOLD {
        parts.push("softer wheels at the rear for control");
    }

    if parts.is_empty() {
        parts.push("balanced distribution between grip and speed");
    }

    capitalize(&parts.join("; "))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
