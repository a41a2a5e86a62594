//! Wheel position allocator.
//!
//! Sorts an 8-wheel inventory softest to hardest and deals it across two feet.
//! The index patterns are fixed literals over the sorted sequence.

use tracing::{debug, warn};

use crate::error::WheelMateError;
use crate::hardness::sort_softest_first;
use crate::profile::PositioningProfile;

use super::strategy::positioning_strategy;
use super::types::*;

/// Grip-forward deal: front positions draw from the softer half.
const GRIP_FORWARD_RIGHT: [usize; 4] = [0, 2, 5, 7];
const GRIP_FORWARD_LEFT: [usize; 4] = [1, 3, 4, 6];

/// Speed-forward deal: front positions draw from the harder end.
const SPEED_FORWARD_RIGHT: [usize; 4] = [6, 7, 1, 0];
const SPEED_FORWARD_LEFT: [usize; 4] = [5, 4, 2, 3];

pub const UNIFORM_STRATEGY: &str = "All wheels are identical, uniform distribution";

/// Assign the inventory to right/left foot positions 1-4.
///
/// # Errors
/// `WheelMateError::Inventory` when the quantities do not add up to exactly 8.
pub fn allocate(
    inventory: &WheelInventory,
    profile: &PositioningProfile,
) -> Result<PositionAssignment, WheelMateError> {
    let total = inventory.total();
    if total != WHEELS_PER_SET {
        warn!("Rejected inventory with {} wheels", total);
        return Err(WheelMateError::Inventory(format!(
            "Exactly {} wheels are required. Total: {}",
            WHEELS_PER_SET, total
        )));
    }

    let mut sorted = inventory.expand();
    sort_softest_first(&mut sorted);

    if sorted.iter().all(|w| *w == sorted[0]) {
        let uniform = || std::array::from_fn(|_| sorted[0].clone());
        return Ok(PositionAssignment {
            right_foot: uniform(),
            left_foot: uniform(),
            strategy: UNIFORM_STRATEGY.to_string(),
            user_context: None,
        });
    }

    let strategy = positioning_strategy(profile);
    let (right, left) = if strategy.front_bias >= 0.5 {
        (GRIP_FORWARD_RIGHT, GRIP_FORWARD_LEFT)
    } else {
        (SPEED_FORWARD_RIGHT, SPEED_FORWARD_LEFT)
    };
    debug!(
        "Allocating with front bias {:.2}, speed bias {:.2}",
        strategy.front_bias, strategy.speed_bias
    );

    Ok(PositionAssignment {
        right_foot: pick(&sorted, right),
        left_foot: pick(&sorted, left),
        strategy: strategy.description,
        user_context: Some(UserContext {
            discipline: profile.discipline,
            priority: profile.priority,
            style: profile.riding_style,
        }),
    })
}

fn pick(sorted: &[String], indices: [usize; 4]) -> [String; 4] {
    indices.map(|i| sorted[i].clone())
}
