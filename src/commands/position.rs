//! Position command: wheel inventory + profile subset in, per-foot layout out.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::position::{allocate, PositionAssignment, WheelInventory};
use crate::profile::PositioningProfile;

/// Request payload for wheel positioning.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRequest {
    /// Wheels owned, grouped by hardness (must total 8)
    pub wheels: WheelInventory,
    /// Profile fields that drive the positioning strategy
    pub user_data: PositioningProfile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PositionResponse {
    Ok(PositionAssignment),
    Err { error: String },
}

impl PositionResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Err { .. })
    }
}

/// Compute wheel positions for a raw request.
pub fn calculate_wheel_position(request: &serde_json::Value) -> PositionResponse {
    match PositionRequest::deserialize(request) {
        Ok(request) => position_wheels(&request),
        Err(e) => {
            warn!("Rejected malformed position request: {}", e);
            PositionResponse::Err {
                error: format!("Invalid wheel position request ({})", e),
            }
        }
    }
}

/// Compute wheel positions for an already-typed request.
pub fn position_wheels(request: &PositionRequest) -> PositionResponse {
    info!(
        "Position request: {} inventory lines, {:?}/{:?}",
        request.wheels.wheels.len(),
        request.user_data.discipline,
        request.user_data.priority
    );

    match allocate(&request.wheels, &request.user_data) {
        Ok(assignment) => {
            info!("Positioned wheels: {}", assignment.strategy);
            PositionResponse::Ok(assignment)
        }
        Err(e) => PositionResponse::Err { error: e.into() },
    }
}
