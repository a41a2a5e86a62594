//! JSON command boundary consumed by the form collaborator.

pub mod position;
pub mod recommend;

pub use position::{calculate_wheel_position, position_wheels, PositionRequest, PositionResponse};
pub use recommend::{
    get_wheel_recommendation, recommend_profile, RecommendationOutput, RecommendationResponse,
};
