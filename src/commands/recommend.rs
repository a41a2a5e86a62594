//! Recommendation command: profile JSON in, recommendation JSON out.
//!
//! Precondition failures never escape as errors; they come back as
//! `{ "error": ..., "recommendation": null }` for the form to display.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::profile::SkaterProfile;
use crate::recommend::{Recommendation, RecommendationEngine, RuleRepository};

/// Successful recommendation payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationOutput {
    pub recommendation: Recommendation,
    pub match_score: u32,
    pub is_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
}

/// Structured precondition failure. `recommendation` is always null.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationFailure {
    pub error: String,
    pub recommendation: Option<Recommendation>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecommendationResponse {
    Ok(RecommendationOutput),
    Err(RecommendationFailure),
}

impl RecommendationResponse {
    fn failure(error: String) -> Self {
        Self::Err(RecommendationFailure {
            error,
            recommendation: None,
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Err(_))
    }
}

/// Recommend a wheel configuration for a raw profile request.
///
/// # Arguments
/// * `engine` - Engine over the loaded rule repository
/// * `request` - Profile object as submitted by the form
pub fn get_wheel_recommendation<R: RuleRepository>(
    engine: &RecommendationEngine<R>,
    request: &serde_json::Value,
) -> RecommendationResponse {
    let profile = match SkaterProfile::deserialize(request) {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Rejected incomplete profile: {}", e);
            return RecommendationResponse::failure(format!(
                "Please fill in all required fields ({})",
                e
            ));
        }
    };
    recommend_profile(engine, &profile)
}

/// Recommend a wheel configuration for an already-typed profile.
pub fn recommend_profile<R: RuleRepository>(
    engine: &RecommendationEngine<R>,
    profile: &SkaterProfile,
) -> RecommendationResponse {
    info!(
        "Recommendation request: {:?}, {:?} notation, {:?}",
        profile.discipline, profile.hardness_notation, profile.set_configuration_mode
    );

    match engine.recommend(profile) {
        Ok(recommendation) => RecommendationResponse::Ok(RecommendationOutput {
            match_score: recommendation.match_score,
            is_fallback: recommendation.is_fallback,
            rule_id: recommendation.rule_id.clone(),
            recommendation,
        }),
        Err(e) => {
            warn!("Recommendation rejected: {}", e);
            RecommendationResponse::failure(e.into())
        }
    }
}
