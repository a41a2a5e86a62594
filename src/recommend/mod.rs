//! Wheel hardness recommendation engine.
//!
//! This module provides a TOML-driven rule engine that matches a skater
//! profile to the best-fitting wheel configuration rule.
//!
//! # Architecture
//!
//! - **Rules**: Loaded from TOML at startup (or embedded defaults), then held
//!   read-only behind the `RuleRepository` trait
//! - **Scoring**: Discipline gates a rule; every other criterion adds points
//! - **Selection**: Highest score wins, earliest rule wins ties
//! - **Fallback**: A fixed (notation, priority) table when nothing qualifies
//! - **Set config**: The chosen hardness is spread over positions 1-4
//!
//! # Example
//!
//! ```ignore
//! use wheelmate::recommend::{default_rules, RecommendationEngine, RuleSet};
//!
//! let engine = RecommendationEngine::new(RuleSet::new(default_rules()));
//! let recommendation = engine.recommend(&profile)?;
//!
//! println!("{} {} (score {})",
//!     recommendation.hardness, recommendation.profile, recommendation.match_score);
//! ```

mod engine;
mod fallback;
mod repository;
mod rules;
mod scorer;
mod set_config;
mod types;

pub use engine::RecommendationEngine;
pub use fallback::{fallback, fallback_hardness};
pub use repository::{RuleRepository, RuleSet};
pub use rules::{default_rules, load_rules};
pub use scorer::{score, MAX_SCORE, MIN_QUALIFYING_SCORE};
pub use set_config::apply_set_config;
pub use types::*;
