pub mod commands;
pub mod config;
mod error;
pub mod hardness;
pub mod position;
pub mod profile;
pub mod recommend;

pub use config::EngineConfig;
pub use error::WheelMateError;
pub use position::{allocate, PositionAssignment, WheelCount, WheelInventory};
pub use profile::SkaterProfile;
pub use recommend::{Recommendation, RecommendationEngine, RuleRepository, RuleSet};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used. Safe to call
/// more than once; later calls are ignored.
pub fn init_logging(default_filter: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}
