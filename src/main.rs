//! `wheelmate` command-line entry point.
//!
//! Reads one JSON request from a file argument (or stdin) and prints the JSON
//! response:
//!
//! ```text
//! wheelmate recommend profile.json
//! wheelmate position < wheels.json
//! ```

use anyhow::{bail, Context, Result};
use std::io::Read;
use tracing::debug;

use wheelmate::commands::{calculate_wheel_position, get_wheel_recommendation};
use wheelmate::{init_logging, EngineConfig, RecommendationEngine};

const USAGE: &str = "usage: wheelmate <recommend|position> [request.json]";

fn read_request(path: Option<&str>) -> Result<serde_json::Value> {
    let raw = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("request is not valid JSON")
}

fn main() -> Result<()> {
    let config = EngineConfig::load()?;
    init_logging(&config.log_filter);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);
    let input = args.get(1).map(String::as_str);

    let response = match command {
        Some("recommend") => {
            let engine = RecommendationEngine::new(config.rule_set()?);
            debug!("Engine loaded {} rules", engine.rules().len());
            serde_json::to_value(get_wheel_recommendation(&engine, &read_request(input)?))?
        }
        Some("position") => {
            serde_json::to_value(calculate_wheel_position(&read_request(input)?))?
        }
        _ => bail!(USAGE),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
