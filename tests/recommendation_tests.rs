use std::path::PathBuf;

use wheelmate::commands::{get_wheel_recommendation, recommend_profile, RecommendationResponse};
use wheelmate::profile::*;
use wheelmate::recommend::{default_rules, load_rules, MAX_SCORE};
use wheelmate::{RecommendationEngine, RuleSet};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_profile(name: &str) -> SkaterProfile {
    let raw = std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture");
    serde_json::from_str(&raw).expect("Failed to parse profile fixture")
}

fn scenario_engine() -> RecommendationEngine {
    let rules = load_rules(&fixture_path("scenario_rules.toml")).expect("Failed to load rules");
    RecommendationEngine::new(RuleSet::new(rules))
}

fn ok(response: RecommendationResponse) -> wheelmate::commands::RecommendationOutput {
    match response {
        RecommendationResponse::Ok(output) => output,
        RecommendationResponse::Err(failure) => panic!("Unexpected error: {}", failure.error),
    }
}

#[test]
fn test_front_grip_rear_speed_scenario() {
    let profile = load_profile("speed_profile.json");
    let output = ok(recommend_profile(&scenario_engine(), &profile));

    assert!(!output.is_fallback);
    assert_eq!(output.rule_id.as_deref(), Some("mixed-speed-85"));
    assert_eq!(output.match_score, MAX_SCORE);

    let rec = output.recommendation;
    assert_eq!(rec.hardness, "85A", "Transform must not change base hardness");
    let config = rec.mixed_config.expect("Mixed config expected");
    let positions: Vec<_> = (1..=4).map(|p| config.position(p).unwrap()).collect();
    assert_eq!(positions, vec!["84A", "84A", "86A", "86A"]);
    assert!(rec.notes.starts_with("Scenario base. "));
}

#[test]
fn test_tie_goes_to_mixed_capable_rule() {
    // Both speed rules score 43; the mixed-capable one is scanned first.
    let mut profile = load_profile("speed_profile.json");
    profile.set_configuration_mode = SetConfigMode::ControlAndGrip;
    let output = ok(recommend_profile(&scenario_engine(), &profile));
    assert_eq!(output.rule_id.as_deref(), Some("mixed-speed-85"));
}

#[test]
fn test_single_hardness_mode_only_sees_single_rules() {
    let mut profile = load_profile("speed_profile.json");
    profile.set_configuration_mode = SetConfigMode::SingleHardness;
    let output = ok(recommend_profile(&scenario_engine(), &profile));

    assert_eq!(output.rule_id.as_deref(), Some("single-speed-85-twin"));
    assert_eq!(output.recommendation.hardness, "89A");
    assert!(output.recommendation.mixed_config.is_none());
    assert!(output
        .recommendation
        .notes
        .ends_with("Simplified configuration: all wheels at hardness 89A."));
}

#[test]
fn test_standard_control_and_grip_scenario() {
    let profile = load_profile("street_profile.json");
    assert_eq!(profile.temperature, Temperature::Unspecified);

    let output = ok(recommend_profile(&scenario_engine(), &profile));
    assert_eq!(output.rule_id.as_deref(), Some("single-standard-street"));
    assert_eq!(output.match_score, MAX_SCORE);

    let config = output.recommendation.mixed_config.expect("Mixed config expected");
    let positions: Vec<_> = (1..=4).map(|p| config.position(p).unwrap()).collect();
    assert_eq!(positions, vec!["Firm", "Firm", "Firm", "XFirm"]);
    assert_eq!(output.recommendation.hardness, "XFirm");
}

#[test]
fn test_fallback_when_no_rule_matches() {
    let mut profile = load_profile("street_profile.json");
    profile.discipline = Discipline::Endurance;
    profile.set_configuration_mode = SetConfigMode::AutomaticPerRule;

    let output = ok(recommend_profile(&scenario_engine(), &profile));
    assert!(output.is_fallback);
    assert_eq!(output.match_score, 0);
    assert!(output.rule_id.is_none());
    assert_eq!(output.recommendation.hardness, "Firm");
    assert_eq!(output.recommendation.profile, "Elliptical");
    assert!(output.recommendation.mixed_config.is_none());
    assert_eq!(output.recommendation.wheel_size, 80);
}

#[test]
fn test_fallback_guarantee_across_profiles() {
    let engine = RecommendationEngine::new(RuleSet::default());
    let base = load_profile("speed_profile.json");

    for notation in [HardnessNotation::Numeric, HardnessNotation::Standard] {
        for priority in [Priority::MoreGrip, Priority::MoreSpeed, Priority::Balance] {
            let mut profile = base.clone();
            profile.hardness_notation = notation;
            profile.priority = priority;
            let output = ok(recommend_profile(&engine, &profile));
            assert!(output.is_fallback, "{:?}/{:?}", notation, priority);
            assert_eq!(output.match_score, 0);
        }
    }
}

#[test]
fn test_default_rules_serve_every_discipline() {
    let engine = RecommendationEngine::new(RuleSet::new(default_rules()));
    let base = load_profile("speed_profile.json");

    for discipline in [
        Discipline::Speed,
        Discipline::Endurance,
        Discipline::SkateCross,
        Discipline::Slides,
        Discipline::FreestyleStreet,
    ] {
        for notation in [HardnessNotation::Numeric, HardnessNotation::Standard] {
            let mut profile = base.clone();
            profile.discipline = discipline;
            profile.hardness_notation = notation;
            profile.set_configuration_mode = SetConfigMode::FrontGripRearSpeed;

            let output = ok(recommend_profile(&engine, &profile));
            assert!(
                !output.is_fallback,
                "{:?}/{:?} should match a default rule",
                discipline,
                notation
            );
            assert!(output.recommendation.mixed_config.is_some());
        }
    }
}

#[test]
fn test_json_boundary_is_deterministic() {
    let raw = std::fs::read_to_string(fixture_path("speed_profile.json")).unwrap();
    let request: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let engine = scenario_engine();
    let first = serde_json::to_value(get_wheel_recommendation(&engine, &request)).unwrap();
    let second = serde_json::to_value(get_wheel_recommendation(&engine, &request)).unwrap();
    assert_eq!(first, second, "Identical input must give identical output");
    assert_eq!(first["ruleId"], "mixed-speed-85");
    assert_eq!(first["recommendation"]["mixedConfig"]["positions"]["3"], "86A");
}

#[test]
fn test_json_boundary_missing_field() {
    let mut request: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(fixture_path("speed_profile.json")).unwrap())
            .unwrap();
    request.as_object_mut().unwrap().remove("wheelDiameterMm");

    let response = serde_json::to_value(get_wheel_recommendation(&scenario_engine(), &request))
        .unwrap();
    assert!(response["recommendation"].is_null());
    assert!(response["error"].as_str().unwrap().contains("wheelDiameterMm"));
}
