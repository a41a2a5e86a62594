//! Rule selection and the recommendation pipeline.
//!
//! `RecommendationEngine` picks the best-scoring rule for a profile, falls back
//! to a default when nothing qualifies, and runs the result through the
//! set-configuration transform.

use tracing::{debug, info};

use crate::error::WheelMateError;
use crate::profile::{SetConfigMode, SkaterProfile};

use super::fallback::fallback;
use super::repository::{RuleRepository, RuleSet};
use super::scorer::{score, MIN_QUALIFYING_SCORE};
use super::set_config::apply_set_config;
use super::types::*;

/// The recommendation engine over a read-only rule repository.
pub struct RecommendationEngine<R = RuleSet> {
    rules: R,
}

impl<R: RuleRepository> RecommendationEngine<R> {
    /// Create a new engine over the given repository.
    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Rules eligible for this profile, in selection order.
    ///
    /// Mixed-capable rules always come before single-only rules.
    pub fn candidates<'a>(&'a self, profile: &SkaterProfile) -> impl Iterator<Item = &'a Rule> {
        let notation = profile.hardness_notation;
        let mixed = self.rules.mixed_capable(notation);
        let single = self.rules.single_only(notation);

        let none: &[Rule] = &[];

        let (mixed, single) = match profile.set_configuration_mode {
            SetConfigMode::AutomaticPerRule => (mixed, none),
            SetConfigMode::SingleHardness => (none, single),
            SetConfigMode::FrontGripRearSpeed | SetConfigMode::ControlAndGrip => (mixed, single),
        };

        mixed.iter().chain(single.iter())
    }

    /// Pick the best rule for `profile`, or `None` when no candidate qualifies.
    ///
    /// A rule replaces the current best only with a strictly higher score, so
    /// the earliest candidate wins ties. Disqualified rules are skipped.
    pub fn select(&self, profile: &SkaterProfile) -> Option<RuleMatch<'_>> {
        self.candidates(profile)
            .fold(None::<RuleMatch>, |best, rule| match (score(rule, profile), best) {
                (MatchScore::Qualified(s), Some(b)) if s <= b.score => Some(b),
                (MatchScore::Qualified(s), _) => Some(RuleMatch { rule, score: s }),
                (MatchScore::Disqualified, best) => best,
            })
            .filter(|m| m.score >= MIN_QUALIFYING_SCORE)
    }

    /// Full recommendation for a profile.
    ///
    /// # Errors
    /// `WheelMateError::InvalidProfile` if a numeric field is not positive.
    /// Finding no matching rule is not an error; the fallback is returned.
    pub fn recommend(&self, profile: &SkaterProfile) -> Result<Recommendation, WheelMateError> {
        profile.validate()?;

        let base = match self.select(profile) {
            Some(RuleMatch { rule, score }) => {
                info!("Selected rule {} with score {}", rule.id, score);
                from_rule(rule, score, profile)
            }
            None => {
                info!(
                    "No rule matched {:?}/{:?}, using fallback",
                    profile.discipline, profile.hardness_notation
                );
                fallback(profile)
            }
        };

        let recommendation = apply_set_config(base, profile);
        debug!(
            "Recommendation {} ({:?}), mixed: {}",
            recommendation.hardness,
            profile.set_configuration_mode,
            recommendation.mixed_config.is_some()
        );
        Ok(recommendation)
    }
}

fn from_rule(rule: &Rule, score: u32, profile: &SkaterProfile) -> Recommendation {
    let rec = &rule.recommendation;
    Recommendation {
        hardness: rec.hardness.clone(),
        profile: rec.profile.clone(),
        notes: rec.notes.clone(),
        mixed_config: rec.mixed_config.clone(),
        wheel_size: profile.wheel_diameter_mm,
        is_fallback: false,
        match_score: score,
        rule_id: Some(rule.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::*;
    use crate::recommend::default_rules;
    use crate::recommend::scorer::tests::{matching_rule, profile};
    use crate::recommend::scorer::MAX_SCORE;

    fn mixed(rule: Rule) -> Rule {
        let mut rule = rule;
        rule.recommendation.mixed_config = Some(MixedConfig::from_positions(
            ["85A", "86A", "86A", "87A"],
            "rule mix",
        ));
        rule
    }

    fn engine(mixed_rules: Vec<Rule>, single_rules: Vec<Rule>) -> RecommendationEngine {
        RecommendationEngine::new(RuleSet::new(RulesConfig {
            mixed: mixed_rules,
            single: single_rules,
        }))
    }

    fn with_mode(mode: SetConfigMode) -> SkaterProfile {
        let mut p = profile();
        p.set_configuration_mode = mode;
        p
    }

    #[test]
    fn test_earlier_rule_wins_tie() {
        let engine = engine(vec![], vec![matching_rule("first"), matching_rule("second")]);
        let best = engine
            .select(&with_mode(SetConfigMode::SingleHardness))
            .unwrap();
        assert_eq!(best.rule.id, "first");
        assert_eq!(best.score, MAX_SCORE);
    }

    #[test]
    fn test_mixed_capable_before_single_on_tie() {
        let engine = engine(
            vec![mixed(matching_rule("mixed"))],
            vec![matching_rule("single")],
        );
        let best = engine
            .select(&with_mode(SetConfigMode::FrontGripRearSpeed))
            .unwrap();
        assert_eq!(best.rule.id, "mixed");
    }

    #[test]
    fn test_higher_later_score_wins() {
        let mut weak = matching_rule("weak");
        weak.conditions.surface.clear();
        let engine = engine(vec![], vec![weak, matching_rule("strong")]);
        let best = engine
            .select(&with_mode(SetConfigMode::ControlAndGrip))
            .unwrap();
        assert_eq!(best.rule.id, "strong");
    }

    #[test]
    fn test_mode_filters_candidates() {
        let engine = engine(
            vec![mixed(matching_rule("mixed"))],
            vec![matching_rule("single")],
        );

        let auto: Vec<&str> = engine
            .candidates(&with_mode(SetConfigMode::AutomaticPerRule))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(auto, vec!["mixed"]);

        let single: Vec<&str> = engine
            .candidates(&with_mode(SetConfigMode::SingleHardness))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(single, vec!["single"]);

        let any: Vec<&str> = engine
            .candidates(&with_mode(SetConfigMode::ControlAndGrip))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(any, vec!["mixed", "single"]);
    }

    #[test]
    fn test_notation_filters_candidates() {
        let mut standard = matching_rule("standard");
        standard.notation_mode = HardnessNotation::Standard;
        let engine = engine(vec![], vec![standard, matching_rule("numeric")]);

        let best = engine
            .select(&with_mode(SetConfigMode::SingleHardness))
            .unwrap();
        assert_eq!(best.rule.id, "numeric");
    }

    #[test]
    fn test_disqualified_rules_never_selected() {
        let mut other = matching_rule("other");
        other.conditions.discipline = vec![Discipline::Slides];
        let engine = engine(vec![], vec![other]);
        assert!(engine
            .select(&with_mode(SetConfigMode::SingleHardness))
            .is_none());
    }

    #[test]
    fn test_no_match_falls_back() {
        let engine = engine(vec![], vec![]);
        let mut p = with_mode(SetConfigMode::SingleHardness);
        p.priority = Priority::MoreGrip;

        let rec = engine.recommend(&p).unwrap();
        assert!(rec.is_fallback);
        assert_eq!(rec.match_score, 0);
        assert_eq!(rec.hardness, "84A");
        assert!(rec.rule_id.is_none());
        assert!(rec.notes.contains("all wheels at hardness 84A"));
    }

    #[test]
    fn test_automatic_mode_without_mixed_rules_falls_back() {
        let engine = engine(vec![], vec![matching_rule("single")]);
        let rec = engine
            .recommend(&with_mode(SetConfigMode::AutomaticPerRule))
            .unwrap();
        assert!(rec.is_fallback);
        assert!(rec.mixed_config.is_none());
    }

    #[test]
    fn test_recommend_from_rule() {
        let engine = engine(vec![mixed(matching_rule("mixed"))], vec![]);
        let rec = engine
            .recommend(&with_mode(SetConfigMode::AutomaticPerRule))
            .unwrap();
        assert!(!rec.is_fallback);
        assert_eq!(rec.rule_id.as_deref(), Some("mixed"));
        assert_eq!(rec.match_score, MAX_SCORE);
        assert_eq!(rec.wheel_size, 110);
        let config = rec.mixed_config.unwrap();
        assert_eq!(config.description, "rule mix");
    }

    #[test]
    fn test_recommend_rejects_invalid_profile() {
        let engine = engine(vec![], vec![]);
        let mut p = profile();
        p.wheel_diameter_mm = 0;
        assert!(matches!(
            engine.recommend(&p),
            Err(WheelMateError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_engine_exposes_its_repository() {
        let config = default_rules();
        let total = config.mixed.len() + config.single.len();
        let engine = RecommendationEngine::new(RuleSet::from(config));
        assert_eq!(engine.rules().len(), total);
        assert!(!engine
            .rules()
            .mixed_capable(HardnessNotation::Numeric)
            .is_empty());
    }

    #[test]
    fn test_select_is_deterministic_on_default_rules() {
        let engine = RecommendationEngine::new(RuleSet::new(default_rules()));
        let p = with_mode(SetConfigMode::FrontGripRearSpeed);
        let first = engine.select(&p).map(|m| (m.rule.id.clone(), m.score));
        assert!(first.is_some());
        for _ in 0..5 {
            let again = engine.select(&p).map(|m| (m.rule.id.clone(), m.score));
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_speed_profile_front_rear_scenario() {
        let mut base = matching_rule("base85");
        base.recommendation.hardness = "85A".to_string();
        let engine = engine(vec![], vec![base]);

        let mut p = with_mode(SetConfigMode::FrontGripRearSpeed);
        p.priority = Priority::MoreSpeed;
        p.discipline = Discipline::Speed;

        let rec = engine.recommend(&p).unwrap();
        let config = rec.mixed_config.unwrap();
        assert_eq!(config.position(1), Some("84A"));
        assert_eq!(config.position(2), Some("84A"));
        assert_eq!(config.position(3), Some("86A"));
        assert_eq!(config.position(4), Some("86A"));
        assert_eq!(rec.hardness, "85A");
    }
}
