//! Read-only rule repository.
//!
//! The engine only sees rules through [`RuleRepository`], so tests can hand it a
//! synthetic set and hosts can share one loaded set across threads.

use tracing::debug;

use crate::profile::HardnessNotation;

use super::types::{Rule, RulesConfig};

/// Rules partitioned by notation and by whether they carry a mixed config.
///
/// Slices are returned in stored order; the selector relies on that order for
/// tie-breaking.
pub trait RuleRepository: Send + Sync {
    /// Rules with a `mixed_config`, for the given notation.
    fn mixed_capable(&self, notation: HardnessNotation) -> &[Rule];

    /// Rules without a `mixed_config`, for the given notation.
    fn single_only(&self, notation: HardnessNotation) -> &[Rule];
}

#[derive(Debug, Clone, Default)]
struct Partition {
    mixed_capable: Vec<Rule>,
    single_only: Vec<Rule>,
}

/// The stock repository, built once from a [`RulesConfig`].
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    numeric: Partition,
    standard: Partition,
}

impl RuleSet {
    /// Partition a loaded rule file.
    ///
    /// The `mixed` collection is walked before `single`, and each rule lands in
    /// the mixed-capable or single-only bucket by the presence of its
    /// `mixed_config`, not by which collection it came from.
    pub fn new(config: RulesConfig) -> Self {
        let mut set = Self::default();
        for rule in config.mixed.into_iter().chain(config.single) {
            let partition = match rule.notation_mode {
                HardnessNotation::Numeric => &mut set.numeric,
                HardnessNotation::Standard => &mut set.standard,
            };
            if rule.is_mixed_capable() {
                partition.mixed_capable.push(rule);
            } else {
                partition.single_only.push(rule);
            }
        }
        debug!(
            "Rule set: numeric {}+{}, standard {}+{} (mixed+single)",
            set.numeric.mixed_capable.len(),
            set.numeric.single_only.len(),
            set.standard.mixed_capable.len(),
            set.standard.single_only.len()
        );
        set
    }

    /// Total number of rules across all partitions.
    pub fn len(&self) -> usize {
        [&self.numeric, &self.standard]
            .iter()
            .map(|p| p.mixed_capable.len() + p.single_only.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn partition(&self, notation: HardnessNotation) -> &Partition {
        match notation {
            HardnessNotation::Numeric => &self.numeric,
            HardnessNotation::Standard => &self.standard,
        }
    }
}

impl From<RulesConfig> for RuleSet {
    fn from(config: RulesConfig) -> Self {
        Self::new(config)
    }
}

impl RuleRepository for RuleSet {
    fn mixed_capable(&self, notation: HardnessNotation) -> &[Rule] {
        &self.partition(notation).mixed_capable
    }

    fn single_only(&self, notation: HardnessNotation) -> &[Rule] {
        &self.partition(notation).single_only
    }
}
