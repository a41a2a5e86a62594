use serde::{Deserialize, Serialize};

use crate::profile::{Discipline, Priority, RidingStyle};

/// Number of wheels in a full set (two feet, four positions each).
pub const WHEELS_PER_SET: u64 = 8;

/// One line of the inventory: `quantity` wheels of the same hardness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelCount {
    pub hardness: String,
    pub quantity: u32,
}

impl WheelCount {
    pub fn new(hardness: &str, quantity: u32) -> Self {
        Self {
            hardness: hardness.to_string(),
            quantity,
        }
    }
}

/// The wheels a skater owns, grouped by hardness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WheelInventory {
    pub wheels: Vec<WheelCount>,
}

impl WheelInventory {
    pub fn new(wheels: Vec<WheelCount>) -> Self {
        Self { wheels }
    }

    pub fn total(&self) -> u64 {
        self.wheels.iter().map(|w| u64::from(w.quantity)).sum()
    }

    /// One label per physical wheel, in inventory order.
    pub fn expand(&self) -> Vec<String> {
        self.wheels
            .iter()
            .flat_map(|w| std::iter::repeat(w.hardness.clone()).take(w.quantity as usize))
            .collect()
    }
}

impl FromIterator<WheelCount> for WheelInventory {
    fn from_iter<I: IntoIterator<Item = WheelCount>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Bias pair derived from the profile.
///
/// `front_bias` above 0.5 favours soft wheels in front; `speed_bias` above 0.5
/// favours hard wheels at the rear.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositioningStrategy {
    pub front_bias: f64,
    pub speed_bias: f64,
    pub description: String,
}

/// Profile fields echoed back for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserContext {
    pub discipline: Discipline,
    pub priority: Priority,
    pub style: RidingStyle,
}

/// Hardness label per position (front to back) for each foot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAssignment {
    pub right_foot: [String; 4],
    pub left_foot: [String; 4],
    pub strategy: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context: Option<UserContext>,
}

impl PositionAssignment {
    /// Every assigned wheel, right foot first.
    pub fn wheels(&self) -> impl Iterator<Item = &str> {
        self.right_foot
            .iter()
            .chain(self.left_foot.iter())
            .map(String::as_str)
    }
}
