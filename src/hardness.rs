//! Hardness ordinal table.
//!
//! Wheels are labelled in one of two notations: numeric durometer ("82A".."90A")
//! or the qualitative Firm/XFirm/XXFirm scale. Both collapse onto one rank order
//! so a mixed inventory can be sorted from softest to hardest.

use std::cmp::Ordering;

/// Rank given to any label missing from the table (middle of the scale).
pub const NEUTRAL_RANK: u8 = 5;

/// Lowest and highest durometer values the numeric notation produces.
pub const MIN_NUMERIC: u8 = 82;
pub const MAX_NUMERIC: u8 = 90;

const ORDINALS: &[(&str, u8)] = &[
    ("Firm", 1),
    ("82A", 1),
    ("XFirm", 2),
    ("83A", 2),
    ("XXFirm", 3),
    ("84A", 3),
    ("85A", 4),
    ("86A", 5),
    ("87A", 6),
    ("88A", 7),
    ("89A", 8),
    ("90A", 9),
];

/// Rank of a hardness label. Unknown labels sort to the middle instead of failing.
pub fn rank(label: &str) -> u8 {
    ORDINALS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, rank)| *rank)
        .unwrap_or(NEUTRAL_RANK)
}

/// Compare two labels by rank (softest first).
pub fn compare(a: &str, b: &str) -> Ordering {
    rank(a).cmp(&rank(b))
}

/// Stable ascending sort; equal ranks keep their input order.
pub fn sort_softest_first(labels: &mut [String]) {
    labels.sort_by(|a, b| compare(a, b));
}

/// Durometer number of a label.
///
/// "85A" parses directly. Anything else is placed on the numeric scale through
/// its rank, so "Firm" reads as 82 and an unknown label as 86.
pub fn numeric_value(label: &str) -> u8 {
    label
        .strip_suffix('A')
        .and_then(|digits| digits.parse::<u8>().ok())
        .unwrap_or_else(|| MIN_NUMERIC - 1 + rank(label))
}

/// Format a durometer number as a label, clamped to the 82A..90A scale.
pub fn numeric_label(value: i16) -> String {
    let clamped = value.clamp(MIN_NUMERIC as i16, MAX_NUMERIC as i16);
    format!("{}A", clamped)
}
