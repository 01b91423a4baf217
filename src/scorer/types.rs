use serde::{Deserialize, Serialize};

/// One matched pattern and the tai it added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub name: String,
    pub label: String,
    pub points: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Parsed inputs (malformed text already mapped to 0)
    pub base_score: i64,
    pub point_value: i64,
    pub repeat_count: i64,

    // Matched patterns, catalog order
    pub contributions: Vec<Contribution>,

    // Selected names the catalog does not know
    pub unknown: Vec<String>,

    pub total_score: i64,
    pub total_payout: i64,
}

impl ScoreDetails {
    pub fn pattern_points(&self) -> i64 {
        self.contributions
            .iter()
            .fold(0i64, |acc, c| acc.wrapping_add(c.points))
    }
}
