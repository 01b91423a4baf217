pub mod engine;
pub mod types;

pub use self::engine::{compute_total_payout, compute_total_score};
pub use self::types::{Contribution, ScoreDetails};
use crate::catalog::Catalog;
use crate::state::SelectionState;

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub catalog: Catalog,
}

impl Scorer {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn total_score(&self, state: &SelectionState) -> i64 {
        engine::compute_total_score(state, &self.catalog)
    }

    pub fn total_payout(&self, state: &SelectionState) -> i64 {
        engine::compute_total_payout(state, &self.catalog)
    }

    /// Itemised scoring for reports and JSON output.
    pub fn score_details(&self, state: &SelectionState) -> ScoreDetails {
        engine::score_details(state, &self.catalog)
    }
}
