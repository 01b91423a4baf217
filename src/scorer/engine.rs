use super::types::{Contribution, ScoreDetails};
use crate::catalog::Catalog;
use crate::numeric::parse_or_zero;
use crate::state::SelectionState;
use tracing::debug;

/// Base score plus the points of every selected catalog pattern.
///
/// Selected names missing from the catalog add nothing. No clamping is
/// applied, so a negative base score propagates.
pub fn compute_total_score(state: &SelectionState, catalog: &Catalog) -> i64 {
    let base = parse_or_zero(&state.base_score);
    let repeat = parse_or_zero(&state.repeat_count);

    catalog
        .iter()
        .filter(|p| state.is_selected(&p.name))
        .fold(base, |total, p| total.wrapping_add(p.value.points(repeat)))
}

pub fn compute_total_payout(state: &SelectionState, catalog: &Catalog) -> i64 {
    compute_total_score(state, catalog).wrapping_mul(parse_or_zero(&state.point_value))
}

/// Same computation as [`compute_total_score`], itemised for reports.
pub fn score_details(state: &SelectionState, catalog: &Catalog) -> ScoreDetails {
    let base_score = parse_or_zero(&state.base_score);
    let point_value = parse_or_zero(&state.point_value);
    let repeat_count = parse_or_zero(&state.repeat_count);

    let contributions: Vec<Contribution> = catalog
        .iter()
        .filter(|p| state.is_selected(&p.name))
        .map(|p| Contribution {
            name: p.name.clone(),
            label: p.label(),
            points: p.value.points(repeat_count),
        })
        .collect();

    let unknown: Vec<String> = state
        .selected
        .iter()
        .filter(|name| !catalog.contains(name))
        .cloned()
        .collect();

    let mut details = ScoreDetails {
        base_score,
        point_value,
        repeat_count,
        contributions,
        unknown,
        ..Default::default()
    };
    details.total_score = base_score.wrapping_add(details.pattern_points());
    details.total_payout = details.total_score.wrapping_mul(point_value);

    debug!(
        "Scored {} pattern(s): base {} + {} = {} tai, x{} = {}",
        details.contributions.len(),
        base_score,
        details.pattern_points(),
        details.total_score,
        point_value,
        details.total_payout
    );

    details
}
