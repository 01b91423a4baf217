use rstest::rstest;
use taiscore::catalog::{Catalog, REPEAT_WIN};
use taiscore::scorer::{compute_total_payout, compute_total_score, Scorer};
use taiscore::state::SelectionState;

fn state_with(hands: &[&str], base: &str, point: &str, repeat: &str) -> SelectionState {
    hands
        .iter()
        .fold(SelectionState::default(), |s, h| s.toggle_selection(h))
        .with_base_score(base)
        .with_point_value(point)
        .with_repeat_count(repeat)
}

// --- SCENARIOS ---
#[rstest]
#[case(&[], "3", "10", "0", 3, 30)] // defaults
#[case(&["自摸", "平胡"], "3", "10", "0", 6, 60)]
#[case(&[REPEAT_WIN], "3", "10", "2", 8, 80)]
#[case(&["天胡"], "5", "20", "0", 29, 580)]
#[case(&[], "", "10", "0", 0, 0)] // empty base
fn test_scenarios(
    #[case] hands: &[&str],
    #[case] base: &str,
    #[case] point: &str,
    #[case] repeat: &str,
    #[case] score: i64,
    #[case] payout: i64,
) {
    let catalog = Catalog::standard();
    let state = state_with(hands, base, point, repeat);
    assert_eq!(compute_total_score(&state, &catalog), score);
    assert_eq!(compute_total_payout(&state, &catalog), payout);
}

// --- MALFORMED INPUT ---
#[rstest]
#[case("abc", "10", "0", 1, 10)] // base -> 0, plus 2*0+1
#[case("3", "ten", "0", 4, 0)] // point value -> 0
#[case("3", "10", "x", 4, 40)] // repeat -> 0, so 2*0+1
#[case("3", "10", "", 4, 40)]
#[case(" 3", "10", "0", 1, 10)] // whitespace is malformed too
fn test_malformed_fields_count_as_zero(
    #[case] base: &str,
    #[case] point: &str,
    #[case] repeat: &str,
    #[case] score: i64,
    #[case] payout: i64,
) {
    let catalog = Catalog::standard();
    let state = state_with(&[REPEAT_WIN], base, point, repeat);
    assert_eq!(compute_total_score(&state, &catalog), score);
    assert_eq!(compute_total_payout(&state, &catalog), payout);
}

#[test]
fn test_negative_inputs_propagate() {
    let catalog = Catalog::standard();
    let state = state_with(&["自摸"], "-5", "10", "0");
    assert_eq!(compute_total_score(&state, &catalog), -4);
    assert_eq!(compute_total_payout(&state, &catalog), -40);

    let state = state_with(&[REPEAT_WIN], "0", "1", "-3");
    assert_eq!(compute_total_score(&state, &catalog), -5);
}

#[test]
fn test_unknown_names_score_nothing() {
    let scorer = Scorer::new(Catalog::standard());
    let state = state_with(&["自摸", "not-a-hand"], "3", "10", "0");
    assert_eq!(scorer.total_score(&state), 4);

    let details = scorer.score_details(&state);
    assert_eq!(details.unknown, vec!["not-a-hand".to_string()]);
    assert_eq!(details.contributions.len(), 1);
}

#[test]
fn test_details_match_totals() {
    let scorer = Scorer::new(Catalog::standard());
    let state = state_with(&["清一色", "碰碰胡", "門風", REPEAT_WIN], "3", "50", "1");
    let details = scorer.score_details(&state);

    assert_eq!(details.total_score, scorer.total_score(&state));
    assert_eq!(details.total_payout, scorer.total_payout(&state));
    assert_eq!(details.total_score, 3 + 3 + 8 + 4 + 1);
    assert_eq!(details.pattern_points(), 16);

    // Catalog order, not selection order
    let names: Vec<&str> = details.contributions.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec![REPEAT_WIN, "碰碰胡", "清一色", "門風"]);
    assert_eq!(details.contributions[0].label, "2N+1");
    assert_eq!(details.contributions[0].points, 3);
}

#[test]
fn test_every_standard_hand_selected() {
    let catalog = Catalog::standard();
    let all: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
    let state = state_with(&all, "0", "1", "0");
    // Sum of the fixed values plus 2*0+1 for the repeat-win hand
    assert_eq!(compute_total_score(&state, &catalog), 183);
}
