use rstest::rstest;
use std::collections::HashSet;
use taiscore::catalog::{Catalog, Formula, PointValue, ScoringPattern, REPEAT_WIN};
use taiscore::error::TaiScoreError;

#[test]
fn test_standard_catalog_shape() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.len(), 38);
    assert!(!catalog.is_empty());

    let names: HashSet<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names.len(), 38, "names must be unique");

    let parametric: Vec<&str> = catalog
        .iter()
        .filter(|p| p.value.is_parametric())
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(parametric, vec![REPEAT_WIN]);

    assert_eq!(catalog.iter().next().map(|p| p.name.as_str()), Some(REPEAT_WIN));
    assert_eq!(catalog.iter().last().map(|p| p.name.as_str()), Some("花槓"));
}

#[rstest]
#[case("單吊", PointValue::Fixed(1))]
#[case("自摸門清", PointValue::Fixed(3))]
#[case("天胡", PointValue::Fixed(24))]
#[case("四暗刻", PointValue::Fixed(5))]
#[case("混一色/湊一色", PointValue::Fixed(4))]
#[case("正花/花牌", PointValue::Fixed(1))]
#[case("字一色", PointValue::Fixed(16))]
#[case(REPEAT_WIN, PointValue::Parametric(Formula::RepeatWin))]
fn test_standard_values(#[case] name: &str, #[case] expected: PointValue) {
    let catalog = Catalog::standard();
    let pattern = catalog.get(name).expect("pattern missing");
    assert_eq!(pattern.value, expected);
}

#[rstest]
#[case("2N+1", PointValue::Parametric(Formula::RepeatWin))]
#[case("8", PointValue::Fixed(8))]
#[case("0", PointValue::Fixed(0))]
#[case("eight", PointValue::Fixed(0))]
#[case("", PointValue::Fixed(0))]
fn test_label_parsing(#[case] label: &str, #[case] expected: PointValue) {
    assert_eq!(PointValue::from_label(label), expected);
}

#[test]
fn test_labels_for_display() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.get(REPEAT_WIN).unwrap().label(), "2N+1");
    assert_eq!(catalog.get("天胡").unwrap().label(), "24");
}

#[rstest]
#[case(0, 1)]
#[case(1, 3)]
#[case(2, 5)]
#[case(-1, -1)]
fn test_repeat_win_formula(#[case] n: i64, #[case] expected: i64) {
    assert_eq!(Formula::RepeatWin.evaluate(n), expected);
    assert_eq!(PointValue::Parametric(Formula::RepeatWin).points(n), expected);
    assert_eq!(PointValue::Fixed(7).points(n), 7);
}

#[test]
fn test_custom_catalog_rejects_empty() {
    let res = Catalog::from_entries(vec![]);
    assert!(matches!(res, Err(TaiScoreError::Validation(_))));
}

#[test]
fn test_custom_catalog_rejects_duplicates() {
    let res = Catalog::from_entries(vec![
        ScoringPattern::new("自摸", PointValue::Fixed(1)),
        ScoringPattern::new("平胡", PointValue::Fixed(2)),
        ScoringPattern::new("自摸", PointValue::from_label("3")),
    ]);
    match res {
        Err(TaiScoreError::Validation(msg)) => assert!(msg.contains("自摸")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_custom_catalog_keeps_order() {
    let catalog = Catalog::from_entries(vec![
        ScoringPattern::new("b", PointValue::Fixed(2)),
        ScoringPattern::new("a", PointValue::Fixed(1)),
    ])
    .unwrap();
    let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert!(catalog.contains("a"));
    assert!(!catalog.contains("c"));
}
