// tests/range_tests.rs
//
// Сводка по диапазону оппонента:
//  - фильтры (улица, подстрока действия, границы банка);
//  - распределение категорий и value / draw / bluff;
//  - примеры: не больше 10, воспроизводимы с одним seed;
//  - пустая выборка и нераспознанная улица.

use poker_decision_engine::domain::{DecisionPoint, Street};
use poker_decision_engine::eval::range::MAX_EXAMPLES;
use poker_decision_engine::eval::{
    summarize_range, Classifier, HandCategory, RangeFilter, RangeSummary,
};
use poker_decision_engine::infra::{DeterministicRng, SystemRng};

fn point(
    id: &str,
    street: &str,
    action: &str,
    pot: f64,
    bet: Option<f64>,
    board: Option<&str>,
) -> DecisionPoint {
    let mut p = DecisionPoint {
        decision_id: id.into(),
        street: street.into(),
        villain_action: action.into(),
        pot_bb: pot,
        villain_bet_size_bb: bet,
        ..Default::default()
    };
    match street {
        "flop" => p.flop_board = board.map(Into::into),
        "turn" => p.turn_board = board.map(Into::into),
        "river" => p.river_board = board.map(Into::into),
        _ => {}
    }
    p
}

/// d1 ValueStrong, d2 ShowdownMedium, d3 DrawWeak, d4 BluffPure, d5 BluffSemi.
fn sample() -> Vec<DecisionPoint> {
    vec![
        point("d1", "flop", "bet", 10.0, Some(8.0), Some("2c7dJh")),
        point("d2", "turn", "check", 20.0, None, Some("2c7dJh4s")),
        point("d3", "flop", "call", 10.0, None, Some("9sTsJs")),
        point("d4", "river", "fold", 40.0, None, Some("2c7dJh4s8h")),
        point("d5", "river", "Bet", 10.0, Some(2.0), Some("2c7dJh4s8h")),
    ]
}

fn summarize(points: &[DecisionPoint], filter: &RangeFilter) -> RangeSummary {
    summarize_range(
        points,
        filter,
        &Classifier::default(),
        &mut DeterministicRng::from_seed(42),
    )
}

#[test]
fn buckets_over_whole_sample() {
    let _ = env_logger::builder().is_test(true).try_init();

    let s = summarize(&sample(), &RangeFilter::default());

    assert_eq!(s.total_samples, 5);
    assert_eq!(s.value_pct, 40.0);
    assert_eq!(s.draw_pct, 40.0);
    assert_eq!(s.bluff_pct, 20.0);

    // все по одной — порядок как в HandCategory::ALL
    let order: Vec<HandCategory> = s.category_distribution.iter().map(|c| c.category).collect();
    assert_eq!(
        order,
        vec![
            HandCategory::ValueStrong,
            HandCategory::DrawWeak,
            HandCategory::BluffPure,
            HandCategory::BluffSemi,
            HandCategory::ShowdownMedium,
        ]
    );
    assert!(s.category_distribution.iter().all(|c| c.percentage == 20.0));

    assert_eq!(s.examples, vec!["d1", "d2", "d3", "d4", "d5"]);
}

#[test]
fn distribution_is_sorted_by_count() {
    let mut points = sample();
    points.push(point("d6", "turn", "check", 20.0, None, None));
    points.push(point("d7", "preflop", "check", 3.0, None, None));

    let s = summarize(&points, &RangeFilter::default());

    assert_eq!(s.total_samples, 7);
    let top = &s.category_distribution[0];
    assert_eq!(top.category, HandCategory::ShowdownMedium);
    assert_eq!(top.count, 3);
    // 3/7 = 42.857..
    assert_eq!(top.percentage, 42.9);
    assert_eq!(s.category_distribution[1].percentage, 14.3);
}

#[test]
fn street_filter() {
    let filter = RangeFilter {
        street: Some(Street::Flop),
        ..Default::default()
    };
    let s = summarize(&sample(), &filter);

    assert_eq!(s.total_samples, 2);
    assert_eq!(s.value_pct, 50.0);
    assert_eq!(s.draw_pct, 50.0);
    assert_eq!(s.bluff_pct, 0.0);
    assert_eq!(s.examples, vec!["d1", "d3"]);
}

#[test]
fn action_filter_is_case_insensitive_substring() {
    let filter = RangeFilter {
        action: Some("BET".into()),
        ..Default::default()
    };
    let s = summarize(&sample(), &filter);

    assert_eq!(s.total_samples, 2);
    assert_eq!(s.examples, vec!["d1", "d5"]);
}

#[test]
fn pot_bounds_are_inclusive() {
    let filter = RangeFilter {
        pot_min: Some(20.0),
        pot_max: Some(40.0),
        ..Default::default()
    };
    let s = summarize(&sample(), &filter);

    assert_eq!(s.total_samples, 2);
    assert_eq!(s.examples, vec!["d2", "d4"]);

    let json_filter: RangeFilter = serde_json::from_str(r#"{"street": "river"}"#).unwrap();
    assert_eq!(json_filter.street, Some(Street::River));
    assert_eq!(summarize(&sample(), &json_filter).total_samples, 2);
}

#[test]
fn empty_selection_gives_zero_summary() {
    assert_eq!(summarize(&[], &RangeFilter::default()), RangeSummary::default());

    let filter = RangeFilter {
        pot_min: Some(1000.0),
        ..Default::default()
    };
    let s = summarize(&sample(), &filter);
    assert_eq!(s.total_samples, 0);
    assert!(s.category_distribution.is_empty());
    assert!(s.examples.is_empty());
    assert_eq!(s.value_pct, 0.0);
}

#[test]
fn unknown_street_is_skipped() {
    let mut points = sample();
    points.push(point("bad", "showdown", "bet", 10.0, Some(9.0), None));

    let s = summarize(&points, &RangeFilter::default());
    assert_eq!(s.total_samples, 5);
    assert!(!s.examples.contains(&"bad".to_string()));
}

#[test]
fn examples_are_capped_and_reproducible() {
    let points: Vec<DecisionPoint> = (0..30)
        .map(|i| point(&format!("p{i:02}"), "turn", "check", 10.0, None, None))
        .collect();

    let a = summarize(&points, &RangeFilter::default());
    let b = summarize(&points, &RangeFilter::default());

    assert_eq!(a.total_samples, 30);
    assert_eq!(a.examples.len(), MAX_EXAMPLES);
    assert_eq!(a.examples, b.examples);

    // в порядке исходной выборки
    let mut sorted = a.examples.clone();
    sorted.sort();
    assert_eq!(a.examples, sorted);

    let c = summarize_range(
        &points,
        &RangeFilter::default(),
        &Classifier::default(),
        &mut SystemRng,
    );
    assert_eq!(c.examples.len(), MAX_EXAMPLES);
    assert_eq!(c.value_pct, 100.0);
}

#[test]
fn sample_positions_keeps_everything_when_small() {
    use poker_decision_engine::infra::RandomSource;

    let mut rng = DeterministicRng::from_seed(7);
    assert_eq!(rng.sample_positions(4, 10), vec![0, 1, 2, 3]);
    assert!(rng.sample_positions(0, 10).is_empty());

    let picks = rng.sample_positions(100, 10);
    assert_eq!(picks.len(), 10);
    assert!(picks.windows(2).all(|w| w[0] < w[1]));
    assert!(picks.iter().all(|&i| i < 100));
}
