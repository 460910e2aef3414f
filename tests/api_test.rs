use poker_decision_engine::{
    api::{
        dto::{DecisionReport, ReplayView},
        errors::ApiError,
        queries::{
            build_replay_view, classify_decision_point, parse_decision_point,
            parse_decision_points, texture_strict,
        },
    },
    config::EngineConfig,
    domain::{BigBlinds, ParseFailure, Street},
    eval::{Classifier, HandCategory, Thresholds, Wetness},
    replay::{PlaybackCursor, PlaybackRules, Timeline},
};

/// Утилита: запись в формате поискового API.
const RECORD_JSON: &str = r#"{
    "decision_id": "dp-42",
    "hand_id": "h-7",
    "villain_name": "Player1",
    "street": "flop",
    "villain_action": "bet",
    "pot_bb": 10.0,
    "villain_bet_size_bb": 8.0,
    "villain_position": "BTN",
    "preflop_actions": "raise, call",
    "flop_actions": "check, bet",
    "flop_board": "2c 7d Jh"
}"#;

// ----------------------
// разбор записей
// ----------------------

#[test]
fn decision_point_is_parsed_from_json_with_unknown_fields() {
    let point = parse_decision_point(RECORD_JSON).unwrap();

    assert_eq!(point.decision_id, "dp-42");
    assert_eq!(point.street, "flop");
    assert_eq!(point.pot_bb, 10.0);
    assert_eq!(point.villain_bet_size_bb, Some(8.0));
    assert_eq!(point.flop_board.as_deref(), Some("2c 7d Jh"));
    assert!(point.turn_actions.is_none());
    assert!(point.board_cards.is_none());
}

#[test]
fn decision_points_array() {
    let json = format!("[{RECORD_JSON}, {{\"decision_id\": \"dp-43\", \"street\": \"river\"}}]");
    let points = parse_decision_points(&json).unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[1].decision_id, "dp-43");
    assert_eq!(points[1].pot_bb, 0.0);
}

#[test]
fn broken_json_is_bad_request() {
    let err = parse_decision_point("{not json").unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(err.to_string().starts_with("Некорректный запрос"));
}

// ----------------------
// классификация
// ----------------------

#[test]
fn classify_record_end_to_end() {
    let point = parse_decision_point(RECORD_JSON).unwrap();
    let report: DecisionReport = classify_decision_point(&point, &Classifier::default()).unwrap();

    assert_eq!(report.decision_id, "dp-42");
    assert_eq!(report.street, Street::Flop);
    assert_eq!(report.board, "2c 7d Jh");
    assert_eq!(report.texture.wetness, Wetness::Dry);
    assert_eq!(report.category, HandCategory::ValueStrong);
    assert_eq!(report.category_info, HandCategory::ValueStrong.info());
    assert_eq!(report.equity, 75);
    assert_eq!(report.rule, "aggressive_large");
}

#[test]
fn report_lists_draw_labels_in_fixed_order() {
    let mut point = parse_decision_point(RECORD_JSON).unwrap();
    point.villain_action = "call".into();
    point.flop_board = Some("9s Ts Js".into());

    let report = classify_decision_point(&point, &Classifier::default()).unwrap();
    assert_eq!(report.category, HandCategory::DrawWeak);
    assert_eq!(
        report.draw_labels,
        vec!["Flush Draw", "Straight Draw", "Combo Draw Possible"]
    );

    // сухой борд — бейджей нет
    let dry = parse_decision_point(RECORD_JSON).unwrap();
    let report = classify_decision_point(&dry, &Classifier::default()).unwrap();
    assert!(report.draw_labels.is_empty());

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["draw_labels"].as_array().is_some_and(|a| a.is_empty()));
}

#[test]
fn classify_record_with_unknown_street_fails() {
    let mut point = parse_decision_point(RECORD_JSON).unwrap();
    point.street = "showdown".into();

    match classify_decision_point(&point, &Classifier::default()) {
        Err(ApiError::UnknownStreet(s)) => assert_eq!(s, "showdown"),
        other => panic!("expected UnknownStreet, got {other:?}"),
    }
}

#[test]
fn report_serializes_with_snake_case_names() {
    let point = parse_decision_point(RECORD_JSON).unwrap();
    let report = classify_decision_point(&point, &Classifier::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["category"], "value_strong");
    assert_eq!(json["street"], "flop");
    assert_eq!(json["texture"]["wetness"], "dry");
    assert_eq!(json["category_info"]["color"], "#10b981");
}

#[test]
fn strict_texture_surfaces_card_errors() {
    let t = texture_strict("9s Ts Js").unwrap();
    assert_eq!(t.wetness, Wetness::Wet);

    match texture_strict("9sXxTs") {
        Err(ApiError::Card(ParseFailure::BadRank('X'))) => {}
        other => panic!("expected card error, got {other:?}"),
    }
}

// ----------------------
// состояние реплея
// ----------------------

#[test]
fn replay_view_tracks_cursor() {
    let point = parse_decision_point(RECORD_JSON).unwrap();
    let timeline = Timeline::build(&point);
    let mut cursor = PlaybackCursor::new(timeline.total_actions());

    let view: ReplayView = build_replay_view(&timeline, &cursor);
    assert_eq!(view.total_actions, 4);
    assert_eq!(view.index, Some(0));
    assert_eq!(view.current_street, Some(Street::Preflop));
    assert_eq!(view.current_action.as_deref(), Some("raise"));
    assert_eq!(view.board, "");
    assert_eq!(view.pot, BigBlinds(10.0));
    assert_eq!(view.position_label, "Action 1 of 4");
    assert!(!view.can_go_back);
    assert!(view.can_go_forward);
    assert!(view.streets[0].is_current && !view.streets[1].is_current);
    assert_eq!(view.streets[1].action_count, 2);

    cursor.last();
    let view = build_replay_view(&timeline, &cursor);
    assert_eq!(view.current_street, Some(Street::Flop));
    assert_eq!(view.current_action.as_deref(), Some("bet"));
    assert_eq!(view.board, "2c 7d Jh");
    assert_eq!(view.position_label, "Action 4 of 4");
    assert!(view.can_go_back);
    assert!(!view.can_go_forward);
}

#[test]
fn replay_view_of_empty_timeline() {
    let timeline = Timeline::default();
    let view = build_replay_view(&timeline, &PlaybackCursor::new(0));

    assert!(view.streets.is_empty());
    assert_eq!(view.index, None);
    assert_eq!(view.current_street, None);
    assert_eq!(view.position_label, "No actions");
    assert!(!view.can_go_back && !view.can_go_forward);
}

// ----------------------
// конфиг
// ----------------------

#[test]
fn engine_config_defaults_and_overrides() {
    assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::standard());
    assert_eq!(EngineConfig::default(), EngineConfig::standard());

    let cfg = EngineConfig::from_json_str(
        r#"{"thresholds": {"large_bet_ratio": 0.8}, "playback": {"tick_interval_ms": 500}}"#,
    )
    .unwrap();
    assert_eq!(cfg.thresholds, Thresholds::new(0.8, 0.33));
    assert_eq!(cfg.playback, PlaybackRules::fast());
    assert_eq!(cfg.classifier().thresholds.large_bet_ratio, 0.8);

    for bad in ["{", r#"{"thresholds": 5}"#, r#"{"playback": {"tick_interval_ms": -1}}"#] {
        assert!(
            matches!(EngineConfig::from_json_str(bad), Err(ApiError::BadRequest(_))),
            "{bad}"
        );
    }
}

/// serde принимает структуру и в виде массива: пустой массив — все поля по умолчанию.
#[test]
fn engine_config_from_empty_array_is_standard() {
    assert_eq!(EngineConfig::from_json_str("[]").unwrap(), EngineConfig::standard());
}
