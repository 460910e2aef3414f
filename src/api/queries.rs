use crate::domain::board::Board;
use crate::domain::record::DecisionPoint;
use crate::eval::classifier::{apply_rules, Classifier};
use crate::eval::equity::equity;
use crate::eval::texture::{analyze, BoardTexture};
use crate::replay::cursor::PlaybackCursor;
use crate::replay::timeline::Timeline;

use super::dto::{DecisionReport, ReplayView, StreetChipDto};
use super::errors::ApiError;

/// Разобрать одну запись из JSON поискового API.
pub fn parse_decision_point(json: &str) -> Result<DecisionPoint, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Разобрать массив записей.
pub fn parse_decision_points(json: &str) -> Result<Vec<DecisionPoint>, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Классифицировать точку решения.
pub fn classify_decision_point(
    point: &DecisionPoint,
    classifier: &Classifier,
) -> Result<DecisionReport, ApiError> {
    let ctx = point
        .decision_context()
        .ok_or_else(|| ApiError::UnknownStreet(point.street.clone()))?;

    let facts = classifier.facts(&ctx);
    let (category, rule) = apply_rules(&facts);

    Ok(DecisionReport {
        decision_id: point.decision_id.clone(),
        street: ctx.street,
        board: ctx.board,
        draw_labels: facts.texture.draws.iter().map(|d| d.label()).collect(),
        texture: facts.texture,
        category,
        category_info: category.info(),
        equity: equity(category),
        rule,
    })
}

/// Текстура борда без фильтра: битая карта — ошибка, а не пропуск.
pub fn texture_strict(board: &str) -> Result<BoardTexture, ApiError> {
    let board = Board::parse_strict(board)?;
    Ok(analyze(&board.cards))
}

/// Состояние скраббера для текущей позиции курсора.
pub fn build_replay_view(timeline: &Timeline, cursor: &PlaybackCursor) -> ReplayView {
    let index = cursor.index();
    let current = index.and_then(|i| timeline.current_street(i));
    let current_action = index
        .and_then(|i| timeline.entry(i))
        .map(|entry| entry.action.to_string());

    let streets = timeline
        .streets()
        .iter()
        .map(|s| StreetChipDto {
            street: s.name,
            action_count: s.actions.len(),
            is_current: current.is_some_and(|c| c.name == s.name),
        })
        .collect();

    let position_label = match index {
        Some(i) => format!("Action {} of {}", i + 1, timeline.total_actions()),
        None => "No actions".to_string(),
    };

    ReplayView {
        streets,
        total_actions: timeline.total_actions(),
        index,
        current_street: current.map(|c| c.name),
        current_action,
        board: current.map(|c| c.board.clone()).unwrap_or_default(),
        pot: current.map(|c| c.pot).unwrap_or_default(),
        position_label,
        can_go_back: index.is_some() && !cursor.is_at_start(),
        can_go_forward: !cursor.is_at_end(),
    }
}
