use serde::{Deserialize, Serialize};

use crate::domain::action::ActionKind;
use crate::domain::hand::DecisionContext;

use super::category::HandCategory;
use super::classifier::Classifier;
use super::equity::equity;
use super::texture::{analyze_board, BoardTexture};

/// Полный разбор одного решения: текстура, категория, эквити и флаги.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandAnalysis {
    pub texture: BoardTexture,
    pub category: HandCategory,
    /// Проценты, 0..=100.
    pub equity: u8,
    pub is_value_bet: bool,
    pub is_bluff: bool,
    pub is_semi_bluff: bool,
    pub description: String,
}

/// Разобрать решение заданным классификатором.
pub fn analyze_with(classifier: &Classifier, ctx: &DecisionContext) -> HandAnalysis {
    let category = classifier.classify(ctx);
    let aggressive = ActionKind::from_label(&ctx.action).is_aggressive();

    HandAnalysis {
        texture: analyze_board(&ctx.board),
        category,
        equity: equity(category),
        is_value_bet: category.is_value(),
        is_bluff: category == HandCategory::BluffPure,
        is_semi_bluff: category == HandCategory::BluffSemi
            || (aggressive && category == HandCategory::DrawStrong),
        description: category.info().description.to_string(),
    }
}

/// Разобрать решение со стандартными порогами.
pub fn analyze_decision(ctx: &DecisionContext) -> HandAnalysis {
    analyze_with(&Classifier::default(), ctx)
}
