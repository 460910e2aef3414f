//! Классификатор категории руки по действию, борду и сайзингу.
//!
//! Решение — упорядоченная таблица правил с условиями. Правила
//! проверяются сверху вниз, срабатывает первое подходящее:
//!   агрессия (крупная -> средняя -> мелкая -> без размера),
//!   колл, чек, фолд, всё остальное.

use serde::{Deserialize, Serialize};

use crate::domain::action::ActionKind;
use crate::domain::bb::BigBlinds;
use crate::domain::hand::{DecisionContext, Street};

use super::category::HandCategory;
use super::texture::{analyze_board, BoardTexture, Wetness};

/// Пороги сайзинга в долях банка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    /// Ставка строго больше этой доли — крупная.
    pub large_bet_ratio: f64,
    /// Ставка не меньше этой доли — средняя, иначе мелкая.
    pub medium_bet_ratio: f64,
}

impl Thresholds {
    pub const fn new(large_bet_ratio: f64, medium_bet_ratio: f64) -> Self {
        Self {
            large_bet_ratio,
            medium_bet_ratio,
        }
    }

    /// Стандартные пороги: 66% и 33% банка.
    pub const fn standard() -> Self {
        Self::new(0.66, 0.33)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::standard()
    }
}

/// Сайзинг ставки относительно банка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BetTier {
    Large,
    Medium,
    Small,
    /// Размер не передан (или нулевой).
    Absent,
}

impl BetTier {
    pub fn of(bet: Option<BigBlinds>, pot: BigBlinds, thresholds: &Thresholds) -> Self {
        let bet = match bet {
            Some(bet) if !bet.is_zero() => bet,
            _ => return BetTier::Absent,
        };

        if bet.0 > pot.0 * thresholds.large_bet_ratio {
            BetTier::Large
        } else if bet.0 >= pot.0 * thresholds.medium_bet_ratio {
            BetTier::Medium
        } else {
            BetTier::Small
        }
    }
}

/// Всё, на что смотрят правила.
#[derive(Clone, Debug)]
pub struct Facts {
    pub action: ActionKind,
    pub tier: BetTier,
    pub street: Street,
    pub texture: BoardTexture,
}

/// Одно правило таблицы: условие + вердикт.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub guard: fn(&Facts) -> bool,
    pub verdict: fn(&Facts) -> HandCategory,
}

const RULES: [Rule; 8] = [
    Rule {
        name: "aggressive_large",
        guard: |f| f.action.is_aggressive() && f.tier == BetTier::Large,
        // Крупная ставка: защита value на мокром борде или поляризация на сухом.
        verdict: |_| HandCategory::ValueStrong,
    },
    Rule {
        name: "aggressive_medium",
        guard: |f| f.action.is_aggressive() && f.tier == BetTier::Medium,
        verdict: |f| {
            if f.texture.straight_possible || f.texture.flush_possible {
                HandCategory::DrawStrong
            } else {
                HandCategory::ValueMedium
            }
        },
    },
    Rule {
        name: "aggressive_small",
        guard: |f| f.action.is_aggressive() && f.tier == BetTier::Small,
        verdict: |f| {
            if f.street.is_late() {
                HandCategory::BluffSemi
            } else {
                HandCategory::ValueWeak
            }
        },
    },
    Rule {
        name: "aggressive_unsized",
        guard: |f| f.action.is_aggressive() && f.tier == BetTier::Absent,
        verdict: |f| {
            if f.texture.wetness == Wetness::Wet {
                HandCategory::DrawStrong
            } else {
                HandCategory::ValueMedium
            }
        },
    },
    Rule {
        name: "call",
        guard: |f| f.action == ActionKind::Call,
        verdict: |f| {
            if f.texture.has_draws() {
                HandCategory::DrawWeak
            } else {
                HandCategory::ShowdownMedium
            }
        },
    },
    Rule {
        name: "check",
        guard: |f| f.action == ActionKind::Check,
        verdict: |_| HandCategory::ShowdownMedium,
    },
    Rule {
        name: "fold",
        guard: |f| f.action == ActionKind::Fold,
        verdict: |_| HandCategory::BluffPure,
    },
    Rule {
        name: "default",
        guard: |_| true,
        verdict: |_| HandCategory::ShowdownMedium,
    },
];

/// Классификатор с настраиваемыми порогами. Без состояния.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Classifier {
    pub thresholds: Thresholds,
}

impl Classifier {
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Таблица правил в порядке проверки.
    pub fn rules() -> &'static [Rule] {
        &RULES
    }

    pub fn facts(&self, ctx: &DecisionContext) -> Facts {
        Facts {
            action: ActionKind::from_label(&ctx.action),
            tier: BetTier::of(ctx.bet_size, ctx.pot_size, &self.thresholds),
            street: ctx.street,
            texture: analyze_board(&ctx.board),
        }
    }

    pub fn classify(&self, ctx: &DecisionContext) -> HandCategory {
        self.classify_traced(ctx).0
    }

    /// Категория + имя сработавшего правила.
    pub fn classify_traced(&self, ctx: &DecisionContext) -> (HandCategory, &'static str) {
        let facts = self.facts(ctx);
        let (category, rule) = apply_rules(&facts);
        log::trace!("{:?} on {:?}: rule {rule} -> {category:?}", ctx.action, ctx.board);
        (category, rule)
    }
}

/// Прогнать факты через таблицу правил.
pub fn apply_rules(facts: &Facts) -> (HandCategory, &'static str) {
    RULES
        .iter()
        .find(|rule| (rule.guard)(facts))
        .map(|rule| ((rule.verdict)(facts), rule.name))
        .unwrap_or((HandCategory::ShowdownMedium, "default"))
}

/// Классификация со стандартными порогами.
pub fn classify(ctx: &DecisionContext) -> HandCategory {
    Classifier::default().classify(ctx)
}
