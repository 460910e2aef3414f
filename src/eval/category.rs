use core::fmt;

use serde::{Deserialize, Serialize};

/// Категория предполагаемой руки игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    ValueStrong,
    ValueMedium,
    ValueWeak,
    DrawStrong,
    DrawWeak,
    BluffPure,
    BluffSemi,
    ShowdownMedium,
}

/// Грубая корзина для сводки по диапазону: value / draw / bluff.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RangeBucket {
    Value,
    Draw,
    Bluff,
}

/// Данные для отображения категории.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: &'static str,
    /// CSS-цвет бейджа.
    pub color: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

impl HandCategory {
    pub const ALL: [HandCategory; 8] = [
        HandCategory::ValueStrong,
        HandCategory::ValueMedium,
        HandCategory::ValueWeak,
        HandCategory::DrawStrong,
        HandCategory::DrawWeak,
        HandCategory::BluffPure,
        HandCategory::BluffSemi,
        HandCategory::ShowdownMedium,
    ];

    pub const fn is_value(&self) -> bool {
        matches!(
            self,
            HandCategory::ValueStrong | HandCategory::ValueMedium | HandCategory::ValueWeak
        )
    }

    /// Маргинальные готовые руки считаются value, полублефы — дро.
    pub const fn bucket(&self) -> RangeBucket {
        match self {
            HandCategory::ValueStrong
            | HandCategory::ValueMedium
            | HandCategory::ValueWeak
            | HandCategory::ShowdownMedium => RangeBucket::Value,
            HandCategory::DrawStrong | HandCategory::DrawWeak | HandCategory::BluffSemi => {
                RangeBucket::Draw
            }
            HandCategory::BluffPure => RangeBucket::Bluff,
        }
    }

    /// Статическая таблица отображения.
    pub const fn info(&self) -> CategoryInfo {
        match self {
            HandCategory::ValueStrong => CategoryInfo {
                label: "Strong Value",
                color: "#10b981",
                description: "Top pair+, sets, two pair, trips, straights",
                examples: &["Top Pair Top Kicker", "Overpair", "Set", "Two Pair", "Straight", "Flush"],
            },
            HandCategory::ValueMedium => CategoryInfo {
                label: "Medium Value",
                color: "#0ea5e9",
                description: "Middle pair, weak top pair, good ace high",
                examples: &["Top Pair Weak Kicker", "Middle Pair", "Ace High (good)", "Weak Two Pair"],
            },
            HandCategory::ValueWeak => CategoryInfo {
                label: "Weak Value",
                color: "#f59e0b",
                description: "Bottom pair, weak pair, marginal showdown",
                examples: &["Bottom Pair", "Underpair", "Weak Ace High", "Third Pair"],
            },
            HandCategory::DrawStrong => CategoryInfo {
                label: "Strong Draw",
                color: "#8b5cf6",
                description: "OESD, flush draw, combo draw, straight flush draw",
                examples: &["Flush Draw", "OESD", "Combo Draw (FD + SD)", "Straight Flush Draw"],
            },
            HandCategory::DrawWeak => CategoryInfo {
                label: "Weak Draw",
                color: "#ec4899",
                description: "Gutshot, backdoor draws, weak draws",
                examples: &["Gutshot", "BDFD (Backdoor Flush Draw)", "BDSD (Backdoor Straight Draw)"],
            },
            HandCategory::BluffPure => CategoryInfo {
                label: "Pure Bluff",
                color: "#ef4444",
                description: "Complete air, no pair and no draw",
                examples: &["Ace High (no draw)", "King High", "Queen High", "Complete Air"],
            },
            HandCategory::BluffSemi => CategoryInfo {
                label: "Semi-Bluff",
                color: "#f97316",
                description: "Weak pair plus a draw, or a weak draw",
                examples: &["Bottom Pair + BDFD", "Gutshot + Pair", "Overcards + Draw"],
            },
            HandCategory::ShowdownMedium => CategoryInfo {
                label: "Medium Showdown",
                color: "#06b6d4",
                description: "Hands that prefer to get to showdown",
                examples: &["Middle Pair (passive)", "Weak Top Pair", "Ace High", "Pocket Pair"],
            },
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().label)
    }
}
