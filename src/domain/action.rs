use serde::{Deserialize, Serialize};

/// Тип действия, выведенный из произвольной текстовой метки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// bet / raise (в том числе "check-raise", "3bet").
    Aggressive,
    Call,
    Check,
    Fold,
    /// Всё, что не распознали.
    Other,
}

impl ActionKind {
    /// Поиск подстроки в нижнем регистре. Порядок проверок важен:
    /// агрессия раньше пассивных действий, пассивные раньше фолда.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();

        if lower.contains("bet") || lower.contains("raise") {
            ActionKind::Aggressive
        } else if lower.contains("call") {
            ActionKind::Call
        } else if lower.contains("check") {
            ActionKind::Check
        } else if lower.contains("fold") {
            ActionKind::Fold
        } else {
            ActionKind::Other
        }
    }

    pub fn is_aggressive(&self) -> bool {
        matches!(self, ActionKind::Aggressive)
    }
}
