use serde::Serialize;

use crate::domain::bb::BigBlinds;
use crate::domain::hand::Street;
use crate::eval::category::{CategoryInfo, HandCategory};
use crate::eval::texture::BoardTexture;

pub use crate::domain::record::DecisionPoint;

/// Результат классификации точки решения (для таблиц и графиков).
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DecisionReport {
    pub decision_id: String,
    pub street: Street,
    pub board: String,
    pub texture: BoardTexture,
    /// Подписи дро для бейджей (`"Flush Draw"`, `"BDFD"`...), в порядке `DrawTag`.
    pub draw_labels: Vec<&'static str>,
    pub category: HandCategory,
    pub category_info: CategoryInfo,
    /// Проценты, 0..=100.
    pub equity: u8,
    /// Имя правила классификатора, которое сработало.
    pub rule: &'static str,
}

/// Кнопка улицы в полосе над реплеем.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StreetChipDto {
    pub street: Street,
    pub action_count: usize,
    pub is_current: bool,
}

/// Состояние скраббера реплея.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ReplayView {
    pub streets: Vec<StreetChipDto>,
    pub total_actions: usize,
    /// Позиция курсора, `None` для пустой раздачи.
    pub index: Option<usize>,
    pub current_street: Option<Street>,
    pub current_action: Option<String>,
    /// Борд текущей улицы (пустой на префлопе).
    pub board: String,
    pub pot: BigBlinds,
    /// "Action 3 of 7".
    pub position_label: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}
