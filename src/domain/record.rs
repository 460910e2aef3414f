//! Плоская запись точки решения, как её отдаёт поисковый API.

use serde::{Deserialize, Serialize};

use crate::domain::bb::BigBlinds;
use crate::domain::hand::{DecisionContext, Street};

/// Точка решения. Поля по улицам необязательны: в записи может не быть
/// тёрна/ривера, а часть старых записей не содержит строк действий вовсе.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecisionPoint {
    pub decision_id: String,
    pub hand_id: String,
    pub villain_name: String,
    /// `preflop|flop|turn|river`.
    pub street: String,
    pub villain_action: String,
    pub pot_bb: f64,
    pub villain_bet_size_bb: Option<f64>,
    /// Карты борда токенами (`["Kd", "9s", "3c"]`), если API их отдаёт.
    pub board_cards: Option<Vec<String>>,

    pub preflop_actions: Option<String>,
    pub flop_actions: Option<String>,
    pub turn_actions: Option<String>,
    pub river_actions: Option<String>,
    pub flop_board: Option<String>,
    pub turn_board: Option<String>,
    pub river_board: Option<String>,
}

/// Пустая строка считается отсутствующим полем.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl DecisionPoint {
    pub fn parsed_street(&self) -> Option<Street> {
        self.street.parse().ok()
    }

    /// Строки действий и борда для улицы.
    pub fn street_fields(&self, street: Street) -> (Option<&str>, Option<&str>) {
        match street {
            Street::Preflop => (present(&self.preflop_actions), None),
            Street::Flop => (present(&self.flop_actions), present(&self.flop_board)),
            Street::Turn => (present(&self.turn_actions), present(&self.turn_board)),
            Street::River => (present(&self.river_actions), present(&self.river_board)),
        }
    }

    /// Борд на момент решения: `board_cards`, если есть, иначе строка борда
    /// улицы решения или ближайшей предыдущей улицы.
    pub fn board_at(&self, street: Street) -> String {
        if let Some(cards) = self.board_cards.as_ref().filter(|c| !c.is_empty()) {
            return cards.concat();
        }

        Street::all()
            .into_iter()
            .filter(|s| *s <= street)
            .rev()
            .find_map(|s| self.street_fields(s).1)
            .unwrap_or_default()
            .to_string()
    }

    /// Контекст классификации. `None`, если улица не распознана.
    pub fn decision_context(&self) -> Option<DecisionContext> {
        let street = self.parsed_street()?;

        Some(DecisionContext {
            action: self.villain_action.clone(),
            board: self.board_at(street),
            street,
            pot_size: BigBlinds::new(self.pot_bb),
            bet_size: self.villain_bet_size_bb.map(BigBlinds::new),
        })
    }
}
