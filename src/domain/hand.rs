use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::bb::BigBlinds;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Все улицы в порядке игры.
    pub const fn all() -> [Street; 4] {
        [Street::Preflop, Street::Flop, Street::Turn, Street::River]
    }

    /// Имя для отображения.
    pub const fn label(&self) -> &'static str {
        match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }

    /// Поздние улицы, где маленькая ставка трактуется как пробная.
    pub const fn is_late(&self) -> bool {
        matches!(self, Street::Turn | Street::River)
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Парсинг `preflop|flop|turn|river` без учёта регистра.
impl FromStr for Street {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preflop" => Ok(Street::Preflop),
            "flop" => Ok(Street::Flop),
            "turn" => Ok(Street::Turn),
            "river" => Ok(Street::River),
            _ => Err(format!("Unknown street: {s}")),
        }
    }
}

/// Входные данные одной классификации. Живёт ровно один вызов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DecisionContext {
    /// Метка действия как есть (`"bet"`, `"Raise 3x"`, `"check"`...).
    pub action: String,
    /// Строка борда, см. [`crate::domain::board`].
    pub board: String,
    pub street: Street,
    pub pot_size: BigBlinds,
    pub bet_size: Option<BigBlinds>,
}

impl DecisionContext {
    pub fn new(action: impl Into<String>, board: impl Into<String>, street: Street, pot_size: f64) -> Self {
        Self {
            action: action.into(),
            board: board.into(),
            street,
            pot_size: BigBlinds::new(pot_size),
            bet_size: None,
        }
    }

    pub fn with_bet(mut self, bet_size: f64) -> Self {
        self.bet_size = Some(BigBlinds::new(bet_size));
        self
    }
}
