//! Строка борда -> список карт.
//!
//! Формат строки: склеенные 2-символьные токены, пробелы допускаются
//! (`"AsKhQd"`, `"As Kh Qd"`).

use core::fmt;

use serde::{Deserialize, Serialize};

use super::card::{parse_card, Card, ParseFailure};

/// Общие карты (0..=5 штук).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub cards: Vec<Card>,
}

/// Нарезать строку борда на токены по 2 символа, выкинув все пробелы.
/// Хвостовой одиночный символ остаётся отдельным (битым) токеном.
pub fn tokenize(board: &str) -> Vec<String> {
    let compact: Vec<char> = board.chars().filter(|c| !c.is_whitespace()).collect();
    compact.chunks(2).map(|chunk| chunk.iter().collect()).collect()
}

impl Board {
    /// Разбор с фильтром: нераспознанные токены отбрасываются,
    /// анализ продолжается по оставшимся картам.
    pub fn parse_lossy(board: &str) -> Self {
        let cards = tokenize(board)
            .iter()
            .filter_map(|token| match parse_card(token) {
                Ok(card) => Some(card),
                Err(err) => {
                    log::debug!("board {board:?}: dropping token {token:?}: {err}");
                    None
                }
            })
            .collect();

        Self { cards }
    }

    /// Строгий разбор: первая ошибка прерывает разбор.
    pub fn parse_strict(board: &str) -> Result<Self, ParseFailure> {
        let cards = tokenize(board)
            .iter()
            .map(|token| parse_card(token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
