//! Текстура борда: влажность, связность, флеш/стрит-потенциал, дро.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::board::Board;
use crate::domain::card::{Card, Rank};

/// Насколько борд "влажный" (опасный по дро).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Wetness {
    #[default]
    Dry,
    SemiWet,
    Wet,
}

/// Дро, которые возможны на борде. Порядок объявления = порядок вывода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DrawTag {
    BackdoorFlushDraw,
    FlushDraw,
    StraightDraw,
    ComboDrawPossible,
}

impl DrawTag {
    pub const fn label(&self) -> &'static str {
        match self {
            DrawTag::BackdoorFlushDraw => "BDFD",
            DrawTag::FlushDraw => "Flush Draw",
            DrawTag::StraightDraw => "Straight Draw",
            DrawTag::ComboDrawPossible => "Combo Draw Possible",
        }
    }
}

/// Результат анализа борда.
///
/// Инварианты: `monotone => suit_count == 1`,
/// `rainbow => suit_count == число карт`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardTexture {
    pub wetness: Wetness,
    /// Сколько разных мастей на борде (0..=4).
    pub suit_count: u8,
    pub connected: bool,
    pub paired: bool,
    pub monotone: bool,
    pub rainbow: bool,
    pub straight_possible: bool,
    pub flush_possible: bool,
    pub draws: BTreeSet<DrawTag>,
}

impl BoardTexture {
    pub fn has_draws(&self) -> bool {
        !self.draws.is_empty()
    }
}

/// Посчитать текстуру по уже разобранным картам.
/// Пустой борд даёт текстуру по умолчанию (`Dry`, без дро).
pub fn analyze(cards: &[Card]) -> BoardTexture {
    if cards.is_empty() {
        return BoardTexture::default();
    }

    // 1. Масти
    let mut per_suit = HashMap::new();
    for card in cards {
        *per_suit.entry(card.suit).or_insert(0usize) += 1;
    }
    let suit_count = per_suit.len();
    let max_suit_count = per_suit.values().copied().max().unwrap_or(0);

    // 2. Пары
    let mut ranks: Vec<u8> = cards.iter().map(Card::value).collect();
    ranks.sort_unstable();
    let distinct: BTreeSet<u8> = ranks.iter().copied().collect();
    let paired = distinct.len() < ranks.len();

    // 3. Связность: каждый разрыв между соседними рангами не больше 2
    let connected = ranks.len() >= 2 && ranks.windows(2).all(|w| w[1] - w[0] <= 2);

    // 4. Стрит: компактный диапазон или туз + двойка ("колесо").
    //    Наличие 3, 4, 5 для колеса не проверяется.
    let straight_possible = ranks.len() >= 3 && {
        let spread = ranks[ranks.len() - 1] - ranks[0];
        let wheel = distinct.contains(&Rank::Ace.value()) && distinct.contains(&Rank::Two.value());
        spread <= 4 || wheel
    };

    // 5. Масти: монотон / радуга / флеш
    let monotone = suit_count == 1;
    let rainbow = suit_count == cards.len();
    let flush_possible = max_suit_count >= 2;

    // 6. Влажность
    let wetness = if straight_possible && flush_possible {
        Wetness::Wet
    } else if straight_possible || flush_possible || connected {
        Wetness::SemiWet
    } else {
        Wetness::Dry
    };

    // 7. Дро
    let mut draws = BTreeSet::new();
    if max_suit_count == 2 {
        draws.insert(DrawTag::BackdoorFlushDraw);
    }
    if max_suit_count >= 3 {
        draws.insert(DrawTag::FlushDraw);
    }
    if straight_possible {
        draws.insert(DrawTag::StraightDraw);
    }
    if connected && straight_possible {
        draws.insert(DrawTag::ComboDrawPossible);
    }

    BoardTexture {
        wetness,
        suit_count: suit_count as u8,
        connected,
        paired,
        monotone,
        rainbow,
        straight_possible,
        flush_possible,
        draws,
    }
}

/// Текстура по строке борда. Нераспознанные токены отбрасываются.
pub fn analyze_board(board: &str) -> BoardTexture {
    analyze(&Board::parse_lossy(board).cards)
}
