//! Доменная модель: карты, борд, улицы, размеры в BB, действия, запись точки решения.

pub mod action;
pub mod bb;
pub mod board;
pub mod card;
pub mod hand;
pub mod record;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use action::*;
pub use bb::*;
pub use board::*;
pub use card::*;
pub use hand::*;
pub use record::DecisionPoint;
