//! Движок классификации покерных решений.
//!
//! Два независимых конвейера:
//! - классификация: токены карт -> текстура борда -> категория руки -> эквити;
//! - реплей: плоская запись точки решения -> улицы -> курсор проигрывания.
//!
//! Вся классификация синхронная и без состояния. Состояние есть только
//! у сессии реплея (`replay::Replayer`) с её таймером авто-проигрывания.

pub mod api;
pub mod config;
pub mod domain;
pub mod eval;
pub mod infra;
pub mod replay;

pub use config::EngineConfig;
pub use domain::{parse_card, Card, DecisionContext, DecisionPoint, ParseFailure, Street};
pub use eval::{analyze_board, classify, equity, BoardTexture, HandCategory};
pub use replay::{PlaybackCursor, Replayer, Timeline};
