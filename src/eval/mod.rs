//! Эвристический анализ решений.
//!
//! Конвейер: строка борда -> `BoardTexture` -> `HandCategory` -> эквити.
//! Все функции чистые и тотальные: любой вход даёт результат.

pub mod analysis;
pub mod category;
pub mod classifier;
pub mod equity;
pub mod range;
pub mod texture;

pub use analysis::{analyze_decision, analyze_with, HandAnalysis};
pub use category::{CategoryInfo, HandCategory, RangeBucket};
pub use classifier::{classify, BetTier, Classifier, Rule, Thresholds};
pub use equity::equity;
pub use range::{summarize_range, CategoryShare, RangeFilter, RangeSummary};
pub use texture::{analyze, analyze_board, BoardTexture, DrawTag, Wetness};
