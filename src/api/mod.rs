//! Граница с UI.
//!
//! Здесь описываются:
//! - запросы (queries.rs) — разбор записей, классификация, состояние реплея;
//! - DTO (dto.rs) — структуры для фронта;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod dto;
pub mod errors;
pub mod queries;

pub use dto::*;
pub use errors::*;
pub use queries::*;
