use thiserror::Error;

use crate::domain::card::ParseFailure;
use crate::replay::errors::ReplayError;

/// Ошибки внешнего API (то, что отдаём UI).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Битый JSON записи или конфига.
    #[error("Некорректный запрос: {0}")]
    BadRequest(#[from] serde_json::Error),

    #[error("Неизвестная улица: {0:?}")]
    UnknownStreet(String),

    #[error("Некорректная карта: {0}")]
    Card(#[from] ParseFailure),

    #[error("Ошибка реплея: {0}")]
    Replay(#[from] ReplayError),
}
