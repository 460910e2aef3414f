use thiserror::Error;

/// Ошибки сессии реплея.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("В раздаче нет действий — проигрывать нечего")]
    EmptyTimeline,

    #[error("Авто-проигрывание требует запущенного tokio runtime")]
    NoRuntime,
}
