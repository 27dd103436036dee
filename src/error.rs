use thiserror::Error;

#[derive(Error, Debug)]
pub enum HabitError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid day key: {0}")]
    InvalidDayKey(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("data parse error: {0}")]
    DataParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HabitError>;
