// Widget error types
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("browser global unavailable: {0}")]
    NoGlobal(&'static str),

    #[error("local storage unavailable")]
    StorageUnavailable,

    #[error("failed to write storage key {key}")]
    StorageWrite { key: String },

    #[error("failed to parse settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("browser call failed: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
