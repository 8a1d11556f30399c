use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TokenError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
