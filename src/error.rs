use thiserror::Error;

/// FPB統一エラー型
#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Badge service error: {message} (status: {status})")]
    BadgeApi { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("TUI error: {0}")]
    Tui(String),
}

pub type Result<T> = std::result::Result<T, BadgeError>;

impl BadgeError {
    /// リトライ可能なエラーかどうか
    pub fn is_retryable(&self) -> bool {
        match self {
            BadgeError::Network(_) => true,
            BadgeError::BadgeApi { status, .. } => {
                // 5xx エラーはリトライ可能
                *status >= 500 && *status < 600
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
