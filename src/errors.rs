use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Failed to call completion API: {message}")]
    RemoteCall {
        status: Option<u16>,
        message: String,
    },

    #[error("No JSON payload found in model response")]
    NoJsonFound,

    #[error("Failed to parse JSON from model response: {0}")]
    JsonParse(String),

    #[error("Failed to serialize style descriptor: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected completion response shape: {0}")]
    MalformedResponse(String),

    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl StyleError {
    /// HTTP status reported by the remote endpoint, if the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            StyleError::RemoteCall { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StyleError {
    fn from(error: reqwest::Error) -> Self {
        StyleError::RemoteCall {
            status: error.status().map(|s| s.as_u16()),
            message: format!("HTTP request failed: {error}"),
        }
    }
}
