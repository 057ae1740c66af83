use thiserror::Error;

/// Why a zero-shot classification attempt did not produce labels.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("no classifier API token configured")]
    MissingToken,

    #[error("classifier request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// `body` is kept for debug logging and left out of the message.
    #[error("classifier responded with status {status}")]
    Status { status: u16, body: String },

    #[error("classifier returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("classifier returned an unexpected shape: {0}")]
    UnexpectedShape(String),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
