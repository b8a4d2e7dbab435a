/// The only failure text a user ever sees.
pub const SUMMARY_FAILED_MESSAGE: &str = "An error occurred while summarizing the article.";

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Generative API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Generative API returned no text")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SummarizeError {
    /// Every cause collapses into the same user-facing message.
    pub fn user_message(&self) -> &'static str {
        SUMMARY_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        SummarizeError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
