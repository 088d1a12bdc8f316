use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No delivery channel configured. Provide Telegram credentials and/or SMTP settings.")]
    NoChannelConfigured,

    // Schedule errors
    #[error("Invalid time '{0}', expected HH:MM in 24h format")]
    InvalidTime(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    // Feed errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Serialization errors
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    // Channel errors from the delivery library
    #[error("Delivery failed: {0}")]
    Channel(String),
}

impl From<channels::ChannelError> for DigestError {
    fn from(err: channels::ChannelError) -> Self {
        DigestError::Channel(err.to_string())
    }
}

pub type DigestResult<T> = Result<T, DigestError>;
