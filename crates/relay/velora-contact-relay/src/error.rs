use thiserror::Error;

/// Failures the relay can hit while handling a submission.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A required form field was absent or empty.
    #[error("missing required fields")]
    MissingFields,

    /// The mail provider answered with a non-success status.
    #[error("mail provider rejected the message: {0}")]
    Rejected(String),

    /// The provider could not be reached at all.
    #[error("mail transport failure: {0}")]
    Transport(String),

    /// Bad or missing environment configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
