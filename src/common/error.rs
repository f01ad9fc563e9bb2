use thiserror::Error;

/// Failure at the search-API boundary: transport, non-success status, or
/// an undecodable payload. Never escapes past the fetcher's run loop.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not build search URL: {0}")]
    BadUrl(#[from] url::ParseError),
}

/// Failure while assembling or submitting the digest email.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not assemble the message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP submission failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A required piece of configuration is missing or unusable. Reported
/// before any network call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),
}
