use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when publishing to CloudWatch.
#[derive(Debug, Error)]
pub enum Error {
    /// CloudWatch service error.
    #[error("{0}")]
    CloudWatch(#[from] aws_sdk_cloudwatch::Error),
}

impl jobpulse_publisher::MetricsPublisherError for Error {}
