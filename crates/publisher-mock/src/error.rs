use jobpulse_publisher::MetricsPublisherError;
use thiserror::Error;

/// Error type for the mock publisher.
#[derive(Debug, Error)]
pub enum MockPublisherError {
    /// Failure requested by a test via `fail_next_publish`.
    #[error("mock publisher failure")]
    Armed,
}

impl MetricsPublisherError for MockPublisherError {}
