//! A mock implementation of the metrics publisher. Used for testing.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::sync::Arc;

use async_trait::async_trait;
use jobpulse_publisher::{MetricsPublisher, StatusMetric};
use tokio::sync::Mutex;

mod error;
pub use error::MockPublisherError;

/// A mock implementation of the `MetricsPublisher` trait. Used for testing.
///
/// Records every published metric for later assertions and can be armed to
/// fail a publish call.
#[derive(Clone, Debug, Default)]
pub struct MockPublisher {
    published: Arc<Mutex<Vec<StatusMetric>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockPublisher {
    /// Creates a new instance of `MockPublisher`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every metric published so far.
    pub async fn published(&self) -> Vec<StatusMetric> {
        self.published.lock().await.clone()
    }

    /// Arms the mock to fail the next publish call.
    pub async fn fail_next_publish(&self) {
        *self.fail_next.lock().await = true;
    }
}

#[async_trait]
impl MetricsPublisher for MockPublisher {
    type Error = MockPublisherError;

    async fn publish(&self, metric: StatusMetric) -> Result<(), Self::Error> {
        if std::mem::take(&mut *self.fail_next.lock().await) {
            return Err(MockPublisherError::Armed);
        }

        self.published.lock().await.push(metric);

        Ok(())
    }
}
