//! Abstract interface for publishing job-status metrics.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::error::Error;
use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Marker trait for metrics publisher errors.
pub trait MetricsPublisherError: Error + Send + Sync + 'static {}

/// Value carried by every published data point.
pub const METRIC_VALUE: f64 = 1.0;

/// Storage resolution (seconds) for published data points.
pub const STORAGE_RESOLUTION: i32 = 60;

/// A name/value tag attached to a metric data point.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Dimension {
    /// Dimension name (e.g. `JobName`).
    pub name: String,

    /// Dimension value.
    pub value: String,
}

impl Dimension {
    /// Creates a dimension from a name/value pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One job-status observation.
///
/// Publishers expand this into exactly two data points: the fixed metric and
/// a metric named by the literal status value. Both share the same dimension
/// pairs, and both ride in a single outbound call.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StatusMetric {
    /// Metric namespace (e.g. `AWS/Batch`).
    pub namespace: String,

    /// Fixed metric name (e.g. `BatchJobStatus`).
    pub metric_name: String,

    /// Free-form status string, also used as a metric name.
    pub status: String,

    /// Identifying dimensions, always two pairs.
    pub dimensions: Vec<Dimension>,
}

/// A trait representing a metrics backend with asynchronous publishing.
#[async_trait]
pub trait MetricsPublisher
where
    Self: Clone + Debug + Send + Sync + 'static,
{
    /// The error type for the publisher.
    type Error: MetricsPublisherError;

    /// Publishes both data points for the given metric in a single call.
    async fn publish(&self, metric: StatusMetric) -> Result<(), Self::Error>;
}
