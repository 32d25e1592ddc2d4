//! CloudWatch implementation of the job-status metrics publisher.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::{Error, Result};

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_cloudwatch::Client;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};
use jobpulse_publisher::{METRIC_VALUE, MetricsPublisher, STORAGE_RESOLUTION, StatusMetric};
use tracing::info;

/// Publishes job-status metrics to CloudWatch.
#[derive(Clone, Debug)]
pub struct CloudWatchPublisher {
    client: Client,
}

impl CloudWatchPublisher {
    /// Creates a publisher using the ambient AWS environment configuration.
    pub async fn new() -> Self {
        let config = aws_config::from_env().load().await;

        Self {
            client: Client::new(&config),
        }
    }

    /// Creates a publisher pinned to the given region.
    pub async fn with_region(region: String) -> Self {
        let config = aws_config::from_env()
            .region(Region::new(region))
            .load()
            .await;

        Self {
            client: Client::new(&config),
        }
    }
}

/// Expands a status metric into its two data points: the fixed metric and a
/// metric named by the literal status value, sharing the same dimensions.
#[must_use]
pub fn metric_data(metric: &StatusMetric) -> Vec<MetricDatum> {
    let dimensions: Vec<Dimension> = metric
        .dimensions
        .iter()
        .map(|d| Dimension::builder().name(&d.name).value(&d.value).build())
        .collect();

    [metric.metric_name.clone(), metric.status.clone()]
        .into_iter()
        .map(|name| {
            MetricDatum::builder()
                .metric_name(name)
                .set_dimensions(Some(dimensions.clone()))
                .value(METRIC_VALUE)
                .unit(StandardUnit::Count)
                .storage_resolution(STORAGE_RESOLUTION)
                .build()
        })
        .collect()
}

#[async_trait]
impl MetricsPublisher for CloudWatchPublisher {
    type Error = Error;

    async fn publish(&self, metric: StatusMetric) -> Result<()> {
        self.client
            .put_metric_data()
            .namespace(&metric.namespace)
            .set_metric_data(Some(metric_data(&metric)))
            .send()
            .await
            .map_err(|e| Error::CloudWatch(e.into()))?;

        info!(
            namespace = %metric.namespace,
            metric_name = %metric.metric_name,
            status = %metric.status,
            "published status metric"
        );

        Ok(())
    }
}
