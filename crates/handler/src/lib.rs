//! Routes job-status events from AWS Batch and AWS EMR to a metrics
//! publisher.
//!
//! One event in, at most one publish call out. Recognized sources are
//! expanded into a [`StatusMetric`]; everything else is acknowledged and
//! ignored.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod event;

pub use event::{HandlerResponse, JobEvent, UNKNOWN};

use jobpulse_publisher::{Dimension, MetricsPublisher, StatusMetric};
use tracing::{info, warn};

/// Derives the status metric for a recognized event source.
///
/// First match wins; sources outside the recognized set yield `None` and
/// take the no-op path.
#[must_use]
pub fn classify(event: &JobEvent) -> Option<StatusMetric> {
    match event.source.as_str() {
        "aws.batch" => Some(StatusMetric {
            namespace: "AWS/Batch".to_string(),
            metric_name: "BatchJobStatus".to_string(),
            status: event.detail_str("status"),
            dimensions: vec![
                Dimension::new("JobName", event.detail_str("jobName")),
                Dimension::new("JobID", event.detail_str("jobId")),
            ],
        }),
        "aws.emr" => Some(StatusMetric {
            namespace: "AWS/EMR".to_string(),
            metric_name: "EMRStepStatus".to_string(),
            // EMR reports a step state, not a status
            status: event.detail_str("state"),
            dimensions: vec![
                Dimension::new("ClusterId", event.detail_str("clusterId")),
                Dimension::new("StepId", event.detail_str("stepId")),
            ],
        }),
        _ => None,
    }
}

/// Handles one inbound event: publishes the derived metric for recognized
/// sources, acknowledges unrecognized ones without publishing.
///
/// # Errors
///
/// Returns the publisher's error unchanged if the publish call fails; there
/// is no local retry or recovery.
pub async fn handle<P>(publisher: &P, event: JobEvent) -> Result<HandlerResponse, P::Error>
where
    P: MetricsPublisher,
{
    let Some(metric) = classify(&event) else {
        warn!(source = %event.source, "unhandled event source");
        return Ok(HandlerResponse::ok("Event source not handled."));
    };

    let body = format!(
        "Successfully logged {} status: {} to CloudWatch",
        metric.metric_name, metric.status
    );

    info!(
        source = %event.source,
        namespace = %metric.namespace,
        status = %metric.status,
        "publishing status metric"
    );

    publisher.publish(metric).await?;

    Ok(HandlerResponse::ok(body))
}
