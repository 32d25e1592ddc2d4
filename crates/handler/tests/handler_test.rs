//! Integration tests driving the full classify-and-publish path through the
//! mock publisher.

use jobpulse_handler::{JobEvent, handle};
use jobpulse_publisher::Dimension;
use jobpulse_publisher_mock::{MockPublisher, MockPublisherError};
use serde_json::json;

fn event(value: serde_json::Value) -> JobEvent {
    serde_json::from_value(value).expect("event should deserialize")
}

#[tokio::test]
async fn test_emr_event_publishes_one_metric_end_to_end() {
    let publisher = MockPublisher::new();

    let response = handle(
        &publisher,
        event(json!({
            "source": "aws.emr",
            "detail": {
                "clusterId": "j-123",
                "stepId": "s-456",
                "state": "COMPLETED"
            }
        })),
    )
    .await
    .unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.body.contains("EMRStepStatus status: COMPLETED"));

    let published = publisher.published().await;
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].namespace, "AWS/EMR");
    assert_eq!(published[0].metric_name, "EMRStepStatus");
    assert_eq!(published[0].status, "COMPLETED");
    assert_eq!(
        published[0].dimensions,
        vec![
            Dimension::new("ClusterId", "j-123"),
            Dimension::new("StepId", "s-456"),
        ]
    );
}

#[tokio::test]
async fn test_batch_event_publishes_batch_namespace_regardless_of_detail() {
    let publisher = MockPublisher::new();

    handle(
        &publisher,
        event(json!({
            "source": "aws.batch",
            "detail": { "state": "COMPLETED", "unrelated": true }
        })),
    )
    .await
    .unwrap();

    let published = publisher.published().await;
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].namespace, "AWS/Batch");
    assert_eq!(published[0].metric_name, "BatchJobStatus");
    // Batch reads `status`, so the stray `state` key is ignored
    assert_eq!(published[0].status, "UNKNOWN");
}

#[tokio::test]
async fn test_unrecognized_source_is_acknowledged_without_publishing() {
    let publisher = MockPublisher::new();

    let response = handle(&publisher, event(json!({ "source": "other.thing", "detail": {} })))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "Event source not handled.");
    assert!(publisher.published().await.is_empty());
}

#[tokio::test]
async fn test_missing_detail_fields_default_to_unknown() {
    let publisher = MockPublisher::new();

    let response = handle(
        &publisher,
        event(json!({ "source": "aws.batch", "detail": {} })),
    )
    .await
    .unwrap();

    assert!(response.body.contains("BatchJobStatus status: UNKNOWN"));

    let published = publisher.published().await;
    assert_eq!(
        published[0].dimensions,
        vec![
            Dimension::new("JobName", "UNKNOWN"),
            Dimension::new("JobID", "UNKNOWN"),
        ]
    );
    assert_eq!(published[0].status, "UNKNOWN");
}

#[tokio::test]
async fn test_publish_failure_propagates_unchanged() {
    let publisher = MockPublisher::new();
    publisher.fail_next_publish().await;

    let result = handle(
        &publisher,
        event(json!({
            "source": "aws.emr",
            "detail": { "clusterId": "j-123", "stepId": "s-456", "state": "FAILED" }
        })),
    )
    .await;

    assert!(matches!(result, Err(MockPublisherError::Armed)));
    assert!(publisher.published().await.is_empty());
}
