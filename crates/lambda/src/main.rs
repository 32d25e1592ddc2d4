//! Lambda binary republishing AWS Batch and EMR job-status events as
//! CloudWatch metrics.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use jobpulse_handler::{HandlerResponse, JobEvent, handle};
use jobpulse_publisher_cloudwatch::CloudWatchPublisher;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Lambda log lines already carry timestamps and are not a TTY
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .without_time()
        .with_ansi(false)
        .init();

    let publisher = CloudWatchPublisher::new().await;
    info!("cloudwatch publisher initialized");

    let publisher_ref = &publisher;

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<JobEvent>| async move {
            let response = handle(publisher_ref, event.payload).await?;
            Ok::<HandlerResponse, Error>(response)
        },
    ))
    .await
}
