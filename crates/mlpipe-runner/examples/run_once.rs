//! Drives the pipeline runner once with an empty payload.
//!
//! Run with: cargo run --example run_once

use std::time::Duration;

use mlpipe_runner::{PipelinePayload, PipelineRunner};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // Short delay so the example finishes quickly; the service default is 5s.
    let runner = PipelineRunner::with_delay(Duration::from_millis(500));
    runner.run(&PipelinePayload::new()).await;
}
