//! Stand-in ML pipeline runner.
//!
//! [`PipelineRunner`] simulates a multi-stage pipeline run: it logs a start
//! line, waits a fixed delay in place of real work, logs a completion line,
//! and returns nothing. The inbound payload is carried opaquely and never
//! inspected.
//!
//! ```rust
//! use mlpipe_runner::PipelineRunner;
//! use std::time::Duration;
//!
//! let runner = PipelineRunner::with_delay(Duration::from_secs(1));
//! assert_eq!(runner.delay(), Duration::from_secs(1));
//! ```

use std::time::{Duration, Instant};

use tokio::time::sleep;
use tracing::info;
use uuid::Uuid;

// ─────────────────────────────────────────────────────────────────────────────
// Payload
// ─────────────────────────────────────────────────────────────────────────────

/// The inbound payload: an arbitrary JSON object with no schema.
///
/// Requests carry whatever fields the caller chooses; the runner does not
/// read them.
pub type PipelinePayload = serde_json::Map<String, serde_json::Value>;

// ─────────────────────────────────────────────────────────────────────────────
// Runner
// ─────────────────────────────────────────────────────────────────────────────

/// How long a pipeline run takes when no other delay is configured.
pub const DEFAULT_PIPELINE_DELAY: Duration = Duration::from_secs(5);

/// Executes pipeline runs.
///
/// Each run is a two-step sequence, start then finished, with no branching
/// and no error path. Runs on concurrent requests proceed independently; the
/// runner holds no shared state.
#[derive(Debug, Clone)]
pub struct PipelineRunner {
    delay: Duration,
}

impl PipelineRunner {
    /// Creates a runner with the default delay.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_PIPELINE_DELAY,
        }
    }

    /// Creates a runner with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the configured run delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Runs all pipelines for one request.
    ///
    /// Logs the start, suspends the calling task for the configured delay,
    /// then logs completion. The payload is accepted but not read. Never
    /// fails and returns no value.
    pub async fn run(&self, _payload: &PipelinePayload) {
        let run_id = Uuid::new_v4();
        let start = Instant::now();

        info!(%run_id, "Running ML pipelines");

        sleep(self.delay).await;

        info!(%run_id, elapsed = ?start.elapsed(), "Pipelines finished");
    }
}

impl Default for PipelineRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_five_seconds() {
        assert_eq!(PipelineRunner::new().delay(), Duration::from_secs(5));
        assert_eq!(PipelineRunner::default().delay(), DEFAULT_PIPELINE_DELAY);
    }

    #[test]
    fn test_with_delay_overrides_default() {
        let runner = PipelineRunner::with_delay(Duration::from_millis(20));
        assert_eq!(runner.delay(), Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_run_waits_at_least_the_configured_delay() {
        let delay = Duration::from_millis(50);
        let runner = PipelineRunner::with_delay(delay);

        let start = Instant::now();
        runner.run(&PipelinePayload::new()).await;
        let elapsed = start.elapsed();

        assert!(
            elapsed >= delay,
            "run returned after {:?}, before the {:?} delay elapsed",
            elapsed,
            delay
        );
    }

    #[tokio::test]
    async fn test_payload_contents_do_not_change_the_outcome() {
        let delay = Duration::from_millis(10);
        let runner = PipelineRunner::with_delay(delay);

        let mut populated = PipelinePayload::new();
        populated.insert("foo".to_string(), serde_json::json!("bar"));
        populated.insert("n".to_string(), serde_json::json!(42));

        for payload in [PipelinePayload::new(), populated] {
            let start = Instant::now();
            runner.run(&payload).await;
            assert!(start.elapsed() >= delay);
        }
    }
}
