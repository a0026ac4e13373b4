//! HTTP request handlers.

pub mod pipeline;

/// GET /health - liveness probe
pub async fn health() -> &'static str {
    "OK"
}
