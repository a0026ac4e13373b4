//! HTTP response DTOs.

use serde::Serialize;

/// Body returned by `POST /run-pipeline` once the run has completed.
#[derive(Debug, Serialize)]
pub struct RunPipelineResponse {
    pub status: String,
}

impl RunPipelineResponse {
    pub fn executed() -> Self {
        Self {
            status: "ML pipeline executed".to_string(),
        }
    }
}
