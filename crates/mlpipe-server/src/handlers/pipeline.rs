//! Pipeline execution HTTP handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use mlpipe_runner::PipelinePayload;

use crate::dto::RunPipelineResponse;
use crate::ServerState;

/// POST /run-pipeline - execute the ML pipelines and acknowledge completion.
///
/// The payload is accepted as-is; its contents do not influence the run.
pub async fn run(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<PipelinePayload>,
) -> Json<RunPipelineResponse> {
    state.runner.run(&payload).await;
    Json(RunPipelineResponse::executed())
}
