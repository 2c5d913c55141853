//! Inbound HTTP surface for triage-desk.
//!
//! Thin plumbing: one route, `POST /ask`, which hands the question to the
//! orchestrator and serializes its outcome. Only fatal-to-run errors reach the
//! caller, flattened into a generic error payload.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde::Serialize;
use tracing::{error, instrument};

use crate::{
    base::types::{TriageOutcome, TriageRequest},
    triage::Triage,
};

/// Error payload returned on a fatal triage failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

/// Build the axum Router with the triage route.
pub fn build_router(triage: Triage) -> Router {
    Router::new().route("/ask", post(ask)).with_state(triage)
}

/// POST /ask — run the triage pipeline for one question.
#[instrument(skip_all)]
async fn ask(State(triage): State<Triage>, Json(request): Json<TriageRequest>) -> Result<Json<TriageOutcome>, (StatusCode, Json<ErrorBody>)> {
    match triage.triage(&request.question).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(err) => {
            error!("Triage run failed: {err:#}");

            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Unable to process the request.".to_string(),
                    details: format!("{err:#}"),
                }),
            ))
        }
    }
}
