//! Axum route handler for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::prompts::build_prompt;
use crate::generation::request::JobDescriptionRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDescription {
    pub job_description: String,
}

/// POST /generate-job-description
///
/// Validates the ten posting fields, renders the prompt, and returns the
/// provider's first completion trimmed of surrounding whitespace.
pub async fn handle_generate_job_description(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GeneratedDescription>, AppError> {
    let Json(body) = payload.map_err(|rejection| AppError::Unexpected(rejection.body_text()))?;

    let posting = JobDescriptionRequest::from_json(body)?.validate()?;
    let prompt = build_prompt(&posting);
    debug!("Rendered prompt ({} bytes) for '{}'", prompt.len(), posting.position);

    let completion = state.llm.complete(&prompt).await?;
    let job_description = completion.trim().to_string();

    info!(
        "Generated job description for '{}' ({} chars)",
        posting.position,
        job_description.len()
    );

    Ok(Json(GeneratedDescription { job_description }))
}
