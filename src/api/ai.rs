//! AI endpoints
//!
//! Every provider failure is answered with 400 `Error: <message>`.

use super::{AppState, json_body};
use crate::{
    core::plan::{PlanInputDto, PlanOutputDto},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /Ai`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AiPromptRequest {
    /// Question for the model
    pub prompt: String,
}

/// Text answer wrapper, `{ "res": ... }`
#[derive(Debug, Serialize, Deserialize)]
pub struct AiResponse {
    /// Model answer
    pub res: String,
}

fn provider_error(err: Error) -> Error {
    match err {
        ai @ Error::Ai { .. } => ai,
        other => Error::Ai {
            message: other.to_string(),
        },
    }
}

/// `POST /GeneratePlan`
pub async fn generate_plan(
    State(state): State<AppState>,
    body: std::result::Result<Json<PlanInputDto>, JsonRejection>,
) -> Result<Json<PlanOutputDto>> {
    let input = json_body(body)?;

    state
        .ai
        .generate_plan(&input)
        .await
        .map_err(provider_error)?
        .map(Json)
        .ok_or_else(|| Error::validation("Try again later"))
}

/// `POST /Ai`
pub async fn ask_ai(
    State(state): State<AppState>,
    body: std::result::Result<Json<AiPromptRequest>, JsonRejection>,
) -> Result<Json<AiResponse>> {
    let request = json_body(body).unwrap_or_default();
    if request.prompt.trim().is_empty() {
        return Err(Error::validation("Prompt is required."));
    }

    let res = state.ai.ask(&request.prompt).await.map_err(provider_error)?;
    Ok(Json(AiResponse { res }))
}

/// `GET /Tip`
pub async fn tip(State(state): State<AppState>) -> Result<Json<AiResponse>> {
    let res = state.ai.tip().await.map_err(provider_error)?;
    Ok(Json(AiResponse { res }))
}

/// `GET /Suggestion`
pub async fn suggestion(State(state): State<AppState>) -> Result<Json<AiResponse>> {
    let res = state.ai.suggestion().await.map_err(provider_error)?;
    Ok(Json(AiResponse { res }))
}
