//! Support endpoint

use super::{AppState, json_body};
use crate::{
    core::support::{self, SupportDto},
    errors::Result,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

/// `POST /Support`
pub async fn add_support(
    State(state): State<AppState>,
    body: std::result::Result<Json<SupportDto>, JsonRejection>,
) -> Result<&'static str> {
    let dto = json_body(body)?;
    let plan_id = dto.plan_id;
    let support_id = support::add_support(&state.db, dto).await?;
    info!(support_id, plan_id, "Support added");
    Ok("Added.")
}
