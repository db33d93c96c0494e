//! Prize endpoints
//!
//! "Today" is the server's local calendar date.

use super::{AppState, json_body, location};
use crate::{
    core::prize::{self, AddPrizeOutcome, DATE_TAKEN, PrizeDto},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDate};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `POST /Prizes/Add`
pub async fn add_prize(
    State(state): State<AppState>,
    body: std::result::Result<Json<PrizeDto>, JsonRejection>,
) -> Result<Response> {
    let dto = json_body(body)?;

    match prize::add_prize(&state.db, dto, today()).await? {
        AddPrizeOutcome::Added(created) => Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location(&format!("/Prizes/{}", created.prize_id)))],
            Json(created),
        )
            .into_response()),
        AddPrizeOutcome::DateTaken => Err(Error::validation(DATE_TAKEN)),
    }
}

/// `GET /Prizes/Coming`
pub async fn list_coming_prizes(State(state): State<AppState>) -> Result<Json<Vec<PrizeDto>>> {
    let prizes = prize::get_coming_prizes(&state.db, today()).await?;
    if prizes.is_empty() {
        return Err(Error::not_found("No coming prizes."));
    }
    Ok(Json(prizes))
}

/// `GET /Prizes/Nearest`
pub async fn get_nearest_prize(State(state): State<AppState>) -> Result<Json<PrizeDto>> {
    prize::get_nearest_prize(&state.db, today())
        .await?
        .map(Json)
        .ok_or_else(|| Error::not_found("No upcoming prize found."))
}

/// `GET /Prizes/{id}`
pub async fn get_prize(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PrizeDto>> {
    prize::get_prize_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::not_found(format!("Prize with ID {id} not found.")))
}
