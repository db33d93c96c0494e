//! Client endpoints

use super::{AppState, json_body, location};
use crate::{
    core::client::{self, ClientDto},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

fn client_not_found(id: i64) -> Error {
    Error::not_found(format!("Client with ID {id} not found."))
}

/// `GET /Clients`
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<ClientDto>>> {
    let clients = client::get_all_clients(&state.db).await?;
    if clients.is_empty() {
        return Err(Error::not_found("No clients found."));
    }
    Ok(Json(clients))
}

/// `GET /Client/{id}`
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClientDto>> {
    client::get_client_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| client_not_found(id))
}

/// `POST /Client`
pub async fn add_client(
    State(state): State<AppState>,
    body: std::result::Result<Json<ClientDto>, JsonRejection>,
) -> Result<Response> {
    let dto = json_body(body)?;
    let created = client::add_client(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&format!("/Client/{}", created.client_id)))],
        Json(created),
    )
        .into_response())
}

/// `PUT /Client/{id}`
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: std::result::Result<Json<ClientDto>, JsonRejection>,
) -> Result<Json<ClientDto>> {
    if id < 1 {
        return Err(Error::validation("Invalid client data or ID mismatch."));
    }
    let dto = json_body(body)?;

    client::update_client(&state.db, id, dto)
        .await?
        .map(Json)
        .ok_or_else(|| client_not_found(id))
}

/// `DELETE /Client/{id}`
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String> {
    if id <= 0 {
        return Err(Error::validation("Invalid Client ID."));
    }

    if client::delete_client(&state.db, id).await? {
        Ok(format!("Client with ID {id} has been deleted."))
    } else {
        Err(client_not_found(id))
    }
}
