//! Notification endpoints

use super::{AppState, json_body, location};
use crate::{
    core::notification::{self, NotificationDto},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// A `/Notification/{key}` path segment
#[derive(Debug, PartialEq, Eq)]
enum NotificationKey {
    /// A global notification id
    Id(i64),
    /// `ClientID=N`, a client's notifications
    ClientId(i64),
}

fn parse_key(raw: &str) -> Result<NotificationKey> {
    let invalid = || Error::validation(format!("'{raw}' is not a valid notification key."));
    match raw.strip_prefix("ClientID=") {
        Some(client_id) => client_id
            .parse()
            .map(NotificationKey::ClientId)
            .map_err(|_| invalid()),
        None => raw.parse().map(NotificationKey::Id).map_err(|_| invalid()),
    }
}

/// `GET /AllNotifications`
pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationDto>>> {
    let notifications = notification::get_all_notifications(&state.db).await?;
    if notifications.is_empty() {
        return Err(Error::not_found("No notifications found."));
    }
    Ok(Json(notifications))
}

/// `GET /Notifications/AllClientNotifications`
pub async fn list_client_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationDto>>> {
    let notifications = notification::get_all_client_notifications(&state.db).await?;
    if notifications.is_empty() {
        return Err(Error::not_found("No client notifications found."));
    }
    Ok(Json(notifications))
}

/// `GET /Notification/{id}` and `GET /Notification/ClientID={clientId}`
pub async fn get_notification(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    match parse_key(&key)? {
        NotificationKey::Id(id) => notification::get_notification_by_id(&state.db, id)
            .await?
            .map(|found| Json(found).into_response())
            .ok_or_else(|| Error::not_found(format!("Notification with ID {id} not found."))),
        NotificationKey::ClientId(client_id) => {
            let notifications =
                notification::get_notifications_by_client_id(&state.db, client_id).await?;
            if notifications.is_empty() {
                return Err(Error::not_found(format!(
                    "No notifications found for ClientID: {client_id}"
                )));
            }
            Ok(Json(notifications).into_response())
        }
    }
}

/// `POST /Notification`
pub async fn add_notification(
    State(state): State<AppState>,
    body: std::result::Result<Json<NotificationDto>, JsonRejection>,
) -> Result<Response> {
    let dto = json_body(body)?;
    let created = notification::add_notification(&state.db, dto).await?;

    let path = match created.client_id {
        Some(client_id) => format!("/Notification/ClientID={client_id}"),
        None => format!("/Notification/{}", created.notification_id),
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&path))],
        Json(created),
    )
        .into_response())
}

/// `DELETE /Notification/{id}`
///
/// Store failures are reported as 400 with their message.
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode> {
    let id = match parse_key(&key) {
        Ok(NotificationKey::Id(id)) if id > 0 => id,
        _ => return Err(Error::validation("Invalid Notification ID.")),
    };

    let deleted = notification::delete_notification(&state.db, id)
        .await
        .map_err(|e| Error::validation(e.to_string()))?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::not_found(format!("Notification with ID {id} not found.")))
    }
}
