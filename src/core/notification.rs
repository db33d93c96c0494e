//! Notification business logic - Global and client-scoped notifications.

use crate::{
    entities::{Client, ClientNotification, Notification, client_notification, notification},
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Shape shared by both notification kinds.
///
/// `client_id` is `None` for global notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationDto {
    /// Notification id
    #[serde(rename = "notificationID")]
    pub notification_id: i64,
    /// Recipient client
    #[serde(rename = "clientID")]
    pub client_id: Option<i64>,
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
    /// Creation time, set by the store
    pub created_at: Option<NaiveDateTime>,
}

impl From<notification::Model> for NotificationDto {
    fn from(model: notification::Model) -> Self {
        Self {
            notification_id: model.id,
            client_id: None,
            title: model.title,
            message: model.message,
            created_at: Some(model.created_at),
        }
    }
}

impl From<client_notification::Model> for NotificationDto {
    fn from(model: client_notification::Model) -> Self {
        Self {
            notification_id: model.id,
            client_id: Some(model.client_id),
            title: model.title,
            message: model.message,
            created_at: Some(model.created_at),
        }
    }
}

/// Retrieves all global notifications ordered by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_notifications(db: &DatabaseConnection) -> Result<Vec<NotificationDto>> {
    let notifications = Notification::find()
        .order_by_asc(notification::Column::Id)
        .all(db)
        .await?;
    Ok(notifications.into_iter().map(NotificationDto::from).collect())
}

/// Retrieves all client-scoped notifications ordered by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_client_notifications(
    db: &DatabaseConnection,
) -> Result<Vec<NotificationDto>> {
    let notifications = ClientNotification::find()
        .order_by_asc(client_notification::Column::Id)
        .all(db)
        .await?;
    Ok(notifications.into_iter().map(NotificationDto::from).collect())
}

/// Retrieves a global notification by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_notification_by_id(
    db: &DatabaseConnection,
    notification_id: i64,
) -> Result<Option<NotificationDto>> {
    let notification = Notification::find_by_id(notification_id).one(db).await?;
    Ok(notification.map(NotificationDto::from))
}

/// Retrieves the notifications addressed to one client.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_notifications_by_client_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Vec<NotificationDto>> {
    let notifications = ClientNotification::find()
        .filter(client_notification::Column::ClientId.eq(client_id))
        .order_by_asc(client_notification::Column::Id)
        .all(db)
        .await?;
    Ok(notifications.into_iter().map(NotificationDto::from).collect())
}

/// Creates a notification, client-scoped when `client_id` is set and global otherwise.
///
/// # Errors
/// Returns an error if:
/// - The title or message is blank ([`Error::Validation`])
/// - The addressed client does not exist ([`Error::NotFound`])
/// - The database insert fails
pub async fn add_notification(
    db: &DatabaseConnection,
    dto: NotificationDto,
) -> Result<NotificationDto> {
    if dto.title.trim().is_empty() || dto.message.trim().is_empty() {
        return Err(Error::validation("Title and message are required."));
    }

    let created_at = chrono::Utc::now().naive_utc();

    match dto.client_id {
        Some(client_id) => {
            if Client::find_by_id(client_id).one(db).await?.is_none() {
                return Err(Error::not_found(format!(
                    "Client with ID {client_id} not found."
                )));
            }

            let created = client_notification::ActiveModel {
                client_id: Set(client_id),
                title: Set(dto.title),
                message: Set(dto.message),
                created_at: Set(created_at),
                ..Default::default()
            }
            .insert(db)
            .await?;
            Ok(created.into())
        }
        None => {
            let created = notification::ActiveModel {
                title: Set(dto.title),
                message: Set(dto.message),
                created_at: Set(created_at),
                ..Default::default()
            }
            .insert(db)
            .await?;
            Ok(created.into())
        }
    }
}

/// Deletes a global notification.
///
/// Returns `false` when no notification has the given id.
///
/// # Errors
/// Returns an error if the database delete fails.
pub async fn delete_notification(db: &DatabaseConnection, notification_id: i64) -> Result<bool> {
    let result = Notification::delete_by_id(notification_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn dto(client_id: Option<i64>, title: &str, message: &str) -> NotificationDto {
        NotificationDto {
            client_id,
            title: title.to_string(),
            message: message.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_notification_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        for (title, message) in [("", "body"), ("Title", "  "), (" ", "")] {
            let result = add_notification(&db, dto(None, title, message)).await;
            assert!(matches!(result.unwrap_err(), Error::Validation { .. }));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_add_global_notification() -> Result<()> {
        let db = setup_test_db().await?;

        let created = add_notification(&db, dto(None, "Rain", "Heavy rain tomorrow")).await?;
        assert!(created.notification_id > 0);
        assert!(created.client_id.is_none());

        let fetched = get_notification_by_id(&db, created.notification_id)
            .await?
            .unwrap();
        assert_eq!(fetched, created);
        assert_eq!(get_all_notifications(&db).await?.len(), 1);
        assert!(get_all_client_notifications(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_client_notification() -> Result<()> {
        let (db, client) = setup_with_client().await?;

        let created = add_notification(
            &db,
            dto(Some(client.client_id), "Reminder", "Water the seedlings"),
        )
        .await?;
        assert_eq!(created.client_id, Some(client.client_id));

        let for_client = get_notifications_by_client_id(&db, client.client_id).await?;
        assert_eq!(for_client, vec![created]);
        assert!(get_notifications_by_client_id(&db, 999).await?.is_empty());
        assert!(get_all_notifications(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_notification_unknown_client() -> Result<()> {
        let db = setup_test_db().await?;

        let result = add_notification(&db, dto(Some(42), "Reminder", "Hello")).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_notification() -> Result<()> {
        let db = setup_test_db().await?;
        let created = add_notification(&db, dto(None, "Rain", "Heavy rain")).await?;

        assert!(delete_notification(&db, created.notification_id).await?);
        assert!(get_notification_by_id(&db, created.notification_id).await?.is_none());
        assert!(!delete_notification(&db, created.notification_id).await?);

        Ok(())
    }
}
