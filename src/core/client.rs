//! Client business logic - Handles registration and maintenance of clients.
//!
//! Passwords are accepted in clear text on the way in and stored only as bcrypt
//! hashes; [`ClientDto`] never serializes a password back out.

use crate::{
    entities::{Client, client},
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};
use serde::{Deserialize, Serialize};

#[cfg(not(test))]
const HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const HASH_COST: u32 = 4;

/// API-facing shape of a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDto {
    /// Assigned by the database; ignored on input
    #[serde(rename = "clientID")]
    pub client_id: i64,
    /// Login name, unique
    pub username: String,
    /// Write-only
    #[serde(skip_serializing)]
    pub password: String,
    /// Display name
    pub full_name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Registration time, set by the store
    pub created_at: Option<NaiveDateTime>,
}

impl From<client::Model> for ClientDto {
    fn from(model: client::Model) -> Self {
        Self {
            client_id: model.id,
            username: model.username,
            password: String::new(),
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            created_at: Some(model.created_at),
        }
    }
}

fn validate_credentials(dto: &ClientDto) -> Result<()> {
    if dto.username.trim().is_empty() || dto.password.trim().is_empty() {
        return Err(Error::validation("Invalid client data."));
    }
    Ok(())
}

fn username_taken(username: &str) -> String {
    format!("Username '{username}' is already taken.")
}

/// Retrieves all clients ordered by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_clients(db: &DatabaseConnection) -> Result<Vec<ClientDto>> {
    let clients = Client::find()
        .order_by_asc(client::Column::Id)
        .all(db)
        .await?;
    Ok(clients.into_iter().map(ClientDto::from).collect())
}

/// Retrieves a client by id, `None` when it does not exist.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Option<ClientDto>> {
    let client = Client::find_by_id(client_id).one(db).await?;
    Ok(client.map(ClientDto::from))
}

/// Registers a new client.
///
/// # Errors
/// Returns an error if:
/// - The username or password is blank ([`Error::Validation`])
/// - The username is already registered ([`Error::Conflict`])
/// - Hashing or the database insert fails
pub async fn add_client(db: &DatabaseConnection, dto: ClientDto) -> Result<ClientDto> {
    validate_credentials(&dto)?;

    let username = dto.username.trim().to_string();
    let password_hash = bcrypt::hash(&dto.password, HASH_COST)?;

    let client = client::ActiveModel {
        username: Set(username.clone()),
        password_hash: Set(password_hash),
        full_name: Set(dto.full_name),
        email: Set(dto.email),
        phone: Set(dto.phone),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };

    let created = client
        .insert(db)
        .await
        .map_err(|e| Error::conflict_on_unique(e, username_taken(&username)))?;
    Ok(created.into())
}

/// Replaces every editable field of a client with a single conditional update.
///
/// Returns `None` when no client has the given id.
///
/// # Errors
/// Returns an error if:
/// - The username or password is blank ([`Error::Validation`])
/// - The new username belongs to another client ([`Error::Conflict`])
/// - Hashing or the database update fails
pub async fn update_client(
    db: &DatabaseConnection,
    client_id: i64,
    dto: ClientDto,
) -> Result<Option<ClientDto>> {
    validate_credentials(&dto)?;

    let username = dto.username.trim().to_string();
    let password_hash = bcrypt::hash(&dto.password, HASH_COST)?;

    let result = Client::update_many()
        .col_expr(client::Column::Username, Expr::value(username.clone()))
        .col_expr(client::Column::PasswordHash, Expr::value(password_hash))
        .col_expr(client::Column::FullName, Expr::value(dto.full_name))
        .col_expr(client::Column::Email, Expr::value(dto.email))
        .col_expr(client::Column::Phone, Expr::value(dto.phone))
        .filter(client::Column::Id.eq(client_id))
        .exec(db)
        .await
        .map_err(|e| Error::conflict_on_unique(e, username_taken(&username)))?;

    if result.rows_affected == 0 {
        return Ok(None);
    }
    get_client_by_id(db, client_id).await
}

/// Deletes a client together with its plans and notifications.
///
/// Returns `false` when no client has the given id.
///
/// # Errors
/// Returns an error if the database delete fails.
pub async fn delete_client(db: &DatabaseConnection, client_id: i64) -> Result<bool> {
    let result = Client::delete_by_id(client_id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
