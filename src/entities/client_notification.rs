//! Client notification entity - A notification addressed to a single client.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client-scoped notification database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_notifications")]
pub struct Model {
    /// Unique identifier for the notification
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Recipient client
    pub client_id: i64,
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
    /// When the notification was created
    pub created_at: DateTime,
}

/// Defines relationships between ClientNotification and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each notification belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_delete = "Cascade"
    )]
    Client,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
