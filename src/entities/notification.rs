//! Notification entity - A global announcement visible to every client.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Global notification database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    /// Unique identifier for the notification
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
    /// When the notification was created
    pub created_at: DateTime,
}

/// `Notification` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
