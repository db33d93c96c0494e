//! Client entity - A registered farmer who owns plans and receives notifications.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    /// Unique identifier for the client
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name, unique across clients
    #[sea_orm(unique)]
    pub username: String,
    /// Bcrypt hash of the client's password
    pub password_hash: String,
    /// Display name
    pub full_name: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// When the client was registered
    pub created_at: DateTime,
}

/// Defines relationships between Client and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One client has many plans
    #[sea_orm(has_many = "super::plan::Entity")]
    Plans,
    /// One client has many scoped notifications
    #[sea_orm(has_many = "super::client_notification::Entity")]
    Notifications,
}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plans.def()
    }
}

impl Related<super::client_notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
