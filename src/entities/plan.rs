//! Plan entity - A client's cultivation record.
//!
//! Every plan owns exactly one input row (the agricultural parameters) and one
//! output row (the recommendation). The `area` column drives prize ranking.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plan database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plans")]
pub struct Model {
    /// Unique identifier for the plan
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning client
    pub client_id: i64,
    /// Cultivated area in square metres
    pub area: f64,
    /// Whether the client has finished the plan
    pub is_completed: bool,
    /// When the plan was created
    pub created_at: DateTime,
}

/// Defines relationships between Plan and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each plan belongs to one client
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_delete = "Cascade"
    )]
    Client,
    /// Agricultural parameters of the plan
    #[sea_orm(has_one = "super::plan_input::Entity")]
    Input,
    /// Recommendation attached to the plan
    #[sea_orm(has_one = "super::plan_output::Entity")]
    Output,
    /// Contributions made to the plan
    #[sea_orm(has_many = "super::support::Entity")]
    Supports,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::plan_input::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Input.def()
    }
}

impl Related<super::plan_output::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Output.def()
    }
}

impl Related<super::support::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Supports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
