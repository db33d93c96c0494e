//! Support entity - A monetary contribution or a tool donation attached to a plan.
//!
//! At least one of `price` and `farming_tool` is always set.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Support database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supports")]
pub struct Model {
    /// Unique identifier for the support
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Supported plan
    pub plan_id: i64,
    /// Money contributed
    pub price: Option<f64>,
    /// Tool donated
    pub farming_tool: Option<String>,
    /// Who made the contribution
    pub supporter_name: Option<String>,
    /// When the support was recorded
    pub created_at: DateTime,
}

/// Defines relationships between Support and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each support belongs to one plan
    #[sea_orm(
        belongs_to = "super::plan::Entity",
        from = "Column::PlanId",
        to = "super::plan::Column::Id",
        on_delete = "Cascade"
    )]
    Plan,
}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
