//! Plan output entity - The recommendation attached to a plan.
//!
//! Suggested materials and tools live in `output_items`, the three-month
//! timeline in `timeline_steps`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plan output database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plan_outputs")]
pub struct Model {
    /// Unique identifier for the output
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning plan, one output per plan
    #[sea_orm(unique)]
    pub plan_id: i64,
    /// Recommended plant
    pub plant_name: String,
    /// Recommended irrigation system
    pub irrigation_system: String,
    /// Estimated total cost
    pub estimated_cost: Option<f64>,
    /// Free-text yield expectation
    pub expected_yield: Option<String>,
    /// Short overview of the recommendation
    pub summary: Option<String>,
}

/// Defines relationships between PlanOutput and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each output belongs to one plan
    #[sea_orm(
        belongs_to = "super::plan::Entity",
        from = "Column::PlanId",
        to = "super::plan::Column::Id",
        on_delete = "Cascade"
    )]
    Plan,
    /// Suggested materials and tools
    #[sea_orm(has_many = "super::output_item::Entity")]
    Items,
    /// Timeline steps across three months
    #[sea_orm(has_many = "super::timeline_step::Entity")]
    TimelineSteps,
}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl Related<super::output_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl Related<super::timeline_step::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimelineSteps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
