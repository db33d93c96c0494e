//! Timeline step entity - One step of a plan output's suggested three-month timeline.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Timeline step database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timeline_steps")]
pub struct Model {
    /// Unique identifier for the step
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning plan output
    pub output_id: i64,
    /// Month of the timeline, 1 through 3
    pub month: i32,
    /// Order of the step within its month
    pub position: i32,
    /// Step description
    pub step: String,
}

/// Defines relationships between TimelineStep and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each step belongs to one plan output
    #[sea_orm(
        belongs_to = "super::plan_output::Entity",
        from = "Column::OutputId",
        to = "super::plan_output::Column::Id",
        on_delete = "Cascade"
    )]
    Output,
}

impl Related<super::plan_output::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Output.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
