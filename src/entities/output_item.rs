//! Output item entity - A material or farming tool suggested by a plan output.
//! `kind` is `"material"` or `"farming_tool"`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Output item database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "output_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning plan output
    pub output_id: i64,
    /// `material` or `farming_tool`
    pub kind: String,
    /// Item name
    pub name: String,
}

/// Defines relationships between OutputItem and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one plan output
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
