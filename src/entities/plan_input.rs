//! Plan input entity - The agricultural parameters a plan was built from.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plan input database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plan_inputs")]
pub struct Model {
    /// Unique identifier for the input
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning plan, one input per plan
    #[sea_orm(unique)]
    pub plan_id: i64,
    /// City or region of the plot
    pub location: String,
    /// Soil description (e.g., "sandy", "clay")
    pub soil_type: String,
    /// Where irrigation water comes from
    pub water_source: String,
    /// Kind of space being cultivated (e.g., "rooftop", "backyard")
    pub space_type: String,
    /// Available budget
    pub budget: Option<f64>,
    /// Planting season
    pub season: Option<String>,
    /// Plant the client would like to grow, if any
    pub preferred_plant: Option<String>,
}

/// Defines relationships between PlanInput and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each input belongs to one plan
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
