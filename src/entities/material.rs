//! Material entity - A material used when setting up a plot (soil mix, fertiliser, containers).
//!
//! Catalog table, seeded from `config.toml` and read mostly as a name list.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Material database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name, unique within the catalog
    #[sea_orm(unique)]
    pub name: String,
    /// Optional longer description
    pub description: Option<String>,
}

/// `Material` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
