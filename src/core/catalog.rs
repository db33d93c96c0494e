//! Catalog business logic - Plants, materials, farming tools and irrigation systems.
//!
//! The four catalog tables share one `id, name, description` layout, so every
//! operation here is written once against [`CatalogEntity`].

use crate::{
    config::catalog::{CatalogConfig, CatalogEntry},
    entities::{
        FarmingTool, IrrigationSystem, Material, Plant, farming_tool, irrigation_system, material,
        plant,
    },
    errors::Result,
};
use sea_orm::{ActiveModelTrait, QueryOrder, QuerySelect, prelude::*};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// A catalog table with `id`, `name` and `description` columns
pub trait CatalogEntity: EntityTrait {
    const ID: Self::Column;
    const NAME: Self::Column;
    const DESCRIPTION: Self::Column;
}

impl CatalogEntity for Plant {
    const ID: plant::Column = plant::Column::Id;
    const NAME: plant::Column = plant::Column::Name;
    const DESCRIPTION: plant::Column = plant::Column::Description;
}

impl CatalogEntity for Material {
    const ID: material::Column = material::Column::Id;
    const NAME: material::Column = material::Column::Name;
    const DESCRIPTION: material::Column = material::Column::Description;
}

impl CatalogEntity for FarmingTool {
    const ID: farming_tool::Column = farming_tool::Column::Id;
    const NAME: farming_tool::Column = farming_tool::Column::Name;
    const DESCRIPTION: farming_tool::Column = farming_tool::Column::Description;
}

impl CatalogEntity for IrrigationSystem {
    const ID: irrigation_system::Column = irrigation_system::Column::Id;
    const NAME: irrigation_system::Column = irrigation_system::Column::Name;
    const DESCRIPTION: irrigation_system::Column = irrigation_system::Column::Description;
}

/// One catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    /// Row id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
}

/// Retrieves every name in a catalog table, ordered by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_names<E: CatalogEntity>(db: &DatabaseConnection) -> Result<Vec<String>> {
    let names = E::find()
        .select_only()
        .column(E::NAME)
        .order_by_asc(E::NAME)
        .into_tuple::<String>()
        .all(db)
        .await?;
    Ok(names)
}

/// Retrieves one catalog record by id, `None` when it does not exist.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_item_by_id<E: CatalogEntity>(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<CatalogItemDto>> {
    let row: Option<(i64, String, Option<String>)> = E::find()
        .select_only()
        .column(E::ID)
        .column(E::NAME)
        .column(E::DESCRIPTION)
        .filter(E::ID.eq(id))
        .into_tuple()
        .one(db)
        .await?;

    Ok(row.map(|(id, name, description)| CatalogItemDto {
        id,
        name,
        description,
    }))
}

async fn seed_table<E: CatalogEntity>(
    db: &DatabaseConnection,
    entries: &[CatalogEntry],
) -> Result<usize> {
    let mut known: HashSet<String> = get_names::<E>(db).await?.into_iter().collect();

    let models: Vec<E::ActiveModel> = entries
        .iter()
        .filter(|entry| !entry.name.trim().is_empty())
        .filter(|entry| known.insert(entry.name.trim().to_string()))
        .map(|entry| {
            let mut model = <E::ActiveModel as ActiveModelTrait>::default();
            model.set(E::NAME, entry.name.trim().to_string().into());
            model.set(E::DESCRIPTION, entry.description.clone().into());
            model
        })
        .collect();

    let inserted = models.len();
    if inserted > 0 {
        E::insert_many(models).exec(db).await?;
    }

    let entity = E::default();
    info!(table = entity.table_name(), inserted, "Seeded catalog table");
    Ok(inserted)
}

/// Inserts the configured catalog entries whose names are not stored yet.
///
/// Returns the number of rows inserted across all four tables.
///
/// # Errors
/// Returns an error if a database operation fails.
pub async fn seed_catalog(db: &DatabaseConnection, config: &CatalogConfig) -> Result<usize> {
    let mut inserted = seed_table::<Plant>(db, &config.plants).await?;
    inserted += seed_table::<Material>(db, &config.materials).await?;
    inserted += seed_table::<FarmingTool>(db, &config.farming_tools).await?;
    inserted += seed_table::<IrrigationSystem>(db, &config.irrigation_systems).await?;
    Ok(inserted)
}
