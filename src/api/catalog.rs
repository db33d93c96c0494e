//! Catalog endpoints

use super::AppState;
use crate::{
    core::catalog::{self, CatalogEntity, CatalogItemDto},
    entities::{FarmingTool, IrrigationSystem, Material, Plant},
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State},
};

async fn names<E: CatalogEntity>(state: &AppState, plural: &str) -> Result<Json<Vec<String>>> {
    let names = catalog::get_names::<E>(&state.db).await?;
    if names.is_empty() {
        return Err(Error::not_found(format!("No {plural} found.")));
    }
    Ok(Json(names))
}

async fn item<E: CatalogEntity>(
    state: &AppState,
    id: i64,
    singular: &str,
) -> Result<Json<CatalogItemDto>> {
    catalog::get_item_by_id::<E>(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::not_found(format!("{singular} with ID {id} not found.")))
}

/// `GET /AllPlants`
pub async fn list_plants(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    names::<Plant>(&state, "plants").await
}

/// `GET /AllMaterials`
pub async fn list_materials(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    names::<Material>(&state, "materials").await
}

/// `GET /AllFarmingTools`
pub async fn list_farming_tools(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    names::<FarmingTool>(&state, "farming tools").await
}

/// `GET /AllIrrigationSystems`
pub async fn list_irrigation_systems(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    names::<IrrigationSystem>(&state, "irrigation systems").await
}

/// `GET /Plant/{id}`
pub async fn get_plant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CatalogItemDto>> {
    item::<Plant>(&state, id, "Plant").await
}

/// `GET /Material/{id}`
pub async fn get_material(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CatalogItemDto>> {
    item::<Material>(&state, id, "Material").await
}

/// `GET /FarmingTool/{id}`
pub async fn get_farming_tool(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CatalogItemDto>> {
    item::<FarmingTool>(&state, id, "Farming tool").await
}

/// `GET /IrrigationSystem/{id}`
pub async fn get_irrigation_system(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CatalogItemDto>> {
    item::<IrrigationSystem>(&state, id, "Irrigation system").await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::config::catalog::{CatalogConfig, CatalogEntry};
    use crate::core::catalog::seed_catalog;
    use crate::test_utils::*;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_catalog_endpoints() {
        let (app, db) = test_app_with_db().await;

        let (status, body) = send(&app, Method::GET, "/api/Ghosn/AllPlants", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "No plants found.");

        let config = CatalogConfig {
            plants: vec![
                CatalogEntry {
                    name: "Mint".to_string(),
                    description: None,
                },
                CatalogEntry {
                    name: "Basil".to_string(),
                    description: Some("Aromatic herb".to_string()),
                },
            ],
            ..Default::default()
        };
        seed_catalog(&db, &config).await.unwrap();

        let (status, body) = send(&app, Method::GET, "/api/Ghosn/AllPlants", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["Basil", "Mint"]));

        let (status, body) = send(&app, Method::GET, "/api/Ghosn/Plant/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Basil");
        assert_eq!(body["description"], "Aromatic herb");

        let (status, _) = send(&app, Method::GET, "/api/Ghosn/Plant/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::GET, "/api/Ghosn/AllMaterials", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::GET, "/api/Ghosn/AllFarmingTools", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::GET, "/api/Ghosn/IrrigationSystem/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
