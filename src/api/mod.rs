//! HTTP interface - axum router, shared state and handlers.
//!
//! Handlers are thin: they check path ids, call into [`crate::core`] or the
//! [`AiProvider`], and pick the status code. Everything is mounted under
//! [`BASE_PATH`].

pub mod ai;
pub mod catalog;
pub mod clients;
pub mod error;
pub mod notifications;
pub mod plans;
pub mod prizes;
pub mod support;

use crate::{
    ai::AiProvider,
    errors::{Error, Result},
};
use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    routing::{get, post, put},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Prefix of every API route
pub const BASE_PATH: &str = "/api/Ghosn";

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Connection pool, shared with every handler
    pub db: Arc<DatabaseConnection>,
    /// AI backend, built once at startup
    pub ai: Arc<dyn AiProvider>,
}

/// Unwraps a JSON body, turning a malformed one into [`Error::Validation`].
pub(crate) fn json_body<T>(body: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| Error::validation(rejection.body_text()))
}

/// `Location` header value for a resource below [`BASE_PATH`].
pub(crate) fn location(path: &str) -> String {
    format!("{BASE_PATH}{path}")
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Clients
        .route("/Clients", get(clients::list_clients))
        .route("/Client", post(clients::add_client))
        .route(
            "/Client/:id",
            get(clients::get_client)
                .put(clients::update_client)
                .delete(clients::delete_client),
        )
        // Plans
        .route("/AllPlans", get(plans::list_plans))
        .route("/Plans/summaries", get(plans::list_plan_summaries))
        .route("/Plans/OrderByArea", get(plans::list_plans_by_area))
        .route("/Plan/ProduceWinner", get(plans::produce_winner))
        .route("/Plan/PlanID/:id", get(plans::get_plan))
        .route("/Plan/SetAsCompleted/:id", put(plans::set_plan_completed))
        .route(
            "/Plan/:id",
            get(plans::list_client_plans)
                .post(plans::add_plan)
                .put(plans::update_plan)
                .delete(plans::delete_plan),
        )
        // Catalogs
        .route("/AllPlants", get(catalog::list_plants))
        .route("/AllMaterials", get(catalog::list_materials))
        .route("/AllFarmingTools", get(catalog::list_farming_tools))
        .route("/AllIrrigationSystems", get(catalog::list_irrigation_systems))
        .route("/Plant/:id", get(catalog::get_plant))
        .route("/Material/:id", get(catalog::get_material))
        .route("/FarmingTool/:id", get(catalog::get_farming_tool))
        .route("/IrrigationSystem/:id", get(catalog::get_irrigation_system))
        // Notifications
        .route("/AllNotifications", get(notifications::list_notifications))
        .route(
            "/Notifications/AllClientNotifications",
            get(notifications::list_client_notifications),
        )
        .route("/Notification", post(notifications::add_notification))
        .route(
            "/Notification/:id",
            get(notifications::get_notification).delete(notifications::delete_notification),
        )
        // Prizes
        .route("/Prizes/Add", post(prizes::add_prize))
        .route("/Prizes/Coming", get(prizes::list_coming_prizes))
        .route("/Prizes/Nearest", get(prizes::get_nearest_prize))
        .route("/Prizes/:id", get(prizes::get_prize))
        // Support
        .route("/Support", post(support::add_support))
        // AI
        .route("/GeneratePlan", post(ai::generate_plan))
        .route("/Ai", post(ai::ask_ai))
        .route("/Tip", get(ai::tip))
        .route("/Suggestion", get(ai::suggestion))
}

/// Builds the application router with tracing and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Ghosn API is running." }))
        .nest(BASE_PATH, api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
