//! Shared test utilities for Ghosn.
//!
//! Database helpers set up in-memory `SQLite` with every table created. HTTP
//! helpers drive the full router with `tower::ServiceExt::oneshot`.
#![allow(clippy::unwrap_used)]

use crate::{
    ai::AiProvider,
    api::{AppState, router},
    core::{
        client::{self, ClientDto},
        plan::{self, PlanDto, PlanInputDto, PlanOutputDto, TimelineDto},
    },
    errors::{Error, Result},
};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a client with password `secret`.
pub async fn create_test_client(db: &DatabaseConnection, username: &str) -> Result<ClientDto> {
    client::add_client(
        db,
        ClientDto {
            username: username.to_string(),
            password: "secret".to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Fresh database plus one client named `farmer`.
pub async fn setup_with_client() -> Result<(DatabaseConnection, ClientDto)> {
    let db = setup_test_db().await?;
    let client = create_test_client(&db, "farmer").await?;
    Ok((db, client))
}

/// A complete plan body: tomato on sandy loam with a short timeline.
pub fn sample_plan_dto(area: f64) -> PlanDto {
    PlanDto {
        area,
        input: Some(PlanInputDto {
            location: "Riyadh".to_string(),
            soil_type: "Sandy loam".to_string(),
            water_source: "Municipal".to_string(),
            space_type: "Backyard".to_string(),
            budget: Some(500.0),
            season: Some("Spring".to_string()),
            preferred_plant: None,
        }),
        output: Some(PlanOutputDto {
            plant_name: "Tomato".to_string(),
            irrigation_system: "Drip irrigation".to_string(),
            estimated_cost: Some(350.0),
            expected_yield: Some("20 kg".to_string()),
            summary: Some("Tomatoes in raised beds with drip lines.".to_string()),
            materials: vec!["Compost".to_string(), "Mulch".to_string()],
            farming_tools: vec!["Shovel".to_string()],
            timeline: TimelineDto {
                first_month: vec![
                    "Prepare raised beds".to_string(),
                    "Install drip lines".to_string(),
                ],
                second_month: vec!["Stake seedlings".to_string()],
                third_month: vec!["Harvest ripe fruit".to_string()],
            },
        }),
        ..Default::default()
    }
}

/// Stores [`sample_plan_dto`] for `client_id` with the given area.
pub async fn create_test_plan(
    db: &DatabaseConnection,
    client_id: i64,
    area: f64,
) -> Result<PlanDto> {
    plan::add_plan_with_details(db, client_id, sample_plan_dto(area)).await
}

/// Canned [`AiProvider`] that counts calls.
pub struct StubAi {
    answer: std::result::Result<String, String>,
    plan: Option<PlanOutputDto>,
    calls: AtomicUsize,
}

impl StubAi {
    /// Answers every text call with `text` and every plan call with the sample output.
    pub fn answering(text: &str) -> Self {
        Self {
            answer: Ok(text.to_string()),
            plan: sample_plan_dto(0.0).output,
            calls: AtomicUsize::new(0),
        }
    }

    /// Succeeds but never produces a plan.
    pub fn without_plan() -> Self {
        Self {
            plan: None,
            ..Self::answering("")
        }
    }

    /// Fails every call with an AI error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            plan: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of provider calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
            .clone()
            .map_err(|message| Error::Ai { message })
    }
}

#[async_trait]
impl AiProvider for StubAi {
    async fn generate_plan(&self, _input: &PlanInputDto) -> Result<Option<PlanOutputDto>> {
        self.respond()?;
        Ok(self.plan.clone())
    }

    async fn ask(&self, _prompt: &str) -> Result<String> {
        self.respond()
    }

    async fn tip(&self) -> Result<String> {
        self.respond()
    }

    async fn suggestion(&self) -> Result<String> {
        self.respond()
    }
}

/// Router over a fresh database with the given AI stub.
pub async fn test_app_with_ai(ai: Arc<StubAi>) -> Router {
    let db = setup_test_db().await.unwrap();
    router(AppState {
        db: Arc::new(db),
        ai,
    })
}

/// Router over the given connection, e.g. a `MockDatabase` scripted to fail.
pub fn test_app_with_connection(db: DatabaseConnection) -> Router {
    router(AppState {
        db: Arc::new(db),
        ai: Arc::new(StubAi::answering("ok")),
    })
}

/// Router over a fresh database, also returning the shared connection for seeding.
pub async fn test_app_with_db() -> (Router, Arc<DatabaseConnection>) {
    let db = Arc::new(setup_test_db().await.unwrap());
    let state = AppState {
        db: Arc::clone(&db),
        ai: Arc::new(StubAi::answering("ok")),
    };
    (router(state), db)
}

/// Router over a fresh database with an answering AI stub.
pub async fn test_app() -> Router {
    test_app_with_ai(Arc::new(StubAi::answering("ok"))).await
}

/// Sends one request through the router.
pub async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Reads a response body as JSON, or as a JSON string when it is plain text.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Sends one request and returns its status with the decoded body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let response = request(app, method, uri, body).await;
    let status = response.status();
    (status, body_json(response).await)
}
