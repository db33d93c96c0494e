#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use ghosn::{
    ai::gemini::GeminiClient,
    api::{self, AppState},
    config::{catalog, database, settings::Settings},
    core,
    errors::Result,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also come from the environment
    dotenv().ok();

    // 3. Runtime settings
    let settings = Settings::from_env()
        .inspect_err(|e| error!("Failed to read settings: {}", e))?;
    info!(bind_addr = %settings.bind_addr, "Settings loaded");

    // 4. Database and schema
    let db = database::create_connection(&settings.database_url)
        .await
        .inspect_err(|e| error!("Failed to open database: {}", e))?;
    database::create_tables(&db).await?;

    // 5. Seed catalogs; a missing config file only skips seeding
    match catalog::load_config(&settings.config_path) {
        Ok(config) => {
            let inserted = core::catalog::seed_catalog(&db, &config.catalog).await?;
            info!(inserted, "Catalog seeding finished");
        }
        Err(e) => warn!("Skipping catalog seeding: {}", e),
    }

    // 6. AI provider, shared by every request
    if settings.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; AI endpoints will answer with an error");
    }
    let ai = GeminiClient::new(&settings.gemini)?;

    // 7. Serve
    let app = api::router(AppState {
        db: Arc::new(db),
        ai: Arc::new(ai),
    });
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    info!("Listening on {}", settings.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
