//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs. Creation is idempotent (`IF NOT EXISTS`),
//! which lets the server start against an existing database file.

use crate::entities::{
    Client, ClientNotification, FarmingTool, IrrigationSystem, Material, Notification,
    OutputItem, Plan, PlanInput, PlanOutput, Plant, Prize, Support, TimelineStep,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info, instrument};

/// Establishes a connection to the database at `database_url`.
///
/// # Errors
/// Returns an error if the URL is malformed or the database cannot be opened.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection");
    Database::connect(database_url).await.map_err(Into::into)
}

async fn create_table<E>(db: &DatabaseConnection, schema: &Schema, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

/// Creates all necessary database tables from the entity definitions.
///
/// Parent tables are created before the tables that reference them.
///
/// # Errors
/// Returns an error if any `CREATE TABLE` statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, Client).await?;
    create_table(db, &schema, Plan).await?;
    create_table(db, &schema, PlanInput).await?;
    create_table(db, &schema, PlanOutput).await?;
    create_table(db, &schema, OutputItem).await?;
    create_table(db, &schema, TimelineStep).await?;
    create_table(db, &schema, Support).await?;

    create_table(db, &schema, Plant).await?;
    create_table(db, &schema, Material).await?;
    create_table(db, &schema, FarmingTool).await?;
    create_table(db, &schema, IrrigationSystem).await?;

    create_table(db, &schema, Notification).await?;
    create_table(db, &schema, ClientNotification).await?;
    create_table(db, &schema, Prize).await?;

    info!("Database tables ensured.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _ = Client::find().limit(1).all(&db).await?;
        let _ = Plan::find().limit(1).all(&db).await?;
        let _ = PlanInput::find().limit(1).all(&db).await?;
        let _ = PlanOutput::find().limit(1).all(&db).await?;
        let _ = TimelineStep::find().limit(1).all(&db).await?;
        let _ = Plant::find().limit(1).all(&db).await?;
        let _ = Notification::find().limit(1).all(&db).await?;
        let _ = Prize::find().limit(1).all(&db).await?;
        let _ = Support::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
