//! Database bootstrap for the catalog service

use anyhow::Result;
use common::{
    database::{DatabaseConfig, health_check, init_pool},
    error::DatabaseError,
};
use sqlx::PgPool;
use tracing::info;

/// Connect to PostgreSQL, check the connection and apply pending migrations
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = init_pool(config).await?;

    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    info!("Running database migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;
    info!("Database migrations completed");

    Ok(pool)
}
