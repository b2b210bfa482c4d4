// src/db.rs

use std::time::Duration;

use sqlx::{AnyPool, any::AnyPoolOptions};

use crate::config::Config;

const MAX_CONNECT_ATTEMPTS: u32 = 5;

/// Connects to `DATABASE_URL`, retrying while the database comes up.
///
/// Works for any URL scheme with a compiled-in driver (`postgres://`, `sqlite:`).
pub async fn connect_with_retry(config: &Config) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let mut attempt = 0;
    loop {
        match AnyPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&config.database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                attempt += 1;
                if attempt >= MAX_CONNECT_ATTEMPTS {
                    return Err(e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {}): {}", attempt, e);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
}
