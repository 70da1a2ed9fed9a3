// src/db.rs
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Pool, Postgres};

use crate::config::Config;

pub async fn create_pool(config: &Config) -> Result<Pool<Postgres>, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options.clone())
        .await
}

/// Apply the schema under `migrations/`.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// Pool for store-backed tests. Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.
#[cfg(test)]
pub(crate) async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("pool creation failed");
    migrate(&pool).await.expect("migrations failed");
    pool
}

/// Pool that never connects unless a query runs; for routes that fail before
/// reaching the store.
#[cfg(test)]
pub(crate) fn lazy_pool() -> PgPool {
    PgPoolOptions::new()
        .connect_lazy("postgres://localhost/poll_backend_test")
        .expect("valid url")
}
