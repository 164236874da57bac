//! PostgreSQL pool.

use foodbank_config::PoolSettings;
use sqlx::PgPool;
use sqlx::postgres::Postgres;

use crate::{DbError, pool_options};

/// Opens a PostgreSQL pool, failing if the server cannot be reached.
pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<PgPool, DbError> {
    let pool = pool_options::<Postgres>(settings)
        .connect(database_url)
        .await?;

    Ok(pool)
}
