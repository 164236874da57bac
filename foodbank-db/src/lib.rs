//! # Foodbank DB
//!
//! Connection pool for the foodbank backend.
//! The backend is chosen at runtime from the connection string; each one is
//! compiled in through its cargo feature.

#[cfg(not(any(feature = "postgres", feature = "sqlite")))]
compile_error!("Enable a database feature: `postgres` or `sqlite`.");

use foodbank_config::{Backend, DatabaseUrl, PoolSettings};

mod error;
pub mod pool;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use error::DbError;
pub use pool::pool_options;

/// Shared database handle.
///
/// Cloning is cheap; all clones use the same pool.
#[derive(Debug, Clone)]
pub enum Database {
    #[cfg(feature = "sqlite")]
    Sqlite(sqlx::SqlitePool),
    #[cfg(feature = "postgres")]
    Postgres(sqlx::PgPool),
}

/// Connects to the database behind `url`.
///
/// # Examples
///
/// ```ignore
/// let url = DatabaseUrl::new("sqlite://data/foodbankdb.db", DatabaseUrlSource::DatabaseUrl);
/// let db = build_database(&url, &PoolSettings::default()).await?;
/// db.ping().await?;
/// ```
pub async fn build_database(
    url: &DatabaseUrl,
    settings: &PoolSettings,
) -> Result<Database, DbError> {
    Database::connect(url, settings).await
}

impl Database {
    pub async fn connect(url: &DatabaseUrl, settings: &PoolSettings) -> Result<Self, DbError> {
        let backend = url.backend()?;
        tracing::debug!(
            %backend,
            max_connections = settings.max_connections(),
            recycle_secs = settings.recycle.as_secs(),
            pre_ping = settings.pre_ping,
            "Creating connection pool"
        );

        match backend {
            Backend::Sqlite => Self::connect_sqlite(url, settings).await,
            Backend::Postgres => Self::connect_postgres(url, settings).await,
        }
    }

    #[cfg(feature = "sqlite")]
    async fn connect_sqlite(url: &DatabaseUrl, settings: &PoolSettings) -> Result<Self, DbError> {
        Ok(Database::Sqlite(
            sqlite::connect(url.as_str(), settings).await?,
        ))
    }

    #[cfg(not(feature = "sqlite"))]
    async fn connect_sqlite(_: &DatabaseUrl, _: &PoolSettings) -> Result<Self, DbError> {
        Err(DbError::BackendDisabled(Backend::Sqlite))
    }

    #[cfg(feature = "postgres")]
    async fn connect_postgres(url: &DatabaseUrl, settings: &PoolSettings) -> Result<Self, DbError> {
        Ok(Database::Postgres(
            postgres::connect(url.as_str(), settings).await?,
        ))
    }

    #[cfg(not(feature = "postgres"))]
    async fn connect_postgres(_: &DatabaseUrl, _: &PoolSettings) -> Result<Self, DbError> {
        Err(DbError::BackendDisabled(Backend::Postgres))
    }

    pub fn backend(&self) -> Backend {
        match self {
            #[cfg(feature = "sqlite")]
            Database::Sqlite(_) => Backend::Sqlite,
            #[cfg(feature = "postgres")]
            Database::Postgres(_) => Backend::Postgres,
        }
    }

    /// Runs a trivial query to check the database is reachable.
    pub async fn ping(&self) -> Result<(), DbError> {
        match self {
            #[cfg(feature = "sqlite")]
            Database::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            #[cfg(feature = "postgres")]
            Database::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    /// Closes the pool, waiting for checked-out connections to come back.
    pub async fn close(&self) {
        match self {
            #[cfg(feature = "sqlite")]
            Database::Sqlite(pool) => pool.close().await,
            #[cfg(feature = "postgres")]
            Database::Postgres(pool) => pool.close().await,
        }
    }
}
