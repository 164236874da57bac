//! Mapping of [`PoolSettings`] onto sqlx pool options.

use foodbank_config::PoolSettings;
use sqlx::pool::PoolOptions;

/// Pool options for any sqlx backend.
///
/// - `max_connections` is the pool size plus the overflow allowance.
/// - `max_lifetime` recycles connections after the configured interval.
/// - `test_before_acquire` is the pre-ping health check.
pub fn pool_options<DB: sqlx::Database>(settings: &PoolSettings) -> PoolOptions<DB> {
    PoolOptions::<DB>::new()
        .max_connections(settings.max_connections())
        .max_lifetime(settings.recycle)
        .test_before_acquire(settings.pre_ping)
}
