//! Results-cache invalidation.
//!
//! Tallies are cached under a single fixed key by an external consumer.
//! This side only deletes that key after a mutation so the next read
//! recomputes; the deletion is best-effort and never fails a request.

use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::warn;

pub const RESULTS_KEY: &str = "results";

pub async fn connect(redis_url: &str) -> Result<ConnectionManager, redis::RedisError> {
    let client = redis::Client::open(redis_url)?;
    client.get_connection_manager().await
}

/// Drops the cached results entry. Failures are logged and swallowed.
pub async fn invalidate_results(cache: &ConnectionManager) {
    let mut conn = cache.clone();
    if let Err(e) = conn.del::<_, ()>(RESULTS_KEY).await {
        warn!("failed to invalidate {RESULTS_KEY} cache key: {e}");
    }
}
