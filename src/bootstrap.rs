//! Store connection bootstrap: bounded retry with a fixed delay.
//!
//! The retry primitive only reports the last error; whether that is fatal is
//! the caller's call (main exits 1, tests just assert).

use crate::config::DbSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

pub const CONNECT_ATTEMPTS: u32 = 10;
pub const CONNECT_DELAY: Duration = Duration::from_secs(3);

const MAX_POOL_CONNECTIONS: u32 = 5;

/// Run `op` up to `attempts` times, sleeping `delay` between failures.
/// Returns the first success or the last error once the budget is spent.
pub async fn retry<T, E, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < attempts => {
                warn!(attempt, max = attempts, %err, "store connection failed, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                warn!(attempt, max = attempts, %err, "store connection failed, budget spent");
                return Err(err);
            }
        }
    }
}

/// Open the pool, retrying up to [`CONNECT_ATTEMPTS`] times with
/// [`CONNECT_DELAY`] between attempts. `PgPoolOptions::connect_with` is
/// eager, so a returned pool has a live connection behind it.
pub async fn connect_with_retry(db: &DbSettings) -> Result<PgPool, sqlx::Error> {
    retry(CONNECT_ATTEMPTS, CONNECT_DELAY, |_| {
        PgPoolOptions::new()
            .max_connections(MAX_POOL_CONNECTIONS)
            .connect_with(db.connect_options())
    })
    .await
}
