//! Shared application state, constructed in main and injected into the router.

use crate::config::DbSettings;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// None when the process runs without DB_* configuration; data routes
    /// then answer with an error body and the probe reports "skipped".
    pub pool: Option<PgPool>,
    /// Kept for the health payload's `db` field and the probe's skip reason.
    pub db: Option<DbSettings>,
}

impl AppState {
    pub fn new(pool: Option<PgPool>, db: Option<DbSettings>) -> Self {
        AppState { pool, db }
    }
}
