//! users-api: health-checked REST backend for user records.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod store;

pub use bootstrap::{connect_with_retry, retry, CONNECT_ATTEMPTS, CONNECT_DELAY};
pub use config::{DbSettings, Settings};
pub use error::AppError;
pub use routes::api_routes;
pub use state::AppState;
pub use store::{ensure_users_table, User};
