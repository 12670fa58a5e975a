//! Health and store-probe handlers.
//!
//! Health never touches the store. The probe does, but a store failure there
//! is an ordinary JSON response, never a crash.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct HealthBody {
    pub ok: bool,
    pub ts: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        ok: true,
        ts: Utc::now().to_rfc3339(),
        db: state.db.as_ref().map(|d| d.name.clone()),
    })
}

/// GET /api/db: `{db:"ok",result}` when a round-trip works,
/// `{db:"skipped",reason}` without DB_* configuration, `500 {db:"error",..}`
/// when the store answers with an error.
pub async fn db_probe(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let Some(pool) = state.pool.as_ref() else {
        return (
            StatusCode::OK,
            Json(json!({"db": "skipped", "reason": "missing DB_* envs"})),
        );
    };
    match sqlx::query_scalar::<_, i32>("SELECT 1 AS ok").fetch_one(pool).await {
        Ok(one) => (StatusCode::OK, Json(json!({"db": "ok", "result": {"ok": one}}))),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"db": "error", "message": err.to_string()})),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbSettings;

    fn stateless() -> AppState {
        AppState::new(None, None)
    }

    #[tokio::test]
    async fn health_is_ok_without_any_store() {
        let Json(body) = health(State(stateless())).await;
        assert!(body.ok);
        assert!(body.db.is_none());
        assert!(chrono::DateTime::parse_from_rfc3339(&body.ts).is_ok());
    }

    #[tokio::test]
    async fn health_names_the_configured_database() {
        let db = DbSettings {
            host: "db".into(),
            port: 5432,
            user: "app".into(),
            password: String::new(),
            name: "users".into(),
        };
        let Json(body) = health(State(AppState::new(None, Some(db)))).await;
        assert_eq!(body.db.as_deref(), Some("users"));
    }

    #[tokio::test]
    async fn probe_skips_when_unconfigured() {
        let (status, Json(body)) = db_probe(State(stateless())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["db"], "skipped");
        assert_eq!(body["reason"], "missing DB_* envs");
    }
}
