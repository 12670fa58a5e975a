//! List and create handlers for user records.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::{self, User};
use axum::{extract::State, http::StatusCode, Json};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use sqlx::PgPool;

/// Create body. The form client sends `age` as a number when it can, but the
/// wire contract also accepts a numeric string and coerces it.
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(deserialize_with = "age_from_number_or_string")]
    pub age: i32,
}

fn age_from_number_or_string<'de, D>(de: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }
    match Raw::deserialize(de)? {
        Raw::Number(n) => i32::try_from(n).map_err(|_| D::Error::custom("age out of range")),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("age is not a number: {:?}", s))),
    }
}

fn pool(state: &AppState) -> Result<&PgPool, AppError> {
    state.pool.as_ref().ok_or(AppError::DbNotConfigured)
}

/// GET /api/all: every record, most recent first, as a plain JSON array.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let rows = store::list_users(pool(&state)?).await?;
    Ok(Json(rows))
}

/// POST /api/form: insert one record, answer 201 with the stored row
/// including its assigned id. Constraint violations (duplicate email,
/// negative age) surface as the standard error body.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let row = store::insert_user(pool(&state)?, &body.name, &body.email, body.age).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
