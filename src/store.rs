//! users table DDL and row-level queries.

use crate::error::AppError;
use serde::Serialize;
use sqlx::PgPool;

/// id is assigned by the store and never reused; email uniqueness and the
/// non-negative age bound are store-enforced, not application-checked.
const USERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    age INTEGER NOT NULL CHECK (age >= 0)
)
"#;

const LIST_SQL: &str = "SELECT id, name, email, age FROM users ORDER BY id DESC";

const INSERT_SQL: &str =
    "INSERT INTO users (name, email, age) VALUES ($1, $2, $3) RETURNING id, name, email, age";

/// One persisted user record.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Idempotent; runs on every process start, before the server accepts
/// requests that touch the table.
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(USERS_DDL).execute(pool).await?;
    Ok(())
}

/// All records, most recent first.
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let rows = sqlx::query_as::<_, User>(LIST_SQL).fetch_all(pool).await?;
    Ok(rows)
}

/// Single-statement insert; a duplicate email or negative age surfaces as the
/// store's own constraint error, leaving no partial state.
pub async fn insert_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    age: i32,
) -> Result<User, AppError> {
    let row = sqlx::query_as::<_, User>(INSERT_SQL)
        .bind(name)
        .bind(email)
        .bind(age)
        .fetch_one(pool)
        .await?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_is_idempotent_and_carries_the_constraints() {
        assert!(USERS_DDL.contains("IF NOT EXISTS"));
        assert!(USERS_DDL.contains("email TEXT NOT NULL UNIQUE"));
        assert!(USERS_DDL.contains("CHECK (age >= 0)"));
        assert!(USERS_DDL.contains("id BIGSERIAL PRIMARY KEY"));
    }

    #[test]
    fn list_is_descending_by_id() {
        assert!(LIST_SQL.ends_with("ORDER BY id DESC"));
    }

    #[test]
    fn insert_returns_the_created_row() {
        assert!(INSERT_SQL.contains("RETURNING id, name, email, age"));
    }

    #[test]
    fn user_serializes_with_exactly_the_api_fields() {
        let u = User {
            id: 3,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            age: 36,
        };
        let json = serde_json::to_value(&u).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "name": "Ada", "email": "ada@example.com", "age": 36})
        );
    }
}
