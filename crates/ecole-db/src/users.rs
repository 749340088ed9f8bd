//! User rows and role assignment.

use ecole_core::RoleName;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[instrument(skip(db))]
pub async fn create_user(db: &PgPool, username: &str, email: &str) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email)
        VALUES ($1, $2)
        RETURNING id, username, email, created_at
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_one(db)
    .await
}

/// Assigns `role` to `user_id`. Assigning a role twice is a no-op.
#[instrument(skip(db))]
pub async fn assign_role(db: &PgPool, user_id: i32, role: RoleName) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_roles (role_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(role.id())
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(())
}
