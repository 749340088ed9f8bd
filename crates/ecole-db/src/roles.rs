//! Role storage read by the role gates.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Read access to the subject-role relation.
///
/// The gates never write through this trait. Every call hits the backing store; no
/// caching happens between calls.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Names of the roles assigned to `user_id`.
    ///
    /// Returns `Ok(None)` when no user has this id and `Ok(Some(vec![]))` for a user
    /// with no roles.
    async fn role_names_for_user(&self, user_id: i32) -> Result<Option<Vec<String>>, sqlx::Error>;
}

/// [`RoleStore`] backed by the `users`, `user_roles` and `roles` tables.
#[derive(Clone, Debug)]
pub struct PgRoleStore {
    db: PgPool,
}

impl PgRoleStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct UserRoleNameRow {
    name: Option<String>,
}

#[async_trait]
impl RoleStore for PgRoleStore {
    #[instrument(skip(self))]
    async fn role_names_for_user(&self, user_id: i32) -> Result<Option<Vec<String>>, sqlx::Error> {
        // One row per assigned role, or a single NULL row for a user without roles.
        let rows = sqlx::query_as::<_, UserRoleNameRow>(
            r#"
            SELECT r.name
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            WHERE u.id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(rows.into_iter().filter_map(|row| row.name).collect()))
    }
}

/// Lists every role ordered by id.
#[instrument(skip(db))]
pub async fn list_roles(db: &PgPool) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM roles
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}
