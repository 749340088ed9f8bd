//! Schema bootstrap.
//!
//! [`reset_schema`] drops and recreates every table on each call. It is meant for the
//! development bootstrap run at server start and wipes all users and role
//! assignments.

use sqlx::PgPool;
use tracing::{info, instrument};

const DROP_TABLES: &str = "DROP TABLE IF EXISTS user_roles, users, roles CASCADE";

const CREATE_ROLES: &str = r#"
    CREATE TABLE roles (
        id INTEGER PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_USERS: &str = r#"
    CREATE TABLE users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        password VARCHAR(255),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_USER_ROLES: &str = r#"
    CREATE TABLE user_roles (
        role_id INTEGER NOT NULL REFERENCES roles (id) ON DELETE CASCADE ON UPDATE CASCADE,
        user_id INTEGER NOT NULL REFERENCES users (id) ON DELETE CASCADE ON UPDATE CASCADE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        PRIMARY KEY (role_id, user_id)
    )
"#;

/// Drops and recreates the `roles`, `users` and `user_roles` tables.
///
/// Runs in a single transaction: either the full schema is recreated or nothing
/// changes.
#[instrument(skip(db))]
pub async fn reset_schema(db: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = db.begin().await?;

    for statement in [DROP_TABLES, CREATE_ROLES, CREATE_USERS, CREATE_USER_ROLES] {
        sqlx::raw_sql(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    info!("Dropped and recreated database schema");
    Ok(())
}
