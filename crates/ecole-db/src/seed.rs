//! Seeding of the fixed role catalogue.

use ecole_core::RoleName;
use sqlx::PgPool;
use tracing::{info, instrument};

/// Inserts the four fixed roles with ids 1-4.
///
/// Rows that already exist are overwritten with their canonical name, so ids 1-4
/// always carry the names of [`RoleName::ALL`]. Run [`crate::reset_schema`] first for
/// a table holding nothing else.
#[instrument(skip(db))]
pub async fn seed_roles(db: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = db.begin().await?;

    for role in RoleName::ALL {
        sqlx::query(
            r#"
            INSERT INTO roles (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, updated_at = NOW()
            "#,
        )
        .bind(role.id())
        .bind(role.as_str())
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(count = RoleName::ALL.len(), "Seeded roles");
    Ok(())
}
