//! Database bootstrap run before the server accepts connections.

use ecole_db::{PgPool, reset_schema, seed_roles};
use tracing::warn;

/// Drops and recreates the schema, then seeds the four fixed roles.
///
/// Every existing user and role assignment is lost. Running it repeatedly always
/// leaves exactly the four seeded roles behind.
pub async fn bootstrap_database(db: &PgPool) -> Result<(), sqlx::Error> {
    warn!("Drop and resync database (all data is wiped)");

    reset_schema(db).await?;
    seed_roles(db).await?;

    Ok(())
}
