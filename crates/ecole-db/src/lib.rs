//! # Ecole DB
//!
//! Database access for the Ecole API, using SQLx with PostgreSQL.
//!
//! - [`schema`]: destructive schema reset run at startup
//! - [`seed`]: insertion of the four fixed roles
//! - [`roles`]: the [`RoleStore`] read by the role gates
//! - [`users`]: user rows and role assignment
//!
//! # Example
//!
//! ```ignore
//! use ecole_db::{init_db_pool, reset_schema, seed_roles};
//!
//! let pool = init_db_pool(&database_url).await?;
//! reset_schema(&pool).await?;
//! seed_roles(&pool).await?;
//! ```

pub mod roles;
pub mod schema;
pub mod seed;
pub mod users;

pub use roles::{PgRoleStore, Role, RoleStore, list_roles};
pub use schema::reset_schema;
pub use seed::seed_roles;
pub use users::{User, assign_role, create_user};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

use sqlx::postgres::PgPoolOptions;

/// Connects a PostgreSQL pool to `database_url`.
///
/// Called once during startup. The returned pool is cheaply cloneable and is shared
/// by the role store and the seeder.
pub async fn init_db_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
