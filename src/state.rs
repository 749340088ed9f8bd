use std::sync::Arc;

use ecole_config::{CorsConfig, GuardConfig, JwtConfig};
use ecole_db::{PgPool, PgRoleStore, RoleStore};

#[derive(Clone)]
pub struct AppState {
    pub roles: Arc<dyn RoleStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub guard_config: GuardConfig,
}

impl AppState {
    /// State with configuration taken from the environment and roles read from `db`.
    pub fn from_env(db: PgPool) -> Self {
        Self {
            roles: Arc::new(PgRoleStore::new(db)),
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            guard_config: GuardConfig::from_env(),
        }
    }
}
