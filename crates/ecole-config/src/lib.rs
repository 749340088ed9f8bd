//! # Ecole Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: shared secret and token lifetime
//! - [`cors`]: allowed browser origins
//! - [`server`]: listening port
//! - [`guard`]: role lookup timeout
//!
//! # Example
//!
//! ```ignore
//! use ecole_config::{CorsConfig, GuardConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod guard;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use guard::GuardConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
