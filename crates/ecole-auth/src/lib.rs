//! # Ecole Auth
//!
//! Access token claims and the sign/verify pair used by the token gate.
//!
//! - [`claims`]: the [`Claims`] carried by an access token
//! - [`jwt`]: [`create_access_token`] and [`verify_token`]
//!
//! # Example
//!
//! ```ignore
//! use ecole_auth::{create_access_token, verify_token};
//! use ecole_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(7, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.id, 7);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
