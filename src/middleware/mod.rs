//! Request guards.
//!
//! - [`auth`]: the token gate ([`auth::verify_token`]) and the [`auth::AuthUser`]
//!   extractor
//! - [`role`]: the four role gates
//!
//! # Flow
//!
//! 1. Client sends `x-access-token: <jwt>`
//! 2. [`auth::verify_token`] checks the signature and expiry and stores the subject id
//!    in the request extensions
//! 3. Zero or more role gates load the subject's roles and check membership
//! 4. The handler runs
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::{auth::verify_token, role::is_admin};
//!
//! let admin_routes = Router::new().route(
//!     "/admin",
//!     get(admin_board)
//!         .route_layer(middleware::from_fn_with_state(state.clone(), is_admin))
//!         .route_layer(middleware::from_fn_with_state(state.clone(), verify_token)),
//! );
//! ```
//!
//! The last `route_layer` runs first, so the token gate is added last.

pub mod auth;
pub mod role;
