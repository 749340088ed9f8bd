//! # Ecole Core
//!
//! Core types shared by every Ecole crate:
//!
//! - [`errors`]: the [`AppError`] taxonomy and its HTTP rendering
//! - [`roles`]: the fixed [`RoleName`] catalogue seeded at startup

pub mod errors;
pub mod roles;

pub use errors::AppError;
pub use roles::{RoleName, UnknownRole};
