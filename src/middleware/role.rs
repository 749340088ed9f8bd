//! Role gates for Axum.
//!
//! Each gate loads the subject's current roles from the [`RoleStore`] and continues
//! only if one of its required names is assigned. Names are compared exactly and
//! there is no hierarchy between roles.
//!
//! | Gate | Required | Rejection message |
//! |------|----------|-------------------|
//! | [`is_admin`] | `ADMIN` | `Role admin requis!` |
//! | [`is_professor`] | `PROFESSEUR` | `Role professeur requis!` |
//! | [`is_professor_or_admin`] | `PROFESSEUR` or `ADMIN` | `Role admin ou professeur requis!` |
//! | [`is_student`] | `ETUDIANT` | `Role etudiant requis!` |
//!
//! Gates must run after [`verify_token`](crate::middleware::auth::verify_token).
//!
//! [`RoleStore`]: ecole_db::RoleStore

use std::collections::HashSet;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use ecole_core::{AppError, RoleName};

/// The role names a gate accepts and the message it rejects with.
#[derive(Debug, Clone, Copy)]
pub struct RoleRequirement {
    pub any_of: &'static [RoleName],
    pub message: &'static str,
}

pub const ADMIN_REQUIRED: RoleRequirement = RoleRequirement {
    any_of: &[RoleName::Admin],
    message: "Role admin requis!",
};

pub const PROFESSOR_REQUIRED: RoleRequirement = RoleRequirement {
    any_of: &[RoleName::Professor],
    message: "Role professeur requis!",
};

pub const PROFESSOR_OR_ADMIN_REQUIRED: RoleRequirement = RoleRequirement {
    any_of: &[RoleName::Professor, RoleName::Admin],
    message: "Role admin ou professeur requis!",
};

pub const STUDENT_REQUIRED: RoleRequirement = RoleRequirement {
    any_of: &[RoleName::Student],
    message: "Role etudiant requis!",
};

/// Whether any of `assigned` is one of `required`, by exact name.
pub fn has_any_role<T: AsRef<str>>(assigned: &[T], required: &[RoleName]) -> bool {
    let required: HashSet<&str> = required.iter().map(|role| role.as_str()).collect();
    assigned.iter().any(|name| required.contains(name.as_ref()))
}

/// Loads the roles of `user` and checks them against `requirement`.
///
/// An unknown user is treated like a user without roles. Store errors and lookups
/// exceeding the configured timeout fail with their own error kinds.
pub async fn check_roles(
    state: &AppState,
    user: AuthUser,
    requirement: &RoleRequirement,
) -> Result<(), AppError> {
    let lookup = state.roles.role_names_for_user(user.user_id);

    let roles = tokio::time::timeout(state.guard_config.role_lookup_timeout, lookup)
        .await
        .map_err(|_| AppError::LookupTimedOut)?
        .map_err(AppError::lookup_failed)?;

    let roles = match roles {
        Some(roles) => roles,
        None => {
            debug!(user_id = user.user_id, "role check for unknown user");
            Vec::new()
        }
    };

    if has_any_role(&roles, requirement.any_of) {
        return Ok(());
    }

    debug!(
        user_id = user.user_id,
        required = ?requirement.any_of,
        assigned = ?roles,
        "role check failed"
    );
    Err(AppError::RoleRequired(requirement.message))
}

/// Middleware body shared by the four gates.
pub async fn require_roles(
    state: AppState,
    req: Request,
    next: Next,
    requirement: &RoleRequirement,
) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<AuthUser>()
        .copied()
        .ok_or(AppError::MissingToken)?;

    check_roles(&state, user, requirement).await?;

    Ok(next.run(req).await)
}

pub async fn is_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, &ADMIN_REQUIRED).await
}

pub async fn is_professor(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, &PROFESSOR_REQUIRED).await
}

pub async fn is_professor_or_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, &PROFESSOR_OR_ADMIN_REQUIRED).await
}

pub async fn is_student(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, &STUDENT_REQUIRED).await
}
