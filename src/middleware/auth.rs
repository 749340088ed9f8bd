use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::AppState;
use ecole_core::AppError;

/// Header carrying the access token.
pub const TOKEN_HEADER: &str = "x-access-token";

/// The authenticated subject, stored in the request extensions by [`verify_token`].
///
/// Handlers behind the token gate can take it as an extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

/// Token gate.
///
/// - no `x-access-token` header (or an empty one): 403 `No token provided!`
/// - bad signature, malformed or expired token: 401 `Unauthorized!`
///
/// On success the token's `id` claim is inserted as [`AuthUser`] and the request
/// continues.
pub async fn verify_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = match req.headers().get(TOKEN_HEADER) {
        None => return Err(AppError::MissingToken),
        Some(value) if value.is_empty() => return Err(AppError::MissingToken),
        Some(value) => value.to_str().map_err(|_| AppError::InvalidToken)?,
    };

    let claims = ecole_auth::verify_token(token, &state.jwt_config).inspect_err(|_| {
        debug!("rejected access token");
    })?;

    req.extensions_mut().insert(AuthUser { user_id: claims.id });

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or(AppError::MissingToken)
    }
}
