//! JWT utilities for the token gate.
//!
//! Tokens are HS256-signed with the shared secret from [`JwtConfig`]. Verification
//! accepts any HMAC algorithm (HS256, HS384, HS512) over that secret and checks the
//! `exp` and `nbf` claims whenever the token carries them. Any
//! verification failure collapses into [`AppError::InvalidToken`]; the gate does not
//! tell clients why a token was rejected.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use ecole_config::JwtConfig;
use ecole_core::AppError;

use crate::claims::Claims;

/// Creates an access token for `user_id` valid for `jwt_config.access_token_expiry`
/// seconds.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if encoding fails.
pub fn create_access_token(user_id: i32, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;

    let claims = Claims {
        id: user_id,
        iat: Some(now),
        exp: Some(exp),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns its claims.
///
/// # Errors
///
/// Returns [`AppError::InvalidToken`] if the token is malformed, signed with another
/// secret, expired, or not yet valid.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    // `exp` and `nbf` are still validated whenever the token carries them.
    validation.required_spec_claims.clear();
    validation.validate_nbf = true;
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-at-least-32-characters-long".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn sign(payload: serde_json::Value, secret: &str) -> String {
        sign_with(Algorithm::HS256, payload, secret)
    }

    fn sign_with(algorithm: Algorithm, payload: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::new(algorithm),
            &payload,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_create_access_token_success() {
        let config = get_test_jwt_config();
        let token = create_access_token(7, &config).unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_token_round_trip_keeps_id() {
        let config = get_test_jwt_config();
        let token = create_access_token(7, &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.id, 7);
        let iat = claims.iat.unwrap();
        assert_eq!(claims.exp, Some(iat + 3600));
    }

    #[test]
    fn test_verify_token_invalid() {
        let config = get_test_jwt_config();
        let result = verify_token("invalid.token.here", &config);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_token_empty() {
        let config = get_test_jwt_config();
        assert!(matches!(
            verify_token("", &config),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(7, &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "different-secret-key-at-least-32-characters".to_string(),
            access_token_expiry: 3600,
        };

        assert!(matches!(
            verify_token(&token, &wrong_config),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_token_expired() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp();
        let token = sign(
            json!({ "id": 7, "iat": now - 7200, "exp": now - 3600 }),
            &config.secret,
        );

        assert!(matches!(
            verify_token(&token, &config),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_token_not_yet_valid() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp();
        let token = sign(json!({ "id": 7, "nbf": now + 86400 }), &config.secret);

        assert!(matches!(
            verify_token(&token, &config),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_token_past_nbf() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp();
        let token = sign(json!({ "id": 7, "nbf": now - 60 }), &config.secret);

        assert_eq!(verify_token(&token, &config).unwrap().id, 7);
    }

    #[test]
    fn test_verify_token_accepts_hmac_variants() {
        let config = get_test_jwt_config();

        for algorithm in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            let token = sign_with(algorithm, json!({ "id": 7 }), &config.secret);
            let claims = verify_token(&token, &config).unwrap();
            assert_eq!(claims.id, 7, "{:?}", algorithm);
        }
    }

    #[test]
    fn test_verify_token_hs512_wrong_secret() {
        let config = get_test_jwt_config();
        let token = sign_with(
            Algorithm::HS512,
            json!({ "id": 7 }),
            "different-secret-key-at-least-32-characters",
        );

        assert!(matches!(
            verify_token(&token, &config),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_token_without_exp() {
        let config = get_test_jwt_config();
        let token = sign(json!({ "id": 7 }), &config.secret);

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.id, 7);
    }

    #[test]
    fn test_verify_token_without_id() {
        let config = get_test_jwt_config();
        let token = sign(json!({ "sub": "7" }), &config.secret);

        assert!(matches!(
            verify_token(&token, &config),
            Err(AppError::InvalidToken)
        ));
    }
}
