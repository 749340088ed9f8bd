//! JWT claims for access tokens.

use serde::{Deserialize, Serialize};

/// Claims embedded in an access token.
///
/// Only `id` is consulted by the guards. `iat` and `exp` are optional so that tokens
/// signed without them still verify; when `exp` is present it is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (user primary key)
    pub id: i32,
    /// Token issued-at timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<usize>,
    /// Token expiration timestamp (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}
