//! The fixed role catalogue.
//!
//! Four roles exist and are seeded at startup with stable ids:
//!
//! | Id | Name | Variant |
//! |----|------|---------|
//! | 1 | `USER` | [`RoleName::User`] |
//! | 2 | `ETUDIANT` | [`RoleName::Student`] |
//! | 3 | `PROFESSEUR` | [`RoleName::Professor`] |
//! | 4 | `ADMIN` | [`RoleName::Admin`] |
//!
//! Names are compared by exact string equality. There is no hierarchy: `ADMIN` does
//! not satisfy a `PROFESSEUR` check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "ETUDIANT")]
    Student,
    #[serde(rename = "PROFESSEUR")]
    Professor,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl RoleName {
    /// All roles in seeding order.
    pub const ALL: [RoleName; 4] = [
        RoleName::User,
        RoleName::Student,
        RoleName::Professor,
        RoleName::Admin,
    ];

    pub fn id(self) -> i32 {
        match self {
            RoleName::User => 1,
            RoleName::Student => 2,
            RoleName::Professor => 3,
            RoleName::Admin => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoleName::User => "USER",
            RoleName::Student => "ETUDIANT",
            RoleName::Professor => "PROFESSEUR",
            RoleName::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for RoleName {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleName::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
