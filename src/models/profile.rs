//! Profiles returned by `auth/me` and `auth-ong/me`.

use serde::{Deserialize, Serialize};

/// An ordinary user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// An organization (ONG) account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OngProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub city: String,
    /// Two-letter region code
    #[serde(default)]
    pub uf: String,
}
