//! Request bodies for `POST users` and `POST ongs`.

use serde::{Deserialize, Serialize};

/// Request body for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Request body for registering an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOngRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub city: String,
    pub uf: String,
}
