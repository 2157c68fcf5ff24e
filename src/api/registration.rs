//! Anonymous registration endpoints.

use reqwest::Method;

use super::ApiClient;
use crate::errors::AppError;
use crate::models::{CreateOngRequest, CreateUserRequest};

impl ApiClient {
    /// POST users
    pub async fn register_user(&self, request: &CreateUserRequest) -> Result<(), AppError> {
        self.submit(Method::POST, "users", request, None).await
    }

    /// POST ongs
    pub async fn register_ong(&self, request: &CreateOngRequest) -> Result<(), AppError> {
        self.submit(Method::POST, "ongs", request, None).await
    }
}
