//! Login and authenticated profile endpoints.

use reqwest::Method;
use serde::de::DeserializeOwned;

use super::ApiClient;
use crate::auth::PrincipalKind;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse};

impl ApiClient {
    /// POST auth/login or auth-ong/login.
    pub async fn login(
        &self,
        kind: PrincipalKind,
        request: &LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        self.send_json(Method::POST, kind.login_endpoint(), Some(request), None)
            .await
    }

    /// POST to an authenticated endpoint with an empty JSON body.
    pub async fn post_authenticated<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: &str,
    ) -> Result<T, AppError> {
        self.send_json(
            Method::POST,
            endpoint,
            Some(&serde_json::json!({})),
            Some(token),
        )
        .await
    }
}
