//! Incident endpoints.

use reqwest::Method;

use super::ApiClient;
use crate::errors::AppError;
use crate::models::{CreateIncidentRequest, Incident, UpdateIncidentRequest};

impl ApiClient {
    /// GET incidents - backend order is kept.
    pub async fn list_incidents(&self) -> Result<Vec<Incident>, AppError> {
        self.send_json::<(), _>(Method::GET, "incidents", None, None)
            .await
    }

    /// GET incidents/:id
    pub async fn get_incident(&self, id: &str) -> Result<Incident, AppError> {
        self.send_json::<(), _>(Method::GET, &format!("incidents/{}", id), None, None)
            .await
    }

    /// POST incidents
    pub async fn create_incident(
        &self,
        request: &CreateIncidentRequest,
        token: Option<&str>,
    ) -> Result<(), AppError> {
        self.submit(Method::POST, "incidents", request, token).await
    }

    /// PUT incidents/:id
    pub async fn update_incident(
        &self,
        id: &str,
        request: &UpdateIncidentRequest,
        token: Option<&str>,
    ) -> Result<(), AppError> {
        self.submit(Method::PUT, &format!("incidents/{}", id), request, token)
            .await
    }

    /// DELETE incidents/:id - any success status counts, including 204.
    pub async fn delete_incident(&self, id: &str, token: Option<&str>) -> Result<(), AppError> {
        self.send::<()>(Method::DELETE, &format!("incidents/{}", id), None, token)
            .await
            .map(|_| ())
    }
}
