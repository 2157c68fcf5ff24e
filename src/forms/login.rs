//! Login form for both principal kinds.

use super::{check, FormOutcome, Rule, Schema};
use crate::auth::PrincipalKind;
use crate::errors::AppError;
use crate::models::LoginRequest;
use crate::ui::{Notification, Ui};
use crate::AppState;

/// Email and password for `auth/login` or `auth-ong/login`.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub kind: PrincipalKind,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn schema() -> Schema {
        Schema::new()
            .field("email", vec![Rule::Email("A valid email is required")])
            .field(
                "password",
                vec![Rule::MinLength(6, "Password must be at least 6 characters")],
            )
    }

    fn values(&self) -> Vec<(&str, &str)> {
        vec![("email", self.email.as_str()), ("password", self.password.as_str())]
    }

    /// Log in, store the token for this kind and go to its dashboard.
    pub async fn submit(&self, state: &AppState, ui: &dyn Ui) -> FormOutcome {
        if let Err(outcome) = check(ui, &Self::schema(), &self.values()) {
            return outcome;
        }

        let request = LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        };

        match self.login(state, &request).await {
            Ok(()) => {
                ui.notify(Notification::success(format!(
                    "Signed in as {}. Welcome!",
                    self.email
                )));
                ui.navigate(self.kind.dashboard_route());
                FormOutcome::Submitted
            }
            Err(err) => {
                ui.notify(err.notification("Login failed"));
                FormOutcome::Failed(err)
            }
        }
    }

    async fn login(&self, state: &AppState, request: &LoginRequest) -> Result<(), AppError> {
        let response = state.api.login(self.kind, request).await?;
        let token = response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::LocalUnexpected("Token not found in response".to_string()))?;

        state.session.set_token(self.kind, Some(token)).await?;
        tracing::info!("Logged in {} session for {}", self.kind.as_str(), self.email);
        Ok(())
    }
}
