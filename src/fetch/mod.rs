//! Authenticated resource fetch.
//!
//! One implementation of "resolve the token, make one authenticated call, classify the
//! failure" shared by every page that needs a logged-in principal. User and organization
//! variants are [`Resource`] values, not separate code paths.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::PrincipalKind;
use crate::errors::AppError;
use crate::ui::{Notification, Ui};
use crate::AppState;

/// What to fetch and where to keep a copy of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub kind: PrincipalKind,
    pub endpoint: &'static str,
    /// Durable storage key the successful body is mirrored under
    pub mirror_key: Option<&'static str>,
    /// Prefix of failure notifications
    pub context: &'static str,
}

impl Resource {
    /// The logged-in principal's own profile.
    pub fn profile(kind: PrincipalKind) -> Self {
        Self {
            kind,
            endpoint: kind.profile_endpoint(),
            mirror_key: Some(kind.profile_key()),
            context: "Error fetching user data",
        }
    }
}

/// Result of one fetch.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Loaded(T),
    /// Sent to the login page: no token, or the token was rejected
    Redirected,
    /// Reported to the user; the session is unchanged
    Failed(AppError),
}

impl<T> FetchOutcome<T> {
    pub fn loaded(self) -> Option<T> {
        match self {
            FetchOutcome::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Runs authenticated fetches on behalf of a page.
pub struct AuthenticatedFetch<'a> {
    state: &'a AppState,
    ui: &'a dyn Ui,
}

impl<'a> AuthenticatedFetch<'a> {
    pub fn new(state: &'a AppState, ui: &'a dyn Ui) -> Self {
        Self { state, ui }
    }

    /// Fetch `resource`, reporting at most one notification.
    pub async fn run<T>(&self, resource: &Resource) -> FetchOutcome<T>
    where
        T: DeserializeOwned + Serialize,
    {
        let kind = resource.kind;

        let token = match self.state.session.reload_from_storage(kind).await {
            Ok(token) => token,
            Err(err) => {
                self.ui.notify(err.notification(resource.context));
                return FetchOutcome::Failed(err);
            }
        };

        let Some(token) = token else {
            tracing::debug!("No {} token, redirecting to login", kind.as_str());
            self.ui.notify(Notification::warning("Please sign in to continue."));
            self.ui.navigate(kind.login_route());
            return FetchOutcome::Redirected;
        };

        match self
            .state
            .api
            .post_authenticated::<T>(resource.endpoint, &token)
            .await
        {
            Ok(value) => {
                if let Some(key) = resource.mirror_key {
                    if let Err(e) = self.state.storage.set_json(key, &value).await {
                        tracing::warn!("Could not mirror {} to storage: {}", key, e);
                    }
                }
                FetchOutcome::Loaded(value)
            }
            Err(err) => {
                if report_failure(self.state, self.ui, kind, &err, resource.context).await {
                    FetchOutcome::Redirected
                } else {
                    FetchOutcome::Failed(err)
                }
            }
        }
    }
}

/// Report a failed call made with the `kind` token as one notification.
///
/// A rejected token also logs that kind out and sends the user to its login page.
/// Returns whether the user was redirected.
pub async fn report_failure(
    state: &AppState,
    ui: &dyn Ui,
    kind: PrincipalKind,
    err: &AppError,
    context: &str,
) -> bool {
    if !err.forces_logout() {
        ui.notify(err.notification(context));
        return false;
    }

    if let Err(e) = state.session.logout(kind).await {
        tracing::error!("Could not clear {} session: {}", kind.as_str(), e);
    }
    ui.notify(err.notification(context));
    ui.navigate(kind.login_route());
    true
}
