//! Login landing pages, profile pages and logout.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::PrincipalKind;
use crate::fetch::{AuthenticatedFetch, Resource};
use crate::ui::{Notification, Ui};
use crate::AppState;

/// Login landing page for `kind`.
///
/// Returns `true` when a session already exists and the user was sent to the
/// dashboard instead of being shown the login form.
pub fn login_page(state: &AppState, ui: &dyn Ui, kind: PrincipalKind) -> bool {
    if state.session.token(kind).is_some() {
        ui.navigate(kind.dashboard_route());
        return true;
    }
    false
}

/// Profile page: the principal's own profile, fetched fresh.
pub async fn profile_page<P>(state: &AppState, ui: &dyn Ui, kind: PrincipalKind) -> Option<P>
where
    P: DeserializeOwned + Serialize,
{
    AuthenticatedFetch::new(state, ui)
        .run::<P>(&Resource::profile(kind))
        .await
        .loaded()
}

/// Drop the session for `kind` and go back to its login page.
pub async fn logout(state: &AppState, ui: &dyn Ui, kind: PrincipalKind) {
    if let Err(err) = state.session.logout(kind).await {
        ui.notify(err.notification("Logout failed"));
        return;
    }
    ui.notify(Notification::warning("You have signed out. See you soon!"));
    ui.navigate(kind.login_route());
}
