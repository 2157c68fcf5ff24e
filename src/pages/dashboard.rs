//! Dashboards: the logged-in header plus the incident list.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::PrincipalKind;
use crate::fetch::{AuthenticatedFetch, FetchOutcome, Resource};
use crate::models::Incident;
use crate::ui::Ui;
use crate::AppState;

/// A dashboard as rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView<P> {
    pub kind: PrincipalKind,
    /// `None` while the header could not load its profile
    pub profile: Option<P>,
    /// In backend order
    pub incidents: Vec<Incident>,
}

/// Dashboard for `kind`. `None` means the user was redirected to log in.
pub async fn dashboard<P>(
    state: &AppState,
    ui: &dyn Ui,
    kind: PrincipalKind,
) -> Option<DashboardView<P>>
where
    P: DeserializeOwned + Serialize,
{
    let profile = match AuthenticatedFetch::new(state, ui)
        .run::<P>(&Resource::profile(kind))
        .await
    {
        FetchOutcome::Loaded(profile) => Some(profile),
        FetchOutcome::Redirected => return None,
        FetchOutcome::Failed(_) => None,
    };

    let incidents = list_incidents(state, ui).await;

    Some(DashboardView {
        kind,
        profile,
        incidents,
    })
}

/// Incident list; empty after a reported failure.
pub async fn list_incidents(state: &AppState, ui: &dyn Ui) -> Vec<Incident> {
    match state.api.list_incidents().await {
        Ok(incidents) => incidents,
        Err(err) => {
            ui.notify(err.notification("Error fetching data"));
            Vec::new()
        }
    }
}
