//! Incident detail, edit and delete.

use crate::auth::PrincipalKind;
use crate::fetch::report_failure;
use crate::forms::EditIncidentForm;
use crate::models::Incident;
use crate::ui::{Notification, Ui};
use crate::AppState;

use super::PageView;

/// Detail page. Without an id the page stays on its loading placeholder.
pub async fn details_incident(
    state: &AppState,
    ui: &dyn Ui,
    id: Option<&str>,
) -> PageView<Incident> {
    let Some(id) = id else {
        return PageView::Loading;
    };

    match state.api.get_incident(id).await {
        Ok(incident) => PageView::Ready(incident),
        Err(err) => {
            ui.notify(err.notification("Error loading incident data"));
            PageView::Loading
        }
    }
}

/// Edit page: loads the record into a prefilled form.
///
/// When loading fails the form is still shown, empty, so the user can retry by
/// filling it in.
pub async fn edit_incident(
    state: &AppState,
    ui: &dyn Ui,
    id: &str,
) -> PageView<EditIncidentForm> {
    match state.api.get_incident(id).await {
        Ok(incident) => PageView::Ready(EditIncidentForm::from_incident(&incident)),
        Err(err) => {
            ui.notify(err.notification("Error loading incident data"));
            PageView::Ready(EditIncidentForm {
                id: id.to_string(),
                ..Default::default()
            })
        }
    }
}

/// Card delete action: one DELETE, then a full reload on success.
///
/// A rejected organization token logs the organization out.
pub async fn delete_incident(state: &AppState, ui: &dyn Ui, id: &str) -> bool {
    let kind = PrincipalKind::Organization;
    let token = state.session.token(kind);
    match state.api.delete_incident(id, token.as_deref()).await {
        Ok(()) => {
            ui.notify(Notification::success(format!(
                "Incident \"{}\" deleted successfully",
                id
            )));
            ui.reload();
            true
        }
        Err(err) => {
            report_failure(state, ui, kind, &err, "Error deleting incident").await;
            false
        }
    }
}
