//! Create and edit forms for incidents.

use super::{check, finish, FormOutcome, Rule, Schema};
use crate::auth::PrincipalKind;
use crate::models::{CreateIncidentRequest, Incident, UpdateIncidentRequest};
use crate::ui::{Route, Ui};
use crate::AppState;

fn incident_schema() -> Schema {
    Schema::new()
        .field("title", vec![Rule::MinLength(3, "Title is required")])
        .field(
            "description",
            vec![Rule::MinLength(15, "Description is required")],
        )
        .field("email", vec![Rule::Email("A valid email is required")])
        .field(
            "whatsapp",
            vec![Rule::MinLength(13, "WhatsApp must be at least 13 characters")],
        )
        .field("value", vec![Rule::MinLength(4, "Enter a valid value")])
}

/// New incident, published by the logged-in organization.
#[derive(Debug, Clone, Default)]
pub struct IncidentForm {
    pub title: String,
    pub description: String,
    pub email: String,
    pub whatsapp: String,
    pub value: String,
}

impl IncidentForm {
    pub fn schema() -> Schema {
        incident_schema()
    }

    fn values(&self) -> Vec<(&str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("email", self.email.as_str()),
            ("whatsapp", self.whatsapp.as_str()),
            ("value", self.value.as_str()),
        ]
    }

    pub async fn submit(&self, state: &AppState, ui: &dyn Ui) -> FormOutcome {
        if let Err(outcome) = check(ui, &Self::schema(), &self.values()) {
            return outcome;
        }

        let request = CreateIncidentRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            value: self.value.clone(),
        };

        let kind = PrincipalKind::Organization;
        let token = state.session.token(kind);
        let result = state.api.create_incident(&request, token.as_deref()).await;
        finish(
            state,
            ui,
            Some(kind),
            result,
            "Incident created successfully".to_string(),
            Route::Back,
            "Registration failed",
        )
        .await
    }
}

/// Edit form for an existing incident, prefilled from the backend record.
#[derive(Debug, Clone, Default)]
pub struct EditIncidentForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ong: String,
    pub email: String,
    pub whatsapp: String,
    pub value: String,
}

impl EditIncidentForm {
    pub fn schema() -> Schema {
        incident_schema().field("ong", vec![Rule::MinLength(3, "Organization is required")])
    }

    /// Prefill from a fetched incident; missing fields start empty.
    pub fn from_incident(incident: &Incident) -> Self {
        Self {
            id: incident.id.clone(),
            title: incident.title.clone(),
            description: incident.description.clone(),
            ong: incident.ong.clone().unwrap_or_default(),
            email: incident.email.clone().unwrap_or_default(),
            whatsapp: incident.whatsapp.clone().unwrap_or_default(),
            value: incident.value.clone(),
        }
    }

    fn values(&self) -> Vec<(&str, &str)> {
        vec![
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("email", self.email.as_str()),
            ("whatsapp", self.whatsapp.as_str()),
            ("value", self.value.as_str()),
            ("ong", self.ong.as_str()),
        ]
    }

    pub async fn submit(&self, state: &AppState, ui: &dyn Ui) -> FormOutcome {
        if let Err(outcome) = check(ui, &Self::schema(), &self.values()) {
            return outcome;
        }

        let request = UpdateIncidentRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            ong: self.ong.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            value: self.value.clone(),
        };

        let kind = PrincipalKind::Organization;
        let token = state.session.token(kind);
        let result = state
            .api
            .update_incident(&self.id, &request, token.as_deref())
            .await;
        finish(
            state,
            ui,
            Some(kind),
            result,
            "Incident updated successfully".to_string(),
            Route::Back,
            "Update failed",
        )
        .await
    }
}
