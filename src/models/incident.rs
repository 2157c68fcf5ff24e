//! Incident model: a case an organization needs help funding.

use serde::{Deserialize, Deserializer, Serialize};

/// An incident as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Monetary value, kept verbatim
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
    /// Name of the organization that owns the incident
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ong: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

/// Request body for creating a new incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIncidentRequest {
    pub title: String,
    pub description: String,
    pub email: String,
    pub whatsapp: String,
    pub value: String,
}

/// Request body for updating an existing incident.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateIncidentRequest {
    pub title: String,
    pub description: String,
    pub ong: String,
    pub email: String,
    pub whatsapp: String,
    pub value: String,
}

// Some backend revisions send the value as a number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
