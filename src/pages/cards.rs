//! Text rendering of views for the terminal.

use std::fmt;

use super::DashboardView;
use crate::auth::PrincipalKind;
use crate::models::{Incident, OngProfile, UserProfile};
use crate::ui::{Link, Route};

/// Something with a name to greet in the header.
pub trait DisplayName {
    fn display_name(&self) -> &str;
}

impl DisplayName for UserProfile {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl DisplayName for OngProfile {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Header greeting; falls back to a placeholder while the profile is missing.
pub fn greeting<P: DisplayName>(profile: Option<&P>) -> String {
    format!(
        "Welcome, {}",
        profile.map(|p| p.display_name()).unwrap_or("User")
    )
}

/// Header buttons: the greeting opens the profile; organizations can also publish a case.
pub fn header_links(kind: PrincipalKind) -> Vec<Link> {
    let mut links = vec![Link::new("Profile", kind.profile_route())];
    if kind == PrincipalKind::Organization {
        links.push(Link::new("New case", Route::RegisterIncident));
    }
    links
}

/// Buttons under a login form.
pub fn login_links(kind: PrincipalKind) -> Vec<Link> {
    match kind {
        PrincipalKind::User => vec![
            Link::new("No account yet? Register", Route::Register),
            Link::new("I am an organization", Route::AuthOng),
        ],
        PrincipalKind::Organization => vec![
            Link::new("I am a user", Route::Home),
            Link::new("Register your organization", Route::RegisterOng),
        ],
    }
}

/// Buttons under the user registration form.
pub fn register_links() -> Vec<Link> {
    vec![
        Link::new("Back to login", Route::Home),
        Link::new("Register as an organization", Route::RegisterOng),
    ]
}

/// Edit and details buttons of a dashboard card.
pub fn card_links(incident: &Incident) -> Vec<Link> {
    vec![
        Link::new(
            "Edit",
            Route::EditIncident {
                id: incident.id.clone(),
            },
        ),
        Link::new(
            "See more details",
            Route::DetailsIncident {
                id: incident.id.clone(),
            },
        ),
    ]
}

/// Dashboard card for one incident.
pub struct Card<'a>(pub &'a Incident);

impl fmt::Display for Card<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let incident = self.0;
        writeln!(f, "[{}] {}", incident.id, incident.title)?;
        writeln!(f, "  {}", incident.description)?;
        write!(f, "  Value: R$ {}", incident.value)?;
        for link in card_links(incident) {
            write!(f, "\n  > {}", link)?;
        }
        Ok(())
    }
}

/// Full detail card, including the contact fields.
pub struct CardDetails<'a>(pub &'a Incident);

impl fmt::Display for CardDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let incident = self.0;
        writeln!(f, "Case: {}", incident.title)?;
        if let Some(ong) = &incident.ong {
            writeln!(f, "Organization: {}", ong)?;
        }
        writeln!(f, "Description: {}", incident.description)?;
        writeln!(f, "Value: R$ {}", incident.value)?;
        if let Some(email) = &incident.email {
            writeln!(f, "Email: {}", email)?;
        }
        if let Some(whatsapp) = &incident.whatsapp {
            writeln!(f, "WhatsApp: {}", whatsapp)?;
        }
        write!(f, "Id: {}", incident.id)
    }
}

impl<P: DisplayName> fmt::Display for DashboardView<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", greeting(self.profile.as_ref()))?;
        for link in header_links(self.kind) {
            writeln!(f, "> {}", link)?;
        }
        writeln!(f, "Registered cases: {}", self.incidents.len())?;
        for incident in &self.incidents {
            writeln!(f)?;
            writeln!(f, "{}", Card(incident))?;
        }
        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        write!(f, "Phone: {}", self.phone)
    }
}

impl fmt::Display for OngProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Phone: {}", self.phone)?;
        write!(f, "City: {} - {}", self.city, self.uf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_placeholder() {
        assert_eq!(greeting::<UserProfile>(None), "Welcome, User");
        let ong = OngProfile {
            id: "o1".into(),
            name: "Patas".into(),
            email: "contato@patas.org".into(),
            phone: String::new(),
            city: "Recife".into(),
            uf: "PE".into(),
        };
        assert_eq!(greeting(Some(&ong)), "Welcome, Patas");
    }

    #[test]
    fn test_header_links_per_kind() {
        let routes = |kind| {
            header_links(kind)
                .into_iter()
                .map(|l| l.route)
                .collect::<Vec<_>>()
        };
        assert_eq!(routes(PrincipalKind::User), vec![Route::ProfileUser]);
        assert_eq!(
            routes(PrincipalKind::Organization),
            vec![Route::ProfileOng, Route::RegisterIncident]
        );
    }

    #[test]
    fn test_login_and_register_links() {
        let user: Vec<_> = login_links(PrincipalKind::User)
            .into_iter()
            .map(|l| l.route)
            .collect();
        assert!(user.contains(&Route::Register));

        let ong: Vec<_> = login_links(PrincipalKind::Organization)
            .into_iter()
            .map(|l| l.route)
            .collect();
        assert_eq!(ong, vec![Route::Home, Route::RegisterOng]);

        assert!(register_links()
            .iter()
            .any(|l| l.route == Route::RegisterOng));
    }

    #[test]
    fn test_card_links_to_edit_and_details() {
        let incident = Incident {
            id: "42".into(),
            title: "Cat rescue".into(),
            description: "Stuck on a roof".into(),
            value: "80".into(),
            ong: None,
            email: None,
            whatsapp: None,
        };
        let text = Card(&incident).to_string();
        assert!(text.contains("> Edit (/edit-incident?id=42)"));
        assert!(text.contains("> See more details (/details-incident?id=42)"));
    }

    #[test]
    fn test_card_skips_missing_contacts() {
        let incident = Incident {
            id: "1".into(),
            title: "Cat rescue".into(),
            description: "Stuck on a roof".into(),
            value: "80".into(),
            ong: None,
            email: None,
            whatsapp: Some("5581999999999".into()),
        };
        let text = CardDetails(&incident).to_string();
        assert!(text.contains("WhatsApp: 5581999999999"));
        assert!(!text.contains("Email:"));
    }
}
