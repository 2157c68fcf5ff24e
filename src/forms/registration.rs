//! Registration forms for users and organizations.

use super::{check, finish, FormOutcome, Rule, Schema};
use crate::models::{CreateOngRequest, CreateUserRequest};
use crate::ui::{Route, Ui};
use crate::AppState;

fn account_schema() -> Schema {
    Schema::new()
        .field("name", vec![Rule::MinLength(3, "Name is required")])
        .field("email", vec![Rule::Email("A valid email is required")])
        .field(
            "password",
            vec![Rule::MinLength(6, "Password must be at least 6 characters")],
        )
        .field(
            "phone",
            vec![Rule::MinLength(13, "Phone must be at least 13 characters")],
        )
}

/// Sign-up form for an ordinary user.
#[derive(Debug, Clone)]
pub struct UserRegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

impl UserRegistrationForm {
    pub fn schema() -> Schema {
        account_schema()
    }

    fn values(&self) -> Vec<(&str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
            ("phone", self.phone.as_str()),
        ]
    }

    pub async fn submit(&self, state: &AppState, ui: &dyn Ui) -> FormOutcome {
        if let Err(outcome) = check(ui, &Self::schema(), &self.values()) {
            return outcome;
        }

        let request = CreateUserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone: self.phone.clone(),
        };

        let result = state.api.register_user(&request).await;
        finish(
            state,
            ui,
            None,
            result,
            "User registered successfully".to_string(),
            Route::Home,
            "Registration failed",
        )
        .await
    }
}

/// Sign-up form for an organization.
#[derive(Debug, Clone)]
pub struct OngRegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub city: String,
    pub uf: String,
}

impl OngRegistrationForm {
    pub fn schema() -> Schema {
        account_schema()
            .field(
                "city",
                vec![Rule::MinLength(4, "City must be at least 4 characters")],
            )
            .field(
                "uf",
                vec![Rule::MinLength(2, "State must be at least 2 characters")],
            )
    }

    fn values(&self) -> Vec<(&str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
            ("phone", self.phone.as_str()),
            ("city", self.city.as_str()),
            ("uf", self.uf.as_str()),
        ]
    }

    pub async fn submit(&self, state: &AppState, ui: &dyn Ui) -> FormOutcome {
        if let Err(outcome) = check(ui, &Self::schema(), &self.values()) {
            return outcome;
        }

        let request = CreateOngRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            uf: self.uf.clone(),
        };

        let result = state.api.register_ong(&request).await;
        finish(
            state,
            ui,
            None,
            result,
            "Organization registered successfully".to_string(),
            Route::Home,
            "Registration failed",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ong_schema_extends_account_schema() {
        let form = OngRegistrationForm {
            name: "Patas".into(),
            email: "contato@patas.org".into(),
            password: "secret1".into(),
            phone: "5511999999999".into(),
            city: "Rio".into(),
            uf: "R".into(),
        };

        let errors = OngRegistrationForm::schema()
            .validate(&form.values())
            .unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["city", "uf"]);
    }

    #[test]
    fn test_short_phone_rejected() {
        let form = UserRegistrationForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret1".into(),
            phone: "12345".into(),
        };

        let errors = UserRegistrationForm::schema()
            .validate(&form.values())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
    }
}
