//! Form validation and submission.
//!
//! Each form declares a [`Schema`]. Submitting validates locally first; a form that
//! fails validation shows inline field errors and never touches the network. A valid
//! form makes exactly one REST call and reports the result once.

mod incident;
mod login;
mod registration;

pub use incident::*;
pub use login::*;
pub use registration::*;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::auth::PrincipalKind;
use crate::errors::AppError;
use crate::fetch::report_failure;
use crate::ui::{Notification, Route, Ui};
use crate::AppState;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// A single validation rule.
#[derive(Debug, Clone)]
pub enum Rule {
    /// At least `n` characters
    MinLength(usize, &'static str),
    /// Looks like an email address
    Email(&'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        match self {
            Rule::MinLength(n, msg) => {
                if value.chars().count() >= *n {
                    Ok(())
                } else {
                    Err(*msg)
                }
            }
            Rule::Email(msg) => {
                if EMAIL_RE.is_match(value) {
                    Ok(())
                } else {
                    Err(*msg)
                }
            }
        }
    }
}

/// Ordered field rules for one form.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push((name, rules));
        self
    }

    /// Check `values` against the schema.
    ///
    /// Reports the first failing rule of each field, in schema order. A field missing
    /// from `values` is validated as the empty string.
    pub fn validate(&self, values: &[(&str, &str)]) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        for (name, rules) in &self.fields {
            let value = values
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| *v)
                .unwrap_or("");

            if let Some(msg) = rules.iter().find_map(|r| r.check(value).err()) {
                errors.push(FieldError {
                    field: *name,
                    message: msg.to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum FormOutcome {
    /// The backend accepted the submission
    Submitted,
    /// Local validation failed; nothing was sent
    Invalid(Vec<FieldError>),
    /// The request failed; the user has to resubmit
    Failed(AppError),
}

impl FormOutcome {
    #[cfg(test)]
    pub fn is_submitted(&self) -> bool {
        matches!(self, FormOutcome::Submitted)
    }

    pub fn into_result(self) -> Result<(), AppError> {
        match self {
            FormOutcome::Submitted => Ok(()),
            FormOutcome::Invalid(errors) => Err(AppError::Validation(errors)),
            FormOutcome::Failed(err) => Err(err),
        }
    }
}

/// Run local validation, showing inline errors on failure.
fn check(ui: &dyn Ui, schema: &Schema, values: &[(&str, &str)]) -> Result<(), FormOutcome> {
    schema.validate(values).map_err(|errors| {
        ui.show_field_errors(&errors);
        FormOutcome::Invalid(errors)
    })
}

/// Report the result of the single REST call a form makes.
///
/// `session` is the kind whose token went with the request; a rejected token logs
/// that kind out. Anonymous forms pass `None`.
async fn finish(
    state: &AppState,
    ui: &dyn Ui,
    session: Option<PrincipalKind>,
    result: Result<(), AppError>,
    success: String,
    destination: Route,
    failure_context: &str,
) -> FormOutcome {
    match (result, session) {
        (Ok(()), _) => {
            ui.notify(Notification::success(success));
            ui.navigate(destination);
            FormOutcome::Submitted
        }
        (Err(err), Some(kind)) => {
            report_failure(state, ui, kind, &err, failure_context).await;
            FormOutcome::Failed(err)
        }
        (Err(err), None) => {
            ui.notify(err.notification(failure_context));
            FormOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .field("name", vec![Rule::MinLength(3, "Name is required")])
            .field("email", vec![Rule::Email("A valid email is required")])
    }

    #[test]
    fn test_valid_values_pass() {
        assert!(schema()
            .validate(&[("name", "Ana"), ("email", "ana@example.com")])
            .is_ok());
    }

    #[test]
    fn test_errors_follow_schema_order() {
        let errors = schema()
            .validate(&[("email", "not-an-email"), ("name", "Al")])
            .unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError {
                    field: "name",
                    message: "Name is required".into()
                },
                FieldError {
                    field: "email",
                    message: "A valid email is required".into()
                },
            ]
        );
    }

    #[test]
    fn test_missing_field_is_empty() {
        let errors = schema().validate(&[("name", "Ana")]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_invalid_outcome_maps_to_validation_error() {
        let errors = schema().validate(&[]).unwrap_err();
        let err = FormOutcome::Invalid(errors).into_result().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert_eq!(
            err.message(),
            "name: Name is required; email: A valid email is required"
        );
    }

    #[test]
    fn test_email_shapes() {
        let rule = Rule::Email("bad");
        assert!(rule.check("a@b.com").is_ok());
        assert!(rule.check("not-an-email").is_err());
        assert!(rule.check("a@b").is_err());
        assert!(rule.check("a b@c.com").is_err());
    }

    #[test]
    fn test_min_length_counts_characters() {
        let rule = Rule::MinLength(4, "short");
        assert!(rule.check("São ").is_ok());
        assert!(rule.check("São").is_err());
    }
}
