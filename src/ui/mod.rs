//! Presentation seam.
//!
//! Pages and forms report to the user only through [`Ui`]: transient notifications,
//! navigation, a full reload, and inline field errors. The CLI implements it with
//! [`ConsoleUi`]; tests record the calls.

use std::fmt;

use crate::forms::FieldError;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient user-visible message (a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NotificationLevel::Success => "ok",
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warn",
            NotificationLevel::Error => "error",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

/// Navigation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// User login
    Home,
    /// Organization login
    AuthOng,
    Dashboard,
    DashboardOng,
    Register,
    RegisterOng,
    RegisterIncident,
    ProfileUser,
    ProfileOng,
    DetailsIncident {
        id: String,
    },
    EditIncident {
        id: String,
    },
    /// Previous page in history
    Back,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::AuthOng => "/auth-ong".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::DashboardOng => "/dashboard-ong".to_string(),
            Route::Register => "/register".to_string(),
            Route::RegisterOng => "/register-ong".to_string(),
            Route::RegisterIncident => "/register-incident".to_string(),
            Route::ProfileUser => "/profile-user".to_string(),
            Route::ProfileOng => "/profile-ong".to_string(),
            Route::DetailsIncident { id } => format!("/details-incident?id={}", id),
            Route::EditIncident { id } => format!("/edit-incident?id={}", id),
            Route::Back => "<back>".to_string(),
        }
    }
}

/// A labelled navigation button on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub route: Route,
}

impl Link {
    pub fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.route.path())
    }
}

/// Everything a page may do to the screen besides rendering its view.
pub trait Ui {
    fn notify(&self, notification: Notification);
    fn navigate(&self, route: Route);
    /// Full page reload.
    fn reload(&self);
    fn show_field_errors(&self, errors: &[FieldError]);
}

/// Terminal implementation used by the CLI.
#[derive(Debug, Default)]
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", notification);
    }

    fn navigate(&self, route: Route) {
        tracing::debug!("Navigating to {}", route.path());
        println!("-> {}", route.path());
    }

    fn reload(&self) {
        println!("-> (reload)");
    }

    fn show_field_errors(&self, errors: &[FieldError]) {
        for e in errors {
            eprintln!("  {}: {}", e.field, e.message);
        }
    }
}
