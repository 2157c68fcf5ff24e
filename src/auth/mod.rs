//! Authentication state.
//!
//! A session holds at most one bearer token per principal kind. All per-kind data
//! (storage keys, endpoints, routes) hangs off [`PrincipalKind`] so callers never
//! branch on the kind themselves.

mod session;

pub use session::*;

use crate::db::{AUTH_ONG_TOKEN_KEY, AUTH_TOKEN_KEY, ONG_DATA_KEY, USER_DATA_KEY};
use crate::ui::Route;

/// Which account type a token or profile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrincipalKind {
    User,
    Organization,
}

impl PrincipalKind {
    pub const ALL: [PrincipalKind; 2] = [PrincipalKind::User, PrincipalKind::Organization];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrincipalKind::User => "user",
            PrincipalKind::Organization => "organization",
        }
    }

    /// Durable storage key of the bearer token.
    pub fn token_key(&self) -> &'static str {
        match self {
            PrincipalKind::User => AUTH_TOKEN_KEY,
            PrincipalKind::Organization => AUTH_ONG_TOKEN_KEY,
        }
    }

    /// Durable storage key of the profile mirror.
    pub fn profile_key(&self) -> &'static str {
        match self {
            PrincipalKind::User => USER_DATA_KEY,
            PrincipalKind::Organization => ONG_DATA_KEY,
        }
    }

    pub fn login_endpoint(&self) -> &'static str {
        match self {
            PrincipalKind::User => "auth/login",
            PrincipalKind::Organization => "auth-ong/login",
        }
    }

    pub fn profile_endpoint(&self) -> &'static str {
        match self {
            PrincipalKind::User => "auth/me",
            PrincipalKind::Organization => "auth-ong/me",
        }
    }

    pub fn login_route(&self) -> Route {
        match self {
            PrincipalKind::User => Route::Home,
            PrincipalKind::Organization => Route::AuthOng,
        }
    }

    pub fn profile_route(&self) -> Route {
        match self {
            PrincipalKind::User => Route::ProfileUser,
            PrincipalKind::Organization => Route::ProfileOng,
        }
    }

    pub fn dashboard_route(&self) -> Route {
        match self {
            PrincipalKind::User => Route::Dashboard,
            PrincipalKind::Organization => Route::DashboardOng,
        }
    }
}

/// Value of the `Authorization` header for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_keys_are_distinct() {
        let u = PrincipalKind::User;
        let o = PrincipalKind::Organization;
        assert_eq!(u.token_key(), "authToken");
        assert_eq!(o.token_key(), "authOngToken");
        assert_eq!(u.profile_key(), "userData");
        assert_eq!(o.profile_key(), "ongData");
        assert_ne!(u.login_route(), o.login_route());
        assert_eq!(u.profile_route(), Route::ProfileUser);
        assert_eq!(o.profile_route(), Route::ProfileOng);
    }

    #[test]
    fn test_bearer() {
        assert_eq!(bearer("tok123"), "Bearer tok123");
    }
}
