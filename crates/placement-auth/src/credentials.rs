//! Admin credential verification.
//!
//! A [`CredentialVerifier`] decides whether a username/password pair grants
//! admin access and which backend identity the session is opened under.
//! [`DemoCredentials`] is the built-in single-admin verifier.

use placement_core::entities::SessionUser;
use placement_core::enums::AdminRole;

use crate::session::BackendUser;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";
pub const DEMO_EMAIL: &str = "admin@startittraining.com";
const DEMO_BACKEND_PASSWORD: &str = "admin123";

/// The email/password the gate signs in to the backend with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendIdentity {
    pub email: String,
    pub password: String,
}

pub trait CredentialVerifier {
    /// Accept or reject an admin login. `None` means rejected.
    fn verify(&self, username: &str, password: &str) -> Option<BackendIdentity>;

    /// Build the session user for a backend user the gate has a session for.
    fn session_user(&self, user: &BackendUser) -> SessionUser;
}

/// Exactly one accepted pair: `admin` / `admin123`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCredentials;

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<BackendIdentity> {
        (username == DEMO_USERNAME && password == DEMO_PASSWORD).then(|| BackendIdentity {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_BACKEND_PASSWORD.to_string(),
        })
    }

    fn session_user(&self, user: &BackendUser) -> SessionUser {
        SessionUser {
            id: user.id.clone(),
            username: DEMO_USERNAME.to_string(),
            email: user
                .email
                .clone()
                .filter(|email| !email.is_empty())
                .unwrap_or_else(|| DEMO_EMAIL.to_string()),
            role: AdminRole::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn accepts_demo_pair() {
        assert_eq!(
            DemoCredentials.verify("admin", "admin123"),
            Some(BackendIdentity {
                email: DEMO_EMAIL.into(),
                password: "admin123".into(),
            })
        );
    }

    #[rstest]
    #[case("admin", "wrong")]
    #[case("Admin", "admin123")]
    #[case("admin ", "admin123")]
    #[case("", "")]
    #[case("root", "admin123")]
    fn rejects_everything_else(#[case] username: &str, #[case] password: &str) {
        assert_eq!(DemoCredentials.verify(username, password), None);
    }

    #[test]
    fn session_user_defaults_missing_email() {
        let user = DemoCredentials.session_user(&BackendUser {
            id: "u-1".into(),
            email: None,
        });
        assert_eq!(user.email, DEMO_EMAIL);
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, AdminRole::Admin);
    }
}
