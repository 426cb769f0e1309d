//! The admin session gate.
//!
//! Login asks the [`CredentialVerifier`] first; only an accepted pair reaches
//! the backend. The backend session token is kept in the [`TokenStore`] so
//! later invocations can rebuild the session user.

use placement_config::BackendConfig;
use placement_core::entities::SessionUser;

use crate::credentials::{CredentialVerifier, DemoCredentials};
use crate::error::AuthError;
use crate::expiry::is_expired;
use crate::session::{RestSessionService, SessionService};
use crate::token_store::TokenStore;

pub struct SessionGate<
    S: SessionService = RestSessionService,
    V: CredentialVerifier = DemoCredentials,
> {
    sessions: S,
    verifier: V,
    tokens: TokenStore,
}

impl SessionGate<RestSessionService, DemoCredentials> {
    /// Gate against the hosted auth API with the built-in admin and the
    /// system token store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the session service cannot be built.
    pub fn from_config(config: &BackendConfig) -> Result<Self, AuthError> {
        Ok(Self::new(
            RestSessionService::from_config(config)?,
            DemoCredentials,
            TokenStore::system(),
        ))
    }
}

impl<S: SessionService, V: CredentialVerifier> SessionGate<S, V> {
    pub const fn new(sessions: S, verifier: V, tokens: TokenStore) -> Self {
        Self {
            sessions,
            verifier,
            tokens,
        }
    }

    #[must_use]
    pub const fn sessions(&self) -> &S {
        &self.sessions
    }

    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Log in, returning the error instead of swallowing it.
    ///
    /// `Ok(None)` means the verifier rejected the pair; the backend is not
    /// contacted in that case. If the backend does not know the admin
    /// identity yet, it is signed up.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` from the session service or the token store.
    pub async fn try_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<SessionUser>, AuthError> {
        let Some(identity) = self.verifier.verify(username, password) else {
            tracing::debug!(username, "credentials rejected");
            return Ok(None);
        };

        let (user, token) = match self
            .sessions
            .sign_in(&identity.email, &identity.password)
            .await
        {
            Ok(session) => (session.user, Some(session.access_token)),
            Err(AuthError::InvalidCredentials) => {
                tracing::info!(
                    email = %identity.email,
                    "admin identity unknown to backend; signing up"
                );
                let signup = self
                    .sessions
                    .sign_up(&identity.email, &identity.password)
                    .await?;
                (signup.user, signup.access_token)
            }
            Err(error) => return Err(error),
        };

        match token {
            Some(token) => self.tokens.store(&token)?,
            None => tracing::warn!("sign-up did not open a session; confirm the admin email"),
        }
        Ok(Some(self.verifier.session_user(&user)))
    }

    /// `None` on rejected credentials or any failure (logged).
    pub async fn login(&self, username: &str, password: &str) -> Option<SessionUser> {
        match self.try_login(username, password).await {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(%error, "login failed");
                None
            }
        }
    }

    /// End the backend session and forget the stored token.
    ///
    /// Backend failures are logged; the local token is cleared regardless.
    pub async fn logout(&self) {
        if let Some(token) = self.tokens.load()
            && let Err(error) = self.sessions.sign_out(&token).await
        {
            tracing::warn!(%error, "backend sign-out failed");
        }
        if let Err(error) = self.tokens.delete() {
            tracing::warn!(%error, "failed to clear stored session");
        }
    }

    /// The stored token, unless it has visibly expired.
    ///
    /// An expired token is deleted from the store.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        let token = self.tokens.load()?;
        if is_expired(&token) {
            tracing::debug!("stored session token expired; discarding");
            if let Err(error) = self.tokens.delete() {
                tracing::warn!(%error, "failed to clear expired session");
            }
            return None;
        }
        Some(token)
    }

    /// # Errors
    ///
    /// Returns `AuthError` if the session service call fails.
    pub async fn try_get_current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        let Some(token) = self.access_token() else {
            return Ok(None);
        };
        Ok(self
            .sessions
            .user(&token)
            .await?
            .map(|user| self.verifier.session_user(&user)))
    }

    /// The user behind the stored session, `None` when there is none or on failure.
    pub async fn get_current_user(&self) -> Option<SessionUser> {
        match self.try_get_current_user().await {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(%error, "failed to resolve current user");
                None
            }
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.get_current_user().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use placement_core::enums::AdminRole;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::credentials::{DEMO_EMAIL, DEMO_PASSWORD};
    use crate::expiry::make_jwt_with_exp;
    use crate::memory::MemorySessionService;

    fn gate() -> SessionGate<MemorySessionService> {
        SessionGate::new(
            MemorySessionService::new(),
            DemoCredentials,
            TokenStore::disabled(),
        )
    }

    #[tokio::test]
    async fn demo_login_yields_admin() {
        let gate = gate();
        gate.sessions().register(DEMO_EMAIL, DEMO_PASSWORD);

        let user = gate.login("admin", "admin123").await.expect("login");
        assert_eq!(user.username, "admin");
        assert_eq!(user.email, DEMO_EMAIL);
        assert_eq!(user.role, AdminRole::Admin);
        assert_eq!(gate.sessions().sign_up_count(), 0);
        assert!(gate.access_token().is_some());
    }

    #[tokio::test]
    async fn wrong_password_never_reaches_backend() {
        let gate = gate();
        gate.sessions().set_unavailable(true);
        assert_eq!(gate.try_login("admin", "nope").await.unwrap(), None);
        assert!(gate.tokens().load().is_none());
    }

    #[tokio::test]
    async fn unknown_backend_identity_is_signed_up() {
        let gate = gate();
        let user = gate.login("admin", "admin123").await.expect("login");
        assert_eq!(gate.sessions().sign_up_count(), 1);
        assert_eq!(user.role, AdminRole::Admin);

        // The second login signs in against the now-registered identity.
        gate.logout().await;
        gate.login("admin", "admin123").await.expect("login");
        assert_eq!(gate.sessions().sign_up_count(), 1);
    }

    #[tokio::test]
    async fn backend_outage_fails_login_soft() {
        let gate = gate();
        gate.sessions().set_unavailable(true);
        assert_eq!(gate.login("admin", "admin123").await, None);
        assert!(matches!(
            gate.try_login("admin", "admin123").await,
            Err(AuthError::Api { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn current_user_follows_session() {
        let gate = gate();
        assert_eq!(gate.get_current_user().await, None);

        let user = gate.login("admin", "admin123").await.unwrap();
        assert_eq!(gate.get_current_user().await, Some(user));
        assert!(gate.is_authenticated().await);

        gate.logout().await;
        assert_eq!(gate.get_current_user().await, None);
        assert!(!gate.is_authenticated().await);
        assert_eq!(gate.sessions().active_sessions(), 0);
    }

    #[tokio::test]
    async fn logout_clears_token_even_when_backend_fails() {
        let gate = gate();
        gate.login("admin", "admin123").await.unwrap();
        gate.sessions().set_unavailable(true);
        gate.logout().await;
        assert!(gate.tokens().load().is_none());
    }

    #[tokio::test]
    async fn expired_token_is_discarded_without_backend_call() {
        let gate = gate();
        let expired = make_jwt_with_exp(chrono::Utc::now().timestamp() - 60);
        gate.tokens().store(&expired).unwrap();
        gate.sessions().set_unavailable(true);

        assert_eq!(gate.try_get_current_user().await.unwrap(), None);
        assert!(gate.tokens().load().is_none());
    }

    #[tokio::test]
    async fn revoked_token_resolves_to_no_user() {
        let gate = gate();
        gate.login("admin", "admin123").await.unwrap();
        let token = gate.tokens().load().unwrap();
        gate.sessions().sign_out(&token).await.unwrap();
        assert_eq!(gate.get_current_user().await, None);
    }
}
