//! In-memory session service for tests.
//!
//! Behaves like the hosted auth API: unknown pairs are rejected with
//! `InvalidCredentials`, sign-up registers a user and opens a session, and
//! issued tokens are JWT-shaped with a one hour `exp`.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use base64::Engine as _;

use crate::error::AuthError;
use crate::session::{AuthSession, BackendUser, SessionService, SignUp};

#[derive(Debug, Default)]
struct State {
    /// email -> (password, user id)
    users: HashMap<String, (String, String)>,
    /// token -> user id
    sessions: HashMap<String, String>,
    revoked: HashSet<String>,
    next_id: u64,
    sign_ups: usize,
    unavailable: bool,
}

#[derive(Debug, Default)]
pub struct MemorySessionService {
    state: Mutex<State>,
}

impl MemorySessionService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a backend user.
    pub fn register(&self, email: &str, password: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.next_id += 1;
            let id = format!("user-{}", state.next_id);
            state
                .users
                .insert(email.to_string(), (password.to_string(), id));
        }
    }

    /// Make every subsequent call fail with a 503, or restore service.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut state) = self.state.lock() {
            state.unavailable = unavailable;
        }
    }

    #[must_use]
    pub fn sign_up_count(&self) -> usize {
        self.state.lock().map(|s| s.sign_ups).unwrap_or_default()
    }

    /// Number of sessions that have not been signed out.
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.state.lock().map(|s| s.sessions.len()).unwrap_or_default()
    }

    fn with_state<T>(
        &self,
        f: impl FnOnce(&mut State) -> Result<T, AuthError>,
    ) -> Result<T, AuthError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| AuthError::Other("session service lock poisoned".into()))?;
        if state.unavailable {
            return Err(AuthError::Api {
                status: 503,
                message: "service unavailable".into(),
            });
        }
        f(&mut state)
    }
}

impl State {
    fn issue(&mut self, user_id: &str, email: &str) -> AuthSession {
        self.next_id += 1;
        let exp = chrono::Utc::now().timestamp() + 3600;
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let token = format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            engine.encode(format!(
                r#"{{"sub":"{user_id}","exp":{exp},"jti":"{}"}}"#,
                self.next_id
            )),
            engine.encode("memory"),
        );
        self.sessions.insert(token.clone(), user_id.to_string());
        AuthSession {
            access_token: token,
            user: BackendUser {
                id: user_id.to_string(),
                email: Some(email.to_string()),
            },
        }
    }

    fn email_of(&self, user_id: &str) -> Option<String> {
        self.users
            .iter()
            .find(|(_, (_, id))| id == user_id)
            .map(|(email, _)| email.clone())
    }
}

impl SessionService for MemorySessionService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        self.with_state(|state| {
            let Some((stored, id)) = state.users.get(email).cloned() else {
                return Err(AuthError::InvalidCredentials);
            };
            if stored != password {
                return Err(AuthError::InvalidCredentials);
            }
            Ok(state.issue(&id, email))
        })
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUp, AuthError> {
        self.with_state(|state| {
            if state.users.contains_key(email) {
                return Err(AuthError::Api {
                    status: 422,
                    message: "User already registered".into(),
                });
            }
            state.sign_ups += 1;
            state.next_id += 1;
            let id = format!("user-{}", state.next_id);
            state
                .users
                .insert(email.to_string(), (password.to_string(), id.clone()));
            let session = state.issue(&id, email);
            Ok(SignUp {
                user: session.user,
                access_token: Some(session.access_token),
            })
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.with_state(|state| {
            state.sessions.remove(access_token);
            state.revoked.insert(access_token.to_string());
            Ok(())
        })
    }

    async fn user(&self, access_token: &str) -> Result<Option<BackendUser>, AuthError> {
        self.with_state(|state| {
            if state.revoked.contains(access_token) {
                return Ok(None);
            }
            Ok(state.sessions.get(access_token).map(|id| BackendUser {
                id: id.clone(),
                email: state.email_of(id),
            }))
        })
    }
}
