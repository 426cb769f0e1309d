//! Backend session service.
//!
//! [`RestSessionService`] talks to the hosted auth API under `{url}/auth/v1`:
//! `POST /token?grant_type=password`, `POST /signup`, `POST /logout` and
//! `GET /user`.

use placement_config::BackendConfig;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::AuthError;

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid login credentials";

/// The backend's view of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A live backend session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: BackendUser,
}

/// Result of a sign-up. `access_token` is absent when the backend requires
/// email confirmation before issuing a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUp {
    pub user: BackendUser,
    pub access_token: Option<String>,
}

#[allow(async_fn_in_trait)]
pub trait SessionService {
    /// Password sign-in.
    ///
    /// Returns `AuthError::InvalidCredentials` when the backend does not know
    /// the pair.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUp, AuthError>;

    /// Invalidate the session behind `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// The user behind `access_token`, or `None` if the token is no longer valid.
    async fn user(&self, access_token: &str) -> Result<Option<BackendUser>, AuthError>;
}

pub struct RestSessionService {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
}

impl RestSessionService {
    /// # Errors
    ///
    /// Returns `AuthError::Other` if the backend section is incomplete, or
    /// `AuthError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &BackendConfig) -> Result<Self, AuthError> {
        config
            .validate()
            .map_err(|e| AuthError::Other(e.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("placement/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            auth_url: config.auth_url(),
            anon_key: config.anon_key.clone(),
        })
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        bearer: &str,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.auth_url);
        tracing::debug!(%method, url, "auth request");
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }
}

impl SessionService for RestSessionService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let resp = self
            .request(
                reqwest::Method::POST,
                "/token?grant_type=password",
                &self.anon_key,
            )
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json::<AuthSession>().await?)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUp, AuthError> {
        let resp = self
            .request(reqwest::Method::POST, "/signup", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let body = check_response(resp).await?.json::<Value>().await?;
        parse_sign_up(body)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let resp = self
            .request(reqwest::Method::POST, "/logout", access_token)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    async fn user(&self, access_token: &str) -> Result<Option<BackendUser>, AuthError> {
        let resp = self
            .request(reqwest::Method::GET, "/user", access_token)
            .send()
            .await?;
        if matches!(resp.status().as_u16(), 401 | 403) {
            return Ok(None);
        }
        let resp = check_response(resp).await?;
        Ok(Some(resp.json::<BackendUser>().await?))
    }
}

/// Sign-up answers with a full session, `{ "user": ... }`, or the bare user.
pub(crate) fn parse_sign_up(body: Value) -> Result<SignUp, AuthError> {
    let access_token = body
        .get("access_token")
        .and_then(Value::as_str)
        .map(String::from);
    let user = match body.get("user") {
        Some(user) if user.is_object() => user.clone(),
        _ => body,
    };
    let user = serde_json::from_value::<BackendUser>(user)
        .map_err(|e| AuthError::Other(format!("unexpected sign-up response: {e}")))?;
    Ok(SignUp { user, access_token })
}

/// Map non-success statuses to [`AuthError`], recognising the backend's
/// invalid-credentials answer.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, AuthError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = api_message(&body).unwrap_or(body);
    if message.contains(INVALID_CREDENTIALS_MESSAGE) {
        return Err(AuthError::InvalidCredentials);
    }
    Err(AuthError::Api { status, message })
}

/// The auth API has used `msg`, `error_description` and `message` over time.
fn api_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    ["msg", "error_description", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn invalid_grant_maps_to_invalid_credentials() {
        let resp = mock_response(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert!(matches!(
            check_response(resp).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn newer_error_shape_maps_to_invalid_credentials() {
        let resp = mock_response(
            400,
            r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#,
        );
        assert!(matches!(
            check_response(resp).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn other_errors_keep_status_and_message() {
        let resp = mock_response(429, r#"{"msg":"Email rate limit exceeded"}"#);
        match check_response(resp).await.unwrap_err() {
            AuthError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Email rate limit exceeded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn session_body_decodes() {
        let resp = mock_response(
            200,
            r#"{"access_token":"jwt","token_type":"bearer","expires_in":3600,
                "refresh_token":"r","user":{"id":"u-1","email":"admin@startittraining.com","aud":"authenticated"}}"#,
        );
        let session: AuthSession = check_response(resp).await.unwrap().json().await.unwrap();
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.user.id, "u-1");
    }

    #[test]
    fn sign_up_with_session() {
        let signup = parse_sign_up(json!({
            "access_token": "jwt",
            "user": {"id": "u-1", "email": "a@b.c"}
        }))
        .unwrap();
        assert_eq!(signup.access_token.as_deref(), Some("jwt"));
        assert_eq!(signup.user.id, "u-1");
    }

    #[test]
    fn sign_up_pending_confirmation_returns_bare_user() {
        let signup = parse_sign_up(json!({
            "id": "u-2",
            "email": "a@b.c",
            "confirmation_sent_at": "2025-01-15T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(signup.access_token, None);
        assert_eq!(signup.user.id, "u-2");
    }

    #[test]
    fn sign_up_garbage_is_an_error() {
        assert!(parse_sign_up(json!({"nope": true})).is_err());
    }

    #[tokio::test]
    async fn unanswered_auth_requests_time_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        let config = BackendConfig {
            url: format!("http://{addr}"),
            anon_key: "anon-key".into(),
            request_timeout_secs: 1,
        };
        let sessions = RestSessionService::from_config(&config).unwrap();

        assert!(matches!(
            sessions.sign_in("admin@startittraining.com", "admin123").await,
            Err(AuthError::Timeout)
        ));
        assert!(matches!(
            sessions.user("some-token").await,
            Err(AuthError::Timeout)
        ));
    }
}
