//! PostgREST-style HTTP table backend.
//!
//! Requests go to `{url}/rest/v1/{table}`. Every request carries the project
//! `apikey`; the bearer token is the signed-in user's access token when one is
//! attached, otherwise the access key itself.

use std::sync::RwLock;

use placement_config::BackendConfig;
use serde_json::Value;

use crate::backend::{Query, TableBackend};
use crate::error::StoreError;

/// HTTP client for the hosted table API.
pub struct RestBackend {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
}

impl RestBackend {
    /// Build a backend from validated configuration.
    ///
    /// The configured request timeout applies to every call.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` if the backend section is incomplete,
    /// or `StoreError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &BackendConfig) -> Result<Self, StoreError> {
        config
            .validate()
            .map_err(|e| StoreError::InvalidState(e.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("placement/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            rest_url: config.rest_url(),
            anon_key: config.anon_key.clone(),
            access_token: RwLock::new(None),
        })
    }

    fn bearer(&self) -> String {
        let token = self
            .access_token
            .read()
            .ok()
            .and_then(|guard| guard.clone());
        format!("Bearer {}", token.unwrap_or_else(|| self.anon_key.clone()))
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, url, "table request");
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header(reqwest::header::AUTHORIZATION, self.bearer())
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }
}

impl TableBackend for RestBackend {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>, StoreError> {
        let url = select_url(&self.rest_url, table, query);
        let resp = check_response(self.request(reqwest::Method::GET, &url).send().await?).await?;
        Ok(resp.json::<Vec<Value>>().await?)
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value, StoreError> {
        let url = self.table_url(table);
        let resp = check_response(
            self.request(reqwest::Method::POST, &url)
                .header("Prefer", "return=representation")
                .json(&Value::Array(vec![row]))
                .send()
                .await?,
        )
        .await?;
        let mut rows = resp.json::<Vec<Value>>().await?;
        if rows.is_empty() {
            return Err(StoreError::NoResult);
        }
        Ok(rows.swap_remove(0))
    }

    async fn update(
        &self,
        table: &str,
        id: &str,
        patch: Value,
    ) -> Result<Option<Value>, StoreError> {
        let url = id_url(&self.rest_url, table, id);
        let resp = check_response(
            self.request(reqwest::Method::PATCH, &url)
                .header("Prefer", "return=representation")
                .json(&patch)
                .send()
                .await?,
        )
        .await?;
        let rows = resp.json::<Vec<Value>>().await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let url = id_url(&self.rest_url, table, id);
        check_response(self.request(reqwest::Method::DELETE, &url).send().await?).await?;
        Ok(())
    }

    fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.access_token.write() {
            *guard = token;
        }
    }
}

/// Build `{rest_url}/{table}?select=*&col=eq.value&order=col.desc`.
pub(crate) fn select_url(rest_url: &str, table: &str, query: &Query) -> String {
    let mut url = format!("{rest_url}/{table}?select=*");
    for (column, value) in &query.filters {
        url.push_str(&format!(
            "&{}=eq.{}",
            urlencoding::encode(column),
            urlencoding::encode(&filter_literal(value))
        ));
    }
    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        url.push_str(&format!(
            "&order={}.{direction}",
            urlencoding::encode(&order.column)
        ));
    }
    url
}

fn id_url(rest_url: &str, table: &str, id: &str) -> String {
    format!("{rest_url}/{table}?id=eq.{}", urlencoding::encode(id))
}

fn filter_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Map non-success statuses to [`StoreError::Api`].
///
/// The API's JSON error body carries a `message` field; the raw body is used
/// when it does not.
pub(crate) async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, StoreError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
        .unwrap_or(body);
    Err(StoreError::Api { status, message })
}
