//! HTTP client wrapper for the Course2CEO REST API
//!
//! Builds authenticated requests, serializes JSON bodies, and normalizes
//! non-2xx responses into [`Error::Api`] with a display-ready message. The
//! typed endpoint methods live in the [`crate::api`] modules; this layer only
//! knows about paths, bodies, and the bearer token.

use crate::error::{Error, Result};
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Async client for the backend API.
///
/// Cloning is cheap and clones share the same token cell, so a token set by
/// the session store is visible to every handle.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Create a client for the given API base URL (no trailing slash needed)
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install the bearer token used for authenticated requests
    pub async fn set_token(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token().await {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and parse the JSON body into `T`.
    ///
    /// Non-2xx responses become [`Error::Api`] carrying the message probed
    /// from the error body.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json().await?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.http.get(self.url(path));
        self.execute(self.authed(builder).await).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.http.post(self.url(path)).json(body);
        self.execute(self.authed(builder).await).await
    }

    /// POST without the bearer header, for login and registration
    pub(crate) async fn post_public<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.http.post(self.url(path)).json(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.http.post(self.url(path));
        self.execute(self.authed(builder).await).await
    }

    pub(crate) async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.http.patch(self.url(path));
        self.execute(self.authed(builder).await).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.http.delete(self.url(path));
        self.execute(self.authed(builder).await).await
    }

    pub(crate) async fn delete_with_body<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.http.delete(self.url(path)).json(body);
        self.execute(self.authed(builder).await).await
    }

    /// POST a multipart form, attaching the bearer header manually so the
    /// JSON content type is not applied to the payload
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let builder = self.http.post(self.url(path)).multipart(form);
        self.execute(self.authed(builder).await).await
    }
}

/// Probe a failed response for a message: prefer a structured `error` field,
/// then `message`, then the HTTP status text.
async fn error_from_response(response: Response) -> Error {
    let status = response.status();
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("API request failed")
            .to_string()
    };

    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .or_else(|| body.get("message").and_then(serde_json::Value::as_str))
            .map(str::to_owned)
            .unwrap_or_else(fallback),
        Err(_) => fallback(),
    };

    Error::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/auth/login"), "http://localhost:5000/api/auth/login");
    }

    #[tokio::test]
    async fn test_token_shared_across_clones() {
        let client = ApiClient::new("http://localhost:5000/api");
        let clone = client.clone();

        client.set_token("abc".to_string()).await;
        assert_eq!(clone.token().await.as_deref(), Some("abc"));

        clone.clear_token().await;
        assert!(client.token().await.is_none());
    }
}
