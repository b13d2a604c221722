//! Authentication endpoints

use crate::api::models::{AuthResponse, HealthResponse, LoginRequest, RegisterRequest, User};
use crate::client::ApiClient;
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CurrentUserResponse {
    user: User,
}

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.post_public("/auth/login", request).await
    }

    /// Create an account and receive a bearer token
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.post_public("/auth/register", request).await
    }

    /// Fetch the profile behind the current token
    pub async fn current_user(&self) -> Result<User> {
        let response: CurrentUserResponse = self.get("/auth/me").await?;
        Ok(response.user)
    }

    /// Backend liveness probe
    pub async fn health(&self) -> Result<HealthResponse> {
        self.get("/health").await
    }
}
