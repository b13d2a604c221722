//! Streaming endpoints

use crate::api::models::StreamPermissionCheckResponse;
use crate::client::ApiClient;
use crate::error::{Error, Result};

impl ApiClient {
    /// Ask the backend whether the current user may stream a video
    pub async fn check_stream_permission(
        &self,
        video_id: &str,
    ) -> Result<StreamPermissionCheckResponse> {
        self.get(&format!("/stream/{}/check-permission", video_id)).await
    }

    /// Build the direct streaming URL for a video.
    ///
    /// The player cannot send headers, so the bearer token travels as a
    /// query parameter instead.
    pub async fn stream_url(&self, video_id: &str) -> Result<String> {
        let token = self.token().await.ok_or(Error::NotAuthenticated)?;
        Ok(format!("{}/stream/{}?token={}", self.base_url(), video_id, token))
    }
}
