//! Admin endpoints: video management and permission administration

use crate::api::models::{
    AccessRequestListResponse, AccessRequestResponse, GrantPermissionRequest, MessageResponse,
    PermissionGrantResponse, PermissionListResponse, RevokePermissionRequest, StudentListResponse,
    VideoDetailsResponse, VideoListResponse, VideoUploadRequest, VideoUploadResponse,
};
use crate::client::ApiClient;
use crate::error::{Error, Result};
use reqwest::multipart::{Form, Part};

impl ApiClient {
    /// Upload a video as a multipart form.
    ///
    /// The file is read from disk and sent as the `videoFile` part; optional
    /// metadata fields are only included when present.
    pub async fn upload_video(&self, request: &VideoUploadRequest) -> Result<VideoUploadResponse> {
        let file_name = request
            .video_file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Other(format!("Not a file: {}", request.video_file.display())))?;
        let bytes = tokio::fs::read(&request.video_file).await?;

        let mut form = Form::new().text("title", request.title.clone());
        if let Some(description) = &request.description {
            form = form.text("description", description.clone());
        }
        if let Some(thumbnail_url) = &request.thumbnail_url {
            form = form.text("thumbnailUrl", thumbnail_url.clone());
        }
        form = form.part("videoFile", Part::bytes(bytes).file_name(file_name));

        self.post_multipart("/admin/videos/upload", form).await
    }

    pub async fn list_videos(&self) -> Result<VideoListResponse> {
        self.get("/admin/videos/list").await
    }

    pub async fn video_details(&self, video_id: &str) -> Result<VideoDetailsResponse> {
        self.get(&format!("/admin/videos/details/{}", video_id)).await
    }

    pub async fn delete_video(&self, video_id: &str) -> Result<MessageResponse> {
        self.delete(&format!("/admin/videos/delete/{}", video_id)).await
    }

    pub async fn list_students(&self) -> Result<StudentListResponse> {
        self.get("/admin/videos/students").await
    }

    /// Grant a student standing access to a video
    pub async fn grant_permission(
        &self,
        request: &GrantPermissionRequest,
    ) -> Result<PermissionGrantResponse> {
        self.post("/admin/permissions/grant", request).await
    }

    /// Revoke a previously granted permission
    pub async fn revoke_permission(
        &self,
        request: &RevokePermissionRequest,
    ) -> Result<MessageResponse> {
        self.delete_with_body("/admin/permissions/revoke", request).await
    }

    pub async fn list_access_requests(&self) -> Result<AccessRequestListResponse> {
        self.get("/admin/permissions/requests").await
    }

    pub async fn approve_access_request(&self, request_id: &str) -> Result<AccessRequestResponse> {
        self.post_empty(&format!("/admin/permissions/approve/{}", request_id))
            .await
    }

    pub async fn reject_access_request(&self, request_id: &str) -> Result<AccessRequestResponse> {
        self.post_empty(&format!("/admin/permissions/reject/{}", request_id))
            .await
    }

    pub async fn video_permissions(&self, video_id: &str) -> Result<PermissionListResponse> {
        self.get(&format!("/admin/permissions/video/{}/permissions", video_id))
            .await
    }
}
