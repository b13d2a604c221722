//! Student endpoints: browsing videos and requesting access

use crate::api::models::{
    AccessRequestListResponse, AccessRequestResponse, PermissionListResponse,
    StudentVideoListResponse, VideoDetailsResponse,
};
use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// List all videos with the caller's access state attached
    pub async fn student_videos(&self) -> Result<StudentVideoListResponse> {
        self.get("/student/videos/list").await
    }

    pub async fn student_video_details(&self, video_id: &str) -> Result<VideoDetailsResponse> {
        self.get(&format!("/student/videos/details/{}", video_id)).await
    }

    /// Ask an admin for permission to view a video
    pub async fn request_access(&self, video_id: &str) -> Result<AccessRequestResponse> {
        self.post_empty(&format!("/student/videos/request-access/{}", video_id))
            .await
    }

    pub async fn my_permissions(&self) -> Result<PermissionListResponse> {
        self.get("/student/videos/my-permissions").await
    }

    pub async fn my_requests(&self) -> Result<AccessRequestListResponse> {
        self.get("/student/videos/my-requests").await
    }
}
