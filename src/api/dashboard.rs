//! Dashboard statistics aggregated from the listing endpoints
//!
//! The backend has no stats endpoint, so both dashboards join several
//! concurrent listing calls and fail as a unit if any one of them fails.

use crate::api::models::AccessRequestStatus;
use crate::client::ApiClient;
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboardStats {
    pub total_videos: usize,
    pub total_students: usize,
    pub pending_requests: usize,
    /// The backend exposes no aggregate permission count; `None` means
    /// "not available" rather than zero.
    pub active_permissions: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboardStats {
    pub available_videos: usize,
    pub pending_requests: usize,
    pub granted_access: usize,
    /// Watch tracking is not exposed by the backend; `None` means
    /// "not available" rather than zero.
    pub recently_watched: Option<usize>,
}

impl ApiClient {
    pub async fn admin_stats(&self) -> Result<AdminDashboardStats> {
        let (videos, students, requests) = tokio::try_join!(
            self.list_videos(),
            self.list_students(),
            self.list_access_requests()
        )?;

        Ok(AdminDashboardStats {
            total_videos: videos.videos.len(),
            total_students: students.students.len(),
            pending_requests: requests
                .requests
                .iter()
                .filter(|request| request.request.status == AccessRequestStatus::Pending)
                .count(),
            active_permissions: None,
        })
    }

    pub async fn student_stats(&self) -> Result<StudentDashboardStats> {
        let (videos, permissions, requests) = tokio::try_join!(
            self.student_videos(),
            self.my_permissions(),
            self.my_requests()
        )?;

        Ok(StudentDashboardStats {
            available_videos: videos
                .videos
                .iter()
                .filter(|video| video.has_permission)
                .count(),
            pending_requests: requests
                .requests
                .iter()
                .filter(|request| request.request.status == AccessRequestStatus::Pending)
                .count(),
            granted_access: permissions.permissions.len(),
            recently_watched: None,
        })
    }
}
