//! Typed request and response contracts for the Course2CEO backend
//!
//! The wire format is JSON with camelCase field names and RFC 3339
//! timestamps. Unknown fields are ignored so the client stays tolerant of
//! additive backend changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// User roles on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator - uploads videos, manages permissions
    Admin,
    /// Student - browses videos and requests access
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Student => write!(f, "student"),
        }
    }
}

/// A platform account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Short user reference embedded in other records
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Reference to a user without an email (e.g. the granting admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

/// An uploaded video
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Video with its uploader attached (admin listings)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoWithCreator {
    #[serde(flatten)]
    pub video: Video,
    pub creator: UserSummary,
}

/// Compact view of a student's own access request on a video
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequestSummary {
    pub id: String,
    pub status: AccessRequestStatus,
    pub created_at: DateTime<Utc>,
}

/// Video as seen by a student: creator plus the caller's access state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoWithPermission {
    #[serde(flatten)]
    pub video: VideoWithCreator,
    pub has_permission: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_request: Option<AccessRequestSummary>,
}

/// Video detail payload; permissions are present for admin callers only
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    #[serde(flatten)]
    pub video: VideoWithCreator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<PermissionWithDetails>>,
}

/// A standing grant allowing a student to view a video
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: String,
    pub student_id: String,
    pub video_id: String,
    pub granted_by: String,
    pub granted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionWithDetails {
    #[serde(flatten)]
    pub permission: Permission,
    pub student: UserSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granted_by_user: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
}

/// Lifecycle state of a student's access request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for AccessRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessRequestStatus::Pending => write!(f, "pending"),
            AccessRequestStatus::Approved => write!(f, "approved"),
            AccessRequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A student's pending ask for permission to view a video
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequest {
    pub id: String,
    pub student_id: String,
    pub video_id: String,
    pub status: AccessRequestStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Short video reference embedded in requests and notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRef {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRequestWithDetails {
    #[serde(flatten)]
    pub request: AccessRequest,
    pub student: UserSummary,
    pub video: VideoRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationReadStatus {
    Read,
    Unread,
}

/// An admin-facing notification, usually tied to an access request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub admin_id: String,
    pub message: String,
    pub read_status: NotificationReadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_request_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRequest {
    pub id: String,
    pub student_id: String,
    pub video_id: String,
    pub status: AccessRequestStatus,
    pub created_at: DateTime<Utc>,
    pub student: UserSummary,
    pub video: VideoRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationWithDetails {
    #[serde(flatten)]
    pub notification: Notification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_request: Option<RelatedRequest>,
}

// Response envelopes

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoUploadResponse {
    pub message: String,
    pub video: Video,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoWithCreator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentVideoListResponse {
    pub videos: Vec<VideoWithPermission>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDetailsResponse {
    pub video: VideoDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentListResponse {
    pub students: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PermissionGrantResponse {
    pub message: String,
    pub permission: Permission,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionListResponse {
    pub permissions: Vec<PermissionWithDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRequestListResponse {
    pub requests: Vec<AccessRequestWithDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessRequestResponse {
    pub message: String,
    pub request: AccessRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationWithDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadNotificationsResponse {
    pub notifications: Vec<NotificationWithDetails>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamPermissionCheckResponse {
    pub video_id: String,
    pub has_permission: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

// Request bodies

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaulted to [`Role::Student`] by the session store when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantPermissionRequest {
    pub student_id: String,
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokePermissionRequest {
    pub student_id: String,
    pub video_id: String,
}

/// Video upload form; sent as multipart, not JSON
#[derive(Debug, Clone)]
pub struct VideoUploadRequest {
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub video_file: PathBuf,
}
