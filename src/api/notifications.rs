//! Notification endpoints

use crate::api::models::{MessageResponse, NotificationListResponse, UnreadNotificationsResponse};
use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn notifications(&self) -> Result<NotificationListResponse> {
        self.get("/notifications").await
    }

    pub async fn unread_notifications(&self) -> Result<UnreadNotificationsResponse> {
        self.get("/notifications/unread").await
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<MessageResponse> {
        self.patch_empty(&format!("/notifications/mark-read/{}", notification_id))
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<MessageResponse> {
        self.patch_empty("/notifications/mark-all-read").await
    }

    pub async fn delete_notification(&self, notification_id: &str) -> Result<MessageResponse> {
        self.delete(&format!("/notifications/{}", notification_id)).await
    }
}
