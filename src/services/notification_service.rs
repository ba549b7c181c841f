use async_trait::async_trait;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::Notification;
use crate::services::ApiClient;

#[derive(Serialize)]
struct ReadRequest {
    read: bool,
}

#[async_trait(?Send)]
pub trait NotificationApi {
    async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError>;
    async fn mark_notification_read(&self, id: &str) -> Result<Notification, ApiError>;
}

#[async_trait(?Send)]
impl NotificationApi for ApiClient {
    async fn list_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        let notifications: Vec<Notification> = self.get("/notifications").await?;
        log::info!("🔔 {} notifications loaded", notifications.len());
        Ok(notifications)
    }

    async fn mark_notification_read(&self, id: &str) -> Result<Notification, ApiError> {
        self.patch(&format!("/notifications/{}", id), &ReadRequest { read: true }).await
    }
}
