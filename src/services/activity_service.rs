use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Activity, ActivityPayload};
use crate::services::ApiClient;

#[async_trait(?Send)]
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<Vec<Activity>, ApiError>;
    async fn create_activity(&self, payload: ActivityPayload) -> Result<Activity, ApiError>;
    async fn update_activity(&self, id: &str, payload: ActivityPayload) -> Result<Activity, ApiError>;
    async fn delete_activity(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl ActivityApi for ApiClient {
    async fn list_activities(&self) -> Result<Vec<Activity>, ApiError> {
        let activities: Vec<Activity> = self.get("/activities").await?;
        log::info!("📅 {} activities loaded", activities.len());
        Ok(activities)
    }

    async fn create_activity(&self, payload: ActivityPayload) -> Result<Activity, ApiError> {
        self.post("/activities", &payload).await
    }

    async fn update_activity(&self, id: &str, payload: ActivityPayload) -> Result<Activity, ApiError> {
        self.put(&format!("/activities/{}", id), &payload).await
    }

    async fn delete_activity(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/activities/{}", id)).await
    }
}
