use async_trait::async_trait;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Volunteer, VolunteerPayload, VolunteerStatus};
use crate::services::ApiClient;

#[derive(Serialize)]
struct StatusRequest {
    status: VolunteerStatus,
}

#[async_trait(?Send)]
pub trait VolunteerApi {
    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, ApiError>;
    async fn create_volunteer(&self, payload: VolunteerPayload) -> Result<Volunteer, ApiError>;
    async fn update_volunteer(&self, id: &str, payload: VolunteerPayload) -> Result<Volunteer, ApiError>;
    async fn delete_volunteer(&self, id: &str) -> Result<(), ApiError>;
    async fn set_volunteer_status(&self, id: &str, status: VolunteerStatus) -> Result<Volunteer, ApiError>;
    async fn assign_activity(&self, volunteer_id: &str, activity_id: &str) -> Result<(), ApiError>;
    async fn unassign_activity(&self, volunteer_id: &str, activity_id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl VolunteerApi for ApiClient {
    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, ApiError> {
        let volunteers: Vec<Volunteer> = self.get("/volunteers").await?;
        log::info!("👥 {} volunteers loaded", volunteers.len());
        Ok(volunteers)
    }

    async fn create_volunteer(&self, payload: VolunteerPayload) -> Result<Volunteer, ApiError> {
        self.post("/volunteers", &payload).await
    }

    async fn update_volunteer(&self, id: &str, payload: VolunteerPayload) -> Result<Volunteer, ApiError> {
        self.put(&format!("/volunteers/{}", id), &payload).await
    }

    async fn delete_volunteer(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/volunteers/{}", id)).await
    }

    async fn set_volunteer_status(&self, id: &str, status: VolunteerStatus) -> Result<Volunteer, ApiError> {
        self.patch(&format!("/volunteers/{}/status", id), &StatusRequest { status }).await
    }

    async fn assign_activity(&self, volunteer_id: &str, activity_id: &str) -> Result<(), ApiError> {
        self.post_empty(&format!("/volunteers/{}/activities/{}", volunteer_id, activity_id)).await
    }

    async fn unassign_activity(&self, volunteer_id: &str, activity_id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/volunteers/{}/activities/{}", volunteer_id, activity_id)).await
    }
}
