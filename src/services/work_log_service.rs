use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{WorkLog, WorkLogPayload, WorkLogStatus, WorkLogStatusRequest};
use crate::services::ApiClient;

#[async_trait(?Send)]
pub trait WorkLogApi {
    async fn list_work_logs(&self) -> Result<Vec<WorkLog>, ApiError>;
    async fn create_work_log(&self, payload: WorkLogPayload) -> Result<WorkLog, ApiError>;
    async fn set_work_log_status(&self, id: &str, status: WorkLogStatus) -> Result<WorkLog, ApiError>;
    async fn delete_work_log(&self, id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl WorkLogApi for ApiClient {
    async fn list_work_logs(&self) -> Result<Vec<WorkLog>, ApiError> {
        let logs: Vec<WorkLog> = self.get("/work-logs").await?;
        log::info!("⏱️ {} work logs loaded", logs.len());
        Ok(logs)
    }

    async fn create_work_log(&self, payload: WorkLogPayload) -> Result<WorkLog, ApiError> {
        self.post("/work-logs", &payload).await
    }

    async fn set_work_log_status(&self, id: &str, status: WorkLogStatus) -> Result<WorkLog, ApiError> {
        self.patch(&format!("/work-logs/{}/status", id), &WorkLogStatusRequest { status }).await
    }

    async fn delete_work_log(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/work-logs/{}", id)).await
    }
}
