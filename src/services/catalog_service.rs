// Read-only lookups: projects, skills and shared resources.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Project, Resource, Skill};
use crate::services::ApiClient;

#[async_trait(?Send)]
pub trait ProjectApi {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;
}

#[async_trait(?Send)]
pub trait SkillApi {
    async fn list_skills(&self) -> Result<Vec<Skill>, ApiError>;
}

#[async_trait(?Send)]
pub trait ResourceApi {
    async fn list_resources(&self) -> Result<Vec<Resource>, ApiError>;
}

#[async_trait(?Send)]
impl ProjectApi for ApiClient {
    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/projects").await
    }
}

#[async_trait(?Send)]
impl SkillApi for ApiClient {
    async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get("/skills").await
    }
}

#[async_trait(?Send)]
impl ResourceApi for ApiClient {
    async fn list_resources(&self) -> Result<Vec<Resource>, ApiError> {
        self.get("/resources").await
    }
}
