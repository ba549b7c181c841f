use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::services::ApiClient;

#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Signing in: {}", request.email);
        self.post("/auth/login", &request).await
    }
}
