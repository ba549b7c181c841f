// ============================================================================
// API CLIENT - HTTP only (stateless apart from the bearer token)
// ============================================================================
// No business logic here: requests go out, typed responses or `ApiError`
// come back. Resource traits in the sibling modules are implemented on top.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::utils::constants::BACKEND_URL;

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// REST client. Cheap to clone; one per session.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(BACKEND_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same client, authenticated with `token`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: Some(token.into()),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = self.url(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        };
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        log::debug!("➡️ GET {}", path);
        let response = self
            .request(Verb::Get, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(Verb::Post, path, body).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(Verb::Put, path, body).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(Verb::Patch, path, body).await
    }

    /// POST without a meaningful response body.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Verb::Post, path).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Verb::Delete, path).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        log::debug!("➡️ {:?} {}", verb, path);
        let response = self
            .request(verb, path)
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn send_empty(&self, verb: Verb, path: &str) -> Result<(), ApiError> {
        log::debug!("➡️ {:?} {}", verb, path);
        let response = self
            .request(verb, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(&response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(&response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn check_status(response: &Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&response.status_text(), &body);
    log::error!("❌ HTTP {}: {}", status, message);
    Err(ApiError::Http { status, message })
}

/// Picks the most useful message out of an error body: a JSON `message`,
/// `detail` or `error` field, the raw body, or the status text.
pub(crate) fn error_message(status_text: &str, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "detail", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    let body = body.trim();
    if body.is_empty() || body.starts_with('{') {
        status_text.to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_with_single_slash() {
        let client = ApiClient::with_base_url("http://api.test/v1/");
        assert_eq!(client.url("/volunteers"), "http://api.test/v1/volunteers");
        assert_eq!(client.url("activities/3"), "http://api.test/v1/activities/3");
    }

    #[test]
    fn with_token_keeps_base_url() {
        let client = ApiClient::with_base_url("http://api.test").with_token("abc");
        assert_eq!(client.url("x"), "http://api.test/x");
        assert_eq!(client.token.as_deref(), Some("abc"));
    }

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(error_message("Conflict", r#"{"message":"Name already taken"}"#), "Name already taken");
        assert_eq!(error_message("Bad Request", r#"{"detail":"hours > 24"}"#), "hours > 24");
        assert_eq!(error_message("Bad Request", r#"{"code":12}"#), "Bad Request");
        assert_eq!(error_message("Server Error", "upstream timeout"), "upstream timeout");
        assert_eq!(error_message("Server Error", ""), "Server Error");
    }
}
