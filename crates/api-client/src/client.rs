//! Stateless request builder and response parser
//!
//! `CrowdinClient` holds only its configuration. Each call either builds an
//! [`HttpRequest`] (validating the payload first) or parses an
//! [`HttpResponse`] produced by the caller's transport.

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, ValidationError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::model::{ErrorResponse, UpdateRequest, ValidationErrorResponse};
use crate::query::ListOptionsProvider;
use crate::validate::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Crowdin API request builder
#[derive(Debug, Clone)]
pub struct CrowdinClient {
    config: Arc<ClientConfig>,
}

impl CrowdinClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Request builders
    // -------------------------------------------------------------------------

    /// Build a GET request, appending the encoded options when any are set
    pub fn build_get<O: ListOptionsProvider + ?Sized>(&self, path: &str, options: &O) -> HttpRequest {
        let mut url = self.url(path);
        let (values, has_params) = options.values();
        if has_params {
            url.push('?');
            url.push_str(&values.encode());
        }
        self.request(HttpMethod::Get, url, None)
    }

    /// Build a POST request with a validated JSON body
    pub fn build_post<B: Validate + Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<HttpRequest> {
        self.with_body(HttpMethod::Post, path, body)
    }

    /// Build a PUT request with a validated JSON body
    pub fn build_put<B: Validate + Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<HttpRequest> {
        self.with_body(HttpMethod::Put, path, body)
    }

    /// Build a PATCH request from JSON Patch operations
    pub fn build_patch(&self, path: &str, operations: &[UpdateRequest]) -> ApiResult<HttpRequest> {
        if operations.is_empty() {
            return Err(ValidationError::required("operations").into());
        }
        for op in operations {
            op.validate()?;
        }
        let body = serde_json::to_string(operations)?;
        Ok(self.request(HttpMethod::Patch, self.url(path), Some(body)))
    }

    /// Build a DELETE request
    #[must_use]
    pub fn build_delete(&self, path: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, self.url(path), None)
    }

    fn with_body<B: Validate + Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> ApiResult<HttpRequest> {
        body.validate()?;
        let body = serde_json::to_string(body)?;
        Ok(self.request(method, self.url(path), Some(body)))
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: HttpMethod, url: String, body: Option<String>) -> HttpRequest {
        let request_id = Uuid::new_v4().to_string();
        debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "Built request"
        );

        let mut headers = vec![(X_REQUEST_ID.to_string(), request_id)];
        if body.is_some() {
            headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
        }

        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    // -------------------------------------------------------------------------
    // Response parsers
    // -------------------------------------------------------------------------

    /// Parse a 2xx response body into `T`, or map the error envelope
    pub fn parse_response<T: DeserializeOwned>(&self, response: &HttpResponse) -> ApiResult<T> {
        check_status(response)?;
        debug!(status = response.status, "Parsing response");
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Accept a 2xx response whose body is ignored (e.g. 204 No Content)
    pub fn parse_empty(&self, response: &HttpResponse) -> ApiResult<()> {
        check_status(response)
    }
}

/// Map non-success statuses to the matching `ApiError`
fn check_status(response: &HttpResponse) -> ApiResult<()> {
    if response.is_success() {
        return Ok(());
    }

    let status = response.status;
    warn!(status, "Request failed");

    if let Ok(err) = serde_json::from_str::<ErrorResponse>(&response.body) {
        return Err(ApiError::api_response(status, err.error.message));
    }
    if let Ok(err) = serde_json::from_str::<ValidationErrorResponse>(&response.body) {
        return Err(ApiError::InvalidFields {
            status,
            errors: err.errors.into_iter().map(|item| item.error).collect(),
        });
    }
    Err(ApiError::api_response(status, response.body.clone()))
}
