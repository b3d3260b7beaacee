//! HTTP-backed product service

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::CREATED_STATUS;
use super::ERROR_SERVER_STATUS;
use super::INVALID_REQUEST_STATUS;
use super::ProductService;
use super::SaveOutcome;
use crate::error::ServiceError;
use crate::model::FieldValues;

/// [`ProductService`] implementation that POSTs to `{base_url}/products`.
///
/// # Example
///
/// ```ignore
/// use product_form::HttpProductService;
///
/// let service = HttpProductService::new("https://api.example.com")
///     .timeout(Duration::from_secs(10));
/// let outcome = service.save_product(&values).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpProductService {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl HttpProductService {
    /// Creates a new service against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: Client::new(),
            timeout: None,
        }
    }

    /// Sets a per-request timeout.
    ///
    /// Without one, requests wait as long as the underlying client allows.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replaces the underlying HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// Returns the base URL this service posts to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Structured body of an invalid-request response.
#[derive(Debug, Deserialize)]
struct InvalidRequestBody {
    message: String,
}

#[async_trait]
impl ProductService for HttpProductService {
    async fn save_product(&self, values: &FieldValues) -> Result<SaveOutcome, ServiceError> {
        let url = format!("{}/products", self.base_url.trim_end_matches('/'));

        let mut request = self.http_client.post(&url).json(values);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        log::debug!("POST {}", url);
        let response = request.send().await?;
        let status = response.status().as_u16();

        match status {
            CREATED_STATUS => Ok(SaveOutcome::Created),
            ERROR_SERVER_STATUS => Ok(SaveOutcome::ServerError { status }),
            INVALID_REQUEST_STATUS => {
                // The message lives in the body, which is a second await.
                let body: InvalidRequestBody = response
                    .json()
                    .await
                    .map_err(|e| ServiceError::parse(e.to_string()))?;
                Ok(SaveOutcome::InvalidRequest {
                    message: body.message,
                })
            }
            _ => Ok(SaveOutcome::Other { status }),
        }
    }
}
