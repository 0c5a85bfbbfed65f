// Recipe provider HTTP client.
// Handles request plumbing and response status mapping.

use std::time::Duration;

use log::debug;
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{LarderError, Result};

const DEFAULT_API_BASE: &str = "https://api.openrecipedb.org/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the recipe provider.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a client against the default provider endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("larder"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(LarderError::from)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Make a GET request to the provider.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(LarderError::from)?;

        check_response(response)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(LarderError::from)?;

        check_response(response)
    }
}

/// Check response status and convert failures into the taxonomy.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::NOT_FOUND => Err(LarderError::NotFound(response.url().to_string())),
        status => Err(LarderError::Status(status.as_u16())),
    }
}
