/******************************************************************************
   Author: unsent-client contributors
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{
    ApiError, DESERIALIZATION_ERROR, MISSING_API_KEY, SERIALIZATION_ERROR, UnsentResult,
};
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Shared HTTP plumbing used by every resource client
///
/// Holds the immutable configuration and a reqwest client. Each call is a
/// single request/response: no retries, no rate limiting, no timeout policy
/// beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a transport for the given configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to issue requests
    /// * `Err(ApiError)` - If the API key is blank or reqwest cannot be initialised
    pub fn new(config: Config) -> UnsentResult<Self> {
        if config.credentials.api_key.trim().is_empty() {
            return Err(ApiError::new(
                MISSING_API_KEY,
                "missing API key: pass one explicitly or set UNSENT_API_KEY",
            ));
        }

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Configuration this transport was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> UnsentResult<T> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a GET request with a query string built from `query`
    pub async fn get_with_query<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> UnsentResult<T> {
        let url = self.build_url(path);
        let response = make_http_request(
            &self.http_client,
            Method::GET,
            &url,
            self.headers().iter().map(|(k, v)| (*k, v.as_str())).collect(),
            Some(query),
            &None::<()>,
        )
        .await
        .map_err(|e| e.with_request(Method::GET, path))?;
        parse_response(response)
            .await
            .map_err(|e| e.with_request(Method::GET, path))
    }

    /// Makes a POST request
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> UnsentResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> UnsentResult<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a PATCH request
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> UnsentResult<T> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> UnsentResult<T> {
        self.request(Method::DELETE, path, None::<()>).await
    }

    /// Sends a request and decodes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to the base URL (e.g. "/domains")
    /// * `body` - Optional request body, serialized as JSON
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(ApiError)` - Network failure, non-2xx status or unexpected body
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> UnsentResult<T> {
        let url = self.build_url(path);
        let headers = self.headers();

        let response = make_http_request(
            &self.http_client,
            method.clone(),
            &url,
            headers.iter().map(|(k, v)| (*k, v.as_str())).collect(),
            None::<&()>,
            &body,
        )
        .await
        .map_err(|e| e.with_request(method.clone(), path))?;

        parse_response(response)
            .await
            .map_err(|e| e.with_request(method, path))
    }

    /// Joins the base URL and `path`; absolute URLs are used as is
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.base_url(), path)
        }
    }

    fn headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Authorization",
                format!("Bearer {}", self.config.credentials.api_key),
            ),
            ("Content-Type", "application/json".to_string()),
            ("Accept", "application/json".to_string()),
        ]
    }
}

/// Sends one HTTP request and maps any failure to an [`ApiError`]
///
/// # Arguments
///
/// * `client` - The reqwest client to use
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Optional query parameters, serialized into the URL
/// * `body` - Optional request body, serialized as JSON
///
/// # Returns
///
/// * `Ok(Response)` - Response with a 2xx status
/// * `Err(ApiError)` - Body serialization failure, network failure, or a
///   non-2xx status decoded from the body
pub async fn make_http_request<Q: Serialize + ?Sized, B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: Option<&Q>,
    body: &Option<B>,
) -> Result<Response, ApiError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(q) = query {
        request = request.query(q);
    }

    if let Some(b) = body {
        let bytes = serde_json::to_vec(b).map_err(|e| {
            error!("Failed to serialize request body for {}: {}", url, e);
            ApiError::new(SERIALIZATION_ERROR, e.to_string())
        })?;
        request = request.body(bytes);
    }

    let response = request.send().await.map_err(|e| {
        error!("Request to {} failed: {}", url, e);
        ApiError::from(e)
    })?;

    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read error body for status {}: {}", status, e);
            String::new()
        }
    };
    error!("Request failed with status {}: {}", status, body_text);
    Err(ApiError::from_response(status, &body_text))
}

/// Decodes a successful response body; an empty body is read as JSON `null`
async fn parse_response<T: DeserializeOwned>(response: Response) -> UnsentResult<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    let decoded = if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(&bytes)
    };

    decoded.map_err(|e| {
        error!("Failed to decode response body: {}", e);
        ApiError::with_status(status, DESERIALIZATION_ERROR, e.to_string())
    })
}
