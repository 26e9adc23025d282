// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, HttpConfig};

/// Create an asynchronous HTTP client that authenticates every request
/// with the configured bearer token.
pub fn create_async_client(http: &HttpConfig, api: &ApiConfig) -> Result<reqwest::Client> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api.token))
        .map_err(|e| AppError::config(format!("api.token is not a valid header value: {e}")))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);

    let client = reqwest::Client::builder()
        .user_agent(&http.user_agent)
        .timeout(Duration::from_secs(http.timeout_secs))
        .default_headers(headers)
        .build()?;
    Ok(client)
}
