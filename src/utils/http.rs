// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::models::ApiConfig;

/// Create a configured asynchronous HTTP client.
///
/// The client-wide timeout is the longest configured bound; individual
/// requests narrow it with [`fetch_json`].
pub fn create_async_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let timeout = config.list_timeout_secs.max(config.item_timeout_secs);
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(timeout))
        .build()?;
    Ok(client)
}

/// Fetch a URL with its own timeout and decode the JSON body.
///
/// Transport failures and non-success status codes surface as
/// `AppError::Http`; a body that does not fit `T` surfaces as `AppError::Json`.
pub async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<T> {
    let body = client
        .get(url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(serde_json::from_slice(&body)?)
}
