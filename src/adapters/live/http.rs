//! Live adapter for the `HttpClient` port using `reqwest`.

use reqwest::{Client, StatusCode};

use crate::ports::http::{FetchFuture, HttpClient};
use crate::ports::PortError;

/// Some CDNs refuse requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0";

/// Live HTTP client that performs real network requests.
pub struct LiveHttpClient {
    client: Client,
}

impl LiveHttpClient {
    /// Creates a new live HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for LiveHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for LiveHttpClient {
    fn get_text(&self, url: &str) -> FetchFuture<'_> {
        Box::pin(fetch(&self.client, url.to_string()))
    }
}

async fn fetch(client: &Client, url: String) -> Result<String, PortError> {
    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(format!("unexpected status {}", status.as_u16()).into());
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("failed to read response body: {e}"))?;
    Ok(body)
}
