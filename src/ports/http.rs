//! HTTP port used to fetch remote map documents.

use std::future::Future;
use std::pin::Pin;

use super::PortError;

/// Boxed future returned by [`HttpClient`], keeping the trait dyn-compatible.
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, PortError>> + Send + 'a>>;

/// Performs plain GET requests.
pub trait HttpClient: Send + Sync {
    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or any status other than `200 OK`.
    fn get_text(&self, url: &str) -> FetchFuture<'_>;
}
