//! Service context bundling all port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::http::LiveHttpClient;
use crate::ports::filesystem::FileSystem;
use crate::ports::http::HttpClient;
use crate::ports::PortError;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire
/// up different adapter implementations.
pub struct ServiceContext {
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// HTTP client used to fetch map documents.
    pub http: Box<dyn HttpClient>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk and network.
    #[must_use]
    pub fn live() -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            http: Box::new(LiveHttpClient::new()),
        }
    }

    /// Creates a context from explicit adapters.
    #[cfg(test)]
    pub(crate) fn new(fs: Box<dyn FileSystem>, http: Box<dyn HttpClient>) -> Self {
        Self { fs, http }
    }

    /// Creates a context with the given filesystem and a network port that
    /// refuses every request. Stages that never fetch run fine on it.
    #[must_use]
    pub fn offline(fs: Box<dyn FileSystem>) -> Self {
        Self {
            fs,
            http: Box::new(OfflineHttpClient),
        }
    }
}

struct OfflineHttpClient;

impl HttpClient for OfflineHttpClient {
    fn get_text(&self, url: &str) -> crate::ports::http::FetchFuture<'_> {
        let result: Result<String, PortError> =
            Err(format!("network access disabled, refusing {url}").into());
        Box::pin(async move { result })
    }
}
