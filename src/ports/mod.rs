//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the reconstruction stages and
//! an external system (the local disk, the remote host serving map
//! documents). Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod http;

pub use filesystem::FileSystem;
pub use http::{FetchFuture, HttpClient};

/// Error type returned by every port method.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
