//! In-memory adapters backing the unit tests.

pub mod filesystem;

pub use filesystem::MemoryFileSystem;
