//! Best-effort local caching.
//!
//! The legislator directory persists its processed dataset through the
//! `CacheStore` trait so the storage backend can be swapped: JSON
//! files on disk for the CLI, an in-memory map in tests or when no
//! cache directory resolves. Read and write failures are swallowed -
//! a cache miss is always a valid outcome.

pub mod store;

pub use store::{CacheStore, FileCacheStore, MemoryCacheStore};
