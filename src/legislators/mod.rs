//! Congress legislator directory.
//!
//! Fetches the public `congress-legislators` dataset, caches the
//! processed records for 24 hours, and matches lookup results against
//! them by name and state to recover contact-form URLs and office
//! details the minimal lookup shape does not carry.

pub mod directory;
pub mod matching;

pub use directory::LegislatorDirectory;
pub use matching::{find_legislator, normalize_name, MatchStrategy};
