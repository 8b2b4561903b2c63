//! Core library for civicvoice - representative lookup, the civic
//! issue catalog, and contact-form message generation.
//!
//! The presentation layer depends on four operations:
//!
//! - [`zip::is_valid_zip_code`] - pure ZIP format check
//! - [`resolver::RepresentativeResolver::get_representatives_by_zip`]
//! - [`message::generate_message`]
//! - [`message::format_message_for_clipboard`]
//!
//! Lookup failures never surface as errors: resolution returns a
//! [`models::RepresentativesResult`] whose `error` field carries a
//! user-facing message instead.

pub mod api;
pub mod cache;
pub mod config;
pub mod issues;
pub mod legislators;
pub mod message;
pub mod models;
pub mod resolver;
pub mod utils;
pub mod zip;

pub use message::{format_message_for_clipboard, generate_message};
pub use resolver::{LookupProvider, RepresentativeResolver};
pub use zip::is_valid_zip_code;
