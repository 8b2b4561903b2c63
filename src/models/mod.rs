//! Data models for civic lookups and message drafting.
//!
//! This module contains the domain types the rest of the crate works
//! with:
//!
//! - `Representative`, `FieldOffice`, `Chamber`: canonical records
//!   produced by the resolver, plus `RepresentativesResult`
//! - `LegislatorInfo`: processed congress-legislators dataset record
//! - `Issue`: catalog entry with its message paragraph
//! - `GeneratedMessage`: subject/body pair for contact forms

pub mod issue;
pub mod legislator;
pub mod message;
pub mod representative;

pub use issue::Issue;
pub use legislator::LegislatorInfo;
pub use message::GeneratedMessage;
pub use representative::{Chamber, FieldOffice, Representative, RepresentativesResult};
