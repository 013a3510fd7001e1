//! CVE identifier recognition, validation and ordering
//!
//! This crate provides tools for working with `CVE-YYYY-NNNN` identifiers:
//! - Format normalization and grammar checks
//! - Extraction from free text
//! - Year/sequence decomposition and validation
//! - Chronological comparison and sorting
//! - Grouping, filtering and deduplication of identifier lists
//! - Construction of identifiers from components
//!
//! Every function is total: malformed input yields an empty string, `0`,
//! `false` or an empty collection instead of an error. [`CveId`] is the typed
//! alternative when the caller wants to know why an identifier was rejected.

pub mod compare;
pub mod config;
pub mod cve_id;
pub mod error;
pub mod extractors;
pub mod filter;
pub mod generate;
pub mod normalize;
pub mod validators;

#[cfg(feature = "native")]
pub mod ffi;

pub use compare::*;
pub use config::*;
pub use cve_id::*;
pub use error::*;
pub use extractors::*;
pub use filter::*;
pub use generate::*;
pub use normalize::*;
pub use validators::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "native")]
uniffi::setup_scaffolding!();
