//! Identifier detection, normalization and validation for metadata curation
//!
//! This crate provides the identifier core behind the dataset and IGSN
//! sample curation forms:
//! - Type detection for free-text identifiers (DOI, IGSN, Handle, ARK, arXiv,
//!   bibcode, ISBN, EAN-13, e-ISSN, CSTR, URL)
//! - DOI normalization
//! - Format validation and ORCID MOD 11-2 checksums
//! - Resolver URLs for landing pages
//! - Gated, time-boxed ORCID and DOI metadata lookups

pub mod classifier;
pub mod config;
pub mod lookup;
pub mod normalizer;
pub mod patterns;
pub mod resolver;
pub mod types;
pub mod validators;

pub use classifier::*;
pub use config::{ConfigError, LookupConfig};
pub use normalizer::*;
pub use resolver::*;
pub use types::{IdentifierType, ParseIdentifierTypeError};
pub use validators::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
