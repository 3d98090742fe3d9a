//! Asynchronous lookup boundary
//!
//! Network-backed ORCID and DOI metadata services are supplied by the host
//! application through [`OrcidService`] and [`DoiMetadataResolver`]. This
//! module gates those calls behind the synchronous validators and adds
//! timeouts, retries and input debouncing.

mod debounce;
mod error;
mod retry;
mod service;
mod types;

pub use debounce::Debouncer;
pub use error::{LookupError, LookupErrorKind};
pub use retry::{retry_async, RetryPolicy};
pub use service::{
    resolve_doi_metadata, search_orcid, search_orcid_with, verify_orcid, DoiMetadataResolver,
    OrcidService,
};
pub use types::{Creator, DoiMetadata, OrcidRecord, OrcidSearchHit};
