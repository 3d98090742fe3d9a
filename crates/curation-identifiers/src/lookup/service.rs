//! Service traits and gated lookup operations
//!
//! The synchronous validators run before any service call. A structurally
//! invalid ORCID iD or a non-DOI string never costs a round trip.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use super::error::LookupError;
use super::types::{DoiMetadata, OrcidRecord, OrcidSearchHit};
use crate::classifier::classify;
use crate::config::LookupConfig;
use crate::normalizer::normalize;
use crate::types::IdentifierType;
use crate::validators::{validate_orcid, OrcidErrorKind};

/// ORCID public registry
#[async_trait]
pub trait OrcidService: Send + Sync {
    /// Fetch the person record of a validated ORCID iD
    async fn fetch_record(&self, orcid: &str) -> Result<OrcidRecord, LookupError>;

    /// Search people by name; hits come back best match first
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<OrcidSearchHit>, LookupError>;
}

/// DOI registration agency metadata (e.g. DataCite)
#[async_trait]
pub trait DoiMetadataResolver: Send + Sync {
    /// Resolve metadata for a normalized, bare DOI
    async fn resolve(&self, doi: &str) -> Result<DoiMetadata, LookupError>;
}

async fn with_timeout<T, F>(timeout: Duration, future: F) -> Result<T, LookupError>
where
    F: Future<Output = Result<T, LookupError>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout(timeout.as_millis() as u64)),
    }
}

/// Check an ORCID iD locally, then fetch its record.
pub async fn verify_orcid(
    service: &dyn OrcidService,
    raw: &str,
    timeout: Duration,
) -> Result<OrcidRecord, LookupError> {
    let validation = validate_orcid(raw);

    match validation.error {
        Some(OrcidErrorKind::Format) => {
            debug!(orcid = %validation.orcid, "Skipping lookup, malformed ORCID iD");
            return Err(LookupError::Format(validation.orcid));
        }
        Some(OrcidErrorKind::Checksum) => {
            debug!(orcid = %validation.orcid, "Skipping lookup, ORCID checksum mismatch");
            return Err(LookupError::Checksum(validation.orcid));
        }
        None => {}
    }

    with_timeout(timeout, service.fetch_record(&validation.orcid)).await
}

/// Search ORCID by name. Blank queries return no hits without a call.
pub async fn search_orcid(
    service: &dyn OrcidService,
    query: &str,
    limit: u32,
    timeout: Duration,
) -> Result<Vec<OrcidSearchHit>, LookupError> {
    let query = query.trim();
    if query.is_empty() || limit == 0 {
        return Ok(Vec::new());
    }

    let mut hits = with_timeout(timeout, service.search(query, limit)).await?;
    hits.truncate(limit as usize);
    for (i, hit) in hits.iter_mut().enumerate() {
        hit.rank = i as u32 + 1;
    }
    Ok(hits)
}

/// [`search_orcid`] with the hit limit and timeout taken from `config`.
pub async fn search_orcid_with(
    service: &dyn OrcidService,
    query: &str,
    config: &LookupConfig,
) -> Result<Vec<OrcidSearchHit>, LookupError> {
    search_orcid(service, query, config.orcid_search_limit, config.timeout()).await
}

/// Resolve metadata for a string that classifies as a DOI.
pub async fn resolve_doi_metadata(
    resolver: &dyn DoiMetadataResolver,
    raw: &str,
    timeout: Duration,
) -> Result<DoiMetadata, LookupError> {
    let kind = classify(raw);
    if kind != IdentifierType::Doi {
        debug!(%kind, "Skipping metadata lookup for non-DOI identifier");
        return Err(LookupError::Format(format!(
            "{} is a {} identifier, not a DOI",
            raw.trim(),
            kind
        )));
    }

    let doi = normalize(raw, IdentifierType::Doi);
    with_timeout(timeout, resolver.resolve(&doi)).await
}
