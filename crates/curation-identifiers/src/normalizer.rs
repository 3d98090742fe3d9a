//! Identifier normalization

use crate::patterns::{DOI_RESOLVER_PREFIX, DOI_SCHEME_PREFIX, ORCID_URL_PREFIX};
use crate::types::IdentifierType;

/// Strip transport wrapping from an identifier of a known type.
///
/// Only DOIs are rewritten: one `http(s)://(dx.)doi.org/` resolver prefix and
/// then one `doi:` scheme prefix are removed, and the remainder is trimmed.
/// Every other type is returned unchanged.
pub fn normalize(identifier: &str, kind: IdentifierType) -> String {
    match kind {
        IdentifierType::Doi => normalize_doi(identifier),
        _ => identifier.to_string(),
    }
}

fn normalize_doi(doi: &str) -> String {
    let mut result = doi.trim();

    if let Some(m) = DOI_RESOLVER_PREFIX.find(result) {
        result = &result[m.end()..];
    }
    if let Some(m) = DOI_SCHEME_PREFIX.find(result) {
        result = &result[m.end()..];
    }

    result.trim().to_string()
}

/// Strip an `http(s)://orcid.org/` prefix and surrounding whitespace.
pub fn normalize_orcid(orcid: &str) -> String {
    let trimmed = orcid.trim();
    match ORCID_URL_PREFIX.find(trimmed) {
        Some(m) => trimmed[m.end()..].trim().to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn normalize_ffi(identifier: String, kind: IdentifierType) -> String {
    normalize(&identifier, kind)
}
