//! Resolver links for landing pages
//!
//! Maps a typed identifier to the public resolver URL that related-identifier
//! links on published landing pages point at.

use crate::normalizer::normalize;
use crate::patterns::{
    ARXIV_SCHEME, CSTR_SCHEME, EAN13_SCHEME, EISSN_SCHEME, HANDLE_SCHEME_PREFIX, HTTP_URL,
    IGSN_DOI_BARE, IGSN_SCHEME, ISBN_SCHEME,
};
use crate::types::IdentifierType;

/// Get the resolver URL prefix for an identifier type
pub fn identifier_url_prefix(kind: IdentifierType) -> Option<String> {
    let prefix = match kind {
        IdentifierType::Doi => "https://doi.org/",
        IdentifierType::Handle => "https://hdl.handle.net/",
        IdentifierType::Igsn => "https://igsn.org/",
        IdentifierType::Isbn => "https://identifiers.org/isbn:",
        IdentifierType::Eissn => "https://portal.issn.org/resource/ISSN/",
        IdentifierType::Lissn => "https://portal.issn.org/resource/ISSN-L/",
        IdentifierType::Ean13 => "https://identifiers.org/ean13:",
        IdentifierType::Ark => "https://n2t.net/",
        IdentifierType::Arxiv => "https://arxiv.org/abs/",
        IdentifierType::Bibcode => "https://ui.adsabs.harvard.edu/abs/",
        IdentifierType::Cstr => "https://identifiers.org/cstr:",
        IdentifierType::Pmid => "https://pubmed.ncbi.nlm.nih.gov/",
        IdentifierType::W3id => "https://w3id.org/",
        IdentifierType::Purl => "https://purl.org/",
        IdentifierType::Url
        | IdentifierType::Urn
        | IdentifierType::Istc
        | IdentifierType::Lsid
        | IdentifierType::Upc => return None,
    };
    Some(prefix.to_string())
}

/// Strip the scheme wrapper a type may carry (`ISBN `, `urn:issn:`,
/// `hdl://`, ...) so only the identifier itself follows the resolver base.
fn strip_scheme(kind: IdentifierType, value: &str) -> &str {
    let scheme = match kind {
        IdentifierType::Isbn => &*ISBN_SCHEME,
        IdentifierType::Ean13 => &*EAN13_SCHEME,
        IdentifierType::Eissn => &*EISSN_SCHEME,
        IdentifierType::Igsn => &*IGSN_SCHEME,
        IdentifierType::Handle => &*HANDLE_SCHEME_PREFIX,
        IdentifierType::Cstr => &*CSTR_SCHEME,
        IdentifierType::Arxiv => &*ARXIV_SCHEME,
        _ => return value,
    };
    match scheme.find(value) {
        Some(m) => value[m.end()..].trim(),
        None => value,
    }
}

/// Get the full resolver URL for an identifier.
///
/// Values that already are http(s) URLs are returned unchanged. IGSNs
/// registered under a DOI prefix resolve through doi.org. Returns `None`
/// when the value is empty or still contains whitespace once its scheme
/// wrapper is gone.
pub fn identifier_url(kind: IdentifierType, value: &str) -> Option<String> {
    let value = normalize(value, kind);
    let value = strip_scheme(kind, value.trim());

    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return None;
    }
    if HTTP_URL.is_match(value) {
        return Some(value.to_string());
    }
    if kind == IdentifierType::Igsn && IGSN_DOI_BARE.is_match(value) {
        return Some(format!("https://doi.org/{}", value));
    }

    identifier_url_prefix(kind).map(|prefix| format!("{}{}", prefix, value))
}

/// Get the display name for an identifier type
pub fn identifier_display_name(kind: IdentifierType) -> String {
    match kind {
        IdentifierType::Doi => "DOI".to_string(),
        IdentifierType::Url => "URL".to_string(),
        IdentifierType::Handle => "Handle".to_string(),
        IdentifierType::Igsn => "IGSN".to_string(),
        IdentifierType::Isbn => "ISBN".to_string(),
        IdentifierType::Eissn => "e-ISSN".to_string(),
        IdentifierType::Ean13 => "EAN-13".to_string(),
        IdentifierType::Ark => "ARK".to_string(),
        IdentifierType::Arxiv => "arXiv".to_string(),
        IdentifierType::Bibcode => "ADS Bibcode".to_string(),
        IdentifierType::Cstr => "CSTR".to_string(),
        IdentifierType::Urn => "URN".to_string(),
        IdentifierType::Purl => "PURL".to_string(),
        IdentifierType::Istc => "ISTC".to_string(),
        IdentifierType::Lissn => "ISSN-L".to_string(),
        IdentifierType::Lsid => "LSID".to_string(),
        IdentifierType::Pmid => "PubMed".to_string(),
        IdentifierType::Upc => "UPC".to_string(),
        IdentifierType::W3id => "w3id".to_string(),
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn identifier_url_ffi(kind: IdentifierType, value: String) -> Option<String> {
    identifier_url(kind, &value)
}
