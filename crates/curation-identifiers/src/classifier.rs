//! Identifier type detection
//!
//! [`classify`] walks an ordered list of structural rules and returns the
//! type of the first rule that matches. Several identifier families overlap
//! (an IGSN registered under a DOI prefix is also a well-formed DOI, every
//! ISBN-13 is also an EAN-13), so the narrower family always sits earlier in
//! [`RULES`] than its superset. Reordering the list changes results.

use crate::patterns::*;
use crate::types::IdentifierType;
use tracing::{debug, trace};

/// A single detection rule.
struct Rule {
    name: &'static str,
    kind: IdentifierType,
    matches: fn(&str) -> bool,
}

const RULES: &[Rule] = &[
    // IGSN first: agency DOI prefixes would otherwise classify as DOI
    Rule { name: "igsn-doi-url", kind: IdentifierType::Igsn, matches: |s| IGSN_DOI_URL.is_match(s) },
    Rule { name: "igsn-doi-bare", kind: IdentifierType::Igsn, matches: |s| IGSN_DOI_BARE.is_match(s) },
    Rule { name: "igsn-doi-prefixed", kind: IdentifierType::Igsn, matches: |s| IGSN_DOI_PREFIXED.is_match(s) },
    Rule { name: "igsn-doi-urn", kind: IdentifierType::Igsn, matches: |s| IGSN_DOI_URN.is_match(s) },
    Rule { name: "igsn-prefixed-code", kind: IdentifierType::Igsn, matches: |s| IGSN_PREFIXED_CODE.is_match(s) },
    Rule { name: "igsn-resolver-url", kind: IdentifierType::Igsn, matches: |s| IGSN_RESOLVER_URL.is_match(s) },
    // DOI
    Rule { name: "doi-url", kind: IdentifierType::Doi, matches: |s| DOI_URL.is_match(s) },
    Rule { name: "doi-prefixed", kind: IdentifierType::Doi, matches: |s| DOI_PREFIXED.is_match(s) },
    Rule { name: "doi-bare", kind: IdentifierType::Doi, matches: |s| DOI_BARE.is_match(s) },
    // arXiv
    Rule { name: "arxiv-url", kind: IdentifierType::Arxiv, matches: |s| ARXIV_URL.is_match(s) },
    Rule { name: "arxiv-prefixed", kind: IdentifierType::Arxiv, matches: |s| ARXIV_PREFIXED.is_match(s) },
    Rule { name: "arxiv-new", kind: IdentifierType::Arxiv, matches: |s| ARXIV_NEW.is_match(s) },
    Rule { name: "arxiv-old", kind: IdentifierType::Arxiv, matches: |s| ARXIV_OLD.is_match(s) },
    // bibcode
    Rule { name: "bibcode-url", kind: IdentifierType::Bibcode, matches: |s| BIBCODE_URL.is_match(s) },
    Rule { name: "bibcode-compact", kind: IdentifierType::Bibcode, matches: |s| BIBCODE_COMPACT.is_match(s) },
    Rule { name: "bibcode-special", kind: IdentifierType::Bibcode, matches: |s| BIBCODE_SPECIAL.is_match(s) },
    // CSTR
    Rule { name: "cstr-url", kind: IdentifierType::Cstr, matches: |s| CSTR_URL.is_match(s) },
    Rule { name: "cstr-prefixed", kind: IdentifierType::Cstr, matches: |s| CSTR_PREFIXED.is_match(s) },
    Rule { name: "cstr-bare", kind: IdentifierType::Cstr, matches: |s| CSTR_BARE.is_match(s) },
    // ISBN before EAN-13: 978/979 codes are a subset of EAN-13
    Rule { name: "isbn-url", kind: IdentifierType::Isbn, matches: |s| ISBN_URL.is_match(s) },
    Rule { name: "isbn-urn", kind: IdentifierType::Isbn, matches: |s| ISBN_URN.is_match(s) },
    Rule { name: "isbn-prefixed", kind: IdentifierType::Isbn, matches: |s| ISBN_PREFIXED.is_match(s) },
    Rule { name: "isbn13-bare", kind: IdentifierType::Isbn, matches: |s| ISBN13_BARE.is_match(s) },
    Rule { name: "isbn10-bare", kind: IdentifierType::Isbn, matches: is_bare_isbn10 },
    // EAN-13
    Rule { name: "ean13-url", kind: IdentifierType::Ean13, matches: |s| EAN13_URL.is_match(s) },
    Rule { name: "ean13-urn", kind: IdentifierType::Ean13, matches: |s| EAN13_URN.is_match(s) },
    Rule { name: "ean13-bare", kind: IdentifierType::Ean13, matches: is_bare_ean13 },
    // EISSN
    Rule { name: "eissn-url", kind: IdentifierType::Eissn, matches: |s| EISSN_URL.is_match(s) },
    Rule { name: "eissn-urn", kind: IdentifierType::Eissn, matches: |s| EISSN_URN.is_match(s) },
    Rule { name: "eissn-prefixed", kind: IdentifierType::Eissn, matches: |s| EISSN_PREFIXED.is_match(s) },
    Rule { name: "eissn-hyphenated", kind: IdentifierType::Eissn, matches: |s| EISSN_HYPHENATED.is_match(s) },
    Rule { name: "eissn-compact", kind: IdentifierType::Eissn, matches: |s| EISSN_COMPACT.is_match(s) },
    // ARK
    Rule { name: "ark-url", kind: IdentifierType::Ark, matches: |s| ARK_URL.is_match(s) },
    Rule { name: "ark-bare", kind: IdentifierType::Ark, matches: |s| ARK_BARE.is_match(s) },
    // Bare IGSN sample codes, just ahead of the permissive shapes
    Rule { name: "igsn-bare-code", kind: IdentifierType::Igsn, matches: |s| IGSN_BARE_CODE.is_match(s) },
    // Handle; the bare digits/suffix shape is left to the fallback
    Rule { name: "handle-url", kind: IdentifierType::Handle, matches: |s| HANDLE_URL.is_match(s) },
    Rule { name: "handle-scheme", kind: IdentifierType::Handle, matches: |s| HANDLE_SCHEME.is_match(s) },
    Rule { name: "handle-urn", kind: IdentifierType::Handle, matches: |s| HANDLE_URN.is_match(s) },
    Rule { name: "handle-objects-path", kind: IdentifierType::Handle, matches: |s| HANDLE_OBJECTS_PATH.is_match(s) },
    // Anything else on http(s)
    Rule { name: "url", kind: IdentifierType::Url, matches: |s| HTTP_URL.is_match(s) },
];

fn is_bare_isbn10(s: &str) -> bool {
    if ISBN10_BARE.is_match(s) {
        return true;
    }
    ISBN10_HYPHENATED.is_match(s) && s.chars().filter(|c| *c != '-').count() == 10
}

fn is_bare_ean13(s: &str) -> bool {
    EAN13_BARE.is_match(s) && !s.starts_with("978") && !s.starts_with("979")
}

/// Detect the identifier type of a free-text string.
///
/// Total: every input gets a type. Input that no rule recognizes is a
/// `Handle` when it has the bare `digits(.x)/suffix` shape, a `DOI` when it
/// contains a slash and no whitespace, otherwise a `URL`.
/// An empty (or all-whitespace) string is `URL`.
pub fn classify(raw: &str) -> IdentifierType {
    let value = raw.trim();

    if value.is_empty() {
        debug!("Empty identifier, falling back to URL");
        return IdentifierType::Url;
    }

    for rule in RULES {
        if (rule.matches)(value) {
            trace!(rule = rule.name, kind = %rule.kind, "Identifier matched");
            return rule.kind;
        }
    }

    fallback(value)
}

fn fallback(value: &str) -> IdentifierType {
    if HANDLE_BARE.is_match(value) {
        debug!(value, "Unclaimed digits/suffix shape, falling back to Handle");
        IdentifierType::Handle
    } else if value.contains('/') && !value.chars().any(char::is_whitespace) {
        debug!(value, "Unrecognized slash-separated identifier, falling back to DOI");
        IdentifierType::Doi
    } else {
        debug!(value, "Unrecognized identifier, falling back to URL");
        IdentifierType::Url
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn classify_ffi(raw: String) -> IdentifierType {
    classify(&raw)
}
