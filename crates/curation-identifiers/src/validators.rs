//! Identifier validation functions
//!
//! Validators never fail: problems are reported in the returned record so
//! the forms can render them inline.

use crate::normalizer::normalize_orcid;
use crate::patterns::{
    DOI_BARE, DOI_RESOLVER_PREFIX, HANDLE_BARE, HANDLE_URL_CAPTURE, ORCID_PATTERN,
};
use crate::types::IdentifierType;
use serde::{Deserialize, Serialize};

/// Result of a structural format check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FormatValidation {
    pub is_valid: bool,
    /// The type the identifier was checked against
    pub format: IdentifierType,
    /// Human-readable reason, present only when invalid
    pub message: Option<String>,
}

impl FormatValidation {
    fn valid(format: IdentifierType) -> Self {
        Self {
            is_valid: true,
            format,
            message: None,
        }
    }

    fn invalid(format: IdentifierType, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            format,
            message: Some(message.into()),
        }
    }
}

/// Check that `identifier` is structurally valid for `kind`.
///
/// DOI, URL and Handle get dedicated checks; every other type only has to be
/// non-blank.
pub fn validate_format(identifier: &str, kind: IdentifierType) -> FormatValidation {
    let value = identifier.trim();

    match kind {
        IdentifierType::Doi => {
            if is_valid_doi(value) {
                FormatValidation::valid(kind)
            } else {
                FormatValidation::invalid(
                    kind,
                    "Invalid DOI format. Expected format: 10.XXXX/suffix",
                )
            }
        }
        IdentifierType::Url => {
            if is_valid_url(value) {
                FormatValidation::valid(kind)
            } else {
                FormatValidation::invalid(kind, "Invalid URL format")
            }
        }
        IdentifierType::Handle => {
            if extract_handle(value).is_some() {
                FormatValidation::valid(kind)
            } else {
                FormatValidation::invalid(
                    kind,
                    "Invalid Handle format. Expected format: prefix/suffix",
                )
            }
        }
        _ => {
            if value.is_empty() {
                FormatValidation::invalid(kind, format!("{} must not be empty", kind))
            } else {
                FormatValidation::valid(kind)
            }
        }
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn validate_format_ffi(identifier: String, kind: IdentifierType) -> FormatValidation {
    validate_format(&identifier, kind)
}

/// DOI check after removing an optional doi.org resolver prefix.
pub fn is_valid_doi(doi: &str) -> bool {
    let value = doi.trim();
    let bare = match DOI_RESOLVER_PREFIX.find(value) {
        Some(m) => &value[m.end()..],
        None => value,
    };
    DOI_BARE.is_match(bare)
}

/// True when `url` parses as an absolute URL.
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url.trim()).is_ok()
}

/// Extract the `prefix/suffix` handle from a bare handle or an
/// hdl.handle.net URL. Query string and fragment are not part of the result.
pub fn extract_handle(raw: &str) -> Option<String> {
    let value = raw.trim();

    if HANDLE_BARE.is_match(value) {
        return Some(value.to_string());
    }

    HANDLE_URL_CAPTURE
        .captures(value)
        .and_then(|caps| caps.name("handle"))
        .map(|m| m.as_str().to_string())
}

// === ORCID ===

/// Why an ORCID iD failed the synchronous checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "snake_case")]
pub enum OrcidErrorKind {
    Format,
    Checksum,
}

/// Result of [`validate_orcid`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct OrcidValidation {
    pub is_valid: bool,
    /// The iD with any orcid.org prefix removed
    pub orcid: String,
    pub error: Option<OrcidErrorKind>,
    pub message: Option<String>,
}

/// True when the iD has the `NNNN-NNNN-NNNN-NNNC` shape, optionally behind
/// an orcid.org URL. The checksum is not verified.
pub fn is_valid_orcid_format(orcid: &str) -> bool {
    ORCID_PATTERN.is_match(&normalize_orcid(orcid))
}

/// Verify the ISO/IEC 7064 MOD 11-2 check character of an ORCID iD.
///
/// Expects a string that already passed [`is_valid_orcid_format`]; anything
/// that does not reduce to 15 digits plus a check character is rejected.
pub fn validate_orcid_checksum(orcid: &str) -> bool {
    let compact: Vec<char> = normalize_orcid(orcid)
        .chars()
        .filter(|c| *c != '-')
        .collect();

    if compact.len() != 16 {
        return false;
    }

    let mut total: u32 = 0;
    for c in &compact[..15] {
        match c.to_digit(10) {
            Some(digit) => total = (total + digit) * 2,
            None => return false,
        }
    }

    let remainder = total % 11;
    let result = (12 - remainder) % 11;
    let expected = if result == 10 {
        'X'
    } else {
        char::from_digit(result, 10).unwrap_or('?')
    };

    compact[15] == expected
}

/// Run the format check and then the checksum check.
pub fn validate_orcid(orcid: &str) -> OrcidValidation {
    let normalized = normalize_orcid(orcid);

    if !ORCID_PATTERN.is_match(&normalized) {
        return OrcidValidation {
            is_valid: false,
            orcid: normalized,
            error: Some(OrcidErrorKind::Format),
            message: Some("Invalid ORCID format. Expected format: 0000-0000-0000-0000".to_string()),
        };
    }

    if !validate_orcid_checksum(&normalized) {
        return OrcidValidation {
            is_valid: false,
            orcid: normalized,
            error: Some(OrcidErrorKind::Checksum),
            message: Some("Invalid ORCID checksum".to_string()),
        };
    }

    OrcidValidation {
        is_valid: true,
        orcid: normalized,
        error: None,
        message: None,
    }
}

#[cfg(feature = "uniffi")]
#[uniffi::export]
pub fn validate_orcid_ffi(orcid: String) -> OrcidValidation {
    validate_orcid(&orcid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dois() {
        assert!(is_valid_doi("10.1038/nature12373"));
        assert!(is_valid_doi("https://doi.org/10.5194/nhess-15-1463-2015"));
        assert!(is_valid_doi("10.1000.10/(SICI)1097-4679[1999]"));
    }

    #[test]
    fn test_invalid_dois() {
        assert!(!is_valid_doi("11.1038/nature12373")); // Wrong prefix
        assert!(!is_valid_doi("10.12/test")); // Registrant too short
        assert!(!is_valid_doi("10.1038/has space"));
        assert!(!is_valid_doi("doi:10.1038/nature12373")); // Scheme is not stripped
    }

    #[test]
    fn test_validate_format_messages() {
        let ok = validate_format("10.1038/nature12373", IdentifierType::Doi);
        assert!(ok.is_valid);
        assert_eq!(ok.message, None);

        let bad = validate_format("nature12373", IdentifierType::Doi);
        assert!(!bad.is_valid);
        assert_eq!(bad.format, IdentifierType::Doi);
        assert!(bad.message.unwrap().contains("DOI"));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_format("https://example.org/data?x=1", IdentifierType::Url).is_valid);
        assert!(!validate_format("example.org/data", IdentifierType::Url).is_valid);
        assert!(!validate_format("", IdentifierType::Url).is_valid);
    }

    #[test]
    fn test_extract_handle() {
        assert_eq!(extract_handle("2142/103380"), Some("2142/103380".to_string()));
        assert_eq!(
            extract_handle("https://hdl.handle.net/20.500.12345/abc?urlappend=x#frag"),
            Some("20.500.12345/abc".to_string())
        );
        assert_eq!(extract_handle("hdl handle"), None);
        assert_eq!(extract_handle("https://example.org/2142/103380"), None);
    }

    #[test]
    fn test_generic_validation_only_needs_content() {
        assert!(validate_format("AU1101", IdentifierType::Igsn).is_valid);
        assert!(validate_format("anything", IdentifierType::Isbn).is_valid);
        let empty = validate_format("   ", IdentifierType::Ark);
        assert!(!empty.is_valid);
        assert_eq!(empty.message.as_deref(), Some("ARK must not be empty"));
    }

    #[test]
    fn test_orcid_checksum() {
        assert!(validate_orcid_checksum("0000-0002-1825-0097"));
        assert!(validate_orcid_checksum("0000-0001-5109-3700"));
        assert!(validate_orcid_checksum("0000-0002-1694-233X"));
        assert!(!validate_orcid_checksum("0000-0002-1825-0098"));
        assert!(!validate_orcid_checksum("0000-0002-1694-2330"));
        assert!(!validate_orcid_checksum("0000-0002-1825"));
    }

    #[test]
    fn test_orcid_format() {
        assert!(is_valid_orcid_format("0000-0002-1825-0097"));
        assert!(is_valid_orcid_format("https://orcid.org/0000-0002-1825-0097"));
        assert!(!is_valid_orcid_format("0000000218250097"));
        assert!(!is_valid_orcid_format("0000-0002-1825-009"));
    }

    #[test]
    fn test_validate_orcid_reports_first_failure() {
        let v = validate_orcid("0000-0002-1825-009");
        assert_eq!(v.error, Some(OrcidErrorKind::Format));

        let v = validate_orcid("0000-0002-1825-0096");
        assert_eq!(v.error, Some(OrcidErrorKind::Checksum));

        let v = validate_orcid("http://orcid.org/0000-0002-1825-0097");
        assert!(v.is_valid);
        assert_eq!(v.orcid, "0000-0002-1825-0097");
    }
}
