//! Compiled identifier patterns
//!
//! Every pattern is anchored at both ends and matched against an already
//! trimmed string. Matching is case-insensitive unless noted.

use lazy_static::lazy_static;
use regex::Regex;

/// DOI prefixes under which IGSN allocating agencies register samples.
/// `10.273` is the legacy IGSN handle prefix.
pub const IGSN_DOI_PREFIXES: &[&str] = &["60516", "58052", "60510", "58108", "58095", "273"];

lazy_static! {
    // === IGSN ===

    // IGSN under a DOI or legacy handle prefix, resolver URL form
    pub static ref IGSN_DOI_URL: Regex = Regex::new(
        r"(?i)^https?://(?:dx\.)?(?:doi\.org|hdl\.handle\.net)/10\.(?:60516|58052|60510|58108|58095|273)/\S+$"
    ).unwrap();

    pub static ref IGSN_DOI_BARE: Regex = Regex::new(
        r"(?i)^10\.(?:60516|58052|60510|58108|58095|273)/\S+$"
    ).unwrap();

    pub static ref IGSN_DOI_PREFIXED: Regex = Regex::new(
        r"(?i)^igsn:\s*10\.(?:60516|58052|60510|58108|58095|273)/\S+$"
    ).unwrap();

    pub static ref IGSN_DOI_URN: Regex = Regex::new(
        r"(?i)^urn:igsn:\s*10\.(?:60516|58052|60510|58108|58095|273)/\S+$"
    ).unwrap();

    // Explicit igsn: / urn:igsn: scheme with a plain sample code
    pub static ref IGSN_PREFIXED_CODE: Regex = Regex::new(
        r"(?i)^(?:urn:)?igsn:\s*[a-z0-9][a-z0-9./_-]*$"
    ).unwrap();

    pub static ref IGSN_RESOLVER_URL: Regex = Regex::new(
        r"(?i)^https?://(?:www\.)?igsn\.org/\S+$"
    ).unwrap();

    // Known 2-4 letter agency namespace followed by the sample code, e.g. AU1101
    pub static ref IGSN_BARE_CODE: Regex = Regex::new(
        r"(?i)^(?:ARDC|ICDP|IEDA|AU|BGR|BGS|CSR|GFZ|IE|KIT|MBL|NHM|SSH|UCL|URI)[a-z0-9]{2,12}$"
    ).unwrap();

    // === DOI ===

    // The resolver form tolerates an embedded doi: scheme
    pub static ref DOI_URL: Regex = Regex::new(
        r"(?i)^https?://(?:dx\.)?doi\.org/(?:doi:\s*)?10\.\d{4,}(?:\.\d+)*/\S+$"
    ).unwrap();

    pub static ref DOI_PREFIXED: Regex = Regex::new(
        r"(?i)^doi:\s*10\.\d{4,}(?:\.\d+)*/\S+$"
    ).unwrap();

    // Suffix is any run of non-whitespace: parentheses, brackets, semicolons are legal
    pub static ref DOI_BARE: Regex = Regex::new(
        r"(?i)^10\.\d{4,}(?:\.\d+)*/\S+$"
    ).unwrap();

    pub static ref DOI_RESOLVER_PREFIX: Regex = Regex::new(
        r"(?i)^https?://(?:dx\.)?doi\.org/"
    ).unwrap();

    pub static ref DOI_SCHEME_PREFIX: Regex = Regex::new(r"(?i)^doi:").unwrap();

    // === arXiv ===

    pub static ref ARXIV_URL: Regex = Regex::new(
        r"(?i)^https?://(?:www\.|export\.)?arxiv\.org/(?:abs|pdf|html|src)/\S+$"
    ).unwrap();

    pub static ref ARXIV_PREFIXED: Regex = Regex::new(
        r"(?i)^arxiv:\s*(?:\d{4}\.\d{4,5}(?:v\d+)?|[a-z-]+(?:\.[a-z-]+)?/\d{7}(?:v\d+)?)$"
    ).unwrap();

    // YYMM.NNNNN with optional version
    pub static ref ARXIV_NEW: Regex = Regex::new(r"(?i)^\d{4}\.\d{4,5}(?:v\d+)?$").unwrap();

    // category/YYMMNNN, e.g. hep-th/9901001 or math.GT/0309136
    pub static ref ARXIV_OLD: Regex = Regex::new(
        r"(?i)^[a-z-]+(?:\.[a-z-]+)?/\d{7}(?:v\d+)?$"
    ).unwrap();

    // === bibcode ===

    pub static ref BIBCODE_URL: Regex = Regex::new(
        r"(?i)^https?://(?:ui\.)?adsabs\.harvard\.edu/(?:#)?abs/\S+$"
    ).unwrap();

    // YYYYJJJJJVVVVMPPPPA
    pub static ref BIBCODE_COMPACT: Regex = Regex::new(
        r"(?i)^\d{4}[a-z&.]{5}[a-z0-9.]{4}[a-z.][a-z0-9.]{4}[a-z.]$"
    ).unwrap();

    // Journals whose codes break the fixed-width layout
    pub static ref BIBCODE_SPECIAL: Regex = Regex::new(
        r"(?i)^\d{4}(?:arXiv\d{9}|jwst\.prop[.\d]{5}|PhDT[.\d]{10}|Sci[.\da-z]{11}|Natur[.\da-z]{9})[a-z.]$"
    ).unwrap();

    // === CSTR ===

    pub static ref CSTR_URL: Regex = Regex::new(
        r"(?i)^https?://(?:identifiers\.org|bioregistry\.io)/cstr:\s*\S+$"
    ).unwrap();

    // RA.TYPE.namespace.id
    pub static ref CSTR_PREFIXED: Regex = Regex::new(
        r"(?i)^cstr:\s*\d{5}\.\d{2}\.[a-z0-9_-]+\.\S+$"
    ).unwrap();

    pub static ref CSTR_BARE: Regex = Regex::new(
        r"(?i)^\d{5}\.\d{2}\.[a-z0-9_-]+\.\S+$"
    ).unwrap();

    // === ISBN ===

    pub static ref ISBN_URL: Regex = Regex::new(
        r"(?i)^https?://(?:[a-z0-9-]+\.)*openedition\.org/isbn/[0-9x-]+$"
    ).unwrap();

    pub static ref ISBN_URN: Regex = Regex::new(r"(?i)^urn:isbn:\s*[0-9x-]+$").unwrap();

    pub static ref ISBN_PREFIXED: Regex = Regex::new(
        r"(?i)^isbn(?:-?1[03])?\s*:?\s*\d[\d -]{8,15}[\dx]$"
    ).unwrap();

    pub static ref ISBN13_BARE: Regex = Regex::new(r"^97[89](?:-?\d){10}$").unwrap();

    pub static ref ISBN10_BARE: Regex = Regex::new(r"(?i)^\d{9}[\dx]$").unwrap();

    // Four hyphenated groups; total digit count is checked by the caller
    pub static ref ISBN10_HYPHENATED: Regex = Regex::new(
        r"(?i)^\d{1,5}-\d{1,7}-\d{1,7}-[\dx]$"
    ).unwrap();

    // === EAN-13 ===

    pub static ref EAN13_URL: Regex = Regex::new(
        r"(?i)^https?://(?:identifiers\.org/ean13:\s*\d{13}|(?:id\.)?gs1\.org/01/\d{13,14}(?:/\S*)?)$"
    ).unwrap();

    pub static ref EAN13_URN: Regex = Regex::new(
        r"(?i)^urn:(?:ean13|gtin(?:-13)?):\s*\d{13}$"
    ).unwrap();

    pub static ref EAN13_BARE: Regex = Regex::new(r"^\d{13}$").unwrap();

    // === EISSN ===

    pub static ref EISSN_URL: Regex = Regex::new(
        r"(?i)^https?://(?:portal\.issn\.org/resource/issn/|identifiers\.org/issn:|(?:www\.)?worldcat\.org/issn/)\d{4}-?\d{3}[\dx]$"
    ).unwrap();

    pub static ref EISSN_URN: Regex = Regex::new(r"(?i)^urn:issn:\s*\d{4}-?\d{3}[\dx]$").unwrap();

    pub static ref EISSN_PREFIXED: Regex = Regex::new(
        r"(?i)^(?:e-?)?issn\s*:?\s*\d{4}-?\d{3}[\dx]$"
    ).unwrap();

    pub static ref EISSN_HYPHENATED: Regex = Regex::new(r"(?i)^\d{4}-\d{3}[\dx]$").unwrap();

    pub static ref EISSN_COMPACT: Regex = Regex::new(r"(?i)^\d{7}[\dx]$").unwrap();

    // === ARK ===

    pub static ref ARK_URL: Regex = Regex::new(
        r"(?i)^https?://\S*/ark:/?\d{5,9}/\S+$"
    ).unwrap();

    pub static ref ARK_BARE: Regex = Regex::new(r"(?i)^ark:/?\d{5,9}/\S+$").unwrap();

    // === Handle ===

    pub static ref HANDLE_URL: Regex = Regex::new(
        r"(?i)^https?://hdl\.handle\.net/(?:api/handles/)?\d+(?:\.[^/\s]+)?/[^\s?#]+(?:\?\S*)?(?:#\S*)?$"
    ).unwrap();

    // Captures the handle itself, leaving query string and fragment behind
    pub static ref HANDLE_URL_CAPTURE: Regex = Regex::new(
        r"(?i)^https?://hdl\.handle\.net/(?:api/handles/)?(?P<handle>\d+(?:\.[^/\s]+)?/[^\s?#]+)(?:\?\S*)?(?:#\S*)?$"
    ).unwrap();

    pub static ref HANDLE_SCHEME: Regex = Regex::new(
        r"(?i)^hdl://\d+(?:\.[^/\s]+)?/\S+$"
    ).unwrap();

    pub static ref HANDLE_URN: Regex = Regex::new(
        r"(?i)^urn:handle:\s*\d+(?:\.[^/\s]+)?/\S+$"
    ).unwrap();

    // Repository resolvers that serve handles under /objects/{prefix}/{suffix}
    pub static ref HANDLE_OBJECTS_PATH: Regex = Regex::new(
        r"(?i)^https?://[^/\s]+/objects/\d+(?:\.[^/\s]+)?/\S+$"
    ).unwrap();

    pub static ref HANDLE_BARE: Regex = Regex::new(r"^\d+(?:\.[^/\s]+)?/\S+$").unwrap();

    // === URL ===

    pub static ref HTTP_URL: Regex = Regex::new(r"(?i)^https?://").unwrap();

    // === Scheme wrappers stripped before building resolver links ===

    pub static ref ISBN_SCHEME: Regex = Regex::new(
        r"(?i)^(?:urn:isbn:|isbn(?:-?1[03])?\s*:?)\s*"
    ).unwrap();

    pub static ref EAN13_SCHEME: Regex = Regex::new(r"(?i)^urn:(?:ean13|gtin(?:-13)?):\s*").unwrap();

    pub static ref EISSN_SCHEME: Regex = Regex::new(
        r"(?i)^(?:urn:issn:|(?:e-?)?issn\s*:?)\s*"
    ).unwrap();

    pub static ref IGSN_SCHEME: Regex = Regex::new(r"(?i)^(?:urn:)?igsn:\s*").unwrap();

    pub static ref HANDLE_SCHEME_PREFIX: Regex = Regex::new(r"(?i)^(?:hdl://|urn:handle:)").unwrap();

    pub static ref CSTR_SCHEME: Regex = Regex::new(r"(?i)^cstr:\s*").unwrap();

    pub static ref ARXIV_SCHEME: Regex = Regex::new(r"(?i)^arxiv:\s*").unwrap();

    // === ORCID ===

    pub static ref ORCID_URL_PREFIX: Regex = Regex::new(r"(?i)^https?://orcid\.org/").unwrap();

    // Check character is a digit or an upper-case X
    pub static ref ORCID_PATTERN: Regex = Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{3}[0-9X]$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_igsn_prefix_table_matches_patterns() {
        for prefix in IGSN_DOI_PREFIXES {
            let bare = format!("10.{}/SAMPLE", prefix);
            assert!(IGSN_DOI_BARE.is_match(&bare), "{}", bare);
            assert!(IGSN_DOI_URL.is_match(&format!("https://doi.org/{}", bare)));
            assert!(IGSN_DOI_PREFIXED.is_match(&format!("IGSN:{}", bare)));
            assert!(IGSN_DOI_URN.is_match(&format!("urn:igsn:{}", bare)));
        }
    }

    #[test]
    fn test_igsn_prefix_requires_slash() {
        assert!(!IGSN_DOI_BARE.is_match("10.2735/abc"));
        assert!(!IGSN_DOI_BARE.is_match("10.605161/abc"));
    }

    #[test]
    fn test_bibcode_widths() {
        assert!(BIBCODE_COMPACT.is_match("2020ApJ...900L..12A"));
        assert!(BIBCODE_COMPACT.is_match("1998A&A...331L..33F"));
        assert!(!BIBCODE_COMPACT.is_match("2020ApJ...900L..12"));
        assert!(BIBCODE_SPECIAL.is_match("2023arXiv230112345A"));
        assert!(BIBCODE_SPECIAL.is_match("2021jwst.prop.2736M"));
        assert!(BIBCODE_SPECIAL.is_match("2019PhDT.........5S"));
    }

    #[test]
    fn test_handle_capture_drops_query_and_fragment() {
        let caps = HANDLE_URL_CAPTURE
            .captures("https://hdl.handle.net/2142/103380?locatt=view:master#top")
            .unwrap();
        assert_eq!(&caps["handle"], "2142/103380");
    }

    #[test]
    fn test_orcid_check_character_is_upper_case() {
        assert!(ORCID_PATTERN.is_match("0000-0002-1694-233X"));
        assert!(!ORCID_PATTERN.is_match("0000-0002-1694-233x"));
    }
}
