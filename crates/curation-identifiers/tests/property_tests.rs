//! Property tests for classification, normalization and ORCID checksums

use curation_identifiers::{classify, normalize, validate_orcid_checksum, IdentifierType};
use proptest::prelude::*;

// Registrants starting 1-4 never collide with an IGSN agency prefix
fn bare_doi() -> impl Strategy<Value = String> {
    ("[1-4][0-9]{3,6}", "(\\.[0-9]{1,3}){0,2}", "[A-Za-z0-9._;()/:<>-]{1,30}")
        .prop_map(|(registrant, sub, suffix)| format!("10.{}{}/{}", registrant, sub, suffix))
}

fn wrapped_doi() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "",
            "doi:",
            "DOI: ",
            "https://doi.org/",
            "http://dx.doi.org/",
            "https://doi.org/doi:",
        ]),
        bare_doi(),
    )
        .prop_map(|(prefix, doi)| format!("{}{}", prefix, doi))
}

fn orcid_check_char(base: &str) -> char {
    let mut total = 0u32;
    for d in base.chars().filter_map(|c| c.to_digit(10)) {
        total = (total + d) * 2;
    }
    match (12 - total % 11) % 11 {
        10 => 'X',
        r => char::from_digit(r, 10).unwrap(),
    }
}

fn format_orcid(base: &str, check: char) -> String {
    format!("{}-{}-{}-{}{}", &base[0..4], &base[4..8], &base[8..12], &base[12..15], check)
}

proptest! {
    #[test]
    fn doi_shaped_strings_are_doi(doi in wrapped_doi()) {
        prop_assert_eq!(classify(&doi), IdentifierType::Doi);
    }

    #[test]
    fn resolver_prefix_preserves_doi_type(doi in bare_doi(), scheme in prop::sample::select(vec!["", "doi:", "doi: "])) {
        let s = format!("{}{}", scheme, doi);
        prop_assert_eq!(classify(&format!("https://doi.org/{}", s)), classify(&s));
    }

    #[test]
    fn igsn_prefixes_beat_doi(
        prefix in prop::sample::select(vec!["60516", "58052", "60510", "58108", "58095"]),
        code in "[A-Z0-9]{1,12}",
        form in prop::sample::select(vec!["", "https://doi.org/", "igsn:", "urn:igsn:"]),
    ) {
        let s = format!("{}10.{}/{}", form, prefix, code);
        prop_assert_eq!(classify(&s), IdentifierType::Igsn);
    }

    #[test]
    fn isbn_prefix_beats_ean13(s in "97[89][0-9]{10}") {
        prop_assert_eq!(classify(&s), IdentifierType::Isbn);
    }

    #[test]
    fn other_thirteen_digit_codes_are_ean13(s in "[0-8][0-9]{12}") {
        prop_assert_eq!(classify(&s), IdentifierType::Ean13);
    }

    #[test]
    fn doi_normalization_is_idempotent(doi in wrapped_doi()) {
        let once = normalize(&doi, IdentifierType::Doi);
        let twice = normalize(&once, IdentifierType::Doi);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_keeps_doi_type(doi in wrapped_doi()) {
        let kind = classify(&doi);
        prop_assert_eq!(classify(&normalize(&doi, kind)), kind);
    }

    #[test]
    fn classification_ignores_surrounding_whitespace(s in "\\PC{0,40}") {
        prop_assert_eq!(classify(&format!("  {}\t", s)), classify(&s));
        prop_assert_eq!(classify(&s), classify(&s));
    }

    #[test]
    fn orcid_checksum_accepts_correct_check_char(base in "[0-9]{15}") {
        let orcid = format_orcid(&base, orcid_check_char(&base));
        prop_assert!(validate_orcid_checksum(&orcid));
    }

    #[test]
    fn orcid_checksum_rejects_wrong_check_char(base in "[0-9]{15}", wrong in prop::sample::select(vec!['0','1','2','3','4','5','6','7','8','9','X'])) {
        prop_assume!(wrong != orcid_check_char(&base));
        prop_assert!(!validate_orcid_checksum(&format_orcid(&base, wrong)));
    }
}

#[test]
fn known_orcid_and_its_mutations() {
    assert!(validate_orcid_checksum("0000-0002-1825-0097"));
    for c in ['0', '1', '2', '3', '4', '5', '6', '8', '9', 'X'] {
        let mutated = format!("0000-0002-1825-009{}", c);
        assert!(!validate_orcid_checksum(&mutated), "{}", mutated);
    }
}
