//! Identifier type tags

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier schemes known to the curation forms.
///
/// The classifier only ever produces the first eleven members. The rest are
/// accepted in stored records and form selections but have no detection
/// rule yet (see [`IdentifierType::is_reserved`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum IdentifierType {
    /// Digital Object Identifier
    #[serde(rename = "DOI")]
    Doi,
    /// Plain web address
    #[serde(rename = "URL")]
    Url,
    /// Handle System identifier
    Handle,
    /// International Generic Sample Number
    #[serde(rename = "IGSN")]
    Igsn,
    /// International Standard Book Number
    #[serde(rename = "ISBN")]
    Isbn,
    /// Electronic International Standard Serial Number
    #[serde(rename = "EISSN")]
    Eissn,
    /// European Article Number (GTIN-13)
    #[serde(rename = "EAN13")]
    Ean13,
    /// Archival Resource Key
    #[serde(rename = "ARK")]
    Ark,
    /// arXiv preprint identifier
    #[serde(rename = "arXiv")]
    Arxiv,
    /// NASA ADS bibcode
    #[serde(rename = "bibcode")]
    Bibcode,
    /// China Science and Technology Resource identifier
    #[serde(rename = "CSTR")]
    Cstr,
    #[serde(rename = "URN")]
    Urn,
    #[serde(rename = "PURL")]
    Purl,
    #[serde(rename = "ISTC")]
    Istc,
    #[serde(rename = "LISSN")]
    Lissn,
    #[serde(rename = "LSID")]
    Lsid,
    #[serde(rename = "PMID")]
    Pmid,
    #[serde(rename = "UPC")]
    Upc,
    #[serde(rename = "w3id")]
    W3id,
}

impl IdentifierType {
    /// Get all identifier types
    pub fn all() -> &'static [IdentifierType] {
        &[
            IdentifierType::Doi,
            IdentifierType::Url,
            IdentifierType::Handle,
            IdentifierType::Igsn,
            IdentifierType::Isbn,
            IdentifierType::Eissn,
            IdentifierType::Ean13,
            IdentifierType::Ark,
            IdentifierType::Arxiv,
            IdentifierType::Bibcode,
            IdentifierType::Cstr,
            IdentifierType::Urn,
            IdentifierType::Purl,
            IdentifierType::Istc,
            IdentifierType::Lissn,
            IdentifierType::Lsid,
            IdentifierType::Pmid,
            IdentifierType::Upc,
            IdentifierType::W3id,
        ]
    }

    /// The tag as stored in curation records.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Doi => "DOI",
            IdentifierType::Url => "URL",
            IdentifierType::Handle => "Handle",
            IdentifierType::Igsn => "IGSN",
            IdentifierType::Isbn => "ISBN",
            IdentifierType::Eissn => "EISSN",
            IdentifierType::Ean13 => "EAN13",
            IdentifierType::Ark => "ARK",
            IdentifierType::Arxiv => "arXiv",
            IdentifierType::Bibcode => "bibcode",
            IdentifierType::Cstr => "CSTR",
            IdentifierType::Urn => "URN",
            IdentifierType::Purl => "PURL",
            IdentifierType::Istc => "ISTC",
            IdentifierType::Lissn => "LISSN",
            IdentifierType::Lsid => "LSID",
            IdentifierType::Pmid => "PMID",
            IdentifierType::Upc => "UPC",
            IdentifierType::W3id => "w3id",
        }
    }

    /// True for members the classifier never produces.
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            IdentifierType::Urn
                | IdentifierType::Purl
                | IdentifierType::Istc
                | IdentifierType::Lissn
                | IdentifierType::Lsid
                | IdentifierType::Pmid
                | IdentifierType::Upc
                | IdentifierType::W3id
        )
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag string names no known identifier type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown identifier type: {0}")]
pub struct ParseIdentifierTypeError(pub String);

impl FromStr for IdentifierType {
    type Err = ParseIdentifierTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        IdentifierType::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseIdentifierTypeError(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_listed_once() {
        let all = IdentifierType::all();
        assert_eq!(all.len(), 19);
        for (i, a) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(a), "{} listed twice", a);
        }
    }

    #[test]
    fn test_reserved_members() {
        let reserved: Vec<_> = IdentifierType::all()
            .iter()
            .filter(|t| t.is_reserved())
            .map(|t| t.as_str())
            .collect();
        assert_eq!(
            reserved,
            vec!["URN", "PURL", "ISTC", "LISSN", "LSID", "PMID", "UPC", "w3id"]
        );
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("DOI".parse::<IdentifierType>(), Ok(IdentifierType::Doi));
        assert_eq!("arxiv".parse::<IdentifierType>(), Ok(IdentifierType::Arxiv));
        assert_eq!(" Bibcode ".parse::<IdentifierType>(), Ok(IdentifierType::Bibcode));
        assert_eq!("W3ID".parse::<IdentifierType>(), Ok(IdentifierType::W3id));
        assert!("ORCID".parse::<IdentifierType>().is_err());
    }

    #[test]
    fn test_serde_uses_tag_spelling() {
        let json = serde_json::to_string(&IdentifierType::Arxiv).unwrap();
        assert_eq!(json, "\"arXiv\"");
        let parsed: IdentifierType = serde_json::from_str("\"EAN13\"").unwrap();
        assert_eq!(parsed, IdentifierType::Ean13);
    }

    #[test]
    fn test_display_matches_tag() {
        for t in IdentifierType::all() {
            assert_eq!(t.to_string(), t.as_str());
        }
    }
}
