//! Records exchanged with the ORCID and DOI metadata services

use serde::{Deserialize, Serialize};

/// Person data from an ORCID record, used to prefill author rows
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrcidRecord {
    pub orcid: String,
    pub first_name: String,
    pub last_name: String,
    pub emails: Vec<String>,
    pub affiliations: Vec<String>,
}

/// One name match from an ORCID search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrcidSearchHit {
    pub orcid: String,
    pub first_name: String,
    pub last_name: String,
    pub institutions: Vec<String>,
    /// 1-based position in the result list
    pub rank: u32,
}

/// A creator entry of a DOI metadata record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Creator {
    pub name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub orcid: Option<String>,
    pub affiliations: Vec<String>,
}

/// Metadata resolved for a DOI
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoiMetadata {
    pub doi: String,
    pub title: String,
    pub creators: Vec<Creator>,
    pub publication_year: Option<i32>,
    pub publisher: Option<String>,
    pub resource_type: Option<String>,
}
