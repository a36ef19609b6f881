//! Documents handed to the ranker, and adapters building them from records.

use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

/// The free-text description candidates are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDocument {
    pub id: String,
    pub text: String,
}

/// One profile competing for a place in the ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub id: String,
    pub text: String,
}

impl QueryDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

impl CandidateDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into() }
    }
}

/// A client's case as stored by the surrounding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
}

impl CaseRecord {
    /// Query text is the title, category and description.
    pub fn to_query_document(&self) -> QueryDocument {
        QueryDocument::new(
            self.id.clone(),
            format!("{} {} {}", self.title, self.category, self.description),
        )
    }
}

/// Professional details of a lawyer; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LawyerProfile {
    #[serde(deserialize_with = "list_or_empty")]
    pub specialization: Vec<String>,
    pub bio: Option<String>,
    pub office_location: Option<String>,
    pub years_of_experience: Option<u32>,
}

/// Anything other than a list of strings (`null`, a bare string, ...) reads as empty.
fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListOrOther {
        List(Vec<String>),
        Other(IgnoredAny),
    }

    Ok(match ListOrOther::deserialize(deserializer)? {
        ListOrOther::List(list) => list,
        ListOrOther::Other(_) => Vec::new(),
    })
}

/// A lawyer account as stored by the surrounding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawyerRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub lawyer_profile: Option<LawyerProfile>,
}

impl LawyerRecord {
    /// Candidate text is the specializations, bio, office location and
    /// `"<n> years"` of experience. Missing parts are empty, missing years are 0.
    pub fn to_candidate_document(&self) -> CandidateDocument {
        let profile = self.lawyer_profile.as_ref();
        let specialization = profile.map(|p| p.specialization.join(" ")).unwrap_or_default();
        let bio = profile.and_then(|p| p.bio.as_deref()).unwrap_or("");
        let location = profile.and_then(|p| p.office_location.as_deref()).unwrap_or("");
        let years = profile.and_then(|p| p.years_of_experience).unwrap_or(0);
        CandidateDocument::new(
            self.id.clone(),
            format!("{specialization} {bio} {location} {years} years"),
        )
    }
}
