//! Lawyer recommendations for a case.
//!
//! Adapts stored records into documents, ranks them, and joins the ranked
//! entries back to their records for display. Scores and percentages are
//! passed through untouched; clamping is offered only as a display helper.

use std::collections::HashMap;

use num::Float;
use serde::{Deserialize, Serialize};

use crate::document::{CandidateDocument, CaseRecord, LawyerRecord};
use crate::error::{MatchError, Result};
use crate::ranker::{RankedCandidate, Ranker};
use crate::vectorizer::tfidf::TFIDFEngine;

/// Shown when a lawyer has not set an office location.
pub const UNSPECIFIED_LOCATION: &str = "Not specified";

/// Ratings at or above this earn the verified badge.
pub const VERIFIED_RATING: f64 = 4.5;

/// One recommended lawyer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub lawyer_id: String,
    pub full_name: String,
    pub specialization: Vec<String>,
    pub office_location: String,
    pub years_of_experience: u32,
    pub rating: f64,
    pub score: f64,
    pub match_percent: i64,
    pub top_keywords: Vec<String>,
}

impl Recommendation {
    fn from_ranked(ranked: RankedCandidate, lawyer: &LawyerRecord) -> Self {
        let profile = lawyer.lawyer_profile.clone().unwrap_or_default();
        Self {
            lawyer_id: ranked.candidate_id,
            full_name: lawyer.full_name.clone(),
            specialization: profile.specialization,
            office_location: profile
                .office_location
                .filter(|loc| !loc.is_empty())
                .unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string()),
            years_of_experience: profile.years_of_experience.unwrap_or(0),
            rating: ranked.rating,
            score: ranked.score,
            match_percent: ranked.match_percent,
            top_keywords: ranked.top_keywords,
        }
    }

    /// Match percentage clamped to `[0, 100]` for display
    #[inline]
    pub fn display_match_percent(&self) -> u8 {
        self.match_percent.clamp(0, 100) as u8
    }

    #[inline]
    pub fn is_verified(&self) -> bool {
        self.rating >= VERIFIED_RATING
    }
}

/// Response body: `{ "recommendations": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Request body: `{ "case": {...}, "lawyers": [...] }`
///
/// Both keys are kept optional so a missing or `null` value surfaces as its
/// own error instead of a generic decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub case: Option<CaseRecord>,
    #[serde(default)]
    pub lawyers: Option<Vec<LawyerRecord>>,
}

impl MatchRequest {
    /// Split into the case and its lawyers. An empty lawyer list is valid.
    pub fn into_parts(self) -> Result<(CaseRecord, Vec<LawyerRecord>)> {
        let case = self.case.ok_or(MatchError::MissingQuery)?;
        let lawyers = self.lawyers.ok_or(MatchError::MissingCandidates)?;
        Ok((case, lawyers))
    }
}

/// Rank `lawyers` for `case` and build the recommendation list
pub fn recommend<N, E>(
    ranker: &Ranker<N, E>,
    case: &CaseRecord,
    lawyers: &[LawyerRecord],
) -> Result<RecommendationResponse>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    let query = case.to_query_document();
    let candidates: Vec<CandidateDocument> = lawyers.iter().map(LawyerRecord::to_candidate_document).collect();
    let ranked = ranker.rank(&query, &candidates)?;

    let by_id: HashMap<&str, &LawyerRecord> = lawyers.iter().map(|l| (l.id.as_str(), l)).collect();
    let recommendations = ranked
        .into_iter()
        .filter_map(|entry| {
            let lawyer = *by_id.get(entry.candidate_id.as_str())?;
            Some(Recommendation::from_ranked(entry, lawyer))
        })
        .collect();
    Ok(RecommendationResponse { recommendations })
}
