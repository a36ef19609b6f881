use std::collections::HashSet;
use std::fmt::Debug;
use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MatcherConfig;
use crate::document::{CandidateDocument, QueryDocument};
use crate::error::{MatchError, Result};
use crate::rating::derive_rating;
use crate::utils::sort::sort_by_score_desc;
use crate::vectorizer::evaluate::{explain::top_keywords, scoring::cosine_similarity};
use crate::vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};
use crate::vectorizer::token::TermFrequency;
use crate::vectorizer::RequestVectors;

/// One entry of a ranked short-list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub candidate_id: String,
    /// raw cosine similarity, may be negative
    pub score: f64,
    /// `round(score * 100)`, keeps the sign of `score`
    pub match_percent: i64,
    /// highest weighted terms of the candidate's own text
    pub top_keywords: Vec<String>,
    /// identifier-derived rating in `[4.0, 5.0]`
    pub rating: f64,
}

/// Convert a similarity score to a whole percentage.
/// Halves round up, so `12.5` gives 13 and `-12.5` gives -12.
#[inline]
pub fn match_percent(score: f64) -> i64 {
    let x = score * 100.0;
    let floor = x.floor();
    // `x - floor` is exact; `x + 0.5` can round up below a half
    (if x - floor >= 0.5 { floor + 1.0 } else { floor }) as i64
}

/// Ranked results, best first
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedList {
    pub list: Vec<RankedCandidate>,
}

impl RankedList {
    pub fn new(list: Vec<RankedCandidate>) -> Self {
        RankedList { list }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RankedCandidate> {
        self.list.iter()
    }

    /// Candidate ids in rank order
    pub fn ids(&self) -> Vec<&str> {
        self.list.iter().map(|c| c.candidate_id.as_str()).collect()
    }
}

impl IntoIterator for RankedList {
    type Item = RankedCandidate;
    type IntoIter = std::vec::IntoIter<RankedCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedCandidate;
    type IntoIter = std::slice::Iter<'a, RankedCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl Debug for RankedList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // one result per line
            writeln!(f, "RankedList [")?;
            for c in &self.list {
                writeln!(
                    f,
                    "    {:?}: {:.6} ({}%) {:?} rating {:.1}",
                    c.candidate_id, c.score, c.match_percent, c.top_keywords, c.rating
                )?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

/// Content-based ranker
///
/// Every call to [`Ranker::rank`] builds its own corpus from the query and the
/// candidates it is given; nothing is cached between calls, so one ranker can
/// serve concurrent requests.
///
/// `Ranker<N, E>` has the following generic parameters:
/// - `N`: vector weight type (`f64` or `f32`)
/// - `E`: TF-IDF calculation engine
pub struct Ranker<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    config: MatcherConfig,
    _marker: PhantomData<fn() -> (N, E)>,
}

/// Ranker with `f64` weights and the default engine
pub type DefaultRanker = Ranker<f64, DefaultTFIDFEngine>;

impl<N, E> Debug for Ranker<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker").field("config", &self.config).finish()
    }
}

impl<N, E> Clone for Ranker<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    fn clone(&self) -> Self {
        Self::with_config_unchecked(self.config.clone())
    }
}

impl<N, E> Default for Ranker<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    fn default() -> Self {
        Self::with_config_unchecked(MatcherConfig::default())
    }
}

impl<N, E> Ranker<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    /// Create a ranker after validating `config`
    pub fn new(config: MatcherConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config_unchecked(config))
    }

    fn with_config_unchecked(config: MatcherConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Rank `candidates` against `query`
    ///
    /// Returns at most `limit` results ordered by score descending; equal
    /// scores keep their input order. An empty candidate list yields an
    /// empty result without building a corpus.
    ///
    /// # Errors
    /// Contract violations (empty or duplicate identifiers) are reported
    /// before any text is processed.
    pub fn rank(&self, query: &QueryDocument, candidates: &[CandidateDocument]) -> Result<RankedList> {
        validate(query, candidates)?;

        if candidates.is_empty() {
            debug!(query = %query.id, "no candidates to rank");
            return Ok(RankedList::default());
        }

        let parallel = self.config.parallel;
        let query_tf = TermFrequency::from_text(&query.text);
        let candidate_tfs: Vec<TermFrequency> = if parallel {
            candidates.par_iter().map(|c| TermFrequency::from_text(&c.text)).collect()
        } else {
            candidates.iter().map(|c| TermFrequency::from_text(&c.text)).collect()
        };

        let vectors = RequestVectors::<N>::build::<E>(&query_tf, &candidate_tfs, parallel);
        debug!(
            query = %query.id,
            documents = vectors.idf.doc_num,
            vocabulary = vectors.idf.len(),
            query_terms = vectors.query.len(),
            "built request corpus"
        );

        let keyword_count = self.config.keyword_count;
        let score_one = |i: usize| -> RankedCandidate {
            let vec = &vectors.candidates[i];
            let score: f64 = cosine_similarity(&vectors.query, vec).into();
            RankedCandidate {
                candidate_id: candidates[i].id.clone(),
                score,
                match_percent: match_percent(score),
                top_keywords: top_keywords(vec, &candidate_tfs[i], keyword_count),
                rating: derive_rating(&candidates[i].id),
            }
        };
        // indexed collect keeps input order whatever order the workers finish in
        let mut list: Vec<RankedCandidate> = if parallel {
            (0..candidates.len()).into_par_iter().map(score_one).collect()
        } else {
            (0..candidates.len()).map(score_one).collect()
        };

        sort_by_score_desc(&mut list, |c| c.score);
        list.truncate(self.config.limit);

        info!(
            query = %query.id,
            candidates = candidates.len(),
            returned = list.len(),
            top_score = list.first().map_or(0.0, |c| c.score),
            "ranking complete"
        );
        Ok(RankedList::new(list))
    }
}

/// Rank with the default configuration, `f64` weights and the default engine
pub fn rank(query: &QueryDocument, candidates: &[CandidateDocument]) -> Result<RankedList> {
    DefaultRanker::default().rank(query, candidates)
}

/// Check the call contract before any computation
fn validate(query: &QueryDocument, candidates: &[CandidateDocument]) -> Result<()> {
    if query.id.trim().is_empty() {
        return Err(MatchError::EmptyQueryId);
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.id.trim().is_empty() {
            return Err(MatchError::EmptyCandidateId { index });
        }
        if !seen.insert(candidate.id.as_str()) {
            return Err(MatchError::DuplicateCandidateId { id: candidate.id.clone() });
        }
    }
    Ok(())
}
