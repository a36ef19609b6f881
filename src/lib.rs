/// This crate is an explainable matching engine built on TF-IDF vectors.
pub mod vectorizer;
pub mod utils;
pub mod config;
pub mod document;
pub mod error;
pub mod ranker;
pub mod rating;
pub mod recommendation;

/// Ranker
/// The top-level struct of this crate. It ranks a list of candidate documents
/// against one query document and returns an explainable short-list.
///
/// For every call it:
/// - tokenizes the query and every candidate
/// - builds a corpus over exactly those documents and computes IDF
/// - vectorizes each document and scores candidates by cosine similarity
/// - sorts by score (ties keep input order), truncates, and attaches the
///   top keywords and a rating to each result
///
/// `Ranker<N, E>` has the following generic parameters:
/// - `N`: vector weight type (`f64` or `f32`)
/// - `E`: TF-IDF calculation engine type (e.g., `DefaultTFIDFEngine`)
///
/// No state is kept between calls; a single ranker may be shared across threads.
pub use ranker::{rank, DefaultRanker, RankedCandidate, RankedList, Ranker};

/// Ranker configuration
/// Result limit, keyword count and parallelism, loadable from TOML.
pub use config::MatcherConfig;

/// Documents
/// `QueryDocument` and `CandidateDocument` are the ranker's inputs.
/// `CaseRecord` and `LawyerRecord` adapt stored records into them.
pub use document::{CandidateDocument, CaseRecord, LawyerProfile, LawyerRecord, QueryDocument};

/// Error type
/// Only broken call contracts, configuration and I/O produce errors;
/// sparse or empty text never does.
pub use error::{MatchError, Result};

/// Term Frequency structure
/// Counts term occurrences within one document and remembers where each
/// term first occurred.
pub use vectorizer::token::{tokenize, TermFrequency};

/// Corpus
/// Document frequencies over the documents of a single request.
/// It is the base data for IDF calculation.
pub use vectorizer::corpus::Corpus;

/// TF IDF Calculation Engine Trait
/// Defines how TF and IDF are computed. `DefaultTFIDFEngine` uses the raw
/// count as TF and `ln(N / (df + 1))` as IDF, which can be zero or negative.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Sparse vectors
/// `IDFVector` is a request's IDF table and `TFIDFVector` one document's
/// weighted terms.
pub use vectorizer::{IDFVector, RequestVectors, TFIDFVector};

/// Similarity and explainability
/// Unclamped cosine similarity and per-document top keywords.
pub use vectorizer::evaluate::{explain::top_keywords, scoring::cosine_similarity};

/// Deterministic rating
/// A stable stand-in rating derived from a candidate identifier.
pub use rating::derive_rating;

/// Recommendations
/// Ranks lawyer records for a case and joins results back to their profiles.
pub use recommendation::{recommend, MatchRequest, Recommendation, RecommendationResponse};
