pub mod corpus;
pub mod tfidf;
pub mod token;
pub mod evaluate;

use indexmap::IndexMap;
use num::Float;

use crate::vectorizer::{corpus::Corpus, tfidf::TFIDFEngine, token::TermFrequency};

/// IDF table of one request
#[derive(Debug, Clone, PartialEq)]
pub struct IDFVector<N>
where
    N: Float,
{
    /// term -> idf, in corpus first-seen order
    pub idf_vec: IndexMap<Box<str>, N>,
    /// document count the table was computed over
    pub doc_num: u64,
}

impl<N> IDFVector<N>
where
    N: Float,
{
    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.idf_vec.get(term).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf_vec.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf_vec.is_empty()
    }
}

/// Sparse TF-IDF vector of one document
///
/// Only the document's own terms are stored, in first-occurrence order.
/// Weights may be zero or negative.
#[derive(Debug, Clone, PartialEq)]
pub struct TFIDFVector<N>
where
    N: Float,
{
    pub weights: IndexMap<Box<str>, N>,
}

impl<N> TFIDFVector<N>
where
    N: Float,
{
    pub fn new() -> Self {
        Self { weights: IndexMap::new() }
    }

    /// Weight of a term, `None` if the term is not in the document
    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.weights.get(term).copied()
    }

    /// Iterate `(term, weight)` in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.weights.iter().map(|(term, w)| (term.as_ref(), *w))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Squared euclidean norm
    #[inline]
    pub fn norm_sq(&self) -> N {
        self.weights.values().fold(N::zero(), |acc, w| acc + *w * *w)
    }
}

impl<N> Default for TFIDFVector<N>
where
    N: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> FromIterator<(Box<str>, N)> for TFIDFVector<N>
where
    N: Float,
{
    fn from_iter<I: IntoIterator<Item = (Box<str>, N)>>(iter: I) -> Self {
        Self { weights: iter.into_iter().collect() }
    }
}

/// Vectorized documents of one ranking request
///
/// Computes the corpus over the query and every candidate, then the IDF
/// table and one TF-IDF vector per document. Nothing outlives the request.
#[derive(Debug, Clone)]
pub struct RequestVectors<N>
where
    N: Float,
{
    pub idf: IDFVector<N>,
    pub query: TFIDFVector<N>,
    pub candidates: Vec<TFIDFVector<N>>,
}

impl<N> RequestVectors<N>
where
    N: Float + Send + Sync,
{
    /// Vectorize the query and candidate term frequencies with engine `E`
    ///
    /// # Arguments
    /// * `query` - query document's term frequency
    /// * `candidates` - candidate term frequencies, in input order
    /// * `parallel` - vectorize candidates on the rayon pool
    pub fn build<E>(query: &TermFrequency, candidates: &[TermFrequency], parallel: bool) -> Self
    where
        E: TFIDFEngine<N>,
    {
        use rayon::prelude::*;

        let corpus = Corpus::from_freqs(std::iter::once(query).chain(candidates.iter()));
        let idf = E::idf_vec(&corpus);
        let query_vec = E::tf_idf_vec(query, &idf);
        let candidate_vecs: Vec<TFIDFVector<N>> = if parallel {
            candidates.par_iter().map(|freq| E::tf_idf_vec(freq, &idf)).collect()
        } else {
            candidates.iter().map(|freq| E::tf_idf_vec(freq, &idf)).collect()
        };
        Self {
            idf,
            query: query_vec,
            candidates: candidate_vecs,
        }
    }
}
