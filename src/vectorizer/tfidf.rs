use indexmap::IndexMap;
use num::Float;

use crate::vectorizer::{corpus::Corpus, token::TermFrequency, IDFVector, TFIDFVector};

/// TF-IDF calculation engine
///
/// `tf` and `idf` define the weighting; the provided methods build the
/// per-request IDF table and the per-document weighted vectors from them.
pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Term frequency weight for a raw occurrence count
    fn tf(count: u32) -> N;

    /// Inverse document frequency
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus
    /// * `doc_freq` - number of documents containing the term
    fn idf(doc_num: u64, doc_freq: u64) -> N;

    /// Build the IDF table for every term of the corpus
    fn idf_vec(corpus: &Corpus) -> IDFVector<N> {
        let doc_num = corpus.get_doc_num();
        let idf_vec: IndexMap<Box<str>, N> = corpus
            .iter()
            .map(|(term, doc_freq)| (Box::from(term), Self::idf(doc_num, doc_freq)))
            .collect();
        IDFVector { idf_vec, doc_num }
    }

    /// Weight every term of one document
    /// Terms missing from the IDF table weigh zero.
    fn tf_idf_vec(freq: &TermFrequency, idf: &IDFVector<N>) -> TFIDFVector<N> {
        let weights: IndexMap<Box<str>, N> = freq
            .iter()
            .map(|(term, stat)| {
                let idf_w = idf.get(term).unwrap_or_else(N::zero);
                (Box::from(term), Self::tf(stat.count) * idf_w)
            })
            .collect();
        TFIDFVector { weights }
    }
}

/// Default TF-IDF engine
///
/// - `tf(t)` is the raw count
/// - `idf(t) = ln(N / (df(t) + 1))`
///
/// Smoothing is applied to the denominator only, so a term present in most
/// or all documents gets a zero or negative idf.
/// Supports `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u32) -> f64 {
        count as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / (doc_freq as f64 + 1.0)).ln()
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u32) -> f32 {
        count as f32
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f32 {
        (doc_num as f32 / (doc_freq as f32 + 1.0)).ln()
    }
}
