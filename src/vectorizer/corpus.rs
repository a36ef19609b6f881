use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::token::TermFrequency;

/// Document frequencies of one request's corpus
///
/// Holds the number of documents and, for every term, how many documents
/// contain it. Built fresh for each ranking call and never shared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// term -> number of documents containing it, in first-seen order
    #[serde(with = "indexmap::map::serde_seq")]
    pub term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Create a new empty corpus
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Build a corpus from the term frequencies of every document in the request
    pub fn from_freqs<'a, I>(freqs: I) -> Self
    where
        I: IntoIterator<Item = &'a TermFrequency>,
    {
        let mut corpus = Self::new();
        for freq in freqs {
            corpus.add_doc(freq);
        }
        corpus
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.add_set(&freq.term_set_ref_str());
    }

    /// Add a set of distinct terms as one document
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            *self.term_counts.entry(term.as_ref().into()).or_insert(0) += 1;
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing the term
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Iterate `(term, document frequency)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, df)| (term.as_ref(), *df))
    }
}
