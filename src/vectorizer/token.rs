use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Words dropped by the tokenizer.
/// Kept sorted so lookups can binary search.
pub const STOPWORDS: [&str; 24] = [
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is",
    "it", "its", "of", "on", "that", "the", "to", "was", "will", "with",
];

/// Tokens of this length or shorter are dropped.
pub const MIN_TOKEN_LEN: usize = 3;

/// Check if a token is in the stopword table
#[inline]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Split raw text into normalized tokens
///
/// The text is lowercased, every character outside `[a-z0-9]` becomes a separator,
/// and short tokens and stopwords are dropped. Source order is kept.
///
/// # Examples
/// ```
/// use tf_idf_matcher::vectorizer::token::tokenize;
/// assert_eq!(tokenize("The Quick, Fox! Fox runs."), vec!["quick", "fox", "fox", "runs"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|tok| tok.len() >= MIN_TOKEN_LEN && !is_stopword(tok))
        .map(str::to_string)
        .collect()
}

/// Occurrence statistics of a single term within one document
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermStat {
    /// number of occurrences
    pub count: u32,
    /// position of the first occurrence in the token sequence
    pub first_pos: usize,
}

/// TermFrequency structure
/// Counts how often each term occurs in a single document.
///
/// Terms are kept in first-occurrence order, and each term remembers the
/// position of its first occurrence, which is used to break ties between
/// equally weighted keywords.
///
/// # Examples
/// ```
/// use tf_idf_matcher::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["rust", "fast", "rust"]);
/// assert_eq!(freq.term_count("rust"), 2);
/// assert_eq!(freq.first_position("fast"), Some(1));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_stats: IndexMap<String, TermStat>,
    total_term_count: u64,
}

impl TermFrequency {
    /// Create a new empty TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_stats: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Build from raw text using [`tokenize`]
    pub fn from_text(text: &str) -> Self {
        let mut freq = Self::new();
        freq.add_terms(&tokenize(text));
        freq
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let pos = self.total_term_count as usize;
        self.term_stats
            .entry(term.to_string())
            .and_modify(|stat| stat.count += 1)
            .or_insert(TermStat { count: 1, first_pos: pos });
        self.total_term_count += 1;
        self
    }

    /// Add several terms in order
    ///
    /// # Arguments
    /// * `terms` - slice of terms
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrence count of a term, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_stats.get(term).map_or(0, |stat| stat.count)
    }

    /// Position of the first occurrence of a term
    #[inline]
    pub fn first_position(&self, term: &str) -> Option<usize> {
        self.term_stats.get(term).map(|stat| stat.first_pos)
    }

    /// Check if the term occurs at least once
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_stats.contains_key(term)
    }

    /// Iterate `(term, stat)` in first-occurrence order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermStat)> {
        self.term_stats.iter().map(|(term, stat)| (term.as_str(), stat))
    }

    /// Distinct terms in first-occurrence order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_stats.keys().map(String::as_str).collect()
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_stats.len()
    }

    /// Total number of terms added, duplicates included
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_stats.is_empty()
    }

    /// Reset all counts
    #[inline]
    pub fn clear(&mut self) {
        self.term_stats.clear();
        self.total_term_count = 0;
    }
}
