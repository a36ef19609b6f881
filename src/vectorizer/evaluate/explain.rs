use num::Float;

use crate::utils::sort::sort_by_score_desc_then;
use crate::vectorizer::{token::TermFrequency, TFIDFVector};

/// Default number of keywords attached to each result
pub const DEFAULT_KEYWORD_COUNT: usize = 3;

/// Highest weighted terms of a document's own vector
///
/// Terms are ordered by weight descending; equal weights are ordered by the
/// term's first occurrence in the document. At most `count` terms are returned.
///
/// # Arguments
/// * `vec` - the document's TF-IDF vector
/// * `freq` - the same document's term frequency (for first-occurrence positions)
/// * `count` - maximum number of keywords
pub fn top_keywords<N>(vec: &TFIDFVector<N>, freq: &TermFrequency, count: usize) -> Vec<String>
where
    N: Float + Into<f64>,
{
    if count == 0 {
        return Vec::new();
    }
    let mut entries: Vec<(&str, f64, usize)> = vec
        .iter()
        .map(|(term, w)| (term, w.into(), freq.first_position(term).unwrap_or(usize::MAX)))
        .collect();
    sort_by_score_desc_then(&mut entries, |e| e.1, |e| e.2);
    entries
        .into_iter()
        .take(count)
        .map(|(term, _, _)| term.to_string())
        .collect()
}
