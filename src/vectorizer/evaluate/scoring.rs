use num::Float;

use crate::vectorizer::TFIDFVector;

/// Dot product over the union of both vectors' terms
/// Terms missing on one side contribute zero, so only `a`'s terms are visited.
#[inline]
pub fn dot<N>(a: &TFIDFVector<N>, b: &TFIDFVector<N>) -> N
where
    N: Float,
{
    a.iter().fold(N::zero(), |acc, (term, wa)| match b.get(term) {
        Some(wb) => acc + wa * wb,
        None => acc,
    })
}

/// Euclidean magnitude
#[inline]
pub fn magnitude<N>(v: &TFIDFVector<N>) -> N
where
    N: Float,
{
    v.norm_sq().sqrt()
}

/// Cosine similarity
/// cosθ = A・B / (|A||B|)
///
/// Returns zero when either vector has zero magnitude. The result is not
/// clamped: negative idf weights can make it negative.
///
/// The denominator is `sqrt(|A|² |B|²)`, so `cosine_similarity(v, v)` is
/// exactly one for any non-zero `v`.
pub fn cosine_similarity<N>(a: &TFIDFVector<N>, b: &TFIDFVector<N>) -> N
where
    N: Float,
{
    let norm_a = a.norm_sq();
    let norm_b = b.norm_sq();
    if norm_a == N::zero() || norm_b == N::zero() {
        return N::zero();
    }
    let product = norm_a * norm_b;
    // under/overflow of the product: fall back to separate roots
    let denom = if product == N::zero() || !product.is_finite() {
        norm_a.sqrt() * norm_b.sqrt()
    } else {
        product.sqrt()
    };
    dot(a, b) / denom
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(entries: &[(&str, f64)]) -> TFIDFVector<f64> {
        entries.iter().map(|(t, w)| (Box::<str>::from(*t), *w)).collect()
    }

    #[test]
    fn self_similarity_is_exactly_one() {
        let cases = [
            vec_of(&[("contract", 0.0), ("dispute", 0.0), ("settlement", (1.5f64).ln())]),
            vec_of(&[("a1", -0.287), ("b1", 0.405), ("c1", 1.0 / 3.0)]),
            vec_of(&[("only", -2.0)]),
            vec_of(&[("x", 0.1), ("y", 0.2), ("z", 0.7), ("w", 1e-3)]),
        ];
        for v in &cases {
            assert_eq!(cosine_similarity(v, v), 1.0, "{v:?}");
        }
    }

    #[test]
    fn zero_vector_scores_zero() {
        let zero = vec_of(&[("contract", 0.0), ("dispute", 0.0)]);
        let empty = TFIDFVector::<f64>::new();
        let other = vec_of(&[("contract", 1.0)]);
        assert_eq!(cosine_similarity(&zero, &other), 0.0);
        assert_eq!(cosine_similarity(&other, &zero), 0.0);
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
        assert_eq!(cosine_similarity(&empty, &empty), 0.0);
        assert!(!cosine_similarity(&zero, &zero).is_nan());
    }

    #[test]
    fn disjoint_vectors_score_zero() {
        let a = vec_of(&[("lawyer", 0.405)]);
        let b = vec_of(&[("custody", 0.405)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn opposite_signs_give_negative_similarity() {
        let a = vec_of(&[("estate", 1.0), ("probate", 0.5)]);
        let b = vec_of(&[("estate", -1.0)]);
        let sim = cosine_similarity(&a, &b);
        assert!(sim < 0.0);
        assert!((sim + 1.0 / 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn dot_ignores_terms_missing_on_either_side() {
        let a = vec_of(&[("x", 2.0), ("y", 3.0)]);
        let b = vec_of(&[("y", 4.0), ("z", 5.0)]);
        assert_eq!(dot(&a, &b), 12.0);
        assert_eq!(dot(&b, &a), 12.0);
        assert_eq!(magnitude(&vec_of(&[("x", 3.0), ("y", 4.0)])), 5.0);
    }

    #[test]
    fn tiny_weights_do_not_underflow_to_infinity() {
        let a = vec_of(&[("x", 1e-160), ("y", 2e-160)]);
        let b = vec_of(&[("x", 1e-160)]);
        let sim = cosine_similarity(&a, &b);
        assert!(sim.is_finite());
        assert!(sim > 0.0);
    }
}
