use core::cmp::Ordering;

/// Map a score onto a totally ordered key.
/// - `-0.0` becomes `0.0` so signed zeros tie
/// - NaN sorts below everything
#[inline(always)]
fn canonical(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score + 0.0
    }
}

/// Descending comparison of two scores.
#[inline(always)]
pub fn cmp_score_desc(a: f64, b: f64) -> Ordering {
    canonical(b).total_cmp(&canonical(a))
}

/// Stable sort by score, highest first.
/// Items with equal scores keep their relative input order.
#[inline]
pub fn sort_by_score_desc<T, F>(items: &mut [T], score: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| cmp_score_desc(score(a), score(b)));
}

/// Sort by score descending, then by an explicit rank ascending.
/// Used where the tie-break is not the slice order itself.
#[inline]
pub fn sort_by_score_desc_then<T, F, R>(items: &mut [T], score: F, rank: R)
where
    F: Fn(&T) -> f64,
    R: Fn(&T) -> usize,
{
    items.sort_by(|a, b| cmp_score_desc(score(a), score(b)).then_with(|| rank(a).cmp(&rank(b))));
}
