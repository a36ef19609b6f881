//! Deterministic display rating derived from a candidate identifier.
//!
//! This is a stand-in for a real review/rating aggregate. It depends only on
//! the identifier, so the same candidate always shows the same rating
//! whatever the query. Replace it once actual review data exists.

/// Number of trailing identifier characters used as the seed.
pub const SEED_SUFFIX_LEN: usize = 4;

/// Lowest rating produced.
pub const MIN_RATING: f64 = 4.0;

/// Highest rating produced.
pub const MAX_RATING: f64 = 5.0;

/// Read the seed from the last four characters of `id` as hexadecimal.
///
/// Parsing is lenient: leading whitespace and an optional `0x` prefix are
/// skipped, then the longest run of hex digits is used. No digits gives 0.
pub fn seed_from_id(id: &str) -> u32 {
    let char_count = id.chars().count();
    let suffix: String = id.chars().skip(char_count.saturating_sub(SEED_SUFFIX_LEN)).collect();
    let trimmed = suffix.trim_start();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(trimmed);
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map_or(digits.len(), |(i, _)| i);
    u32::from_str_radix(&digits[..end], 16).unwrap_or(0)
}

/// Rating in `[4.0, 5.0]` with one decimal: `4 + (seed mod 11) / 10`.
///
/// # Examples
/// ```
/// use tf_idf_matcher::rating::derive_rating;
/// assert_eq!(derive_rating("64f1a2b3c4d5e6f7a8b9000b"), 4.0);
/// assert_eq!(derive_rating("64f1a2b3c4d5e6f7a8b90010"), 4.5);
/// ```
pub fn derive_rating(id: &str) -> f64 {
    let tenths = 40 + seed_from_id(id) % 11;
    tenths as f64 / 10.0
}
