use crate::encoder::Encoder;

/// Two strings sound alike when their codes are identical.
///
/// # Example
/// ```
/// use sx_phonetic::encoder::Encoder;
/// use sx_phonetic::similarity::sounds_like;
/// let encoder = Encoder::default();
/// assert!(sounds_like(&encoder, "Robert", "Rupert"));
/// assert!(!sounds_like(&encoder, "Robert", "Rubin"));
/// ```
#[must_use]
pub fn sounds_like(encoder: &Encoder, a: &str, b: &str) -> bool {
    encoder.encode_str(a) == encoder.encode_str(b)
}

/// Similarity score in `[0, 4]`: positions at which both codes agree.
#[must_use]
pub fn score(encoder: &Encoder, a: &str, b: &str) -> usize {
    encoder
        .encode_str(a)
        .shared_positions(&encoder.encode_str(b))
}
