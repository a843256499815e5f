use rayon::prelude::*;
use sx_core::code::SoundexCode;

use crate::encoder::Encoder;

/// Encode many strings in parallel.
///
/// The encoder (and its mapping) is shared read-only across the rayon pool;
/// each input is encoded independently. Output order matches input order.
///
/// # Example
/// ```
/// use sx_phonetic::batch::encode_batch;
/// use sx_phonetic::encoder::Encoder;
/// let codes = encode_batch(&Encoder::default(), &["Robert", "Ashcraft", ""]);
/// let codes: Vec<String> = codes.iter().map(ToString::to_string).collect();
/// assert_eq!(codes, ["R163", "A261", "0000"]);
/// ```
#[must_use]
pub fn encode_batch<S>(encoder: &Encoder, inputs: &[S]) -> Vec<SoundexCode>
where
    S: AsRef<str> + Sync,
{
    log::debug!("Encodage par lots : {} entrées", inputs.len());
    inputs
        .par_iter()
        .map(|text| encoder.encode_str(text.as_ref()))
        .collect()
}
