pub mod batch;
/// Soundex phonetic encoding for sndx.
///
/// Pipeline : codepoints → lettres A–Z normalisées → code de 4 caractères.
pub mod encoder;
pub mod normalize;
pub mod similarity;

pub use encoder::{Encoder, encode, encode_letters, encode_str, encode_with};
pub use normalize::{normalize, to_upper};
