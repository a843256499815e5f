use sx_core::code::{CODE_LEN, SoundexCode};
use sx_core::error::CoreError;
use sx_core::mapping::SoundexMapping;

use crate::normalize::{normalize, normalize_str};

/// Soundex encoder bound to a validated mapping.
///
/// Holds no state besides the table: one instance can serve any number of
/// calls, from any number of threads.
///
/// # Example
/// ```
/// use sx_phonetic::encoder::Encoder;
/// let encoder = Encoder::default();
/// assert_eq!(encoder.encode_str("Robert").to_string(), "R163");
/// assert_eq!(encoder.encode_str("Rupert").to_string(), "R163");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Encoder {
    mapping: SoundexMapping,
}

impl Encoder {
    /// Create an encoder from an already-validated mapping.
    #[must_use]
    pub const fn new(mapping: SoundexMapping) -> Self {
        Self { mapping }
    }

    /// Validate `table` and build an encoder from it.
    ///
    /// # Errors
    /// Returns [`CoreError::MappingLength`] if `table` does not hold 26 codes.
    pub fn with_table(table: &[char]) -> Result<Self, CoreError> {
        SoundexMapping::validate(table).map(Self::new)
    }

    /// The mapping this encoder applies.
    #[must_use]
    pub const fn mapping(&self) -> &SoundexMapping {
        &self.mapping
    }

    /// Encode a codepoint sequence.
    #[must_use]
    pub fn encode(&self, codepoints: &[i32]) -> SoundexCode {
        encode_letters(&normalize(codepoints), &self.mapping)
    }

    /// Encode the characters of a string.
    #[must_use]
    pub fn encode_str(&self, text: &str) -> SoundexCode {
        encode_letters(&normalize_str(text), &self.mapping)
    }
}

/// Encode codepoints with the classic Soundex table. Never fails.
///
/// # Example
/// ```
/// use sx_phonetic::encoder::encode;
/// assert_eq!(encode(&[]).to_string(), "0000");
/// ```
#[must_use]
pub fn encode(codepoints: &[i32]) -> SoundexCode {
    encode_letters(&normalize(codepoints), &SoundexMapping::default())
}

/// Encode codepoints with a caller-supplied table.
///
/// The table is checked before the input is even looked at.
///
/// # Errors
/// Returns [`CoreError::MappingLength`] if `mapping` does not hold 26 codes.
///
/// # Example
/// ```
/// use sx_phonetic::encoder::encode_with;
/// use sx_phonetic::normalize::codepoints;
/// let table: Vec<char> = "01230120022455012623010202".chars().collect();
/// assert_eq!(encode_with(&codepoints("Tymczak"), &table).unwrap().to_string(), "T522");
/// assert!(encode_with(&codepoints("Tymczak"), &table[..25]).is_err());
/// ```
pub fn encode_with(codepoints: &[i32], mapping: &[char]) -> Result<SoundexCode, CoreError> {
    let mapping = SoundexMapping::validate(mapping)?;
    Ok(encode_letters(&normalize(codepoints), &mapping))
}

/// Encode a string with the classic Soundex table.
#[must_use]
pub fn encode_str(text: &str) -> SoundexCode {
    Encoder::default().encode_str(text)
}

/// Encode letters already restricted to `b'A'..=b'Z'`.
///
/// The first letter is copied verbatim; each following letter contributes its
/// code when that code is not `'0'` and differs from the previous one. A `'0'`
/// code still becomes the previous code, so a class repeated across a vowel
/// is written twice. Stops as soon as four positions are filled.
///
/// # Panics
/// Panics if `letters` holds anything outside `b'A'..=b'Z'`.
///
/// # Example
/// ```
/// use sx_core::mapping::SoundexMapping;
/// use sx_phonetic::encoder::encode_letters;
/// let code = encode_letters(b"ASHCRAFT", &SoundexMapping::default());
/// assert_eq!(code.to_string(), "A261");
/// ```
#[must_use]
pub fn encode_letters(letters: &[u8], mapping: &SoundexMapping) -> SoundexCode {
    let mut out = ['0'; CODE_LEN];
    let Some(&first) = letters.first() else {
        return SoundexCode::from_chars(out);
    };
    out[0] = char::from(first);

    // The initial is written as a letter, so its class does not block an
    // identical code at position 1 (Pfister → P123).
    let mut last = '0';
    let mut cursor = 1;
    for index in 1..letters.len() {
        if cursor == CODE_LEN {
            break;
        }
        let Some(code) = lookup(letters, index, mapping) else {
            continue;
        };
        if code != '0' && code != last {
            out[cursor] = code;
            cursor += 1;
        }
        last = code;
    }
    SoundexCode::from_chars(out)
}

/// Code of `letters[index]`, or `None` when an H/W digraph swallows it.
///
/// A letter right after H or W is dropped if the letter before that is also
/// H/W, or shares its code.
#[inline(always)]
fn lookup(letters: &[u8], index: usize, mapping: &SoundexMapping) -> Option<char> {
    let code = mapping.code(letters[index]);
    if index > 1 && code != '0' && is_separator(letters[index - 1]) {
        let before = letters[index - 2];
        if is_separator(before) || mapping.code(before) == code {
            return None;
        }
    }
    Some(code)
}

#[inline(always)]
fn is_separator(letter: u8) -> bool {
    matches!(letter, b'H' | b'W')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::codepoints;

    fn sx(text: &str) -> String {
        encode(&codepoints(text)).to_string()
    }

    #[test]
    fn reference_vectors() {
        assert_eq!(sx("Robert"), "R163");
        assert_eq!(sx("Rupert"), "R163");
        assert_eq!(sx("Ashcraft"), "A261");
        assert_eq!(sx("Tymczak"), "T522");
        assert_eq!(sx("Pfister"), "P123");
    }

    #[test]
    fn initial_class_does_not_block_second_letter() {
        // L's class 4 is written again right after the initial
        assert_eq!(sx("Lloyd"), "L430");
        assert_eq!(sx("Pfister"), "P123");
        assert_eq!(sx("Bb"), "B100");
    }

    #[test]
    fn empty_and_letterless_input() {
        assert_eq!(sx(""), "0000");
        assert_eq!(sx("1234 -- !?"), "0000");
        assert_eq!(sx("李小龍"), "0000");
    }

    #[test]
    fn single_letter_is_zero_padded() {
        assert_eq!(sx("a"), "A000");
        assert_eq!(sx("Lee"), "L000");
    }

    #[test]
    fn always_four_chars() {
        for text in ["", "x", "ab", "Washington", "Lloyd-Wright-Jones", "!!"] {
            assert_eq!(encode(&codepoints(text)).chars().len(), 4);
        }
    }

    #[test]
    fn ignores_case_and_non_letters() {
        assert_eq!(sx("R1o!b-e*r@t"), sx("ROBERT"));
        assert_eq!(sx("robert"), sx("ROBERT"));
        assert_eq!(sx("  tYmCzAk  "), "T522");
    }

    #[test]
    fn first_char_is_first_letter() {
        assert_eq!(encode(&codepoints("42 jackson")).initial(), 'J');
        assert_eq!(sx("Jackson"), "J250");
    }

    #[test]
    fn adjacent_same_class_collapses() {
        // C and Z share class 2
        assert_eq!(sx("Tymczak"), "T522");
        assert_eq!(sx("Gutierrez"), "G362");
        assert_eq!(sx("Abbbbbbb"), "A100");
    }

    #[test]
    fn vowel_breaks_a_run() {
        assert_eq!(sx("Abab"), "A110");
        assert_eq!(sx("Tatata"), "T330");
    }

    #[test]
    fn h_and_w_join_same_class() {
        assert_eq!(sx("Ashcraft"), "A261");
        assert_eq!(sx("Ashcroft"), "A261");
        assert_eq!(sx("Ashacraft"), "A226");
        assert_eq!(sx("Oshs"), "O200");
        assert_eq!(sx("Awwk"), "A000");
    }

    #[test]
    fn full_code_ignores_trailing_letters() {
        let base = sx("Robert");
        assert_eq!(sx("Robertson"), base);
        assert_eq!(sx("Robertbcdfgklmnpqrstvxz"), base);
        assert_eq!(sx(&format!("Robert{}", "x".repeat(10_000))), base);
    }

    #[test]
    fn custom_mapping_is_used() {
        let table: Vec<char> = "12345678901234567890123456".chars().collect();
        let code = encode_with(&codepoints("abc"), &table).unwrap();
        assert_eq!(code, "A230");
    }

    #[test]
    fn custom_mapping_all_zero() {
        let table = ['0'; 26];
        let code = encode_with(&codepoints("Robert"), &table).unwrap();
        assert_eq!(code, "R000");
    }

    #[test]
    fn wrong_mapping_length_fails_for_every_input() {
        for len in [0usize, 25, 27] {
            let table = vec!['1'; len];
            for text in ["", "Robert", "123"] {
                assert_eq!(
                    encode_with(&codepoints(text), &table),
                    Err(CoreError::MappingLength { len })
                );
            }
        }
    }

    #[test]
    fn encoder_matches_free_functions() {
        let encoder = Encoder::with_table(&['2'; 26]).unwrap();
        assert_eq!(encoder.encode_str("Robert"), "R200");
        assert_eq!(Encoder::default().encode(&codepoints("Rupert")), encode_str("Rupert"));
        assert!(Encoder::with_table(&['2'; 3]).is_err());
    }

    #[test]
    fn encoder_exposes_its_mapping() {
        let mapping = SoundexMapping::parse("12345678901234567890123456").unwrap();
        let encoder = Encoder::new(mapping);
        assert_eq!(encoder.mapping(), &mapping);
        assert_eq!(Encoder::default().mapping(), &SoundexMapping::default());
    }
}
