use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Table Soundex classique (Russell & Odell), une entrée par lettre A–Z.
///
/// `0` : lettre non encodée (voyelles, H, W, Y).
pub const DEFAULT_MAPPING: &str = "01230120022455012623010202";

/// Nombre de lettres couvertes par une table.
pub const MAPPING_LEN: usize = 26;

const DEFAULT_CODES: [char; MAPPING_LEN] = [
    '0', '1', '2', '3', '0', '1', '2', '0', '0', '2', '2', '4', '5', //
    '5', '0', '1', '2', '6', '2', '3', '0', '1', '0', '2', '0', '2',
];

/// Lookup table mapping an uppercase ASCII letter → Soundex code.
///
/// Validated once, immutable afterwards. `Copy`, so it can be handed to any
/// number of threads without synchronisation.
///
/// # Example
/// ```
/// use sx_core::mapping::SoundexMapping;
/// let mapping = SoundexMapping::default();
/// assert_eq!(mapping.code(b'B'), '1');
/// assert_eq!(mapping.code(b'R'), '6');
/// assert_eq!(mapping.code(b'A'), '0');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct SoundexMapping {
    codes: [char; MAPPING_LEN],
}

impl SoundexMapping {
    /// Build a mapping from one code per letter A–Z.
    ///
    /// Only the length is checked: any code value is accepted, repeats and
    /// `'0'` included.
    ///
    /// # Errors
    /// Returns [`CoreError::MappingLength`] if `table` does not hold exactly
    /// 26 entries.
    ///
    /// # Example
    /// ```
    /// use sx_core::mapping::SoundexMapping;
    /// assert!(SoundexMapping::validate(&['1'; 26]).is_ok());
    /// assert!(SoundexMapping::validate(&['1'; 25]).is_err());
    /// ```
    pub fn validate(table: &[char]) -> Result<Self, CoreError> {
        let codes: [char; MAPPING_LEN] = table
            .try_into()
            .map_err(|_| CoreError::MappingLength { len: table.len() })?;
        Ok(Self { codes })
    }

    /// Build a mapping from its textual form, e.g. `"01230120022455012623010202"`.
    ///
    /// Length is counted in characters, not bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::MappingLength`] if `text` is not 26 characters long.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = text.chars().collect();
        Self::validate(&chars)
    }

    /// Code for an uppercase ASCII letter.
    ///
    /// # Panics
    /// Panics if `letter` is not in `b'A'..=b'Z'`. Normalized input never is.
    #[inline(always)]
    #[must_use]
    pub fn code(&self, letter: u8) -> char {
        self.codes[usize::from(letter - b'A')]
    }

    /// The 26 codes, A first.
    #[must_use]
    pub fn as_chars(&self) -> &[char; MAPPING_LEN] {
        &self.codes
    }
}

impl Default for SoundexMapping {
    fn default() -> Self {
        Self {
            codes: DEFAULT_CODES,
        }
    }
}

impl fmt::Display for SoundexMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.codes.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl TryFrom<String> for SoundexMapping {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SoundexMapping> for String {
    fn from(mapping: SoundexMapping) -> Self {
        mapping.to_string()
    }
}
