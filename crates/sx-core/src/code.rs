use std::fmt;

use serde::{Serialize, Serializer};

/// Longueur fixe d'un code Soundex.
pub const CODE_LEN: usize = 4;

/// Code Soundex de taille fixe : une lettre suivie de trois codes.
///
/// Toujours exactement 4 caractères, `"0000"` pour une entrée sans lettre.
///
/// # Example
/// ```
/// use sx_core::code::SoundexCode;
/// let code = SoundexCode::from_chars(['R', '1', '6', '3']);
/// assert_eq!(code.to_string(), "R163");
/// assert_eq!(SoundexCode::default().to_string(), "0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoundexCode {
    chars: [char; CODE_LEN],
}

impl SoundexCode {
    /// Wrap four already-encoded characters.
    #[must_use]
    pub const fn from_chars(chars: [char; CODE_LEN]) -> Self {
        Self { chars }
    }

    /// The four characters of the code.
    #[must_use]
    pub const fn chars(&self) -> [char; CODE_LEN] {
        self.chars
    }

    /// Leading letter, or `'0'` when the input held no letter.
    #[must_use]
    pub const fn initial(&self) -> char {
        self.chars[0]
    }

    /// Number of positions at which two codes agree (0–4).
    ///
    /// # Example
    /// ```
    /// use sx_core::code::SoundexCode;
    /// let a = SoundexCode::from_chars(['R', '1', '6', '3']);
    /// let b = SoundexCode::from_chars(['R', '1', '5', '0']);
    /// assert_eq!(a.shared_positions(&b), 2);
    /// ```
    #[must_use]
    pub fn shared_positions(&self, other: &Self) -> usize {
        self.chars
            .iter()
            .zip(other.chars.iter())
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl Default for SoundexCode {
    fn default() -> Self {
        Self {
            chars: ['0'; CODE_LEN],
        }
    }
}

impl fmt::Display for SoundexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl PartialEq<&str> for SoundexCode {
    fn eq(&self, other: &&str) -> bool {
        other.chars().eq(self.chars.iter().copied())
    }
}

/// Sérialisé comme une chaîne de 4 caractères (`"R163"`).
impl Serialize for SoundexCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
