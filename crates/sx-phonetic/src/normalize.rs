/// Uppercase form of a single codepoint.
///
/// Uses the one-to-one uppercase mapping: a codepoint whose uppercase form
/// expands to several characters (`ß` → `SS`) is returned unchanged, as is
/// any value that is not a Unicode scalar value.
///
/// # Example
/// ```
/// use sx_phonetic::normalize::to_upper;
/// assert_eq!(to_upper('r' as i32), 'R' as i32);
/// assert_eq!(to_upper('ß' as i32), 'ß' as i32);
/// assert_eq!(to_upper(-1), -1);
/// ```
#[must_use]
pub fn to_upper(cp: i32) -> i32 {
    let Some(c) = u32::try_from(cp).ok().and_then(char::from_u32) else {
        return cp;
    };
    if c.is_ascii() {
        return i32::from(c.to_ascii_uppercase() as u8);
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => codepoint(single),
        _ => cp,
    }
}

/// Filter codepoints down to the uppercase ASCII letters `A..=Z`, in order.
///
/// Digits, punctuation, whitespace and non-Latin scripts are dropped; never
/// fails.
///
/// # Example
/// ```
/// use sx_phonetic::normalize::{codepoints, normalize};
/// assert_eq!(normalize(&codepoints("R1o!b-e*r@t")), b"ROBERT");
/// assert!(normalize(&codepoints("123 ?!")).is_empty());
/// ```
#[must_use]
pub fn normalize(codepoints: &[i32]) -> Vec<u8> {
    codepoints
        .iter()
        .filter_map(|&cp| ascii_letter(to_upper(cp)))
        .collect()
}

/// [`normalize`] over the characters of a string.
#[must_use]
pub fn normalize_str(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| ascii_letter(to_upper(codepoint(c))))
        .collect()
}

/// Codepoints of a string, as signed scalar values.
#[must_use]
pub fn codepoints(text: &str) -> Vec<i32> {
    text.chars().map(codepoint).collect()
}

#[inline(always)]
fn codepoint(c: char) -> i32 {
    // U+10FFFF fits in 21 bits.
    u32::from(c) as i32
}

#[inline(always)]
fn ascii_letter(cp: i32) -> Option<u8> {
    u8::try_from(cp).ok().filter(u8::is_ascii_uppercase)
}
