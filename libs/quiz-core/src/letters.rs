//! Option letter lookup for multiple choice questions.

/// Letters a user may type to pick an option instead of its text.
const RESOLVABLE: std::ops::RangeInclusive<char> = 'A'..='D';

/// Bidirectional mapping between zero-based option index and uppercase letter.
pub struct OptionLetter;

impl OptionLetter {
    /// `0 -> 'A'`, `1 -> 'B'`, ... up to `'Z'`.
    pub fn from_index(index: usize) -> Option<char> {
        if index < 26 {
            Some((b'A' + index as u8) as char)
        } else {
            None
        }
    }

    /// `'A' -> 0`, `'b' -> 1`, ...
    pub fn to_index(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some((upper as u8 - b'A') as usize)
        } else {
            None
        }
    }

    /// Display label for an option; options past `Z` fall back to a number.
    pub fn label(index: usize) -> String {
        match Self::from_index(index) {
            Some(letter) => letter.to_string(),
            None => (index + 1).to_string(),
        }
    }
}

/// Apply letter resolution to a raw response.
///
/// The response is trimmed; if it is a single letter `A`-`D` (any case)
/// naming an existing option, the option text is returned. Otherwise the
/// trimmed response is returned unchanged.
pub fn resolve_response(response: &str, options: &[String]) -> String {
    let trimmed = response.trim();

    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let upper = c.to_ascii_uppercase();
        if RESOLVABLE.contains(&upper) {
            if let Some(option) = OptionLetter::to_index(upper).and_then(|i| options.get(i)) {
                return option.clone();
            }
        }
    }

    trimmed.to_string()
}
