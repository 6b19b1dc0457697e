use crate::error::{Error, Result};

/// ECMAScript `WhiteSpace` and `LineTerminator`: Unicode `White_Space`
/// without NEL (U+0085), plus the byte order mark (U+FEFF).
#[inline]
#[must_use]
pub fn is_blank_char(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trims whitespace and rejects empty strings.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if nothing is left after trimming.
pub fn validate_non_empty(input: &str) -> Result<&str> {
    let trimmed = input.trim_matches(is_blank_char);
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(trimmed)
}

/// `true` if `input` is present and has a non-whitespace character.
#[must_use]
pub fn is_non_empty(input: Option<&str>) -> bool {
    input.is_some_and(|s| validate_non_empty(s).is_ok())
}
