pub mod utils;

use crate::error::Result;
pub use utils::{is_non_empty, validate_non_empty};

/// Trait for validating caller-supplied strings.
///
/// Implementors should:
/// - Check the input against their rule.
/// - Canonicalize if needed (e.g., trim surrounding whitespace).
/// - Return `Ok(canonical)` on success or an `Error` describing the rejection.
pub trait Validate {
    /// Validate the input and return its canonical form.
    ///
    /// # Errors
    ///
    /// Returns an error when the input does not satisfy the rule.
    fn validate(&self, input: &str) -> Result<String>;

    /// Boolean form of [`Validate::validate`].
    fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}

/// Accepts any string with at least one non-whitespace character.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmpty;

impl Validate for NonEmpty {
    fn validate(&self, input: &str) -> Result<String> {
        validate_non_empty(input).map(ToOwned::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn non_empty_trims() {
        assert_eq!(NonEmpty.validate("  hello \n").as_deref(), Ok("hello"));
    }

    #[test]
    fn non_empty_rejects_blank() {
        assert_eq!(NonEmpty.validate("\t  "), Err(Error::EmptyInput));
        assert!(!NonEmpty.is_valid(""));
        assert!(NonEmpty.is_valid("x"));
    }
}
