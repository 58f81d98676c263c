//! Story idea validation and extracted-text cleanup.

use scriptoria_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Accepted story idea length, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct IdeaBounds {
    min_chars: usize,
    max_chars: usize,
}

impl Default for IdeaBounds {
    fn default() -> Self {
        Self {
            min_chars: 20,
            max_chars: 500,
        }
    }
}

impl IdeaBounds {
    /// Bounds with explicit limits.
    pub fn new(min_chars: usize, max_chars: usize) -> Self {
        Self {
            min_chars,
            max_chars,
        }
    }

    /// Validate an idea, returning it trimmed.
    ///
    /// # Errors
    ///
    /// [`ValidationErrorKind::EmptyIdea`], [`ValidationErrorKind::IdeaTooShort`]
    /// or [`ValidationErrorKind::IdeaTooLong`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptoria_core::IdeaBounds;
    ///
    /// let bounds = IdeaBounds::default();
    /// assert!(bounds.validate("short").is_err());
    /// assert_eq!(
    ///     bounds.validate("  A lighthouse keeper hears voices.  ").unwrap(),
    ///     "A lighthouse keeper hears voices."
    /// );
    /// ```
    pub fn validate<'a>(&self, idea: &'a str) -> Result<&'a str, ValidationError> {
        let trimmed = idea.trim();
        let chars = trimmed.chars().count();
        if chars == 0 {
            return Err(ValidationError::new(ValidationErrorKind::EmptyIdea));
        }
        if chars < self.min_chars {
            return Err(ValidationError::new(ValidationErrorKind::IdeaTooShort {
                chars,
                min: self.min_chars,
            }));
        }
        if chars > self.max_chars {
            return Err(ValidationError::new(ValidationErrorKind::IdeaTooLong {
                chars,
                max: self.max_chars,
            }));
        }
        Ok(trimmed)
    }

    /// Counter shown under the idea box, e.g. `42/500`.
    pub fn counter(&self, idea: &str) -> String {
        format!("{}/{}", idea.chars().count(), self.max_chars)
    }
}

/// Normalise text pulled out of an uploaded document: trim every line and
/// drop blank ones.
///
/// # Examples
///
/// ```
/// use scriptoria_core::clean_extracted_text;
///
/// assert_eq!(clean_extracted_text("  FADE IN:\n\n\n  INT. HOUSE  \n"), "FADE IN:\nINT. HOUSE");
/// ```
pub fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
