//! Pre-flight validation errors.
//!
//! These are raised before any network interaction and are always recoverable.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Story idea is empty after trimming
    #[display("Story idea is required")]
    EmptyIdea,
    /// Story idea is below the minimum length
    #[display("Story idea must be at least {} characters (got {})", min, chars)]
    IdeaTooShort {
        /// Characters supplied
        chars: usize,
        /// Minimum accepted
        min: usize,
    },
    /// Story idea exceeds the maximum length
    #[display("Story idea must be at most {} characters (got {})", max, chars)]
    IdeaTooLong {
        /// Characters supplied
        chars: usize,
        /// Maximum accepted
        max: usize,
    },
    /// Upload is not a PDF or Word document
    #[display("Unsupported file type for '{}': upload a .pdf, .docx or .doc file", _0)]
    UnsupportedFileType(String),
    /// Upload has no content
    #[display("File '{}' is empty", _0)]
    EmptyFile(String),
    /// Genre tag is blank
    #[display("Genre cannot be empty")]
    EmptyGenre,
    /// Genre tag already selected
    #[display("Genre '{}' is already selected", _0)]
    DuplicateGenre(String),
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyGenre);
/// assert!(format!("{}", err).contains("Genre cannot be empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
