//! Edit transaction errors.

/// Specific edit transaction failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EditErrorKind {
    /// `begin` called while a transaction is open
    #[display("An edit transaction is already open")]
    TransactionAlreadyOpen,
    /// Mutation or commit attempted with no open transaction
    #[display("No edit transaction is open")]
    NoOpenTransaction,
    /// `begin` called with no committed document
    #[display("There is no document to edit")]
    NoDocument,
    /// Path is well formed but addresses nothing in the draft
    #[display("Field path '{}' does not exist in the document", _0)]
    PathNotFound(String),
    /// Path string could not be parsed
    #[display("Invalid field path '{}'", _0)]
    InvalidPath(String),
}

/// Edit error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{EditError, EditErrorKind};
///
/// let err = EditError::new(EditErrorKind::NoOpenTransaction);
/// assert_eq!(err.kind, EditErrorKind::NoOpenTransaction);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Edit Error: {} at line {} in {}", kind, line, file)]
pub struct EditError {
    /// The specific error condition
    pub kind: EditErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl EditError {
    /// Create a new EditError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EditErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
