//! Top-level error wrapper types.

use crate::{
    ConfigError, EditError, ExportError, ExtractionError, GenerationError, HttpError, JsonError,
    RemoteError, SessionError, ValidationError,
};

/// Every error condition the workspace can report.
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScriptoriaErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Local pre-flight validation failure
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Phase guard rejection
    #[from(SessionError)]
    Session(SessionError),
    /// Edit transaction misuse or bad path
    #[from(EditError)]
    Edit(EditError),
    /// Gateway call failure
    #[from(RemoteError)]
    Remote(RemoteError),
    /// Upload/extraction failure
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Generation failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Export failure
    #[from(ExportError)]
    Export(ExportError),
}

/// Scriptoria error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scriptoria_error::{HttpError, ScriptoriaError, ScriptoriaErrorKind};
///
/// let err: ScriptoriaError = HttpError::new("Connection failed").into();
/// assert!(matches!(err.kind(), ScriptoriaErrorKind::Http(_)));
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scriptoria Error: {}", _0)]
pub struct ScriptoriaError(Box<ScriptoriaErrorKind>);

impl ScriptoriaError {
    /// Create a new error from a kind.
    pub fn new(kind: ScriptoriaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptoriaErrorKind {
        &self.0
    }

    /// The message a user should see, without source locations.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ScriptoriaErrorKind::Http(e) => e.message.clone(),
            ScriptoriaErrorKind::Json(e) => e.message.clone(),
            ScriptoriaErrorKind::Config(e) => e.message.clone(),
            ScriptoriaErrorKind::Validation(e) => e.kind.to_string(),
            ScriptoriaErrorKind::Session(e) => e.kind.to_string(),
            ScriptoriaErrorKind::Edit(e) => e.kind.to_string(),
            ScriptoriaErrorKind::Remote(e) => e.best_message().to_string(),
            ScriptoriaErrorKind::Extraction(e) => e.message.clone(),
            ScriptoriaErrorKind::Generation(e) => e.message.clone(),
            ScriptoriaErrorKind::Export(e) => e.message.clone(),
        }
    }
}

// Generic From implementation for any type that converts to ScriptoriaErrorKind
impl<T> From<T> for ScriptoriaError
where
    T: Into<ScriptoriaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scriptoria operations.
pub type ScriptoriaResult<T> = std::result::Result<T, ScriptoriaError>;
