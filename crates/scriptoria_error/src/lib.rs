//! Error types for the Scriptoria workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind (or a message) with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Local, pre-flight failures are [`ValidationError`]s. Failures of the three
//! remote operations surface as [`ExtractionError`], [`GenerationError`] and
//! [`ExportError`], each carrying the most specific human-readable message
//! available. None of them is fatal to a session.
//!
//! # Examples
//!
//! ```
//! use scriptoria_error::{ScriptoriaResult, ValidationError, ValidationErrorKind};
//!
//! fn check(idea: &str) -> ScriptoriaResult<()> {
//!     if idea.len() < 20 {
//!         Err(ValidationError::new(ValidationErrorKind::IdeaTooShort {
//!             chars: idea.len(),
//!             min: 20,
//!         }))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("short").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod edit;
mod error;
mod http;
mod job;
mod json;
mod remote;
mod session;
mod validation;

pub use config::ConfigError;
pub use edit::{EditError, EditErrorKind};
pub use error::{ScriptoriaError, ScriptoriaErrorKind, ScriptoriaResult};
pub use http::HttpError;
pub use job::{ExportError, ExtractionError, GenerationError};
pub use json::JsonError;
pub use remote::RemoteError;
pub use session::{SessionError, SessionErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
