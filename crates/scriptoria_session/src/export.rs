//! Export job controller and the artifact naming rule.

use crate::workspace::{Job, JobGuard, Workspace};
use scriptoria_error::{ExportError, ScriptoriaError, ScriptoriaErrorKind, ScriptoriaResult};
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// A PDF written by [`Workspace::export`].
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ExportArtifact {
    /// File name derived from the document title
    file_name: String,
    /// Where the file was written
    path: PathBuf,
    /// Bytes written
    size: usize,
    /// Whether the bytes came from a failed call's response body
    recovered: bool,
}

/// File name for a document's PDF: every character that is not an ASCII
/// letter or digit becomes `_`. An empty title gives `screenplay.pdf`.
///
/// # Examples
///
/// ```
/// use scriptoria_session::artifact_name;
///
/// assert_eq!(artifact_name("The Keeper: Part 2"), "The_Keeper__Part_2.pdf");
/// assert_eq!(artifact_name("Café"), "Caf_.pdf");
/// assert_eq!(artifact_name("   "), "screenplay.pdf");
/// ```
pub fn artifact_name(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "screenplay.pdf".to_string()
    } else {
        format!("{}.pdf", stem)
    }
}

/// Export recovery policy: a failed export call that still delivered a
/// non-empty response body yields that body as the artifact.
///
/// Only [`ScriptoriaErrorKind::Remote`] failures carry a body.
pub fn recoverable_body(err: &ScriptoriaError) -> Option<&[u8]> {
    match err.kind() {
        ScriptoriaErrorKind::Remote(remote) => remote.usable_body(),
        _ => None,
    }
}

impl Workspace {
    /// Render the active document to a PDF under the configured output
    /// directory.
    ///
    /// The document (the draft while editing) is captured by value on
    /// submission, so a generation started meanwhile cannot change what is
    /// exported. The session returns to Ready whether or not the export
    /// succeeds.
    ///
    /// # Errors
    ///
    /// - [`scriptoria_error::SessionError`] unless the phase is Ready; the
    ///   gateway is not called
    /// - [`ExportError`] when the gateway fails with no usable body, or the
    ///   artifact cannot be written
    #[instrument(skip(self), fields(gateway = self.gateway().gateway_name()))]
    pub async fn export(&self) -> ScriptoriaResult<ExportArtifact> {
        let (epoch, document) = self.core().state.begin_export()?;
        let file_name = artifact_name(document.title());
        info!(epoch, %file_name, "Export started");

        let guard = JobGuard::new(self, epoch, Job::Export);
        let outcome = match self.gateway().export_pdf(&document).await {
            Ok(bytes) => self.write_artifact(file_name, bytes, false).await,
            Err(err) => match recoverable_body(&err) {
                Some(body) => {
                    warn!(
                        error = %err.user_message(),
                        bytes = body.len(),
                        "Export call failed, saving the response body"
                    );
                    self.write_artifact(file_name, body.to_vec(), true).await
                }
                None => Err(ExportError::new(err.user_message())),
            },
        };
        guard.disarm();

        self.core()
            .state
            .finish_export(epoch, outcome.as_ref().err().map(|e| e.message.clone()))?;

        match outcome {
            Ok(artifact) => {
                info!(path = %artifact.path.display(), size = artifact.size, recovered = artifact.recovered, "Export finished");
                Ok(artifact)
            }
            Err(e) => {
                warn!(error = %e.message, "Export failed");
                Err(e.into())
            }
        }
    }

    async fn write_artifact(
        &self,
        file_name: String,
        bytes: Vec<u8>,
        recovered: bool,
    ) -> Result<ExportArtifact, ExportError> {
        let dir = self.settings().output_dir();
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            ExportError::new(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        let path = dir.join(&file_name);
        debug!(path = %path.display(), bytes = bytes.len(), "Writing artifact");
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| ExportError::new(format!("Failed to write {}: {}", path.display(), e)))?;
        Ok(ExportArtifact {
            file_name,
            path,
            size: bytes.len(),
            recovered,
        })
    }
}
