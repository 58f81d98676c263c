//! Upload job controller.

use crate::workspace::{Job, JobGuard, Workspace};
use scriptoria_core::UploadFile;
use scriptoria_error::{ExtractionError, ScriptoriaResult};
use scriptoria_interface::{Extraction, UploadProgress};
use std::sync::Arc;
use tracing::{info, instrument, warn};

impl Workspace {
    /// Extract text from a PDF or Word document into the story idea.
    ///
    /// The file type is checked before anything else; a rejected file never
    /// reaches the gateway. Progress is published from 0 while the body
    /// streams and returns to 0 once the job resolves. A successful
    /// extraction overwrites the story idea, including edits made while the
    /// upload was in flight.
    ///
    /// # Errors
    ///
    /// - [`scriptoria_error::ValidationError`] for an unsupported or empty file
    /// - [`scriptoria_error::SessionError`] while an upload or generation is
    ///   in flight, or if the session was reset before the answer arrived
    /// - [`ExtractionError`] when the gateway fails; the story idea is kept
    #[instrument(skip(self, file), fields(file = %file.file_name(), bytes = file.len()))]
    pub async fn upload(&self, file: UploadFile) -> ScriptoriaResult<String> {
        let kind = file.validate()?;
        let epoch = self.core().state.begin_upload()?;
        self.progress_sender().send_replace(0);
        info!(epoch, %kind, "Upload started");

        let guard = JobGuard::new(self, epoch, Job::Upload);
        let sink = UploadProgress::new(Arc::clone(self.progress_sender()), file.len() as u64);
        let result = self.gateway().extract(&file, &sink).await;
        guard.disarm();

        let outcome = result
            .map(Extraction::into_text)
            .map_err(|e| ExtractionError::new(e.user_message()));
        {
            let mut core = self.core();
            if core.state.epoch() == epoch {
                self.progress_sender().send_replace(0);
            }
            match &outcome {
                Ok(text) => core
                    .state
                    .finish_upload(epoch, Ok((file.file_name().clone(), text.clone())))?,
                Err(e) => core.state.finish_upload(epoch, Err(e.message.clone()))?,
            }
        }

        match outcome {
            Ok(text) => {
                info!(chars = text.chars().count(), "Upload finished");
                Ok(text)
            }
            Err(e) => {
                warn!(error = %e.message, "Upload failed");
                Err(e.into())
            }
        }
    }
}
