//! Generation job controller.

use crate::StoredStory;
use crate::workspace::{Job, JobGuard, Workspace};
use scriptoria_core::Document;
use scriptoria_error::{GenerationError, ScriptoriaResult};
use scriptoria_interface::GenerateRequest;
use tracing::{info, instrument, warn};

impl Workspace {
    /// Generate a breakdown from the current story idea and primary genre.
    ///
    /// The idea is trimmed and checked against the configured bounds before
    /// anything else happens; a rejected idea never reaches the gateway. On
    /// submission the committed document, any open draft and the last error
    /// are cleared and the runtime ticker restarts from 0. The ticker stops
    /// as soon as the gateway answers.
    ///
    /// # Errors
    ///
    /// - [`scriptoria_error::ValidationError`] for an empty, short or long idea
    /// - [`scriptoria_error::SessionError`] while an upload or generation is
    ///   in flight, or if the session was reset before the answer arrived
    /// - [`GenerationError`] carrying the most specific message available when
    ///   the gateway fails; the session settles in Idle
    #[instrument(skip(self), fields(gateway = self.gateway().gateway_name()))]
    pub async fn generate(&self) -> ScriptoriaResult<Document> {
        let (epoch, request) = {
            let mut core = self.core();
            let idea = self
                .settings()
                .idea_bounds()
                .validate(core.state.story_idea())?
                .to_string();
            let genre = core
                .state
                .genres()
                .primary_or(self.settings().default_genre())
                .to_string();
            let epoch = core.state.begin_generation()?;
            core.ticker.start();
            (epoch, GenerateRequest::new(idea, genre))
        };
        info!(epoch, genre = %request.genre(), "Generation started");

        let guard = JobGuard::new(self, epoch, Job::Generation);
        let result = self.gateway().generate(&request).await;
        guard.disarm();

        let outcome = result.map_err(|e| GenerationError::new(e.user_message()));
        let elapsed = {
            let mut core = self.core();
            if core.state.epoch() == epoch {
                core.ticker.stop();
            }
            let elapsed = core.ticker.elapsed();
            match &outcome {
                Ok(document) => core.state.finish_generation(epoch, Ok(document.clone()))?,
                Err(e) => core.state.finish_generation(epoch, Err(e.message.clone()))?,
            }
            elapsed
        };

        match outcome {
            Ok(document) => {
                info!(elapsed, title = %document.title(), "Generation finished");
                let story = StoredStory::new(
                    request.story_idea().clone(),
                    request.genre().clone(),
                    document,
                );
                self.notify_saved(&story);
                Ok(story.into_document())
            }
            Err(e) => {
                warn!(elapsed, error = %e.message, "Generation failed");
                Err(e.into())
            }
        }
    }
}
