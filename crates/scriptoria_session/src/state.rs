//! Session state and its transitions.
//!
//! [`SessionState`] is synchronous and does no I/O. The job controllers on
//! [`crate::Workspace`] call a `begin_*` transition before contacting the
//! gateway and the matching `finish_*` transition with the result. Each
//! `begin_*` returns the session epoch; a `finish_*` carrying an older epoch
//! (the session was reset in between) is ignored.

use crate::{EditTransaction, Phase};
use scriptoria_core::{Document, FieldPath, GenreTags, Tab, TabView, select_view};
use scriptoria_error::{EditError, EditErrorKind, SessionError, SessionErrorKind};
use serde::Serialize;
use tracing::debug;

/// Everything one session knows.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    epoch: u64,
    story_idea: String,
    genres: GenreTags,
    uploaded_file_name: Option<String>,
    phase: Phase,
    committed: Option<Document>,
    edit: Option<EditTransaction>,
    active_tab: Tab,
    last_error: Option<String>,
    export_in_flight: bool,
}

/// Read-only copy of the observable session fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    phase: Phase,
    story_idea: String,
    genres: Vec<String>,
    uploaded_file_name: Option<String>,
    active_tab: Tab,
    has_document: bool,
    editing: bool,
    last_error: Option<String>,
    elapsed_seconds: u64,
    upload_progress: u8,
}

impl SessionState {
    /// Current epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Story idea text.
    pub fn story_idea(&self) -> &str {
        &self.story_idea
    }

    /// Replace the story idea.
    pub fn set_story_idea(&mut self, idea: impl Into<String>) {
        self.story_idea = idea.into();
    }

    /// Genre tags.
    pub fn genres(&self) -> &GenreTags {
        &self.genres
    }

    /// Genre tags, mutably.
    pub fn genres_mut(&mut self) -> &mut GenreTags {
        &mut self.genres
    }

    /// Name of the last successfully extracted file.
    pub fn uploaded_file_name(&self) -> Option<&str> {
        self.uploaded_file_name.as_deref()
    }

    /// Committed document.
    pub fn committed(&self) -> Option<&Document> {
        self.committed.as_ref()
    }

    /// Draft of the open edit transaction.
    pub fn draft(&self) -> Option<&Document> {
        self.edit.as_ref().map(EditTransaction::draft)
    }

    /// The draft while editing, otherwise the committed document.
    pub fn active_document(&self) -> Option<&Document> {
        self.draft().or(self.committed.as_ref())
    }

    /// Whether an edit transaction is open.
    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch tabs. Drafts are unaffected.
    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// View of the active document through the active tab.
    pub fn view(&self) -> Option<TabView<'_>> {
        self.active_document()
            .map(|doc| select_view(doc, self.active_tab))
    }

    /// Message of the most recent failed job.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether an export is in flight.
    pub fn export_in_flight(&self) -> bool {
        self.export_in_flight
    }

    /// Capture the observable fields.
    pub fn snapshot(&self, elapsed_seconds: u64, upload_progress: u8) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            story_idea: self.story_idea.clone(),
            genres: self.genres.as_slice().to_vec(),
            uploaded_file_name: self.uploaded_file_name.clone(),
            active_tab: self.active_tab,
            has_document: self.committed.is_some(),
            editing: self.edit.is_some(),
            last_error: self.last_error.clone(),
            elapsed_seconds,
            upload_progress,
        }
    }

    fn transition(&mut self, next: Phase) {
        if self.phase != next {
            debug!(from = %self.phase, to = %next, "Phase transition");
            self.phase = next;
        }
    }

    /// Phase to rest in when no upload or generation holds the session.
    fn settled_phase(&self) -> Phase {
        match (&self.committed, self.export_in_flight) {
            (Some(_), true) => Phase::Exporting,
            (Some(_), false) => Phase::Ready,
            (None, _) => Phase::Idle,
        }
    }

    fn ensure_not_busy(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Uploading => Err(SessionError::new(SessionErrorKind::UploadInFlight)),
            Phase::Generating => Err(SessionError::new(SessionErrorKind::GenerationInFlight)),
            _ => Ok(()),
        }
    }

    fn is_current(&self, epoch: u64) -> Result<(), SessionError> {
        if epoch == self.epoch {
            Ok(())
        } else {
            debug!(epoch, current = self.epoch, "Ignoring result from a reset session");
            Err(SessionError::new(SessionErrorKind::Abandoned))
        }
    }

    // ---- upload ----

    /// Enter Uploading.
    ///
    /// # Errors
    ///
    /// Rejected without side effects while an upload or generation is in flight.
    pub fn begin_upload(&mut self) -> Result<u64, SessionError> {
        self.ensure_not_busy()?;
        self.transition(Phase::Uploading);
        Ok(self.epoch)
    }

    /// Apply an extraction result and leave Uploading.
    ///
    /// On success the story idea is overwritten with `text`, including any
    /// edits made while the upload was in flight.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::Abandoned`] if the session was reset since
    /// [`begin_upload`](Self::begin_upload).
    pub fn finish_upload(
        &mut self,
        epoch: u64,
        result: Result<(String, String), String>,
    ) -> Result<(), SessionError> {
        self.is_current(epoch)?;
        match result {
            Ok((file_name, text)) => {
                self.story_idea = text;
                self.uploaded_file_name = Some(file_name);
                self.last_error = None;
            }
            Err(message) => self.last_error = Some(message),
        }
        self.transition(self.settled_phase());
        Ok(())
    }

    /// Leave Uploading without a result.
    pub fn abandon_upload(&mut self, epoch: u64) {
        if epoch == self.epoch && self.phase == Phase::Uploading {
            self.transition(self.settled_phase());
        }
    }

    // ---- generation ----

    /// Enter Generating, clearing the committed document, any open draft and
    /// the last error.
    ///
    /// # Errors
    ///
    /// Rejected without side effects while an upload or generation is in flight.
    pub fn begin_generation(&mut self) -> Result<u64, SessionError> {
        self.ensure_not_busy()?;
        self.committed = None;
        if let Some(edit) = self.edit.take() {
            edit.discard();
        }
        self.last_error = None;
        self.transition(Phase::Generating);
        Ok(self.epoch)
    }

    /// Apply a generation result and leave Generating.
    ///
    /// Success commits the document, selects the Outline tab and settles in
    /// Ready. Failure records the message and settles in Idle.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::Abandoned`] if the session was reset since
    /// [`begin_generation`](Self::begin_generation).
    pub fn finish_generation(
        &mut self,
        epoch: u64,
        result: Result<Document, String>,
    ) -> Result<(), SessionError> {
        self.is_current(epoch)?;
        match result {
            Ok(document) => {
                self.committed = Some(document);
                self.active_tab = Tab::Outline;
            }
            Err(message) => self.last_error = Some(message),
        }
        self.transition(self.settled_phase());
        Ok(())
    }

    /// Leave Generating without a result.
    pub fn abandon_generation(&mut self, epoch: u64) {
        if epoch == self.epoch && self.phase == Phase::Generating {
            self.transition(self.settled_phase());
        }
    }

    // ---- export ----

    /// Enter Exporting and capture the active document by value.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::NotReady`] unless the phase is Ready.
    pub fn begin_export(&mut self) -> Result<(u64, Document), SessionError> {
        if self.phase != Phase::Ready {
            return Err(SessionError::new(SessionErrorKind::NotReady(
                self.phase.to_string(),
            )));
        }
        let document = self
            .active_document()
            .cloned()
            .ok_or_else(|| SessionError::new(SessionErrorKind::NotReady(self.phase.to_string())))?;
        self.export_in_flight = true;
        self.transition(Phase::Exporting);
        Ok((self.epoch, document))
    }

    /// Leave Exporting. Only an Exporting phase returns to Ready; a generation
    /// or upload started meanwhile keeps its phase.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::Abandoned`] if the session was reset since
    /// [`begin_export`](Self::begin_export).
    pub fn finish_export(&mut self, epoch: u64, error: Option<String>) -> Result<(), SessionError> {
        self.is_current(epoch)?;
        self.export_in_flight = false;
        if let Some(message) = error {
            self.last_error = Some(message);
        }
        if self.phase == Phase::Exporting {
            self.transition(self.settled_phase());
        }
        Ok(())
    }

    /// Leave Exporting without a result.
    pub fn abandon_export(&mut self, epoch: u64) {
        if epoch == self.epoch && self.export_in_flight {
            self.export_in_flight = false;
            if self.phase == Phase::Exporting {
                self.transition(self.settled_phase());
            }
        }
    }

    // ---- edit transaction ----

    /// Open an edit transaction over the committed document.
    ///
    /// # Errors
    ///
    /// [`EditErrorKind::TransactionAlreadyOpen`] or [`EditErrorKind::NoDocument`].
    pub fn begin_edit(&mut self) -> Result<(), EditError> {
        if self.edit.is_some() {
            return Err(EditError::new(EditErrorKind::TransactionAlreadyOpen));
        }
        let committed = self
            .committed
            .as_ref()
            .ok_or_else(|| EditError::new(EditErrorKind::NoDocument))?;
        self.edit = Some(EditTransaction::begin(committed));
        Ok(())
    }

    /// Set one field in the draft, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`EditErrorKind::NoOpenTransaction`] outside a transaction, or
    /// [`EditErrorKind::PathNotFound`].
    pub fn set_field(
        &mut self,
        path: &FieldPath,
        value: impl Into<String>,
    ) -> Result<String, EditError> {
        self.edit
            .as_mut()
            .ok_or_else(|| EditError::new(EditErrorKind::NoOpenTransaction))?
            .set_field(path, value)
    }

    /// Replace the committed document with the draft.
    ///
    /// # Errors
    ///
    /// [`EditErrorKind::NoOpenTransaction`] outside a transaction.
    pub fn commit_edit(&mut self) -> Result<&Document, EditError> {
        let edit = self
            .edit
            .take()
            .ok_or_else(|| EditError::new(EditErrorKind::NoOpenTransaction))?;
        Ok(self.committed.insert(edit.commit()))
    }

    /// Drop the draft, leaving the committed document as it was.
    ///
    /// # Errors
    ///
    /// [`EditErrorKind::NoOpenTransaction`] outside a transaction.
    pub fn discard_edit(&mut self) -> Result<(), EditError> {
        self.edit
            .take()
            .ok_or_else(|| EditError::new(EditErrorKind::NoOpenTransaction))?
            .discard();
        Ok(())
    }

    // ---- lifecycle ----

    /// Install an already loaded document as the committed one.
    ///
    /// # Errors
    ///
    /// Rejected while an upload or generation is in flight.
    pub fn load(
        &mut self,
        story_idea: String,
        genres: GenreTags,
        document: Document,
    ) -> Result<(), SessionError> {
        self.ensure_not_busy()?;
        if let Some(edit) = self.edit.take() {
            edit.discard();
        }
        self.story_idea = story_idea;
        self.genres = genres;
        self.committed = Some(document);
        self.active_tab = Tab::Outline;
        self.last_error = None;
        self.transition(self.settled_phase());
        Ok(())
    }

    /// Start over: a fresh Idle session in a new epoch.
    pub fn reset(&mut self) {
        let epoch = self.epoch + 1;
        debug!(epoch, "Resetting session");
        *self = Self {
            epoch,
            ..Self::default()
        };
    }
}
