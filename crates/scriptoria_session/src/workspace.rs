//! The workspace handle: one session, its ticker and its gateway.

use crate::{
    Phase, RuntimeTicker, SessionSnapshot, SessionState, StoredStory, StoryListener,
    WorkspaceSettings,
};
use scriptoria_core::{Document, FieldPath, GenreTags, Tab, TabView};
use scriptoria_error::ScriptoriaResult;
use scriptoria_interface::ScriptoriaGateway;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// State guarded together so ticker changes and phase changes are atomic.
#[derive(Debug)]
pub(crate) struct Core {
    pub(crate) state: SessionState,
    pub(crate) ticker: RuntimeTicker,
}

struct Inner {
    gateway: Arc<dyn ScriptoriaGateway>,
    settings: WorkspaceSettings,
    core: Mutex<Core>,
    progress: Arc<watch::Sender<u8>>,
    listeners: Mutex<Vec<Arc<dyn StoryListener>>>,
}

/// Handle to one session. Cheap to clone; clones share the session.
///
/// Locks are held only for the synchronous transitions, never across a
/// gateway call, so views and snapshots stay readable while jobs run.
#[derive(Clone)]
pub struct Workspace {
    inner: Arc<Inner>,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("gateway", &self.inner.gateway.gateway_name())
            .field("phase", &self.phase())
            .finish()
    }
}

impl Workspace {
    /// A fresh Idle session with default settings.
    pub fn new(gateway: Arc<dyn ScriptoriaGateway>) -> Self {
        Self::with_settings(gateway, WorkspaceSettings::default())
    }

    /// A fresh Idle session.
    #[instrument(skip_all, fields(gateway = gateway.gateway_name()))]
    pub fn with_settings(gateway: Arc<dyn ScriptoriaGateway>, settings: WorkspaceSettings) -> Self {
        debug!(?settings, "Creating workspace");
        let (progress, _rx) = watch::channel(0);
        let ticker = RuntimeTicker::new(*settings.tick_interval());
        Self {
            inner: Arc::new(Inner {
                gateway,
                settings,
                core: Mutex::new(Core {
                    state: SessionState::default(),
                    ticker,
                }),
                progress: Arc::new(progress),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn core(&self) -> MutexGuard<'_, Core> {
        self.inner.core.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn gateway(&self) -> &dyn ScriptoriaGateway {
        self.inner.gateway.as_ref()
    }

    pub(crate) fn progress_sender(&self) -> &Arc<watch::Sender<u8>> {
        &self.inner.progress
    }

    /// Settings the workspace was created with.
    pub fn settings(&self) -> &WorkspaceSettings {
        &self.inner.settings
    }

    /// Register a listener for saved stories.
    pub fn add_listener(&self, listener: Arc<dyn StoryListener>) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    pub(crate) fn notify_saved(&self, story: &StoredStory) {
        let listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        debug!(listeners = listeners.len(), title = %story.document().title(), "Story saved");
        for listener in listeners {
            listener.story_saved(story);
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.core().state.phase()
    }

    /// Observable session fields.
    pub fn snapshot(&self) -> SessionSnapshot {
        let core = self.core();
        core.state
            .snapshot(core.ticker.elapsed(), *self.inner.progress.borrow())
    }

    /// Message of the most recent failed job.
    pub fn last_error(&self) -> Option<String> {
        self.core().state.last_error().map(str::to_string)
    }

    // ---- story input ----

    /// Story idea text.
    pub fn story_idea(&self) -> String {
        self.core().state.story_idea().to_string()
    }

    /// Replace the story idea.
    pub fn set_story_idea(&self, idea: impl Into<String>) {
        self.core().state.set_story_idea(idea);
    }

    /// Length readout for the idea, e.g. `42/500`.
    pub fn idea_counter(&self) -> String {
        self.settings()
            .idea_bounds()
            .counter(self.core().state.story_idea())
    }

    /// Name of the last successfully extracted file.
    pub fn uploaded_file_name(&self) -> Option<String> {
        self.core().state.uploaded_file_name().map(str::to_string)
    }

    /// Append a genre tag.
    ///
    /// # Errors
    ///
    /// Blank or duplicate tags are rejected.
    pub fn add_genre(&self, genre: impl AsRef<str>) -> ScriptoriaResult<()> {
        Ok(self.core().state.genres_mut().add(genre)?)
    }

    /// Remove a genre tag; returns whether it was present.
    pub fn remove_genre(&self, genre: &str) -> bool {
        self.core().state.genres_mut().remove(genre)
    }

    /// Genre tags in order.
    pub fn genres(&self) -> Vec<String> {
        self.core().state.genres().as_slice().to_vec()
    }

    /// Genre sent with the next generation.
    pub fn primary_genre(&self) -> String {
        self.core()
            .state
            .genres()
            .primary_or(self.settings().default_genre())
            .to_string()
    }

    // ---- documents and views ----

    /// Committed document.
    pub fn document(&self) -> Option<Document> {
        self.core().state.committed().cloned()
    }

    /// Draft of the open edit transaction.
    pub fn draft(&self) -> Option<Document> {
        self.core().state.draft().cloned()
    }

    /// Active tab.
    pub fn active_tab(&self) -> Tab {
        self.core().state.active_tab()
    }

    /// Switch tabs.
    pub fn set_tab(&self, tab: Tab) {
        debug!(%tab, "Switching tab");
        self.core().state.set_tab(tab);
    }

    /// Run `f` over the active tab's view of the active document.
    ///
    /// Returns `None` when there is no document. The session is locked while
    /// `f` runs; do not call back into the workspace from it.
    pub fn with_view<R>(&self, f: impl FnOnce(TabView<'_>) -> R) -> Option<R> {
        self.core().state.view().map(f)
    }

    // ---- edit transaction ----

    /// Open an edit transaction over the committed document.
    ///
    /// # Errors
    ///
    /// A transaction is already open, or there is no document.
    pub fn begin_edit(&self) -> ScriptoriaResult<()> {
        Ok(self.core().state.begin_edit()?)
    }

    /// Whether an edit transaction is open.
    pub fn is_editing(&self) -> bool {
        self.core().state.is_editing()
    }

    /// Set one draft field, returning its previous value.
    ///
    /// # Errors
    ///
    /// No transaction is open, or `path` addresses nothing.
    pub fn set_field(&self, path: &FieldPath, value: impl Into<String>) -> ScriptoriaResult<String> {
        Ok(self.core().state.set_field(path, value)?)
    }

    /// [`set_field`](Self::set_field) with a dotted path such as `acts.act2.title`.
    ///
    /// # Errors
    ///
    /// The path does not parse, or as for `set_field`.
    pub fn set_field_at(&self, path: &str, value: impl Into<String>) -> ScriptoriaResult<String> {
        let path: FieldPath = path.parse()?;
        self.set_field(&path, value)
    }

    /// Install the draft as the committed document and notify listeners.
    ///
    /// # Errors
    ///
    /// No transaction is open.
    #[instrument(skip(self))]
    pub fn commit_edit(&self) -> ScriptoriaResult<Document> {
        let story = {
            let mut core = self.core();
            let state = &mut core.state;
            let document = state.commit_edit()?.clone();
            let genre = state
                .genres()
                .primary_or(self.settings().default_genre())
                .to_string();
            StoredStory::new(state.story_idea(), genre, document)
        };
        info!(title = %story.document().title(), "Edit committed");
        self.notify_saved(&story);
        Ok(story.into_document())
    }

    /// Drop the draft.
    ///
    /// # Errors
    ///
    /// No transaction is open.
    pub fn discard_edit(&self) -> ScriptoriaResult<()> {
        Ok(self.core().state.discard_edit()?)
    }

    // ---- runtime and progress ----

    /// Seconds the current or last generation has been running.
    pub fn elapsed_seconds(&self) -> u64 {
        self.core().ticker.elapsed()
    }

    /// Receiver for the elapsed-seconds counter.
    pub fn subscribe_elapsed(&self) -> watch::Receiver<u64> {
        self.core().ticker.subscribe()
    }

    /// Upload progress percentage.
    pub fn upload_progress(&self) -> u8 {
        *self.inner.progress.borrow()
    }

    /// Receiver for upload progress.
    pub fn subscribe_progress(&self) -> watch::Receiver<u8> {
        self.inner.progress.subscribe()
    }

    // ---- lifecycle ----

    /// Start from an already loaded story: commits its document, adopts its
    /// idea and genre, and selects the Outline tab.
    ///
    /// # Errors
    ///
    /// Rejected while an upload or generation is in flight.
    #[instrument(skip(self, story), fields(title = %story.document().title()))]
    pub fn load_story(&self, story: StoredStory) -> ScriptoriaResult<()> {
        let mut genres = GenreTags::default();
        if !story.genre().trim().is_empty() {
            genres.add(story.genre())?;
        }
        let idea = story.story_idea().clone();
        self.core()
            .state
            .load(idea, genres, story.into_document())?;
        info!("Loaded stored story");
        Ok(())
    }

    /// Start over with a fresh Idle session. Jobs still in flight finish
    /// without touching the new session.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        let mut core = self.core();
        core.ticker.reset();
        core.state.reset();
        self.inner.progress.send_replace(0);
        info!(epoch = core.state.epoch(), "Workspace reset");
    }
}

/// Jobs a [`JobGuard`] can settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub(crate) enum Job {
    Upload,
    Generation,
    Export,
}

/// Settles the session if a job future is dropped before it resolves.
pub(crate) struct JobGuard<'a> {
    workspace: &'a Workspace,
    epoch: u64,
    job: Job,
    armed: bool,
}

impl<'a> JobGuard<'a> {
    pub(crate) fn new(workspace: &'a Workspace, epoch: u64, job: Job) -> Self {
        Self {
            workspace,
            epoch,
            job,
            armed: true,
        }
    }

    pub(crate) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for JobGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!(job = %self.job, epoch = self.epoch, "Job abandoned before completion");
        let mut core = self.workspace.core();
        let current = core.state.epoch() == self.epoch;
        match self.job {
            Job::Upload => {
                core.state.abandon_upload(self.epoch);
                if current {
                    self.workspace.progress_sender().send_replace(0);
                }
            }
            Job::Generation => {
                if current {
                    core.ticker.stop();
                }
                core.state.abandon_generation(self.epoch);
            }
            Job::Export => core.state.abandon_export(self.epoch),
        }
    }
}
