//! Session state machine for the Scriptoria workspace.
//!
//! A [`Workspace`] owns one session: the story idea and genre tags, the
//! current [`Phase`], the committed document and an optional
//! [`EditTransaction`] over it, the active tab, and the [`RuntimeTicker`]
//! that counts seconds while a generation is in flight.
//!
//! Three job controllers drive the remote operations through a
//! [`scriptoria_interface::ScriptoriaGateway`]:
//!
//! - [`Workspace::upload`] extracts text from a document into the story idea
//! - [`Workspace::generate`] turns the idea into a committed document
//! - [`Workspace::export`] renders the active document to a PDF artifact
//!
//! Upload and generation exclude each other; export runs alongside either.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use scriptoria_core::Tab;
//! use scriptoria_interface::ScriptoriaGateway;
//! use scriptoria_session::Workspace;
//!
//! # async fn run(gateway: Arc<dyn ScriptoriaGateway>) -> scriptoria_error::ScriptoriaResult<()> {
//! let workspace = Workspace::new(gateway);
//! workspace.set_story_idea("A lighthouse keeper hears voices in the fog.");
//! workspace.add_genre("Thriller")?;
//!
//! let document = workspace.generate().await?;
//! println!("{}", document.title());
//!
//! workspace.set_tab(Tab::Scenes);
//! workspace.with_view(|view| println!("{:?}", view.tab()));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod generation;
mod phase;
mod settings;
mod state;
mod story;
mod ticker;
mod transaction;
mod upload;
mod workspace;

pub use export::{ExportArtifact, artifact_name, recoverable_body};
pub use phase::Phase;
pub use settings::{WorkspaceSettings, WorkspaceSettingsBuilder};
pub use state::{SessionSnapshot, SessionState};
pub use story::{StoredStory, StoryListener};
pub use ticker::RuntimeTicker;
pub use transaction::EditTransaction;
pub use workspace::Workspace;
