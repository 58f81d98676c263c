//! Scriptoria - screenplay breakdown workspace
//!
//! Scriptoria turns a short story idea into a structured screenplay
//! breakdown (logline, three-act structure, characters, scenes and sound
//! design) produced by a remote generation service, with text extraction
//! from uploaded documents and PDF export.
//!
//! # Features
//!
//! - **Session state machine**: upload, generation and export jobs guarded by
//!   a single explicit phase
//! - **Runtime ticker**: elapsed seconds while a generation is in flight
//! - **Edit transactions**: path-addressed edits on a private draft, committed
//!   or discarded as a whole
//! - **Tab views**: Outline, Characters, Scenes and Sound lenses over the
//!   active document
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scriptoria::{ScriptoriaConfig, Tab, open_workspace, render_view};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let workspace = open_workspace(&ScriptoriaConfig::load()?)?;
//!     workspace.set_story_idea("A lighthouse keeper hears voices in the fog.");
//!     workspace.add_genre("Thriller")?;
//!
//!     workspace.generate().await?;
//!     workspace.set_tab(Tab::Characters);
//!     if let Some(text) = workspace.with_view(|view| render_view(&view)) {
//!         println!("{}", text);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export to stdout
//!
//! # Architecture
//!
//! - `scriptoria_error` - Error types
//! - `scriptoria_core` - Document model, field paths, tabs, genres, uploads
//! - `scriptoria_interface` - ScriptoriaGateway trait and wire types
//! - `scriptoria_client` - HTTP gateway and configuration
//! - `scriptoria_session` - Session state machine and job controllers
//!
//! This crate (`scriptoria`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use scriptoria_client::*;
pub use scriptoria_core::*;
pub use scriptoria_error::*;
pub use scriptoria_interface::*;
pub use scriptoria_session::*;

mod observability;
mod render;
mod setup;

pub use observability::{
    ObservabilityConfig, init_observability, init_observability_with_config,
    shutdown_observability,
};
pub use render::render_view;
pub use setup::{open_workspace, workspace_settings};
