//! Core data types for Scriptoria.
//!
//! This crate holds the generated screenplay [`Document`], the path addressing
//! used by edit transactions ([`FieldPath`]), the four view lenses ([`Tab`],
//! [`select_view`]) and the small value types fed into jobs (genre tags, story
//! idea bounds, upload payloads). Nothing here performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod genre;
mod idea;
mod lenient;
mod path;
mod tab;
mod upload;

pub use document::{
    Act, Ambience, Character, Document, KeyMoment, MusicTheme, Scene, Screenplay, SoundDesign,
    SoundEffect,
};
pub use genre::{GenreTags, SUGGESTED_GENRES};
pub use idea::{IdeaBounds, clean_extracted_text};
pub use path::{
    ActField, AmbienceField, CharacterField, FieldPath, KeyMomentField, MusicField, SceneField,
    SoundEffectField,
};
pub use tab::{ActView, OutlineView, Tab, TabView, select_view};
pub use upload::{UploadFile, UploadKind};
