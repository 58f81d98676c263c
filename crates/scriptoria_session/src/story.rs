//! Stories handed in from, and out to, the persistence layer.

use scriptoria_core::Document;
use serde::{Deserialize, Serialize};

/// A finished document together with the input that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct StoredStory {
    story_idea: String,
    genre: String,
    document: Document,
}

impl StoredStory {
    /// Bundle a story.
    pub fn new(story_idea: impl Into<String>, genre: impl Into<String>, document: Document) -> Self {
        Self {
            story_idea: story_idea.into(),
            genre: genre.into(),
            document,
        }
    }

    /// Consume into the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Receives every story the session produces: each successful generation
/// and each committed edit.
///
/// Called after the session lock is released; implementations may call back
/// into the workspace.
pub trait StoryListener: Send + Sync {
    /// A story reached a saved state.
    fn story_saved(&self, story: &StoredStory);
}
