//! Genre tagging.

use scriptoria_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Genres offered as quick picks.
pub const SUGGESTED_GENRES: [&str; 6] = ["Drama", "Thriller", "Comedy", "Sci-Fi", "Horror", "Romance"];

/// Ordered, duplicate-free list of genre tags.
///
/// The first tag is the one sent to the generation service.
///
/// # Examples
///
/// ```
/// use scriptoria_core::GenreTags;
///
/// let mut genres = GenreTags::default();
/// assert_eq!(genres.primary_or("Drama"), "Drama");
///
/// genres.add("Thriller").unwrap();
/// genres.add("Sci-Fi").unwrap();
/// assert!(genres.add("thriller").is_err());
/// assert_eq!(genres.primary_or("Drama"), "Thriller");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreTags(Vec<String>);

impl GenreTags {
    /// Append a tag.
    ///
    /// # Errors
    ///
    /// Rejects blank tags and tags already present (case-insensitive); the
    /// list is unchanged on error.
    pub fn add(&mut self, genre: impl AsRef<str>) -> Result<(), ValidationError> {
        let genre = genre.as_ref().trim();
        if genre.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyGenre));
        }
        if self.contains(genre) {
            return Err(ValidationError::new(ValidationErrorKind::DuplicateGenre(
                genre.to_string(),
            )));
        }
        debug!(genre, "Adding genre tag");
        self.0.push(genre.to_string());
        Ok(())
    }

    /// Remove a tag (case-insensitive). Returns whether anything was removed.
    pub fn remove(&mut self, genre: &str) -> bool {
        let key = fold(genre);
        let before = self.0.len();
        self.0.retain(|g| fold(g) != key);
        before != self.0.len()
    }

    /// Whether the tag is already selected (case-insensitive, Unicode aware).
    pub fn contains(&self, genre: &str) -> bool {
        let key = fold(genre);
        self.0.iter().any(|g| fold(g) == key)
    }

    /// First tag, or `fallback` when none are selected.
    pub fn primary_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.0.first().map(String::as_str).unwrap_or(fallback)
    }

    /// All tags in selection order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tags are selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop all tags.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

fn fold(genre: &str) -> String {
    genre.trim().to_lowercase()
}
