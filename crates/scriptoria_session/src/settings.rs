//! Workspace settings.

use scriptoria_core::IdeaBounds;
use std::path::PathBuf;
use std::time::Duration;

/// Knobs a [`crate::Workspace`] is created with.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use scriptoria_session::WorkspaceSettings;
///
/// let settings = WorkspaceSettings::builder()
///     .default_genre("Comedy")
///     .tick_interval(Duration::from_millis(250))
///     .build()
///     .unwrap();
/// assert_eq!(settings.default_genre(), "Comedy");
/// assert_eq!(*settings.idea_bounds().min_chars(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct WorkspaceSettings {
    /// Accepted story idea length
    #[builder(default)]
    idea_bounds: IdeaBounds,
    /// Genre used when no tag is selected
    #[builder(default = "\"Drama\".to_string()")]
    default_genre: String,
    /// Runtime ticker period
    #[builder(default = "Duration::from_secs(1)")]
    tick_interval: Duration,
    /// Directory exported artifacts are written to
    #[builder(default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

impl WorkspaceSettings {
    /// Settings with every knob given.
    pub fn new(
        idea_bounds: IdeaBounds,
        default_genre: impl Into<String>,
        tick_interval: Duration,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            idea_bounds,
            default_genre: default_genre.into(),
            tick_interval,
            output_dir: output_dir.into(),
        }
    }

    /// Creates a new settings builder.
    pub fn builder() -> WorkspaceSettingsBuilder {
        WorkspaceSettingsBuilder::default()
    }
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            idea_bounds: IdeaBounds::default(),
            default_genre: "Drama".to_string(),
            tick_interval: Duration::from_secs(1),
            output_dir: PathBuf::from("."),
        }
    }
}
