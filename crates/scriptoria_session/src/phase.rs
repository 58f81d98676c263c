//! Session phases.

use serde::{Deserialize, Serialize};

/// Where the session is in its lifecycle.
///
/// ```text
/// Idle --upload--> Uploading --done--> Idle
/// Idle|Ready --generate--> Generating --ok--> Ready
///                          Generating --err--> Idle
/// Ready --export--> Exporting --done--> Ready
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Nothing in flight, no document
    #[default]
    Idle,
    /// Extraction in flight
    Uploading,
    /// Generation in flight
    Generating,
    /// A committed document is available
    Ready,
    /// An export of the committed document is in flight
    Exporting,
}

impl Phase {
    /// Whether an upload or generation job holds the session.
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Uploading | Phase::Generating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_upload_and_generation_are_busy() {
        let busy: Vec<Phase> = Phase::iter().filter(|p| p.is_busy()).collect();
        assert_eq!(busy, vec![Phase::Uploading, Phase::Generating]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Phase::Exporting.to_string(), "exporting");
    }
}
