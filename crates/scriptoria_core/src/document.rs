//! The generated screenplay breakdown.

use crate::lenient;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root entity produced by the generation service.
///
/// A `Document` owns all of its data (no shared substructure), so `clone()`
/// yields a fully independent deep copy.
///
/// # Examples
///
/// ```
/// use scriptoria_core::Document;
///
/// let json = r#"{
///     "success": true,
///     "screenplay": {
///         "title": "Night Shift",
///         "logline": "A nurse uncovers a conspiracy.",
///         "threeActStructure": {
///             "act1": {"title": "Setup", "description": "...", "keyEvents": ["Arrival"]}
///         }
///     },
///     "characters": [{"name": "Mara", "role": "Protagonist", "arc": "Doubt to resolve", "traits": ["stubborn"]}]
/// }"#;
///
/// let doc: Document = serde_json::from_str(json).unwrap();
/// assert_eq!(doc.screenplay.title, "Night Shift");
/// assert_eq!(doc.characters[0].traits, vec!["stubborn"]);
/// assert!(doc.scenes.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Title, logline and act structure
    pub screenplay: Screenplay,
    /// Character breakdown
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Scene breakdown
    #[serde(default)]
    pub scenes: Vec<Scene>,
    /// Sound design suggestions
    #[serde(default)]
    pub sound_design: SoundDesign,
}

impl Document {
    /// Title of the screenplay.
    pub fn title(&self) -> &str {
        &self.screenplay.title
    }

    /// Act keys in display order.
    pub fn act_keys(&self) -> impl Iterator<Item = &str> {
        self.screenplay.three_act_structure.keys().map(String::as_str)
    }
}

/// Screenplay outline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Screenplay {
    /// Working title
    pub title: String,
    /// One-sentence pitch
    pub logline: String,
    /// Genre the outline was generated for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Main character names
    pub main_characters: Vec<String>,
    /// Acts keyed by stable identifiers (`act1`, `act2`, ...), insertion ordered
    pub three_act_structure: IndexMap<String, Act>,
    /// Beat-sheet plot points
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plot_points: Vec<String>,
}

/// One act of the three-act structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Act {
    /// Act heading
    pub title: String,
    /// Summary
    pub description: String,
    /// Key events in order
    pub key_events: Vec<String>,
}

/// Character breakdown entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    /// Character name
    pub name: String,
    /// Narrative role
    pub role: String,
    /// Character arc
    pub arc: String,
    /// Personality traits
    pub traits: Vec<String>,
}

/// Scene breakdown entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scene {
    /// Display number; not required to be contiguous
    #[serde(deserialize_with = "lenient::number")]
    pub scene_number: u32,
    /// Location slug (INT/EXT)
    pub location: String,
    /// DAY/NIGHT/...
    pub time_of_day: String,
    /// What happens
    pub action: String,
    /// Character names appearing; not checked against the character list
    pub characters: Vec<String>,
    /// Estimated length
    #[serde(
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
}

/// Sound design suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoundDesign {
    /// Score direction
    pub music_theme: MusicTheme,
    /// Categorised sound effects
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sound_effects: Vec<SoundEffect>,
    /// Ambient beds per location
    pub ambience: Vec<Ambience>,
    /// Scene-anchored sound moments
    pub key_moments: Vec<KeyMoment>,
}

/// Score direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicTheme {
    /// Musical style
    pub style: String,
    /// Emotional tone
    pub mood: String,
    /// Instrumentation
    pub instruments: Vec<String>,
    /// Reference films or composers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

/// A categorised sound effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoundEffect {
    /// Category (Environmental, Action, ...)
    pub category: String,
    /// Effect description
    pub description: String,
    /// Scene numbers the effect applies to
    #[serde(deserialize_with = "lenient::numbers")]
    pub scenes: Vec<u32>,
}

/// Ambient sound for a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ambience {
    /// Location type
    pub location: String,
    /// Ambient bed description
    pub description: String,
    /// Emotional quality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// A key sound moment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyMoment {
    /// Scene number this moment belongs to (not enforced)
    #[serde(deserialize_with = "lenient::number")]
    pub scene: u32,
    /// What happens
    pub moment: String,
    /// Sound treatment
    pub sound_design: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_act_order_follows_input() {
        let json = r#"{"screenplay": {"title": "T", "logline": "L", "threeActStructure": {
            "act3": {"title": "C"}, "act1": {"title": "A"}, "act2": {"title": "B"}
        }}}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = doc.act_keys().collect();
        assert_eq!(keys, vec!["act3", "act1", "act2"]);

        let round: Document =
            serde_json::from_str(&serde_json::to_string(&doc).unwrap()).unwrap();
        assert_eq!(round.act_keys().collect::<Vec<_>>(), keys);
    }

    #[test]
    fn test_lenient_scene_fields() {
        let json = r#"{"sceneNumber": "Scene 4", "location": "INT. LAB", "timeOfDay": "NIGHT",
            "action": "Alarms", "characters": ["Mara"], "duration": 3}"#;
        let scene: Scene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.scene_number, 4);
        assert_eq!(scene.duration.as_deref(), Some("3"));
    }

    #[test]
    fn test_sound_design_extras() {
        let json = r#"{
            "musicTheme": {"style": "Synth", "mood": "Tense", "instruments": ["Moog"], "references": ["Drive"]},
            "soundEffects": [{"category": "Action", "description": "Glass", "scenes": [1, "2"]}],
            "ambience": [{"location": "Street", "description": "Rain", "mood": "Lonely"}],
            "keyMoments": [{"scene": 2, "moment": "Reveal", "soundDesign": "Silence"}]
        }"#;
        let sound: SoundDesign = serde_json::from_str(json).unwrap();
        assert_eq!(sound.sound_effects[0].scenes, vec![1, 2]);
        assert_eq!(sound.ambience[0].mood.as_deref(), Some("Lonely"));
        assert_eq!(sound.key_moments[0].sound_design, "Silence");
    }

    #[test]
    fn test_odd_scene_references_keep_the_document() {
        let json = r#"{
            "screenplay": {"title": "Fog", "logline": "L"},
            "scenes": [{"sceneNumber": null, "location": "INT. LAB"}],
            "soundDesign": {"keyMoments": [
                {"scene": "Climax", "moment": "Reveal", "soundDesign": "Silence"},
                {"scene": "Scene 3 of 10", "moment": "Chase", "soundDesign": "Drums"}
            ]}
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.scenes[0].scene_number, 0);
        assert_eq!(doc.scenes[0].location, "INT. LAB");
        let scenes: Vec<u32> = doc.sound_design.key_moments.iter().map(|m| m.scene).collect();
        assert_eq!(scenes, vec![0, 3]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Document::default();
        original.characters.push(Character {
            name: "Mara".into(),
            traits: vec!["stubborn".into()],
            ..Default::default()
        });
        let mut copy = original.clone();
        copy.characters[0].traits[0] = "gentle".into();
        assert_eq!(original.characters[0].traits[0], "stubborn");
    }
}
