//! Addressing individual text fields inside a [`Document`].
//!
//! A [`FieldPath`] names exactly one string slot. Mutation through a path
//! replaces that slot only: siblings, sequence order and act key order are
//! untouched. Paths have a dotted text form used by the CLI:
//!
//! | Path | Addresses |
//! |---|---|
//! | `title`, `logline`, `genre` | screenplay scalars |
//! | `mainCharacters.<i>`, `plotPoints.<i>` | screenplay lists |
//! | `acts.<key>.title` / `.description` / `.keyEvents.<i>` | an act |
//! | `characters.<i>.name` / `.role` / `.arc` / `.traits.<j>` | a character |
//! | `scenes.<i>.location` / `.timeOfDay` / `.action` / `.duration` / `.characters.<j>` | a scene |
//! | `music.style` / `.mood` / `.instruments.<i>` / `.references.<i>` | the music theme |
//! | `soundEffects.<i>.category` / `.description` | a sound effect |
//! | `ambience.<i>.location` / `.description` / `.mood` | an ambience entry |
//! | `keyMoments.<i>.moment` / `.soundDesign` | a key moment |

use crate::Document;
use scriptoria_error::{EditError, EditErrorKind};
use std::fmt;
use std::str::FromStr;

/// Location of one text field in a document.
///
/// # Examples
///
/// ```
/// use scriptoria_core::{ActField, FieldPath};
///
/// let path: FieldPath = "acts.act2.title".parse().unwrap();
/// assert_eq!(path, FieldPath::Act { key: "act2".into(), field: ActField::Title });
/// assert_eq!(path.to_string(), "acts.act2.title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// Screenplay title
    Title,
    /// Screenplay logline
    Logline,
    /// Screenplay genre
    Genre,
    /// Entry in the main character list
    MainCharacter(usize),
    /// Entry in the plot point list
    PlotPoint(usize),
    /// Field of the act under `key`
    Act {
        /// Act key (`act1`, ...)
        key: String,
        /// Field within the act
        field: ActField,
    },
    /// Field of a character
    Character {
        /// Index into `characters`
        index: usize,
        /// Field within the character
        field: CharacterField,
    },
    /// Field of a scene
    Scene {
        /// Index into `scenes` (not the scene number)
        index: usize,
        /// Field within the scene
        field: SceneField,
    },
    /// Field of the music theme
    Music(MusicField),
    /// Field of a sound effect
    SoundEffect {
        /// Index into `soundEffects`
        index: usize,
        /// Category or description
        field: SoundEffectField,
    },
    /// Field of an ambience entry
    Ambience {
        /// Index into `ambience`
        index: usize,
        /// Field within the entry
        field: AmbienceField,
    },
    /// Field of a key moment
    KeyMoment {
        /// Index into `keyMoments`
        index: usize,
        /// Field within the moment
        field: KeyMomentField,
    },
}

/// Act fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActField {
    /// Act heading
    Title,
    /// Act summary
    Description,
    /// Key event at index
    KeyEvent(usize),
}

/// Character fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterField {
    /// Name
    Name,
    /// Role
    Role,
    /// Arc
    Arc,
    /// Trait at index
    Trait(usize),
}

/// Scene fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneField {
    /// Location slug
    Location,
    /// Time of day
    TimeOfDay,
    /// Action line
    Action,
    /// Estimated duration
    Duration,
    /// Character name at index
    Character(usize),
}

/// Music theme fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicField {
    /// Style
    Style,
    /// Mood
    Mood,
    /// Instrument at index
    Instrument(usize),
    /// Reference at index
    Reference(usize),
}

/// Sound effect fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffectField {
    /// Category
    Category,
    /// Description
    Description,
}

/// Ambience fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmbienceField {
    /// Location type
    Location,
    /// Description
    Description,
    /// Mood
    Mood,
}

/// Key moment fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMomentField {
    /// Moment description
    Moment,
    /// Sound treatment
    SoundDesign,
}

impl Document {
    /// Read the field at `path`, if it exists.
    pub fn field(&self, path: &FieldPath) -> Option<&str> {
        let sp = &self.screenplay;
        let sd = &self.sound_design;
        let value = match path {
            FieldPath::Title => &sp.title,
            FieldPath::Logline => &sp.logline,
            FieldPath::Genre => sp.genre.as_ref()?,
            FieldPath::MainCharacter(i) => sp.main_characters.get(*i)?,
            FieldPath::PlotPoint(i) => sp.plot_points.get(*i)?,
            FieldPath::Act { key, field } => {
                let act = sp.three_act_structure.get(key)?;
                match field {
                    ActField::Title => &act.title,
                    ActField::Description => &act.description,
                    ActField::KeyEvent(i) => act.key_events.get(*i)?,
                }
            }
            FieldPath::Character { index, field } => {
                let c = self.characters.get(*index)?;
                match field {
                    CharacterField::Name => &c.name,
                    CharacterField::Role => &c.role,
                    CharacterField::Arc => &c.arc,
                    CharacterField::Trait(i) => c.traits.get(*i)?,
                }
            }
            FieldPath::Scene { index, field } => {
                let s = self.scenes.get(*index)?;
                match field {
                    SceneField::Location => &s.location,
                    SceneField::TimeOfDay => &s.time_of_day,
                    SceneField::Action => &s.action,
                    SceneField::Duration => s.duration.as_ref()?,
                    SceneField::Character(i) => s.characters.get(*i)?,
                }
            }
            FieldPath::Music(field) => match field {
                MusicField::Style => &sd.music_theme.style,
                MusicField::Mood => &sd.music_theme.mood,
                MusicField::Instrument(i) => sd.music_theme.instruments.get(*i)?,
                MusicField::Reference(i) => sd.music_theme.references.get(*i)?,
            },
            FieldPath::SoundEffect { index, field } => {
                let e = sd.sound_effects.get(*index)?;
                match field {
                    SoundEffectField::Category => &e.category,
                    SoundEffectField::Description => &e.description,
                }
            }
            FieldPath::Ambience { index, field } => {
                let a = sd.ambience.get(*index)?;
                match field {
                    AmbienceField::Location => &a.location,
                    AmbienceField::Description => &a.description,
                    AmbienceField::Mood => a.mood.as_ref()?,
                }
            }
            FieldPath::KeyMoment { index, field } => {
                let k = sd.key_moments.get(*index)?;
                match field {
                    KeyMomentField::Moment => &k.moment,
                    KeyMomentField::SoundDesign => &k.sound_design,
                }
            }
        };
        Some(value.as_str())
    }

    /// Mutable access to the slot at `path`.
    ///
    /// Optional scalars (`genre`, scene `duration`, ambience `mood`) are
    /// created empty on first access; list entries and act keys must exist.
    fn slot_mut(&mut self, path: &FieldPath) -> Option<&mut String> {
        let sp = &mut self.screenplay;
        let sd = &mut self.sound_design;
        let slot = match path {
            FieldPath::Title => &mut sp.title,
            FieldPath::Logline => &mut sp.logline,
            FieldPath::Genre => sp.genre.get_or_insert_with(String::new),
            FieldPath::MainCharacter(i) => sp.main_characters.get_mut(*i)?,
            FieldPath::PlotPoint(i) => sp.plot_points.get_mut(*i)?,
            FieldPath::Act { key, field } => {
                let act = sp.three_act_structure.get_mut(key)?;
                match field {
                    ActField::Title => &mut act.title,
                    ActField::Description => &mut act.description,
                    ActField::KeyEvent(i) => act.key_events.get_mut(*i)?,
                }
            }
            FieldPath::Character { index, field } => {
                let c = self.characters.get_mut(*index)?;
                match field {
                    CharacterField::Name => &mut c.name,
                    CharacterField::Role => &mut c.role,
                    CharacterField::Arc => &mut c.arc,
                    CharacterField::Trait(i) => c.traits.get_mut(*i)?,
                }
            }
            FieldPath::Scene { index, field } => {
                let s = self.scenes.get_mut(*index)?;
                match field {
                    SceneField::Location => &mut s.location,
                    SceneField::TimeOfDay => &mut s.time_of_day,
                    SceneField::Action => &mut s.action,
                    SceneField::Duration => s.duration.get_or_insert_with(String::new),
                    SceneField::Character(i) => s.characters.get_mut(*i)?,
                }
            }
            FieldPath::Music(field) => match field {
                MusicField::Style => &mut sd.music_theme.style,
                MusicField::Mood => &mut sd.music_theme.mood,
                MusicField::Instrument(i) => sd.music_theme.instruments.get_mut(*i)?,
                MusicField::Reference(i) => sd.music_theme.references.get_mut(*i)?,
            },
            FieldPath::SoundEffect { index, field } => {
                let e = sd.sound_effects.get_mut(*index)?;
                match field {
                    SoundEffectField::Category => &mut e.category,
                    SoundEffectField::Description => &mut e.description,
                }
            }
            FieldPath::Ambience { index, field } => {
                let a = sd.ambience.get_mut(*index)?;
                match field {
                    AmbienceField::Location => &mut a.location,
                    AmbienceField::Description => &mut a.description,
                    AmbienceField::Mood => a.mood.get_or_insert_with(String::new),
                }
            }
            FieldPath::KeyMoment { index, field } => {
                let k = sd.key_moments.get_mut(*index)?;
                match field {
                    KeyMomentField::Moment => &mut k.moment,
                    KeyMomentField::SoundDesign => &mut k.sound_design,
                }
            }
        };
        Some(slot)
    }

    /// Replace the value at `path`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`EditErrorKind::PathNotFound`] when the index or act key does
    /// not exist; the document is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptoria_core::{Character, CharacterField, Document, FieldPath};
    ///
    /// let mut doc = Document::default();
    /// doc.characters.push(Character { name: "Mara".into(), ..Default::default() });
    ///
    /// let path = FieldPath::Character { index: 0, field: CharacterField::Name };
    /// let old = doc.set_field(&path, "Maren").unwrap();
    /// assert_eq!(old, "Mara");
    /// assert_eq!(doc.characters[0].name, "Maren");
    ///
    /// let missing = FieldPath::Character { index: 5, field: CharacterField::Name };
    /// assert!(doc.set_field(&missing, "x").is_err());
    /// ```
    pub fn set_field(
        &mut self,
        path: &FieldPath,
        value: impl Into<String>,
    ) -> Result<String, EditError> {
        let slot = self
            .slot_mut(path)
            .ok_or_else(|| EditError::new(EditErrorKind::PathNotFound(path.to_string())))?;
        Ok(std::mem::replace(slot, value.into()))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Title => write!(f, "title"),
            FieldPath::Logline => write!(f, "logline"),
            FieldPath::Genre => write!(f, "genre"),
            FieldPath::MainCharacter(i) => write!(f, "mainCharacters.{i}"),
            FieldPath::PlotPoint(i) => write!(f, "plotPoints.{i}"),
            FieldPath::Act { key, field } => match field {
                ActField::Title => write!(f, "acts.{key}.title"),
                ActField::Description => write!(f, "acts.{key}.description"),
                ActField::KeyEvent(i) => write!(f, "acts.{key}.keyEvents.{i}"),
            },
            FieldPath::Character { index, field } => match field {
                CharacterField::Name => write!(f, "characters.{index}.name"),
                CharacterField::Role => write!(f, "characters.{index}.role"),
                CharacterField::Arc => write!(f, "characters.{index}.arc"),
                CharacterField::Trait(i) => write!(f, "characters.{index}.traits.{i}"),
            },
            FieldPath::Scene { index, field } => match field {
                SceneField::Location => write!(f, "scenes.{index}.location"),
                SceneField::TimeOfDay => write!(f, "scenes.{index}.timeOfDay"),
                SceneField::Action => write!(f, "scenes.{index}.action"),
                SceneField::Duration => write!(f, "scenes.{index}.duration"),
                SceneField::Character(i) => write!(f, "scenes.{index}.characters.{i}"),
            },
            FieldPath::Music(field) => match field {
                MusicField::Style => write!(f, "music.style"),
                MusicField::Mood => write!(f, "music.mood"),
                MusicField::Instrument(i) => write!(f, "music.instruments.{i}"),
                MusicField::Reference(i) => write!(f, "music.references.{i}"),
            },
            FieldPath::SoundEffect { index, field } => match field {
                SoundEffectField::Category => write!(f, "soundEffects.{index}.category"),
                SoundEffectField::Description => write!(f, "soundEffects.{index}.description"),
            },
            FieldPath::Ambience { index, field } => match field {
                AmbienceField::Location => write!(f, "ambience.{index}.location"),
                AmbienceField::Description => write!(f, "ambience.{index}.description"),
                AmbienceField::Mood => write!(f, "ambience.{index}.mood"),
            },
            FieldPath::KeyMoment { index, field } => match field {
                KeyMomentField::Moment => write!(f, "keyMoments.{index}.moment"),
                KeyMomentField::SoundDesign => write!(f, "keyMoments.{index}.soundDesign"),
            },
        }
    }
}

impl FromStr for FieldPath {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EditError::new(EditErrorKind::InvalidPath(s.to_string()));
        let index = |seg: &str| seg.parse::<usize>().map_err(|_| invalid());
        let parts: Vec<&str> = s.trim().split('.').collect();

        let path = match parts.as_slice() {
            ["title"] => FieldPath::Title,
            ["logline"] => FieldPath::Logline,
            ["genre"] => FieldPath::Genre,
            ["mainCharacters", i] => FieldPath::MainCharacter(index(*i)?),
            ["plotPoints", i] => FieldPath::PlotPoint(index(*i)?),
            ["acts", key, rest @ ..] if !key.is_empty() => {
                let field = match rest {
                    ["title"] => ActField::Title,
                    ["description"] => ActField::Description,
                    ["keyEvents", i] => ActField::KeyEvent(index(*i)?),
                    _ => return Err(invalid()),
                };
                FieldPath::Act {
                    key: (*key).to_string(),
                    field,
                }
            }
            ["characters", i, rest @ ..] => {
                let field = match rest {
                    ["name"] => CharacterField::Name,
                    ["role"] => CharacterField::Role,
                    ["arc"] => CharacterField::Arc,
                    ["traits", j] => CharacterField::Trait(index(*j)?),
                    _ => return Err(invalid()),
                };
                FieldPath::Character {
                    index: index(*i)?,
                    field,
                }
            }
            ["scenes", i, rest @ ..] => {
                let field = match rest {
                    ["location"] => SceneField::Location,
                    ["timeOfDay"] => SceneField::TimeOfDay,
                    ["action"] => SceneField::Action,
                    ["duration"] => SceneField::Duration,
                    ["characters", j] => SceneField::Character(index(*j)?),
                    _ => return Err(invalid()),
                };
                FieldPath::Scene {
                    index: index(*i)?,
                    field,
                }
            }
            ["music", rest @ ..] => FieldPath::Music(match rest {
                ["style"] => MusicField::Style,
                ["mood"] => MusicField::Mood,
                ["instruments", i] => MusicField::Instrument(index(*i)?),
                ["references", i] => MusicField::Reference(index(*i)?),
                _ => return Err(invalid()),
            }),
            ["soundEffects", i, field] => FieldPath::SoundEffect {
                index: index(*i)?,
                field: match *field {
                    "category" => SoundEffectField::Category,
                    "description" => SoundEffectField::Description,
                    _ => return Err(invalid()),
                },
            },
            ["ambience", i, field] => FieldPath::Ambience {
                index: index(*i)?,
                field: match *field {
                    "location" => AmbienceField::Location,
                    "description" => AmbienceField::Description,
                    "mood" => AmbienceField::Mood,
                    _ => return Err(invalid()),
                },
            },
            ["keyMoments", i, field] => FieldPath::KeyMoment {
                index: index(*i)?,
                field: match *field {
                    "moment" => KeyMomentField::Moment,
                    "soundDesign" => KeyMomentField::SoundDesign,
                    _ => return Err(invalid()),
                },
            },
            _ => return Err(invalid()),
        };
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Act, Ambience, Character, Scene};

    fn sample() -> Document {
        let mut doc = Document::default();
        doc.screenplay.title = "Night Shift".into();
        for (key, title) in [("act1", "Setup"), ("act2", "Confrontation"), ("act3", "Resolution")]
        {
            doc.screenplay.three_act_structure.insert(
                key.into(),
                Act {
                    title: title.into(),
                    description: format!("{title} description"),
                    key_events: vec!["first".into(), "second".into()],
                },
            );
        }
        doc.characters = vec![
            Character {
                name: "Mara".into(),
                traits: vec!["stubborn".into(), "loyal".into()],
                ..Default::default()
            },
            Character {
                name: "Eli".into(),
                ..Default::default()
            },
        ];
        doc.scenes.push(Scene {
            scene_number: 1,
            location: "INT. WARD".into(),
            characters: vec!["Mara".into()],
            ..Default::default()
        });
        doc.sound_design.ambience.push(Ambience {
            location: "Ward".into(),
            description: "Monitors beeping".into(),
            mood: None,
        });
        doc
    }

    #[test]
    fn test_parse_display_agree() {
        let inputs = [
            "title",
            "logline",
            "genre",
            "mainCharacters.0",
            "plotPoints.3",
            "acts.act2.title",
            "acts.act1.keyEvents.1",
            "characters.1.arc",
            "characters.0.traits.2",
            "scenes.4.timeOfDay",
            "scenes.0.characters.1",
            "scenes.0.duration",
            "music.instruments.1",
            "music.references.0",
            "soundEffects.0.category",
            "ambience.0.mood",
            "keyMoments.2.soundDesign",
        ];
        for input in inputs {
            let path: FieldPath = input.parse().unwrap();
            assert_eq!(path.to_string(), input);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "acts", "acts..title", "characters.x.name", "music.tempo", "scenes.0"] {
            let err = input.parse::<FieldPath>().unwrap_err();
            assert!(matches!(err.kind, EditErrorKind::InvalidPath(_)), "{input}");
        }
    }

    #[test]
    fn test_set_act_field_preserves_siblings_and_order() {
        let mut doc = sample();
        let before = doc.clone();
        let path: FieldPath = "acts.act2.title".parse().unwrap();
        doc.set_field(&path, "Rising Storm").unwrap();

        assert_eq!(doc.act_keys().collect::<Vec<_>>(), vec!["act1", "act2", "act3"]);
        let act2 = &doc.screenplay.three_act_structure["act2"];
        assert_eq!(act2.title, "Rising Storm");
        assert_eq!(act2.description, before.screenplay.three_act_structure["act2"].description);
        assert_eq!(
            doc.screenplay.three_act_structure["act1"],
            before.screenplay.three_act_structure["act1"]
        );
        assert_eq!(doc.characters, before.characters);
    }

    #[test]
    fn test_set_trait_keeps_sequence_order() {
        let mut doc = sample();
        doc.set_field(&"characters.0.traits.1".parse().unwrap(), "fierce")
            .unwrap();
        assert_eq!(doc.characters[0].traits, vec!["stubborn", "fierce"]);
        assert_eq!(doc.characters[1].name, "Eli");
    }

    #[test]
    fn test_missing_targets_are_not_found() {
        let mut doc = sample();
        let before = doc.clone();
        for input in ["acts.act9.title", "characters.7.name", "scenes.0.characters.3"] {
            let err = doc.set_field(&input.parse().unwrap(), "x").unwrap_err();
            assert!(matches!(err.kind, EditErrorKind::PathNotFound(_)));
        }
        assert_eq!(doc, before);
    }

    #[test]
    fn test_optional_scalars_are_created() {
        let mut doc = sample();
        assert_eq!(doc.field(&"ambience.0.mood".parse().unwrap()), None);
        doc.set_field(&"ambience.0.mood".parse().unwrap(), "Sterile")
            .unwrap();
        assert_eq!(doc.sound_design.ambience[0].mood.as_deref(), Some("Sterile"));
        assert_eq!(doc.sound_design.ambience[0].description, "Monitors beeping");
    }
}
