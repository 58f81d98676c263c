//! Tab lenses over a document.

use crate::{Act, Character, Document, Scene, SoundDesign};
use serde::{Deserialize, Serialize};

/// The four fixed view lenses.
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
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Title, logline and act structure
    #[default]
    Outline,
    /// Character breakdown
    Characters,
    /// Scene breakdown
    Scenes,
    /// Sound design
    Sound,
}

/// One act as shown on the Outline tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_getters::Getters)]
pub struct ActView<'a> {
    key: &'a str,
    act: &'a Act,
}

/// Outline tab data.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct OutlineView<'a> {
    title: &'a str,
    logline: &'a str,
    genre: Option<&'a str>,
    main_characters: &'a [String],
    acts: Vec<ActView<'a>>,
    plot_points: &'a [String],
}

/// The slice of a document a tab renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabView<'a> {
    /// Screenplay outline
    Outline(OutlineView<'a>),
    /// Character list
    Characters(&'a [Character]),
    /// Scene list
    Scenes(&'a [Scene]),
    /// Sound design
    Sound(&'a SoundDesign),
}

impl TabView<'_> {
    /// Which tab produced this view.
    pub fn tab(&self) -> Tab {
        match self {
            TabView::Outline(_) => Tab::Outline,
            TabView::Characters(_) => Tab::Characters,
            TabView::Scenes(_) => Tab::Scenes,
            TabView::Sound(_) => Tab::Sound,
        }
    }
}

/// Select the data a tab displays.
///
/// Pure: borrows from `document` and never mutates it. Callers pass the draft
/// while an edit transaction is open and the committed document otherwise.
///
/// # Examples
///
/// ```
/// use scriptoria_core::{Document, Tab, TabView, select_view};
///
/// let doc = Document::default();
/// assert!(matches!(select_view(&doc, Tab::Scenes), TabView::Scenes(s) if s.is_empty()));
/// assert_eq!(select_view(&doc, Tab::Sound).tab(), Tab::Sound);
/// ```
pub fn select_view(document: &Document, tab: Tab) -> TabView<'_> {
    match tab {
        Tab::Outline => {
            let sp = &document.screenplay;
            TabView::Outline(OutlineView {
                title: &sp.title,
                logline: &sp.logline,
                genre: sp.genre.as_deref(),
                main_characters: &sp.main_characters,
                acts: sp
                    .three_act_structure
                    .iter()
                    .map(|(key, act)| ActView { key, act })
                    .collect(),
                plot_points: &sp.plot_points,
            })
        }
        Tab::Characters => TabView::Characters(&document.characters),
        Tab::Scenes => TabView::Scenes(&document.scenes),
        Tab::Sound => TabView::Sound(&document.sound_design),
    }
}
