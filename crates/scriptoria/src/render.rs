//! Plain-text rendering of tab views.

use scriptoria_core::TabView;

/// Render a tab view as plain text for terminal output.
///
/// # Examples
///
/// ```
/// use scriptoria::{Document, Tab, render_view, select_view};
///
/// let mut doc = Document::default();
/// doc.screenplay.title = "Fog".to_string();
/// let text = render_view(&select_view(&doc, Tab::Outline));
/// assert!(text.starts_with("Fog"));
/// ```
pub fn render_view(view: &TabView<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();
    match view {
        TabView::Outline(outline) => {
            lines.push(outline.title().to_string());
            if let Some(genre) = outline.genre() {
                lines.push(format!("Genre: {}", genre));
            }
            lines.push(format!("Logline: {}", outline.logline()));
            if !outline.main_characters().is_empty() {
                lines.push(format!(
                    "Main characters: {}",
                    outline.main_characters().join(", ")
                ));
            }
            for act in outline.acts() {
                lines.push(String::new());
                lines.push(format!("[{}] {}", act.key(), act.act().title));
                lines.push(format!("  {}", act.act().description));
                for event in &act.act().key_events {
                    lines.push(format!("  - {}", event));
                }
            }
            if !outline.plot_points().is_empty() {
                lines.push(String::new());
                lines.push("Plot points:".to_string());
                for (i, point) in outline.plot_points().iter().enumerate() {
                    lines.push(format!("  {}. {}", i + 1, point));
                }
            }
        }
        TabView::Characters(characters) => {
            for (i, character) in characters.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                lines.push(format!("{} ({})", character.name, character.role));
                lines.push(format!("  Arc: {}", character.arc));
                if !character.traits.is_empty() {
                    lines.push(format!("  Traits: {}", character.traits.join(", ")));
                }
            }
        }
        TabView::Scenes(scenes) => {
            for scene in scenes.iter() {
                let duration = scene
                    .duration
                    .as_deref()
                    .map(|d| format!(" [{}]", d))
                    .unwrap_or_default();
                lines.push(format!(
                    "Scene {}: {} - {}{}",
                    scene.scene_number, scene.location, scene.time_of_day, duration
                ));
                lines.push(format!("  {}", scene.action));
                if !scene.characters.is_empty() {
                    lines.push(format!("  With: {}", scene.characters.join(", ")));
                }
            }
        }
        TabView::Sound(sound) => {
            let music = &sound.music_theme;
            lines.push(format!("Music: {} / {}", music.style, music.mood));
            if !music.instruments.is_empty() {
                lines.push(format!("  Instruments: {}", music.instruments.join(", ")));
            }
            if !music.references.is_empty() {
                lines.push(format!("  References: {}", music.references.join(", ")));
            }
            if !sound.sound_effects.is_empty() {
                lines.push("Sound effects:".to_string());
                for effect in &sound.sound_effects {
                    let scenes: Vec<String> = effect.scenes.iter().map(u32::to_string).collect();
                    lines.push(format!(
                        "  {}: {} (scenes {})",
                        effect.category,
                        effect.description,
                        scenes.join(", ")
                    ));
                }
            }
            if !sound.ambience.is_empty() {
                lines.push("Ambience:".to_string());
                for ambience in &sound.ambience {
                    let mood = ambience
                        .mood
                        .as_deref()
                        .map(|m| format!(" ({})", m))
                        .unwrap_or_default();
                    lines.push(format!(
                        "  {}: {}{}",
                        ambience.location, ambience.description, mood
                    ));
                }
            }
            if !sound.key_moments.is_empty() {
                lines.push("Key moments:".to_string());
                for moment in &sound.key_moments {
                    lines.push(format!(
                        "  Scene {}: {} - {}",
                        moment.scene, moment.moment, moment.sound_design
                    ));
                }
            }
        }
    }
    lines.join("\n")
}
