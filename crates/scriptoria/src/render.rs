//! Plain-text production document.

use scriptoria_core::ProductionPackage;
use std::fmt;

const RULE: &str = "============================================================";

/// Render a package as a plain-text document.
///
/// Sections: title page, character profiles, screenplay outline, scene
/// breakdown and sound design. Empty fields render as placeholders, never
/// as gaps.
pub fn render_text(package: &ProductionPackage) -> String {
    Document(package).to_string()
}

struct Document<'a>(&'a ProductionPackage);

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.title_page(f)?;
        self.characters(f)?;
        self.outline(f)?;
        self.scenes(f)?;
        self.sound(f)
    }
}

impl Document<'_> {
    fn title_page(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outline = self.0.outline();
        writeln!(f, "{}", or(&outline.title, "Untitled Script").to_uppercase())?;
        writeln!(f, "GENRE: {}", or(&outline.genre, "Unknown"))?;
        writeln!(f)?;
        writeln!(f, "LOGLINE: {}", or(&outline.logline, "No logline available."))?;
        writeln!(f)?;
        writeln!(f, "SCRIPTORIA PRODUCTION PACKAGE")?;
        writeln!(
            f,
            "Generated {}",
            self.0.generated_at().format("%Y-%m-%d %H:%M UTC")
        )
    }

    fn characters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "CHARACTER PROFILES")?;
        for character in self.0.characters() {
            writeln!(f, "{}", or(&character.name, "Unknown"))?;
            writeln!(f, "  ROLE: {}", or(&character.role, "Unknown"))?;
            writeln!(f, "  ARC: {}", or(&character.arc, "No arc description."))?;
            writeln!(f, "  TRAITS: {}", character.traits.join(", "))?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn outline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "SCREENPLAY OUTLINE")?;
        let outline = self.0.outline();
        for (key, act) in outline.three_act_structure.acts() {
            writeln!(f, "{}", or(&act.title, &key.to_uppercase()))?;
            if !act.description.is_empty() {
                writeln!(f, "{}", act.description)?;
            }
            for event in &act.key_events {
                writeln!(f, "  * {}", event)?;
            }
            writeln!(f)?;
        }
        if !outline.plot_points.is_empty() {
            writeln!(f, "PLOT POINTS")?;
            for point in &outline.plot_points {
                writeln!(f, "  * {}", point)?;
            }
        }
        Ok(())
    }

    fn scenes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "SCENE BREAKDOWN")?;
        for scene in self.0.scenes() {
            writeln!(
                f,
                "SCENE {}: {} - {}",
                scene.scene_number, scene.location, scene.time_of_day
            )?;
            writeln!(f, "  CHARACTERS: {}", scene.characters.join(", "))?;
            writeln!(f, "  {}", scene.action)?;
            writeln!(f, "  EST. DURATION: {} MIN", or(&scene.duration, "2.5"))?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn sound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "SOUND DESIGN")?;
        let sound = self.0.sound_design();

        writeln!(f, "MUSIC THEME")?;
        writeln!(f, "  STYLE: {}", or(&sound.music_theme.style, "Unknown"))?;
        writeln!(f, "  MOOD: {}", or(&sound.music_theme.mood, "Unknown"))?;
        writeln!(f, "  INSTRUMENTS: {}", sound.music_theme.instruments.join(", "))?;
        if !sound.music_theme.references.is_empty() {
            writeln!(f, "  REFERENCES: {}", sound.music_theme.references.join(", "))?;
        }

        if !sound.sound_effects.is_empty() {
            writeln!(f)?;
            writeln!(f, "SOUND EFFECTS")?;
            for effect in &sound.sound_effects {
                let scenes: Vec<String> = effect.scenes.iter().map(u32::to_string).collect();
                writeln!(
                    f,
                    "  * [{}] {} (scenes {})",
                    or(&effect.category, "general"),
                    effect.description,
                    scenes.join(", ")
                )?;
            }
        }

        if !sound.ambience.is_empty() {
            writeln!(f)?;
            writeln!(f, "AMBIENCE")?;
            for ambience in &sound.ambience {
                writeln!(
                    f,
                    "  * {}: {} ({})",
                    ambience.location, ambience.description, ambience.mood
                )?;
            }
        }

        if !sound.key_moments.is_empty() {
            writeln!(f)?;
            writeln!(f, "KEY SOUND MOMENTS")?;
            for moment in &sound.key_moments {
                writeln!(
                    f,
                    "  * SCN {}: {} - {}",
                    moment.scene, moment.moment, moment.sound_design
                )?;
            }
        }
        Ok(())
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", RULE)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", RULE)?;
    writeln!(f)
}

fn or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
