use scriptoria::{
    Act, Ambience, CharacterProfile, KeyMoment, MusicTheme, ProductionPackage, Scene,
    ScreenplayOutline, SoundDesign, SoundEffect, ThreeActStructure, render_text,
};

fn package() -> ProductionPackage {
    let outline = ScreenplayOutline {
        title: "Final Eclipse".to_string(),
        logline: "A retired astronaut races a falling satellite.".to_string(),
        genre: "Thriller".to_string(),
        main_characters: vec!["Mira Chen".to_string()],
        three_act_structure: ThreeActStructure {
            act1: Act {
                title: "Signal".to_string(),
                description: "Mira spots the satellite.".to_string(),
                key_events: vec!["Debris track appears".to_string()],
            },
            act2: Act::default(),
            act3: Act::default(),
        },
        plot_points: vec!["Midpoint failure".to_string()],
    };
    let characters = vec![CharacterProfile {
        name: "Mira Chen".to_string(),
        role: "protagonist".to_string(),
        arc: String::new(),
        traits: vec!["stubborn".to_string(), "brilliant".to_string()],
    }];
    let scenes = vec![Scene {
        scene_number: 1,
        location: "EXT. OBSERVATORY".to_string(),
        time_of_day: "NIGHT".to_string(),
        characters: vec!["Mira Chen".to_string()],
        action: "Mira tracks a light moving the wrong way.".to_string(),
        duration: String::new(),
    }];
    let sound = SoundDesign {
        music_theme: MusicTheme {
            style: "Minimalist synth".to_string(),
            mood: "Tense".to_string(),
            instruments: vec!["synth".to_string(), "cello".to_string()],
            references: vec![],
        },
        sound_effects: vec![SoundEffect {
            category: "action".to_string(),
            description: "Telemetry beeps".to_string(),
            scenes: vec![1],
        }],
        ambience: vec![Ambience {
            location: "Observatory".to_string(),
            description: "Wind over the dome".to_string(),
            mood: "Lonely".to_string(),
        }],
        key_moments: vec![KeyMoment {
            scene: 1,
            moment: "Light appears".to_string(),
            sound_design: "Music drops out".to_string(),
        }],
    };
    ProductionPackage::new(outline, characters, scenes, sound)
}

#[test]
fn document_has_every_section_in_order() {
    let text = render_text(&package());

    let sections = [
        "FINAL ECLIPSE",
        "CHARACTER PROFILES",
        "SCREENPLAY OUTLINE",
        "SCENE BREAKDOWN",
        "SOUND DESIGN",
    ];
    let positions: Vec<usize> = sections
        .iter()
        .map(|s| text.find(s).unwrap_or_else(|| panic!("missing section {s}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn document_renders_entity_details() {
    let text = render_text(&package());

    assert!(text.contains("GENRE: Thriller"));
    assert!(text.contains("TRAITS: stubborn, brilliant"));
    assert!(text.contains("  * Debris track appears"));
    assert!(text.contains("SCENE 1: EXT. OBSERVATORY - NIGHT"));
    assert!(text.contains("INSTRUMENTS: synth, cello"));
    assert!(text.contains("SCN 1: Light appears - Music drops out"));
    assert!(text.contains("Observatory: Wind over the dome (Lonely)"));
}

#[test]
fn empty_fields_get_placeholders() {
    let text = render_text(&package());

    assert!(text.contains("ARC: No arc description."));
    assert!(text.contains("EST. DURATION: 2.5 MIN"));
    // Untitled acts fall back to their key
    assert!(text.contains("ACT2"));
}
