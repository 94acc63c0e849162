// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for the theory engine
//!
//! These tests exercise the public API end to end: spelling, labelling,
//! numerals and configuration.

use std::collections::{BTreeSet, HashSet};
use std::fs;

use guitar_theory::engine::{
    are_enharmonic, build_scale, chord_function, enharmonic_equivalent, intervals_of,
    roman_numeral,
};
use guitar_theory::music::Letter;
use guitar_theory::{harmonize, Engine, Key, NoteName, ScaleBuilder, ScaleTypeId, TheoryConfig};
use tempfile::tempdir;

const ROOTS: [&str; 12] = [
    "C", "G", "D", "A", "E", "B", "F#", "Db", "Ab", "Eb", "Bb", "F",
];

const MAJOR: [i32; 7] = [2, 2, 1, 2, 2, 2, 1];
const WHOLE_TONE: [i32; 6] = [2, 2, 2, 2, 2, 2];
const WHOLE_HALF: [i32; 8] = [2, 1, 2, 1, 2, 1, 2, 1];

fn note(s: &str) -> NoteName {
    NoteName::from_str(s).unwrap()
}

fn pitch_set(notes: &[String]) -> BTreeSet<u8> {
    notes.iter().map(|n| note(n).pitch_class().value()).collect()
}

/// Every major scale walks the letters in order without skipping or repeating
#[test]
fn test_major_scales_use_each_letter_once() {
    for root in ROOTS {
        let notes = build_scale(root, &MAJOR, "major");
        assert_eq!(notes.len(), 7, "{}", root);

        let root_letter = note(root).letter();
        for (i, name) in notes.iter().enumerate() {
            assert_eq!(note(name).letter(), root_letter.advance(i), "{} major: {:?}", root, notes);
        }

        let letters: HashSet<Letter> = notes.iter().map(|n| note(n).letter()).collect();
        assert_eq!(letters.len(), 7);
    }
}

/// Spelling then labelling a major scale gives the plain degree numbers
#[test]
fn test_major_scale_interval_round_trip() {
    for root in ROOTS {
        let notes = build_scale(root, &MAJOR, "major");
        let refs: Vec<&str> = notes.iter().map(String::as_str).collect();
        assert_eq!(
            intervals_of(&refs, root, None, None),
            vec!["1", "2", "3", "4", "5", "6", "7"],
            "{}",
            root
        );
    }
}

#[test]
fn test_whole_tone_collections() {
    assert_eq!(
        build_scale("C", &WHOLE_TONE, "whole-tone"),
        vec!["C", "D", "E", "F#", "G#", "A#"]
    );

    // Every root of the C collection produces the same six notes
    let c_collection = pitch_set(&build_scale("C", &WHOLE_TONE, "whole-tone"));
    for root in ["D", "E", "F#", "G#", "A#"] {
        let notes = build_scale(root, &WHOLE_TONE, "whole-tone");
        assert_eq!(notes[0], root);
        assert_eq!(pitch_set(&notes), c_collection, "{}", root);
    }
}

#[test]
fn test_whole_half_diminished_symmetry() {
    let notes = build_scale("C", &WHOLE_HALF, "wh-diminished");
    assert_eq!(notes.len(), 8);

    let set = pitch_set(&notes);
    for shift in [3u8, 6, 9] {
        let shifted: BTreeSet<u8> = set.iter().map(|pc| (pc + shift) % 12).collect();
        assert_eq!(shifted, set, "shift {}", shift);
    }
}

#[test]
fn test_enharmonic_equivalent_is_an_involution() {
    for name in ["C#", "Db", "D#", "Eb", "F#", "Gb", "G#", "Ab", "A#", "Bb", "B#", "Cb", "E#", "Fb"] {
        let other = enharmonic_equivalent(name);
        assert_ne!(other, name);
        assert!(are_enharmonic(name, &other));
        assert_eq!(enharmonic_equivalent(&other), name);
    }
}

#[test]
fn test_roman_numerals() {
    assert_eq!(roman_numeral("C", "C", 1, "major"), "I");
    assert_eq!(roman_numeral("C", "Eb", 3, "minor"), "♭iii");
    assert_eq!(roman_numeral("D", "C", 7, "major"), "♭VII");
    assert_eq!(roman_numeral("C", "F#", 4, "diminished"), "#iv°");
}

#[test]
fn test_chord_function_is_total() {
    for id in ScaleTypeId::all() {
        for degree in 1..=7 {
            // Never panics; traditional keys always have a label
            let label = chord_function(degree, id.slug(), None);
            if matches!(id, ScaleTypeId::Major | ScaleTypeId::Minor) {
                assert!(!label.is_empty(), "{} degree {}", id, degree);
            }
        }
    }
    assert_eq!(chord_function(5, "mystery-scale", None), "Degree 5");
}

#[test]
fn test_dorian_functions() {
    assert_eq!(chord_function(1, "dorian", None), "Modal Tonic");
    assert_eq!(chord_function(4, "dorian", None), "Characteristic");
    assert_eq!(chord_function(4, "dorian", Some("functional")), "Characteristic");
}

#[test]
fn test_minor_family_spelling() {
    let scale = ScaleBuilder::build(note("D"), ScaleTypeId::HarmonicMinor).unwrap();
    assert_eq!(scale.note_names(), vec!["D", "E", "F", "G", "A", "Bb", "C#"]);

    let scale = ScaleBuilder::build(note("A"), ScaleTypeId::MelodicMinor).unwrap();
    assert_eq!(scale.note_names(), vec!["A", "B", "C", "D", "E", "F#", "G#"]);
}

#[test]
fn test_harmonize_keys() {
    let key = Key::new(note("E"), ScaleTypeId::Minor);
    let chords = harmonize(&key).unwrap();
    let numerals: Vec<&str> = chords.iter().map(|c| c.numeral.as_str()).collect();
    assert_eq!(numerals, vec!["i", "ii°", "♭III", "iv", "v", "♭VI", "♭VII"]);
    assert_eq!(chords[2].chord.root().to_string(), "G");

    let blues = Key::new(note("A"), ScaleTypeId::BluesMinor);
    assert!(harmonize(&blues).unwrap().is_empty());
}

#[test]
fn test_relative_keys() {
    let c_major = Key::new(note("C"), ScaleTypeId::Major);
    let relative = c_major.relative().unwrap();
    assert_eq!(relative.root(), note("A"));
    assert_eq!(relative.scale_type(), ScaleTypeId::Minor);
    assert_eq!(relative.relative().unwrap(), c_major);
}

#[test]
fn test_config_file_drives_the_engine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theory.yaml");

    let yaml = r#"
defaults:
  root: "D"
  scale: "dorian"
custom_scales:
  - name: "In Sen"
    formula: [1, 4, 2, 3, 2]
    spelling: flats
"#;
    fs::write(&path, yaml).unwrap();

    let config = TheoryConfig::load(&path).unwrap();
    assert!(config.validate().is_empty());

    let engine = Engine::with_registry(config.registry());
    assert_eq!(
        engine.build_named_scale("C", "in-sen"),
        vec!["C", "Db", "F", "G", "Bb"]
    );
    assert_eq!(
        engine.build_named_scale(&config.defaults.root, &config.defaults.scale),
        vec!["D", "E", "F", "G", "A", "B", "C"]
    );
}
