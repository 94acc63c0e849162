// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale spelling and key relationships.
//!
//! [`ScaleBuilder`] turns a root and a step formula into correctly spelled
//! note names. Seven-note diatonic, harmonic-minor and melodic-minor modes
//! walk the letter cycle (one letter per degree); every other family is
//! spelled from a fixed table (see [`super::spelling`]).

use std::fmt;

use tracing::{debug, error, trace, warn};

use crate::error::TheoryError;

use super::enharmonic::{is_impractical, simplify};
use super::note::{Letter, NoteName, PitchClass};
use super::registry::{LetterCycleRule, ScaleEntry, ScaleKind, ScaleTypeId, SpellingStrategy};
use super::spelling::{degree_offsets, spell_from_table};

/// Roots whose minor-family scales keep A# instead of Bb
const SHARP_KEYS: [NoteName; 7] = [
    NoteName::natural(Letter::G),
    NoteName::natural(Letter::D),
    NoteName::natural(Letter::A),
    NoteName::natural(Letter::E),
    NoteName::natural(Letter::B),
    NoteName::sharp(Letter::F),
    NoteName::sharp(Letter::C),
];

/// Validate a formula and convert it to step sizes.
///
/// A formula is usable when it has 5 to 12 positive steps whose sum is a
/// whole number of octaves.
pub fn validate_formula(formula: &[i32]) -> Result<Vec<u8>, TheoryError> {
    let malformed = |reason: &str| TheoryError::MalformedFormula {
        formula: formula.to_vec(),
        reason: reason.to_string(),
    };

    if formula.is_empty() {
        return Err(malformed("formula is empty"));
    }
    if !(5..=12).contains(&formula.len()) {
        return Err(malformed("formula must have between 5 and 12 steps"));
    }
    if formula.iter().any(|&step| !(1..=12).contains(&step)) {
        return Err(malformed("every step must be between 1 and 12 semitones"));
    }
    if formula.iter().sum::<i32>() % 12 != 0 {
        return Err(malformed("steps do not add up to whole octaves"));
    }

    Ok(formula.iter().map(|&step| step as u8).collect())
}

/// A spelled scale
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    root: NoteName,
    kind: ScaleKind,
    formula: Vec<u8>,
    notes: Vec<NoteName>,
}

impl Scale {
    /// Get the root note
    pub fn root(&self) -> NoteName {
        self.root
    }

    /// Identity of the scale type
    pub fn kind(&self) -> &ScaleKind {
        &self.kind
    }

    /// The built-in scale type, if this is one
    pub fn scale_type(&self) -> Option<ScaleTypeId> {
        self.kind.builtin()
    }

    /// Step formula the scale was built from
    pub fn formula(&self) -> &[u8] {
        &self.formula
    }

    /// Semitones from the root for each degree
    pub fn intervals(&self) -> Vec<i32> {
        degree_offsets(&self.formula)
    }

    /// Get the notes in this scale
    pub fn notes(&self) -> &[NoteName] {
        &self.notes
    }

    /// Note names as strings
    pub fn note_names(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.to_string()).collect()
    }

    /// Pitch classes of the notes, in scale order
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.notes.iter().map(|n| n.pitch_class()).collect()
    }

    /// Get the number of notes in this scale
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a note (in any spelling) is in this scale
    pub fn contains(&self, note: NoteName) -> bool {
        let pc = note.pitch_class();
        self.notes.iter().any(|n| n.pitch_class() == pc)
    }

    /// Get the scale degree (1-based) for a note, matching by pitch class
    pub fn degree_of(&self, note: NoteName) -> Option<usize> {
        let pc = note.pitch_class();
        self.notes
            .iter()
            .position(|n| n.pitch_class() == pc)
            .map(|i| i + 1)
    }

    /// Get the note at a given scale degree (1-based)
    pub fn note_at_degree(&self, degree: usize) -> Option<NoteName> {
        if degree == 0 || degree > self.len() {
            return None;
        }
        Some(self.notes[degree - 1])
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.kind)
    }
}

/// Builds spelled scales from registry entries
pub struct ScaleBuilder;

impl ScaleBuilder {
    /// Build a built-in scale type with its registered formula
    pub fn build(root: NoteName, scale_type: ScaleTypeId) -> Result<Scale, TheoryError> {
        Self::build_entry(root, &ScaleEntry::from(scale_type))
    }

    /// Build a built-in scale type with an explicit formula
    pub fn build_with_formula(
        root: NoteName,
        formula: &[i32],
        scale_type: ScaleTypeId,
    ) -> Result<Scale, TheoryError> {
        let mut entry = ScaleEntry::from(scale_type);
        entry.formula = validate_formula(formula).map_err(log_formula_error)?;
        Self::build_entry(root, &entry)
    }

    /// Parse the root and build; an unparseable root is reported, not
    /// guessed at.
    pub fn build_from_str(
        root: &str,
        formula: &[i32],
        entry: &ScaleEntry,
    ) -> Result<Scale, TheoryError> {
        let steps = validate_formula(formula).map_err(log_formula_error)?;
        let root = NoteName::from_str(root).ok_or_else(|| {
            warn!(root, "root is not a note name");
            TheoryError::InvalidRoot(root.to_string())
        })?;

        let entry = ScaleEntry {
            formula: steps,
            ..entry.clone()
        };
        Self::build_entry(root, &entry)
    }

    /// Build from a resolved registry entry
    pub fn build_entry(root: NoteName, entry: &ScaleEntry) -> Result<Scale, TheoryError> {
        let formula: Vec<i32> = entry.formula.iter().map(|&s| s as i32).collect();
        let steps = validate_formula(&formula).map_err(log_formula_error)?;

        debug!(
            %root,
            scale = %entry.kind,
            strategy = entry.strategy.tag(),
            "building scale"
        );

        let notes = match entry.strategy {
            SpellingStrategy::LetterCycle(rule) => {
                let notes = spell_letter_cycle(root, &steps)?;
                match rule {
                    LetterCycleRule::Strict => notes,
                    LetterCycleRule::MinorFamily => normalize_minor_family(root, notes),
                }
            }
            SpellingStrategy::Table(table) => spell_from_table(table, root, &steps),
        };

        Ok(Scale {
            root,
            kind: entry.kind.clone(),
            formula: steps,
            notes,
        })
    }
}

fn log_formula_error(err: TheoryError) -> TheoryError {
    error!(%err, "rejected scale formula");
    err
}

/// One letter per degree, accidentals chosen by the distance between the
/// letter's natural pitch and the accumulated formula pitch.
fn spell_letter_cycle(root: NoteName, steps: &[u8]) -> Result<Vec<NoteName>, TheoryError> {
    let root_pc = root.pitch_class();

    degree_offsets(steps)
        .into_iter()
        .enumerate()
        .map(|(degree, offset)| {
            let letter = root.letter().advance(degree);
            let actual = root_pc.transpose(offset);
            NoteName::spell(letter, actual).ok_or_else(|| {
                let distance = letter.natural_pitch_class().signed_distance_to(actual);
                error!(
                    %root,
                    letter = %letter.as_char(),
                    distance,
                    "formula needs more than two accidentals"
                );
                TheoryError::SpellingOutOfRange {
                    letter: letter.as_char(),
                    pitch_class: actual.value(),
                    offset: distance,
                }
            })
        })
        .collect()
}

/// Practical respelling for harmonic- and melodic-minor families
fn normalize_minor_family(root: NoteName, notes: Vec<NoteName>) -> Vec<NoteName> {
    let a_sharp = NoteName::sharp(Letter::A);
    let keep_a_sharp = SHARP_KEYS.contains(&root);

    notes
        .into_iter()
        .map(|note| {
            let note = if is_impractical(note) {
                let simpler = simplify(note);
                trace!(from = %note, to = %simpler, "respelled");
                simpler
            } else {
                note
            };
            if note == a_sharp && !keep_a_sharp {
                NoteName::flat(Letter::B)
            } else {
                note
            }
        })
        .collect()
}

/// A musical key: root plus scale type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    root: NoteName,
    scale_type: ScaleTypeId,
}

impl Key {
    /// Create a new key
    pub fn new(root: NoteName, scale_type: ScaleTypeId) -> Self {
        Self { root, scale_type }
    }

    /// Parse a key from strings
    pub fn parse(root_str: &str, scale_str: &str) -> Option<Self> {
        let root = NoteName::from_str(root_str)?;
        let scale_type = ScaleTypeId::from_str(scale_str)?;
        Some(Key::new(root, scale_type))
    }

    /// Get the root note
    pub fn root(&self) -> NoteName {
        self.root
    }

    pub fn scale_type(&self) -> ScaleTypeId {
        self.scale_type
    }

    /// Build the key's scale
    pub fn scale(&self) -> Result<Scale, TheoryError> {
        ScaleBuilder::build(self.root, self.scale_type)
    }

    /// Get the relative key (e.g. C major -> A minor), spelled from the
    /// scale itself
    pub fn relative(&self) -> Option<Key> {
        let (degree, target) = match self.scale_type {
            ScaleTypeId::Major => (6, ScaleTypeId::Minor),
            ScaleTypeId::Ionian => (6, ScaleTypeId::Aeolian),
            ScaleTypeId::Minor => (3, ScaleTypeId::Major),
            ScaleTypeId::Aeolian => (3, ScaleTypeId::Ionian),
            ScaleTypeId::PentatonicMajor => (5, ScaleTypeId::PentatonicMinor),
            ScaleTypeId::PentatonicMinor => (2, ScaleTypeId::PentatonicMajor),
            _ => return None,
        };
        let root = self.scale().ok()?.note_at_degree(degree)?;
        Some(Key::new(root, target))
    }

    /// Get the parallel key (same root, major <-> minor)
    pub fn parallel(&self) -> Option<Key> {
        let target = match self.scale_type {
            ScaleTypeId::Major => ScaleTypeId::Minor,
            ScaleTypeId::Minor => ScaleTypeId::Major,
            ScaleTypeId::Ionian => ScaleTypeId::Aeolian,
            ScaleTypeId::Aeolian => ScaleTypeId::Ionian,
            ScaleTypeId::PentatonicMajor => ScaleTypeId::PentatonicMinor,
            ScaleTypeId::PentatonicMinor => ScaleTypeId::PentatonicMajor,
            ScaleTypeId::BluesMajor => ScaleTypeId::BluesMinor,
            ScaleTypeId::BluesMinor => ScaleTypeId::BluesMajor,
            _ => return None,
        };
        Some(Key::new(self.root, target))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::registry::ScaleCategory;

    fn note(s: &str) -> NoteName {
        NoteName::from_str(s).unwrap()
    }

    fn spelled(root: &str, scale_type: ScaleTypeId) -> Vec<String> {
        ScaleBuilder::build(note(root), scale_type)
            .unwrap()
            .note_names()
    }

    #[test]
    fn test_major_scales() {
        assert_eq!(
            spelled("C", ScaleTypeId::Major),
            vec!["C", "D", "E", "F", "G", "A", "B"]
        );
        assert_eq!(
            spelled("F#", ScaleTypeId::Major),
            vec!["F#", "G#", "A#", "B", "C#", "D#", "E#"]
        );
        assert_eq!(
            spelled("Db", ScaleTypeId::Major),
            vec!["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"]
        );
    }

    #[test]
    fn test_modes() {
        assert_eq!(
            spelled("D", ScaleTypeId::Dorian),
            vec!["D", "E", "F", "G", "A", "B", "C"]
        );
        assert_eq!(
            spelled("E", ScaleTypeId::Phrygian),
            vec!["E", "F", "G", "A", "B", "C", "D"]
        );
        assert_eq!(
            spelled("F", ScaleTypeId::Lydian),
            vec!["F", "G", "A", "B", "C", "D", "E"]
        );
        assert_eq!(
            spelled("Bb", ScaleTypeId::Locrian),
            vec!["Bb", "Cb", "Db", "Eb", "Fb", "Gb", "Ab"]
        );
    }

    #[test]
    fn test_harmonic_minor() {
        assert_eq!(
            spelled("A", ScaleTypeId::HarmonicMinor),
            vec!["A", "B", "C", "D", "E", "F", "G#"]
        );
        // B# respelled as C
        assert_eq!(
            spelled("C#", ScaleTypeId::HarmonicMinor),
            vec!["C#", "D#", "E", "F#", "G#", "A", "C"]
        );
        // E# -> F, C## -> D, and A# -> Bb because D# is not a sharp key
        assert_eq!(
            spelled("D#", ScaleTypeId::HarmonicMinor),
            vec!["D#", "F", "F#", "G#", "Bb", "B", "D"]
        );
    }

    #[test]
    fn test_harmonic_minor_sharp_key_keeps_a_sharp() {
        assert_eq!(
            spelled("B", ScaleTypeId::HarmonicMinor),
            vec!["B", "C#", "D", "E", "F#", "G", "A#"]
        );
    }

    #[test]
    fn test_melodic_minor() {
        assert_eq!(
            spelled("C", ScaleTypeId::MelodicMinor),
            vec!["C", "D", "Eb", "F", "G", "A", "B"]
        );
        assert_eq!(
            spelled("G#", ScaleTypeId::MelodicMinor),
            vec!["G#", "Bb", "B", "C#", "D#", "F", "G"]
        );
    }

    #[test]
    fn test_phrygian_dominant() {
        assert_eq!(
            spelled("E", ScaleTypeId::PhrygianDominant),
            vec!["E", "F", "G#", "A", "B", "C", "D"]
        );
    }

    #[test]
    fn test_pentatonic() {
        assert_eq!(
            spelled("G", ScaleTypeId::PentatonicMajor),
            vec!["G", "A", "B", "D", "E"]
        );
        assert_eq!(
            spelled("Eb", ScaleTypeId::PentatonicMajor),
            vec!["Eb", "F", "G", "Bb", "C"]
        );
        assert_eq!(
            spelled("E", ScaleTypeId::PentatonicMinor),
            vec!["E", "G", "A", "B", "D"]
        );
        assert_eq!(
            spelled("F", ScaleTypeId::PentatonicMinor),
            vec!["F", "Ab", "Bb", "C", "Eb"]
        );
    }

    #[test]
    fn test_blues_scales_use_flats() {
        assert_eq!(
            spelled("A", ScaleTypeId::BluesMinor),
            vec!["A", "C", "D", "Eb", "E", "G"]
        );
        assert_eq!(
            spelled("C", ScaleTypeId::BluesMajor),
            vec!["C", "D", "Eb", "E", "G", "A"]
        );
        assert_eq!(
            spelled("C", ScaleTypeId::BluesHybrid),
            vec!["C", "D", "Eb", "E", "F", "Gb", "G", "A", "Bb"]
        );
    }

    #[test]
    fn test_blues_pair_shares_spelling() {
        let minor = ScaleBuilder::build(note("E"), ScaleTypeId::BluesMinor).unwrap();
        let major = ScaleBuilder::build(note("G"), ScaleTypeId::BluesMajor).unwrap();
        for n in minor.notes() {
            assert!(major.notes().contains(n), "{} missing from G blues major", n);
        }
    }

    #[test]
    fn test_augmented() {
        assert_eq!(
            spelled("C", ScaleTypeId::Augmented),
            vec!["C", "Eb", "E", "G", "Ab", "B"]
        );
        let other = ScaleBuilder::build_with_formula(
            note("C"),
            &[1, 3, 1, 3, 1, 3],
            ScaleTypeId::Augmented,
        )
        .unwrap();
        assert_eq!(other.note_names(), vec!["C", "Db", "E", "F", "Ab", "A"]);
    }

    #[test]
    fn test_diminished() {
        assert_eq!(
            spelled("C", ScaleTypeId::WholeHalfDiminished),
            vec!["C", "D", "Eb", "F", "Gb", "Ab", "A", "B"]
        );
        assert_eq!(
            spelled("C#", ScaleTypeId::HalfWholeDiminished),
            vec!["Db", "D", "E", "F", "G", "Ab", "Bb", "B"]
        );
    }

    #[test]
    fn test_altered_allows_repeated_letters() {
        assert_eq!(
            spelled("C", ScaleTypeId::Altered),
            vec!["C", "Db", "Eb", "E", "Gb", "Ab", "Bb"]
        );
        assert_eq!(
            spelled("Db", ScaleTypeId::Altered),
            vec!["Db", "D", "E", "F", "G", "A", "B"]
        );
    }

    #[test]
    fn test_chromatic() {
        assert_eq!(
            spelled("C", ScaleTypeId::Chromatic),
            vec!["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]
        );
    }

    #[test]
    fn test_malformed_formula() {
        let empty = ScaleBuilder::build_with_formula(note("C"), &[], ScaleTypeId::Major);
        assert!(empty.unwrap_err().is_malformed_formula());

        let zero = validate_formula(&[2, 2, 0, 2, 2, 2, 2]);
        assert!(zero.unwrap_err().is_malformed_formula());

        let short_octave = validate_formula(&[2, 2, 1, 2, 2, 2]);
        assert!(short_octave.is_err());

        let too_short = validate_formula(&[6, 6]);
        assert!(too_short.is_err());
    }

    #[test]
    fn test_invalid_root_is_not_malformed_formula() {
        let entry = ScaleEntry::from(ScaleTypeId::Major);
        let err = ScaleBuilder::build_from_str("H", &[2, 2, 1, 2, 2, 2, 1], &entry).unwrap_err();
        assert_eq!(err, TheoryError::InvalidRoot("H".to_string()));
        assert!(!err.is_malformed_formula());
    }

    #[test]
    fn test_spelling_out_of_range() {
        let entry = ScaleEntry {
            kind: ScaleKind::Unregistered("cluster".to_string()),
            formula: vec![1, 1, 1, 1, 1, 1, 6],
            strategy: SpellingStrategy::fallback_for(7),
            category: ScaleCategory::Exotic,
        };
        let err = ScaleBuilder::build_entry(note("C"), &entry).unwrap_err();
        assert!(matches!(err, TheoryError::SpellingOutOfRange { letter: 'G', .. }));
    }

    #[test]
    fn test_scale_queries() {
        let c_major = ScaleBuilder::build(note("C"), ScaleTypeId::Major).unwrap();
        assert_eq!(c_major.len(), 7);
        assert_eq!(c_major.intervals(), vec![0, 2, 4, 5, 7, 9, 11]);
        assert!(c_major.contains(note("B#")));
        assert!(!c_major.contains(note("F#")));
        assert_eq!(c_major.degree_of(note("G")), Some(5));
        assert_eq!(c_major.note_at_degree(3), Some(note("E")));
        assert_eq!(c_major.note_at_degree(0), None);
        assert_eq!(c_major.note_at_degree(8), None);
        assert_eq!(c_major.scale_type(), Some(ScaleTypeId::Major));
        assert_eq!(c_major.to_string(), "C Major");
    }

    #[test]
    fn test_key_relative() {
        let c_major = Key::new(note("C"), ScaleTypeId::Major);
        let relative = c_major.relative().unwrap();
        assert_eq!(relative.root(), note("A"));
        assert_eq!(relative.scale_type(), ScaleTypeId::Minor);

        let f_sharp_minor = Key::new(note("F#"), ScaleTypeId::Minor);
        assert_eq!(f_sharp_minor.relative().unwrap().root(), note("A"));

        let eb_major = Key::new(note("Eb"), ScaleTypeId::Major);
        assert_eq!(eb_major.relative().unwrap().root(), note("C"));

        assert!(Key::new(note("C"), ScaleTypeId::WholeTone).relative().is_none());
    }

    #[test]
    fn test_key_parallel() {
        let c_major = Key::new(note("C"), ScaleTypeId::Major);
        let parallel = c_major.parallel().unwrap();
        assert_eq!(parallel.root(), note("C"));
        assert_eq!(parallel.scale_type(), ScaleTypeId::Minor);
    }

    #[test]
    fn test_key_parse() {
        let key = Key::parse("Bb", "dorian").unwrap();
        assert_eq!(key.to_string(), "Bb Dorian");
        assert!(Key::parse("X", "major").is_none());
        assert!(Key::parse("C", "nonsense").is_none());
    }
}
