// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval labels relative to a root.
//!
//! Labels come from one semitone-indexed table. A few modes name an
//! ambiguous degree differently (the tritone of Lydian is `#4`, not `b5`),
//! and whole-tone scales use their own sharp-based set.

use std::fmt;

use crate::music::{Chord, NoteName, ScaleTypeId};

/// Scale-degree interval label such as `1`, `b3` or `#4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalLabel(&'static str);

impl IntervalLabel {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for IntervalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for IntervalLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

const GENERIC_LABELS: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

const WHOLE_TONE_LABELS: [(u8, &str); 6] = [
    (0, "1"),
    (2, "2"),
    (4, "3"),
    (6, "#4"),
    (8, "#5"),
    (10, "#6"),
];

/// Label for a semitone distance using the generic table
pub fn generic_label(semitones: u8) -> IntervalLabel {
    IntervalLabel(GENERIC_LABELS[(semitones % 12) as usize])
}

/// Labels notes against a root, aware of the declared scale type and mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalAnalyzer {
    scale_type: Option<ScaleTypeId>,
    mode: Option<ScaleTypeId>,
}

impl IntervalAnalyzer {
    /// Analyzer with no mode context (generic labels only)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale_type(mut self, scale_type: ScaleTypeId) -> Self {
        self.scale_type = Some(scale_type);
        self
    }

    pub fn with_mode(mut self, mode: ScaleTypeId) -> Self {
        self.mode = Some(mode);
        self
    }

    /// True when either the scale type or the mode satisfies `pred`
    fn declares(&self, pred: impl Fn(ScaleTypeId) -> bool) -> bool {
        self.scale_type.is_some_and(&pred) || self.mode.is_some_and(&pred)
    }

    /// Label a semitone distance above the root
    pub fn label(&self, semitones: u8) -> IntervalLabel {
        let semitones = semitones % 12;

        if self.declares(|t| t == ScaleTypeId::WholeTone) {
            if let Some(&(_, label)) = WHOLE_TONE_LABELS.iter().find(|(s, _)| *s == semitones) {
                return IntervalLabel(label);
            }
        }

        match semitones {
            6 if self.declares(ScaleTypeId::is_lydian_derived) => IntervalLabel("#4"),
            3 if self.declares(|t| t == ScaleTypeId::LydianSharp2) => IntervalLabel("#2"),
            8 if self.declares(|t| t == ScaleTypeId::IonianSharp5) => IntervalLabel("#5"),
            _ => generic_label(semitones),
        }
    }

    /// One label per note
    pub fn analyze(&self, notes: &[NoteName], root: NoteName) -> Vec<IntervalLabel> {
        let root_pc = root.pitch_class();
        notes
            .iter()
            .map(|note| self.label(root_pc.interval_to(note.pitch_class())))
            .collect()
    }
}

/// Chord-tone labels. Chord tones are not mode-labeled, so this always uses
/// the generic table.
pub fn chord_intervals(notes: &[NoteName], root: NoteName) -> Vec<IntervalLabel> {
    IntervalAnalyzer::new().analyze(notes, root)
}

impl Chord {
    /// Interval labels of the chord tones above the chord root
    pub fn intervals(&self) -> Vec<IntervalLabel> {
        let root = self.root().pitch_class();
        self.pitch_classes()
            .into_iter()
            .map(|pc| generic_label(root.interval_to(pc)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::ScaleBuilder;

    fn note(s: &str) -> NoteName {
        NoteName::from_str(s).unwrap()
    }

    fn labels(analyzer: IntervalAnalyzer, root: &str, scale_type: ScaleTypeId) -> Vec<String> {
        let scale = ScaleBuilder::build(note(root), scale_type).unwrap();
        analyzer
            .analyze(scale.notes(), scale.root())
            .iter()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn test_generic_labels() {
        assert_eq!(
            labels(IntervalAnalyzer::new(), "C", ScaleTypeId::Major),
            vec!["1", "2", "3", "4", "5", "6", "7"]
        );
        assert_eq!(
            labels(IntervalAnalyzer::new(), "A", ScaleTypeId::Minor),
            vec!["1", "2", "b3", "4", "5", "b6", "b7"]
        );
    }

    #[test]
    fn test_lydian_tritone_is_sharp_four() {
        let lydian = IntervalAnalyzer::new().with_scale_type(ScaleTypeId::Lydian);
        assert_eq!(
            labels(lydian, "F", ScaleTypeId::Lydian),
            vec!["1", "2", "3", "#4", "5", "6", "7"]
        );

        let locrian = IntervalAnalyzer::new().with_scale_type(ScaleTypeId::Locrian);
        assert_eq!(locrian.label(6), "b5");
    }

    #[test]
    fn test_lydian_derived_modes() {
        for mode in [
            ScaleTypeId::LydianDominant,
            ScaleTypeId::LydianAugmented,
            ScaleTypeId::LydianSharp2,
            ScaleTypeId::DorianSharp4,
        ] {
            assert_eq!(IntervalAnalyzer::new().with_mode(mode).label(6), "#4", "{}", mode);
        }
    }

    #[test]
    fn test_lydian_sharp_two() {
        let analyzer = IntervalAnalyzer::new().with_mode(ScaleTypeId::LydianSharp2);
        assert_eq!(analyzer.label(3), "#2");
        // Only lydian #2 renames the minor third
        assert_eq!(
            IntervalAnalyzer::new().with_mode(ScaleTypeId::Lydian).label(3),
            "b3"
        );
    }

    #[test]
    fn test_ionian_sharp_five() {
        let analyzer = IntervalAnalyzer::new().with_scale_type(ScaleTypeId::IonianSharp5);
        assert_eq!(analyzer.label(8), "#5");
        assert_eq!(
            IntervalAnalyzer::new().with_scale_type(ScaleTypeId::LydianAugmented).label(8),
            "b6"
        );
    }

    #[test]
    fn test_whole_tone_labels() {
        let analyzer = IntervalAnalyzer::new().with_scale_type(ScaleTypeId::WholeTone);
        assert_eq!(
            labels(analyzer, "C", ScaleTypeId::WholeTone),
            vec!["1", "2", "3", "#4", "#5", "#6"]
        );
        assert_eq!(analyzer.label(1), "b2");
    }

    #[test]
    fn test_chord_intervals_ignore_mode() {
        let notes = [note("C"), note("E"), note("F#")];
        let result: Vec<String> = chord_intervals(&notes, note("C"))
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(result, vec!["1", "3", "b5"]);
    }

    #[test]
    fn test_chord_tone_labels() {
        let chord = Chord::new(note("G"), crate::music::ChordQuality::Dominant);
        let result: Vec<&str> = chord.intervals().iter().map(|l| l.as_str()).collect();
        assert_eq!(result, vec!["1", "3", "5", "b7"]);
    }

    #[test]
    fn test_enharmonic_spelling_does_not_change_label() {
        let analyzer = IntervalAnalyzer::new();
        assert_eq!(
            analyzer.analyze(&[note("Gb"), note("F#")], note("C")),
            vec![IntervalLabel("b5"), IntervalLabel("b5")]
        );
    }
}
