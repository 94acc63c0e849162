// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord values and chord-tone spelling.

use std::fmt;

use crate::error::TheoryError;

use super::note::{NoteName, PitchClass};

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    HalfDiminished,
    Augmented,
    Dominant,
    Sus2,
    Sus4,
    Sixth,
    MinorSixth,
}

impl ChordQuality {
    /// Normalize a free-form quality name ("Minor", "maj7", "Half Diminished",
    /// "sus4", "m6", ...). Total: anything unrecognized reads as major.
    pub fn parse(s: &str) -> Self {
        let q = s.trim().to_lowercase();
        let minorish = q.contains("minor")
            || q.starts_with("min")
            || q == "m"
            || (q.starts_with('m') && q[1..].starts_with(|c: char| c.is_ascii_digit()));

        if q.contains("sus") {
            if q.contains('2') {
                ChordQuality::Sus2
            } else {
                ChordQuality::Sus4
            }
        } else if q.contains('6') {
            if minorish {
                ChordQuality::MinorSixth
            } else {
                ChordQuality::Sixth
            }
        } else if q.contains("aug") || q.contains('+') {
            ChordQuality::Augmented
        } else if q.contains("half") || q.contains('ø') || q.contains("m7b5") {
            ChordQuality::HalfDiminished
        } else if q.contains("dim") || q.contains('°') {
            ChordQuality::Diminished
        } else if minorish {
            ChordQuality::Minor
        } else if q.contains("dom") {
            ChordQuality::Dominant
        } else {
            ChordQuality::Major
        }
    }

    /// Classify a stacked-thirds triad by its two thirds
    pub fn from_thirds(lower: u8, upper: u8) -> Option<Self> {
        match (lower, upper) {
            (4, 3) => Some(ChordQuality::Major),
            (3, 4) => Some(ChordQuality::Minor),
            (3, 3) => Some(ChordQuality::Diminished),
            (4, 4) => Some(ChordQuality::Augmented),
            _ => None,
        }
    }

    /// Semitones above the root for each chord tone
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::HalfDiminished => &[0, 3, 6, 10],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Dominant => &[0, 4, 7, 10],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Sixth => &[0, 4, 7, 9],
            ChordQuality::MinorSixth => &[0, 3, 7, 9],
        }
    }

    /// Letter steps above the root letter for each chord tone
    fn letter_steps(self) -> &'static [usize] {
        match self {
            ChordQuality::Major
            | ChordQuality::Minor
            | ChordQuality::Diminished
            | ChordQuality::Augmented => &[0, 2, 4],
            ChordQuality::HalfDiminished | ChordQuality::Dominant => &[0, 2, 4, 6],
            ChordQuality::Sus2 => &[0, 1, 4],
            ChordQuality::Sus4 => &[0, 3, 4],
            ChordQuality::Sixth | ChordQuality::MinorSixth => &[0, 2, 4, 5],
        }
    }

    /// Sus and sixth chords are not built from stacked thirds
    pub fn is_tertian(self) -> bool {
        !matches!(
            self,
            ChordQuality::Sus2 | ChordQuality::Sus4 | ChordQuality::Sixth | ChordQuality::MinorSixth
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Diminished => "Diminished",
            ChordQuality::HalfDiminished => "Half Diminished",
            ChordQuality::Augmented => "Augmented",
            ChordQuality::Dominant => "Dominant 7",
            ChordQuality::Sus2 => "Sus2",
            ChordQuality::Sus4 => "Sus4",
            ChordQuality::Sixth => "Major 6",
            ChordQuality::MinorSixth => "Minor 6",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A chord: root plus quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    root: NoteName,
    quality: ChordQuality,
}

impl Chord {
    pub fn new(root: NoteName, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    pub fn root(&self) -> NoteName {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Pitch classes of the chord tones, root first
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        let root = self.root.pitch_class();
        self.quality
            .intervals()
            .iter()
            .map(|&i| root.transpose(i as i32))
            .collect()
    }

    /// Spell the chord tones on stacked letters (C E G, not C Fb G)
    pub fn notes(&self) -> Result<Vec<NoteName>, TheoryError> {
        self.quality
            .letter_steps()
            .iter()
            .zip(self.pitch_classes())
            .map(|(&step, pc)| {
                let letter = self.root.letter().advance(step);
                NoteName::spell(letter, pc).ok_or(TheoryError::SpellingOutOfRange {
                    letter: letter.as_char(),
                    pitch_class: pc.value(),
                    offset: letter.natural_pitch_class().signed_distance_to(pc),
                })
            })
            .collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.quality)
    }
}
