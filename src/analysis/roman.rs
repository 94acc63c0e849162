// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Roman numeral labels for chords in a key.

use tracing::trace;

use crate::music::{ChordQuality, NoteName};

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Major-scale offsets the numeral accidentals are measured against
const MAJOR_DEGREE_OFFSETS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Builds roman numerals relative to a key root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanNumeralBuilder {
    scale_root: NoteName,
}

impl RomanNumeralBuilder {
    pub fn new(scale_root: NoteName) -> Self {
        Self { scale_root }
    }

    /// Numeral for a chord rooted on `chord_root` at `degree` (1-7).
    ///
    /// The accidental prefix compares the chord root with the same degree
    /// of the major scale on the key root: a semitone below gives `♭`, a
    /// semitone above gives `#`. Sus and sixth chords, and degrees outside
    /// 1-7, give an empty string.
    pub fn numeral(&self, chord_root: NoteName, degree: u8, quality: ChordQuality) -> String {
        if !quality.is_tertian() || !(1..=7).contains(&degree) {
            return String::new();
        }
        let index = (degree - 1) as usize;

        let expected = self.scale_root.pitch_class().transpose(MAJOR_DEGREE_OFFSETS[index]);
        let prefix = match expected.signed_distance_to(chord_root.pitch_class()) {
            -1 => "♭",
            1 => "#",
            _ => "",
        };

        let base = NUMERALS[index];
        let body = match quality {
            ChordQuality::Minor => base.to_lowercase(),
            ChordQuality::Diminished => format!("{}°", base.to_lowercase()),
            ChordQuality::HalfDiminished => format!("{}ø", base.to_lowercase()),
            ChordQuality::Augmented => format!("{}+", base),
            _ => base.to_string(),
        };

        let numeral = format!("{}{}", prefix, body);
        trace!(key = %self.scale_root, %chord_root, degree, %numeral, "roman numeral");
        numeral
    }
}
