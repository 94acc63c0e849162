// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic triads of a key.

use tracing::debug;

use crate::error::TheoryError;
use crate::music::{Chord, ChordQuality, Key};

use super::function::{ChordFunctionClassifier, FunctionCategory};
use super::roman::RomanNumeralBuilder;

/// One row of a harmonized key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeChord {
    pub degree: u8,
    pub chord: Chord,
    pub numeral: String,
    pub function: String,
}

/// Stack thirds on every degree of a 7-note key.
///
/// Triads whose thirds are not major or minor (possible in user formulas)
/// are skipped. Keys of any other size harmonize to nothing.
pub fn harmonize(key: &Key) -> Result<Vec<DegreeChord>, TheoryError> {
    let scale = key.scale()?;
    if scale.len() != 7 {
        debug!(%key, notes = scale.len(), "not a seven-note key, nothing to harmonize");
        return Ok(Vec::new());
    }

    let notes = scale.notes();
    let numerals = RomanNumeralBuilder::new(key.root());
    let mut chords = Vec::with_capacity(7);

    for i in 0..7 {
        let root = notes[i];
        let third = notes[(i + 2) % 7];
        let fifth = notes[(i + 4) % 7];

        let lower = root.pitch_class().interval_to(third.pitch_class());
        let upper = third.pitch_class().interval_to(fifth.pitch_class());
        let Some(quality) = ChordQuality::from_thirds(lower, upper) else {
            debug!(%key, degree = i + 1, lower, upper, "degree has no tertian triad");
            continue;
        };

        let degree = (i + 1) as u8;
        chords.push(DegreeChord {
            degree,
            chord: Chord::new(root, quality),
            numeral: numerals.numeral(root, degree, quality),
            function: ChordFunctionClassifier::classify(
                degree,
                key.scale_type(),
                FunctionCategory::Degree,
            ),
        });
    }

    Ok(chords)
}
