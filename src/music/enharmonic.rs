// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic equivalence between spellings.
//!
//! Every module resolves notes to pitch classes through [`pitch_class_of`];
//! there is no second note-to-number table anywhere in the crate.

use super::note::{Accidental, Letter, NoteName, PitchClass};

/// Canonical alternate spellings. Each note appears at most once, so the
/// mapping is its own inverse.
const ENHARMONIC_PAIRS: [(NoteName, NoteName); 12] = [
    (NoteName::sharp(Letter::C), NoteName::flat(Letter::D)),
    (NoteName::sharp(Letter::D), NoteName::flat(Letter::E)),
    (NoteName::sharp(Letter::F), NoteName::flat(Letter::G)),
    (NoteName::sharp(Letter::G), NoteName::flat(Letter::A)),
    (NoteName::sharp(Letter::A), NoteName::flat(Letter::B)),
    (NoteName::sharp(Letter::B), NoteName::natural(Letter::C)),
    (NoteName::sharp(Letter::E), NoteName::natural(Letter::F)),
    (NoteName::flat(Letter::C), NoteName::natural(Letter::B)),
    (NoteName::flat(Letter::F), NoteName::natural(Letter::E)),
    (
        NoteName::new(Letter::C, Accidental::DoubleSharp),
        NoteName::natural(Letter::D),
    ),
    (
        NoteName::new(Letter::F, Accidental::DoubleSharp),
        NoteName::natural(Letter::G),
    ),
    (
        NoteName::new(Letter::G, Accidental::DoubleSharp),
        NoteName::natural(Letter::A),
    ),
];

/// Resolve a note to its pitch class
pub fn pitch_class_of(note: NoteName) -> PitchClass {
    note.pitch_class()
}

/// Parse and resolve a note string; None if it is not a note name
pub fn parse_pitch_class(s: &str) -> Option<PitchClass> {
    NoteName::from_str(s).map(pitch_class_of)
}

/// True when both spellings sound the same pitch class
pub fn are_enharmonic(a: NoteName, b: NoteName) -> bool {
    pitch_class_of(a) == pitch_class_of(b)
}

/// The canonically paired alternate spelling (C# <-> Db, B# <-> C,
/// C## <-> D, ...). Notes without a pairing are returned unchanged.
pub fn enharmonic_equivalent(note: NoteName) -> NoteName {
    ENHARMONIC_PAIRS
        .iter()
        .find_map(|&(a, b)| {
            if note == a {
                Some(b)
            } else if note == b {
                Some(a)
            } else {
                None
            }
        })
        .unwrap_or(note)
}

/// True for spellings that are correct but rarely practical: B#, E#, Cb,
/// Fb and any double accidental.
pub fn is_impractical(note: NoteName) -> bool {
    if note.accidental().is_double() {
        return true;
    }
    matches!(
        (note.letter(), note.accidental()),
        (Letter::B, Accidental::Sharp)
            | (Letter::E, Accidental::Sharp)
            | (Letter::C, Accidental::Flat)
            | (Letter::F, Accidental::Flat)
    )
}

/// Respell an impractical note with the simplest equivalent.
///
/// A natural is used when one exists; otherwise a single accidental in the
/// same direction as the original (E## -> F#, Cbb -> Bb). Practical notes
/// are returned unchanged.
pub fn simplify(note: NoteName) -> NoteName {
    if !is_impractical(note) {
        return note;
    }

    let pc = pitch_class_of(note);
    if let Some(letter) = Letter::from_natural(pc) {
        return NoteName::natural(letter);
    }

    // Black keys always sit between two naturals
    if note.accidental().offset() > 0 {
        Letter::from_natural(pc.transpose(-1))
            .map(NoteName::sharp)
            .unwrap_or(note)
    } else {
        Letter::from_natural(pc.transpose(1))
            .map(NoteName::flat)
            .unwrap_or(note)
    }
}
