// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Table-lookup spelling for scales outside the diatonic letter cycle.
//!
//! Each family owns a fixed chromatic spelling: pentatonic scales pick
//! sharps or flats from key-signature lists, blues and augmented scales
//! always use flats, whole-tone and diminished scales come from complete
//! per-collection tables.

use tracing::{trace, warn};

use super::note::{Letter, NoteName, PitchClass, Semitones};
use super::registry::{DiminishedForm, PentatonicFlavor, ScaleTypeId, SpellingTable};

const fn n(letter: Letter) -> NoteName {
    NoteName::natural(letter)
}

const fn s(letter: Letter) -> NoteName {
    NoteName::sharp(letter)
}

const fn f(letter: Letter) -> NoteName {
    NoteName::flat(letter)
}

use Letter::{A, B, C, D, E, F, G};

/// Chromatic scale spelled with sharps
pub const SHARP_CHROMATIC: [NoteName; 12] = [
    n(C), s(C), n(D), s(D), n(E), n(F), s(F), n(G), s(G), n(A), s(A), n(B),
];

/// Chromatic scale spelled with flats
pub const FLAT_CHROMATIC: [NoteName; 12] = [
    n(C), f(D), n(D), f(E), n(E), n(F), f(G), n(G), f(A), n(A), f(B), n(B),
];

/// Spell a pitch class from the sharp or flat chromatic table
pub fn chromatic(pc: PitchClass, prefer_flats: bool) -> NoteName {
    let table = if prefer_flats {
        &FLAT_CHROMATIC
    } else {
        &SHARP_CHROMATIC
    };
    table[pc.value() as usize]
}

/// Major keys written with sharps (and C)
const MAJOR_SHARP_KEYS: [NoteName; 8] = [n(C), n(G), n(D), n(A), n(E), n(B), s(F), s(C)];

/// Major keys written with flats. The flat chromatic table has no `Cb`, so
/// a Cb root is spelled `B` like every other degree on that pitch class.
const MAJOR_FLAT_KEYS: [NoteName; 7] = [n(F), f(B), f(E), f(A), f(D), f(G), f(C)];

/// Minor keys written with sharps (and A)
const MINOR_SHARP_KEYS: [NoteName; 8] = [n(A), n(E), n(B), s(F), s(C), s(G), s(D), s(A)];

/// Minor keys written with flats
const MINOR_FLAT_KEYS: [NoteName; 7] = [n(D), n(G), n(C), n(F), f(B), f(E), f(A)];

/// Whole-tone collection containing C
const WHOLE_TONE_EVEN: [NoteName; 6] = [n(C), n(D), n(E), s(F), s(G), s(A)];

/// Whole-tone collection containing Db
const WHOLE_TONE_ODD: [NoteName; 6] = [f(D), f(E), n(F), n(G), n(A), n(B)];

/// Blues-minor degrees taken from the relative blues-major scale
const BLUES_MINOR_DEGREES: [usize; 6] = [5, 0, 1, 2, 3, 4];

/// Canonical diminished keys, indexed by pitch class
const DIMINISHED_KEYS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// Whole-half and half-whole spellings for each canonical key. Only three
/// distinct collections exist; each appears under four keys.
const DIMINISHED_TABLE: [(&str, [NoteName; 8], [NoteName; 8]); 12] = [
    (
        "C",
        [n(C), n(D), f(E), n(F), f(G), f(A), n(A), n(B)],
        [n(C), f(D), f(E), n(E), s(F), n(G), n(A), f(B)],
    ),
    (
        "Db",
        [f(D), f(E), n(E), s(F), n(G), n(A), f(B), n(C)],
        [f(D), n(D), n(E), n(F), n(G), f(A), f(B), n(B)],
    ),
    (
        "D",
        [n(D), n(E), n(F), n(G), f(A), f(B), n(B), s(C)],
        [n(D), f(E), n(F), s(F), s(G), n(A), n(B), n(C)],
    ),
    (
        "Eb",
        [f(E), n(F), f(G), f(A), n(A), n(B), n(C), n(D)],
        [f(E), n(E), s(F), n(G), n(A), f(B), n(C), f(D)],
    ),
    (
        "E",
        [n(E), s(F), n(G), n(A), f(B), n(C), s(C), s(D)],
        [n(E), n(F), n(G), s(G), s(A), n(B), s(C), n(D)],
    ),
    (
        "F",
        [n(F), n(G), f(A), f(B), n(B), s(C), n(D), n(E)],
        [n(F), f(G), f(A), n(A), n(B), n(C), n(D), f(E)],
    ),
    (
        "F#",
        [s(F), s(G), n(A), n(B), n(C), n(D), s(D), n(F)],
        [s(F), n(G), n(A), s(A), n(C), s(C), s(D), n(E)],
    ),
    (
        "G",
        [n(G), n(A), f(B), n(C), f(D), f(E), n(E), s(F)],
        [n(G), f(A), f(B), n(B), s(C), n(D), n(E), n(F)],
    ),
    (
        "Ab",
        [f(A), f(B), n(B), f(D), n(D), n(E), n(F), n(G)],
        [f(A), n(A), n(B), n(C), n(D), f(E), n(F), f(G)],
    ),
    (
        "A",
        [n(A), n(B), n(C), n(D), f(E), n(F), s(F), s(G)],
        [n(A), f(B), n(C), s(C), s(D), n(E), s(F), n(G)],
    ),
    (
        "Bb",
        [f(B), n(C), f(D), f(E), n(E), s(F), n(G), n(A)],
        [f(B), n(B), f(D), n(D), n(E), n(F), n(G), f(A)],
    ),
    (
        "B",
        [n(B), s(C), n(D), n(E), n(F), n(G), s(G), s(A)],
        [n(B), n(C), n(D), s(D), n(F), s(F), s(G), n(A)],
    ),
];

/// Semitone offset of each degree from the root: 0, s0, s0+s1, ...
pub fn degree_offsets(steps: &[u8]) -> Vec<Semitones> {
    steps
        .iter()
        .scan(0, |acc, &step| {
            let offset = *acc;
            *acc += step as Semitones;
            Some(offset)
        })
        .collect()
}

fn spell_offsets(root: PitchClass, steps: &[u8], prefer_flats: bool) -> Vec<NoteName> {
    degree_offsets(steps)
        .into_iter()
        .map(|offset| chromatic(root.transpose(offset), prefer_flats))
        .collect()
}

/// Spell a scale from the family's table
pub fn spell_from_table(table: SpellingTable, root: NoteName, steps: &[u8]) -> Vec<NoteName> {
    let root_pc = root.pitch_class();
    trace!(?table, %root, "table-lookup spelling");

    match table {
        // A sixth step makes it a blues formula, which always reads in flats
        SpellingTable::Pentatonic(_) if steps.len() == 6 => spell_offsets(root_pc, steps, true),
        SpellingTable::Pentatonic(flavor) => {
            spell_offsets(root_pc, steps, pentatonic_prefers_flats(root, flavor))
        }
        // Blues scales always read in flats
        SpellingTable::BluesMajor | SpellingTable::BluesHybrid => {
            spell_offsets(root_pc, steps, true)
        }
        SpellingTable::BluesMinor => blues_minor(root_pc),
        SpellingTable::WholeTone => whole_tone(root_pc),
        SpellingTable::Augmented => spell_offsets(root_pc, steps, true),
        SpellingTable::Diminished(form) => diminished(root_pc, form),
        SpellingTable::Altered => spell_offsets(root_pc, steps, false)
            .into_iter()
            .map(sharp_to_flat)
            .collect(),
        SpellingTable::ChromaticSharp => spell_offsets(root_pc, steps, false),
        SpellingTable::ChromaticFlat => spell_offsets(root_pc, steps, true),
    }
}

/// Choose the pentatonic spelling convention for a root.
///
/// Roots in neither key list follow their own accidental.
pub fn pentatonic_prefers_flats(root: NoteName, flavor: PentatonicFlavor) -> bool {
    let (sharp_keys, flat_keys): (&[NoteName], &[NoteName]) = match flavor {
        PentatonicFlavor::Major => (&MAJOR_SHARP_KEYS, &MAJOR_FLAT_KEYS),
        PentatonicFlavor::Minor => (&MINOR_SHARP_KEYS, &MINOR_FLAT_KEYS),
    };

    if flat_keys.contains(&root) {
        true
    } else if sharp_keys.contains(&root) {
        false
    } else {
        root.accidental().offset() < 0
    }
}

/// Minor blues shares its spelling with the blues-major scale a minor third
/// above.
fn blues_minor(root: PitchClass) -> Vec<NoteName> {
    let relative_major = spell_offsets(
        root.transpose(3),
        ScaleTypeId::BluesMajor.formula(),
        true,
    );
    BLUES_MINOR_DEGREES
        .iter()
        .filter_map(|&i| relative_major.get(i).copied())
        .collect()
}

fn whole_tone(root: PitchClass) -> Vec<NoteName> {
    let collection = if root.value() % 2 == 0 {
        &WHOLE_TONE_EVEN
    } else {
        &WHOLE_TONE_ODD
    };
    let start = collection
        .iter()
        .position(|note| note.pitch_class() == root)
        .unwrap_or(0);

    collection
        .iter()
        .cycle()
        .skip(start)
        .take(collection.len())
        .copied()
        .collect()
}

/// Canonical table key for a root pitch class
pub fn diminished_key(root: PitchClass) -> &'static str {
    DIMINISHED_KEYS[root.value() as usize]
}

fn diminished(root: PitchClass, form: DiminishedForm) -> Vec<NoteName> {
    let key = diminished_key(root);
    match DIMINISHED_TABLE.iter().find(|(k, _, _)| *k == key) {
        Some((_, whole_half, half_whole)) => match form {
            DiminishedForm::WholeHalf => whole_half.to_vec(),
            DiminishedForm::HalfWhole => half_whole.to_vec(),
        },
        None => {
            // Every pitch class has a key above; kept for table edits
            warn!(key, "diminished key missing from table, using chromatic spelling");
            let steps: &[u8] = match form {
                DiminishedForm::WholeHalf => ScaleTypeId::WholeHalfDiminished.formula(),
                DiminishedForm::HalfWhole => ScaleTypeId::HalfWholeDiminished.formula(),
            };
            spell_offsets(root, steps, false)
        }
    }
}

/// Fixed sharp-to-flat conversion used by the altered scale
fn sharp_to_flat(note: NoteName) -> NoteName {
    match SHARP_CHROMATIC.iter().position(|&sharp| sharp == note) {
        Some(i) if note != FLAT_CHROMATIC[i] => FLAT_CHROMATIC[i],
        _ => note,
    }
}
