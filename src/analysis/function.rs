// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmonic function of scale degrees.
//!
//! Major and minor keys get traditional labels. Every other mode of the
//! diatonic, harmonic-minor and melodic-minor families marks its tonic and
//! the one degree whose chord carries the mode's defining tone. The table
//! below is data; there is no per-mode branching.

use crate::music::ScaleTypeId;

/// How traditional labels are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionCategory {
    /// Degree names: Tonic, Supertonic, Mediant, ...
    #[default]
    Degree,
    /// Functional groups: Tonic, Predominant, Dominant
    Functional,
}

impl FunctionCategory {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "degree" | "degrees" | "traditional" => Some(FunctionCategory::Degree),
            "functional" | "function" | "functions" => Some(FunctionCategory::Functional),
            _ => None,
        }
    }
}

const MAJOR_DEGREE_LABELS: [&str; 7] = [
    "Tonic",
    "Supertonic",
    "Mediant",
    "Subdominant",
    "Dominant",
    "Submediant",
    "Leading Tone",
];

const MINOR_DEGREE_LABELS: [&str; 7] = [
    "Tonic",
    "Supertonic",
    "Mediant",
    "Subdominant",
    "Dominant",
    "Submediant",
    "Subtonic",
];

const MAJOR_FUNCTIONAL_LABELS: [&str; 7] = [
    "Tonic",
    "Predominant",
    "Tonic",
    "Predominant",
    "Dominant",
    "Tonic",
    "Dominant",
];

const MINOR_FUNCTIONAL_LABELS: [&str; 7] = [
    "Tonic",
    "Predominant",
    "Tonic",
    "Predominant",
    "Dominant",
    "Tonic",
    "Subtonic",
];

/// Degree whose chord carries each mode's characteristic tone
const CHARACTERISTIC_DEGREES: [(ScaleTypeId, u8); 19] = [
    (ScaleTypeId::Dorian, 4),
    (ScaleTypeId::Phrygian, 2),
    (ScaleTypeId::Lydian, 2),
    (ScaleTypeId::Mixolydian, 7),
    (ScaleTypeId::Locrian, 5),
    (ScaleTypeId::HarmonicMinor, 5),
    (ScaleTypeId::LocrianNatural6, 2),
    (ScaleTypeId::IonianSharp5, 3),
    (ScaleTypeId::DorianSharp4, 2),
    (ScaleTypeId::PhrygianDominant, 2),
    (ScaleTypeId::LydianSharp2, 2),
    (ScaleTypeId::SuperLocrianBb7, 7),
    (ScaleTypeId::MelodicMinor, 4),
    (ScaleTypeId::DorianFlat2, 2),
    (ScaleTypeId::LydianAugmented, 3),
    (ScaleTypeId::LydianDominant, 2),
    (ScaleTypeId::MixolydianFlat6, 4),
    (ScaleTypeId::LocrianNatural2, 2),
    (ScaleTypeId::Altered, 4),
];

/// Which label set a scale type uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionTable {
    Major,
    Minor,
    Modal { characteristic: u8 },
}

fn table_for(scale_type: ScaleTypeId) -> Option<FunctionTable> {
    match scale_type {
        ScaleTypeId::Major | ScaleTypeId::Ionian => Some(FunctionTable::Major),
        ScaleTypeId::Minor | ScaleTypeId::Aeolian => Some(FunctionTable::Minor),
        other => CHARACTERISTIC_DEGREES
            .iter()
            .find(|(id, _)| *id == other)
            .map(|&(_, characteristic)| FunctionTable::Modal { characteristic }),
    }
}

/// Fallback label for scale types without a function table
pub fn fallback_label(degree: u8) -> String {
    format!("Degree {}", degree)
}

/// Classifies scale degrees by harmonic function
pub struct ChordFunctionClassifier;

impl ChordFunctionClassifier {
    /// Label for `degree` (1-7) in `scale_type`. Never fails: scale types
    /// without a table, and degrees outside 1-7, get `Degree N`.
    pub fn classify(degree: u8, scale_type: ScaleTypeId, category: FunctionCategory) -> String {
        let Some(table) = table_for(scale_type) else {
            return fallback_label(degree);
        };
        if !(1..=7).contains(&degree) {
            return fallback_label(degree);
        }
        let index = (degree - 1) as usize;

        let label = match (table, category) {
            (FunctionTable::Major, FunctionCategory::Degree) => MAJOR_DEGREE_LABELS[index],
            (FunctionTable::Minor, FunctionCategory::Degree) => MINOR_DEGREE_LABELS[index],
            (FunctionTable::Major, FunctionCategory::Functional) => MAJOR_FUNCTIONAL_LABELS[index],
            (FunctionTable::Minor, FunctionCategory::Functional) => MINOR_FUNCTIONAL_LABELS[index],
            (FunctionTable::Modal { .. }, _) if degree == 1 => "Modal Tonic",
            (FunctionTable::Modal { characteristic }, _) if degree == characteristic => {
                "Characteristic"
            }
            (FunctionTable::Modal { .. }, _) => "",
        };
        label.to_string()
    }

    /// The characteristic degree of a mode, if it has one
    pub fn characteristic_degree(scale_type: ScaleTypeId) -> Option<u8> {
        match table_for(scale_type)? {
            FunctionTable::Modal { characteristic } => Some(characteristic),
            _ => None,
        }
    }
}
