// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory engine.

use thiserror::Error;

/// Errors returned by scale construction and analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The root could not be resolved to a pitch class
    #[error("invalid root note: {0:?}")]
    InvalidRoot(String),

    /// The formula is not a usable step sequence
    #[error("malformed scale formula {formula:?}: {reason}")]
    MalformedFormula { formula: Vec<i32>, reason: String },

    /// A letter would need more than two accidentals to reach its pitch
    #[error("cannot spell pitch class {pitch_class} on letter {letter} (offset {offset})")]
    SpellingOutOfRange {
        letter: char,
        pitch_class: u8,
        offset: i8,
    },
}

impl TheoryError {
    /// True for input-contract violations on the formula
    pub fn is_malformed_formula(&self) -> bool {
        matches!(self, TheoryError::MalformedFormula { .. })
    }
}
