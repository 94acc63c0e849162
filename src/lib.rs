// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine for the guitar lesson pages.
//!
//! Spells scales from interval formulas, labels intervals, names chord
//! functions and builds roman numerals. Everything is pure computation;
//! diagnostics go through `tracing`.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod music;

pub use analysis::{
    chord_intervals, harmonize, ChordFunctionClassifier, DegreeChord, FunctionCategory,
    IntervalAnalyzer, IntervalLabel, RomanNumeralBuilder,
};
pub use config::TheoryConfig;
pub use engine::Engine;
pub use error::TheoryError;
pub use music::{
    Chord, ChordQuality, Key, NoteName, PitchClass, Scale, ScaleBuilder, ScaleRegistry,
    ScaleTypeId,
};
