// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Analysis of spelled notes: interval labels, harmonic function, roman
//! numerals and diatonic harmonization.

pub mod function;
pub mod harmony;
pub mod intervals;
pub mod roman;

pub use function::{ChordFunctionClassifier, FunctionCategory};
pub use harmony::{harmonize, DegreeChord};
pub use intervals::{chord_intervals, IntervalAnalyzer, IntervalLabel};
pub use roman::RomanNumeralBuilder;
