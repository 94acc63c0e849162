// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory primitives.
//!
//! This module provides pitch classes, note spelling, the scale type
//! registry, and the scale builder.

pub mod chord;
pub mod enharmonic;
pub mod note;
pub mod registry;
pub mod scale;
pub mod spelling;

pub use chord::{Chord, ChordQuality};
pub use enharmonic::{are_enharmonic, enharmonic_equivalent, pitch_class_of, simplify};
pub use note::{Accidental, Letter, NoteName, PitchClass};
pub use registry::{
    CustomScaleDefinition, CustomSpelling, ScaleCategory, ScaleEntry, ScaleKind, ScaleRegistry,
    ScaleTypeId, SpellingStrategy,
};
pub use scale::{Key, Scale, ScaleBuilder};
