// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! String-level entry points.
//!
//! These take the loosely typed values a page template hands over (note
//! names, scale slugs, quality names) and never fail: errors are logged and
//! turned into empty results.

use tracing::{debug, warn};

use crate::analysis::{
    function::fallback_label, ChordFunctionClassifier, FunctionCategory, IntervalAnalyzer,
    IntervalLabel, RomanNumeralBuilder,
};
use crate::error::TheoryError;
use crate::music::{
    enharmonic, Chord, ChordQuality, NoteName, Scale, ScaleBuilder, ScaleEntry, ScaleKind,
    ScaleRegistry, ScaleTypeId,
};

/// Label used for a note that could not be parsed
pub const UNKNOWN_LABEL: &str = "?";

/// Facade over a scale registry
#[derive(Debug, Clone, Default)]
pub struct Engine {
    registry: ScaleRegistry,
}

impl Engine {
    /// Engine with only the built-in scale types
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Engine that also knows user-defined scales
    pub fn with_registry(registry: ScaleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ScaleRegistry {
        &self.registry
    }

    /// Resolve a scale name against the registry
    pub fn resolve(&self, scale_type: &str, step_count: usize) -> ScaleEntry {
        self.registry.resolve(scale_type, step_count)
    }

    /// Spell `formula` from `root`. Invalid roots and malformed formulas
    /// give an empty list.
    pub fn build_scale(&self, root: &str, formula: &[i32], scale_type: &str) -> Vec<String> {
        let entry = self.resolve(scale_type, formula.len());
        match ScaleBuilder::build_from_str(root, formula, &entry) {
            Ok(scale) => scale.note_names(),
            Err(err) => {
                debug!(%err, root, scale_type, "scale not built");
                Vec::new()
            }
        }
    }

    /// Build a scale with its registered formula. `Ok(None)` when the name
    /// is neither built in nor registered, since there is no formula to
    /// spell.
    pub fn named_scale(
        &self,
        root: &str,
        scale_type: &str,
    ) -> Result<Option<Scale>, TheoryError> {
        let entry = self.resolve(scale_type, 0);
        if matches!(entry.kind, ScaleKind::Unregistered(_)) && entry.formula.is_empty() {
            debug!(root, scale_type, "unregistered scale type has no formula");
            return Ok(None);
        }

        let formula: Vec<i32> = entry.formula.iter().map(|&s| s as i32).collect();
        ScaleBuilder::build_from_str(root, &formula, &entry).map(Some)
    }

    /// Spell a scale with its registered formula
    pub fn build_named_scale(&self, root: &str, scale_type: &str) -> Vec<String> {
        match self.named_scale(root, scale_type) {
            Ok(Some(scale)) => scale.note_names(),
            Ok(None) => Vec::new(),
            Err(err) => {
                debug!(%err, root, scale_type, "scale not built");
                Vec::new()
            }
        }
    }

    /// Interval labels of `notes` above `root`, aware of the declared scale
    /// type and mode. Unparseable notes get `?`.
    pub fn intervals_of(
        &self,
        notes: &[&str],
        root: &str,
        scale_type: Option<&str>,
        mode: Option<&str>,
    ) -> Vec<String> {
        let Some(root) = parse_root(root) else {
            return Vec::new();
        };

        let mut analyzer = IntervalAnalyzer::new();
        if let Some(id) = scale_type.and_then(parse_scale_type) {
            analyzer = analyzer.with_scale_type(id);
        }
        if let Some(id) = mode.and_then(parse_scale_type) {
            analyzer = analyzer.with_mode(id);
        }

        notes
            .iter()
            .map(|s| match NoteName::from_str(s) {
                Some(note) => analyzer
                    .label(root.pitch_class().interval_to(note.pitch_class()))
                    .to_string(),
                None => {
                    warn!(note = *s, "note is not a note name");
                    UNKNOWN_LABEL.to_string()
                }
            })
            .collect()
    }

    /// Chord-tone labels; mode context never applies
    pub fn chord_intervals(&self, notes: &[&str], root: &str) -> Vec<String> {
        self.intervals_of(notes, root, None, None)
    }

    /// Function label for a scale degree. Unknown scale types get the
    /// `Degree N` fallback; an unknown category reads as the default.
    pub fn chord_function(&self, degree: u8, scale_type: &str, category: Option<&str>) -> String {
        let category = category
            .and_then(FunctionCategory::from_str)
            .unwrap_or_default();
        match ScaleTypeId::from_str(scale_type) {
            Some(id) => ChordFunctionClassifier::classify(degree, id, category),
            None => {
                debug!(scale_type, "no function table for scale type");
                fallback_label(degree)
            }
        }
    }

    /// Roman numeral for a chord in a key; empty when either root is not
    /// a note name.
    pub fn roman_numeral(
        &self,
        scale_root: &str,
        chord_root: &str,
        degree: u8,
        quality: &str,
    ) -> String {
        let (Some(scale_root), Some(chord_root)) = (parse_root(scale_root), parse_root(chord_root))
        else {
            return String::new();
        };
        RomanNumeralBuilder::new(scale_root).numeral(
            chord_root,
            degree,
            ChordQuality::parse(quality),
        )
    }
}

fn parse_root(s: &str) -> Option<NoteName> {
    let root = NoteName::from_str(s);
    if root.is_none() {
        warn!(root = s, "root is not a note name");
    }
    root
}

fn parse_scale_type(s: &str) -> Option<ScaleTypeId> {
    let id = ScaleTypeId::from_str(s);
    if id.is_none() {
        debug!(scale_type = s, "unregistered scale type, using generic labels");
    }
    id
}

fn labels_to_strings(labels: Vec<IntervalLabel>) -> Vec<String> {
    labels.into_iter().map(|l| l.to_string()).collect()
}

/// Spell a scale with the built-in registry
pub fn build_scale(root: &str, formula: &[i32], scale_type: &str) -> Vec<String> {
    Engine::builtin().build_scale(root, formula, scale_type)
}

/// Interval labels with the built-in registry
pub fn intervals_of(
    notes: &[&str],
    root: &str,
    scale_type: Option<&str>,
    mode: Option<&str>,
) -> Vec<String> {
    Engine::builtin().intervals_of(notes, root, scale_type, mode)
}

/// Chord-tone interval labels
pub fn chord_intervals(notes: &[&str], root: &str) -> Vec<String> {
    Engine::builtin().chord_intervals(notes, root)
}

/// Labels for a chord given as root and quality name
pub fn chord_tone_labels(root: &str, quality: &str) -> Vec<String> {
    match parse_root(root) {
        Some(root) => labels_to_strings(Chord::new(root, ChordQuality::parse(quality)).intervals()),
        None => Vec::new(),
    }
}

pub fn chord_function(degree: u8, scale_type: &str, category: Option<&str>) -> String {
    Engine::builtin().chord_function(degree, scale_type, category)
}

pub fn roman_numeral(scale_root: &str, chord_root: &str, degree: u8, quality: &str) -> String {
    Engine::builtin().roman_numeral(scale_root, chord_root, degree, quality)
}

/// Enharmonic respelling; strings that are not note names come back as is
pub fn enharmonic_equivalent(note: &str) -> String {
    match NoteName::from_str(note) {
        Some(parsed) => enharmonic::enharmonic_equivalent(parsed).to_string(),
        None => note.to_string(),
    }
}

/// True when both strings are note names with the same pitch class
pub fn are_enharmonic(a: &str, b: &str) -> bool {
    match (NoteName::from_str(a), NoteName::from_str(b)) {
        (Some(a), Some(b)) => enharmonic::are_enharmonic(a, b),
        _ => false,
    }
}
