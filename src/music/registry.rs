// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale type registry.
//!
//! One static table maps every [`ScaleTypeId`] to its step formula,
//! spelling strategy and category. [`ScaleRegistry`] layers user-defined
//! scales from configuration on top and resolves free-form names, falling
//! back to a default strategy for anything it does not know.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Broad family a scale type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleCategory {
    /// Major scale and its seven modes
    DiatonicMode,
    /// Harmonic minor and its modes
    HarmonicMinorMode,
    /// Melodic minor and its modes
    MelodicMinorMode,
    /// Pentatonic and blues scales
    PentatonicBlues,
    /// Scales invariant under some transposition
    Symmetric,
    /// Anything else, including user-defined scales
    #[default]
    Exotic,
}

impl ScaleCategory {
    pub fn name(self) -> &'static str {
        match self {
            ScaleCategory::DiatonicMode => "diatonic-mode",
            ScaleCategory::HarmonicMinorMode => "harmonic-minor-mode",
            ScaleCategory::MelodicMinorMode => "melodic-minor-mode",
            ScaleCategory::PentatonicBlues => "pentatonic-blues",
            ScaleCategory::Symmetric => "symmetric",
            ScaleCategory::Exotic => "exotic",
        }
    }
}

/// Post-processing applied after the letter cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCycleRule {
    /// Keep the one-letter-per-degree spelling as computed
    Strict,
    /// Respell impractical notes (B#, E#, Cb, Fb, double accidentals) and
    /// prefer Bb over A# outside sharp keys
    MinorFamily,
}

/// Whether pentatonic spelling follows major or minor key signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PentatonicFlavor {
    Major,
    Minor,
}

/// Which of the two diminished spellings a table row supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiminishedForm {
    WholeHalf,
    HalfWhole,
}

/// Canonical spelling table owned by a table-lookup scale family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellingTable {
    Pentatonic(PentatonicFlavor),
    BluesMajor,
    BluesMinor,
    BluesHybrid,
    WholeTone,
    Augmented,
    Diminished(DiminishedForm),
    Altered,
    ChromaticSharp,
    ChromaticFlat,
}

/// How the builder turns pitch classes into note names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellingStrategy {
    LetterCycle(LetterCycleRule),
    Table(SpellingTable),
}

impl SpellingStrategy {
    /// Strategy tag as used in scale metadata
    pub fn tag(self) -> &'static str {
        match self {
            SpellingStrategy::LetterCycle(_) => "diatonic-letter-cycle",
            SpellingStrategy::Table(_) => "table-lookup",
        }
    }

    /// Strategy used for scales nobody registered
    pub fn fallback_for(step_count: usize) -> Self {
        if step_count == 7 {
            SpellingStrategy::LetterCycle(LetterCycleRule::Strict)
        } else {
            SpellingStrategy::Table(SpellingTable::ChromaticSharp)
        }
    }
}

/// Built-in scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleTypeId {
    // Major scale and modes
    Major,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Minor,
    Aeolian,
    Locrian,

    // Harmonic minor and modes
    HarmonicMinor,
    LocrianNatural6,
    IonianSharp5,
    DorianSharp4,
    PhrygianDominant,
    LydianSharp2,
    SuperLocrianBb7,

    // Melodic minor and modes
    MelodicMinor,
    DorianFlat2,
    LydianAugmented,
    LydianDominant,
    MixolydianFlat6,
    LocrianNatural2,
    Altered,

    // Pentatonic and blues
    PentatonicMajor,
    PentatonicMinor,
    BluesMajor,
    BluesMinor,
    BluesHybrid,

    // Symmetric
    Chromatic,
    WholeTone,
    Augmented,
    WholeHalfDiminished,
    HalfWholeDiminished,
}

/// Registry row for a built-in scale type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleTypeInfo {
    pub id: ScaleTypeId,
    /// Canonical identifier (e.g. "harmonic-minor")
    pub slug: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Semitone steps, one per scale degree, summing to 12
    pub formula: &'static [u8],
    pub strategy: SpellingStrategy,
    pub category: ScaleCategory,
}

const fn info(
    id: ScaleTypeId,
    slug: &'static str,
    name: &'static str,
    formula: &'static [u8],
    strategy: SpellingStrategy,
    category: ScaleCategory,
) -> ScaleTypeInfo {
    ScaleTypeInfo {
        id,
        slug,
        name,
        formula,
        strategy,
        category,
    }
}

const STRICT: SpellingStrategy = SpellingStrategy::LetterCycle(LetterCycleRule::Strict);
const MINOR_FAMILY: SpellingStrategy = SpellingStrategy::LetterCycle(LetterCycleRule::MinorFamily);

const fn table(t: SpellingTable) -> SpellingStrategy {
    SpellingStrategy::Table(t)
}

use ScaleCategory::{DiatonicMode, HarmonicMinorMode, MelodicMinorMode, PentatonicBlues, Symmetric};

/// Rows are in declaration order of [`ScaleTypeId`], so lookup is an index.
static REGISTRY: [ScaleTypeInfo; 33] = [
    info(ScaleTypeId::Major, "major", "Major", &[2, 2, 1, 2, 2, 2, 1], STRICT, DiatonicMode),
    info(ScaleTypeId::Ionian, "ionian", "Ionian", &[2, 2, 1, 2, 2, 2, 1], STRICT, DiatonicMode),
    info(ScaleTypeId::Dorian, "dorian", "Dorian", &[2, 1, 2, 2, 2, 1, 2], STRICT, DiatonicMode),
    info(
        ScaleTypeId::Phrygian,
        "phrygian",
        "Phrygian",
        &[1, 2, 2, 2, 1, 2, 2],
        STRICT,
        DiatonicMode,
    ),
    info(ScaleTypeId::Lydian, "lydian", "Lydian", &[2, 2, 2, 1, 2, 2, 1], STRICT, DiatonicMode),
    info(
        ScaleTypeId::Mixolydian,
        "mixolydian",
        "Mixolydian",
        &[2, 2, 1, 2, 2, 1, 2],
        STRICT,
        DiatonicMode,
    ),
    info(
        ScaleTypeId::Minor,
        "minor",
        "Natural Minor",
        &[2, 1, 2, 2, 1, 2, 2],
        STRICT,
        DiatonicMode,
    ),
    info(ScaleTypeId::Aeolian, "aeolian", "Aeolian", &[2, 1, 2, 2, 1, 2, 2], STRICT, DiatonicMode),
    info(ScaleTypeId::Locrian, "locrian", "Locrian", &[1, 2, 2, 1, 2, 2, 2], STRICT, DiatonicMode),
    info(
        ScaleTypeId::HarmonicMinor,
        "harmonic-minor",
        "Harmonic Minor",
        &[2, 1, 2, 2, 1, 3, 1],
        MINOR_FAMILY,
        HarmonicMinorMode,
    ),
    info(
        ScaleTypeId::LocrianNatural6,
        "locrian-natural-6",
        "Locrian \u{266E}6",
        &[1, 2, 2, 1, 3, 1, 2],
        MINOR_FAMILY,
        HarmonicMinorMode,
    ),
    info(
        ScaleTypeId::IonianSharp5,
        "ionian-sharp-5",
        "Ionian #5",
        &[2, 2, 1, 3, 1, 2, 1],
        MINOR_FAMILY,
        HarmonicMinorMode,
    ),
    info(
        ScaleTypeId::DorianSharp4,
        "dorian-sharp-4",
        "Dorian #4",
        &[2, 1, 3, 1, 2, 1, 2],
        MINOR_FAMILY,
        HarmonicMinorMode,
    ),
    info(
        ScaleTypeId::PhrygianDominant,
        "phrygian-dominant",
        "Phrygian Dominant",
        &[1, 3, 1, 2, 1, 2, 2],
        MINOR_FAMILY,
        HarmonicMinorMode,
    ),
    info(
        ScaleTypeId::LydianSharp2,
        "lydian-sharp-2",
        "Lydian #2",
        &[3, 1, 2, 1, 2, 2, 1],
        MINOR_FAMILY,
        HarmonicMinorMode,
    ),
    info(
        ScaleTypeId::SuperLocrianBb7,
        "super-locrian-bb7",
        "Super Locrian bb7",
        &[1, 2, 1, 2, 2, 1, 3],
        MINOR_FAMILY,
        HarmonicMinorMode,
    ),
    info(
        ScaleTypeId::MelodicMinor,
        "melodic-minor",
        "Melodic Minor",
        &[2, 1, 2, 2, 2, 2, 1],
        MINOR_FAMILY,
        MelodicMinorMode,
    ),
    info(
        ScaleTypeId::DorianFlat2,
        "dorian-flat-2",
        "Dorian b2",
        &[1, 2, 2, 2, 2, 1, 2],
        MINOR_FAMILY,
        MelodicMinorMode,
    ),
    info(
        ScaleTypeId::LydianAugmented,
        "lydian-augmented",
        "Lydian Augmented",
        &[2, 2, 2, 2, 1, 2, 1],
        MINOR_FAMILY,
        MelodicMinorMode,
    ),
    info(
        ScaleTypeId::LydianDominant,
        "lydian-dominant",
        "Lydian Dominant",
        &[2, 2, 2, 1, 2, 1, 2],
        MINOR_FAMILY,
        MelodicMinorMode,
    ),
    info(
        ScaleTypeId::MixolydianFlat6,
        "mixolydian-flat-6",
        "Mixolydian b6",
        &[2, 2, 1, 2, 1, 2, 2],
        MINOR_FAMILY,
        MelodicMinorMode,
    ),
    info(
        ScaleTypeId::LocrianNatural2,
        "locrian-natural-2",
        "Locrian \u{266E}2",
        &[2, 1, 2, 1, 2, 2, 2],
        MINOR_FAMILY,
        MelodicMinorMode,
    ),
    info(
        ScaleTypeId::Altered,
        "altered",
        "Altered (Super Locrian)",
        &[1, 2, 1, 2, 2, 2, 2],
        table(SpellingTable::Altered),
        MelodicMinorMode,
    ),
    info(
        ScaleTypeId::PentatonicMajor,
        "pentatonic-major",
        "Major Pentatonic",
        &[2, 2, 3, 2, 3],
        table(SpellingTable::Pentatonic(PentatonicFlavor::Major)),
        PentatonicBlues,
    ),
    info(
        ScaleTypeId::PentatonicMinor,
        "pentatonic-minor",
        "Minor Pentatonic",
        &[3, 2, 2, 3, 2],
        table(SpellingTable::Pentatonic(PentatonicFlavor::Minor)),
        PentatonicBlues,
    ),
    info(
        ScaleTypeId::BluesMajor,
        "blues-major",
        "Major Blues",
        &[2, 1, 1, 3, 2, 3],
        table(SpellingTable::BluesMajor),
        PentatonicBlues,
    ),
    info(
        ScaleTypeId::BluesMinor,
        "blues-minor",
        "Minor Blues",
        &[3, 2, 1, 1, 3, 2],
        table(SpellingTable::BluesMinor),
        PentatonicBlues,
    ),
    info(
        ScaleTypeId::BluesHybrid,
        "blues-hybrid",
        "Hybrid Blues",
        &[2, 1, 1, 1, 1, 1, 2, 1, 2],
        table(SpellingTable::BluesHybrid),
        PentatonicBlues,
    ),
    info(
        ScaleTypeId::Chromatic,
        "chromatic",
        "Chromatic",
        &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        table(SpellingTable::ChromaticSharp),
        Symmetric,
    ),
    info(
        ScaleTypeId::WholeTone,
        "whole-tone",
        "Whole Tone",
        &[2, 2, 2, 2, 2, 2],
        table(SpellingTable::WholeTone),
        Symmetric,
    ),
    info(
        ScaleTypeId::Augmented,
        "augmented",
        "Augmented",
        &[3, 1, 3, 1, 3, 1],
        table(SpellingTable::Augmented),
        Symmetric,
    ),
    info(
        ScaleTypeId::WholeHalfDiminished,
        "wh-diminished",
        "Diminished (W-H)",
        &[2, 1, 2, 1, 2, 1, 2, 1],
        table(SpellingTable::Diminished(DiminishedForm::WholeHalf)),
        Symmetric,
    ),
    info(
        ScaleTypeId::HalfWholeDiminished,
        "hw-diminished",
        "Diminished (H-W)",
        &[1, 2, 1, 2, 1, 2, 1, 2],
        table(SpellingTable::Diminished(DiminishedForm::HalfWhole)),
        Symmetric,
    ),
];

/// Collapse a user-supplied identifier for comparison
fn normalize_name(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-', '_'], "")
}

impl ScaleTypeId {
    /// Every built-in scale type, in registry order
    pub fn all() -> impl Iterator<Item = ScaleTypeId> {
        REGISTRY.iter().map(|row| row.id)
    }

    /// Registry row for this scale type
    pub fn info(self) -> &'static ScaleTypeInfo {
        &REGISTRY[self as usize]
    }

    pub fn slug(self) -> &'static str {
        self.info().slug
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn formula(self) -> &'static [u8] {
        self.info().formula
    }

    pub fn strategy(self) -> SpellingStrategy {
        self.info().strategy
    }

    pub fn category(self) -> ScaleCategory {
        self.info().category
    }

    /// Parse a scale type from its slug or a common alias
    pub fn from_str(s: &str) -> Option<Self> {
        let key = normalize_name(s);
        if key.is_empty() {
            return None;
        }

        if let Some(row) = REGISTRY.iter().find(|row| normalize_name(row.slug) == key) {
            return Some(row.id);
        }

        match key.as_str() {
            "naturalminor" => Some(ScaleTypeId::Minor),
            "locriannat6" | "locrian#6" | "locriansharp6" => Some(ScaleTypeId::LocrianNatural6),
            "ionian#5" | "ionianaugmented" => Some(ScaleTypeId::IonianSharp5),
            "dorian#4" | "ukrainiandorian" => Some(ScaleTypeId::DorianSharp4),
            "spanishphrygian" | "phrygianmajor" => Some(ScaleTypeId::PhrygianDominant),
            "lydian#2" => Some(ScaleTypeId::LydianSharp2),
            "ultralocrian" | "superlocriandiminished" => Some(ScaleTypeId::SuperLocrianBb7),
            "jazzminor" => Some(ScaleTypeId::MelodicMinor),
            "dorianb2" | "phrygiannatural6" | "phrygian#6" => Some(ScaleTypeId::DorianFlat2),
            "lydian#5" => Some(ScaleTypeId::LydianAugmented),
            "overtone" | "lydianb7" | "acoustic" => Some(ScaleTypeId::LydianDominant),
            "mixolydianb6" | "aeoliandominant" => Some(ScaleTypeId::MixolydianFlat6),
            "locriannat2" | "locrian#2" | "locriansharp2" => Some(ScaleTypeId::LocrianNatural2),
            "superlocrian" | "alteredscale" | "altereddominant" => Some(ScaleTypeId::Altered),
            "majorpentatonic" | "pentatonic" => Some(ScaleTypeId::PentatonicMajor),
            "minorpentatonic" => Some(ScaleTypeId::PentatonicMinor),
            "majorblues" => Some(ScaleTypeId::BluesMajor),
            "blues" | "minorblues" => Some(ScaleTypeId::BluesMinor),
            "hybridblues" => Some(ScaleTypeId::BluesHybrid),
            "diminished" | "diminishedwh" | "wholehalf" => Some(ScaleTypeId::WholeHalfDiminished),
            "diminishedhw" | "halfwhole" | "dominantdiminished" => {
                Some(ScaleTypeId::HalfWholeDiminished)
            }
            _ => None,
        }
    }

    /// Lydian and the modes that share its raised fourth
    pub fn is_lydian_derived(self) -> bool {
        matches!(
            self,
            ScaleTypeId::Lydian
                | ScaleTypeId::LydianDominant
                | ScaleTypeId::LydianAugmented
                | ScaleTypeId::LydianSharp2
                | ScaleTypeId::DorianSharp4
        )
    }
}

impl fmt::Display for ScaleTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Identity of a resolved scale: built-in, user-defined, or unknown
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    Builtin(ScaleTypeId),
    Custom(String),
    Unregistered(String),
}

impl ScaleKind {
    pub fn builtin(&self) -> Option<ScaleTypeId> {
        match self {
            ScaleKind::Builtin(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleKind::Builtin(id) => write!(f, "{}", id),
            ScaleKind::Custom(name) | ScaleKind::Unregistered(name) => write!(f, "{}", name),
        }
    }
}

/// Spelling requested by a user-defined scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomSpelling {
    /// One letter per degree; only sensible for 7-note scales
    #[default]
    LetterCycle,
    Sharps,
    Flats,
}

impl CustomSpelling {
    pub fn strategy(self) -> SpellingStrategy {
        match self {
            CustomSpelling::LetterCycle => STRICT,
            CustomSpelling::Sharps => table(SpellingTable::ChromaticSharp),
            CustomSpelling::Flats => table(SpellingTable::ChromaticFlat),
        }
    }
}

/// Custom scale definitions that can be loaded from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomScaleDefinition {
    /// Name of the scale
    pub name: String,
    /// Semitone steps, one per degree
    pub formula: Vec<u8>,
    /// Spelling strategy
    #[serde(default)]
    pub spelling: CustomSpelling,
    /// Category reported for the scale
    #[serde(default)]
    pub category: ScaleCategory,
}

/// A scale type resolved for building: identity, formula and strategy
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleEntry {
    pub kind: ScaleKind,
    pub formula: Vec<u8>,
    pub strategy: SpellingStrategy,
    pub category: ScaleCategory,
}

impl From<ScaleTypeId> for ScaleEntry {
    fn from(id: ScaleTypeId) -> Self {
        let info = id.info();
        Self {
            kind: ScaleKind::Builtin(id),
            formula: info.formula.to_vec(),
            strategy: info.strategy,
            category: info.category,
        }
    }
}

/// Built-in table plus user-defined scales
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    custom_scales: HashMap<String, CustomScaleDefinition>,
}

impl ScaleRegistry {
    /// Create a registry with only the built-in scale types
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom scale. Names are matched after normalization.
    pub fn register(&mut self, def: CustomScaleDefinition) {
        self.custom_scales.insert(normalize_name(&def.name), def);
    }

    /// Look up a custom scale by name
    pub fn custom(&self, name: &str) -> Option<&CustomScaleDefinition> {
        self.custom_scales.get(&normalize_name(name))
    }

    /// Resolve a scale name. Never fails: unknown names get the fallback
    /// strategy for `step_count` steps and an empty formula.
    pub fn resolve(&self, name: &str, step_count: usize) -> ScaleEntry {
        if let Some(id) = ScaleTypeId::from_str(name) {
            return id.into();
        }

        if let Some(def) = self.custom(name) {
            return ScaleEntry {
                kind: ScaleKind::Custom(def.name.clone()),
                formula: def.formula.clone(),
                strategy: def.spelling.strategy(),
                category: def.category,
            };
        }

        debug!(scale_type = name, "unregistered scale type, using fallback spelling");
        ScaleEntry {
            kind: ScaleKind::Unregistered(name.trim().to_string()),
            formula: Vec::new(),
            strategy: SpellingStrategy::fallback_for(step_count),
            category: ScaleCategory::Exotic,
        }
    }

    /// List all available scale names
    pub fn available_scales(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_scales.values().map(|d| d.name.clone()).collect();
        names.extend(ScaleTypeId::all().map(|id| id.slug().to_string()));
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_rows_match_ids() {
        for (i, row) in REGISTRY.iter().enumerate() {
            assert_eq!(row.id as usize, i, "row {} is out of order", row.slug);
            assert_eq!(row.id.info().slug, row.slug);
        }
    }

    #[test]
    fn test_formulas_cycle_an_octave() {
        for row in REGISTRY.iter() {
            let total: u32 = row.formula.iter().map(|&s| s as u32).sum();
            assert_eq!(total, 12, "{} does not sum to an octave", row.slug);
            assert!((5..=12).contains(&row.formula.len()), "{}", row.slug);
        }
    }

    #[test]
    fn test_letter_cycle_only_for_seven_notes() {
        for row in REGISTRY.iter() {
            if let SpellingStrategy::LetterCycle(_) = row.strategy {
                assert_eq!(row.formula.len(), 7, "{}", row.slug);
            }
        }
    }

    #[test]
    fn test_scale_type_from_str() {
        assert_eq!(ScaleTypeId::from_str("major"), Some(ScaleTypeId::Major));
        assert_eq!(ScaleTypeId::from_str("Harmonic Minor"), Some(ScaleTypeId::HarmonicMinor));
        assert_eq!(ScaleTypeId::from_str("lydian_dominant"), Some(ScaleTypeId::LydianDominant));
        assert_eq!(ScaleTypeId::from_str("wh-diminished"), Some(ScaleTypeId::WholeHalfDiminished));
        assert_eq!(ScaleTypeId::from_str("super-locrian"), Some(ScaleTypeId::Altered));
        assert_eq!(ScaleTypeId::from_str("blues"), Some(ScaleTypeId::BluesMinor));
        assert_eq!(ScaleTypeId::from_str("Lydian #2"), Some(ScaleTypeId::LydianSharp2));
        assert_eq!(ScaleTypeId::from_str("unknown"), None);
        assert_eq!(ScaleTypeId::from_str(""), None);
    }

    #[test]
    fn test_every_slug_round_trips() {
        for id in ScaleTypeId::all() {
            assert_eq!(ScaleTypeId::from_str(id.slug()), Some(id));
        }
    }

    #[test]
    fn test_strategy_tags() {
        assert_eq!(ScaleTypeId::Dorian.strategy().tag(), "diatonic-letter-cycle");
        assert_eq!(ScaleTypeId::MelodicMinor.strategy().tag(), "diatonic-letter-cycle");
        assert_eq!(ScaleTypeId::WholeTone.strategy().tag(), "table-lookup");
        assert_eq!(ScaleTypeId::Altered.strategy().tag(), "table-lookup");
    }

    #[test]
    fn test_lydian_derived() {
        assert!(ScaleTypeId::Lydian.is_lydian_derived());
        assert!(ScaleTypeId::DorianSharp4.is_lydian_derived());
        assert!(!ScaleTypeId::Dorian.is_lydian_derived());
        assert!(!ScaleTypeId::IonianSharp5.is_lydian_derived());
    }

    #[test]
    fn test_registry_resolves_custom_scale() {
        let mut registry = ScaleRegistry::new();
        registry.register(CustomScaleDefinition {
            name: "Hungarian Minor".to_string(),
            formula: vec![2, 1, 3, 1, 1, 3, 1],
            spelling: CustomSpelling::LetterCycle,
            category: ScaleCategory::Exotic,
        });

        let entry = registry.resolve("hungarian_minor", 7);
        assert_eq!(entry.kind, ScaleKind::Custom("Hungarian Minor".to_string()));
        assert_eq!(entry.formula, vec![2, 1, 3, 1, 1, 3, 1]);
        assert_eq!(entry.strategy.tag(), "diatonic-letter-cycle");

        assert!(registry
            .available_scales()
            .contains(&"Hungarian Minor".to_string()));
    }

    #[test]
    fn test_registry_builtin_wins_over_custom() {
        let mut registry = ScaleRegistry::new();
        registry.register(CustomScaleDefinition {
            name: "dorian".to_string(),
            formula: vec![1, 1, 1, 1, 1, 1, 6],
            spelling: CustomSpelling::Sharps,
            category: ScaleCategory::Exotic,
        });
        assert_eq!(
            registry.resolve("dorian", 7).kind,
            ScaleKind::Builtin(ScaleTypeId::Dorian)
        );
    }

    #[test]
    fn test_registry_fallback() {
        let registry = ScaleRegistry::new();

        let seven = registry.resolve("bebop-ish", 7);
        assert_eq!(seven.kind, ScaleKind::Unregistered("bebop-ish".to_string()));
        assert_eq!(
            seven.strategy,
            SpellingStrategy::LetterCycle(LetterCycleRule::Strict)
        );

        let eight = registry.resolve("bebop-ish", 8);
        assert_eq!(
            eight.strategy,
            SpellingStrategy::Table(SpellingTable::ChromaticSharp)
        );
    }
}
