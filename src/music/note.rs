// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and spelled note names.
//!
//! A [`PitchClass`] is one of the twelve equal-tempered tone categories,
//! independent of spelling. A [`NoteName`] is a letter plus up to two
//! accidentals; every note name resolves to exactly one pitch class.

use std::fmt;

/// Semitone offset type
pub type Semitones = i32;

/// Pitch class (0-11, 0 = C)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, wrapping any integer into 0-11
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    /// Numeric value (0-11)
    pub fn value(self) -> u8 {
        self.0
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Get interval in semitones to another pitch class (ascending)
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 as i16 - self.0 as i16).rem_euclid(12) as u8
    }

    /// Signed distance to another pitch class, wrapped into -6..=5
    pub fn signed_distance_to(self, other: PitchClass) -> i8 {
        ((other.0 as i16 - self.0 as i16 + 6).rem_euclid(12) - 6) as i8
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The seven letters of the musical alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in alphabet order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position within [`Letter::ALL`]
    pub fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Pitch class of the letter without accidentals
    pub fn natural_pitch_class(self) -> PitchClass {
        let pc = match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        };
        PitchClass::new(pc)
    }

    /// Walk forward through the alphabet, wrapping G -> A
    pub fn advance(self, steps: usize) -> Letter {
        Letter::ALL[(self.index() + steps) % 7]
    }

    /// The letter whose natural pitch class is `pc`, if any
    pub fn from_natural(pc: PitchClass) -> Option<Letter> {
        Letter::ALL
            .into_iter()
            .find(|l| l.natural_pitch_class() == pc)
    }

    /// Parse a letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Accidental attached to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone offset from the natural letter
    pub fn offset(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Accidental for an offset; None outside -2..=2
    pub fn from_offset(offset: i8) -> Option<Self> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Written form used in note names
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    pub fn is_double(self) -> bool {
        matches!(self, Accidental::DoubleFlat | Accidental::DoubleSharp)
    }
}

/// A spelled note: letter plus accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    letter: Letter,
    accidental: Accidental,
}

impl NoteName {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    pub const fn sharp(letter: Letter) -> Self {
        Self::new(letter, Accidental::Sharp)
    }

    pub const fn flat(letter: Letter) -> Self {
        Self::new(letter, Accidental::Flat)
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Resolve to a pitch class. Total for every note name.
    pub fn pitch_class(self) -> PitchClass {
        self.letter
            .natural_pitch_class()
            .transpose(self.accidental.offset() as Semitones)
    }

    /// Spell `pitch_class` on `letter`.
    ///
    /// Returns None when the letter is more than two semitones away from
    /// the target.
    pub fn spell(letter: Letter, pitch_class: PitchClass) -> Option<Self> {
        let offset = letter.natural_pitch_class().signed_distance_to(pitch_class);
        Accidental::from_offset(offset).map(|accidental| NoteName::new(letter, accidental))
    }

    /// Parse a note name (e.g. "C", "f#", "Bb", "C##", "Ebb", "G♭", "Fx")
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = Letter::from_char(chars.next()?)?;

        let mut offset: i8 = 0;
        let mut direction: i8 = 0;
        for c in chars {
            let (step, dir) = match c {
                '#' | '♯' => (1, 1),
                'x' | '𝄪' => (2, 1),
                'b' | '♭' => (-1, -1),
                '𝄫' => (-2, -1),
                _ => return None,
            };
            // Mixed sharps and flats are not a spelling
            if direction != 0 && direction != dir {
                return None;
            }
            direction = dir;
            offset += step;
            if offset.abs() > 2 {
                return None;
            }
        }

        Accidental::from_offset(offset).map(|accidental| NoteName::new(letter, accidental))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.symbol())
    }
}
