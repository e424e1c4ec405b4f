//! # Key Names
//!
//! Maps key names such as `C`, `F#`, `B♭♭` or (in regional notation) `H` to
//! a [`Key`].
//!
//! ## Tables
//! Each [`Notation`] owns one [`KeyTable`], built on first use and shared for
//! the rest of the process. Entries are sorted longest first, so `Bbb` is
//! tried before `Bb` and `Bb` before `B`.
//!
//! ## Example
//! ```rust
//! use fretchord::{parse_key, Key, Notation};
//!
//! let (key, len) = parse_key("F#m7", Notation::Standard.key_table(), 0).unwrap();
//! assert_eq!(key, Key::FSharp);
//! assert_eq!(len, 2);
//!
//! let (key, _) = parse_key("H7", Notation::H.key_table(), 0).unwrap();
//! assert_eq!(key, Key::B);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::ChordError;

/// A named key, stored as its transposition from C in semitones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Key {
    C,
    G,
    D,
    A,
    E,
    B,
    FSharp,
    CSharp,
    GSharp,
    DSharp,
    ASharp,
    ESharp,
    F,
    BFlat,
    EFlat,
    AFlat,
    DFlat,
    GFlat,
    CFlat,
    FFlat,
    BDoubleFlat,
    EDoubleFlat,
    ADoubleFlat,
}

impl Key {
    pub const ALL: [Key; 23] = [
        Key::C,
        Key::G,
        Key::D,
        Key::A,
        Key::E,
        Key::B,
        Key::FSharp,
        Key::CSharp,
        Key::GSharp,
        Key::DSharp,
        Key::ASharp,
        Key::ESharp,
        Key::F,
        Key::BFlat,
        Key::EFlat,
        Key::AFlat,
        Key::DFlat,
        Key::GFlat,
        Key::CFlat,
        Key::FFlat,
        Key::BDoubleFlat,
        Key::EDoubleFlat,
        Key::ADoubleFlat,
    ];

    /// Signed distance from C in semitones, in `-11..=11`.
    pub fn transposition(self) -> i8 {
        match self {
            Key::C => 0,
            Key::G => 7,
            Key::D => 2,
            Key::A => 9,
            Key::E => 4,
            Key::B => 11,
            Key::FSharp => 6,
            Key::CSharp => 1,
            Key::GSharp => 8,
            Key::DSharp => 3,
            Key::ASharp => 10,
            Key::ESharp => 5,
            Key::F => -7,
            Key::BFlat => -2,
            Key::EFlat => -9,
            Key::AFlat => -4,
            Key::DFlat => -11,
            Key::GFlat => -6,
            Key::CFlat => -1,
            Key::FFlat => -8,
            Key::BDoubleFlat => -3,
            Key::EDoubleFlat => -10,
            Key::ADoubleFlat => -5,
        }
    }

    /// Pitch class of the key, `0..12` with C = 0.
    pub fn pitch_class(self) -> u8 {
        self.transposition().rem_euclid(12) as u8
    }

    /// Letter and accidental count: positive for sharps, negative for flats.
    fn spelling(self) -> (char, i8) {
        match self {
            Key::C => ('C', 0),
            Key::G => ('G', 0),
            Key::D => ('D', 0),
            Key::A => ('A', 0),
            Key::E => ('E', 0),
            Key::B => ('B', 0),
            Key::FSharp => ('F', 1),
            Key::CSharp => ('C', 1),
            Key::GSharp => ('G', 1),
            Key::DSharp => ('D', 1),
            Key::ASharp => ('A', 1),
            Key::ESharp => ('E', 1),
            Key::F => ('F', 0),
            Key::BFlat => ('B', -1),
            Key::EFlat => ('E', -1),
            Key::AFlat => ('A', -1),
            Key::DFlat => ('D', -1),
            Key::GFlat => ('G', -1),
            Key::CFlat => ('C', -1),
            Key::FFlat => ('F', -1),
            Key::BDoubleFlat => ('B', -2),
            Key::EDoubleFlat => ('E', -2),
            Key::ADoubleFlat => ('A', -2),
        }
    }

    fn spell(self, notation: Notation, sharp: &str, flat: &str) -> String {
        let (letter, accidentals) = self.spelling();
        let letter = match (notation, self) {
            (Notation::H, Key::B) => 'H',
            _ => letter,
        };
        let glyph = if accidentals > 0 { sharp } else { flat };
        let mut name = String::from(letter);
        for _ in 0..accidentals.unsigned_abs() {
            name.push_str(glyph);
        }
        name
    }

    /// Canonical name with unicode accidentals, e.g. `F♯`, `B♭♭` or `H`.
    pub fn name(self, notation: Notation) -> String {
        self.spell(notation, "♯", "♭")
    }

    fn ascii_name(self, notation: Notation) -> String {
        self.spell(notation, "#", "b")
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(Notation::Standard))
    }
}

/// How the pitch class 11 is written.
///
/// - `Standard`: `B` is B, `Bb` is B flat
/// - `H`: `H` is B, a bare `B` is B flat (central European usage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Standard,
    H,
}

impl Notation {
    /// The shared key table for this notation.
    pub fn key_table(self) -> &'static KeyTable {
        static STANDARD: OnceLock<KeyTable> = OnceLock::new();
        static REGIONAL: OnceLock<KeyTable> = OnceLock::new();
        match self {
            Notation::Standard => STANDARD.get_or_init(|| KeyTable::build(Notation::Standard)),
            Notation::H => REGIONAL.get_or_init(|| KeyTable::build(Notation::H)),
        }
    }
}

impl FromStr for Notation {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "b" | "english" => Ok(Notation::Standard),
            "h" | "german" => Ok(Notation::H),
            other => Err(ChordError::ConfigError(format!("Unknown notation: {}", other))),
        }
    }
}

/// Ordered list of `(literal, key)` pairs, longest literal first.
#[derive(Debug, Clone)]
pub struct KeyTable {
    entries: Vec<(String, Key)>,
}

impl KeyTable {
    fn build(notation: Notation) -> Self {
        let mut entries: Vec<(String, Key)> = Vec::new();
        for key in Key::ALL {
            entries.push((key.name(notation), key));
        }
        for key in Key::ALL {
            let ascii = key.ascii_name(notation);
            if ascii.chars().count() > 1 {
                entries.push((ascii, key));
            }
        }
        if notation == Notation::H {
            entries.push(("B".to_string(), Key::BFlat));
        }
        // Stable, so equal-length entries keep their insertion order
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Key)] {
        &self.entries
    }

    /// First entry whose literal starts `text` at byte offset `start`.
    fn lookup(&self, text: &str, start: usize) -> Option<(Key, usize)> {
        let rest = text.get(start..)?;
        self.entries
            .iter()
            .find(|(literal, _)| rest.starts_with(literal.as_str()))
            .map(|(literal, key)| (*key, literal.len()))
    }
}

/// Read a key name from `text` at byte offset `start`.
///
/// Returns the key and the byte length of the matched name.
pub fn parse_key(text: &str, table: &KeyTable, start: usize) -> Result<(Key, usize), ChordError> {
    table
        .lookup(text, start)
        .ok_or_else(|| ChordError::KeyNotRecognized {
            input: text.to_string(),
            position: start,
        })
}
