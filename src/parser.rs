//! # Chord Name Parser
//!
//! Turns text such as `Cm7`, `G/B` or `Asus4` into a [`Chord`].
//!
//! ## Grammar
//! A chord name is a key (see [`crate::key`]) followed by any number of
//! modifications. Whitespace anywhere in the input is ignored.
//!
//! After the key, the parser repeatedly tries an ordered list of rules at the
//! cursor. The first rule that recognises one of its spellings changes the
//! chord and moves the cursor past that spelling. Parsing stops when no rule
//! matches or the input is used up.
//!
//! | Rule | Spellings | Effect (root-relative) |
//! |------|-----------|------------------------|
//! | diminished fifth | `dim5` `-` `5-` | P5 → tritone |
//! | diminished | `dim7` `dim` | M3 → m3, P5 → tritone, + M6 |
//! | seventh | `7` | + m7 |
//! | suspended | `sus` | − M3 |
//! | added tone | `2` `4` `6` `add9` `add11` `add13` `9` `11` `13` | + M2 / P4 / M6, bare 9, 11, 13 also + m7 |
//! | major seventh | `maj7` `maj` `M7` `Δ` `⑦` | + M7 |
//! | minor | `moll` `mi` `m` | M3 → m3 |
//! | augmented | `aug5` `aug` `+` `5+` | P5 → m6 |
//! | slash bass | `/` key | bass, + M7 |
//!
//! Text the rules do not recognise is not an error: the chord parsed so far is
//! returned with the consumed prefix as its display string. Only a missing
//! leading key fails.
//!
//! `sus` only removes the major third, so `Cmsus4` keeps its minor third.
//! A slash bass also adds the major seventh; existing chord sheets rely on it.
//!
//! ## Example
//! ```rust
//! use fretchord::{parse, Interval, Notation};
//!
//! let (chord, display) = parse("Am7 (intro)", Notation::Standard)?;
//! assert_eq!(display, "Am7");
//! assert!(chord.intervals.contains(Interval::Min3));
//! assert!(chord.intervals.contains(Interval::Min7));
//! # Ok::<(), fretchord::ChordError>(())
//! ```

use tracing::{debug, trace};

use crate::chord::Chord;
use crate::error::ChordError;
use crate::interval::Interval;
use crate::key::{parse_key, KeyTable, Notation};

/// Cursor over the whitespace-free input plus the chord being built.
struct Parser {
    text: String,
    index: usize,
    chord: Chord,
    table: &'static KeyTable,
}

/// A modification rule. Returns `true` if it matched and changed the parser.
type Rule = fn(&mut Parser) -> bool;

const FULL_RULES: &[Rule] = &[
    Parser::diminished_fifth,
    Parser::diminished,
    Parser::seventh,
    Parser::suspended,
    Parser::added_tone,
    Parser::major_seventh,
    Parser::minor,
    Parser::augmented,
    Parser::slash_bass,
];

const SIMPLIFIED_RULES: &[Rule] = &[
    Parser::ignored_lookalike,
    Parser::diminished,
    Parser::seventh,
    Parser::minor,
    Parser::slash_bass,
    Parser::ignored,
];

/// Spellings consumed without effect by the simplified rule set.
const IGNORED: &[&str] = &[
    "moll", "mi", "m", "maj7", "maj", "M7", "Δ", "⑦", "7", "dim5", "5-", "dim", "sus", "2", "4", "6",
    "9", "11", "13", "aug5", "5+", "aug", "+", "add9", "add11", "add13",
];

impl Parser {
    fn rest(&self) -> &str {
        &self.text[self.index..]
    }

    /// Advance past the first of `aliases` found at the cursor.
    fn accept(&mut self, aliases: &[&'static str]) -> Option<&'static str> {
        let rest = self.rest();
        let alias = aliases.iter().copied().find(|a| rest.starts_with(a))?;
        self.index += alias.len();
        Some(alias)
    }

    fn diminished_fifth(&mut self) -> bool {
        self.accept(&["dim5", "-", "5-"])
            .map(|_| self.chord.make_diminished_fifth())
            .is_some()
    }

    fn diminished(&mut self) -> bool {
        self.accept(&["dim7", "dim"])
            .map(|_| {
                self.chord.make_minor();
                self.chord.make_diminished_fifth();
                // diminished seventh = major sixth
                self.chord.intervals.insert(Interval::Maj6);
            })
            .is_some()
    }

    fn seventh(&mut self) -> bool {
        self.accept(&["7"])
            .map(|_| self.chord.intervals.insert(Interval::Min7))
            .is_some()
    }

    fn suspended(&mut self) -> bool {
        self.accept(&["sus"])
            .map(|_| self.chord.intervals.remove(Interval::Maj3))
            .is_some()
    }

    fn added_tone(&mut self) -> bool {
        let Some(alias) = self.accept(&["2", "4", "6", "add9", "add11", "add13", "9", "11", "13"])
        else {
            return false;
        };
        let interval = match alias {
            "2" | "9" | "add9" => Interval::Maj2,
            "4" | "11" | "add11" => Interval::P4,
            _ => Interval::Maj6,
        };
        self.chord.intervals.insert(interval);
        if matches!(alias, "9" | "11" | "13") {
            self.chord.intervals.insert(Interval::Min7);
        }
        true
    }

    fn major_seventh(&mut self) -> bool {
        self.accept(&["maj7", "maj", "M7", "Δ", "⑦"])
            .map(|_| self.chord.intervals.insert(Interval::Maj7))
            .is_some()
    }

    fn minor(&mut self) -> bool {
        self.accept(&["moll", "mi", "m"])
            .map(|_| self.chord.make_minor())
            .is_some()
    }

    fn augmented(&mut self) -> bool {
        self.accept(&["aug5", "aug", "+", "5+"])
            .map(|_| {
                self.chord.intervals.remove(Interval::P5);
                self.chord.intervals.insert(Interval::Min6);
            })
            .is_some()
    }

    fn slash_bass(&mut self) -> bool {
        if !self.rest().starts_with('/') {
            return false;
        }
        let Ok((bass, len)) = parse_key(&self.text, self.table, self.index + 1) else {
            trace!(index = self.index, "slash without a bass key");
            return false;
        };
        self.index += 1 + len;
        let root = self.chord.key.transposition();
        self.chord.bass = Some((bass.transposition() - root).rem_euclid(12) as u8);
        self.chord.intervals.insert(Interval::Maj7);
        true
    }

    /// Spellings that start like a kept rule (`maj` like `m`, `dim5` like `dim`).
    fn ignored_lookalike(&mut self) -> bool {
        self.accept(&["maj7", "maj", "dim5"]).is_some()
    }

    fn ignored(&mut self) -> bool {
        self.accept(IGNORED).is_some()
    }

    fn run(&mut self, rules: &[Rule]) {
        while self.index < self.text.len() {
            if !rules.iter().any(|rule| rule(self)) {
                trace!(rest = self.rest(), "no modification matches");
                break;
            }
        }
    }
}

fn parse_with(text: &str, notation: Notation, rules: &[Rule]) -> Result<(Chord, String), ChordError> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let table = notation.key_table();
    let (key, len) = parse_key(&stripped, table, 0)?;

    let mut parser = Parser {
        text: stripped,
        index: len,
        chord: Chord::major(key),
        table,
    };
    parser.run(rules);

    let Parser { text: stripped, index, chord, .. } = parser;
    let consumed = stripped[..index].to_string();
    debug!(input = %text, display = %consumed, intervals = chord.intervals.bits(), "parsed chord");
    Ok((chord, consumed))
}

/// Parse a chord name with every modification rule.
///
/// Returns the root-relative chord and the consumed part of the
/// whitespace-free input.
pub fn parse(text: &str, notation: Notation) -> Result<(Chord, String), ChordError> {
    parse_with(text, notation, FULL_RULES)
}

/// Parse a chord name keeping only minor, seventh, diminished and slash bass.
///
/// Other known modifications are consumed and dropped, so `Cmaj9` reads as a
/// plain C major triad displayed as `Cmaj9`.
pub fn parse_simplified(text: &str, notation: Notation) -> Result<(Chord, String), ChordError> {
    parse_with(text, notation, SIMPLIFIED_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::IntervalSet;
    use crate::key::Key;

    fn intervals(text: &str) -> Vec<u8> {
        let (chord, _) = parse(text, Notation::Standard).unwrap();
        chord.intervals.semitones().collect()
    }

    #[test]
    fn test_major_triad() {
        let (chord, display) = parse("C", Notation::Standard).unwrap();
        assert_eq!(display, "C");
        assert_eq!(chord.key, Key::C);
        assert_eq!(chord.resolved().intervals, IntervalSet::from_semitones(&[0, 4, 7]));
    }

    #[test]
    fn test_minor_seventh() {
        assert_eq!(intervals("Cm7"), vec![0, 3, 7, 10]);
        assert_eq!(intervals("Cmi7"), vec![0, 3, 7, 10]);
        assert_eq!(intervals("Cmoll7"), vec![0, 3, 7, 10]);
    }

    #[test]
    fn test_major_seventh_spellings() {
        for text in ["Cmaj7", "Cmaj", "CM7", "CΔ", "C⑦"] {
            assert_eq!(intervals(text), vec![0, 4, 7, 11], "{}", text);
        }
    }

    #[test]
    fn test_diminished() {
        assert_eq!(intervals("Cdim"), vec![0, 3, 6, 9]);
        assert_eq!(intervals("Cdim7"), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_diminished_fifth_only() {
        assert_eq!(intervals("C5-"), vec![0, 4, 6]);
        assert_eq!(intervals("Cm7-"), vec![0, 3, 6, 10]);
        assert_eq!(intervals("Cdim5"), vec![0, 4, 6]);
    }

    #[test]
    fn test_suspended() {
        assert_eq!(intervals("Csus4"), vec![0, 5, 7]);
        assert_eq!(intervals("Csus2"), vec![0, 2, 7]);
        // minor third survives sus
        assert_eq!(intervals("Cmsus4"), vec![0, 3, 5, 7]);
    }

    #[test]
    fn test_added_tones() {
        assert_eq!(intervals("C6"), vec![0, 4, 7, 9]);
        assert_eq!(intervals("Cadd9"), vec![0, 2, 4, 7]);
        assert_eq!(intervals("C9"), vec![0, 2, 4, 7, 10]);
        assert_eq!(intervals("C11"), vec![0, 4, 5, 7, 10]);
        assert_eq!(intervals("C13"), vec![0, 4, 7, 9, 10]);
        assert_eq!(intervals("Cadd13"), vec![0, 4, 7, 9]);
    }

    #[test]
    fn test_augmented() {
        for text in ["Caug", "C+", "C5+", "Caug5"] {
            assert_eq!(intervals(text), vec![0, 4, 8], "{}", text);
        }
    }

    #[test]
    fn test_slash_bass() {
        let (chord, display) = parse("G/B", Notation::Standard).unwrap();
        assert_eq!(display, "G/B");
        assert_eq!(chord.key, Key::G);
        assert_eq!(chord.bass, Some(4));
        assert!(chord.intervals.contains(Interval::Maj7));

        let chord = chord.resolved();
        assert_eq!(chord.bass, Some(11));
    }

    #[test]
    fn test_slash_bass_below_root() {
        let (chord, _) = parse("C/Bb", Notation::Standard).unwrap();
        assert_eq!(chord.bass, Some(10));
    }

    #[test]
    fn test_malformed_slash_stops_parse() {
        let (chord, display) = parse("Am/x", Notation::Standard).unwrap();
        assert_eq!(display, "Am");
        assert_eq!(chord.bass, None);
    }

    #[test]
    fn test_partial_parse() {
        let (chord, display) = parse("Am7 foo", Notation::Standard).unwrap();
        assert_eq!(display, "Am7");
        assert_eq!(chord.intervals, IntervalSet::from_semitones(&[0, 3, 7, 10]));
        let (_, display) = parse("Dxyz", Notation::Standard).unwrap();
        assert_eq!(display, "D");
    }

    #[test]
    fn test_whitespace_is_removed() {
        let (_, display) = parse("  F # m 7 ", Notation::Standard).unwrap();
        assert_eq!(display, "F#m7");
    }

    #[test]
    fn test_unknown_key_fails() {
        assert!(matches!(
            parse("?", Notation::Standard),
            Err(ChordError::KeyNotRecognized { .. })
        ));
        assert!(parse("", Notation::Standard).is_err());
        assert!(parse("H7", Notation::Standard).is_err());
    }

    #[test]
    fn test_regional_notation() {
        let (chord, display) = parse("Hm", Notation::H).unwrap();
        assert_eq!(display, "Hm");
        assert_eq!(chord.key, Key::B);

        let (chord, _) = parse("B7", Notation::H).unwrap();
        assert_eq!(chord.key, Key::BFlat);

        let (chord, _) = parse("D/H", Notation::H).unwrap();
        assert_eq!(chord.bass, Some(9));
    }

    #[test]
    fn test_simplified_drops_extensions() {
        let (chord, display) = parse_simplified("Cmaj9", Notation::Standard).unwrap();
        assert_eq!(display, "Cmaj9");
        assert_eq!(chord.intervals, IntervalSet::from_semitones(&[0, 4, 7]));

        let (chord, _) = parse_simplified("Asus4", Notation::Standard).unwrap();
        assert_eq!(chord.intervals, IntervalSet::from_semitones(&[0, 4, 7]));
    }

    #[test]
    fn test_simplified_keeps_core_rules() {
        let (chord, _) = parse_simplified("Em7/D", Notation::Standard).unwrap();
        assert_eq!(chord.intervals, IntervalSet::from_semitones(&[0, 3, 7, 10, 11]));
        assert_eq!(chord.bass, Some(10));
    }
}
