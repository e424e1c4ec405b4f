//! Instrument tunings.
//!
//! A tuning lists the open pitch of every string in semitones, 0 being middle
//! C, lowest string first. Only the order and the pitches matter; any number of
//! strings from one upwards is allowed.

use std::fmt;
use std::str::FromStr;

use crate::error::ChordError;

/// Standard guitar: E2 A2 D3 G3 B3 E4.
pub const STANDARD_GUITAR: [i32; 6] = [-20, -15, -10, -5, -1, 4];

/// Standard ukulele, re-entrant: G4 C4 E4 A4.
pub const STANDARD_UKULELE: [i32; 4] = [7, 0, 4, 9];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning(Vec<i32>);

impl Tuning {
    /// Build a tuning from open-string pitches. Fails on an empty list.
    pub fn new(strings: Vec<i32>) -> Result<Self, ChordError> {
        if strings.is_empty() {
            return Err(ChordError::InvalidTuning(
                "tuning needs at least one string".to_string(),
            ));
        }
        Ok(Self(strings))
    }

    pub fn guitar() -> Self {
        Self(STANDARD_GUITAR.to_vec())
    }

    pub fn ukulele() -> Self {
        Self(STANDARD_UKULELE.to_vec())
    }

    pub fn strings(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::guitar()
    }
}

/// Accepts `guitar`, `ukulele`, or integers separated by commas or spaces.
impl FromStr for Tuning {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "guitar" => return Ok(Self::guitar()),
            "ukulele" | "uke" => return Ok(Self::ukulele()),
            _ => {}
        }
        let strings = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i32>()
                    .map_err(|_| ChordError::InvalidTuning(format!("not a number: {}", part)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(strings)
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|s| s.to_string()).collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!("guitar".parse::<Tuning>().unwrap(), Tuning::guitar());
        assert_eq!(" Ukulele ".parse::<Tuning>().unwrap().strings(), &[7, 0, 4, 9]);
    }

    #[test]
    fn test_parse_list() {
        let tuning: Tuning = "-20, -15,-10 -5 -1 4".parse().unwrap();
        assert_eq!(tuning, Tuning::guitar());
        assert_eq!(tuning.to_string(), "-20, -15, -10, -5, -1, 4");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!("".parse::<Tuning>(), Err(ChordError::InvalidTuning(_))));
        assert!(matches!("1, two".parse::<Tuning>(), Err(ChordError::InvalidTuning(_))));
        assert!(Tuning::new(vec![]).is_err());
    }
}
