//! Chord model: intervals, root key and an optional bass.
//!
//! A [`Chord`] starts root-relative (index 0 of the interval set is the root)
//! and is turned into absolute pitch classes (index 0 is C) by
//! [`Chord::resolve`], exactly once.

use serde::Serialize;

use crate::interval::{Interval, IntervalSet};
use crate::key::Key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub intervals: IntervalSet,
    pub key: Key,
    /// Semitones above the root while unresolved, pitch class once resolved.
    pub bass: Option<u8>,
    resolved: bool,
}

impl Chord {
    /// Major triad on `key`, root-relative.
    pub fn major(key: Key) -> Self {
        let intervals = [Interval::P1, Interval::Maj3, Interval::P5].into_iter().collect();
        Self {
            intervals,
            key,
            bass: None,
            resolved: false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Rotate intervals and bass from root-relative to absolute pitch classes.
    ///
    /// Calling this again is a no-op.
    pub fn resolve(&mut self) {
        if self.resolved {
            return;
        }
        self.resolved = true;
        let transposition = self.key.pitch_class();
        self.intervals = self.intervals.rotate(transposition);
        self.bass = self.bass.map(|b| (b + transposition) % 12);
    }

    /// Consuming form of [`Chord::resolve`].
    pub fn resolved(mut self) -> Self {
        self.resolve();
        self
    }

    /// Pitch class the lowest sounding note should have: the explicit bass
    /// or, without one, the root.
    ///
    /// Only meaningful on a resolved chord.
    pub fn bass_pitch_class(&self) -> u8 {
        self.bass.unwrap_or_else(|| self.key.pitch_class())
    }

    /// Every pitch class a fingering must sound: the chord tones plus the bass.
    pub fn tones(&self) -> IntervalSet {
        let mut tones = self.intervals;
        tones.insert_semitone(self.bass_pitch_class());
        tones
    }

    pub(crate) fn make_minor(&mut self) {
        self.intervals.remove(Interval::Maj3);
        self.intervals.insert(Interval::Min3);
    }

    pub(crate) fn make_diminished_fifth(&mut self) {
        self.intervals.remove(Interval::P5);
        self.intervals.insert(Interval::Tritone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_is_root_relative() {
        let chord = Chord::major(Key::A);
        assert!(!chord.is_resolved());
        assert_eq!(chord.intervals, IntervalSet::from_semitones(&[0, 4, 7]));
    }

    #[test]
    fn test_resolve_rotates_intervals_and_bass() {
        let mut chord = Chord::major(Key::G);
        chord.bass = Some(4);
        chord.resolve();
        // G B D
        assert_eq!(chord.intervals, IntervalSet::from_semitones(&[7, 11, 2]));
        assert_eq!(chord.bass, Some(11));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for key in Key::ALL {
            let mut chord = Chord::major(key);
            chord.make_minor();
            chord.bass = Some(3);
            let once = chord.clone().resolved();
            let mut twice = once.clone();
            twice.resolve();
            assert_eq!(once, twice, "{:?}", key);
        }
    }

    #[test]
    fn test_negative_transposition() {
        let chord = Chord::major(Key::F).resolved();
        // F A C
        assert_eq!(chord.intervals, IntervalSet::from_semitones(&[5, 9, 0]));
        assert_eq!(chord.bass_pitch_class(), 5);
    }

    #[test]
    fn test_tones_include_bass() {
        let mut chord = Chord::major(Key::C);
        chord.bass = Some(2);
        let chord = chord.resolved();
        assert_eq!(chord.tones(), IntervalSet::from_semitones(&[0, 2, 4, 7]));
    }
}
