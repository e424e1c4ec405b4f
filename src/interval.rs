//! Intervals and pitch-class sets.
//!
//! An [`IntervalSet`] is a 12-bit mask. Bit `i` means "the pitch `i` semitones
//! above the reference is present". The reference is either the chord root
//! (while parsing) or C (after [`crate::Chord::resolve`]).

use serde::Serialize;

/// Semitone distances within one octave.
///
/// P = perfect, m = minor, M = major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    P1 = 0,
    Min2 = 1,
    Maj2 = 2,
    Min3 = 3,
    Maj3 = 4,
    P4 = 5,
    Tritone = 6,
    P5 = 7,
    Min6 = 8,
    Maj6 = 9,
    Min7 = 10,
    Maj7 = 11,
}

impl Interval {
    pub fn semitones(self) -> u8 {
        self as u8
    }
}

/// Set of pitch classes, stored as a 12-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(transparent)]
pub struct IntervalSet(u16);

impl IntervalSet {
    const MASK: u16 = 0x0FFF;

    pub fn new() -> Self {
        Self(0)
    }

    /// Build a set from semitone offsets, each taken modulo 12.
    pub fn from_semitones(semitones: &[u8]) -> Self {
        let mut set = Self::new();
        for &s in semitones {
            set.insert_semitone(s);
        }
        set
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn contains(self, interval: Interval) -> bool {
        self.contains_semitone(interval.semitones())
    }

    pub fn contains_semitone(self, semitone: u8) -> bool {
        self.0 & (1 << (semitone % 12)) != 0
    }

    pub fn insert(&mut self, interval: Interval) {
        self.insert_semitone(interval.semitones());
    }

    pub fn insert_semitone(&mut self, semitone: u8) {
        self.0 |= 1 << (semitone % 12);
    }

    pub fn remove(&mut self, interval: Interval) {
        self.remove_semitone(interval.semitones());
    }

    pub fn remove_semitone(&mut self, semitone: u8) {
        self.0 &= !(1 << (semitone % 12));
    }

    /// Number of pitch classes present.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` if every pitch class of `other` is also in `self`.
    pub fn is_superset(self, other: IntervalSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Move every pitch class up by `n` semitones:
    /// `rotated[i] = self[(i - n) mod 12]`.
    pub fn rotate(self, n: u8) -> Self {
        let n = u32::from(n % 12);
        let bits = u32::from(self.0);
        let rotated = (bits << n) | (bits >> (12 - n));
        Self(rotated as u16 & Self::MASK)
    }

    /// Present semitones in ascending order.
    pub fn semitones(self) -> impl Iterator<Item = u8> {
        (0..12u8).filter(move |&s| self.contains_semitone(s))
    }
}

impl FromIterator<Interval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        let mut set = Self::new();
        for interval in iter {
            set.insert(interval);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = IntervalSet::new();
        set.insert(Interval::Maj3);
        set.insert(Interval::P5);
        assert!(set.contains(Interval::Maj3));
        assert_eq!(set.len(), 2);

        set.remove(Interval::Maj3);
        assert!(!set.contains(Interval::Maj3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_rotate_wraps_around_octave() {
        // A minor relative to its root, moved to A (9 semitones above C)
        let am: IntervalSet = [Interval::P1, Interval::Min3, Interval::P5].into_iter().collect();
        let rotated = am.rotate(9);
        assert_eq!(rotated.semitones().collect::<Vec<_>>(), vec![0, 4, 9]);
    }

    #[test]
    fn test_rotate_by_zero_and_twelve() {
        let set = IntervalSet::from_semitones(&[0, 4, 7, 11]);
        assert_eq!(set.rotate(0), set);
        assert_eq!(set.rotate(12), set);
    }

    #[test]
    fn test_rotate_matches_index_formula() {
        let set = IntervalSet::from_semitones(&[0, 3, 7, 10]);
        for n in 0..12u8 {
            let rotated = set.rotate(n);
            for i in 0..12u8 {
                let source = (i + 12 - n) % 12;
                assert_eq!(rotated.contains_semitone(i), set.contains_semitone(source));
            }
        }
    }

    #[test]
    fn test_superset() {
        let triad = IntervalSet::from_semitones(&[0, 4, 7]);
        let seventh = IntervalSet::from_semitones(&[0, 4, 7, 10]);
        assert!(seventh.is_superset(triad));
        assert!(!triad.is_superset(seventh));
    }
}
