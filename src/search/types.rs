//! Fingering type definitions
//!
//! This module defines the values handed to callers: single fingerings and the
//! four ranked groups they are sorted into.

use serde::Serialize;

/// One finger stopping several adjacent strings at the same fret.
///
/// # Fields
/// - `at`: the fret the barre presses
/// - `from`: index of the first covered string; the barre runs to the last string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub at: u8,
    pub from: usize,
}

/// A way to play a chord.
///
/// `frets` covers the highest `frets.len()` strings of the tuning; the strings
/// before them are muted. `0` is an open string, `k` a string stopped `k`
/// semitones above open.
///
/// # Example
/// ```
/// use fretchord::Fingering;
///
/// // Open A minor on a six-string guitar
/// let am = Fingering::new(vec![0, 2, 2, 1, 0]);
/// assert_eq!(am.min_fret(), 1);
/// assert_eq!(am.max_fret(), 2);
/// assert_eq!(am.diagram(6), "x02210");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fingering {
    pub frets: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barre: Option<Barre>,
}

impl Fingering {
    pub fn new(frets: Vec<u8>) -> Self {
        Self { frets, barre: None }
    }

    /// Barre fret if there is one, else the lowest stopped fret (0 when all strings are open).
    pub fn min_fret(&self) -> u8 {
        match self.barre {
            Some(barre) => barre.at,
            None => self.frets.iter().copied().filter(|&f| f != 0).min().unwrap_or(0),
        }
    }

    pub fn max_fret(&self) -> u8 {
        let highest = self.frets.iter().copied().max().unwrap_or(0);
        self.barre.map_or(highest, |barre| highest.max(barre.at))
    }

    /// Index of the first sounding string on an instrument with `strings` strings.
    pub fn first_string(&self, strings: usize) -> usize {
        strings.saturating_sub(self.frets.len())
    }

    /// Positions that need a finger of their own (not open, not under the barre).
    pub fn fretted_count(&self) -> usize {
        let barre_fret = self.barre.map(|barre| barre.at);
        self.frets
            .iter()
            .filter(|&&f| f != 0 && Some(f) != barre_fret)
            .count()
    }

    /// Compact chart, lowest string first: `x` muted, digits for frets,
    /// two-digit frets in parentheses.
    pub fn diagram(&self, strings: usize) -> String {
        let mut chart = "x".repeat(self.first_string(strings));
        for &fret in &self.frets {
            if fret > 9 {
                chart.push_str(&format!("({})", fret));
            } else {
                chart.push_str(&fret.to_string());
            }
        }
        chart
    }
}

/// Search results in display order.
///
/// # Fields
/// - `right_bass_normal`: lowest note is the chord's bass, no barre
/// - `right_bass_barre`: lowest note is the chord's bass, with barre
/// - `wrong_bass_normal`: another chord tone in the bass, no barre
/// - `wrong_bass_barre`: another chord tone in the bass, with barre
///
/// Each group is ordered by position on the neck, lowest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingeringGroups {
    pub right_bass_normal: Vec<Fingering>,
    pub right_bass_barre: Vec<Fingering>,
    pub wrong_bass_normal: Vec<Fingering>,
    pub wrong_bass_barre: Vec<Fingering>,
}

impl FingeringGroups {
    /// The four groups in display order.
    pub fn groups(&self) -> [&[Fingering]; 4] {
        [
            &self.right_bass_normal,
            &self.right_bass_barre,
            &self.wrong_bass_normal,
            &self.wrong_bass_barre,
        ]
    }

    /// All fingerings, group after group.
    pub fn iter(&self) -> impl Iterator<Item = &Fingering> {
        self.groups().into_iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.groups().iter().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep at most `limit` fingerings per group.
    pub fn truncate(&mut self, limit: usize) {
        self.right_bass_normal.truncate(limit);
        self.right_bass_barre.truncate(limit);
        self.wrong_bass_normal.truncate(limit);
        self.wrong_bass_barre.truncate(limit);
    }
}
