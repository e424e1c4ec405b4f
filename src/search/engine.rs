//! Fingering enumeration
//!
//! Walks the strings from the lowest up and, for every string, either mutes
//! it or stops it at one of its admissible frets. A complete walk is kept when
//! every required pitch class sounds at least once.
//!
//! Two rules bound the walk:
//! - muting is only allowed before the first sounding string, so muted
//!   strings always sit at the low end
//! - stopped (non-open) frets may span at most [`MAX_STRETCH`] frets

use crate::interval::IntervalSet;

/// Highest fret considered on any string.
pub const HIGHEST_FRET: u8 = 13;

/// Largest distance between the lowest and highest stopped fret.
pub const MAX_STRETCH: u8 = 2;

fn pitch_class(open: i32, fret: u8) -> u8 {
    (open + i32::from(fret)).rem_euclid(12) as u8
}

/// For every string, the frets in `0..=HIGHEST_FRET` that sound a pitch class of `tones`.
pub fn admissible_frets(tones: IntervalSet, tuning: &[i32]) -> Vec<Vec<u8>> {
    tuning
        .iter()
        .map(|&open| {
            (0..=HIGHEST_FRET)
                .filter(|&fret| tones.contains_semitone(pitch_class(open, fret)))
                .collect()
        })
        .collect()
}

/// Backtracking state shared by the whole walk.
///
/// `sounded`, `distinct` and `frets` are restored after every branch.
struct SearchContext<'a> {
    tuning: &'a [i32],
    admissible: &'a [Vec<u8>],
    required: usize,
    sounded: IntervalSet,
    distinct: usize,
    frets: Vec<u8>,
    found: Vec<Vec<u8>>,
}

impl SearchContext<'_> {
    fn descend(&mut self, depth: usize, low: u8, high: u8) {
        if high > low && high - low > MAX_STRETCH {
            return;
        }
        if depth == self.tuning.len() {
            if self.distinct == self.required {
                self.found.push(self.frets.clone());
            }
            return;
        }
        if self.required - self.distinct > self.tuning.len() - depth {
            return;
        }

        if self.frets.is_empty() {
            self.descend(depth + 1, low, high);
        }

        let admissible = self.admissible;
        for &fret in &admissible[depth] {
            let pc = pitch_class(self.tuning[depth], fret);
            let fresh = !self.sounded.contains_semitone(pc);
            if fresh {
                self.sounded.insert_semitone(pc);
                self.distinct += 1;
            }
            self.frets.push(fret);

            if fret == 0 {
                self.descend(depth + 1, low, high);
            } else {
                self.descend(depth + 1, low.min(fret), high.max(fret));
            }

            self.frets.pop();
            if fresh {
                self.sounded.remove_semitone(pc);
                self.distinct -= 1;
            }
        }
    }
}

/// Every fret sequence that sounds all of `tones` within the stretch limit.
///
/// Sequences cover the highest strings; see [`crate::Fingering`].
pub fn enumerate(tones: IntervalSet, tuning: &[i32]) -> Vec<Vec<u8>> {
    let admissible = admissible_frets(tones, tuning);
    let mut context = SearchContext {
        tuning,
        admissible: &admissible,
        required: tones.len(),
        sounded: IntervalSet::new(),
        distinct: 0,
        frets: Vec::with_capacity(tuning.len()),
        found: Vec::new(),
    };
    context.descend(0, HIGHEST_FRET, 0);
    context.found
}
