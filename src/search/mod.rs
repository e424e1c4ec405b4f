//! # Fingering Search
//!
//! Find every playable way to finger a chord on a fretted instrument.
//!
//! ## Pipeline
//! 1. **Admissible frets** - for every string, the frets `0..=13` whose pitch
//!    class belongs to the chord (tones plus bass)
//! 2. **Enumeration** - backtracking over the strings, see [`enumerate`]
//! 3. **Classification** - playability filter, barre variants, bass check,
//!    ranking and deduplication, see [`classify`]
//!
//! ## Sub-modules
//! - `types` - [`Fingering`], [`Barre`], [`FingeringGroups`]
//! - `engine` - admissible frets and the backtracking walk
//! - `classify` - filters and ranking
//!
//! ## Entry Point
//! [`search()`] - resolved chord + tuning → four ranked groups
//!
//! ## Example
//! ```rust
//! use fretchord::{parse, search, Notation, Tuning};
//!
//! let (chord, _) = parse("Am", Notation::Standard)?;
//! let groups = search(&chord, &Tuning::guitar());
//!
//! // the open shape comes first
//! assert_eq!(groups.right_bass_normal[0].diagram(6), "x02210");
//! # Ok::<(), fretchord::ChordError>(())
//! ```
//!
//! ## Groups
//!
//! | Group | Lowest note | Barre |
//! |-------|-------------|-------|
//! | `right_bass_normal` | chord bass | no |
//! | `right_bass_barre` | chord bass | yes |
//! | `wrong_bass_normal` | other chord tone | no |
//! | `wrong_bass_barre` | other chord tone | yes |
//!
//! The chord bass is the note after `/`, or the root without one.
//!
//! ## Playability
//! - at most 4 stopped positions, or 3 besides a barre
//! - stopped frets within a 2-fret stretch
//! - fret 12 never used
//! - a barre covers sounding (not muted) strings only, and more than the top string

mod types;
mod engine;
mod classify;


pub use types::{Barre, Fingering, FingeringGroups};
pub use engine::{admissible_frets, enumerate, HIGHEST_FRET, MAX_STRETCH};
pub use classify::{
    barre_variant, classify, is_playable, is_trailing_duplicate, lowest_pitch_class, rank,
    EXCLUDED_FRET, MAX_FINGERS,
};

use tracing::debug;

use crate::chord::Chord;
use crate::tuning::Tuning;

/// Search fingerings of `chord` on `tuning`.
///
/// The chord may be resolved or not; the caller's value is left untouched.
pub fn search(chord: &Chord, tuning: &Tuning) -> FingeringGroups {
    let chord = chord.clone().resolved();
    let tones = chord.tones();
    let raw = enumerate(tones, tuning.strings());
    let raw_count = raw.len();
    let groups = classify(raw, chord.bass_pitch_class(), tuning.strings());
    debug!(
        key = %chord.key,
        tones = tones.bits(),
        strings = tuning.len(),
        raw = raw_count,
        kept = groups.len(),
        "fingering search finished"
    );
    groups
}
