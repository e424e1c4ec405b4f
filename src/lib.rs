//! # fretchord
//!
//! Chord names in, playable fingerings out, for any fretted instrument.
//!
//! ## Pipeline
//! 1. [`parse`] reads a chord name (`Cm7`, `G/B`, `Asus4`) into a [`Chord`]
//! 2. [`search`] lists every playable fingering for a [`Tuning`], in four
//!    ranked [`FingeringGroups`]
//!
//! [`voice`] runs both steps.
//!
//! ## Example
//! ```rust
//! use fretchord::{voice, Notation, Tuning};
//!
//! let voicing = voice("Am", Notation::Standard, &Tuning::guitar())?;
//! assert_eq!(voicing.display, "Am");
//! assert_eq!(voicing.groups.right_bass_normal[0].diagram(6), "x02210");
//! # Ok::<(), fretchord::ChordError>(())
//! ```
//!
//! Every call is independent. The only shared state is the key tables, built
//! once and read-only afterwards, so calls may run on any thread.

pub mod chord;
pub mod config;
pub mod error;
pub mod interval;
pub mod key;
pub mod parser;
pub mod search;
pub mod tuning;

pub use chord::Chord;
pub use config::Config;
pub use error::ChordError;
pub use interval::{Interval, IntervalSet};
pub use key::{parse_key, Key, KeyTable, Notation};
pub use parser::{parse, parse_simplified};
pub use search::{search, Barre, Fingering, FingeringGroups};
pub use tuning::{Tuning, STANDARD_GUITAR, STANDARD_UKULELE};

use serde::Serialize;

/// A parsed chord with its fingerings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    /// The part of the input that was understood, without whitespace.
    pub display: String,
    pub chord: Chord,
    pub groups: FingeringGroups,
}

/// Parse `text` and search its fingerings on `tuning`.
pub fn voice(text: &str, notation: Notation, tuning: &Tuning) -> Result<Voicing, ChordError> {
    let (chord, display) = parse(text, notation)?;
    let groups = search(&chord, tuning);
    Ok(Voicing { display, chord, groups })
}

/// Like [`voice`], with the simplified rule set of [`parse_simplified`].
pub fn voice_simplified(
    text: &str,
    notation: Notation,
    tuning: &Tuning,
) -> Result<Voicing, ChordError> {
    let (chord, display) = parse_simplified(text, notation)?;
    let groups = search(&chord, tuning);
    Ok(Voicing { display, chord, groups })
}
