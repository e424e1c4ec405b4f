//! Filtering, barre synthesis and ranking of raw fret sequences.

use super::types::{Barre, Fingering, FingeringGroups};

/// Fingers available for stopped positions without a barre.
pub const MAX_FINGERS: usize = 4;

/// Fret never used in a fingering: it repeats the open string an octave up.
pub const EXCLUDED_FRET: u8 = 12;

/// Barre variant of `fingering`: a barre at its lowest stopped fret covering
/// every sounding string. `None` when all strings are open.
pub fn barre_variant(fingering: &Fingering, strings: usize) -> Option<Fingering> {
    let at = fingering.min_fret();
    if at == 0 {
        return None;
    }
    Some(Fingering {
        frets: fingering.frets.clone(),
        barre: Some(Barre {
            at,
            from: fingering.first_string(strings),
        }),
    })
}

/// Whether a hand can hold `fingering` on an instrument with `strings` strings.
pub fn is_playable(fingering: &Fingering, strings: usize) -> bool {
    if fingering.frets.contains(&EXCLUDED_FRET) {
        return false;
    }
    let Some(barre) = fingering.barre else {
        return fingering.fretted_count() <= MAX_FINGERS;
    };
    if barre.at == 0 || barre.from + 1 >= strings {
        return false;
    }
    // no muted string under the barre
    if barre.from < fingering.first_string(strings) {
        return false;
    }
    fingering.fretted_count() < MAX_FINGERS
}

/// Pitch class of the lowest sounding note.
pub fn lowest_pitch_class(fingering: &Fingering, tuning: &[i32]) -> Option<u8> {
    let first = fingering.first_string(tuning.len());
    tuning[first..]
        .iter()
        .zip(&fingering.frets)
        .map(|(&open, &fret)| open + i32::from(fret))
        .min()
        .map(|pitch| pitch.rem_euclid(12) as u8)
}

/// `true` if the shorter fret sequence equals the end of the longer one.
pub fn is_trailing_duplicate(kept: &Fingering, candidate: &Fingering) -> bool {
    let n = kept.frets.len().min(candidate.frets.len());
    kept.frets[kept.frets.len() - n..] == candidate.frets[candidate.frets.len() - n..]
}

/// Sort by neck position (fuller shapes first on ties) and drop trailing
/// duplicates of the previous kept entry.
pub fn rank(mut fingerings: Vec<Fingering>) -> Vec<Fingering> {
    fingerings.sort_by(|a, b| {
        a.min_fret()
            .cmp(&b.min_fret())
            .then(b.frets.len().cmp(&a.frets.len()))
    });
    let mut kept: Vec<Fingering> = Vec::with_capacity(fingerings.len());
    for fingering in fingerings {
        match kept.last() {
            Some(last) if is_trailing_duplicate(last, &fingering) => {}
            _ => kept.push(fingering),
        }
    }
    kept
}

/// Split raw fret sequences into the four ranked groups.
pub fn classify(raw: Vec<Vec<u8>>, bass: u8, tuning: &[i32]) -> FingeringGroups {
    let strings = tuning.len();
    let mut groups = FingeringGroups::default();

    for frets in raw {
        let fingering = Fingering::new(frets);
        let right_bass = lowest_pitch_class(&fingering, tuning) == Some(bass);

        if let Some(barred) = barre_variant(&fingering, strings) {
            if is_playable(&barred, strings) {
                if right_bass {
                    groups.right_bass_barre.push(barred);
                } else {
                    groups.wrong_bass_barre.push(barred);
                }
            }
        }
        if is_playable(&fingering, strings) {
            if right_bass {
                groups.right_bass_normal.push(fingering);
            } else {
                groups.wrong_bass_normal.push(fingering);
            }
        }
    }

    FingeringGroups {
        right_bass_normal: rank(groups.right_bass_normal),
        right_bass_barre: rank(groups.right_bass_barre),
        wrong_bass_normal: rank(groups.wrong_bass_normal),
        wrong_bass_barre: rank(groups.wrong_bass_barre),
    }
}
