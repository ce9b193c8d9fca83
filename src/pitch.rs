//! Map numeric pitch values onto staff positions.  This is the bridge
//! between the host's raw note numbers and drawable notation: it
//! answers "which staff step and octave does this value sit on?" and
//! "which accidental does it carry?", including the microtonal ones.
//!
//! Pitch values are real numbers: the integer part selects a semitone
//! (12 per octave) and the signed fractional part a microtone, read at
//! quarter-tone or eighth-tone resolution.  Negative values spell the
//! black keys as flats instead of sharps.

use crate::model::Microtone;

/// Where one pitch value lands on the staff block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedNote {
    /// Diatonic staff step within the octave (0 = C .. 6 = B)
    pub step: i32,
    /// Octave offset from the staff block's center octave
    pub octave: i32,
    /// Accidental magnitude, a multiple of 0.25 in [-1.75, 1.75]
    pub accidental: f64,
    /// The pitch value as displayed; equals the input except when a
    /// double sharp was respelled two semitones up
    pub value: f64,
}

/// Resolves a pitch value to its staff placement.
///
/// Pure and total: any finite value yields a placement, and malformed
/// values degrade to the zero entry of the pitch-class table rather
/// than failing.
pub fn resolve_pitch(value: f64, microtone: Microtone) -> ResolvedNote {
    let whole = value.trunc();
    let frac = value.fract();
    let pitch_class = (whole.abs() % 12.0) as u32;
    let octave = ((whole.abs() / 12.0).trunc() - 5.0) as i32;

    // Pitch-class table: diatonic step plus a base accidental of
    // natural (0) or sharp (1).
    let (mut step, mut accidental) = match pitch_class {
        0 => (0, 0.0),
        1 => (0, 1.0),
        2 => (1, 0.0),
        3 => (1, 1.0),
        4 => (2, 0.0),
        5 => (3, 0.0),
        6 => (3, 1.0),
        7 => (4, 0.0),
        8 => (4, 1.0),
        9 => (5, 0.0),
        10 => (5, 1.0),
        11 => (6, 0.0),
        _ => (0, 0.0),
    };

    // Negative values spell sharps enharmonically: the flat of the
    // next step up.
    if value < 0.0 && accidental == 1.0 {
        step += 1;
        accidental = -1.0;
    }

    match microtone {
        Microtone::Quarter => {
            if frac > 0.25 && frac < 0.75 {
                accidental += 0.5;
            } else if frac >= 0.75 {
                accidental += 1.0;
            } else if frac > -0.75 && frac < -0.25 && accidental == -1.0 {
                accidental += 0.5;
            } else if frac > -0.75 && frac < -0.25 {
                accidental = -1.5;
            }
        }
        Microtone::Eighth => {
            if frac > 0.125 && frac < 0.375 {
                accidental += 0.25;
            } else if frac > 0.375 && frac < 0.625 {
                accidental += 0.5;
            } else if frac > 0.625 && frac < 0.875 {
                accidental += 0.75;
            } else if frac > 0.875 {
                accidental += 1.0;
            }
        }
        Microtone::None => {}
    }

    // A full double sharp has no glyph: respell as the value two
    // semitones up with no accidental, keeping the staff placement.
    let mut value = value;
    if accidental == 2.0 {
        value += 2.0;
        accidental = 0.0;
    }

    ResolvedNote {
        step,
        octave,
        accidental,
        value,
    }
}

/// Ledger-line code for a staff placement.
///
/// The staff block covers most placements with its own lines; the
/// seven combinations listed here fall in the gaps above, below, or
/// between staves and need one or two ledger segments.  Everything
/// else maps to 0 (no ledger lines).
pub fn ledger_code(step: i32, octave: i32) -> i32 {
    match (octave, step) {
        // Middle C, between the inner treble and bass staves
        (0, 0) => 1,
        (-2, 0) => -2,
        (-2, 1) | (-2, 2) => -1,
        (1, 5) | (1, 6) => 2,
        (2, 0) => 3,
        (3, 5) | (3, 6) => 4,
        (4, 0) | (4, 1) => 5,
        _ => 0,
    }
}

/// Vertical positions (world y) of the ledger segments for a code.
/// Codes with two entries draw two stacked segments.
pub fn ledger_offsets(code: i32) -> &'static [f64] {
    match code {
        1 => &[0.0],
        -1 => &[-0.24],
        -2 => &[-0.24, -0.28],
        2 => &[0.24],
        3 => &[0.24, 0.28],
        4 => &[0.52],
        5 => &[0.52, 0.56],
        _ => &[],
    }
}
