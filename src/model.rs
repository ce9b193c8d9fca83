//! Data model for the notation display.
//!
//! These structures capture the note sequence being displayed, the
//! display attributes the host can set, and the numeric guards the
//! widget applies to inbound values.

use serde::{Deserialize, Serialize};

/// How the note sequence is spaced and encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Uniform spacing; the inbound list is flat pitches.
    Chord,
    /// Duration-proportional spacing; the inbound list alternates
    /// pitch and duration.
    Rhythmic,
}

impl std::str::FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chord" => Ok(DisplayMode::Chord),
            "rhythmic" => Ok(DisplayMode::Rhythmic),
            other => Err(format!("Unknown display mode: {}", other)),
        }
    }
}

/// Fractional pitch subdivision recognized by the pitch resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Microtone {
    /// Quarter-tone steps (0.5 fractions)
    Quarter,
    /// Eighth-tone steps (0.25 fractions)
    Eighth,
    /// Fractional parts are ignored
    None,
}

impl Microtone {
    /// Maps the host's integer attribute to a resolution. 1 selects
    /// quarter-tones and 3 eighth-tones; every other value disables
    /// microtonal adjustment.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Microtone::Quarter,
            3 => Microtone::Eighth,
            _ => Microtone::None,
        }
    }
}

/// An RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// One note of a rhythmic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhythmicNote {
    /// Pitch value; integer semitones plus a signed microtone fraction.
    /// A pitch whose integer part is 0 is drawn as a rest.
    pub pitch: f64,
    /// Horizontal extent of the note, in world units. Always positive.
    pub duration: f64,
}

/// The sequence being displayed, encoded per display mode.
///
/// Replaced wholesale on every inbound update and cleared when the
/// display mode changes; individual notes are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSequence {
    /// Pitches spaced uniformly by the note-spacing attribute.
    Chord(Vec<f64>),
    /// Pitch/duration records spaced by their own durations.
    Rhythmic(Vec<RhythmicNote>),
}

impl NoteSequence {
    /// An empty sequence in the given mode.
    pub fn empty(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Chord => NoteSequence::Chord(Vec::new()),
            DisplayMode::Rhythmic => NoteSequence::Rhythmic(Vec::new()),
        }
    }

    /// Parses the host's flat numeric list for the given mode.
    ///
    /// Chord mode takes the list as-is. Rhythmic mode pairs the list
    /// into (pitch, duration) records; a trailing unpaired element is
    /// dropped. Non-finite values and non-positive durations reject
    /// the whole update.
    pub fn from_flat(mode: DisplayMode, values: &[f64]) -> Result<Self, String> {
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(format!("Element {} is not a finite number: {}", i, v));
            }
        }
        match mode {
            DisplayMode::Chord => Ok(NoteSequence::Chord(values.to_vec())),
            DisplayMode::Rhythmic => {
                let mut notes = Vec::with_capacity(values.len() / 2);
                // chunks_exact drops a trailing unpaired element
                for pair in values.chunks_exact(2) {
                    let (pitch, duration) = (pair[0], pair[1]);
                    if duration <= 0.0 {
                        return Err(format!(
                            "Duration paired with pitch {} must be positive, got {}",
                            pitch, duration
                        ));
                    }
                    notes.push(RhythmicNote { pitch, duration });
                }
                Ok(NoteSequence::Rhythmic(notes))
            }
        }
    }

    /// The mode this sequence is encoded for.
    pub fn mode(&self) -> DisplayMode {
        match self {
            NoteSequence::Chord(_) => DisplayMode::Chord,
            NoteSequence::Rhythmic(_) => DisplayMode::Rhythmic,
        }
    }

    /// Number of notes (not flat elements).
    pub fn len(&self) -> usize {
        match self {
            NoteSequence::Chord(pitches) => pitches.len(),
            NoteSequence::Rhythmic(notes) => notes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pitch stream, one value per note, in sequence order.
    pub fn pitches(&self) -> Vec<f64> {
        match self {
            NoteSequence::Chord(pitches) => pitches.clone(),
            NoteSequence::Rhythmic(notes) => notes.iter().map(|n| n.pitch).collect(),
        }
    }

    /// The flat list form the host originally speaks.
    pub fn to_flat(&self) -> Vec<f64> {
        match self {
            NoteSequence::Chord(pitches) => pitches.clone(),
            NoteSequence::Rhythmic(notes) => {
                notes.iter().flat_map(|n| [n.pitch, n.duration]).collect()
            }
        }
    }
}

/// Host-settable display attributes, with the widget's startup defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Horizontal note spacing; clamped to [0, 2 * aspect ratio]
    pub note_spacing: f64,
    /// Microtone resolution for the pitch resolver
    pub microtone: Microtone,
    /// Display mode the sequence starts in
    pub mode: DisplayMode,
    /// Background fill color
    pub background: Rgba,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            note_spacing: 1.5,
            microtone: Microtone::Quarter,
            mode: DisplayMode::Chord,
            background: Rgba::WHITE,
        }
    }
}

/// Smallest aspect ratio the view operates at. Keeps a degenerate
/// (zero or negative height) widget rectangle from destabilizing the
/// layout math.
pub const MIN_ASPECT_RATIO: f64 = 0.05;

/// Width/height ratio of the widget, guarded against degenerate sizes.
pub fn aspect_ratio(width: f64, height: f64) -> f64 {
    if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
        (width / height).max(MIN_ASPECT_RATIO)
    } else {
        MIN_ASPECT_RATIO
    }
}

/// Clamps a spacing value to the range the widget can show,
/// [0, 2 * aspect].
pub fn clamp_spacing(spacing: f64, aspect: f64) -> f64 {
    spacing.clamp(0.0, 2.0 * aspect)
}
