//! Shared constants for the notation renderer (world units unless
//! noted; see the coordinate conventions on `crate::host`).

use crate::model::Rgba;

// ── Background ──────────────────────────────────────────────────────
pub(super) const BACKGROUND_CORNER_RADIUS: f64 = 0.1;

// ── Staff block ─────────────────────────────────────────────────────
/// Bottom line of each staff, top staff first (two trebles, two basses).
pub(super) const STAFF_BASE_YS: [f64; 4] = [0.32, 0.04, -0.20, -0.48];
pub(super) const STAFF_LINE_GAP: f64 = 0.04; // distance between staff lines
pub(super) const STAFF_LINE_COUNT: usize = 5;

// ── Clefs ───────────────────────────────────────────────────────────
pub(super) const CLEF_X: f64 = 0.02; // blit x of every clef
pub(super) const CLEF_TOP_PAD: f64 = 0.16; // bottom-to-top line distance of one staff
pub(super) const TREBLE_CLEF_NUDGE: f64 = 0.06; // extra lift for the G clef
pub(super) const BASS_CLEF_NUDGE: f64 = 0.0;

// ── Octave labels ───────────────────────────────────────────────────
/// The outer staves sound two octaves out; they carry a "15" marking.
pub(super) const OCTAVE_LABEL: &str = "15";
pub(super) const OCTAVE_LABEL_X_PAD: f64 = 0.04; // from the left edge
pub(super) const OCTAVE_LABEL_TOP_Y: f64 = 0.55;
pub(super) const OCTAVE_LABEL_BOTTOM_Y: f64 = -0.53;

// ── Note placement ──────────────────────────────────────────────────
pub(super) const LEFT_MARGIN: f64 = 0.25; // cursor start, from the left edge
pub(super) const NOTE_Y_BASE: f64 = 0.98; // blit y of the center-octave C
pub(super) const OCTAVE_DY: f64 = -0.14; // blit y per octave
pub(super) const STEP_DY: f64 = -0.02; // blit y per staff step
pub(super) const CHORD_STRIDE_FACTOR: f64 = 0.1; // cursor advance per spacing unit

// ── Accidental glyph anchors (relative to the notehead blit x/y) ────
pub(super) const ACCIDENTAL_DX: f64 = -0.05;
pub(super) const SHARP_SIDE_DY: f64 = -0.04;
pub(super) const FLAT_SIDE_DY: f64 = -0.06;
pub(super) const THREE_QUARTER_FLAT_EXTRA_DX: f64 = -0.02;

// ── Ledger lines ────────────────────────────────────────────────────
pub(super) const LEDGER_EXTEND_LEFT: f64 = 0.02;
pub(super) const LEDGER_EXTEND_RIGHT: f64 = 0.07;

// ── Rhythmic duration bar ───────────────────────────────────────────
pub(super) const DURATION_BAR_X_PAD: f64 = 0.01;
pub(super) const DURATION_BAR_SHORTEN: f64 = 0.05;
pub(super) const DURATION_BAR_HEIGHT: f64 = 0.02;
pub(super) const DURATION_BAR_Y_BASE: f64 = 0.99; // pairs with NOTE_Y_BASE

// ── Spacing slider ──────────────────────────────────────────────────
pub(super) const SLIDER_Y: f64 = -0.9;
pub(super) const SLIDER_SPAN: f64 = 0.9; // guide ends at ±0.9 * aspect
pub(super) const SLIDER_MARKER_HALF_WIDTH: f64 = 0.02;
pub(super) const SLIDER_MARKER_HEIGHT: f64 = 0.05;
pub(super) const SLIDER_COLOR: Rgba = Rgba::new(0.2, 0.2, 0.2, 1.0);

// ── Image scaling ───────────────────────────────────────────────────
/// Glyph images scale with widget height: height / 300 * 0.25.
pub(super) const GLYPH_REFERENCE_HEIGHT: f64 = 300.0;
pub(super) const GLYPH_BASE_SCALE: f64 = 0.25;
