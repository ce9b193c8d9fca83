//! Staff, clef, octave-label, and spacing-slider rendering.

use crate::host::{Image, Surface};
use crate::model::Rgba;

use super::constants::*;

// ═══════════════════════════════════════════════════════════════════════
// Staff block
// ═══════════════════════════════════════════════════════════════════════

/// Draws the four five-line staves spanning the widget, each with its
/// clef.  The upper two are treble staves, the lower two bass,
/// forming two grand staves.
pub(super) fn render_staves(surface: &mut dyn Surface, aspect: f64, height: f64) {
    let scale = super::glyph_scale(height);

    for (staff_idx, &base_y) in STAFF_BASE_YS.iter().enumerate() {
        for line in 0..STAFF_LINE_COUNT {
            let y = base_y + line as f64 * STAFF_LINE_GAP;
            surface.line(-aspect, y, aspect, y, Rgba::BLACK);
        }

        let (image, nudge) = if staff_idx < 2 {
            (Image::TrebleClef, TREBLE_CLEF_NUDGE)
        } else {
            (Image::BassClef, BASS_CLEF_NUDGE)
        };
        // Clef anchors are in the blit frame, at the staff's top line.
        surface.image(image, CLEF_X, 1.0 - base_y - CLEF_TOP_PAD - nudge, scale);
    }
}

/// Draws the "15" two-octave markings beside the outer staves.
pub(super) fn render_octave_labels(surface: &mut dyn Surface, aspect: f64) {
    let x = -aspect + OCTAVE_LABEL_X_PAD;
    surface.text(OCTAVE_LABEL, x, OCTAVE_LABEL_TOP_Y, Rgba::BLACK);
    surface.text(OCTAVE_LABEL, x, OCTAVE_LABEL_BOTTOM_Y, Rgba::BLACK);
}

// ═══════════════════════════════════════════════════════════════════════
// Spacing slider
// ═══════════════════════════════════════════════════════════════════════

/// Draws the note-spacing slider along the bottom margin: a guide
/// line plus a triangular marker at the current spacing.
pub(super) fn render_spacing_slider(surface: &mut dyn Surface, spacing: f64, aspect: f64) {
    let span = SLIDER_SPAN * aspect;
    surface.line(-span, SLIDER_Y, span, SLIDER_Y, SLIDER_COLOR);

    let marker_x = (spacing - aspect).clamp(-span, span);
    surface.polygon(
        &[
            (marker_x, SLIDER_Y),
            (marker_x - SLIDER_MARKER_HALF_WIDTH, SLIDER_Y + SLIDER_MARKER_HEIGHT),
            (marker_x + SLIDER_MARKER_HALF_WIDTH, SLIDER_Y + SLIDER_MARKER_HEIGHT),
        ],
        SLIDER_COLOR,
    );
}
