//! Notation renderer: converts the widget state into draw commands.
//!
//! The renderer owns the full paint pass: background, octave labels,
//! spacing slider, the four-staff block with clefs, then the note
//! sequence.  All drawing goes through the injected [`Surface`], so
//! the same pass feeds a live canvas or a recorded frame.

mod constants;
pub mod glyphs;
mod notes;
mod staff;

use crate::host::Surface;
use crate::model::DisplayMode;
use crate::view::NotationView;
use constants::*;

// ═══════════════════════════════════════════════════════════════════════
// Paint pass
// ═══════════════════════════════════════════════════════════════════════

/// Issues one complete frame for the current widget state.
pub(crate) fn paint(view: &NotationView, surface: &mut dyn Surface) {
    let aspect = view.aspect_ratio();

    // Background
    surface.rounded_rect(
        -aspect,
        1.0,
        2.0 * aspect,
        2.0,
        BACKGROUND_CORNER_RADIUS,
        view.background(),
    );

    staff::render_octave_labels(surface, aspect);

    // The slider only exists in chord mode; rhythmic spacing comes
    // from the durations themselves.
    if view.sequence().mode() == DisplayMode::Chord {
        staff::render_spacing_slider(surface, view.spacing(), aspect);
    }

    staff::render_staves(surface, aspect, view.height());

    notes::render_notes(
        surface,
        view.sequence(),
        view.microtone(),
        view.spacing(),
        aspect,
        view.height(),
    );
}

/// Image scale matching the widget height.
fn glyph_scale(height: f64) -> f64 {
    height / GLYPH_REFERENCE_HEIGHT * GLYPH_BASE_SCALE
}
