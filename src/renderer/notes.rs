//! Note rendering: walks the sequence with a horizontal cursor and
//! emits noteheads, accidentals, ledger lines, and duration bars.

use crate::host::{Image, Surface};
use crate::model::{Microtone, NoteSequence, Rgba};
use crate::pitch::{ledger_code, ledger_offsets, resolve_pitch, ResolvedNote};

use super::constants::*;
use super::glyphs::{accidental_glyph, GlyphKind};

/// Lays out the whole sequence.  Chord mode advances the cursor a
/// fixed spacing-derived stride per note; rhythmic mode advances by
/// each note's own duration and draws the duration bar.
pub(super) fn render_notes(
    surface: &mut dyn Surface,
    sequence: &NoteSequence,
    microtone: Microtone,
    spacing: f64,
    aspect: f64,
    height: f64,
) {
    let scale = super::glyph_scale(height);
    // Cursor in world x, starting at the fixed left margin.
    let mut cursor = LEFT_MARGIN - aspect;

    match sequence {
        NoteSequence::Chord(pitches) => {
            for &pitch in pitches {
                let note = resolve_pitch(pitch, microtone);
                render_note(surface, &note, cursor, aspect, scale, true);
                cursor += spacing * CHORD_STRIDE_FACTOR;
            }
        }
        NoteSequence::Rhythmic(notes) => {
            for rhythmic in notes {
                let note = resolve_pitch(rhythmic.pitch, microtone);
                // A pitch with integer part 0 is a rest: no notehead,
                // but the duration bar still marks its extent.
                let rest = note.value.trunc() == 0.0;
                render_note(surface, &note, cursor, aspect, scale, !rest);
                render_duration_bar(surface, &note, cursor, rhythmic.duration);
                cursor += rhythmic.duration;
            }
        }
    }
}

/// Draws one resolved note at the cursor: notehead (unless
/// suppressed), accidental glyph, and ledger lines.
fn render_note(
    surface: &mut dyn Surface,
    note: &ResolvedNote,
    cursor: f64,
    aspect: f64,
    scale: f64,
    with_head: bool,
) {
    let ypos = note_y(note.step, note.octave);
    let blit_x = aspect + cursor;

    if with_head {
        surface.image(Image::NoteHead, blit_x, ypos, scale);
    }

    if let Some(glyph) = accidental_glyph(note.accidental) {
        let gx = blit_x + glyph.dx;
        let gy = ypos + glyph.dy;
        match glyph.kind {
            GlyphKind::Image(image) => surface.image(image, gx, gy, scale),
            // Text draws in world coordinates; convert the blit anchor.
            GlyphKind::Text(s) => surface.text(s, gx - aspect, 1.0 - gy, Rgba::BLACK),
        }
    }

    let code = ledger_code(note.step, note.octave);
    for &y in ledger_offsets(code) {
        surface.line(
            cursor - LEDGER_EXTEND_LEFT,
            y,
            cursor + LEDGER_EXTEND_RIGHT,
            y,
            Rgba::BLACK,
        );
    }
}

/// Filled bar showing a rhythmic note's duration, slightly inset from
/// the cursor and shortened so adjacent bars stay separated.
fn render_duration_bar(surface: &mut dyn Surface, note: &ResolvedNote, cursor: f64, duration: f64) {
    let ypos = note_y(note.step, note.octave);
    surface.rect(
        cursor + DURATION_BAR_X_PAD,
        DURATION_BAR_Y_BASE - ypos,
        duration - DURATION_BAR_SHORTEN,
        DURATION_BAR_HEIGHT,
        Rgba::BLACK,
    );
}

/// Blit y of a staff placement.
fn note_y(step: i32, octave: i32) -> f64 {
    NOTE_Y_BASE + octave as f64 * OCTAVE_DY + step as f64 * STEP_DY
}
