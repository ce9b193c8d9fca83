//! Accidental glyph table.
//!
//! Maps a resolved accidental magnitude onto the glyph that draws it.
//! Half- and quarter-tone magnitudes have image assets; the eight
//! eighth-tone magnitudes between them have no imagery and fall back
//! to placeholder strings in the widget label font.  Adding real
//! glyphs later means touching only this table.

use crate::host::Image;

use super::constants::{
    ACCIDENTAL_DX, FLAT_SIDE_DY, SHARP_SIDE_DY, THREE_QUARTER_FLAT_EXTRA_DX,
};

/// How an accidental is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    /// One of the host-loaded accidental images
    Image(Image),
    /// A placeholder string in the widget label font
    Text(&'static str),
}

/// A drawable accidental: the glyph plus its anchor offsets from the
/// notehead's blit position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccidentalGlyph {
    pub kind: GlyphKind,
    pub dx: f64,
    pub dy: f64,
}

/// Glyph for an accidental magnitude, read to the nearest quarter
/// step.  Returns `None` for naturals (magnitude 0) and for values
/// outside the [-1.75, 1.75] table.
pub fn accidental_glyph(accidental: f64) -> Option<AccidentalGlyph> {
    let quarter_steps = (accidental * 4.0).round() as i32;
    let kind = match quarter_steps {
        1 => GlyphKind::Text("V"),
        2 => GlyphKind::Image(Image::HalfSharp),
        3 => GlyphKind::Text("`"),
        4 => GlyphKind::Image(Image::Sharp),
        5 => GlyphKind::Text("h"),
        6 => GlyphKind::Image(Image::ThreeQuarterSharp),
        7 => GlyphKind::Text("s"),
        -1 => GlyphKind::Text("2"),
        -2 => GlyphKind::Image(Image::HalfFlat),
        -3 => GlyphKind::Text("<"),
        -4 => GlyphKind::Image(Image::Flat),
        -5 => GlyphKind::Text("F"),
        -6 => GlyphKind::Image(Image::ThreeQuarterFlat),
        -7 => GlyphKind::Text("P"),
        _ => return None,
    };

    let mut dx = ACCIDENTAL_DX;
    if kind == GlyphKind::Image(Image::ThreeQuarterFlat) {
        dx += THREE_QUARTER_FLAT_EXTRA_DX;
    }
    let dy = if quarter_steps > 0 {
        SHARP_SIDE_DY
    } else {
        FLAT_SIDE_DY
    };

    Some(AccidentalGlyph { kind, dx, dy })
}
