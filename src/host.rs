//! Capabilities the embedding host injects into the widget.
//!
//! The display core never talks to a real canvas, outlet, or timer
//! directly.  It draws through [`Surface`], emits through
//! [`OutputPort`], and schedules its pitch stream through
//! [`Scheduler`]; the host (or a test double) supplies all three.
//!
//! Two coordinate frames are in play, both sized by the widget's
//! aspect ratio (width / height):
//!
//! - **world**: x in [-aspect, +aspect] running left to right, y in
//!   [-1, +1] running bottom to top.  Lines, rectangles, polygons and
//!   text use world coordinates.  A rectangle's `y` names its top
//!   edge and the fill extends downward.
//! - **blit**: origin at the widget's top-left corner, x in
//!   [0, 2 * aspect] running right, y in [0, 2] running down.  Image
//!   anchors use blit coordinates.

use serde::{Deserialize, Serialize};

use crate::model::Rgba;

/// Identifies one of the image assets the host loads at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Image {
    TrebleClef,
    BassClef,
    NoteHead,
    Sharp,
    Flat,
    HalfSharp,
    HalfFlat,
    ThreeQuarterSharp,
    ThreeQuarterFlat,
}

/// Handle for a schedule armed through [`Scheduler::arm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Drawing sink for one repaint.
///
/// Calls arrive in paint order; the surface draws (or records) them
/// back to front.  Coordinates follow the module-level conventions.
pub trait Surface {
    /// Stroked line segment between two world points.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba);

    /// Filled axis-aligned rectangle; `y` is the top edge.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    /// Filled rounded rectangle; `y` is the top edge.
    fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64, color: Rgba);

    /// Filled polygon through the given world points.
    fn polygon(&mut self, points: &[(f64, f64)], color: Rgba);

    /// Text drawn with the host's widget label font, anchored at a
    /// world position.
    fn text(&mut self, s: &str, x: f64, y: f64, color: Rgba);

    /// Image blit.  `x`/`y` anchor the image in blit coordinates and
    /// `scale` multiplies the asset's natural size.
    fn image(&mut self, image: Image, x: f64, y: f64, scale: f64);
}

/// Outbound message channels back to the host.
pub trait OutputPort {
    /// Emits the full current sequence in its flat list form.
    fn send_sequence(&mut self, values: &[f64]);

    /// Emits one pitch on the streamed-pitch channel.
    fn send_pitch(&mut self, pitch: f64);
}

/// The host's repeating-callback timer.
///
/// `arm` starts a schedule that fires `count` times at the given
/// period; each firing reaches the widget through
/// [`NotationView::timer_fired`](crate::view::NotationView::timer_fired)
/// carrying the returned id.  `cancel` stops all remaining firings of
/// a schedule.  Firings of a cancelled or superseded schedule that
/// were already in flight are ignored by the widget.
pub trait Scheduler {
    fn arm(&mut self, period_ms: f64, count: usize) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// The full capability bundle, borrowed for the duration of one
/// inbound command.
pub struct Host<'a> {
    pub surface: &'a mut dyn Surface,
    pub output: &'a mut dyn OutputPort,
    pub scheduler: &'a mut dyn Scheduler,
}
