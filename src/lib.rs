//! notationlib: interactive staff-notation display core.
//!
//! Renders a numeric pitch sequence onto a four-staff block
//! (noteheads, microtonal accidentals, ledger lines, duration bars)
//! and re-emits the pitches as a timed stream.  The library never
//! touches a real canvas, outlet, or timer: the host injects
//! [`Surface`], [`OutputPort`], and [`Scheduler`] implementations and
//! forwards its pointer, resize, and timer events to
//! [`NotationView`].
//!
//! # Example
//! ```
//! use notationlib::{Frame, NotationView};
//!
//! let view = NotationView::new(450.0, 300.0);
//! let mut frame = Frame::new();
//! view.paint(&mut frame);
//! println!("{} draw commands", frame.commands.len());
//! ```

pub mod model;
pub mod pitch;
pub mod host;
pub mod frame;
pub mod renderer;
pub mod output;
pub mod interaction;
pub mod view;

pub use frame::{frame_to_json, DrawCommand, Frame};
pub use host::{Host, Image, OutputPort, Scheduler, Surface, TimerId};
pub use model::*;
pub use pitch::{ledger_code, ledger_offsets, resolve_pitch, ResolvedNote};
pub use renderer::glyphs::{accidental_glyph, AccidentalGlyph, GlyphKind};
pub use view::NotationView;
