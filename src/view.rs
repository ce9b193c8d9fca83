//! The notation view: widget state plus the inbound command surface.
//!
//! [`NotationView`] holds everything the widget displays (sequence,
//! spacing, microtone resolution, colors, geometry) and translates
//! inbound host commands into repaints and output emissions.
//! Commands that change what downstream consumers hear run the full
//! trigger pipeline: repaint, then emit through the output scheduler.
//! Malformed updates are dropped with a diagnostic and prior state is
//! kept.

use log::warn;

use crate::host::{Host, OutputPort, Surface, TimerId};
use crate::interaction::SpacingDrag;
use crate::model::{
    aspect_ratio, clamp_spacing, DisplayMode, Microtone, NoteSequence, Rgba, ViewOptions,
};
use crate::output::OutputScheduler;
use crate::renderer;

/// Interactive staff-notation widget state.
#[derive(Debug)]
pub struct NotationView {
    sequence: NoteSequence,
    microtone: Microtone,
    spacing: f64,
    background: Rgba,
    width: f64,
    height: f64,
    aspect: f64,
    drag: SpacingDrag,
    output: OutputScheduler,
}

impl NotationView {
    /// Creates a view with default attributes at the given widget
    /// size (only the width/height ratio and the height matter).
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_options(width, height, ViewOptions::default())
    }

    /// Creates a view from host-supplied attributes.  Non-finite
    /// attribute values fall back to the defaults.
    pub fn with_options(width: f64, height: f64, options: ViewOptions) -> Self {
        let defaults = ViewOptions::default();
        let aspect = aspect_ratio(width, height);

        let spacing = if options.note_spacing.is_finite() {
            clamp_spacing(options.note_spacing, aspect)
        } else {
            warn!(
                "Ignoring non-finite note spacing {}, using default",
                options.note_spacing
            );
            clamp_spacing(defaults.note_spacing, aspect)
        };
        let background = if options.background.is_finite() {
            options.background
        } else {
            warn!("Ignoring background with non-finite component, using default");
            defaults.background
        };

        NotationView {
            sequence: NoteSequence::empty(options.mode),
            microtone: options.microtone,
            spacing,
            background,
            width,
            height,
            aspect,
            drag: SpacingDrag::new(),
            output: OutputScheduler::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inbound commands
    // ═══════════════════════════════════════════════════════════════════

    /// Replaces the displayed sequence from the host's flat numeric
    /// list and runs the trigger pipeline.  A malformed list is
    /// dropped: sequence, outstanding schedule, and display all stay
    /// as they were.
    pub fn replace_sequence(&mut self, values: &[f64], host: &mut Host<'_>) {
        match NoteSequence::from_flat(self.sequence.mode(), values) {
            Ok(sequence) => {
                self.sequence = sequence;
                self.trigger(host);
            }
            Err(err) => warn!("Sequence update rejected: {}", err),
        }
    }

    /// Switches display mode.  The sequence is cleared; an empty
    /// update goes out so downstream consumers drop stale data.
    pub fn set_display_mode(&mut self, mode: DisplayMode, host: &mut Host<'_>) {
        self.sequence = NoteSequence::empty(mode);
        self.trigger(host);
    }

    /// Sets note spacing, clamped to [0, 2 * aspect].
    pub fn set_spacing(&mut self, spacing: f64, host: &mut Host<'_>) {
        if !spacing.is_finite() {
            warn!("Spacing update rejected: {} is not finite", spacing);
            return;
        }
        self.spacing = clamp_spacing(spacing, self.aspect);
        self.trigger(host);
    }

    /// Sets the microtone resolution from the host's integer
    /// attribute (1 = quarter-tone, 3 = eighth-tone, other = none).
    pub fn set_microtone(&mut self, raw: i64, host: &mut Host<'_>) {
        self.microtone = Microtone::from_raw(raw);
        self.trigger(host);
    }

    /// Sets the background color and repaints.  No output emission.
    pub fn set_background(&mut self, color: Rgba, surface: &mut dyn Surface) {
        if !color.is_finite() {
            warn!("Background update rejected: component not finite");
            return;
        }
        self.background = color;
        self.paint(surface);
    }

    /// Resize notification: recomputes the aspect ratio, re-clamps
    /// spacing against the new bound, and repaints.
    pub fn resize(&mut self, width: f64, height: f64, surface: &mut dyn Surface) {
        if !width.is_finite() || !height.is_finite() {
            warn!("Resize rejected: {} x {} is not finite", width, height);
            return;
        }
        self.width = width;
        self.height = height;
        self.aspect = aspect_ratio(width, height);
        self.spacing = clamp_spacing(self.spacing, self.aspect);
        self.paint(surface);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Pointer events
    // ═══════════════════════════════════════════════════════════════════

    /// Pointer drag.  In chord mode a drag in the slider band adjusts
    /// spacing and repaints without committing; everything else is
    /// ignored.
    pub fn pointer_drag(&mut self, x: f64, y: f64, surface: &mut dyn Surface) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if self.sequence.mode() != DisplayMode::Chord {
            return;
        }
        if let Some(spacing) = self.drag.drag(x, y, self.aspect) {
            self.spacing = spacing;
            self.paint(surface);
        }
    }

    /// Pointer button press.  In chord mode a press in the slider
    /// band adjusts spacing; when it follows a drag gesture it also
    /// commits, running the full trigger pipeline.
    pub fn pointer_click(&mut self, x: f64, y: f64, host: &mut Host<'_>) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if self.sequence.mode() != DisplayMode::Chord {
            return;
        }
        let outcome = self.drag.click(x, y, self.aspect);
        if let Some(spacing) = outcome.spacing {
            self.spacing = spacing;
        }
        if outcome.commit {
            self.trigger(host);
        } else if outcome.spacing.is_some() {
            self.paint(host.surface);
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Callbacks and painting
    // ═══════════════════════════════════════════════════════════════════

    /// Entry point for host timer firings.  Stale ids (from a
    /// cancelled or superseded schedule) are ignored.
    pub fn timer_fired(&mut self, id: TimerId, output: &mut dyn OutputPort) {
        self.output.timer_fired(id, output);
    }

    /// Issues one complete frame of draw commands for the current
    /// state.  Commands append in paint order; clear a recording
    /// surface between frames.
    pub fn paint(&self, surface: &mut dyn Surface) {
        renderer::paint(self, surface);
    }

    /// Repaint plus output emission: the pipeline behind every
    /// state-changing command.
    fn trigger(&mut self, host: &mut Host<'_>) {
        self.paint(host.surface);
        self.output
            .trigger(&self.sequence, self.spacing, host.output, host.scheduler);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    pub fn sequence(&self) -> &NoteSequence {
        &self.sequence
    }

    pub fn mode(&self) -> DisplayMode {
        self.sequence.mode()
    }

    pub fn microtone(&self) -> Microtone {
        self.microtone
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether the pitch stream still has timer firings outstanding.
    pub fn is_streaming(&self) -> bool {
        self.output.is_streaming()
    }
}
