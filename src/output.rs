//! Timed pitch-stream output.
//!
//! Every trigger emits the full sequence at once and streams the
//! individual pitches: the first immediately, the rest one per timer
//! firing at a period of `100 * spacing` milliseconds.  Only one
//! schedule is ever outstanding; a new trigger cancels the old one
//! before arming its own, so streams never interleave.

use log::debug;

use crate::host::{OutputPort, Scheduler, TimerId};
use crate::model::NoteSequence;

/// Streams pitches to the host's output channels on a host timer.
#[derive(Debug, Clone, Default)]
pub struct OutputScheduler {
    /// The schedule currently allowed to emit, if any
    active: Option<TimerId>,
    /// Pitch snapshot taken at trigger time
    stream: Vec<f64>,
    /// Index of the pitch the next firing will emit
    next: usize,
}

impl OutputScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits the sequence and (re)arms the pitch stream.
    ///
    /// Any outstanding schedule is cancelled first.  The first pitch
    /// goes out immediately; the remaining `len - 1` wait for timer
    /// firings.  An empty sequence still emits its (empty) list on
    /// the sequence channel but arms nothing.
    pub fn trigger(
        &mut self,
        sequence: &NoteSequence,
        spacing: f64,
        output: &mut dyn OutputPort,
        scheduler: &mut dyn Scheduler,
    ) {
        if let Some(id) = self.active.take() {
            debug!("cancelling pitch stream {:?}", id);
            scheduler.cancel(id);
        }

        self.stream = sequence.pitches();
        self.next = 1;

        if let Some(&first) = self.stream.first() {
            output.send_pitch(first);
        }
        if self.stream.len() > 1 {
            let period_ms = 100.0 * spacing;
            let count = self.stream.len() - 1;
            let id = scheduler.arm(period_ms, count);
            debug!(
                "armed pitch stream {:?}: {} firings at {} ms",
                id, count, period_ms
            );
            self.active = Some(id);
        }

        output.send_sequence(&sequence.to_flat());
    }

    /// Timer callback: emits the next pitch of the active stream.
    /// Firings from a cancelled or superseded schedule are ignored.
    pub fn timer_fired(&mut self, id: TimerId, output: &mut dyn OutputPort) {
        if self.active != Some(id) {
            return;
        }
        if let Some(&pitch) = self.stream.get(self.next) {
            output.send_pitch(pitch);
            self.next += 1;
        }
        if self.next >= self.stream.len() {
            self.active = None;
        }
    }

    /// Whether a stream still has timer firings outstanding.
    pub fn is_streaming(&self) -> bool {
        self.active.is_some()
    }
}
