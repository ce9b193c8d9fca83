//! Spacing-drag interaction.
//!
//! The bottom margin of the widget doubles as a spacing slider:
//! drags inside the band adjust note spacing live, and a click that
//! lands in the band after such a drag commits the new spacing
//! through the full output pipeline.

use crate::model::clamp_spacing;

/// World-space y below which pointer events address the slider.
pub const SPACING_BAND_Y: f64 = -0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging,
}

/// Tracks the slider gesture across pointer events.
#[derive(Debug, Clone)]
pub struct SpacingDrag {
    state: DragState,
}

/// What a button press asks the widget to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickOutcome {
    /// New spacing to adopt, when the press landed in the band
    pub spacing: Option<f64>,
    /// True when the press commits (band hit preceded by a drag)
    pub commit: bool,
}

impl SpacingDrag {
    pub fn new() -> Self {
        SpacingDrag {
            state: DragState::Idle,
        }
    }

    /// Pointer-down or pointer-move at a world position.  Inside the
    /// band this starts (or continues) the gesture and returns the
    /// new clamped spacing; the caller repaints without committing.
    /// Outside the band it returns `None`.
    pub fn drag(&mut self, x: f64, y: f64, aspect: f64) -> Option<f64> {
        if y < SPACING_BAND_Y {
            self.state = DragState::Dragging;
            Some(clamp_spacing(x + aspect, aspect))
        } else {
            None
        }
    }

    /// Button press at a world position.  The band adjusts spacing as
    /// in [`SpacingDrag::drag`]; a press that lands in the band after
    /// a drag gesture additionally commits and ends the gesture.
    pub fn click(&mut self, x: f64, y: f64, aspect: f64) -> ClickOutcome {
        let was_dragging = self.state == DragState::Dragging;
        let spacing = self.drag(x, y, aspect);
        let commit = was_dragging && spacing.is_some();
        if commit {
            self.state = DragState::Idle;
        }
        ClickOutcome { spacing, commit }
    }
}

impl Default for SpacingDrag {
    fn default() -> Self {
        SpacingDrag::new()
    }
}
