//! Draw-command recorder.
//!
//! [`Frame`] is the in-crate [`Surface`]: it accumulates the
//! primitives a repaint issues, in paint order.  Hosts without a
//! native canvas binding replay the recorded commands (typically via
//! [`frame_to_json`]), and tests assert on them directly.

use serde::{Deserialize, Serialize};

use crate::host::{Image, Surface};
use crate::model::Rgba;

/// One recorded drawing primitive.  Coordinate conventions are those
/// of the [`Surface`] trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgba,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    RoundedRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        color: Rgba,
    },
    Polygon {
        points: Vec<(f64, f64)>,
        color: Rgba,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        color: Rgba,
    },
    Image {
        image: Image,
        x: f64,
        y: f64,
        scale: f64,
    },
}

/// An ordered list of draw commands, one full repaint's worth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            commands: Vec::new(),
        }
    }

    /// Drops all recorded commands.  A repaint appends; the owner
    /// clears between frames.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Frame {
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn rounded_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64, color: Rgba) {
        self.commands.push(DrawCommand::RoundedRect {
            x,
            y,
            width,
            height,
            radius,
            color,
        });
    }

    fn polygon(&mut self, points: &[(f64, f64)], color: Rgba) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn text(&mut self, s: &str, x: f64, y: f64, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: s.to_string(),
            x,
            y,
            color,
        });
    }

    fn image(&mut self, image: Image, x: f64, y: f64, scale: f64) {
        self.commands.push(DrawCommand::Image { image, x, y, scale });
    }
}

/// Serializes a recorded frame to JSON for host-side replay.
pub fn frame_to_json(frame: &Frame) -> String {
    serde_json::to_string(frame).unwrap_or_else(|_| "{}".to_string())
}
