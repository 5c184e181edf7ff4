//! The drawing surface a unit drawer owns.
//!
//! A [`StripSurface`] is a retained list of draw operations in abstract
//! pixel coordinates. The drawer repaints it only when its unit needs to
//! move; the view interprets the ops into terminal cells (or braille dots)
//! on every frame, and tests inspect them directly without a terminal.
//!
//! Coordinates follow canvas conventions: origin top-left, y growing down.

/// Ink role for a draw operation, resolved to a concrete colour by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Cell background colour.
    Light,
    /// Digit/ink colour.
    Dark,
}

/// One straight stroke in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Starting x.
    pub x1: i32,
    /// Starting y.
    pub y1: i32,
    /// Ending x.
    pub x2: i32,
    /// Ending y.
    pub y2: i32,
}

impl Segment {
    /// Translate the segment by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

/// A single retained draw operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// Text placed with its left edge at `x` and baseline at `y`.
    Text {
        /// The characters to paint.
        text: String,
        /// Left edge in pixels; may be negative while a slot scrolls out.
        x: i32,
        /// Baseline in pixels.
        y: i32,
        /// Ink role.
        ink: Ink,
    },
    /// A polyline stroke, one segment per straight run.
    Stroke {
        /// The segments to stroke.
        segments: Vec<Segment>,
        /// Ink role.
        ink: Ink,
    },
}

/// Retained drawing surface exclusively owned by one drawer.
///
/// No drawer ever touches another's surface; the only cross-drawer traffic
/// is the refresh signal, which carries no shared data.
#[derive(Debug, Clone)]
pub struct StripSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl StripSurface {
    /// Create an empty surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Drop every retained op. Called at the top of each draw.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Retain a text op.
    pub fn fill_text(&mut self, text: impl Into<String>, x: i32, y: i32, ink: Ink) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            ink,
        });
    }

    /// Retain a stroke op.
    pub fn stroke_segments(&mut self, segments: Vec<Segment>, ink: Ink) {
        self.ops.push(DrawOp::Stroke { segments, ink });
    }

    /// The retained ops, in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// All retained text ops as `(text, x)` pairs, in paint order.
    ///
    /// Convenience for asserting slot contents without pattern-matching the
    /// full op list.
    pub fn texts(&self) -> Vec<(&str, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, x, .. } => Some((text.as_str(), *x)),
                DrawOp::Stroke { .. } => None,
            })
            .collect()
    }
}
