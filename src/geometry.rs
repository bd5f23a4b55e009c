//! Pure geometry transforms for drag and resize gestures.
//!
//! Everything in this module is stateless: the caller captures the box's
//! state and the pointer position at gesture begin (the "anchor") and threads
//! them through on every subsequent pointer-move sample together with the
//! current pointer position. The transforms are total functions with
//! saturating clamps; no input produces an error.

use serde::{Deserialize, Serialize};

use crate::config::GridParams;

/// Horizontal half of a resize corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Vertical half of a resize corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// One of the four resize anchors.
///
/// Each corner is the combination of a vertical and a horizontal edge; a
/// corner drag always affects exactly one horizontal and one vertical edge,
/// never both edges of the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
}

impl Corner {
    /// The horizontal edge this corner drags.
    pub fn horizontal(self) -> HorizontalEdge {
        match self {
            Self::TopLeft | Self::BottomLeft => HorizontalEdge::Left,
            Self::TopRight | Self::BottomRight => HorizontalEdge::Right,
        }
    }

    /// The vertical edge this corner drags.
    pub fn vertical(self) -> VerticalEdge {
        match self {
            Self::TopLeft | Self::TopRight => VerticalEdge::Top,
            Self::BottomLeft | Self::BottomRight => VerticalEdge::Bottom,
        }
    }

    /// All four corners, in reading order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopLeft => write!(f, "tl"),
            Self::TopRight => write!(f, "tr"),
            Self::BottomLeft => write!(f, "bl"),
            Self::BottomRight => write!(f, "br"),
        }
    }
}

/// Pixel footprint of a box that spans `w` by `h` grid cells.
///
/// ```text
/// width  = w * cell + gap * (w - 1)
/// height = h * cell + gap * (h - 1)
/// ```
///
/// Monotonically increasing in `w`/`h`; used both for rendering size and for
/// clamping drag movement to the right edge of the surface.
pub fn pixel_size(w: u32, h: u32, params: &GridParams) -> (f64, f64) {
    let width = f64::from(w) * params.cell + params.gap * f64::from(w.saturating_sub(1));
    let height = f64::from(h) * params.cell + params.gap * f64::from(h.saturating_sub(1));
    (width, height)
}

/// Box and pointer state captured when a drag gesture begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Box pixel position at gesture begin.
    pub start_x: f64,
    pub start_y: f64,
    /// Pointer position at gesture begin.
    pub start_mouse_x: f64,
    pub start_mouse_y: f64,
}

/// Computes the box position for the current pointer sample of a drag.
///
/// The accumulated pointer delta is applied to the anchored start position,
/// then clamped: `x` to `[0, step * total_cols - pixel_width]`, `y` to
/// `[0, inf)`. The clamp saturates, so the output stays in bounds no matter
/// how large the delta is. The lower bound is applied before the upper bound,
/// so a box wider than the surface pins to the (negative) right-edge limit.
pub fn compute_drag(
    anchor: &DragAnchor,
    mouse_x: f64,
    mouse_y: f64,
    pixel_width: f64,
    params: &GridParams,
) -> (f64, f64) {
    let dx = mouse_x - anchor.start_mouse_x;
    let dy = mouse_y - anchor.start_mouse_y;

    let max_x = params.step() * f64::from(params.total_cols) - pixel_width;
    let new_x = (anchor.start_x + dx).max(0.0).min(max_x);
    let new_y = (anchor.start_y + dy).max(0.0);
    (new_x, new_y)
}

/// Box and pointer state captured when a resize gesture begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeAnchor {
    /// Box pixel position at gesture begin.
    pub start_x: f64,
    pub start_y: f64,
    /// Box size in grid cells at gesture begin.
    pub start_w: u32,
    pub start_h: u32,
    /// Pointer position at gesture begin.
    pub start_mouse_x: f64,
    pub start_mouse_y: f64,
}

/// Rectangle produced by a resize sample: free pixel position plus cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizedRect {
    pub x: f64,
    pub y: f64,
    pub w: u32,
    pub h: u32,
}

/// Computes the box rectangle for the current pointer sample of a resize.
///
/// Each axis is handled independently by the one edge the corner drags:
///
/// ```text
/// right edge:  w = round((start_w * step + dx + gap) / step),  x unchanged
/// left edge:   w = round((start_w * step - dx + gap) / step),  x = start_x + dx
/// bottom edge: h = round((start_h * step + dy + gap) / step),  y unchanged
/// top edge:    h = round((start_h * step - dy + gap) / step),  y = start_y + dy
/// ```
///
/// Rounding on the ratio makes size increments land roughly every half-step
/// of pointer movement, giving the live resize its quantized feel. The
/// `w >= 1, h >= 1` floor is enforced after the fact; when it kicks in, the
/// moved anchor still reflects the unclamped edge position. That overshoot is
/// accepted behavior, corrected only by a later snap. The anchor is likewise
/// not clamped to the surface bounds mid-gesture.
pub fn compute_resize(
    corner: Corner,
    anchor: &ResizeAnchor,
    mouse_x: f64,
    mouse_y: f64,
    params: &GridParams,
) -> ResizedRect {
    let dx = mouse_x - anchor.start_mouse_x;
    let dy = mouse_y - anchor.start_mouse_y;
    let step = params.step();
    let gap = params.gap;

    let mut new_x = anchor.start_x;
    let mut new_y = anchor.start_y;

    let new_w = match corner.horizontal() {
        HorizontalEdge::Right => (f64::from(anchor.start_w) * step + dx + gap) / step,
        HorizontalEdge::Left => {
            new_x = anchor.start_x + dx;
            (f64::from(anchor.start_w) * step - dx + gap) / step
        }
    };

    let new_h = match corner.vertical() {
        VerticalEdge::Bottom => (f64::from(anchor.start_h) * step + dy + gap) / step,
        VerticalEdge::Top => {
            new_y = anchor.start_y + dy;
            (f64::from(anchor.start_h) * step - dy + gap) / step
        }
    };

    ResizedRect {
        x: new_x,
        y: new_y,
        w: new_w.round().max(1.0) as u32,
        h: new_h.round().max(1.0) as u32,
    }
}
