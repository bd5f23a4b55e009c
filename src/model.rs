//! Box model: the entity manipulated on the grid surface.
//!
//! A box lives in one of two coordinate authorities, modeled as a tagged
//! union so stale reads are unrepresentable:
//!
//! - [`Placement::Settled`]: the integer grid cell `(col, row)` is
//!   authoritative and the pixel position is derived as
//!   `(col * step, row * step)`.
//! - [`Placement::Active`]: the free pixel position `(x, y)` is authoritative
//!   while the box is selected and being dragged or resized.
//!
//! Snapping back from Active to Settled happens in
//! [`GridModel::deselect_all`](crate::grid::GridModel::deselect_all).

use serde::{Deserialize, Serialize};

use crate::config::GridParams;
use crate::geometry;

/// Cosmetic color tag for a box. Never touched by geometry logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxColor {
    Blue,
    Green,
}

impl std::fmt::Display for BoxColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blue => write!(f, "blue"),
            Self::Green => write!(f, "green"),
        }
    }
}

/// Which coordinate system currently owns a box's position.
///
/// `col`/`row` are signed: resize never clamps the moving anchor to the
/// surface mid-gesture, so a later snap can legitimately land on a negative
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Placement {
    /// Snapped onto the grid; cell coordinates are authoritative.
    Settled { col: i32, row: i32 },
    /// Selected and in free-pixel mode; pixel coordinates are authoritative.
    Active { x: f64, y: f64 },
}

/// A rectangular box on the grid surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBox {
    /// Unique stable identifier.
    pub id: u64,
    /// Width in grid cells, always at least 1.
    pub w: u32,
    /// Height in grid cells, always at least 1.
    pub h: u32,
    /// Current coordinate authority.
    pub placement: Placement,
    pub color: BoxColor,
}

impl GridBox {
    /// Creates a settled box at the given cell. Width and height are floored
    /// to one cell.
    pub fn new(id: u64, col: i32, row: i32, w: u32, h: u32, color: BoxColor) -> Self {
        Self {
            id,
            w: w.max(1),
            h: h.max(1),
            placement: Placement::Settled { col, row },
            color,
        }
    }

    /// Whether the box is selected (in free-pixel mode).
    pub fn is_selected(&self) -> bool {
        matches!(self.placement, Placement::Active { .. })
    }

    /// Current top-left pixel position.
    ///
    /// For a settled box this is the snapped equivalent of its cell anchor;
    /// for an active box it is the live free-pixel position.
    pub fn pixel_pos(&self, params: &GridParams) -> (f64, f64) {
        match self.placement {
            Placement::Settled { col, row } => {
                (f64::from(col) * params.step(), f64::from(row) * params.step())
            }
            Placement::Active { x, y } => (x, y),
        }
    }

    /// Pixel footprint of the box.
    pub fn pixel_size(&self, params: &GridParams) -> (f64, f64) {
        geometry::pixel_size(self.w, self.h, params)
    }

    /// The grid row this box occupies (or would snap to, if active).
    pub fn grid_row(&self, params: &GridParams) -> i32 {
        match self.placement {
            Placement::Settled { row, .. } => row,
            Placement::Active { y, .. } => (y / params.step()).round() as i32,
        }
    }

    /// Snapped copy of this box: active placement is rounded to the nearest
    /// cell, settled placement is returned unchanged.
    pub fn snapped(&self, params: &GridParams) -> Self {
        match self.placement {
            Placement::Settled { .. } => *self,
            Placement::Active { x, y } => {
                let step = params.step();
                let col = (x / step).round() as i32;
                let row = (y / step).round() as i32;
                Self {
                    placement: Placement::Settled { col, row },
                    ..*self
                }
            }
        }
    }
}
