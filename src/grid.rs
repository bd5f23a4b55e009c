//! Grid model: the authoritative box collection and its selection lifecycle.
//!
//! [`GridModel`] owns the boxes and the grid parameters, hands out generated
//! ids, and orchestrates the Settled/Active state machine: a box becomes
//! Active when selected at gesture start and returns to Settled only through
//! the global deselect signal, which snaps its free pixel position onto the
//! nearest grid cell.

use tracing::{debug, trace};

use crate::config::{GridParams, MIN_ROWS};
use crate::model::{BoxColor, GridBox, Placement};

/// Owns the box collection and global grid parameters.
///
/// At most one box is Active at any time; every mutating operation preserves
/// this. Calls referencing an unknown id are silent no-ops to keep host
/// integration simple.
#[derive(Debug, Clone)]
pub struct GridModel {
    params: GridParams,
    boxes: Vec<GridBox>,
    next_id: u64,
}

impl GridModel {
    /// Creates an empty grid with the given parameters.
    pub fn new(params: GridParams) -> Self {
        Self {
            params,
            boxes: Vec::new(),
            next_id: 1,
        }
    }

    /// Grid layout parameters.
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Adds a settled box at the given cell and returns its generated id.
    /// Width and height are floored to one cell.
    pub fn add_box(&mut self, col: i32, row: i32, w: u32, h: u32, color: BoxColor) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.boxes.push(GridBox::new(id, col, row, w, h, color));
        debug!(id, col, row, w, h, "box added");
        id
    }

    /// Returns the number of boxes on the grid.
    pub fn box_count(&self) -> usize {
        self.boxes.len()
    }

    /// Gets a reference to a box by id.
    pub fn get_box(&self, id: u64) -> Option<&GridBox> {
        self.boxes.iter().find(|b| b.id == id)
    }

    /// Iterates over all boxes.
    pub fn boxes(&self) -> impl Iterator<Item = &GridBox> {
        self.boxes.iter()
    }

    /// The id of the currently selected box, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.boxes.iter().find(|b| b.is_selected()).map(|b| b.id)
    }

    /// Selects exactly one box: the matching box becomes Active at its
    /// current pixel position and every other box is settled.
    ///
    /// Selecting an unknown id still deselects everything else.
    pub fn select_box(&mut self, id: u64) {
        let params = self.params;
        let mut found = false;
        for b in &mut self.boxes {
            if b.id == id {
                let (x, y) = b.pixel_pos(&params);
                b.placement = Placement::Active { x, y };
                found = true;
            } else {
                *b = b.snapped(&params);
            }
        }
        debug!(id, found, "select box");
    }

    /// Replaces the box with the matching id by full structural replacement.
    ///
    /// This is the sink for both drag and resize deltas, called at
    /// pointer-move frequency. Unknown ids are ignored.
    pub fn update_box(&mut self, updated: GridBox) {
        if let Some(b) = self.boxes.iter_mut().find(|b| b.id == updated.id) {
            *b = updated;
            trace!(id = updated.id, "box updated");
        }
    }

    /// Deselects every box, snapping Active ones onto the nearest grid cell:
    /// `col = round(x / step)`, `row = round(y / step)`.
    ///
    /// Settled boxes are untouched, which makes the operation idempotent.
    pub fn deselect_all(&mut self) {
        let params = self.params;
        for b in &mut self.boxes {
            if b.is_selected() {
                *b = b.snapped(&params);
                debug!(id = b.id, placement = ?b.placement, "box snapped");
            }
        }
    }

    /// Number of rows the surface currently spans: at least [`MIN_ROWS`],
    /// and at least enough to contain every box's bottom edge.
    ///
    /// Recomputed from the collection on every read; never cached.
    pub fn row_count(&self) -> u32 {
        let occupied = self
            .boxes
            .iter()
            .map(|b| i64::from(b.grid_row(&self.params)) + i64::from(b.h))
            .max()
            .unwrap_or(0);
        (occupied.max(i64::from(MIN_ROWS))) as u32
    }

    /// Pixel dimensions of the grid surface at the current row count.
    pub fn surface_size(&self) -> (f64, f64) {
        let step = self.params.step();
        (
            step * f64::from(self.params.total_cols) - self.params.gap,
            step * f64::from(self.row_count()) - self.params.gap,
        )
    }
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new(GridParams::default())
    }
}
