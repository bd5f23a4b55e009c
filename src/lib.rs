//! # Gridboard
//!
//! An interactive layout engine for a fixed-column grid: rectangular boxes
//! are selected, dragged by free-form pixel movement, and resized from any
//! of four corners, then snapped back onto discrete grid cells when
//! deselected.
//!
//! The crate is the geometry/interaction core only. Rendering, styling, and
//! event wiring belong to the hosting UI layer, which forwards raw pointer
//! events and reads the box collection back for drawing.
//!
//! ## Core Components
//!
//! - **[`GridParams`]**: layout constants — cell size, gap, column count,
//!   and the derived step (cell + gap), the quantum of snapped position.
//! - **[`geometry`]**: pure, stateless transforms from an anchored gesture
//!   start state and a pointer delta to the next box rectangle.
//! - **[`GridBox`]**: the box entity; its [`Placement`] is a tagged union of
//!   the two coordinate authorities (settled grid cell vs. free pixels).
//! - **[`GridModel`]**: owns the collection; select/update/deselect-snap,
//!   plus the derived row count.
//! - **[`GestureController`]**: the per-gesture lifecycle — pointer-down
//!   anchors a drag or corner resize, pointer-move writes through the model,
//!   pointer-up releases the gesture exactly once.
//!
//! ## Usage
//!
//! ```rust
//! use gridboard::{BoxColor, Corner, GestureController, GridModel, GridParams};
//!
//! let mut model = GridModel::new(GridParams::default());
//! let id = model.add_box(1, 1, 4, 2, BoxColor::Blue);
//!
//! let mut gestures = GestureController::new();
//! gestures.pointer_down_for_drag(&mut model, id, 100.0, 100.0);
//! gestures.pointer_move(&mut model, 190.0, 100.0);
//! gestures.pointer_up();
//!
//! // Background click: snap the box back onto the grid.
//! model.deselect_all();
//! assert_eq!(model.selected_id(), None);
//! ```

pub mod config;
pub mod error;
pub mod gesture;
pub mod geometry;
pub mod grid;
pub mod model;

pub use config::{GridParams, MIN_ROWS};
pub use error::{GridError, Result};
pub use gesture::GestureController;
pub use geometry::{
    compute_drag, compute_resize, pixel_size, Corner, DragAnchor, HorizontalEdge, ResizeAnchor,
    ResizedRect, VerticalEdge,
};
pub use grid::GridModel;
pub use model::{BoxColor, GridBox, Placement};
