//! Gesture lifecycle: pointer-down, pointer-move, pointer-up.
//!
//! A drag or resize gesture is a short-lived scoped acquisition: pointer-down
//! captures the box's start state and the pointer origin into an
//! [`ActiveGesture`], every pointer-move sample is transformed through
//! [`crate::geometry`] against that anchor, and pointer-up releases the
//! gesture exactly once. The host forwards raw pointer events; all mutation
//! happens synchronously in delivery order.

use tracing::{debug, trace};

use crate::geometry::{self, Corner, DragAnchor, ResizeAnchor};
use crate::grid::GridModel;
use crate::model::Placement;

/// The transform a gesture applies, with the state captured at its start.
#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureKind {
    Drag {
        anchor: DragAnchor,
        /// Pixel width at gesture begin, used for the right-edge drag clamp.
        pixel_width: f64,
    },
    Resize {
        corner: Corner,
        anchor: ResizeAnchor,
    },
}

/// An in-flight gesture bound to one box.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveGesture {
    box_id: u64,
    kind: GestureKind,
}

/// Tracks the single in-flight gesture and routes pointer samples to the
/// grid model.
///
/// The `Option` slot is the subscription handle: pointer-down acquires it,
/// pointer-up releases it, and a second pointer-up is a harmless no-op.
/// Starting a new gesture while one is in flight simply replaces it; both
/// write through the same [`GridModel::update_box`] sink, so the last writer
/// wins.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    active: Option<ActiveGesture>,
}

impl GestureController {
    /// Creates a controller with no gesture in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently in flight.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The box the in-flight gesture is bound to, if any.
    pub fn active_box(&self) -> Option<u64> {
        self.active.map(|g| g.box_id)
    }

    /// Begins a drag gesture on the given box.
    ///
    /// Selects the box first (the selection side-effect applies even when the
    /// id is unknown), then anchors the gesture at the box's current pixel
    /// position. Returns `false` and leaves no gesture in flight when the id
    /// does not exist.
    pub fn pointer_down_for_drag(
        &mut self,
        model: &mut GridModel,
        id: u64,
        mouse_x: f64,
        mouse_y: f64,
    ) -> bool {
        model.select_box(id);
        let Some(b) = model.get_box(id) else {
            self.active = None;
            return false;
        };
        let (start_x, start_y) = b.pixel_pos(model.params());
        let (pixel_width, _) = b.pixel_size(model.params());
        self.active = Some(ActiveGesture {
            box_id: id,
            kind: GestureKind::Drag {
                anchor: DragAnchor {
                    start_x,
                    start_y,
                    start_mouse_x: mouse_x,
                    start_mouse_y: mouse_y,
                },
                pixel_width,
            },
        });
        debug!(id, "drag gesture begin");
        true
    }

    /// Begins a resize gesture on the given box from one of its corners.
    ///
    /// Same selection side-effect and unknown-id behavior as
    /// [`Self::pointer_down_for_drag`].
    pub fn pointer_down_for_resize(
        &mut self,
        model: &mut GridModel,
        id: u64,
        corner: Corner,
        mouse_x: f64,
        mouse_y: f64,
    ) -> bool {
        model.select_box(id);
        let Some(b) = model.get_box(id) else {
            self.active = None;
            return false;
        };
        let (start_x, start_y) = b.pixel_pos(model.params());
        self.active = Some(ActiveGesture {
            box_id: id,
            kind: GestureKind::Resize {
                corner,
                anchor: ResizeAnchor {
                    start_x,
                    start_y,
                    start_w: b.w,
                    start_h: b.h,
                    start_mouse_x: mouse_x,
                    start_mouse_y: mouse_y,
                },
            },
        });
        debug!(id, %corner, "resize gesture begin");
        true
    }

    /// Applies the current pointer sample to the in-flight gesture.
    ///
    /// Computes the next rectangle from the anchored start state and the
    /// accumulated delta, then pushes a full box replacement through
    /// [`GridModel::update_box`]. No-op when no gesture is in flight.
    pub fn pointer_move(&mut self, model: &mut GridModel, mouse_x: f64, mouse_y: f64) {
        let Some(gesture) = self.active else {
            return;
        };
        let Some(&current) = model.get_box(gesture.box_id) else {
            return;
        };

        let mut updated = current;
        match gesture.kind {
            GestureKind::Drag {
                anchor,
                pixel_width,
            } => {
                let (x, y) =
                    geometry::compute_drag(&anchor, mouse_x, mouse_y, pixel_width, model.params());
                updated.placement = Placement::Active { x, y };
            }
            GestureKind::Resize { corner, anchor } => {
                let rect =
                    geometry::compute_resize(corner, &anchor, mouse_x, mouse_y, model.params());
                updated.placement = Placement::Active {
                    x: rect.x,
                    y: rect.y,
                };
                updated.w = rect.w;
                updated.h = rect.h;
            }
        }

        trace!(id = gesture.box_id, mouse_x, mouse_y, "gesture sample");
        model.update_box(updated);
    }

    /// Ends the in-flight gesture.
    ///
    /// Releases the gesture slot exactly once; calling this again without an
    /// intervening pointer-down is a no-op. The box stays selected (Active)
    /// until the host issues a global deselect.
    pub fn pointer_up(&mut self) {
        if let Some(gesture) = self.active.take() {
            debug!(id = gesture.box_id, "gesture end");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoxColor;

    fn setup() -> (GridModel, GestureController, u64) {
        let mut model = GridModel::default();
        let id = model.add_box(1, 1, 4, 2, BoxColor::Blue);
        (model, GestureController::new(), id)
    }

    #[test]
    fn drag_selects_and_moves_the_box() {
        let (mut model, mut gestures, id) = setup();
        assert!(gestures.pointer_down_for_drag(&mut model, id, 100.0, 100.0));
        assert_eq!(model.selected_id(), Some(id));

        gestures.pointer_move(&mut model, 150.0, 120.0);
        let b = model.get_box(id).unwrap();
        assert_eq!(b.pixel_pos(model.params()), (136.0, 106.0));

        gestures.pointer_up();
        // Mouseup does not settle the box.
        assert!(model.get_box(id).unwrap().is_selected());
    }

    #[test]
    fn unknown_id_starts_no_gesture_but_still_deselects() {
        let (mut model, mut gestures, id) = setup();
        model.select_box(id);
        assert!(!gestures.pointer_down_for_drag(&mut model, 999, 0.0, 0.0));
        assert!(!gestures.is_active());
        assert_eq!(model.selected_id(), None);
    }

    #[test]
    fn pointer_move_without_gesture_is_a_no_op() {
        let (mut model, mut gestures, id) = setup();
        let before = *model.get_box(id).unwrap();
        gestures.pointer_move(&mut model, 500.0, 500.0);
        assert_eq!(*model.get_box(id).unwrap(), before);
    }

    #[test]
    fn pointer_up_is_idempotent() {
        let (mut model, mut gestures, id) = setup();
        gestures.pointer_down_for_drag(&mut model, id, 0.0, 0.0);
        gestures.pointer_up();
        gestures.pointer_up();
        assert!(!gestures.is_active());
    }

    #[test]
    fn new_gesture_replaces_the_previous_one() {
        let (mut model, mut gestures, id) = setup();
        gestures.pointer_down_for_drag(&mut model, id, 0.0, 0.0);
        gestures.pointer_down_for_resize(&mut model, id, Corner::BottomRight, 0.0, 0.0);
        assert_eq!(gestures.active_box(), Some(id));

        // Moves now resize instead of dragging.
        gestures.pointer_move(&mut model, 90.0, 0.0);
        assert_eq!(model.get_box(id).unwrap().w, 5);
    }
}
