//! Property tests for the geometry and snap invariants.

use proptest::prelude::*;

use gridboard::{
    compute_drag, compute_resize, pixel_size, BoxColor, Corner, DragAnchor, GestureController,
    GridModel, GridParams, Placement, ResizeAnchor,
};

fn corner_strategy() -> impl Strategy<Value = Corner> {
    prop::sample::select(Corner::ALL.to_vec())
}

proptest! {
    #[test]
    fn drag_never_escapes_the_surface(
        start_x in 0.0f64..854.0,
        start_y in 0.0f64..2000.0,
        dx in -1e6f64..1e6,
        dy in -1e6f64..1e6,
        w in 1u32..=10,
    ) {
        let params = GridParams::default();
        let anchor = DragAnchor {
            start_x,
            start_y,
            start_mouse_x: 0.0,
            start_mouse_y: 0.0,
        };
        let (width, _) = pixel_size(w, 1, &params);
        let (x, y) = compute_drag(&anchor, dx, dy, width, &params);

        let max_x = params.step() * f64::from(params.total_cols) - width;
        prop_assert!(x >= 0.0);
        prop_assert!(x <= max_x);
        prop_assert!(y >= 0.0);
    }

    #[test]
    fn resize_never_collapses_below_one_cell(
        corner in corner_strategy(),
        start_w in 1u32..=10,
        start_h in 1u32..=10,
        dx in -1e6f64..1e6,
        dy in -1e6f64..1e6,
    ) {
        let params = GridParams::default();
        let anchor = ResizeAnchor {
            start_x: 86.0,
            start_y: 86.0,
            start_w,
            start_h,
            start_mouse_x: 0.0,
            start_mouse_y: 0.0,
        };
        let rect = compute_resize(corner, &anchor, dx, dy, &params);
        prop_assert!(rect.w >= 1);
        prop_assert!(rect.h >= 1);
    }

    #[test]
    fn resize_only_moves_the_dragged_edges(
        corner in corner_strategy(),
        dx in -500.0f64..500.0,
        dy in -500.0f64..500.0,
    ) {
        use gridboard::{HorizontalEdge, VerticalEdge};

        let params = GridParams::default();
        let anchor = ResizeAnchor {
            start_x: 172.0,
            start_y: 258.0,
            start_w: 3,
            start_h: 3,
            start_mouse_x: 0.0,
            start_mouse_y: 0.0,
        };
        let rect = compute_resize(corner, &anchor, dx, dy, &params);

        match corner.horizontal() {
            HorizontalEdge::Right => prop_assert_eq!(rect.x, anchor.start_x),
            HorizontalEdge::Left => prop_assert_eq!(rect.x, anchor.start_x + dx),
        }
        match corner.vertical() {
            VerticalEdge::Bottom => prop_assert_eq!(rect.y, anchor.start_y),
            VerticalEdge::Top => prop_assert_eq!(rect.y, anchor.start_y + dy),
        }
    }

    #[test]
    fn snap_round_trip_matches_rounding(
        x in -5000.0f64..5000.0,
        y in 0.0f64..5000.0,
    ) {
        let params = GridParams::default();
        let step = params.step();

        let mut model = GridModel::new(params);
        let id = model.add_box(0, 0, 2, 2, BoxColor::Blue);
        model.select_box(id);
        let mut b = *model.get_box(id).unwrap();
        b.placement = Placement::Active { x, y };
        model.update_box(b);

        model.deselect_all();
        let b = model.get_box(id).unwrap();
        let expected_col = (x / step).round() as i32;
        let expected_row = (y / step).round() as i32;
        prop_assert_eq!(
            b.placement,
            Placement::Settled { col: expected_col, row: expected_row }
        );
        prop_assert_eq!(
            b.pixel_pos(&params),
            (f64::from(expected_col) * step, f64::from(expected_row) * step)
        );
    }

    #[test]
    fn at_most_one_box_is_selected(ids in prop::collection::vec(0u64..8, 1..20)) {
        let mut model = GridModel::new(GridParams::default());
        for i in 0..4 {
            model.add_box(i, i, 1, 1, BoxColor::Green);
        }
        for id in ids {
            model.select_box(id);
            prop_assert!(model.boxes().filter(|b| b.is_selected()).count() <= 1);
        }
        model.deselect_all();
        prop_assert_eq!(model.boxes().filter(|b| b.is_selected()).count(), 0);
    }

    #[test]
    fn box_size_stays_positive_under_arbitrary_gestures(
        corner in corner_strategy(),
        moves in prop::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 1..10),
    ) {
        let mut model = GridModel::new(GridParams::default());
        let id = model.add_box(2, 2, 3, 3, BoxColor::Blue);
        let mut gestures = GestureController::new();

        gestures.pointer_down_for_resize(&mut model, id, corner, 0.0, 0.0);
        for (mx, my) in moves {
            gestures.pointer_move(&mut model, mx, my);
            let b = model.get_box(id).unwrap();
            prop_assert!(b.w >= 1 && b.h >= 1);
        }
        gestures.pointer_up();
        model.deselect_all();

        let b = model.get_box(id).unwrap();
        prop_assert!(b.w >= 1 && b.h >= 1);
    }

    #[test]
    fn deselect_all_is_idempotent(
        x in -5000.0f64..5000.0,
        y in 0.0f64..5000.0,
    ) {
        let mut model = GridModel::new(GridParams::default());
        let id = model.add_box(1, 1, 2, 2, BoxColor::Blue);
        model.select_box(id);
        let mut b = *model.get_box(id).unwrap();
        b.placement = Placement::Active { x, y };
        model.update_box(b);

        model.deselect_all();
        let once: Vec<_> = model.boxes().copied().collect();
        model.deselect_all();
        let twice: Vec<_> = model.boxes().copied().collect();
        prop_assert_eq!(once, twice);
    }
}
