use app_core::drag::DragController;
use app_core::snap::{snap_horizontal, snap_position};
use glam::Vec2;

#[test]
fn begin_captures_grab_offset_so_element_does_not_jump() {
    let mut ctrl = DragController::new();
    assert!(ctrl.begin(Vec2::new(110.0, 120.0), Vec2::new(100.0, 100.0), false));

    // first move: element follows by the pointer delta, not to the pointer
    let pos = ctrl.update(Vec2::new(115.0, 130.0)).unwrap();
    assert_eq!(pos, Vec2::new(105.0, 110.0));
}

#[test]
fn press_inside_controls_never_starts_a_drag() {
    let mut ctrl = DragController::new();
    assert!(!ctrl.begin(Vec2::new(10.0, 10.0), Vec2::ZERO, true));
    assert!(!ctrl.is_dragging());
    assert!(ctrl.update(Vec2::new(50.0, 50.0)).is_none());
}

#[test]
fn update_while_idle_returns_none() {
    let mut ctrl = DragController::new();
    assert!(ctrl.update(Vec2::new(5.0, 5.0)).is_none());
}

#[test]
fn end_finalizes_and_returns_the_last_position() {
    let mut ctrl = DragController::new();
    ctrl.begin(Vec2::new(0.0, 0.0), Vec2::new(40.0, 40.0), false);
    ctrl.update(Vec2::new(20.0, -10.0));
    let final_pos = ctrl.end().unwrap();
    assert_eq!(final_pos, Vec2::new(60.0, 30.0));
    assert!(!ctrl.is_dragging());
}

#[test]
fn pointer_leave_then_up_does_not_double_commit() {
    let mut ctrl = DragController::new();
    ctrl.begin(Vec2::ZERO, Vec2::ZERO, false);
    ctrl.update(Vec2::new(10.0, 10.0));

    // leave finalizes; the late pointer-up finds the machine idle
    assert!(ctrl.end().is_some());
    assert!(ctrl.end().is_none());
}

#[test]
fn override_position_commits_the_snapped_value() {
    let mut ctrl = DragController::new();
    ctrl.begin(Vec2::ZERO, Vec2::ZERO, false);
    ctrl.update(Vec2::new(13.0, 40.0));
    ctrl.override_position(Vec2::new(0.0, 40.0));
    assert_eq!(ctrl.end().unwrap(), Vec2::new(0.0, 40.0));
}

#[test]
fn begin_while_dragging_is_refused() {
    let mut ctrl = DragController::new();
    assert!(ctrl.begin(Vec2::ZERO, Vec2::ZERO, false));
    assert!(!ctrl.begin(Vec2::new(5.0, 5.0), Vec2::new(1.0, 1.0), false));
}

// ---------------- Edge & peer snapping ----------------

#[test]
fn left_edge_within_threshold_snaps_to_zero() {
    assert_eq!(snap_horizontal(5.0, 100.0, 1000.0, &[]), 0.0);
    assert_eq!(snap_horizontal(-12.0, 100.0, 1000.0, &[]), 0.0);
}

#[test]
fn left_edge_outside_threshold_does_not_snap() {
    assert_eq!(snap_horizontal(25.0, 100.0, 1000.0, &[]), 25.0);
}

#[test]
fn right_edge_snaps_flush_with_the_viewport() {
    // right edge at 985 is within 20px of the 1000px viewport edge
    assert_eq!(snap_horizontal(885.0, 100.0, 1000.0, &[]), 900.0);
    // right edge at 975 is not
    assert_eq!(snap_horizontal(875.0, 100.0, 1000.0, &[]), 875.0);
}

#[test]
fn peer_left_edge_captures_within_threshold() {
    assert_eq!(snap_horizontal(310.0, 100.0, 1000.0, &[300.0]), 300.0);
    assert_eq!(snap_horizontal(330.0, 100.0, 1000.0, &[300.0]), 330.0);
}

#[test]
fn first_matching_peer_wins() {
    // both peers qualify; evaluation order is registry order
    assert_eq!(snap_horizontal(310.0, 100.0, 1000.0, &[300.0, 312.0]), 300.0);
}

#[test]
fn viewport_edges_take_priority_over_peers() {
    assert_eq!(snap_horizontal(5.0, 100.0, 1000.0, &[10.0]), 0.0);
}

#[test]
fn vertical_position_is_never_snapped() {
    let pos = snap_position(
        Vec2::new(5.0, 7.0),
        Vec2::new(100.0, 80.0),
        1000.0,
        &[],
    );
    assert_eq!(pos, Vec2::new(0.0, 7.0));
}
