use app_core::layout::Layout;
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);

#[test]
fn corner_drag_at_origin_clamps_to_minimums() {
    let layout = Layout::from_corner_drag(Vec2::ZERO, VIEWPORT);
    assert_eq!(layout.sidebar_width, 200.0);
    assert_eq!(layout.header_height, 50.0);
    assert_eq!(layout.scale, 0.8);
}

#[test]
fn corner_drag_across_the_full_viewport_clamps_width_and_height() {
    let layout = Layout::from_corner_drag(VIEWPORT, VIEWPORT);
    assert_eq!(layout.sidebar_width, 500.0);
    assert_eq!(layout.header_height, 200.0);
    // (1.0 + 1.0) / 1.5, inside the [0.8, 2.0] bounds
    assert!((layout.scale - 4.0 / 3.0).abs() < 1e-6);
}

#[test]
fn corner_drag_in_range_passes_through() {
    let layout = Layout::from_corner_drag(Vec2::new(350.0, 100.0), VIEWPORT);
    assert_eq!(layout.sidebar_width, 350.0);
    assert_eq!(layout.header_height, 100.0);
}

#[test]
fn scale_formula_mixes_both_axes() {
    // x/w = 0.5, y/h = 0.5 -> (0.5 + 0.5) / 1.5 = 0.666, below the floor
    let centered = Layout::from_corner_drag(Vec2::new(960.0, 540.0), VIEWPORT);
    assert_eq!(centered.scale, 0.8);

    // x/w = 1.0, y/h = 0.8 -> 1.2, inside the bounds
    let lower_right = Layout::from_corner_drag(Vec2::new(1920.0, 864.0), VIEWPORT);
    assert!((lower_right.scale - 1.2).abs() < 1e-6);
}

#[test]
fn degenerate_viewport_falls_back_to_unit_scale() {
    let layout = Layout::from_corner_drag(Vec2::new(300.0, 100.0), Vec2::ZERO);
    assert_eq!(layout.scale, 1.0);
}

#[test]
fn clamped_reapplies_bounds_to_restored_values() {
    let restored = Layout {
        sidebar_width: 900.0,
        header_height: 10.0,
        scale: 3.5,
    }
    .clamped();
    assert_eq!(restored.sidebar_width, 500.0);
    assert_eq!(restored.header_height, 50.0);
    assert_eq!(restored.scale, 2.0);
}

#[test]
fn defaults_are_within_bounds() {
    let layout = Layout::default().clamped();
    assert_eq!(layout, Layout::default());
}
