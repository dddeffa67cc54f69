use app_core::constants::PROXIMITY_RADIUS_PX;
use app_core::geometry::{center_distance, proximity_effect, visual_for_effect, Rect};

#[test]
fn proximity_effect_is_one_at_zero_distance() {
    assert_eq!(proximity_effect(0.0, PROXIMITY_RADIUS_PX), 1.0);
}

#[test]
fn proximity_effect_is_zero_at_and_beyond_radius() {
    assert_eq!(proximity_effect(300.0, 300.0), 0.0);
    assert_eq!(proximity_effect(450.0, 300.0), 0.0);
    assert_eq!(proximity_effect(10_000.0, 300.0), 0.0);
}

#[test]
fn proximity_effect_is_half_at_half_radius() {
    let effect = proximity_effect(150.0, 300.0);
    assert!((effect - 0.5).abs() < 1e-6);
}

#[test]
fn proximity_effect_is_monotonically_non_increasing() {
    let mut prev = f32::MAX;
    for step in 0..=40 {
        let d = step as f32 * 10.0;
        let effect = proximity_effect(d, 300.0);
        assert!(effect <= prev, "effect rose between d={} and d={}", d - 10.0, d);
        prev = effect;
    }
}

#[test]
fn proximity_effect_handles_degenerate_radius() {
    assert_eq!(proximity_effect(50.0, 0.0), 0.0);
}

#[test]
fn center_distance_between_offset_boxes() {
    // centers at (50, 50) and (50, 250)
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(0.0, 200.0, 100.0, 300.0);
    assert!((center_distance(&a, &b) - 200.0).abs() < 1e-4);
}

#[test]
fn rect_dimensions_and_center() {
    let r = Rect::new(10.0, 20.0, 110.0, 70.0);
    assert_eq!(r.width(), 100.0);
    assert_eq!(r.height(), 50.0);
    assert_eq!(r.center().x, 60.0);
    assert_eq!(r.center().y, 45.0);
}

#[test]
fn full_effect_visual_outputs() {
    let v = visual_for_effect(1.0).expect("full effect has visuals");
    assert!((v.scale - 1.05).abs() < 1e-6);
    assert!((v.blur_px - 5.0).abs() < 1e-6);
    assert_eq!(v.z_index, 1000);
}

#[test]
fn half_effect_visual_outputs() {
    let v = visual_for_effect(0.5).expect("nonzero effect has visuals");
    assert!((v.scale - 1.025).abs() < 1e-6);
    assert!((v.blur_px - 2.5).abs() < 1e-6);
    assert_eq!(v.z_index, 500);
}

#[test]
fn zero_effect_clears_overrides_instead_of_neutral_values() {
    assert!(visual_for_effect(0.0).is_none());
    assert!(visual_for_effect(-0.25).is_none());
}
