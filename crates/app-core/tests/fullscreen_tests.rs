use app_core::fullscreen::{toggle, Transition};
use app_core::geometry::Rect;
use app_core::registry::SectionRegistry;
use glam::Vec2;

fn registry_with(names: &[&str]) -> SectionRegistry {
    let mut reg = SectionRegistry::new();
    for name in names {
        reg.add(name);
    }
    reg
}

const BOUNDS: Rect = Rect {
    left: 100.0,
    top: 50.0,
    right: 400.0,
    bottom: 250.0,
};

#[test]
fn entering_snapshots_the_prior_state() {
    let mut reg = registry_with(&["A"]);
    {
        let s = reg.get_mut("A").unwrap();
        s.position = Vec2::new(30.0, 40.0);
        s.scale = 1.2;
    }
    let transition = toggle(&mut reg, "A", BOUNDS).unwrap();
    assert_eq!(transition, Transition::Entered { displaced: None });

    let section = reg.get("A").unwrap();
    assert!(section.fullscreen);
    let snap = section.snapshot.unwrap();
    assert_eq!(snap.position, Vec2::new(30.0, 40.0));
    assert_eq!(snap.scale, 1.2);
    assert_eq!(snap.bounds, BOUNDS);
}

#[test]
fn exiting_restores_the_snapshot() {
    let mut reg = registry_with(&["A"]);
    {
        let s = reg.get_mut("A").unwrap();
        s.position = Vec2::new(30.0, 40.0);
        s.scale = 1.2;
    }
    toggle(&mut reg, "A", BOUNDS);
    // position drifts while fullscreen (e.g. cleared inline styles)
    reg.get_mut("A").unwrap().position = Vec2::ZERO;

    match toggle(&mut reg, "A", BOUNDS).unwrap() {
        Transition::Exited { snapshot } => {
            assert_eq!(snapshot.position, Vec2::new(30.0, 40.0));
            assert_eq!(snapshot.scale, 1.2);
        }
        other => panic!("expected exit, got {:?}", other),
    }
    let section = reg.get("A").unwrap();
    assert!(!section.fullscreen);
    assert_eq!(section.position, Vec2::new(30.0, 40.0));
    assert_eq!(section.scale, 1.2);
    assert!(section.snapshot.is_none());
}

#[test]
fn entering_displaces_a_previous_fullscreen_section() {
    let mut reg = registry_with(&["A", "B"]);
    reg.get_mut("A").unwrap().position = Vec2::new(7.0, 9.0);
    toggle(&mut reg, "A", BOUNDS);

    let transition = toggle(&mut reg, "B", BOUNDS).unwrap();
    assert_eq!(
        transition,
        Transition::Entered {
            displaced: Some("A".to_string())
        }
    );
    assert_eq!(reg.fullscreen_name(), Some("B"));
    // the displaced section got its snapshot back
    let a = reg.get("A").unwrap();
    assert!(!a.fullscreen);
    assert_eq!(a.position, Vec2::new(7.0, 9.0));
    assert!(a.snapshot.is_none());
}

#[test]
fn unknown_name_is_a_noop() {
    let mut reg = registry_with(&["A"]);
    assert!(toggle(&mut reg, "Z", BOUNDS).is_none());
    assert_eq!(reg.fullscreen_name(), None);
}

#[test]
fn rapid_toggles_on_different_names_keep_at_most_one_fullscreen() {
    let mut reg = registry_with(&["A", "B", "C"]);
    for name in ["A", "B", "C", "B", "A", "C", "A", "B"] {
        toggle(&mut reg, name, BOUNDS);
        assert!(
            reg.iter().filter(|s| s.fullscreen).count() <= 1,
            "more than one fullscreen section after toggling {}",
            name
        );
    }
}

#[test]
fn toggling_twice_returns_to_normal() {
    let mut reg = registry_with(&["A"]);
    toggle(&mut reg, "A", BOUNDS);
    toggle(&mut reg, "A", BOUNDS);
    assert_eq!(reg.fullscreen_name(), None);
    assert!(reg.get("A").unwrap().snapshot.is_none());
}
