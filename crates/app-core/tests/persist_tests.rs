use app_core::constants::STATE_MAX_AGE_MS;
use app_core::persist::{
    decode, encode, InterfaceState, NavState, SectionEntry, SectionFlags, SectionState,
    StateError,
};

const NOW_MS: f64 = 1_700_000_000_000.0;
const HOUR_MS: f64 = 60.0 * 60.0 * 1000.0;

fn sample_interface(timestamp: f64) -> InterfaceState {
    InterfaceState {
        scale: 1.1,
        header_height: 80.0,
        sidebar_width: 320.0,
        nav_x: 48.0,
        nav_y: 96.0,
        sections: vec![
            SectionEntry {
                name: "Latest".into(),
                x: 12.0,
                y: 0.0,
                scale: 1.0,
            },
            SectionEntry {
                name: "Stories".into(),
                x: -4.0,
                y: 230.0,
                scale: 1.2,
            },
        ],
        timestamp,
    }
}

#[test]
fn interface_state_round_trips() {
    let state = sample_interface(NOW_MS);
    let json = encode(&state).unwrap();
    let back: InterfaceState = decode(&json, NOW_MS).unwrap();
    assert_eq!(back, state);
}

#[test]
fn one_hour_old_state_is_restored() {
    let json = encode(&sample_interface(NOW_MS - HOUR_MS)).unwrap();
    assert!(decode::<InterfaceState>(&json, NOW_MS).is_ok());
}

#[test]
fn twenty_five_hour_old_state_is_discarded() {
    let json = encode(&sample_interface(NOW_MS - 25.0 * HOUR_MS)).unwrap();
    match decode::<InterfaceState>(&json, NOW_MS) {
        Err(StateError::Expired { age_ms }) => {
            assert!((age_ms - 25.0 * HOUR_MS).abs() < 1.0);
        }
        other => panic!("expected expiry, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn exactly_24_hours_is_still_restored() {
    // expiry is strictly older-than
    let json = encode(&sample_interface(NOW_MS - STATE_MAX_AGE_MS)).unwrap();
    assert!(decode::<InterfaceState>(&json, NOW_MS).is_ok());
}

#[test]
fn malformed_json_reports_malformed() {
    let result = decode::<InterfaceState>("{not json", NOW_MS);
    assert!(matches!(result, Err(StateError::Malformed(_))));
}

#[test]
fn missing_fields_report_malformed() {
    let result = decode::<InterfaceState>(r#"{"scale": 1.0}"#, NOW_MS);
    assert!(matches!(result, Err(StateError::Malformed(_))));
}

#[test]
fn section_state_round_trips_flags() {
    let mut state = SectionState {
        timestamp: NOW_MS,
        ..Default::default()
    };
    state.entries.insert(
        "Trending".into(),
        SectionFlags {
            minimized: true,
            fullscreen: false,
            x: 33.0,
            y: -8.0,
        },
    );
    let json = encode(&state).unwrap();
    let back: SectionState = decode(&json, NOW_MS).unwrap();
    assert_eq!(back, state);
    assert!(back.entries["Trending"].minimized);
}

#[test]
fn nav_state_round_trips() {
    let state = NavState {
        x: 10.0,
        y: 20.0,
        timestamp: NOW_MS,
    };
    let json = encode(&state).unwrap();
    let back: NavState = decode(&json, NOW_MS).unwrap();
    assert_eq!(back, state);
}
