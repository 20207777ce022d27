use chrono::{NaiveDate, NaiveDateTime};
use timeturner_core::cycle::biorhythm::{elapsed_days, phase};
use timeturner_core::db::open_db_in_memory;
use timeturner_core::{
    build_dial_snapshot, BirthProfile, Location, ProfileService, SaveProfileRequest,
    SqliteProfileRepository,
};

const EPSILON: f64 = 1e-9;

fn reference_profile() -> BirthProfile {
    BirthProfile::from_wire(
        "Lyra",
        "1991-08-13",
        "13:31",
        Location {
            address: "Bangalore".to_string(),
            lat: 12.9716,
            lng: 77.5946,
        },
    )
    .unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn snapshot_places_the_reference_birth_data() {
    let profile = reference_profile();
    let now = at(2024, 3, 15, 13, 31);
    let snapshot = build_dial_snapshot(&profile, now);

    assert_eq!(snapshot.zodiac.name, "Leo");
    assert_eq!(snapshot.zodiac.index, 7);
    assert_eq!(snapshot.zodiac.symbol, '♌');
    assert!((snapshot.zodiac.ring_rotation_deg - 210.0).abs() < EPSILON);

    // -(13 + 31/60) * 15 degrees.
    assert!((snapshot.daily_ring_rotation_deg - (-202.75)).abs() < EPSILON);

    assert_eq!(snapshot.organ.index, 7);
    assert_eq!(snapshot.organ.organ.name, "Small Intestine");
    assert_eq!(snapshot.organ.minutes_until_transition, 29);
}

#[test]
fn snapshot_biorhythm_matches_the_raw_calculator() {
    let profile = reference_profile();
    let now = at(2024, 3, 15, 13, 31);
    let snapshot = build_dial_snapshot(&profile, now);

    let elapsed = elapsed_days(profile.birth_date, now);
    for reading in &snapshot.biorhythm {
        let expected = phase(elapsed, reading.cycle.period_days);
        assert!((reading.value - expected).abs() < EPSILON);
        assert!((-1.0..=1.0).contains(&reading.value));
    }
}

#[test]
fn clock_hands_follow_the_analog_formulas() {
    let profile = reference_profile();
    let snapshot = build_dial_snapshot(&profile, at(2024, 3, 15, 13, 31));

    // 13:31 -> hour hand at 30 + 15.5 degrees, minute hand at 186 degrees.
    assert!((snapshot.hands.hour_deg - 45.5).abs() < EPSILON);
    assert!((snapshot.hands.minute_deg - 186.0).abs() < EPSILON);
    assert_eq!(snapshot.hands.digital, "13:31");
}

#[test]
fn midnight_hands_rest_at_the_top() {
    let profile = reference_profile();
    let snapshot = build_dial_snapshot(&profile, at(2024, 3, 15, 0, 0));

    assert!(snapshot.hands.hour_deg.abs() < EPSILON);
    assert!(snapshot.hands.minute_deg.abs() < EPSILON);
    assert_eq!(snapshot.hands.digital, "00:00");
}

#[test]
fn snapshot_is_idempotent_for_the_same_instant() {
    let profile = reference_profile();
    let now = at(2024, 3, 15, 13, 31);
    assert_eq!(
        build_dial_snapshot(&profile, now),
        build_dial_snapshot(&profile, now)
    );
}

#[test]
fn stored_profile_feeds_the_snapshot_end_to_end() {
    let conn = open_db_in_memory().unwrap();
    let service = ProfileService::new(SqliteProfileRepository::new(&conn));

    assert!(!service.is_profile_complete().unwrap());

    let captured = service
        .save_from_form(&SaveProfileRequest {
            name: "Lyra".to_string(),
            birth_date: "1991-08-13".to_string(),
            birth_time: "13:31".to_string(),
            address: "Bangalore".to_string(),
            lat: 12.9716,
            lng: 77.5946,
        })
        .unwrap();
    assert!(service.is_profile_complete().unwrap());

    let loaded = service.load_profile().unwrap().expect("profile stored");
    assert_eq!(loaded, captured);

    let snapshot = build_dial_snapshot(&loaded, at(2024, 3, 15, 13, 31));
    assert_eq!(snapshot.zodiac.name, "Leo");
}
