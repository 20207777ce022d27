use timeturner_core::cycle::organ::{
    active_index, minutes_until_transition, organ_state, ORGAN_HOURS, WINDOW_MINUTES,
};

#[test]
fn every_hour_maps_into_the_table() {
    for hour in 0..24 {
        let index = active_index(hour);
        assert!(index < ORGAN_HOURS.len(), "hour {hour} -> index {index}");
    }
}

#[test]
fn consecutive_hours_stay_or_advance_by_one_window() {
    for hour in 0..24u32 {
        let current = active_index(hour);
        let next = active_index((hour + 1) % 24);
        assert!(
            next == current || next == (current + 1) % 12,
            "hour {hour}: index jumped {current} -> {next}"
        );
    }
}

#[test]
fn late_evening_wraps_back_to_the_first_window() {
    assert_eq!(active_index(22), 11);
    assert_eq!(active_index(23), 0);
    assert_eq!(active_index(0), 0);
    assert_eq!(active_index(1), 1);
}

#[test]
fn window_anchor_is_gallbladder_at_twenty_three() {
    assert_eq!(ORGAN_HOURS[active_index(23)].name, "Gallbladder");
    assert_eq!(ORGAN_HOURS[active_index(11)].name, "Heart");
}

#[test]
fn thirteen_thirty_one_is_small_intestine() {
    let state = organ_state(13, 31);
    assert_eq!(state.index, 7);
    assert_eq!(state.organ.name, "Small Intestine");
    assert_eq!(state.organ.function, "Sorting & Processing");
    assert_eq!(state.next.name, "Bladder");
    assert_eq!(state.minutes_until_transition, 29);
}

#[test]
fn transition_countdown_spans_the_full_window() {
    // Start of an even hour: the whole 120-minute window remains.
    assert_eq!(minutes_until_transition(14, 0), WINDOW_MINUTES);
    // Last minute of an odd hour: one minute left.
    assert_eq!(minutes_until_transition(15, 59), 1);
}

#[test]
fn next_organ_wraps_from_triple_burner_to_gallbladder() {
    let state = organ_state(22, 0);
    assert_eq!(state.organ.name, "Triple Burner");
    assert_eq!(state.next.name, "Gallbladder");
}
