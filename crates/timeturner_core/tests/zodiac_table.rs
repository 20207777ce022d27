use chrono::{Datelike, Days, NaiveDate};
use timeturner_core::cycle::zodiac::{resolve, ring_rotation_deg, ZODIAC_RANGES};

#[test]
fn every_day_of_the_year_matches_exactly_one_sign() {
    // 2024 is a leap year, so Feb 29 is covered too.
    let mut counts = [0usize; 12];
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    while date <= end {
        let (index, _) = resolve(date.month(), date.day());
        assert!(index < 12, "index {index} out of range for {date}");
        counts[index] += 1;
        date = date.checked_add_days(Days::new(1)).unwrap();
    }

    assert_eq!(counts.iter().sum::<usize>(), 366);
    for (index, count) in counts.iter().enumerate() {
        assert!(
            (28..=32).contains(count),
            "sign {index} covers {count} days, expected a month-ish window"
        );
    }
}

#[test]
fn range_starts_resolve_to_their_own_sign() {
    for (index, range) in ZODIAC_RANGES.iter().enumerate() {
        let (start_index, resolved) = resolve(range.start.0, range.start.1);
        assert_eq!(start_index, index, "start of {} misresolved", range.name);
        assert_eq!(resolved.name, range.name);

        let (end_index, _) = resolve(range.end.0, range.end.1);
        assert_eq!(end_index, index, "end of {} misresolved", range.name);
    }
}

#[test]
fn cusp_dates_land_on_the_expected_side() {
    let (sagittarius, _) = resolve(12, 21);
    assert_eq!(sagittarius, 11);

    let (capricorn_start, range) = resolve(12, 22);
    assert_eq!(capricorn_start, 0);
    assert_eq!(range.name, "Capricorn");

    let (capricorn_end, _) = resolve(1, 19);
    assert_eq!(capricorn_end, 0);

    let (aquarius, range) = resolve(1, 20);
    assert_eq!(aquarius, 1);
    assert_eq!(range.name, "Aquarius");
}

#[test]
fn august_thirteenth_is_leo_at_index_seven() {
    let (index, range) = resolve(8, 13);
    assert_eq!(index, 7);
    assert_eq!(range.name, "Leo");
    assert_eq!(range.symbol, '♌');
    assert_eq!(ring_rotation_deg(index), 210.0);
}

#[test]
fn table_names_are_unique() {
    for (i, a) in ZODIAC_RANGES.iter().enumerate() {
        for b in ZODIAC_RANGES.iter().skip(i + 1) {
            assert_ne!(a.name, b.name);
            assert_ne!(a.symbol, b.symbol);
        }
    }
}
