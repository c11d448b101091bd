//! Property tests for packing, arithmetic and ranges.

use proptest::prelude::*;

use packed_datetime::{
    CompactFormat, DateTime, DateTimeFormat, DateTimeRange, IsoFormat, MILLIS_PER_DAY, NoHolidays, UsHolidays,
    calendar, codec,
};

fn date_time() -> impl Strategy<Value = DateTime> {
    (-3_000i32..=3_000, 1i32..=12, 1i32..=31, 0u32..MILLIS_PER_DAY).prop_map(|(year, month, day, millis)| {
        DateTime::from_ymd(year, month, day).with_millis_since_midnight(millis)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Packing and unpacking is lossless for both widths.
    #[test]
    fn property_pack_round_trip(value in date_time()) {
        prop_assert_eq!(DateTime::from_rep(value.rep()), value);
        prop_assert_eq!(DateTime::from_int_rep(value.int_rep()), value.at_midnight());
        prop_assert_eq!(
            codec::unpack(value.rep()),
            (value.year(), value.day_of_year(), value.millis_since_midnight())
        );
    }

    /// PROPERTY: Packed ordering matches value ordering.
    #[test]
    fn property_packed_ordering(a in date_time(), b in date_time()) {
        prop_assert_eq!(a.cmp(&b), a.rep().cmp(&b.rep()));
        prop_assert_eq!(a.at_midnight().cmp(&b.at_midnight()), a.int_rep().cmp(&b.int_rep()));
    }

    /// PROPERTY: Adding and removing the same number of days is the identity.
    #[test]
    fn property_add_days_inverse(value in date_time(), days in -1_000_000i32..=1_000_000) {
        prop_assert_eq!(value.add_days(days).add_days(-days), value);
    }

    /// PROPERTY: Millisecond arithmetic keeps the time of day inside one day.
    #[test]
    fn property_add_millis_inverse(value in date_time(), millis in -10_000_000_000i64..=10_000_000_000) {
        let moved = value.add_millis(millis);
        prop_assert!(moved.millis_since_midnight() < MILLIS_PER_DAY);
        prop_assert_eq!(moved.add_millis(-millis), value);
    }

    /// PROPERTY: Stepping one day advances the weekday by one.
    #[test]
    fn property_weekday_steps(value in date_time()) {
        let next = value.add_days(1);
        prop_assert_eq!(next.day_of_week(), (value.day_of_week() + 1) % 7);
    }

    /// PROPERTY: The weekday advances by one across the leap day and the year end in every era.
    #[test]
    fn property_weekday_continuous_at_pivots(year in -3_000i32..=3_000) {
        let mut previous = calendar::day_of_week(year, 57);
        for day_of_year in 58..=62 {
            let current = calendar::day_of_week(year, day_of_year);
            prop_assert_eq!(current, (previous + 1) % 7, "{} day {}", year, day_of_year);
            previous = current;
        }
        let last = calendar::day_of_week(year, calendar::days_in_year(year));
        prop_assert_eq!(calendar::day_of_week(year + 1, 1), (last + 1) % 7);
    }

    /// PROPERTY: Month arithmetic lands on the target month and never grows the day.
    #[test]
    fn property_add_months_clamps(value in date_time(), months in -240i32..=240) {
        let moved = value.add_months(months);
        let source = i64::from(value.year()) * 12 + i64::from(value.month()) - 1;
        let target = i64::from(moved.year()) * 12 + i64::from(moved.month()) - 1;
        prop_assert_eq!(target - source, i64::from(months));
        prop_assert!(moved.day() <= value.day());
        prop_assert_eq!(moved.millis_since_midnight(), value.millis_since_midnight());
    }

    /// PROPERTY: Day of year always fits the year after any year step.
    #[test]
    fn property_year_steps_stay_valid(value in date_time(), years in -400i32..=400) {
        for moved in [value.add_years(years), value.roll_years(years)] {
            prop_assert_eq!(moved.year(), value.year() + years);
            prop_assert!(moved.day_of_year() >= 1);
            prop_assert!(moved.day_of_year() <= calendar::days_in_year(moved.year()));
        }
    }

    /// PROPERTY: Both text forms parse back to the value they render.
    #[test]
    fn property_text_round_trip(value in date_time()) {
        prop_assert_eq!(CompactFormat.parse(&CompactFormat.format(&value)), Ok(value));
        prop_assert_eq!(IsoFormat.parse(&IsoFormat.format(&value)), Ok(value));
        prop_assert_eq!(value.to_string().parse::<DateTime>(), Ok(value));
    }

    /// PROPERTY: The next business day is a later weekday at midnight.
    #[test]
    fn property_next_business_day(value in date_time()) {
        for next in [value.next_business_day(&NoHolidays), value.next_business_day(&UsHolidays)] {
            prop_assert!(next > value);
            prop_assert!(!next.is_weekend());
            prop_assert_eq!(next.millis_since_midnight(), 0);
        }
        prop_assert!(!value.next_business_day(&UsHolidays).is_holiday(&UsHolidays));
    }

    /// PROPERTY: `from_to` excludes its upper bound, `from_up_to` includes it.
    #[test]
    fn property_range_bounds(a in date_time(), b in date_time()) {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let exclusive = DateTimeRange::from_to(lower, upper);
        let inclusive = DateTimeRange::from_up_to(lower, upper);

        prop_assert!(!exclusive.within(&upper));
        prop_assert!(inclusive.within(&upper));
        prop_assert!(inclusive.within(&lower));
        prop_assert!(inclusive.contains(&exclusive));
    }
}
