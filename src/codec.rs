//! Packing of `(year, day_of_year, time_of_day)` into plain integers.
//!
//! Both forms keep the fields in fixed-width slots with the year in the
//! signed high bits, so integer comparison of two packed values gives the
//! same answer as comparing the tuples.
//!
//! ```text
//! i64: [ year | day_of_year:9 | time_of_day:28 ]
//! i32: [ year | day_of_year:9 ]
//! ```

use crate::consts::{DAY_BITS, DAY_MASK, MAX_YEAR, MIN_YEAR, TIME_BITS, TIME_MASK};

/// Packs a date into the 32-bit date-only form.
///
/// `year` must lie in `MIN_YEAR..=MAX_YEAR`; outside it the shift wraps
/// and the packed value no longer orders or unpacks correctly.
#[inline]
pub const fn pack_date(year: i32, day_of_year: u16) -> i32 {
    debug_assert!(year >= MIN_YEAR && year <= MAX_YEAR, "year outside packable range");
    (year << DAY_BITS) | day_of_year as i32
}

/// Unpacks the 32-bit form into `(year, day_of_year)`.
#[inline]
pub const fn unpack_date(rep: i32) -> (i32, u16) {
    (rep >> DAY_BITS, (rep as i64 & DAY_MASK) as u16)
}

/// Packs a date and time of day into the 64-bit form.
#[inline]
pub const fn pack(year: i32, day_of_year: u16, time_of_day: u32) -> i64 {
    ((pack_date(year, day_of_year) as i64) << TIME_BITS) | time_of_day as i64
}

/// Unpacks the 64-bit form into `(year, day_of_year, time_of_day)`.
#[inline]
pub const fn unpack(rep: i64) -> (i32, u16, u32) {
    let (year, day_of_year) = unpack_date((rep >> TIME_BITS) as i32);
    (year, day_of_year, (rep & TIME_MASK) as u32)
}

/// Drops the time of day from a 64-bit value, giving its 32-bit date form.
#[inline]
pub const fn date_part(rep: i64) -> i32 {
    (rep >> TIME_BITS) as i32
}

/// Widens a 32-bit date into a 64-bit value at midnight.
#[inline]
pub const fn widen(date_rep: i32) -> i64 {
    (date_rep as i64) << TIME_BITS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MILLIS_PER_DAY;

    #[test]
    fn test_round_trip_edges() {
        let cases = [
            (2012, 1, 0),
            (2012, 366, MILLIS_PER_DAY - 1),
            (0, 1, 0),
            (-1, 365, 12_345),
            (MIN_YEAR, 1, 0),
            (MAX_YEAR, 366, MILLIS_PER_DAY - 1),
        ];

        for (year, doy, time) in cases {
            assert_eq!(unpack(pack(year, doy, time)), (year, doy, time), "({year}, {doy}, {time})");
            assert_eq!(unpack_date(pack_date(year, doy)), (year, doy), "({year}, {doy})");
        }
    }

    #[test]
    fn test_known_layout() {
        assert_eq!(pack_date(1, 1), 0b10_0000_0001);
        assert_eq!(pack(0, 1, 5), (1 << 28) | 5);
    }

    #[test]
    fn test_ordering_across_sign_and_fields() {
        let ordered = [
            pack(-2, 366, MILLIS_PER_DAY - 1),
            pack(-1, 1, 0),
            pack(-1, 1, 1),
            pack(0, 365, 0),
            pack(1, 1, 0),
            pack(2012, 59, MILLIS_PER_DAY - 1),
            pack(2012, 60, 0),
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "year outside packable range")]
    fn test_pack_rejects_unpackable_year() {
        let _ = pack_date(MAX_YEAR + 1, 1);
    }

    #[test]
    fn test_date_part_and_widen() {
        let rep = pack(1999, 200, 43_200_000);
        assert_eq!(date_part(rep), pack_date(1999, 200));
        assert_eq!(widen(date_part(rep)), pack(1999, 200, 0));
    }
}
