//! Text formatting shared by every part of the chart.
//!
//! [`format_label`] is the only way a timestamp becomes a category label. The
//! axis, the trade markers, the zone endpoints and the tooltip all go through
//! it; a marker only lines up with its bar if both labels are byte-equal.
//!
//! Labels are rendered in UTC with English month names so output never depends
//! on the host locale or time zone.

use chrono::DateTime;

/// Label used when a timestamp falls outside chrono's range.
pub const INVALID_DATE: &str = "Invalid Date";

/// Short month name and day number, e.g. `Jan 2`, or `Jan 2, 24` with the
/// 2-digit year.
pub fn format_label(timestamp_millis: i64, include_year: bool) -> String {
    let Some(dt) = DateTime::from_timestamp_millis(timestamp_millis) else {
        return INVALID_DATE.to_string();
    };
    if include_year {
        dt.format("%b %-d, %y").to_string()
    } else {
        dt.format("%b %-d").to_string()
    }
}

/// Price with two decimals.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

/// Volume with comma thousands separators, e.g. `1,234,567`.
pub fn format_volume(value: u64) -> String {
    let digits = value.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-02T00:00:00Z
    const JAN_2_2024: i64 = 1_704_153_600_000;

    #[test]
    fn label_without_year() {
        assert_eq!(format_label(JAN_2_2024, false), "Jan 2");
    }

    #[test]
    fn label_with_year() {
        assert_eq!(format_label(JAN_2_2024, true), "Jan 2, 24");
        // 2005-11-20T15:00:00Z
        assert_eq!(format_label(1_132_498_800_000, true), "Nov 20, 05");
    }

    #[test]
    fn label_is_utc() {
        // one millisecond before midnight stays on the previous day
        assert_eq!(format_label(JAN_2_2024 - 1, false), "Jan 1");
    }

    #[test]
    fn intraday_bars_share_a_label() {
        let hour = 3_600_000;
        assert_eq!(format_label(JAN_2_2024 + hour, false), format_label(JAN_2_2024 + 5 * hour, false));
    }

    #[test]
    fn out_of_range_label() {
        assert_eq!(format_label(i64::MAX, true), INVALID_DATE);
    }

    #[test]
    fn prices() {
        assert_eq!(format_price(10.0), "10.00");
        assert_eq!(format_price(130.456), "130.46");
        assert_eq!(format_price(-0.5), "-0.50");
    }

    #[test]
    fn volumes() {
        assert_eq!(format_volume(0), "0");
        assert_eq!(format_volume(999), "999");
        assert_eq!(format_volume(1_000), "1,000");
        assert_eq!(format_volume(70_790_813), "70,790,813");
        assert_eq!(format_volume(u64::MAX), "18,446,744,073,709,551,615");
    }
}
