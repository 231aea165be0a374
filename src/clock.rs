// SPDX-License-Identifier: MIT
//
// Wall-clock sampling. The displayed string is always `HH:MM:SS`, 24-hour,
// zero-padded, in the host's local time zone.

use chrono::{Local, Timelike};

/// Format any time-of-day as `HH:MM:SS`.
pub fn format_time(t: &impl Timelike) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

/// The current local time, formatted for display.
pub fn now() -> String {
    format_time(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32, s: u32) -> String {
        format_time(&NaiveTime::from_hms_opt(h, m, s).unwrap())
    }

    #[test]
    fn zero_padded() {
        assert_eq!(at(1, 2, 3), "01:02:03");
    }

    #[test]
    fn twenty_four_hour() {
        assert_eq!(at(23, 59, 59), "23:59:59");
        assert_eq!(at(0, 0, 0), "00:00:00");
        assert_eq!(at(13, 5, 0), "13:05:00");
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        let t = NaiveTime::from_hms_milli_opt(7, 8, 9, 999).unwrap();
        assert_eq!(format_time(&t), "07:08:09");
    }

    #[test]
    fn now_has_clock_shape() {
        let s = now();
        assert_eq!(s.len(), 8);
        assert!(s.chars().all(|c| c.is_ascii_digit() || c == ':'));
        assert_eq!(s.matches(':').count(), 2);
    }
}
