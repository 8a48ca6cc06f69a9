//! Unit tests for tt-core.

use crate::{DAYS, TimeOfDay, TimeRange, TtError, day_column};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(text: &str) -> TimeOfDay {
    TimeOfDay::parse(text).unwrap()
}

fn range(start: &str, end: &str) -> TimeRange {
    TimeRange::new(t(start), t(end))
}

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod time_of_day {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(t("00:00").minutes(), 0);
        assert_eq!(t("09:30").minutes(), 570);
        assert_eq!(t("23:59").minutes(), 23 * 60 + 59);
    }

    #[test]
    fn accepts_unpadded_hour() {
        // strptime-style leniency: "9:30" is the same time as "09:30".
        assert_eq!(t("9:30"), t("09:30"));
    }

    #[test]
    fn rejects_wrong_separator() {
        assert!(TimeOfDay::parse("09.30").is_err());
        assert!(TimeOfDay::parse("0930").is_err());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(TimeOfDay::parse("ab:cd").is_err());
        assert!(TimeOfDay::parse("1a:30").is_err());
        assert!(TimeOfDay::parse("-1:30").is_err());
        assert!(TimeOfDay::parse(":30").is_err());
        assert!(TimeOfDay::parse("").is_err());
    }

    #[test]
    fn error_carries_offending_text() {
        let err = TimeOfDay::parse("25:00").unwrap_err();
        match err {
            TtError::Time(text) => assert_eq!(text, "25:00"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(t("9:05").to_string(), "09:05");
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(t("08:59") < t("09:00"));
        assert!(t("09:00") < t("09:01"));
    }
}

// ── TimeRange ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod time_range {
    use super::*;

    #[test]
    fn parses_range() {
        let r = TimeRange::parse("09:00-10:30").unwrap();
        assert_eq!(r.start, t("09:00"));
        assert_eq!(r.end, t("10:30"));
    }

    #[test]
    fn rejects_missing_dash() {
        assert!(TimeRange::parse("09:00 10:30").is_err());
    }

    #[test]
    fn rejects_bad_component_time() {
        assert!(TimeRange::parse("09:00-25:00").is_err());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = range("09:00", "11:00");
        let b = range("10:00", "12:00");
        assert_eq!(a.overlap_minutes(&b), b.overlap_minutes(&a));
        assert_eq!(a.overlap_minutes(&b), 60);
    }

    #[test]
    fn adjacent_ranges_overlap_zero() {
        // end of a == start of b: disjoint-but-adjacent.
        let a = range("09:00", "10:00");
        let b = range("10:00", "11:00");
        assert_eq!(a.overlap_minutes(&b), 0);
    }

    #[test]
    fn disjoint_ranges_overlap_zero() {
        let a = range("09:00", "10:00");
        let b = range("13:00", "14:00");
        assert_eq!(a.overlap_minutes(&b), 0);
        assert_eq!(b.overlap_minutes(&a), 0);
    }

    #[test]
    fn contained_range_overlaps_fully() {
        let outer = range("09:00", "12:00");
        let inner = range("10:00", "11:00");
        assert_eq!(outer.overlap_minutes(&inner), 60);
    }

    #[test]
    fn identical_ranges_overlap_fully() {
        let a = range("09:00", "10:30");
        assert_eq!(a.overlap_minutes(&a), 90);
    }
}

// ── Day table ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_table {
    use super::*;

    #[test]
    fn canonical_columns() {
        assert_eq!(day_column("MON"), Some(0));
        assert_eq!(day_column("FRI"), Some(4));
        assert_eq!(DAYS.len(), 5);
    }

    #[test]
    fn unknown_label_has_no_column() {
        assert_eq!(day_column("SAT"), None);
        // Exact-match semantics: lower case never matches.
        assert_eq!(day_column("mon"), None);
    }
}
