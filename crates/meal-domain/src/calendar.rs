//! Week Calendar
//!
//! Monday-to-Sunday week ranges used by the planner and the shopping list.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use log::debug;

/// Format used by the backend for dates (`yyyy-MM-dd`)
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// A week starting on Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week that holds `date`
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday();
        let start = date - Days::new(u64::from(offset));
        debug!("[CALENDAR] {date} belongs to week starting {start}");
        Self { start }
    }

    /// Monday
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Sunday
    pub fn end(&self) -> NaiveDate {
        self.start + Days::new(6)
    }

    /// The seven days, Monday first
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(7).collect()
    }

    pub fn next(&self) -> Self {
        Self {
            start: self.start + Days::new(7),
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Days::new(7),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// Header text, e.g. "12 Oct - 18 Oct 2026"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%-d %b"),
            self.end().format("%-d %b %Y")
        )
    }
}

pub fn format_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

pub fn parse_api_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), API_DATE_FORMAT).ok()
}

/// Calendar-day equality
pub fn same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

pub fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_monday() {
        // 2026-10-14 is a Wednesday
        let week = Week::containing(date(2026, 10, 14));
        assert_eq!(week.start(), date(2026, 10, 12));
        assert_eq!(week.end(), date(2026, 10, 18));
    }

    #[test]
    fn test_sunday_belongs_to_previous_monday() {
        let week = Week::containing(date(2026, 10, 18));
        assert_eq!(week.start(), date(2026, 10, 12));
        let monday = Week::containing(date(2026, 10, 12));
        assert_eq!(week, monday);
    }

    #[test]
    fn test_days_cross_month_boundary() {
        let week = Week::containing(date(2026, 11, 1));
        let days = week.days();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2026, 10, 26));
        assert_eq!(days[6], date(2026, 11, 1));
        assert_eq!(days[0].weekday(), Weekday::Mon);
    }

    #[test]
    fn test_navigation() {
        let week = Week::containing(date(2026, 1, 1));
        assert_eq!(week.start(), date(2025, 12, 29));
        assert_eq!(week.next().start(), date(2026, 1, 5));
        assert_eq!(week.previous().start(), date(2025, 12, 22));
        assert_eq!(week.next().previous(), week);
    }

    #[test]
    fn test_api_date_round_trip() {
        assert_eq!(format_api_date(date(2026, 3, 7)), "2026-03-07");
        assert_eq!(parse_api_date("2026-03-07"), Some(date(2026, 3, 7)));
        assert_eq!(parse_api_date("07/03/2026"), None);
    }

    #[test]
    fn test_contains_and_label() {
        let week = Week::containing(date(2026, 10, 14));
        assert!(week.contains(date(2026, 10, 18)));
        assert!(!week.contains(date(2026, 10, 19)));
        assert_eq!(week.label(), "12 Oct - 18 Oct 2026");
    }
}
