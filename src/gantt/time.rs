//! Calendar periods behind the time axis
//!
//! Months are counted from the project origin. Quarters and years follow the
//! calendar, so the first and last parts may be shorter than a full unit.

use chrono::{Datelike, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Month,
    Quarter,
    Year,
}

impl Unit {
    /// Text shown in the band of the `index`-th part (0-based) of a split
    pub fn label(&self, part: &Period, index: usize) -> String {
        match self {
            Unit::Month => (index + 1).to_string(),
            Unit::Quarter => format!("Q{}", part.start.month0() / 3 + 1),
            Unit::Year => part.start.year().to_string(),
        }
    }

    fn next_boundary(&self, origin: NaiveDate, date: NaiveDate, index: u32) -> Option<NaiveDate> {
        match self {
            // Always offset from the origin so that day 31 does not drift
            Unit::Month => origin.checked_add_months(Months::new(index + 1)),
            Unit::Quarter => {
                let first = date.with_day(1)?;
                first.checked_add_months(Months::new(3 - date.month0() % 3))
            }
            Unit::Year => NaiveDate::from_ymd_opt(date.year() + 1, 1, 1),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Month => write!(f, "month"),
            Unit::Quarter => write!(f, "quarter"),
            Unit::Year => write!(f, "year"),
        }
    }
}

/// Half-open calendar interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Consecutive parts covering the period; the last one is cut at `end`
    #[must_use]
    pub fn split_by(&self, unit: Unit) -> Vec<Period> {
        let mut parts = Vec::new();
        let mut current = self.start;
        let mut index = 0;
        while current < self.end {
            let Some(next) = unit.next_boundary(self.start, current, index) else {
                break;
            };
            let end = next.min(self.end);
            parts.push(Period::new(current, end));
            current = end;
            index += 1;
        }
        parts
    }

    /// Dates where a new part starts, excluding the start of the period
    #[must_use]
    pub fn boundaries(&self, unit: Unit) -> Vec<NaiveDate> {
        self.split_by(unit)
            .iter()
            .skip(1)
            .map(|part| part.start)
            .collect()
    }

    /// Position of `date` within the period, 0 at `start` and 1 at `end`
    #[must_use]
    pub fn normalize(&self, date: NaiveDate) -> f64 {
        let total = self.days();
        if total <= 0 {
            return 0.0;
        }
        (date - self.start).num_days() as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_split_by_month() {
        let period = Period::new(date(2024, 1, 1), date(2024, 4, 1));
        let parts = period.split_by(Unit::Month);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1], Period::new(date(2024, 2, 1), date(2024, 3, 1)));
        assert_eq!(Unit::Month.label(&parts[2], 2), "3");
    }

    #[test]
    fn test_month_split_does_not_drift() {
        let period = Period::new(date(2024, 1, 31), date(2024, 4, 30));
        let starts: Vec<_> = period.split_by(Unit::Month).iter().map(|p| p.start).collect();
        assert_eq!(starts, vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]);
    }

    #[test]
    fn test_quarters_follow_calendar() {
        let period = Period::new(date(2024, 2, 1), date(2024, 11, 1));
        let parts = period.split_by(Unit::Quarter);
        let starts: Vec<_> = parts.iter().map(|p| p.start).collect();
        assert_eq!(
            starts,
            vec![date(2024, 2, 1), date(2024, 4, 1), date(2024, 7, 1), date(2024, 10, 1)]
        );
        assert_eq!(parts.last().unwrap().end, date(2024, 11, 1));
        let labels: Vec<_> = parts
            .iter()
            .enumerate()
            .map(|(i, p)| Unit::Quarter.label(p, i))
            .collect();
        assert_eq!(labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn test_year_boundaries() {
        let period = Period::new(date(2024, 6, 1), date(2026, 3, 1));
        assert_eq!(
            period.boundaries(Unit::Year),
            vec![date(2025, 1, 1), date(2026, 1, 1)]
        );
        let parts = period.split_by(Unit::Year);
        assert_eq!(Unit::Year.label(&parts[0], 0), "2024");
    }

    #[test]
    fn test_normalize() {
        let period = Period::new(date(2024, 1, 1), date(2024, 1, 11));
        assert_eq!(period.normalize(date(2024, 1, 1)), 0.0);
        assert_eq!(period.normalize(date(2024, 1, 6)), 0.5);
        assert_eq!(period.normalize(date(2024, 1, 11)), 1.0);
    }

    #[test]
    fn test_empty_period() {
        let period = Period::new(date(2024, 1, 1), date(2024, 1, 1));
        assert!(period.split_by(Unit::Month).is_empty());
        assert_eq!(period.normalize(date(2024, 5, 1)), 0.0);
    }
}
