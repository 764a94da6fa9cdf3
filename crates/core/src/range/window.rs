//! Concrete timestamps for a [`RangeDescriptor`].

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::resolver::{RangeDescriptor, RangeInterval, RangeKind};

/// Half-open query window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl RangeDescriptor {
    /// Anchor this descriptor at `now`.
    ///
    /// Rolling ranges reach back `|count|` intervals; period-to-date ranges
    /// start at midnight on the first day of the current period.
    pub fn window(&self, now: NaiveDateTime) -> TimeWindow {
        let start = match self.kind {
            RangeKind::Rolling => {
                shift_back(now, self.interval, i64::from(self.count.unsigned_abs()))
            }
            RangeKind::PeriodToDate => period_start(now.date(), self.interval)
                .and_hms_opt(0, 0, 0)
                .unwrap_or(now),
        };
        TimeWindow { start, end: now }
    }
}

fn shift_back(now: NaiveDateTime, interval: RangeInterval, units: i64) -> NaiveDateTime {
    match interval {
        RangeInterval::Day => now - Duration::days(units),
        RangeInterval::Week => now - Duration::weeks(units),
        RangeInterval::Month => with_date(now, add_months(now.date(), -units)),
        RangeInterval::Quarter => with_date(now, add_months(now.date(), -3 * units)),
        RangeInterval::Year => with_date(now, add_months(now.date(), -12 * units)),
    }
}

fn period_start(date: NaiveDate, interval: RangeInterval) -> NaiveDate {
    let first_of = |month: u32| {
        NaiveDate::from_ymd_opt(date.year(), month, 1).unwrap_or(date)
    };
    match interval {
        RangeInterval::Day => date,
        RangeInterval::Week => {
            date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
        }
        RangeInterval::Month => first_of(date.month()),
        RangeInterval::Quarter => first_of((date.month() - 1) / 3 * 3 + 1),
        RangeInterval::Year => first_of(1),
    }
}

fn with_date(dt: NaiveDateTime, date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, dt.time())
}

/// Calendar month arithmetic, clamping the day to the target month's length.
fn add_months(date: NaiveDate, months: i64) -> NaiveDate {
    let total_months = i64::from(date.year()) * 12 + i64::from(date.month0()) + months;
    let Ok(new_year) = i32::try_from(total_months.div_euclid(12)) else {
        return date;
    };
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    let new_day = date.day().min(days_in_month(new_year, new_month));

    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}
