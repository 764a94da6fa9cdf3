use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::grain::Grain;

/// Span covered by one unit of a range.
///
/// Quarters only ever appear as an interval; there is no quarter grain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeInterval {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl RangeInterval {
    pub fn as_str(self) -> &'static str {
        match self {
            RangeInterval::Day => "day",
            RangeInterval::Week => "week",
            RangeInterval::Month => "month",
            RangeInterval::Quarter => "quarter",
            RangeInterval::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeKind {
    /// The most recent `count` intervals ending now.
    Rolling,
    /// The elapsed part of the current calendar period.
    PeriodToDate,
}

impl RangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RangeKind::Rolling => "rolling",
            RangeKind::PeriodToDate => "periodToDate",
        }
    }
}

/// Structured interval handed to query builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeDescriptor {
    pub interval: RangeInterval,
    /// `-1` is one full interval; other negatives count base units back from now.
    pub count: i32,
    #[serde(rename = "timeGrain")]
    pub time_grain: Grain,
    #[serde(rename = "type")]
    pub kind: RangeKind,
}

impl RangeDescriptor {
    /// Five days at day grain, used for any unrecognized token.
    pub const DEFAULT: RangeDescriptor = RangeDescriptor {
        interval: RangeInterval::Day,
        count: -5,
        time_grain: Grain::Day,
        kind: RangeKind::Rolling,
    };

    const fn full(interval: RangeInterval, time_grain: Grain, kind: RangeKind) -> Self {
        Self { interval, count: -1, time_grain, kind }
    }
}

impl fmt::Display for RangeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} x{} @ {}",
            self.kind.as_str(),
            self.interval.as_str(),
            self.count,
            self.time_grain
        )
    }
}

/// Range choices offered by a card's range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeToken {
    Last24Hours,
    Last7Days,
    LastMonth,
    LastQuarter,
    LastYear,
    ThisWeek,
    ThisMonth,
    ThisQuarter,
    ThisYear,
}

impl RangeToken {
    pub const ALL: [RangeToken; 9] = [
        RangeToken::Last24Hours,
        RangeToken::Last7Days,
        RangeToken::LastMonth,
        RangeToken::LastQuarter,
        RangeToken::LastYear,
        RangeToken::ThisWeek,
        RangeToken::ThisMonth,
        RangeToken::ThisQuarter,
        RangeToken::ThisYear,
    ];

    /// Exact, case-sensitive token recognition.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == token)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RangeToken::Last24Hours => "last24Hours",
            RangeToken::Last7Days => "last7Days",
            RangeToken::LastMonth => "lastMonth",
            RangeToken::LastQuarter => "lastQuarter",
            RangeToken::LastYear => "lastYear",
            RangeToken::ThisWeek => "thisWeek",
            RangeToken::ThisMonth => "thisMonth",
            RangeToken::ThisQuarter => "thisQuarter",
            RangeToken::ThisYear => "thisYear",
        }
    }

    pub fn descriptor(self) -> RangeDescriptor {
        use RangeInterval as I;
        use RangeKind::{PeriodToDate, Rolling};

        match self {
            RangeToken::Last24Hours => RangeDescriptor::full(I::Day, Grain::Hour, Rolling),
            RangeToken::Last7Days => RangeDescriptor::full(I::Week, Grain::Day, Rolling),
            RangeToken::LastMonth => RangeDescriptor::full(I::Month, Grain::Day, Rolling),
            RangeToken::LastQuarter => {
                RangeDescriptor::full(I::Quarter, Grain::Month, Rolling)
            }
            RangeToken::LastYear => RangeDescriptor::full(I::Year, Grain::Month, Rolling),
            RangeToken::ThisWeek => RangeDescriptor::full(I::Week, Grain::Day, PeriodToDate),
            RangeToken::ThisMonth => {
                RangeDescriptor::full(I::Month, Grain::Day, PeriodToDate)
            }
            RangeToken::ThisQuarter => {
                RangeDescriptor::full(I::Quarter, Grain::Month, PeriodToDate)
            }
            RangeToken::ThisYear => {
                RangeDescriptor::full(I::Year, Grain::Month, PeriodToDate)
            }
        }
    }
}

/// Resolve a range picker token.
///
/// Unknown tokens silently fall back to [`RangeDescriptor::DEFAULT`]; use
/// [`RangeToken::parse`] when recognition matters.
pub fn resolve_range(token: &str) -> RangeDescriptor {
    match RangeToken::parse(token) {
        Some(known) => known.descriptor(),
        None => {
            debug!(token, "unrecognized range token, using default range");
            RangeDescriptor::DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for token in RangeToken::ALL {
            assert_eq!(RangeToken::parse(token.as_str()), Some(token));
        }
    }

    #[test]
    fn known_tokens_cover_one_full_interval() {
        for token in RangeToken::ALL {
            assert_eq!(token.descriptor().count, -1, "{}", token.as_str());
        }
    }

    #[test]
    fn descriptor_serializes_with_wire_keys() {
        let json = serde_json::to_value(resolve_range("thisQuarter")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "interval": "quarter",
                "count": -1,
                "timeGrain": "month",
                "type": "periodToDate"
            })
        );
    }

    #[test]
    fn display_is_compact() {
        assert_eq!(RangeDescriptor::DEFAULT.to_string(), "rolling day x-5 @ day");
    }
}
