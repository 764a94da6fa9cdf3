use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown grain: {0}")]
pub struct GrainParseError(pub String);

/// Aggregation bucket size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grain {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Grain {
    pub const ALL: [Grain; 5] =
        [Grain::Hour, Grain::Day, Grain::Week, Grain::Month, Grain::Year];

    /// Every grain strictly coarser than this one.
    pub fn coarser_grains(self) -> &'static [Grain] {
        match self {
            Grain::Hour => &[Grain::Day, Grain::Week, Grain::Month, Grain::Year],
            Grain::Day => &[Grain::Week, Grain::Month, Grain::Year],
            Grain::Week => &[Grain::Month, Grain::Year],
            Grain::Month => &[Grain::Year],
            Grain::Year => &[],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grain::Hour => "hour",
            Grain::Day => "day",
            Grain::Week => "week",
            Grain::Month => "month",
            Grain::Year => "year",
        }
    }
}

impl fmt::Display for Grain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grain {
    type Err = GrainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Grain::Hour),
            "day" => Ok(Grain::Day),
            "week" => Ok(Grain::Week),
            "month" => Ok(Grain::Month),
            "year" => Ok(Grain::Year),
            other => Err(GrainParseError(other.to_string())),
        }
    }
}

/// Decide which of two grains is coarser.
///
/// An absent first grain stands for "no grain chosen yet" and sorts below
/// every real grain.
pub fn compare_grains(current: Option<Grain>, other: Grain) -> Ordering {
    match current {
        Some(grain) if grain == other => Ordering::Equal,
        None => Ordering::Less,
        Some(grain) if grain.coarser_grains().contains(&other) => Ordering::Less,
        Some(_) => Ordering::Greater,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_grains_are_equal() {
        for grain in Grain::ALL {
            assert_eq!(compare_grains(Some(grain), grain), Ordering::Equal);
        }
    }

    #[test]
    fn absent_grain_sorts_first() {
        for grain in Grain::ALL {
            assert_eq!(compare_grains(None, grain), Ordering::Less);
        }
    }

    #[test]
    fn order_is_strict_and_total() {
        for (i, a) in Grain::ALL.iter().enumerate() {
            for (j, b) in Grain::ALL.iter().enumerate() {
                assert_eq!(compare_grains(Some(*a), *b), i.cmp(&j), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn extremes() {
        assert_eq!(compare_grains(Some(Grain::Year), Grain::Hour), Ordering::Greater);
        assert_eq!(compare_grains(Some(Grain::Hour), Grain::Year), Ordering::Less);
    }

    #[test]
    fn parse_round_trips_names() {
        for grain in Grain::ALL {
            assert_eq!(grain.as_str().parse::<Grain>(), Ok(grain));
        }
        assert!("quarter".parse::<Grain>().is_err());
        assert!("Hour".parse::<Grain>().is_err());
    }
}
