use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown card size: {0}")]
pub struct SizeParseError(pub String);

/// Layout tier controlling a card's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardSize {
    Small,
    SmallWide,
    SmallFull,
    MediumThin,
    Medium,
    MediumWide,
    MediumFull,
    LargeThin,
    Large,
    LargeWide,
    LargeFull,
    // Deprecated names, see `migrate_legacy_size`.
    XSmall,
    XSmallWide,
    Wide,
    Tall,
    XLarge,
}

impl CardSize {
    pub const ALL: [CardSize; 16] = [
        CardSize::Small,
        CardSize::SmallWide,
        CardSize::SmallFull,
        CardSize::MediumThin,
        CardSize::Medium,
        CardSize::MediumWide,
        CardSize::MediumFull,
        CardSize::LargeThin,
        CardSize::Large,
        CardSize::LargeWide,
        CardSize::LargeFull,
        CardSize::XSmall,
        CardSize::XSmallWide,
        CardSize::Wide,
        CardSize::Tall,
        CardSize::XLarge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CardSize::Small => "SMALL",
            CardSize::SmallWide => "SMALLWIDE",
            CardSize::SmallFull => "SMALLFULL",
            CardSize::MediumThin => "MEDIUMTHIN",
            CardSize::Medium => "MEDIUM",
            CardSize::MediumWide => "MEDIUMWIDE",
            CardSize::MediumFull => "MEDIUMFULL",
            CardSize::LargeThin => "LARGETHIN",
            CardSize::Large => "LARGE",
            CardSize::LargeWide => "LARGEWIDE",
            CardSize::LargeFull => "LARGEFULL",
            CardSize::XSmall => "XSMALL",
            CardSize::XSmallWide => "XSMALLWIDE",
            CardSize::Wide => "WIDE",
            CardSize::Tall => "TALL",
            CardSize::XLarge => "XLARGE",
        }
    }

    pub fn is_deprecated(self) -> bool {
        matches!(
            self,
            CardSize::XSmall
                | CardSize::XSmallWide
                | CardSize::Wide
                | CardSize::Tall
                | CardSize::XLarge
        )
    }
}

impl fmt::Display for CardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardSize {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SizeParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("mediumwide".parse::<CardSize>(), Ok(CardSize::MediumWide));
        assert_eq!(" XLARGE ".parse::<CardSize>(), Ok(CardSize::XLarge));
        assert!("HUGE".parse::<CardSize>().is_err());
    }

    #[test]
    fn serde_uses_constant_names() {
        let json = serde_json::to_string(&CardSize::SmallWide).unwrap();
        assert_eq!(json, "\"SMALLWIDE\"");
        let back: CardSize = serde_json::from_str("\"XSMALLWIDE\"").unwrap();
        assert_eq!(back, CardSize::XSmallWide);
    }

    #[test]
    fn every_size_round_trips_through_its_name() {
        for size in CardSize::ALL {
            assert_eq!(size.as_str().parse::<CardSize>(), Ok(size));
        }
    }
}
