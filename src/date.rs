//! The calendar day an entry is generated for.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("date must be in YYYY-MM-DD format, got '{0}'")]
pub struct InvalidDate(pub String);

/// A `YYYY-MM-DD` date. Always displayed zero-padded, which is also the
/// form used in file names and CSV rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for EntryDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDate(s.to_string());
        if s.trim() != s {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(s, FORMAT)
            .map(EntryDate)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        let date: EntryDate = "2025-07-04".parse().unwrap();
        assert_eq!(date.to_string(), "2025-07-04");
        assert_eq!(date.naive(), NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
    }

    #[test]
    fn rejects_other_formats() {
        assert!("04/07/2025".parse::<EntryDate>().is_err());
        assert!("2025-13-01".parse::<EntryDate>().is_err());
        assert!("2025-02-30".parse::<EntryDate>().is_err());
        assert!("yesterday".parse::<EntryDate>().is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(" 2025-01-01".parse::<EntryDate>().is_err());
        assert!("2025-01-01 ".parse::<EntryDate>().is_err());
        assert!("2025-01-01\n".parse::<EntryDate>().is_err());
    }

    #[test]
    fn error_message_shows_input() {
        let err = "tomorrow".parse::<EntryDate>().unwrap_err();
        assert_eq!(err.to_string(), "date must be in YYYY-MM-DD format, got 'tomorrow'");
    }
}
