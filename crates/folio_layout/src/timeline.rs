//! Timeline dates and tenure text

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid month `{0}`, expected YYYY-MM or Present")]
pub struct DateParseError(pub String);

/// Calendar month, written `YYYY-MM`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// `None` unless `month` is in `1..=12`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Current month in local time
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Short label such as `Jan 2023`
    pub fn label(self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%b %Y").to_string(),
            None => self.to_string(),
        }
    }

    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }
}

impl FromStr for YearMonth {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map_err(|_| DateParseError(s.to_string()))?;
        Ok(Self::from_date(date))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// End of a timeline entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimelineEnd {
    Present,
    Month(YearMonth),
}

impl TimelineEnd {
    /// Resolve against the current month
    pub fn resolve(self, today: YearMonth) -> YearMonth {
        match self {
            Self::Present => today,
            Self::Month(month) => month,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Present => "Present".to_string(),
            Self::Month(month) => month.label(),
        }
    }
}

impl FromStr for TimelineEnd {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("present") {
            Ok(Self::Present)
        } else {
            s.parse().map(Self::Month)
        }
    }
}

impl TryFrom<String> for TimelineEnd {
    type Error = DateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimelineEnd> for String {
    fn from(value: TimelineEnd) -> Self {
        match value {
            TimelineEnd::Present => "Present".to_string(),
            TimelineEnd::Month(month) => month.to_string(),
        }
    }
}

/// Months covered from `start` to `end`, both inclusive
pub fn months_between(start: YearMonth, end: YearMonth) -> i64 {
    end.index() - start.index() + 1
}

/// Tenure such as `2 years, 3 months`
pub fn duration_text(start: YearMonth, end: TimelineEnd, today: YearMonth) -> String {
    let months = months_between(start, end.resolve(today)).max(0);
    let years = months / 12;
    let remaining = months % 12;

    if years == 0 {
        plural(remaining, "month")
    } else if remaining == 0 {
        plural(years, "year")
    } else {
        format!("{}, {}", plural(years, "year"), plural(remaining, "month"))
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn last_month_counts() {
        let today = ym("2025-06");
        assert_eq!(duration_text(ym("2024-01"), TimelineEnd::Month(ym("2024-01")), today), "1 month");
        assert_eq!(duration_text(ym("2024-01"), TimelineEnd::Month(ym("2024-12")), today), "1 year");
        assert_eq!(duration_text(ym("2022-01"), TimelineEnd::Month(ym("2023-12")), today), "2 years");
        assert_eq!(
            duration_text(ym("2023-03"), TimelineEnd::Month(ym("2024-04")), today),
            "1 year, 2 months"
        );
        assert_eq!(duration_text(ym("2025-01"), TimelineEnd::Present, today), "6 months");
    }

    #[test]
    fn parses_and_labels() {
        assert_eq!(ym("2023-07").label(), "Jul 2023");
        assert_eq!("present".parse::<TimelineEnd>(), Ok(TimelineEnd::Present));
        assert!("2023-13".parse::<YearMonth>().is_err());
        assert!("July 2023".parse::<YearMonth>().is_err());
        assert_eq!(String::from(ym("2023-07")), "2023-07");
    }

    #[test]
    fn end_before_start_is_zero_months() {
        let text = duration_text(ym("2024-05"), TimelineEnd::Month(ym("2023-01")), ym("2025-01"));
        assert_eq!(text, "0 months");
    }
}
