//! Spoken date parsing
//!
//! Converts a recognized date fragment like "march 3rd 2030" into a calendar
//! date. Month, day and year tokens are recognized independently and may
//! appear in any order; the literal token "today" overrides everything.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Month names recognized in spoken dates (input is lowercase)
const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Ordinal suffixes that mark a day token
const DAY_SUFFIXES: [&str; 4] = ["rd", "th", "st", "nd"];

/// Characters stripped from the right end of an ordinal day token.
///
/// The whole suffix character set is stripped, not just the matched suffix,
/// so a token like "bird" loses more than an ordinal ("bi"). Kept as-is:
/// spoken day tokens are short numerals in practice, and a malformed
/// remainder is reported without aborting the scan.
const DAY_SUFFIX_CHARS: [char; 6] = ['r', 'd', 't', 'h', 's', 'n'];

/// Why a spoken date fragment did not resolve.
///
/// The display strings are the exact sentences the assistant speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("The year cannot be in the past. Please provide a valid year.")]
    YearInPast,

    #[error("Invalid month. Please try again.")]
    MissingMonth,

    #[error("Invalid day. Please try again.")]
    MissingDay,

    #[error("Invalid day format. Please try again.")]
    MalformedDay,

    #[error("The date is invalid. Please check the day and month.")]
    ImpossibleDate,
}

/// Outcome of scanning one spoken date fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenDate {
    /// The resolved date, or why resolution failed
    pub resolved: Result<NaiveDate, DateError>,

    /// Non-fatal problems encountered mid-scan, to be spoken to the user.
    /// A malformed day token lands here; the scan continues past it.
    pub notices: Vec<DateError>,
}

/// Parse a spoken date fragment against an injected "today".
///
/// Callers pass `Local::now().date_naive()`; tests pin a fixed date.
pub fn parse_spoken_date(text: &str, today: NaiveDate) -> SpokenDate {
    let mut notices = Vec::new();

    // "today" short-circuits all other parsing
    if text.contains("today") {
        return SpokenDate {
            resolved: Ok(today),
            notices,
        };
    }

    let mut month: Option<u32> = None;
    let mut day: Option<u32> = None;
    let mut year: Option<i32> = None;

    for word in text.split_whitespace() {
        if let Some(idx) = MONTHS.iter().position(|m| *m == word) {
            month = Some(idx as u32 + 1);
        }

        if DAY_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
            let stripped = word.trim_end_matches(DAY_SUFFIX_CHARS);
            match stripped.parse::<u32>() {
                Ok(d) => day = Some(d),
                Err(e) => {
                    tracing::warn!("Unparsable day token '{}': {}", word, e);
                    notices.push(DateError::MalformedDay);
                }
            }
        }

        if word.len() == 4 && word.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(y) = word.parse::<i32>() {
                if y < today.year() {
                    return SpokenDate {
                        resolved: Err(DateError::YearInPast),
                        notices,
                    };
                }
                year = Some(y);
            }
        }
    }

    let resolved = match (month, day) {
        (None, _) => Err(DateError::MissingMonth),
        (_, None) => Err(DateError::MissingDay),
        (Some(month), Some(day)) => {
            let year = year.unwrap_or_else(|| today.year());
            NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::ImpossibleDate)
        }
    };

    SpokenDate { resolved, notices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_short_circuits() {
        assert_eq!(parse_spoken_date("today", today()).resolved, Ok(today()));
        // Other tokens present, even bogus ones, are ignored
        assert_eq!(
            parse_spoken_date("today march 99th 1980", today()).resolved,
            Ok(today())
        );
    }

    #[test]
    fn test_full_date_in_any_order() {
        assert_eq!(
            parse_spoken_date("march 3rd 2030", today()).resolved,
            Ok(date(2030, 3, 3))
        );
        assert_eq!(
            parse_spoken_date("2030 3rd march", today()).resolved,
            Ok(date(2030, 3, 3))
        );
    }

    #[test]
    fn test_year_defaults_to_current() {
        assert_eq!(
            parse_spoken_date("december 21st", today()).resolved,
            Ok(date(2026, 12, 21))
        );
    }

    #[test]
    fn test_past_year_fails_despite_valid_tokens() {
        let parsed = parse_spoken_date("march 3rd 2019", today());
        assert_eq!(parsed.resolved, Err(DateError::YearInPast));
    }

    #[test]
    fn test_missing_month_or_day_fails() {
        assert_eq!(
            parse_spoken_date("3rd 2030", today()).resolved,
            Err(DateError::MissingMonth)
        );
        assert_eq!(
            parse_spoken_date("march 2030", today()).resolved,
            Err(DateError::MissingDay)
        );
        // A year alone satisfies neither requirement
        assert_eq!(
            parse_spoken_date("2030", today()).resolved,
            Err(DateError::MissingMonth)
        );
    }

    #[test]
    fn test_impossible_calendar_date() {
        assert_eq!(
            parse_spoken_date("february 30th 2030", today()).resolved,
            Err(DateError::ImpossibleDate)
        );
    }

    #[test]
    fn test_suffix_stripping_takes_whole_character_class() {
        // "21st" strips to "21"
        assert_eq!(
            parse_spoken_date("june 21st", today()).resolved,
            Ok(date(2026, 6, 21))
        );
        // "august" ends with "st"; stripping eats into the word and the
        // remainder is not a number - a notice, not an abort
        let parsed = parse_spoken_date("august 3rd", today());
        assert_eq!(parsed.resolved, Ok(date(2026, 8, 3)));
        assert_eq!(parsed.notices, vec![DateError::MalformedDay]);
    }

    #[test]
    fn test_malformed_day_does_not_block_later_day_token() {
        let parsed = parse_spoken_date("bird march 3rd", today());
        assert_eq!(parsed.resolved, Ok(date(2026, 3, 3)));
        assert_eq!(parsed.notices, vec![DateError::MalformedDay]);
    }
}
