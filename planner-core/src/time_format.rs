//! Display formatting for raw meeting times.
//!
//! The catalog API reports meeting times on a 24-hour clock, either as
//! `HHMM` or as `HH:MM:SS`. The shape is decided once, when the raw string
//! is parsed into a [`RawTime`], and formatting then works on the tagged
//! value.

use std::fmt;

/// A meeting time as received from the catalog, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTime {
    /// Exactly four ASCII digits: `HHMM`
    FourDigit(String),
    /// Two digits, colon, two digits, colon, two digits: `HH:MM:SS`
    WithSeconds(String),
    /// Anything else. Displayed unchanged.
    Opaque(String),
}

impl RawTime {
    /// Classify a raw time string. Empty input has no time at all.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let time = if is_four_digit(raw) {
            RawTime::FourDigit(raw.to_string())
        } else if is_with_seconds(raw) {
            RawTime::WithSeconds(raw.to_string())
        } else {
            RawTime::Opaque(raw.to_string())
        };

        Some(time)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RawTime::FourDigit(s) | RawTime::WithSeconds(s) | RawTime::Opaque(s) => s,
        }
    }

    /// Hour and minute fields, both exactly two ASCII digits.
    fn fields(&self) -> Option<(&str, &str)> {
        match self {
            RawTime::FourDigit(s) => Some((&s[0..2], &s[2..4])),
            // Seconds are dropped
            RawTime::WithSeconds(s) => Some((&s[0..2], &s[3..5])),
            RawTime::Opaque(_) => None,
        }
    }

    /// 24-hour `HH:MM` form, used for calendar block boundaries.
    pub fn clock(&self) -> Option<String> {
        self.fields().map(|(hh, mm)| format!("{hh}:{mm}"))
    }

    /// Minutes since midnight, for ordering. The minute field is not range
    /// checked, so `"0975"` sorts as 9 * 60 + 75.
    pub fn minutes_since_midnight(&self) -> Option<u32> {
        self.fields()
            .map(|(hh, mm)| two_digits(hh) * 60 + two_digits(mm))
    }
}

impl fmt::Display for RawTime {
    /// `H:MM AM|PM` with an unpadded hour. The minute field is copied as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((hh, mm)) = self.fields() else {
            return write!(f, "{}", self.as_str());
        };

        let hh24 = two_digits(hh) as i32;
        // 24xx is midnight, same as 00xx
        let ampm = if hh24 % 24 >= 12 { "PM" } else { "AM" };
        // 1..=12, not 0..=11
        let hh12 = (hh24 - 1).rem_euclid(12) + 1;

        write!(f, "{hh12}:{mm} {ampm}")
    }
}

/// Format a raw meeting time for display.
///
/// Returns `None` for a missing or empty time so callers can render nothing.
pub fn format_time(raw: Option<&str>) -> Option<String> {
    raw.and_then(RawTime::parse).map(|time| time.to_string())
}

fn is_four_digit(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_with_seconds(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 8
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

/// Value of a two-character ASCII digit string.
fn two_digits(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
