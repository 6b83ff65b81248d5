//! ISO 8601 durations as used by Graph (`P1DT2H30M`, `-PT0.5S`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An ISO 8601 duration, kept component-wise so it formats back exactly.
///
/// Years and months have no fixed length, so there is no lossless
/// conversion to a `chrono::Duration`; [`IsoDuration::to_chrono`] assumes
/// 365-day years and 30-day months. A zero duration is never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub milliseconds: u32,
}

impl IsoDuration {
    pub fn from_days(days: u32) -> Self {
        Self { days, ..Self::default() }
    }

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds, ..Self::default() }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.milliseconds == 0
    }

    /// Approximate signed length, or `None` when it overflows.
    pub fn to_chrono(&self) -> Option<chrono::Duration> {
        let days = i64::from(self.years)
            .checked_mul(365)?
            .checked_add(i64::from(self.months).checked_mul(30)?)?
            .checked_add(i64::from(self.weeks).checked_mul(7)?)?
            .checked_add(i64::from(self.days))?;
        let minutes = days
            .checked_mul(24)?
            .checked_add(i64::from(self.hours))?
            .checked_mul(60)?
            .checked_add(i64::from(self.minutes))?;
        let millis = minutes
            .checked_mul(60_000)?
            .checked_add(i64::from(self.seconds) * 1000)?
            .checked_add(i64::from(self.milliseconds))?;
        let total = chrono::Duration::milliseconds(millis);
        Some(if self.negative { -total } else { total })
    }

    fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.milliseconds != 0
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative && !self.is_zero() {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.is_zero() {
            return f.write_str("T0S");
        }
        for (amount, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if amount != 0 {
                write!(f, "{amount}{designator}")?;
            }
        }
        if !self.has_time() {
            return Ok(());
        }
        f.write_str("T")?;
        if self.hours != 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes != 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.milliseconds != 0 {
            let fraction = format!("{:03}", self.milliseconds);
            write!(f, "{}.{}S", self.seconds, fraction.trim_end_matches('0'))?;
        } else if self.seconds != 0 {
            write!(f, "{}S", self.seconds)?;
        }
        Ok(())
    }
}

// ============================================================================
// Parsing
// ============================================================================

impl FromStr for IsoDuration {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidValue { kind: "duration", value: text.to_owned() };

        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let rest = rest.strip_prefix('P').ok_or_else(invalid)?;
        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let mut duration = IsoDuration { negative, ..Self::default() };
        let mut any = false;

        let date = components(date_part).ok_or_else(invalid)?;
        if !in_order(&date, "YMWD") {
            return Err(invalid());
        }
        for (number, designator) in date {
            let amount: u32 = number.parse().map_err(|_| invalid())?;
            match designator {
                'Y' => duration.years = amount,
                'M' => duration.months = amount,
                'W' => duration.weeks = amount,
                'D' => duration.days = amount,
                _ => return Err(invalid()),
            }
            any = true;
        }

        if let Some(time) = time_part {
            let parts = components(time).ok_or_else(invalid)?;
            // "PT" alone carries no component
            if parts.is_empty() || !in_order(&parts, "HMS") {
                return Err(invalid());
            }
            for (number, designator) in parts {
                match designator {
                    'H' => duration.hours = number.parse().map_err(|_| invalid())?,
                    'M' => duration.minutes = number.parse().map_err(|_| invalid())?,
                    'S' => {
                        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
                        duration.seconds = whole.parse().map_err(|_| invalid())?;
                        duration.milliseconds = parse_millis(fraction).ok_or_else(invalid)?;
                    }
                    _ => return Err(invalid()),
                }
            }
            any = true;
        }

        if !any {
            return Err(invalid());
        }
        if duration.is_zero() {
            duration.negative = false;
        }
        Ok(duration)
    }
}

/// Each designator at most once, in the order given by `designators`.
/// Unknown designators are left for the caller to reject.
fn in_order(parts: &[(&str, char)], designators: &str) -> bool {
    let mut last = None;
    for (_, designator) in parts {
        let Some(position) = designators.find(*designator) else { continue };
        if last.is_some_and(|prev| position <= prev) {
            return false;
        }
        last = Some(position);
    }
    true
}

/// Split `12D3H` style text into `(number, designator)` pairs.
fn components(text: &str) -> Option<Vec<(&str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        if i == start {
            return None;
        }
        out.push((&text[start..i], c));
        start = i + c.len_utf8();
    }
    if start != text.len() {
        return None;
    }
    Some(out)
}

/// Fractional seconds to milliseconds, truncating past three digits.
fn parse_millis(fraction: &str) -> Option<u32> {
    if fraction.is_empty() {
        return Some(0);
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits: String = fraction.chars().chain("00".chars()).take(3).collect();
    digits.parse().ok()
}
