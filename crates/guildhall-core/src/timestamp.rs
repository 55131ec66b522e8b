//! ISO-8601 timestamps that remember whether they carried a UTC offset.
//!
//! Guild creation times arrive as text such as `2024-01-01T00:00:00` or
//! `2024-01-01T00:00:00+02:00`, or as unix-epoch numbers. The text form is
//! echoed back in JSON and CSV output, so a naive input must render without
//! an offset and an offset input must keep it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const RENDER_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Epoch values with a larger magnitude are milliseconds rather than seconds.
const EPOCH_MILLIS_THRESHOLD: f64 = 2e10;

/// A point in time, with or without a UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock time with no offset information.
    Naive(NaiveDateTime),
    /// Time carrying an explicit UTC offset.
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Parses a timestamp.
    ///
    /// Accepted forms:
    /// - `YYYY-MM-DD`, read as midnight with no offset;
    /// - `YYYY-MM-DDTHH:MM[:SS[.fraction]]` with `T`, `t` or a space as the
    ///   separator, optionally followed by `Z`, `±HH:MM`, `±HHMM` or `±HH`;
    /// - a unix-epoch number in seconds, or milliseconds when its magnitude
    ///   exceeds `2e10`, read as UTC.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the text is none of the above.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| {
            DomainError::Validation(format!("invalid timestamp `{input}`: {reason}"))
        };

        let trimmed = input.trim();
        if let Ok(epoch) = trimmed.parse::<f64>() {
            return Self::from_epoch(epoch);
        }

        let normalized = normalize_separator(trimmed);
        let (local, offset) = split_offset(&normalized).ok_or_else(|| invalid("bad offset"))?;
        let naive = parse_local(local).ok_or_else(|| invalid("not an ISO-8601 date-time"))?;

        match offset {
            None => Ok(Self::Naive(naive)),
            Some(offset) => offset
                .from_local_datetime(&naive)
                .single()
                .map(Self::Offset)
                .ok_or_else(|| invalid("ambiguous local time")),
        }
    }

    /// Builds a UTC timestamp from a unix-epoch value in seconds, or in
    /// milliseconds when its magnitude exceeds `2e10`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is not finite or is out
    /// of range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_epoch(value: f64) -> Result<Self, DomainError> {
        let seconds = if value.abs() > EPOCH_MILLIS_THRESHOLD {
            value / 1_000.0
        } else {
            value
        };
        let micros = (seconds * 1_000_000.0).round();
        if !micros.is_finite() || micros.abs() >= 9.2e18 {
            return Err(DomainError::Validation(format!(
                "epoch timestamp {value} is out of range"
            )));
        }

        DateTime::from_timestamp_micros(micros as i64)
            .map(|utc| Self::Offset(utc.fixed_offset()))
            .ok_or_else(|| {
                DomainError::Validation(format!("epoch timestamp {value} is out of range"))
            })
    }

    /// Returns the local (wall-clock) part of the timestamp.
    #[must_use]
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Naive(naive) => *naive,
            Self::Offset(zoned) => zoned.naive_local(),
        }
    }

    /// Returns the UTC offset, if the timestamp carried one.
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Offset(zoned) => Some(*zoned.offset()),
        }
    }
}

fn normalize_separator(input: &str) -> String {
    match input.as_bytes().get(10) {
        Some(b' ' | b't') => {
            let mut owned = input.to_owned();
            owned.replace_range(10..11, "T");
            owned
        }
        _ => input.to_owned(),
    }
}

/// Splits a trailing `Z` or `±HH[[:]MM]` off the time part. Returns `None`
/// if an offset is present but malformed.
fn split_offset(input: &str) -> Option<(&str, Option<FixedOffset>)> {
    if let Some(local) = input.strip_suffix(['Z', 'z']) {
        return Some((local, FixedOffset::east_opt(0)));
    }

    let Some(time) = input.get(11..) else {
        return Some((input, None));
    };
    let Some(sign_at) = time.rfind(['+', '-']) else {
        return Some((input, None));
    };

    let (local, offset) = input.split_at(11 + sign_at);
    let (sign, digits) = offset.split_at(1);
    let digits = digits.replacen(':', "", 1);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }

    let seconds = (hours * 60 + minutes) * 60;
    let offset = if sign == "-" {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    }?;
    Some((local, Some(offset)))
}

fn parse_local(local: &str) -> Option<NaiveDateTime> {
    if local.len() == 10 {
        return NaiveDate::parse_from_str(local, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0));
    }
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
}

impl fmt::Display for Timestamp {
    /// Renders `YYYY-MM-DDTHH:MM:SS`, then `.ffffff` when the microsecond
    /// part is non-zero, then `±HH:MM` when an offset is present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.naive_local();
        write!(f, "{}", local.format(RENDER_FORMAT))?;

        let micros = (local.nanosecond() / 1_000) % 1_000_000;
        if micros != 0 {
            write!(f, ".{micros:06}")?;
        }

        if let Self::Offset(zoned) = self {
            write!(f, "{}", zoned.format("%:z"))?;
        }
        Ok(())
    }
}

impl FromStr for Timestamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Offset(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an ISO-8601 date-time string or a unix-epoch number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse(v).map_err(E::custom)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Timestamp::from_epoch(v as f64).map_err(E::custom)
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Timestamp::from_epoch(v as f64).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Timestamp::from_epoch(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}
