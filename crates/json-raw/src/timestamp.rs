//! Time coercion: numeric epochs by magnitude, textual timestamps by layout.

use std::fmt;

use time::OffsetDateTime;

use crate::error::Error;
use crate::kind::Kind;
use crate::layout::{Layout, DEFAULT_LAYOUTS};
use crate::value::Value;

/// Smallest integer read as milliseconds since the epoch.
pub const MIN_MILLIS: i64 = 1_000_000_000_000;

/// Smallest integer read as nanoseconds since the epoch.
pub const MIN_NANOS: i64 = 1_000_000_000_000_000_000;

/// How a timestamp was recognized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    UnixNanos,
    UnixMillis,
    UnixSeconds,
    Layout(Layout),
}

impl TimeFormat {
    /// `NS`, `MS` and `U` for epoch numbers, otherwise the layout name.
    pub fn label(&self) -> &str {
        match self {
            TimeFormat::UnixNanos => "NS",
            TimeFormat::UnixMillis => "MS",
            TimeFormat::UnixSeconds => "U",
            TimeFormat::Layout(layout) => layout.name(),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A successfully coerced timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTime {
    pub format: TimeFormat,
    pub time: OffsetDateTime,
}

impl Value {
    /// Interpret the value as a point in time using [`DEFAULT_LAYOUTS`].
    ///
    /// See [`as_time_with`](Value::as_time_with).
    ///
    /// # Errors
    ///
    /// Same as [`as_time_with`](Value::as_time_with).
    ///
    /// # Example
    ///
    /// ```
    /// use json_raw::Value;
    ///
    /// let parsed = Value::from_raw("1000000000").as_time().unwrap();
    /// assert_eq!(parsed.format.label(), "U");
    /// assert_eq!(parsed.time.unix_timestamp(), 1_000_000_000);
    ///
    /// let parsed = Value::from_raw("\"2023-01-02\"").as_time().unwrap();
    /// assert_eq!(parsed.format.label(), "[year]-[month]-[day]");
    /// ```
    pub fn as_time(&self) -> Result<ParsedTime, Error> {
        self.as_time_with(&DEFAULT_LAYOUTS)
    }

    /// Interpret the value as a point in time.
    ///
    /// Numbers are epoch timestamps: nanoseconds from [`MIN_NANOS`] up,
    /// milliseconds from [`MIN_MILLIS`] up, seconds below that (fractional
    /// seconds allowed). Anything else is read as text and tried against
    /// `layouts` in order; the first layout that parses the whole text wins.
    /// An empty `layouts` slice means [`DEFAULT_LAYOUTS`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEpoch`] if a span sniffed as a number is not one.
    /// - [`Error::TimestampOutOfRange`] if an epoch number falls outside the
    ///   supported date range.
    /// - [`Error::NoLayoutMatched`] if no layout parses the text.
    pub fn as_time_with(&self, layouts: &[Layout]) -> Result<ParsedTime, Error> {
        if self.kind() == Kind::Number {
            return self.epoch_time();
        }

        let layouts = if layouts.is_empty() {
            &DEFAULT_LAYOUTS[..]
        } else {
            layouts
        };
        let input = self.as_str();
        layouts
            .iter()
            .find_map(|layout| {
                layout.parse(input).map(|time| ParsedTime {
                    format: TimeFormat::Layout(layout.clone()),
                    time,
                })
            })
            .ok_or_else(|| Error::NoLayoutMatched {
                input: input.to_string(),
            })
    }

    fn epoch_time(&self) -> Result<ParsedTime, Error> {
        let text = self.as_str().trim();
        let (format, nanos) = match text.parse::<i128>() {
            Ok(n) if n >= i128::from(MIN_NANOS) => (TimeFormat::UnixNanos, n),
            Ok(n) if n >= i128::from(MIN_MILLIS) => {
                (TimeFormat::UnixMillis, n.saturating_mul(1_000_000))
            }
            Ok(n) => (TimeFormat::UnixSeconds, n.saturating_mul(1_000_000_000)),
            // Fractional or exponent notation, always seconds.
            Err(_) => match text.parse::<f64>() {
                Ok(seconds) => (TimeFormat::UnixSeconds, seconds_to_nanos(seconds)),
                Err(_) => {
                    return Err(Error::InvalidEpoch {
                        value: text.to_string(),
                    })
                }
            },
        };
        let time = OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|source| {
            Error::TimestampOutOfRange {
                value: text.to_string(),
                source,
            }
        })?;
        Ok(ParsedTime { format, time })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn seconds_to_nanos(seconds: f64) -> i128 {
    // Saturating float-to-int cast; out-of-range values fail the range check.
    (seconds * 1e9).round() as i128
}
