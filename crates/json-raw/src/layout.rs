//! Date-time layouts for textual timestamps.
//!
//! A [`Layout`] is either one of the well-known formats or a custom
//! [`time` format description](https://time-rs.github.io/book/api/format-description.html)
//! such as `[year]-[month]-[day]`.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::format_description::BorrowedFormatItem;
use time::{format_description, Date, OffsetDateTime, PrimitiveDateTime};
use tracing::debug;

use crate::error::Error;

const RFC1123: &str =
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT";

const RFC1123Z: &str = "[weekday repr:short], [day] [month repr:short] [year] \
                        [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]";

/// The layouts tried by [`Value::as_time`](crate::Value::as_time), in order.
pub static DEFAULT_LAYOUTS: [Layout; 6] = [
    Layout::Rfc3339,
    Layout::Rfc1123,
    Layout::Rfc1123Z,
    Layout::Custom(Cow::Borrowed("[year]-[month]-[day] [hour]:[minute]:[second]")),
    Layout::Custom(Cow::Borrowed("[year]-[month]-[day]")),
    Layout::Custom(Cow::Borrowed("[year]/[month]/[day]")),
];

/// A date-time format.
///
/// Layouts that carry no UTC offset parse as UTC, and date-only layouts as
/// midnight UTC.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Layout {
    /// RFC 3339 with optional fractional seconds, e.g.
    /// `2006-01-02T15:04:05.999999999+07:00`.
    Rfc3339,
    /// RFC 1123 in GMT, e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
    Rfc1123,
    /// RFC 1123 with a numeric offset, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`.
    Rfc1123Z,
    /// RFC 2822, e.g. `Mon, 2 Jan 2006 15:04:05 -0700`.
    Rfc2822,
    /// A `time` format description.
    Custom(Cow<'static, str>),
}

impl Layout {
    pub fn custom(description: impl Into<Cow<'static, str>>) -> Self {
        Layout::Custom(description.into())
    }

    /// Identifier reported when this layout matches.
    pub fn name(&self) -> &str {
        match self {
            Layout::Rfc3339 => "RFC3339",
            Layout::Rfc1123 => "RFC1123",
            Layout::Rfc1123Z => "RFC1123Z",
            Layout::Rfc2822 => "RFC2822",
            Layout::Custom(description) => &**description,
        }
    }

    /// Check that a custom description is well formed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayout`] if the description does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use json_raw::Layout;
    ///
    /// Layout::custom("[year]-[month]").validate().unwrap();
    /// Layout::custom("[year").validate().unwrap_err();
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        let description = match self {
            Layout::Rfc3339 | Layout::Rfc2822 => return Ok(()),
            Layout::Rfc1123 => RFC1123,
            Layout::Rfc1123Z => RFC1123Z,
            Layout::Custom(description) => &**description,
        };
        format_description::parse(description)
            .map(drop)
            .map_err(|source| Error::InvalidLayout {
                layout: description.to_string(),
                source,
            })
    }

    /// Parse `input` with this layout, requiring the whole input to match.
    pub(crate) fn parse(&self, input: &str) -> Option<OffsetDateTime> {
        match self {
            Layout::Rfc3339 => OffsetDateTime::parse(input, &Rfc3339).ok(),
            Layout::Rfc2822 => OffsetDateTime::parse(input, &Rfc2822).ok(),
            Layout::Rfc1123 => parse_described(RFC1123, input),
            Layout::Rfc1123Z => parse_described(RFC1123Z, input),
            Layout::Custom(description) => parse_described(description, input),
        }
    }
}

fn parse_described(description: &str, input: &str) -> Option<OffsetDateTime> {
    if let Some(items) = builtin_items(description) {
        return parse_items(items, input);
    }
    match format_description::parse(description) {
        Ok(items) => parse_items(&items, input),
        Err(err) => {
            debug!(layout = description, %err, "skipping invalid layout");
            None
        }
    }
}

/// Parsed items for the RFC 1123 pair and the custom defaults, built once.
fn builtin_items(description: &str) -> Option<&'static [BorrowedFormatItem<'static>]> {
    static BUILTIN: OnceLock<Vec<(&'static str, Vec<BorrowedFormatItem<'static>>)>> =
        OnceLock::new();

    BUILTIN
        .get_or_init(|| {
            let customs = DEFAULT_LAYOUTS.iter().filter_map(|layout| match layout {
                Layout::Custom(Cow::Borrowed(description)) => Some(*description),
                _ => None,
            });
            [RFC1123, RFC1123Z]
                .into_iter()
                .chain(customs)
                .filter_map(|description| {
                    Some((description, format_description::parse(description).ok()?))
                })
                .collect()
        })
        .iter()
        .find(|(known, _)| *known == description)
        .map(|(_, items)| items.as_slice())
}

fn parse_items(items: &[BorrowedFormatItem<'_>], input: &str) -> Option<OffsetDateTime> {
    if let Ok(datetime) = OffsetDateTime::parse(input, items) {
        return Some(datetime);
    }
    if let Ok(datetime) = PrimitiveDateTime::parse(input, items) {
        return Some(datetime.assume_utc());
    }
    Date::parse(input, items)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `RFC3339` (or `RFC3339Nano`), `RFC1123`, `RFC1123Z` and `RFC2822` name
/// the well-known layouts; any other string is a custom description.
impl FromStr for Layout {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "RFC3339" | "RFC3339Nano" => Layout::Rfc3339,
            "RFC1123" => Layout::Rfc1123,
            "RFC1123Z" => Layout::Rfc1123Z,
            "RFC2822" => Layout::Rfc2822,
            other => Layout::Custom(Cow::Owned(other.to_string())),
        })
    }
}
