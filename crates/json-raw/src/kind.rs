//! Coarse JSON type classification from the raw lexical form.

use std::fmt;

/// The JSON type of a raw span, sniffed from its first significant byte.
///
/// This is not validation: `"tru"` and `"{oops"` classify as [`Kind::Bool`]
/// and [`Kind::Object`] respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Kind {
    #[default]
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Classify a raw JSON span.
    ///
    /// Leading JSON whitespace is skipped; an empty (or all-whitespace) span
    /// is [`Kind::Null`], as is any unrecognized leading byte.
    ///
    /// # Example
    ///
    /// ```
    /// use json_raw::Kind;
    ///
    /// assert_eq!(Kind::of(""), Kind::Null);
    /// assert_eq!(Kind::of("42"), Kind::Number);
    /// assert_eq!(Kind::of("-1.5"), Kind::Number);
    /// assert_eq!(Kind::of("true"), Kind::Bool);
    /// assert_eq!(Kind::of("\"x\""), Kind::String);
    /// assert_eq!(Kind::of("[1,2]"), Kind::Array);
    /// assert_eq!(Kind::of("{\"a\":1}"), Kind::Object);
    /// ```
    pub fn of(raw: &str) -> Kind {
        let bytes = raw.as_bytes();
        let Some(start) = bytes.iter().position(|b| !is_json_whitespace(*b)) else {
            return Kind::Null;
        };
        match bytes[start] {
            b'0'..=b'9' => Kind::Number,
            b'-' if bytes.get(start + 1).is_some_and(u8::is_ascii_digit) => Kind::Number,
            b't' | b'T' | b'f' | b'F' => Kind::Bool,
            b'"' => Kind::String,
            b'[' => Kind::Array,
            b'{' => Kind::Object,
            _ => Kind::Null,
        }
    }

    /// The JSON type name: `null`, `boolean`, `number`, `string`, `array`
    /// or `object`.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }

    pub fn is_scalar(self) -> bool {
        !matches!(self, Kind::Array | Kind::Object)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
