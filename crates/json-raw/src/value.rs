//! The deferred-decoding [`Value`] type.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Deserializer};
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tracing::trace;

use crate::error::Error;
use crate::kind::Kind;

/// An ordered sequence of raw values.
pub type Array = Vec<Value>;

/// A mapping from key to raw value, in source-document order.
pub type Object = IndexMap<String, Value>;

/// One JSON value kept as its verbatim source text.
///
/// Nothing is decoded up front. The accessors come in two tiers:
///
/// - lenient: [`kind`](Value::kind), [`as_str`](Value::as_str),
///   [`as_int`](Value::as_int), [`as_uint`](Value::as_uint),
///   [`as_float`](Value::as_float), [`as_bool`](Value::as_bool),
///   [`as_array`](Value::as_array), [`as_object`](Value::as_object) and
///   [`pointer`](Value::pointer) never fail. A value that does not fit
///   yields the zero value of the target type.
/// - strict: [`decode`](Value::decode), [`decode_into`](Value::decode_into)
///   and [`as_time`](Value::as_time) return a [`Result`].
///
/// An empty span stands for JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Value {
    raw: Box<str>,
}

impl Value {
    /// The empty span, i.e. `null`.
    pub fn null() -> Self {
        Self::default()
    }

    /// Wrap raw JSON text without validating it.
    pub fn from_raw(raw: impl Into<Box<str>>) -> Self {
        Self { raw: raw.into() }
    }

    /// Wrap JSON text after checking it with the codec.
    ///
    /// Whitespace around the value is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `json` is not a single well-formed JSON
    /// value.
    ///
    /// # Example
    ///
    /// ```
    /// use json_raw::Value;
    ///
    /// let value = Value::from_json(" [1, 2] ").unwrap();
    /// assert_eq!(value.raw(), "[1, 2]");
    /// assert!(Value::from_json("[1, 2").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: &RawValue = serde_json::from_str(json)?;
        Ok(Self::from(raw))
    }

    /// The verbatim source text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn into_raw(self) -> Box<str> {
        self.raw
    }

    pub fn kind(&self) -> Kind {
        Kind::of(&self.raw)
    }

    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    /// Textual content of the value.
    ///
    /// A quoted span loses exactly one layer of quotes; escape sequences in
    /// between are returned as written. Everything else comes back verbatim.
    /// Use `decode::<String>()` for properly unescaped text.
    ///
    /// # Example
    ///
    /// ```
    /// use json_raw::Value;
    ///
    /// assert_eq!(Value::from_raw("\"abc\"").as_str(), "abc");
    /// assert_eq!(Value::from_raw(r#""a\"b""#).as_str(), r#"a\"b"#);
    /// assert_eq!(Value::from_raw("12").as_str(), "12");
    /// assert_eq!(Value::null().as_str(), "");
    /// ```
    pub fn as_str(&self) -> &str {
        let raw = &*self.raw;
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            &raw[1..raw.len() - 1]
        } else {
            raw
        }
    }

    /// Signed integer in the given radix; `0` means base 10.
    ///
    /// Never fails: an unparsable value or a radix outside `2..=36` gives 0.
    pub fn as_int(&self, radix: u32) -> i64 {
        match lenient_radix(radix) {
            Some(radix) => self.lenient("i64", i64::from_str_radix(self.as_str(), radix)),
            None => self.lenient("i64", Err(InvalidRadix(radix))),
        }
    }

    /// Unsigned integer in the given radix; `0` means base 10.
    ///
    /// Never fails: an unparsable value or a radix outside `2..=36` gives 0.
    pub fn as_uint(&self, radix: u32) -> u64 {
        match lenient_radix(radix) {
            Some(radix) => self.lenient("u64", u64::from_str_radix(self.as_str(), radix)),
            None => self.lenient("u64", Err(InvalidRadix(radix))),
        }
    }

    /// Never fails: an unparsable value gives `0.0`.
    pub fn as_float(&self) -> f64 {
        self.lenient("f64", self.as_str().parse::<f64>())
    }

    /// Boolean from the literals `1 t T TRUE true True` and
    /// `0 f F FALSE false False`.
    ///
    /// Never fails: anything else gives `false`.
    pub fn as_bool(&self) -> bool {
        self.lenient(
            "bool",
            parse_bool(self.as_str()).ok_or("not a boolean literal"),
        )
    }

    /// Elements of an array value.
    ///
    /// Never fails: a value that does not decode as an array gives an empty
    /// vector.
    pub fn as_array(&self) -> Array {
        self.lenient("array", self.decode::<Array>())
    }

    /// Members of an object value, in document order.
    ///
    /// Never fails: a value that does not decode as an object gives an empty
    /// map.
    pub fn as_object(&self) -> Object {
        self.lenient("object", self.decode::<Object>())
    }

    /// Decode the raw span into any deserializable shape.
    ///
    /// An empty span decodes as `null`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] on malformed JSON or when the content does
    /// not fit `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_raw::Value;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Point {
    ///     x: i32,
    /// }
    ///
    /// let point: Point = Value::from_raw(r#"{"x":1}"#).decode().unwrap();
    /// assert_eq!(point.x, 1);
    /// assert!(Value::from_raw("not json").decode::<Point>().is_err());
    /// ```
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let raw = if self.raw.is_empty() { "null" } else { self.raw() };
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode into an existing destination.
    ///
    /// `dest` is left untouched when decoding fails.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Value::decode).
    pub fn decode_into<T: DeserializeOwned>(&self, dest: &mut T) -> Result<(), Error> {
        *dest = self.decode()?;
        Ok(())
    }

    fn lenient<T, E>(&self, into: &'static str, result: Result<T, E>) -> T
    where
        T: Default,
        E: fmt::Display,
    {
        result.unwrap_or_else(|err| {
            trace!(raw = %self.raw, into, %err, "lenient coercion fell back to zero value");
            T::default()
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("radix {0} is outside 2..=36")]
struct InvalidRadix(u32);

fn lenient_radix(radix: u32) -> Option<u32> {
    match radix {
        0 => Some(10),
        2..=36 => Some(radix),
        _ => None,
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl From<&RawValue> for Value {
    fn from(raw: &RawValue) -> Self {
        Self::from_raw(raw.get())
    }
}

impl From<Box<RawValue>> for Value {
    fn from(raw: Box<RawValue>) -> Self {
        Self::from(&*raw)
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.raw.is_empty() {
            return serializer.serialize_unit();
        }
        let raw: &RawValue = serde_json::from_str(&self.raw).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(Self::from(raw))
    }
}
