//! Deferred-decoding JSON values.
//!
//! A [`Value`] keeps one JSON value as its verbatim source text and only
//! interprets it when asked. The JSON type is sniffed from the first
//! significant byte ([`Kind`]), and the accessors convert on demand.
//!
//! Accessors come in two tiers. The lenient ones (`as_str`, `as_int`,
//! `as_uint`, `as_float`, `as_bool`, `as_array`, `as_object`, `pointer`)
//! never fail and fall back to a zero value. The strict ones (`decode`,
//! `decode_into`, `as_time`, `as_time_with`) return [`Result`].
//!
//! # Example
//!
//! ```
//! use json_raw::{Kind, Value};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Event {
//!     id: Value,
//!     at: Value,
//!     tags: Value,
//! }
//!
//! let event: Event = serde_json::from_str(
//!     r#"{"id": "42", "at": 1700000000, "tags": ["a", "b"]}"#,
//! ).unwrap();
//!
//! assert_eq!(event.id.kind(), Kind::String);
//! assert_eq!(event.id.as_int(0), 42);
//! assert_eq!(event.at.as_time().unwrap().format.label(), "U");
//! assert_eq!(event.tags.as_array().len(), 2);
//!
//! // Serializing re-emits the source text untouched.
//! assert_eq!(serde_json::to_string(&event.tags).unwrap(), r#"["a", "b"]"#);
//! ```

mod error;
pub use error::Error;

mod kind;
pub use kind::Kind;

mod layout;
pub use layout::{Layout, DEFAULT_LAYOUTS};

pub mod pointer;

mod timestamp;
pub use timestamp::{ParsedTime, TimeFormat, MIN_MILLIS, MIN_NANOS};

mod value;
pub use value::{Array, Object, Value};
