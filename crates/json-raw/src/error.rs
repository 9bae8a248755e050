use thiserror::Error;

/// Errors surfaced by the strict entry points.
///
/// The lenient accessors (`as_str`, `as_int`, `as_array`, ...) never return
/// one of these; they fall back to a zero value instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The JSON codec rejected the raw span, or its content does not fit the
    /// requested shape.
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    /// None of the layouts tried could parse the textual timestamp.
    #[error("no layout matched {input:?}")]
    NoLayoutMatched { input: String },
    /// A span that sniffs as a number is neither an integer nor a float.
    #[error("{value:?} is not an epoch number")]
    InvalidEpoch { value: String },
    /// A numeric timestamp maps outside the representable date range.
    #[error("timestamp {value} is out of range")]
    TimestampOutOfRange {
        value: String,
        #[source]
        source: time::error::ComponentRange,
    },
    /// A custom layout is not a valid format description.
    #[error("invalid layout {layout:?}")]
    InvalidLayout {
        layout: String,
        #[source]
        source: time::error::InvalidFormatDescription,
    },
}
