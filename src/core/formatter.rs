// src/core/formatter.rs

//! Human-readable rendering of arbitrary values for log lines.

use crate::constants::PRETTY_INDENT;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::any::TypeId;
use std::borrow::Cow;
use std::fmt::{self, Debug, Display};

/// The outcome of formatting a value. Every variant carries the rendered text,
/// so formatting can never fail from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatted {
    /// The value was already text and is returned untouched.
    Text(String),
    /// The value was serialized as indented JSON.
    Json(String),
    /// Serialization failed; this holds the value's `Debug` representation.
    Fallback(String),
}

impl Formatted {
    /// Returns the rendered text, whichever path produced it.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Json(s) | Self::Fallback(s) => s,
        }
    }

    /// Consumes the result and returns the rendered text.
    pub fn into_string(self) -> String {
        match self {
            Self::Text(s) | Self::Json(s) | Self::Fallback(s) => s,
        }
    }

    /// True when serialization failed and the `Debug` fallback was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pretty formats any value for display.
///
/// Text (`str`, `String`, `&str`, `Cow<str>`) passes through as-is. Every
/// other value is rendered as JSON indented with two spaces, even when that
/// JSON is a single string such as `Some("x")` or a unit enum variant. If the
/// value cannot be serialized a warning is logged and its `Debug` output is
/// returned instead.
///
/// The text check looks at the static type, so `T` must be `'static`.
pub fn pformat<T>(value: &T) -> String
where
    T: Serialize + Debug + ?Sized + 'static,
{
    format_value(value).into_string()
}

/// Like [`pformat`], but reports which rendering path was taken.
pub fn format_value<T>(value: &T) -> Formatted
where
    T: Serialize + Debug + ?Sized + 'static,
{
    match to_pretty_json(value) {
        Ok(json) if is_text::<T>() => match decode_text(&json) {
            Some(text) => Formatted::Text(text),
            None => Formatted::Json(json),
        },
        Ok(json) => Formatted::Json(json),
        Err(e) => {
            log::warn!("Couldn't pretty format {:?}, error: {}", value, e);
            Formatted::Fallback(format!("{:?}", value))
        }
    }
}

fn is_text<T: ?Sized + 'static>() -> bool {
    let id = TypeId::of::<T>();
    id == TypeId::of::<str>()
        || id == TypeId::of::<String>()
        || id == TypeId::of::<&'static str>()
        || id == TypeId::of::<Cow<'static, str>>()
}

fn to_pretty_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(PRETTY_INDENT.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8(buffer)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

/// Text types always serialize to one JSON string literal; decoding it back
/// gives the original text without quotes or escapes.
fn decode_text(json: &str) -> Option<String> {
    serde_json::from_str::<String>(json).ok()
}
