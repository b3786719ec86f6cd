//! JSON contract for [`Byte`].
//!
//! The byte travels as a one-character JSON string, never as a number.
//!
//! | JSON | Byte |
//! |------|------|
//! | empty input, `null` | [`Byte::Null`] |
//! | `""` | [`Byte::Null`] |
//! | `"a"` | [`Byte::Present(b'a')`](Byte::Present) |
//! | `"` `0xe9` `"` | [`Byte::Present(0xe9)`](Byte::Present) |
//! | `"ab"`, `"é"` | [`Error::TextTooLong`] |
//! | anything else | [`Error::Json`] |
//!
//! Length is counted in bytes. A byte in `0x80..=0xff` is written raw
//! between the quotes, so [`Byte::marshal_json`] output for those bytes is
//! not valid UTF-8. [`Byte::unmarshal_json`] reads it back, which keeps
//! every byte round-trippable through the raw codec. The serde
//! [`Serialize`] impl cannot emit such output and fails for those bytes
//! instead.
//!
//! # Quick Start
//!
//! ```
//! use null_byte::Byte;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Patch {
//!     #[serde(default, skip_serializing_if = "Byte::is_unset")]
//!     grade: Byte,
//! }
//!
//! let keep: Patch = serde_json::from_str("{}").unwrap();
//! let clear: Patch = serde_json::from_str(r#"{"grade":null}"#).unwrap();
//! let set: Patch = serde_json::from_str(r#"{"grade":"A"}"#).unwrap();
//!
//! assert_eq!(keep.grade, Byte::Unset);
//! assert_eq!(clear.grade, Byte::Null);
//! assert_eq!(set.grade, Byte::Present(b'A'));
//! assert_eq!(serde_json::to_string(&keep).unwrap(), "{}");
//! ```

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Unexpected, Visitor},
    ser,
};
use tracing::{debug, trace};

use crate::{Byte, Error, Result, cold_path};

impl Byte {
    /// Encodes as JSON: `null` when not valid, otherwise a one-character
    /// string holding the byte.
    pub fn marshal_json(&self) -> Vec<u8> {
        match *self {
            Byte::Present(value) if value.is_ascii() => {
                serde_json::Value::String(char::from(value).to_string())
                    .to_string()
                    .into_bytes()
            }
            Byte::Present(value) => vec![b'"', value, b'"'],
            _ => Byte::NULL_JSON.to_vec(),
        }
    }

    /// Decodes raw JSON into `self`.
    ///
    /// Empty input is read as `null`. On error `self` is left unchanged.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() || data == Byte::NULL_JSON {
            *self = Byte::Null;
            trace!("json: decoded null");
            return Ok(());
        }

        // a lone non-ASCII byte between quotes, as written by marshal_json
        if let [b'"', value @ 0x80..=0xFF, b'"'] = *data {
            *self = Byte::Present(value);
            trace!(state = %self, "json: decoded raw byte");
            return Ok(());
        }

        let text: String = serde_json::from_slice(data).inspect_err(|error| {
            debug!(%error, "json: rejected malformed input");
        })?;
        *self = decode_str(&text).inspect_err(|error| {
            debug!(%error, "json: rejected string");
        })?;
        trace!(state = %self, "json: decoded");
        Ok(())
    }
}

fn decode_str(text: &str) -> Result<Byte> {
    match *text.as_bytes() {
        [] => Ok(Byte::Null),
        [value] => Ok(Byte::Present(value)),
        _ => {
            cold_path();
            Err(Error::TextTooLong { len: text.len() })
        }
    }
}

impl Serialize for Byte {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match *self {
            Byte::Present(value) if value.is_ascii() => {
                serializer.serialize_char(char::from(value))
            }
            Byte::Present(value) => Err(ser::Error::custom(format_args!(
                "byte {value:#04x} is not valid UTF-8 text, use Byte::marshal_json"
            ))),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Byte {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ByteVisitor)
    }
}

struct ByteVisitor;

impl<'de> Visitor<'de> for ByteVisitor {
    type Value = Byte;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null or a one-character string")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Byte, E> {
        Ok(Byte::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Byte, E> {
        Ok(Byte::Null)
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Byte, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_char<E: de::Error>(self, v: char) -> std::result::Result<Byte, E> {
        if v.is_ascii() {
            Ok(Byte::Present(v as u8))
        } else {
            Err(E::invalid_value(Unexpected::Char(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Byte, E> {
        decode_str(v).map_err(|_| E::invalid_length(v.len(), &self))
    }
}
