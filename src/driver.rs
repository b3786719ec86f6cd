//! Database driver contract.
//!
//! A driver hands values across as a [`DriverValue`]. [`Scanner`] reads one
//! into a Rust value and [`Valuer`] produces one for a bound parameter.
//!
//! | Driver value | Scanned [`Byte`] |
//! |--------------|------------------|
//! | `Null` | [`Byte::Unset`] |
//! | empty `Text` / `Bytes` | [`Byte::Unset`] |
//! | `Text` / `Bytes` | [`Byte::Present`] with the first byte |
//! | `Integer`, `Float`, `Bool` | [`Error::TypeMismatch`] |

use tracing::{debug, trace};

use crate::{Byte, Error, Result, cold_path};

/// A value as exchanged with a database driver.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum DriverValue {
    /// SQL `NULL`.
    #[default]
    Null,
    Text(String),
    /// Raw bytes; drivers commonly return text columns in this form.
    Bytes(Vec<u8>),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl DriverValue {
    /// Name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Text(_) => "text",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Integer(_) => "integer",
            DriverValue::Float(_) => "float",
            DriverValue::Bool(_) => "bool",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Borrows the raw bytes of a text-like value.
    pub fn as_text_bytes(&self) -> Option<&[u8]> {
        match self {
            DriverValue::Text(text) => Some(text.as_bytes()),
            DriverValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<&str> for DriverValue {
    fn from(value: &str) -> Self {
        DriverValue::Text(value.to_owned())
    }
}

impl From<String> for DriverValue {
    fn from(value: String) -> Self {
        DriverValue::Text(value)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(value: Vec<u8>) -> Self {
        DriverValue::Bytes(value)
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        DriverValue::Integer(value)
    }
}

impl From<f64> for DriverValue {
    fn from(value: f64) -> Self {
        DriverValue::Float(value)
    }
}

impl From<bool> for DriverValue {
    fn from(value: bool) -> Self {
        DriverValue::Bool(value)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DriverValue::Null, Into::into)
    }
}

/// Reads a [`DriverValue`] into `self`.
pub trait Scanner {
    /// On error `self` is left unchanged.
    fn scan(&mut self, value: DriverValue) -> Result<()>;
}

/// Produces the [`DriverValue`] to bind for `self`.
pub trait Valuer {
    fn value(&self) -> DriverValue;
}

impl Scanner for Byte {
    /// Scanning a null or empty value yields [`Byte::Unset`], not
    /// [`Byte::Null`]: a `NULL` column reads back as "not set", unlike the
    /// JSON and text decoders which treat null input as an explicit null.
    ///
    /// Text longer than one byte is truncated to its first byte.
    fn scan(&mut self, value: DriverValue) -> Result<()> {
        let Some(text) = (match &value {
            DriverValue::Null => Some(&[][..]),
            other => other.as_text_bytes(),
        }) else {
            cold_path();
            debug!(kind = value.kind(), "scan: rejected non-text driver value");
            return Err(Error::TypeMismatch(value.kind()));
        };

        *self = match text.first() {
            Some(&first) => Byte::Present(first),
            None => Byte::Unset,
        };
        trace!(state = %self, "scan: decoded");
        Ok(())
    }
}

impl Valuer for Byte {
    fn value(&self) -> DriverValue {
        match *self {
            Byte::Present(value) => DriverValue::Bytes(vec![value]),
            _ => DriverValue::Null,
        }
    }
}
