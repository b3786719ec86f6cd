//! Raw text contract.
//!
//! | Text | Byte |
//! |------|------|
//! | empty | [`Byte::Null`] |
//! | one byte `b` | [`Byte::Present(b)`](Byte::Present) |
//! | two or more bytes | [`Error::TextTooLong`] |
//!
//! [`Byte::Unset`] also encodes to empty text, so it comes back as
//! [`Byte::Null`].

use std::str::FromStr;

use tracing::{debug, trace};

use crate::{Byte, Error, Result, cold_path};

impl Byte {
    /// Encodes as raw text: empty when not valid, otherwise the single byte.
    pub fn marshal_text(&self) -> Vec<u8> {
        match *self {
            Byte::Present(value) => vec![value],
            _ => Vec::new(),
        }
    }

    /// Decodes raw text into `self`.
    ///
    /// On error `self` is left unchanged.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        *self = match *text {
            [] => Byte::Null,
            [value] => Byte::Present(value),
            _ => {
                cold_path();
                debug!(len = text.len(), "text: rejected input longer than one byte");
                return Err(Error::TextTooLong { len: text.len() });
            }
        };
        trace!(state = %self, "text: decoded");
        Ok(())
    }
}

impl FromStr for Byte {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut byte = Byte::Unset;
        byte.unmarshal_text(s.as_bytes())?;
        Ok(byte)
    }
}
