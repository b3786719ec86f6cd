//! Error types for the decode operations of [`Byte`](crate::Byte).
//!
//! Encoding never fails. Every decode path (JSON, text, driver scan) reports
//! failures through the [`Error`] type defined here.
//!
//! # Example
//!
//! ```
//! use null_byte::{Byte, Error};
//!
//! let mut b = Byte::default();
//! match b.unmarshal_text(b"ab") {
//!     Err(Error::TextTooLong { len }) => assert_eq!(len, 2),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! // a rejected decode leaves the receiver untouched
//! assert!(!b.is_set());
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when decoding a
/// [`Byte`](crate::Byte).
#[derive(Debug)]
pub enum Error {
    /// The input is not well-formed JSON, or is JSON but not a string.
    #[cfg(feature = "serde")]
    Json(serde_json::Error),

    /// The decoded JSON string or raw text is longer than one byte.
    ///
    /// `len` is the byte length that was seen.
    TextTooLong { len: usize },

    /// A driver value that cannot be read as text was handed to
    /// [`Scanner::scan`](crate::Scanner::scan).
    ///
    /// Carries the kind of the offending driver value.
    TypeMismatch(&'static str),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            #[cfg(feature = "serde")]
            Error::Json(error) => write!(formatter, "json: {error}"),
            Error::TextTooLong { len } => write!(
                formatter,
                "cannot convert to byte, text len is greater than one (got {len})"
            ),
            Error::TypeMismatch(kind) => {
                write!(formatter, "cannot scan driver value of type {kind} into byte")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Error::Json(error) => Some(error),
            _ => None,
        }
    }
}
