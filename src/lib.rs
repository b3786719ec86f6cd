//! A tri-state nullable byte.
//!
//! [`Byte`] tells apart a field that was never provided, one provided as
//! null, and one provided with a value, and keeps that distinction through
//! JSON, raw text and database driver round trips.
//!
//! ```
//! use null_byte::{Byte, DriverValue, Scanner, Valuer};
//!
//! let mut b = Byte::default();
//! b.unmarshal_text(b"z").unwrap();
//! assert_eq!(b.value(), DriverValue::Bytes(vec![b'z']));
//!
//! b.scan(DriverValue::Null).unwrap();
//! assert!(!b.is_set());
//! ```

mod byte;
mod driver;
mod error;
#[cfg(feature = "serde")]
mod json;
mod text;
mod util;

pub use byte::*;
pub use driver::*;
pub use error::*;
pub(crate) use util::*;
