use std::fmt;

/// A nullable byte that remembers whether it was ever assigned.
///
/// `Option<u8>` can only say "there is a byte" or "there is not". `Byte`
/// keeps a third state apart so that partial updates survive a round trip
/// through JSON, text or a database driver:
///
/// | State | `is_set` | `is_valid` | Meaning |
/// |-------|----------|------------|---------|
/// | [`Unset`](Byte::Unset) | `false` | `false` | never provided, leave the field alone |
/// | [`Null`](Byte::Null) | `true` | `false` | explicitly provided as null, clear the field |
/// | [`Present`](Byte::Present) | `true` | `true` | explicitly provided, set the field |
///
/// # Example
///
/// ```
/// use null_byte::Byte;
///
/// let unset = Byte::default();
/// let null = Byte::new(b'x', false);
/// let present = Byte::from(b'x');
///
/// assert!(!unset.is_set());
/// assert!(null.is_set() && !null.is_valid());
/// assert_eq!(present.get(), Some(b'x'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Byte {
    /// Never assigned. This is the zero value.
    #[default]
    Unset,
    /// Explicitly assigned "no value".
    Null,
    /// Holds a byte.
    Present(u8),
}

impl Byte {
    /// The JSON null literal, produced for and accepted as [`Byte::Null`].
    pub const NULL_JSON: &'static [u8] = b"null";

    /// Creates a set `Byte`: [`Present`](Byte::Present) when `valid`,
    /// otherwise [`Null`](Byte::Null). The byte is dropped when `valid` is
    /// false.
    #[inline]
    pub const fn new(value: u8, valid: bool) -> Self {
        if valid {
            Byte::Present(value)
        } else {
            Byte::Null
        }
    }

    /// Creates a `Byte` that is always valid.
    #[inline]
    pub const fn from_byte(value: u8) -> Self {
        Byte::Present(value)
    }

    /// Creates a `Byte` that is null when `value` is `None`.
    #[inline]
    pub const fn from_option(value: Option<u8>) -> Self {
        match value {
            Some(value) => Byte::Present(value),
            None => Byte::Null,
        }
    }

    /// Like [`from_option`](Byte::from_option), copying out of a borrowed byte.
    #[inline]
    pub const fn from_ref(value: Option<&u8>) -> Self {
        match value {
            Some(value) => Byte::Present(*value),
            None => Byte::Null,
        }
    }

    /// Returns `true` if this carries an explicit, non-null byte.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Byte::Present(_))
    }

    /// Returns `true` if this was explicitly assigned, null inclusive.
    #[inline]
    pub const fn is_set(&self) -> bool {
        !self.is_unset()
    }

    /// Returns `true` for both [`Unset`](Byte::Unset) and
    /// [`Null`](Byte::Null).
    #[inline]
    pub const fn is_zero(&self) -> bool {
        !self.is_valid()
    }

    /// Returns `true` if this was explicitly assigned null.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Byte::Null)
    }

    /// Returns `true` if this was never assigned.
    ///
    /// Handy with `#[serde(skip_serializing_if = "Byte::is_unset")]` to omit
    /// untouched fields.
    #[inline]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Byte::Unset)
    }

    /// Stores `value` and marks this valid.
    #[inline]
    pub fn set_valid(&mut self, value: u8) {
        *self = Byte::Present(value);
    }

    /// Borrows the stored byte, or `None` when this is not valid.
    ///
    /// The borrow ties the reference to `self`, so it cannot outlive a later
    /// mutation. Use [`get`](Byte::get) for a detached copy.
    #[inline]
    pub const fn ptr(&self) -> Option<&u8> {
        match self {
            Byte::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a copy of the stored byte, or `None` when this is not valid.
    #[inline]
    pub const fn get(&self) -> Option<u8> {
        match *self {
            Byte::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the stored byte, or `default` when this is not valid.
    #[inline]
    pub const fn value_or(&self, default: u8) -> u8 {
        match *self {
            Byte::Present(value) => value,
            _ => default,
        }
    }

    /// Takes the value out, leaving [`Unset`](Byte::Unset) in its place.
    #[inline]
    pub fn take(&mut self) -> Byte {
        std::mem::take(self)
    }
}

impl From<u8> for Byte {
    #[inline]
    fn from(value: u8) -> Self {
        Byte::from_byte(value)
    }
}

impl From<Option<u8>> for Byte {
    #[inline]
    fn from(value: Option<u8>) -> Self {
        Byte::from_option(value)
    }
}

impl From<Byte> for Option<u8> {
    #[inline]
    fn from(value: Byte) -> Self {
        value.get()
    }
}

impl fmt::Display for Byte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Byte::Present(value) => write!(f, "Byte({value:02x})"),
            _ => f.write_str("Byte(invalid)"),
        }
    }
}
