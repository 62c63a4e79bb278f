use std::fmt;

use crate::Error;
use crate::ErrorKind;

/// BoundedString is a growable string with a hard ceiling on its length.
///
/// Every append either writes all of its input or nothing at all, so a
/// failed append never leaves a truncated value behind. Callers chain
/// appends with `?` and stop at the first overflow.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedString {
    buf: String,
    capacity: usize,
}

impl BoundedString {
    /// Create an empty string that may hold at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            capacity,
        }
    }

    /// The maximum length in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes still available before the ceiling is hit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Current length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the content.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Append `s` if it fits entirely.
    pub fn push_str(&mut self, s: &str) -> Result<&mut Self, Overflow> {
        self.reserve_exact(s.len())?;
        self.buf.push_str(s);
        Ok(self)
    }

    /// Append a single char if it fits.
    pub fn push(&mut self, c: char) -> Result<&mut Self, Overflow> {
        self.reserve_exact(c.len_utf8())?;
        self.buf.push(c);
        Ok(self)
    }

    /// Append every piece yielded by `pieces` as one atomic write.
    ///
    /// The total length is checked before anything is written.
    pub fn push_all<'a, I>(&mut self, pieces: I) -> Result<&mut Self, Overflow>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let pieces = pieces.into_iter();
        let total = pieces.clone().map(str::len).sum();
        self.reserve_exact(total)?;
        pieces.for_each(|p| self.buf.push_str(p));
        Ok(self)
    }

    /// Append the `Display` form of `value` if it fits.
    pub fn push_display(&mut self, value: impl fmt::Display) -> Result<&mut Self, Overflow> {
        self.push_str(&value.to_string())
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.buf
    }

    fn reserve_exact(&mut self, additional: usize) -> Result<(), Overflow> {
        let requested = self.buf.len().saturating_add(additional);
        if requested > self.capacity {
            return Err(Overflow {
                capacity: self.capacity,
                requested,
            });
        }
        self.buf.reserve(additional);
        Ok(())
    }
}

impl fmt::Debug for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedString")
            .field("len", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("buf", &self.buf)
            .finish()
    }
}

impl fmt::Display for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl AsRef<str> for BoundedString {
    fn as_ref(&self) -> &str {
        &self.buf
    }
}

impl From<BoundedString> for String {
    fn from(value: BoundedString) -> Self {
        value.buf
    }
}

/// Overflow is returned when an append would exceed a [`BoundedString`]'s ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    capacity: usize,
    requested: usize,
}

impl Overflow {
    /// Create an overflow for a write that needed `requested` bytes out of `capacity`.
    pub fn new(capacity: usize, requested: usize) -> Self {
        Self {
            capacity,
            requested,
        }
    }

    /// The ceiling that was hit.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The length the failed write would have produced.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Convert into an [`Error`] of the given kind.
    pub fn into_error(self, kind: ErrorKind, message: impl Into<String>) -> Error {
        Error::new(
            kind,
            format!(
                "{}: needs {} bytes, limit is {}",
                message.into(),
                self.requested,
                self.capacity
            ),
        )
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer overflow: needs {} bytes, limit is {}",
            self.requested, self.capacity
        )
    }
}

impl std::error::Error for Overflow {}
