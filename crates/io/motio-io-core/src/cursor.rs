//! Cursor bookkeeping shared by the in-memory streams.
//!
//! `SpanStream` and `MemoryStream` both own a [`Cursor`] and hand it their
//! storage as a [`Backing`]; the only difference between them is whether the
//! backing may grow.

use crate::error::StreamError;
use crate::stream::Origin;

/// Storage the cursor reads from and writes into.
pub(crate) trait Backing {
    fn bytes(&self) -> &[u8];

    fn bytes_mut(&mut self) -> &mut [u8];

    /// Asks for at least `size` addressable bytes.
    /// Returns true if the storage can now hold `size` bytes.
    fn resize(&mut self, size: usize) -> bool;

    /// Highest position the cursor may be moved to.
    fn limit(&self) -> usize;
}

/// A borrowed slice never grows.
impl Backing for [u8] {
    #[inline]
    fn bytes(&self) -> &[u8] {
        self
    }

    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }

    #[inline]
    fn resize(&mut self, size: usize) -> bool {
        size <= self.len()
    }

    #[inline]
    fn limit(&self) -> usize {
        self.len()
    }
}

/// `end` is the logical size, `tell` the read/write position.
/// Invariant: `end <= backing.bytes().len()` and `tell <= backing.limit()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Cursor {
    end: usize,
    tell: usize,
}

impl Cursor {
    #[inline]
    pub(crate) fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub(crate) fn tell(&self) -> usize {
        self.tell
    }

    pub(crate) fn read<B: Backing + ?Sized>(&mut self, backing: &B, out: &mut [u8]) -> usize {
        let available = self.end.saturating_sub(self.tell);
        let n = out.len().min(available);
        if n == 0 {
            return 0;
        }
        out[..n].copy_from_slice(&backing.bytes()[self.tell..self.tell + n]);
        self.tell += n;
        n
    }

    pub(crate) fn write<B: Backing + ?Sized>(&mut self, backing: &mut B, input: &[u8]) -> usize {
        let wanted = input.len().min(backing.limit().saturating_sub(self.tell));
        if wanted == 0 {
            return 0;
        }

        let n = if backing.resize(self.tell + wanted) {
            wanted
        } else {
            backing.bytes().len().saturating_sub(self.tell).min(wanted)
        };
        if n == 0 {
            return 0;
        }

        let bytes = backing.bytes_mut();
        // Bytes between the old end and a cursor seeked past it read back as zero.
        if self.tell > self.end {
            bytes[self.end..self.tell].fill(0);
        }
        bytes[self.tell..self.tell + n].copy_from_slice(&input[..n]);
        self.tell += n;
        self.end = self.end.max(self.tell);
        n
    }

    pub(crate) fn seek(
        &mut self,
        offset: i64,
        origin: Origin,
        limit: usize,
    ) -> Result<(), StreamError> {
        let base = match origin {
            Origin::Current => self.tell,
            Origin::End => self.end,
            Origin::Set => 0,
        };
        let target = base as i128 + offset as i128;
        if target < 0 || target > limit as i128 {
            return Err(StreamError::OutOfRange {
                target,
                limit: limit as u64,
            });
        }
        self.tell = target as usize;
        Ok(())
    }

    /// Shrinks the logical size to `len`. Storage is left untouched.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len < self.end {
            self.end = len;
            self.tell = self.tell.min(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_clamps_to_fixed_backing() {
        let mut storage = [0u8; 4];
        let mut cursor = Cursor::default();
        assert_eq!(cursor.write(&mut storage[..], b"abcdef"), 4);
        assert_eq!(cursor.tell(), 4);
        assert_eq!(cursor.end(), 4);
        assert_eq!(&storage, b"abcd");
    }

    #[test]
    fn overwrite_inside_content_keeps_end() {
        let mut storage = [0u8; 8];
        let mut cursor = Cursor::default();
        cursor.write(&mut storage[..], b"abcdef");
        cursor.seek(1, Origin::Set, 8).unwrap();
        assert_eq!(cursor.write(&mut storage[..], b"XY"), 2);
        assert_eq!(cursor.end(), 6);
        assert_eq!(&storage[..6], b"aXYdef");
    }

    #[test]
    fn failed_seek_leaves_cursor() {
        let mut cursor = Cursor::default();
        assert!(cursor.seek(-1, Origin::Set, 8).is_err());
        assert!(cursor.seek(9, Origin::Current, 8).is_err());
        assert_eq!(cursor.tell(), 0);
    }
}
