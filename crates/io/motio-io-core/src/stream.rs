//! The stream interface shared by every backing.
//!
//! Mirrors the CRT `FILE` API: transfers report the byte count that actually
//! moved, positioning reports a success/failure status.

use serde::{Deserialize, Serialize};

use crate::error::StreamError;

/// Reference point for [`Stream::seek`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Current position of the cursor.
    Current,
    /// End of the stream (logical size).
    End,
    /// Beginning of the stream.
    Set,
}

/// Random-access byte stream with a single position indicator.
///
/// Implementations are not reentrant; callers serialize access to one instance.
pub trait Stream {
    /// Whether a medium is attached and ready for transfers.
    fn opened(&self) -> bool;

    /// Reads up to `buffer.len()` bytes at the cursor into `buffer` and
    /// advances the cursor by the returned count. A short count means end of
    /// data or an error; nothing is retried.
    fn read(&mut self, buffer: &mut [u8]) -> usize;

    /// Writes up to `buffer.len()` bytes at the cursor and advances the cursor
    /// by the returned count. A short count means the backing is full.
    fn write(&mut self, buffer: &[u8]) -> usize;

    /// Moves the cursor to `origin + offset`. On failure the cursor is unchanged.
    fn seek(&mut self, offset: i64, origin: Origin) -> Result<(), StreamError>;

    /// Current cursor position from the start of the stream.
    fn tell(&self) -> Result<u64, StreamError>;

    /// Number of valid bytes in the stream, regardless of the cursor.
    fn size(&self) -> u64;

    /// Reads exactly `buffer.len()` bytes. Returns false on a short read; the
    /// bytes that did arrive stay consumed.
    fn read_exact_bytes(&mut self, buffer: &mut [u8]) -> bool {
        self.read(buffer) == buffer.len()
    }

    /// Writes all of `buffer`. Returns false on a short write.
    fn write_all_bytes(&mut self, buffer: &[u8]) -> bool {
        self.write(buffer) == buffer.len()
    }

    #[inline]
    fn rewind(&mut self) -> Result<(), StreamError> {
        self.seek(0, Origin::Set)
    }

    /// Bytes left between the cursor and the logical end.
    fn remaining(&self) -> u64 {
        match self.tell() {
            Ok(pos) => self.size().saturating_sub(pos),
            Err(_) => 0,
        }
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    fn opened(&self) -> bool {
        (**self).opened()
    }

    fn read(&mut self, buffer: &mut [u8]) -> usize {
        (**self).read(buffer)
    }

    fn write(&mut self, buffer: &[u8]) -> usize {
        (**self).write(buffer)
    }

    fn seek(&mut self, offset: i64, origin: Origin) -> Result<(), StreamError> {
        (**self).seek(offset, origin)
    }

    fn tell(&self) -> Result<u64, StreamError> {
        (**self).tell()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    fn opened(&self) -> bool {
        (**self).opened()
    }

    fn read(&mut self, buffer: &mut [u8]) -> usize {
        (**self).read(buffer)
    }

    fn write(&mut self, buffer: &[u8]) -> usize {
        (**self).write(buffer)
    }

    fn seek(&mut self, offset: i64, origin: Origin) -> Result<(), StreamError> {
        (**self).seek(offset, origin)
    }

    fn tell(&self) -> Result<u64, StreamError> {
        (**self).tell()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }
}
