//! Stream over a caller-owned, fixed-capacity byte region.

use crate::cursor::Cursor;
use crate::error::StreamError;
use crate::stream::{Origin, Stream};

/// In-memory stream over a borrowed slice, opened in read/write mode and
/// initially empty. Capacity is the slice length and never grows.
#[derive(Debug)]
pub struct SpanStream<'a> {
    buffer: &'a mut [u8],
    cursor: Cursor,
}

impl<'a> SpanStream<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Valid bytes, `[0, size)`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.cursor.end()]
    }

    /// Shrinks the logical size to `len` (no-op when `len >= size`).
    /// The cursor is clamped to the new end.
    pub fn truncate(&mut self, len: usize) {
        self.cursor.truncate(len);
    }
}

impl Stream for SpanStream<'_> {
    fn opened(&self) -> bool {
        true
    }

    fn read(&mut self, buffer: &mut [u8]) -> usize {
        self.cursor.read(&*self.buffer, buffer)
    }

    fn write(&mut self, buffer: &[u8]) -> usize {
        self.cursor.write(&mut *self.buffer, buffer)
    }

    fn seek(&mut self, offset: i64, origin: Origin) -> Result<(), StreamError> {
        self.cursor.seek(offset, origin, self.buffer.len())
    }

    fn tell(&self) -> Result<u64, StreamError> {
        Ok(self.cursor.tell() as u64)
    }

    fn size(&self) -> u64 {
        self.cursor.end() as u64
    }
}
