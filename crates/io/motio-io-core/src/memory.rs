//! Self-allocated in-memory stream.

use log::{debug, warn};

use crate::config::StreamConfig;
use crate::cursor::{Backing, Cursor};
use crate::error::StreamError;
use crate::stream::{Origin, Stream};

/// Owned storage that grows by doubling up to `config.max_size` and never shrinks.
#[derive(Debug)]
struct Growable {
    data: Vec<u8>,
    config: StreamConfig,
}

impl Backing for Growable {
    #[inline]
    fn bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn resize(&mut self, size: usize) -> bool {
        if size <= self.data.len() {
            return true;
        }
        if size > self.config.max_size {
            return false;
        }
        let doubled = self
            .data
            .len()
            .saturating_mul(2)
            .max(self.config.min_capacity);
        let capacity = doubled.max(size).min(self.config.max_size);
        debug!(
            "memory stream: growing {} -> {capacity} bytes",
            self.data.len()
        );
        self.data.resize(capacity, 0);
        true
    }

    #[inline]
    fn limit(&self) -> usize {
        self.config.max_size
    }
}

/// In-memory stream owning its buffer. Starts opened, empty, read/write.
#[derive(Debug)]
pub struct MemoryStream {
    storage: Growable,
    cursor: Cursor,
}

impl Default for MemoryStream {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStream {
    pub fn new() -> Self {
        Self::with_config(StreamConfig::default())
    }

    pub fn with_config(config: StreamConfig) -> Self {
        Self {
            storage: Growable {
                data: Vec::new(),
                config,
            },
            cursor: Cursor::default(),
        }
    }

    pub fn config(&self) -> &StreamConfig {
        &self.storage.config
    }

    /// Bytes currently allocated. Monotonically non-decreasing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.data.len()
    }

    /// Valid bytes, `[0, size)`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.data[..self.cursor.end()]
    }

    /// Consumes the stream, keeping only the valid bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut data = self.storage.data;
        data.truncate(self.cursor.end());
        data
    }

    /// Shrinks the logical size to `len` (no-op when `len >= size`).
    /// Capacity is kept; the cursor is clamped to the new end.
    pub fn truncate(&mut self, len: usize) {
        self.cursor.truncate(len);
    }
}

impl Stream for MemoryStream {
    fn opened(&self) -> bool {
        true
    }

    fn read(&mut self, buffer: &mut [u8]) -> usize {
        self.cursor.read(&self.storage, buffer)
    }

    fn write(&mut self, buffer: &[u8]) -> usize {
        let written = self.cursor.write(&mut self.storage, buffer);
        if written < buffer.len() {
            warn!(
                "memory stream: wrote {written} of {} bytes, limit is {}",
                buffer.len(),
                self.storage.config.max_size
            );
        }
        written
    }

    fn seek(&mut self, offset: i64, origin: Origin) -> Result<(), StreamError> {
        self.cursor.seek(offset, origin, self.storage.config.max_size)
    }

    fn tell(&self) -> Result<u64, StreamError> {
        Ok(self.cursor.tell() as u64)
    }

    fn size(&self) -> u64 {
        self.cursor.end() as u64
    }
}
