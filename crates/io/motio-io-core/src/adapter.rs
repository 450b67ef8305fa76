//! Bridge from [`Stream`] to `std::io` so std-based readers and writers can
//! consume any backing.

use std::io::{self, ErrorKind, SeekFrom};

use crate::error::StreamError;
use crate::stream::{Origin, Stream};

/// Wraps a stream and implements `std::io::{Read, Write, Seek}`.
#[derive(Debug)]
pub struct StreamIo<S> {
    inner: S,
}

impl<S: Stream> StreamIo<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_opened(&self) -> io::Result<()> {
        if self.inner.opened() {
            Ok(())
        } else {
            Err(io::Error::new(ErrorKind::NotConnected, StreamError::NotOpened))
        }
    }
}

fn to_io(err: StreamError) -> io::Error {
    match err {
        StreamError::Io(inner) => inner,
        StreamError::NotOpened => {
            io::Error::new(ErrorKind::NotConnected, StreamError::NotOpened)
        }
        other => io::Error::new(ErrorKind::InvalidInput, other),
    }
}

impl<S: Stream> io::Read for StreamIo<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.ensure_opened()?;
        Ok(self.inner.read(buf))
    }
}

impl<S: Stream> io::Write for StreamIo<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.ensure_opened()?;
        let written = self.inner.write(buf);
        if written == 0 && !buf.is_empty() {
            return Err(ErrorKind::WriteZero.into());
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Stream> io::Seek for StreamIo<S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, origin) = match pos {
            SeekFrom::Start(n) => {
                let n = i64::try_from(n)
                    .map_err(|_| io::Error::from(ErrorKind::InvalidInput))?;
                (n, Origin::Set)
            }
            SeekFrom::End(n) => (n, Origin::End),
            SeekFrom::Current(n) => (n, Origin::Current),
        };
        self.inner.seek(offset, origin).map_err(to_io)?;
        self.inner.tell().map_err(to_io)
    }
}
