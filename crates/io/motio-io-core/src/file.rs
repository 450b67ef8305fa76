//! Stream backed by a native file handle.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::StreamError;
use crate::stream::{Origin, Stream};

/// Access flags decoded from an fopen-style mode string (`"rb"`, `"w+b"`, `"a"`...).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpenMode {
    pub read: bool,
    pub write: bool,
    pub append: bool,
    pub truncate: bool,
    pub create: bool,
}

impl OpenMode {
    /// Returns `None` for anything fopen would reject: an unknown leading
    /// letter, or trailing characters other than `+`, `b` and `t`.
    pub fn parse(mode: &str) -> Option<Self> {
        let mut chars = mode.chars();
        let base = chars.next()?;
        let mut update = false;
        for c in chars {
            match c {
                '+' => update = true,
                'b' | 't' => {}
                _ => return None,
            }
        }
        let mode = match base {
            'r' => OpenMode {
                read: true,
                write: update,
                append: false,
                truncate: false,
                create: false,
            },
            'w' => OpenMode {
                read: update,
                write: true,
                append: false,
                truncate: true,
                create: true,
            },
            'a' => OpenMode {
                read: update,
                write: true,
                append: true,
                truncate: false,
                create: true,
            },
            _ => return None,
        };
        Some(mode)
    }

    fn options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options
            .read(self.read)
            .write(self.write)
            .append(self.append)
            .truncate(self.truncate)
            .create(self.create);
        options
    }
}

/// File stream owning its handle. The handle is closed exactly once, either
/// by [`FileStream::close`] or on drop.
#[derive(Debug, Default)]
pub struct FileStream {
    file: Option<File>,
}

impl FileStream {
    /// Opens `path` with an fopen-style `mode`. Failure does not panic: check
    /// [`Stream::opened`] on the result.
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Self {
        let path = path.as_ref();
        let Some(open_mode) = OpenMode::parse(mode) else {
            warn!("file stream: invalid open mode {mode:?} for {}", path.display());
            return Self::default();
        };
        match open_mode.options().open(path) {
            Ok(file) => Self { file: Some(file) },
            Err(err) => {
                debug!("file stream: cannot open {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Takes ownership of an already opened file.
    pub fn from_file(file: File) -> Self {
        Self { file: Some(file) }
    }

    /// Closes the file if it is opened. Calling it again does nothing.
    pub fn close(&mut self) {
        self.file = None;
    }

    /// Releases the handle without closing it.
    pub fn into_file(mut self) -> Option<File> {
        self.file.take()
    }
}

impl Stream for FileStream {
    fn opened(&self) -> bool {
        self.file.is_some()
    }

    fn read(&mut self, buffer: &mut [u8]) -> usize {
        let Some(file) = self.file.as_mut() else {
            return 0;
        };
        let mut total = 0;
        while total < buffer.len() {
            match file.read(&mut buffer[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    debug!("file stream: read failed after {total} bytes: {err}");
                    break;
                }
            }
        }
        total
    }

    fn write(&mut self, buffer: &[u8]) -> usize {
        let Some(file) = self.file.as_mut() else {
            return 0;
        };
        let mut total = 0;
        while total < buffer.len() {
            match file.write(&buffer[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    debug!("file stream: write failed after {total} bytes: {err}");
                    break;
                }
            }
        }
        total
    }

    fn seek(&mut self, offset: i64, origin: Origin) -> Result<(), StreamError> {
        let file = self.file.as_mut().ok_or(StreamError::NotOpened)?;
        let from = match origin {
            Origin::Current => SeekFrom::Current(offset),
            Origin::End => SeekFrom::End(offset),
            Origin::Set => {
                let start = u64::try_from(offset).map_err(|_| StreamError::OutOfRange {
                    target: offset as i128,
                    limit: u64::MAX,
                })?;
                SeekFrom::Start(start)
            }
        };
        file.seek(from)?;
        Ok(())
    }

    fn tell(&self) -> Result<u64, StreamError> {
        let mut file: &File = self.file.as_ref().ok_or(StreamError::NotOpened)?;
        Ok(file.stream_position()?)
    }

    fn size(&self) -> u64 {
        self.file
            .as_ref()
            .and_then(|file| file.metadata().ok())
            .map_or(0, |meta| meta.len())
    }
}
