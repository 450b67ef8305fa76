//! motio-io-core: byte streams for persisting and reloading runtime data.
//!
//! One [`Stream`] trait, three backings:
//! - [`FileStream`]: native file handle, opened by path or adopted
//! - [`SpanStream`]: caller-owned slice with fixed capacity
//! - [`MemoryStream`]: self-allocated buffer that grows on write
//!
//! Payloads are opaque bytes; higher-level serializers drive the stream through
//! `read`/`write`/`seek`/`tell`/`size` and must check `opened()` first.

pub mod adapter;
pub mod config;
mod cursor;
pub mod error;
pub mod file;
pub mod memory;
pub mod span;
pub mod stream;

pub use adapter::StreamIo;
pub use config::StreamConfig;
pub use error::StreamError;
pub use file::{FileStream, OpenMode};
pub use memory::MemoryStream;
pub use span::SpanStream;
pub use stream::{Origin, Stream};
