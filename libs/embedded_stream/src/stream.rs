//! The stream interface and its guarded entry points.
//!
//! Implementations provide [`Stream`]. Callers go through the free functions
//! of this module, which check that the stream is open before touching its
//! data so that a stream closed mid-use fails with [`StreamError::NotOpen`]
//! instead of reaching stale backing state.

use embedded_io::SeekFrom;

use crate::StreamError;

pub type Result<T> = core::result::Result<T, StreamError>;

/// How a stream is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    /// Create or truncate.
    Write,
    ReadWrite,
    /// Create if missing, positioned at the end.
    Append,
}

impl Mode {
    pub fn can_read(self) -> bool {
        matches!(self, Mode::Read | Mode::ReadWrite)
    }

    pub fn can_write(self) -> bool {
        !matches!(self, Mode::Read)
    }
}

/// A polymorphic byte stream.
///
/// Counting is optional: `total_in` and `total_out` report
/// [`StreamError::Unsupported`] unless the implementation keeps counters.
pub trait Stream {
    fn open(&mut self, path: &str, mode: Mode) -> Result<()>;
    fn is_open(&self) -> bool;
    /// Reads up to `buf.len()` bytes. `Ok(0)` is end of data.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
    fn write(&mut self, buf: &[u8]) -> Result<usize>;
    fn tell(&mut self) -> Result<u64>;
    fn seek(&mut self, pos: SeekFrom) -> Result<u64>;
    fn close(&mut self) -> Result<()>;
    /// The last error reported by the backing store, if any.
    fn error(&self) -> Option<StreamError>;

    fn total_in(&self) -> Result<u64> {
        Err(StreamError::Unsupported)
    }

    fn total_out(&self) -> Result<u64> {
        Err(StreamError::Unsupported)
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    fn open(&mut self, path: &str, mode: Mode) -> Result<()> {
        S::open(self, path, mode)
    }

    fn is_open(&self) -> bool {
        S::is_open(self)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        S::read(self, buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        S::write(self, buf)
    }

    fn tell(&mut self) -> Result<u64> {
        S::tell(self)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        S::seek(self, pos)
    }

    fn close(&mut self) -> Result<()> {
        S::close(self)
    }

    fn error(&self) -> Option<StreamError> {
        S::error(self)
    }

    fn total_in(&self) -> Result<u64> {
        S::total_in(self)
    }

    fn total_out(&self) -> Result<u64> {
        S::total_out(self)
    }
}

pub fn open<S: Stream + ?Sized>(stream: &mut S, path: &str, mode: Mode) -> Result<()> {
    stream.open(path, mode)
}

/// `Ok` when the stream is open, [`StreamError::NotOpen`] otherwise.
pub fn is_open<S: Stream + ?Sized>(stream: &S) -> Result<()> {
    if stream.is_open() {
        Ok(())
    } else {
        Err(StreamError::NotOpen)
    }
}

pub fn read<S: Stream + ?Sized>(stream: &mut S, buf: &mut [u8]) -> Result<usize> {
    is_open(stream)?;
    stream.read(buf)
}

/// Writes `buf`. An empty buffer succeeds with 0 without consulting the
/// stream at all, open or not.
pub fn write<S: Stream + ?Sized>(stream: &mut S, buf: &[u8]) -> Result<usize> {
    if buf.is_empty() {
        return Ok(0);
    }
    is_open(stream)?;
    stream.write(buf)
}

pub fn tell<S: Stream + ?Sized>(stream: &mut S) -> Result<u64> {
    is_open(stream)?;
    stream.tell()
}

pub fn seek<S: Stream + ?Sized>(stream: &mut S, pos: SeekFrom) -> Result<u64> {
    is_open(stream)?;
    stream.seek(pos)
}

pub fn close<S: Stream + ?Sized>(stream: &mut S) -> Result<()> {
    stream.close()
}

pub fn error<S: Stream + ?Sized>(stream: &S) -> Option<StreamError> {
    stream.error()
}

pub fn total_in<S: Stream + ?Sized>(stream: &S) -> Result<u64> {
    stream.total_in()
}

pub fn total_out<S: Stream + ?Sized>(stream: &S) -> Result<u64> {
    stream.total_out()
}
