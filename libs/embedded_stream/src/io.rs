use embedded_io::{Read, Seek, SeekFrom, Write};

use crate::StreamError;
use crate::stream::{Mode, Result, Stream};

/// Presents an already opened embedded-io handle as a [`Stream`].
///
/// The wrapper starts out open. `close` only marks it closed and `open`
/// marks it open again without moving the handle, so the path is ignored.
/// Backing failures are remembered and reported by [`Stream::error`].
pub struct IoStream<T> {
    inner: T,
    open: bool,
    last_error: Option<StreamError>,
}

impl<T> IoStream<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            open: true,
            last_error: None,
        }
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    fn record(&mut self, error: impl embedded_io::Error) -> StreamError {
        let error = StreamError::from_io_error(error);
        trace!("backing stream failed: {error}");
        self.last_error = Some(error);
        error
    }
}

impl<T: Read + Write + Seek> Stream for IoStream<T> {
    fn open(&mut self, _path: &str, _mode: Mode) -> Result<()> {
        self.open = true;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.inner.read(buf).map_err(|e| self.record(e))
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.inner.write(buf).map_err(|e| self.record(e))
    }

    fn tell(&mut self) -> Result<u64> {
        self.inner.stream_position().map_err(|e| self.record(e))
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.inner.seek(pos).map_err(|e| self.record(e))
    }

    fn close(&mut self) -> Result<()> {
        self.open = false;
        self.inner.flush().map_err(|e| self.record(e))
    }

    fn error(&self) -> Option<StreamError> {
        self.last_error
    }
}
