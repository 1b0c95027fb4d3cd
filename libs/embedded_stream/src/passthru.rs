use embedded_io::SeekFrom;

use crate::StreamError;
use crate::stream::{self, Mode, Result, Stream};

/// A stream that forwards everything to a base stream while counting the
/// bytes read from and written to it.
///
/// The base is borrowed, never owned: it must outlive the passthru, and
/// dropping the passthru leaves it untouched. The counters only ever grow and
/// stay readable after [`Stream::close`].
/// ```
/// # use embedded_stream::{MemStream, Mode, Passthru, Stream, stream};
/// # fn main() -> Result<(), embedded_stream::StreamError> {
/// let mut mem = MemStream::new();
/// let mut counter = Passthru::new();
/// counter.bind_base(&mut mem);
/// counter.open("", Mode::Write)?;
/// stream::write(&mut counter, b"hello")?;
/// assert_eq!(counter.total_out()?, 5);
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Passthru<'a> {
    base: Option<&'a mut dyn Stream>,
    total_in: u64,
    total_out: u64,
}

impl<'a> Passthru<'a> {
    /// Creates an unbound passthru with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: &'a mut dyn Stream) -> Self {
        let mut passthru = Self::new();
        passthru.bind_base(base);
        passthru
    }

    /// Sets the stream every operation is forwarded to.
    pub fn bind_base(&mut self, base: &'a mut dyn Stream) {
        self.base = Some(base);
    }

    /// Releases the base so the caller can use it again. Counters are kept.
    pub fn take_base(&mut self) -> Option<&'a mut dyn Stream> {
        self.base.take()
    }

    fn base_mut(&mut self) -> Result<&mut (dyn Stream + 'a)> {
        self.base.as_deref_mut().ok_or(StreamError::NoBase)
    }
}

impl Stream for Passthru<'_> {
    fn open(&mut self, path: &str, mode: Mode) -> Result<()> {
        stream::open(self.base_mut()?, path, mode)
    }

    fn is_open(&self) -> bool {
        self.base
            .as_deref()
            .is_some_and(|base| stream::is_open(base).is_ok())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let read = stream::read(self.base_mut()?, buf)?;
        self.total_in += read as u64;
        Ok(read)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let written = stream::write(self.base_mut()?, buf)?;
        self.total_out += written as u64;
        Ok(written)
    }

    fn tell(&mut self) -> Result<u64> {
        stream::tell(self.base_mut()?)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        stream::seek(self.base_mut()?, pos)
    }

    fn close(&mut self) -> Result<()> {
        stream::close(self.base_mut()?)
    }

    fn error(&self) -> Option<StreamError> {
        match self.base.as_deref() {
            Some(base) => stream::error(base),
            None => Some(StreamError::NoBase),
        }
    }

    fn total_in(&self) -> Result<u64> {
        Ok(self.total_in)
    }

    fn total_out(&self) -> Result<u64> {
        Ok(self.total_out)
    }
}
