use alloc::vec::Vec;
use embedded_io::{ErrorKind, SeekFrom};

use crate::StreamError;
use crate::stream::{Mode, Result, Stream};

/// A growable in-memory stream.
///
/// The path given to `open` is ignored. Opening with [`Mode::Write`] discards
/// the current contents, [`Mode::Append`] positions at the end. Seeking past
/// the end is allowed; a later write fills the gap with zeroes, or fails with
/// `OutOfMemory` when the buffer cannot grow that far.
#[derive(Debug, Default)]
pub struct MemStream {
    buf: Vec<u8>,
    pos: usize,
    mode: Option<Mode>,
}

impl MemStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing contents. The stream still has to be opened.
    pub fn from_vec(buf: Vec<u8>) -> Self {
        Self {
            buf,
            pos: 0,
            mode: None,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    fn mode(&self) -> Result<Mode> {
        self.mode.ok_or(StreamError::NotOpen)
    }
}

impl Stream for MemStream {
    fn open(&mut self, _path: &str, mode: Mode) -> Result<()> {
        self.pos = 0;
        match mode {
            Mode::Write => self.buf.clear(),
            Mode::Append => self.pos = self.buf.len(),
            Mode::Read | Mode::ReadWrite => {}
        }
        self.mode = Some(mode);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if !self.mode()?.can_read() {
            return Err(StreamError::IoError(ErrorKind::PermissionDenied));
        }
        let available = self.buf.get(self.pos..).unwrap_or(&[]);
        let len = core::cmp::min(available.len(), buf.len());
        buf[..len].copy_from_slice(&available[..len]);
        self.pos += len;
        Ok(len)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if !self.mode()?.can_write() {
            return Err(StreamError::IoError(ErrorKind::PermissionDenied));
        }
        let end = self
            .pos
            .checked_add(buf.len())
            .ok_or(StreamError::IoError(ErrorKind::InvalidInput))?;
        if end > self.buf.len() {
            self.buf
                .try_reserve(end - self.buf.len())
                .map_err(|_| StreamError::IoError(ErrorKind::OutOfMemory))?;
            self.buf.resize(end, 0);
        }
        self.buf[self.pos..end].copy_from_slice(buf);
        self.pos = end;
        Ok(buf.len())
    }

    fn tell(&mut self) -> Result<u64> {
        self.mode()?;
        Ok(self.pos as u64)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.mode()?;
        let target = match pos {
            SeekFrom::Start(offset) => i128::from(offset),
            SeekFrom::End(offset) => self.buf.len() as i128 + i128::from(offset),
            SeekFrom::Current(offset) => self.pos as i128 + i128::from(offset),
        };
        let target =
            usize::try_from(target).map_err(|_| StreamError::IoError(ErrorKind::InvalidInput))?;
        self.pos = target;
        Ok(target as u64)
    }

    fn close(&mut self) -> Result<()> {
        self.mode = None;
        Ok(())
    }

    fn error(&self) -> Option<StreamError> {
        None
    }
}
