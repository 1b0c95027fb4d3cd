use std::{fs, io::Seek};

use embedded_io::{ErrorType, SeekFrom};
use embedded_stream::{IoStream, Mode, Stream, StreamError};
use log::{debug, info};

type Result<T> = core::result::Result<T, StreamError>;

/// A `std::fs::File` behind the embedded-io traits.
pub struct StdFile {
    file: fs::File,
}

impl StdFile {
    pub fn new(file: fs::File) -> Self {
        StdFile { file }
    }
}

impl ErrorType for StdFile {
    type Error = std::io::Error;
}

impl embedded_io::Seek for StdFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.file.seek(pos.into())
    }
}

impl embedded_io::Read for StdFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        use std::io::Read;
        self.file.read(buf)
    }
}

impl embedded_io::Write for StdFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        use std::io::Write;
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        use std::io::Write;
        self.file.flush()
    }
}

/// The operating system file stream.
///
/// Created closed; `open` resolves the path against the working directory.
#[derive(Default)]
pub struct StdFileStream {
    file: Option<IoStream<StdFile>>,
    last_error: Option<StreamError>,
}

impl StdFileStream {
    pub fn new() -> Self {
        Self::default()
    }

    fn file(&mut self) -> Result<&mut IoStream<StdFile>> {
        self.file.as_mut().ok_or(StreamError::NotOpen)
    }
}

impl Stream for StdFileStream {
    fn open(&mut self, path: &str, mode: Mode) -> Result<()> {
        let options = match mode {
            Mode::Read => fs::OpenOptions::new().read(true).clone(),
            Mode::Write => fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .clone(),
            Mode::ReadWrite => fs::OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .clone(),
            Mode::Append => fs::OpenOptions::new()
                .append(true)
                .create(true)
                .clone(),
        };
        match options.open(path) {
            Ok(file) => {
                info!("Opened {path} ({mode:?})");
                self.file = Some(IoStream::new(StdFile::new(file)));
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                debug!("Failed to open {path}: {e}");
                let error = StreamError::from_io_error(e);
                self.last_error = Some(error);
                Err(error)
            }
        }
    }

    fn is_open(&self) -> bool {
        self.file.as_ref().is_some_and(|file| file.is_open())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.file()?.read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.file()?.write(buf)
    }

    fn tell(&mut self) -> Result<u64> {
        self.file()?.tell()
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.file()?.seek(pos)
    }

    fn close(&mut self) -> Result<()> {
        match self.file.take() {
            Some(mut file) => {
                let result = file.close();
                self.last_error = file.error();
                result
            }
            None => Ok(()),
        }
    }

    fn error(&self) -> Option<StreamError> {
        self.file
            .as_ref()
            .and_then(|file| file.error())
            .or(self.last_error)
    }
}
