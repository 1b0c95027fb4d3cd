use core::fmt;

/// Error type for stream operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// The backing store failed.
    IoError(embedded_io::ErrorKind),
    /// A data operation was attempted on a stream that is not open.
    NotOpen,
    /// A delegating stream was used before a base stream was bound.
    NoBase,
    /// The stream does not implement the requested capability.
    Unsupported,
    /// Fewer bytes were written than requested.
    ShortWrite,
    /// The source ran dry before the requested length was transferred.
    UnexpectedEof,
}

impl StreamError {
    pub fn from_io_error(error: impl embedded_io::Error) -> Self {
        StreamError::IoError(error.kind())
    }
}

impl embedded_io::Error for StreamError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            StreamError::IoError(kind) => *kind,
            StreamError::NotOpen | StreamError::NoBase => embedded_io::ErrorKind::InvalidInput,
            StreamError::Unsupported => embedded_io::ErrorKind::Unsupported,
            StreamError::ShortWrite | StreamError::UnexpectedEof => embedded_io::ErrorKind::Other,
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::IoError(kind) => write!(f, "stream i/o error: {kind:?}"),
            StreamError::NotOpen => f.write_str("stream is not open"),
            StreamError::NoBase => f.write_str("no base stream bound"),
            StreamError::Unsupported => f.write_str("operation not supported by stream"),
            StreamError::ShortWrite => f.write_str("short write"),
            StreamError::UnexpectedEof => f.write_str("unexpected end of stream"),
        }
    }
}

/// A packed date or calendar value has a field out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDate;

impl fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid dos date")
    }
}
