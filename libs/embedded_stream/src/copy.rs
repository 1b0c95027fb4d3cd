use crate::StreamError;
use crate::stream::{self, Result, Stream};

/// Largest chunk moved per read/write round trip.
pub const COPY_CHUNK_SIZE: usize = u16::MAX as usize;

/// Copies exactly `len` bytes from `source` to `target` in chunks of at most
/// [`COPY_CHUNK_SIZE`].
///
/// Every chunk read must be written in full. A source that runs out before
/// `len` bytes were moved fails with [`StreamError::UnexpectedEof`].
pub fn copy<T, S>(target: &mut T, source: &mut S, len: u64) -> Result<()>
where
    T: Stream + ?Sized,
    S: Stream + ?Sized,
{
    #[cfg(feature = "alloc")]
    let mut buf = alloc::vec![0u8; COPY_CHUNK_SIZE];
    #[cfg(not(feature = "alloc"))]
    let mut buf = [0u8; COPY_CHUNK_SIZE];

    let mut remaining = len;
    while remaining > 0 {
        let to_copy = core::cmp::min(remaining, COPY_CHUNK_SIZE as u64) as usize;
        let read = stream::read(source, &mut buf[..to_copy])?;
        if read == 0 {
            warn!("copy: source ended with {remaining} of {len} bytes left");
            return Err(StreamError::UnexpectedEof);
        }

        let written = stream::write(target, &buf[..read])?;
        if written != read {
            warn!("copy: short write: {written} of {read} bytes");
            return Err(StreamError::ShortWrite);
        }

        remaining -= read as u64;
        trace!("copy: {read} bytes, {remaining} remaining");
    }

    Ok(())
}
