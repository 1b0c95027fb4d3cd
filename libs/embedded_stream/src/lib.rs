/*!
A no_std polymorphic byte stream layer for archive readers and writers.

## Features
- no_std
- one [`Stream`] interface over files, memory and decorators
- little-endian integer fields with the zip64 overflow marker
- byte counting [`Passthru`] decorator
- MS-DOS packed dates

## Usage
```
# use embedded_stream::{MemStream, Mode, Stream, codec, stream};
# fn main() -> Result<(), embedded_stream::StreamError> {
let mut mem = MemStream::new();
mem.open("", Mode::ReadWrite)?;
codec::write_u32(&mut mem, 0x04034b50)?;
codec::write_value(&mut mem, 1 << 40, codec::Width::U32)?;
stream::seek(&mut mem, embedded_io::SeekFrom::Start(0))?;
assert_eq!(codec::read_u32(&mut mem)?, 0x04034b50);
assert_eq!(codec::read_u32(&mut mem)?, u32::MAX);
# Ok(())
# }
```

## Feature flags
- `alloc` (default): heap chunk buffer for [`copy`] and [`MemStream`]
- `log`: trace through the `log` facade
- `clock`: [`dos_date::decode_to_epoch`] in the local time zone
*/

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
    };
}

pub mod codec;
mod copy;
pub mod dos_date;
mod error;
mod fs;
mod io;
#[cfg(feature = "alloc")]
mod mem;
mod passthru;
pub mod stream;


pub use copy::{COPY_CHUNK_SIZE, copy};
pub use dos_date::CalendarTime;
pub use error::{InvalidDate, StreamError};
pub use fs::{file_exists, file_size};
pub use io::IoStream;
#[cfg(feature = "alloc")]
pub use mem::MemStream;
pub use passthru::Passthru;
pub use stream::{Mode, Stream};
