//! Fixed-width little-endian integers over a [`Stream`].
//!
//! Reads go one byte at a time so that no backing store has to support
//! multi-byte transfers. Writes that don't fit their field are clamped to
//! all `0xFF`, the marker archive writers use to say "see the 64-bit field".

use crate::StreamError;
use crate::stream::{self, Result, Stream};

/// Width of an encoded integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    U8 = 1,
    U16 = 2,
    U32 = 4,
    U64 = 8,
}

impl Width {
    pub const fn bytes(self) -> usize {
        self as usize
    }
}

/// Reads one byte.
///
/// A read that returns no data is only an error when the stream reports one
/// through [`Stream::error`]; otherwise the byte reads as 0.
pub fn read_u8<S: Stream + ?Sized>(stream: &mut S) -> Result<u8> {
    let mut byte = [0u8; 1];
    if stream::read(stream, &mut byte)? == 1 {
        return Ok(byte[0]);
    }
    match stream::error(stream) {
        Some(error) => Err(error),
        None => Ok(0),
    }
}

/// Reads `width` bytes, least significant first. Nothing is returned unless
/// every byte was read.
pub fn read_value<S: Stream + ?Sized>(stream: &mut S, width: Width) -> Result<u64> {
    let mut value = 0u64;
    for index in 0..width.bytes() {
        value |= u64::from(read_u8(stream)?) << (8 * index);
    }
    Ok(value)
}

pub fn read_u16<S: Stream + ?Sized>(stream: &mut S) -> Result<u16> {
    read_value(stream, Width::U16).map(|value| value as u16)
}

pub fn read_u32<S: Stream + ?Sized>(stream: &mut S) -> Result<u32> {
    read_value(stream, Width::U32).map(|value| value as u32)
}

pub fn read_u64<S: Stream + ?Sized>(stream: &mut S) -> Result<u64> {
    read_value(stream, Width::U64)
}

/// Encodes `value` into a `width` byte little-endian field.
/// Values too large for the field come out as all `0xFF`.
pub fn encode_value(value: u64, width: Width) -> ([u8; 8], usize) {
    let len = width.bytes();
    let mut buf = [0u8; 8];
    let mut rest = value;
    for byte in &mut buf[..len] {
        *byte = (rest & 0xff) as u8;
        rest >>= 8;
    }

    if rest != 0 {
        trace!("value {value:#x} overflows {len} byte field, clamping");
        buf[..len].fill(0xff);
    }
    (buf, len)
}

/// Writes `value` as a `width` byte field in a single write call.
pub fn write_value<S: Stream + ?Sized>(stream: &mut S, value: u64, width: Width) -> Result<()> {
    let (buf, len) = encode_value(value, width);
    let written = stream::write(stream, &buf[..len])?;
    if written != len {
        warn!("short write: {written} of {len} bytes");
        return Err(StreamError::ShortWrite);
    }
    Ok(())
}

pub fn write_u8<S: Stream + ?Sized>(stream: &mut S, value: u8) -> Result<()> {
    write_value(stream, value.into(), Width::U8)
}

pub fn write_u16<S: Stream + ?Sized>(stream: &mut S, value: u16) -> Result<()> {
    write_value(stream, value.into(), Width::U16)
}

pub fn write_u32<S: Stream + ?Sized>(stream: &mut S, value: u32) -> Result<()> {
    write_value(stream, value.into(), Width::U32)
}

pub fn write_u64<S: Stream + ?Sized>(stream: &mut S, value: u64) -> Result<()> {
    write_value(stream, value, Width::U64)
}
