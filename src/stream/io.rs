//! Low-level byte order conversion and bounds-checked slice access.
//!
//! This module provides the endian-aware building blocks that [`crate::ByteStream`] is made of.
//! Every fixed-width codec of the stream reduces to one of the functions here, so the byte
//! order and width contract of the wire format is defined in exactly one place.
//!
//! # Key Components
//!
//! ## Core Trait
//! - [`crate::stream::io::Primitive`] - Endian-aware conversion between a primitive and its bytes
//!
//! ## Reading Functions
//! - [`crate::stream::io::read_bytes_at`] - Bounds-checked slice read with cursor advance
//! - [`crate::stream::io::read_le_at`] / [`crate::stream::io::read_be_at`] - Typed reads
//! - [`crate::stream::io::read_triad_le_at`] / [`crate::stream::io::read_triad_be_at`] - 24-bit reads
//!
//! ## Writing Functions
//! - [`crate::stream::io::write_le`] / [`crate::stream::io::write_be`] - Typed appends
//! - [`crate::stream::io::write_triad_le`] / [`crate::stream::io::write_triad_be`] - 24-bit appends
//!
//! ## Supported Types
//! The [`crate::stream::io::Primitive`] trait is implemented for:
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`
//! - **Floating point**: `f32`, `f64`
//!
//! # Usage Examples
//!
//! ```rust
//! use binstream::stream::io::{read_be_at, read_le_at, write_be};
//!
//! let mut out = Vec::new();
//! write_be(&mut out, 0x1234u16);
//! assert_eq!(out, [0x12, 0x34]);
//!
//! let mut offset = 0;
//! let big: u16 = read_be_at(&out, &mut offset)?;
//! assert_eq!(big, 0x1234);
//!
//! offset = 0;
//! let little: u16 = read_le_at(&out, &mut offset)?;
//! assert_eq!(little, 0x3412);
//! # Ok::<(), binstream::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All reading functions return [`crate::Error::BufferUnderrun`] if there are insufficient bytes
//! after the offset. The offset is only advanced when the read succeeds.

use crate::Result;

/// Bit mask selecting the 24 bits of a triad.
pub const TRIAD_MASK: u32 = 0x00FF_FFFF;

/// Width of a triad on the wire, in bytes.
pub const TRIAD_SIZE: usize = 3;

/// Trait for type-specific, endian-aware conversion between a primitive and its byte array.
///
/// Each implementation defines a `Bytes` associated type that represents the fixed-size
/// byte array required for that particular type (e.g., `[u8; 4]` for `u32`). Floats convert
/// through their IEEE-754 bit pattern, so every value (NaN payloads included) survives a
/// round-trip bit-exactly.
pub trait Primitive: Sized + Copy {
    /// Fixed-size byte array representation of the type.
    type Bytes: AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Number of bytes this type occupies on the wire.
    const SIZE: usize;

    /// Build T from bytes in little-endian order
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Build T from bytes in big-endian order
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Convert T to bytes in little-endian order
    fn to_le_bytes(self) -> Self::Bytes;
    /// Convert T to bytes in big-endian order
    fn to_be_bytes(self) -> Self::Bytes;
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                const SIZE: usize = std::mem::size_of::<$ty>();

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }
            }
        )*
    };
}

impl_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

/// Reads `len` bytes starting at `offset` and advances `offset` past them.
///
/// # Arguments
/// * `data` - The byte buffer to read from
/// * `offset` - Mutable reference to the read position (advanced only on success)
/// * `len` - Number of bytes to read
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if fewer than `len` bytes remain after `offset`,
/// or if `offset` itself lies past the end of `data` (even for `len == 0`).
pub fn read_bytes_at<'a>(data: &'a [u8], offset: &mut usize, len: usize) -> Result<&'a [u8]> {
    if *offset > data.len() {
        log::debug!(
            "read of {} bytes at offset {} past end of {} byte buffer",
            len,
            *offset,
            data.len()
        );
        return Err(underrun_error!(len, 0));
    }

    let remaining = data.len() - *offset;
    if len > remaining {
        log::debug!(
            "buffer underrun at offset {}: requested {} bytes, {} remaining",
            *offset,
            len,
            remaining
        );
        return Err(underrun_error!(len, remaining));
    }

    let bytes = &data[*offset..*offset + len];
    *offset += len;
    Ok(bytes)
}

fn read_array_at<T: Primitive>(data: &[u8], offset: &mut usize) -> Result<T::Bytes> {
    let mut position = *offset;
    let bytes = read_bytes_at(data, &mut position, T::SIZE)?;

    let Ok(array) = <T::Bytes as TryFrom<&[u8]>>::try_from(bytes) else {
        return Err(underrun_error!(T::SIZE, bytes.len()));
    };

    *offset = position;
    Ok(array)
}

/// Reads a value of type `T` in little-endian byte order at `offset`, advancing the offset.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if there are insufficient bytes.
///
/// # Examples
///
/// ```rust
/// use binstream::stream::io::read_le_at;
///
/// let data = [0x01, 0x00, 0x02, 0x00];
/// let mut offset = 0;
/// let first: u16 = read_le_at(&data, &mut offset)?;
/// let second: u16 = read_le_at(&data, &mut offset)?;
/// assert_eq!((first, second, offset), (1, 2, 4));
/// # Ok::<(), binstream::Error>(())
/// ```
pub fn read_le_at<T: Primitive>(data: &[u8], offset: &mut usize) -> Result<T> {
    read_array_at::<T>(data, offset).map(T::from_le_bytes)
}

/// Reads a value of type `T` in big-endian byte order at `offset`, advancing the offset.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if there are insufficient bytes.
pub fn read_be_at<T: Primitive>(data: &[u8], offset: &mut usize) -> Result<T> {
    read_array_at::<T>(data, offset).map(T::from_be_bytes)
}

/// Appends `value` in little-endian byte order and returns the number of bytes written.
pub fn write_le<T: Primitive>(out: &mut Vec<u8>, value: T) -> usize {
    out.extend_from_slice(value.to_le_bytes().as_ref());
    T::SIZE
}

/// Appends `value` in big-endian byte order and returns the number of bytes written.
pub fn write_be<T: Primitive>(out: &mut Vec<u8>, value: T) -> usize {
    out.extend_from_slice(value.to_be_bytes().as_ref());
    T::SIZE
}

/// Reads an unsigned 24-bit big-endian value at `offset`, advancing the offset by 3.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if fewer than 3 bytes remain.
pub fn read_triad_be_at(data: &[u8], offset: &mut usize) -> Result<u32> {
    let bytes = read_bytes_at(data, offset, TRIAD_SIZE)?;
    Ok((u32::from(bytes[0]) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2]))
}

/// Reads an unsigned 24-bit little-endian value at `offset`, advancing the offset by 3.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if fewer than 3 bytes remain.
pub fn read_triad_le_at(data: &[u8], offset: &mut usize) -> Result<u32> {
    let bytes = read_bytes_at(data, offset, TRIAD_SIZE)?;
    Ok(u32::from(bytes[0]) | (u32::from(bytes[1]) << 8) | (u32::from(bytes[2]) << 16))
}

/// Appends the low 24 bits of `value` in big-endian order. Higher bits are discarded.
pub fn write_triad_be(out: &mut Vec<u8>, value: u32) -> usize {
    let bytes = (value & TRIAD_MASK).to_be_bytes();
    out.extend_from_slice(&bytes[1..]);
    TRIAD_SIZE
}

/// Appends the low 24 bits of `value` in little-endian order. Higher bits are discarded.
pub fn write_triad_le(out: &mut Vec<u8>, value: u32) -> usize {
    let bytes = (value & TRIAD_MASK).to_le_bytes();
    out.extend_from_slice(&bytes[..TRIAD_SIZE]);
    TRIAD_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_u16() {
        let mut offset = 0;
        let result = read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0201);
        assert_eq!(offset, 2);
    }

    #[test]
    fn read_be_u16() {
        let mut offset = 0;
        let result = read_be_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0102);
        assert_eq!(offset, 2);
    }

    #[test]
    fn read_le_i32() {
        let mut offset = 0;
        let result = read_le_at::<i32>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0403_0201);
    }

    #[test]
    fn read_be_u64() {
        let mut offset = 0;
        let result = read_be_at::<u64>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(result, 0x0102_0304_0506_0708);
        assert_eq!(offset, 8);
    }

    #[test]
    fn read_sequential() {
        let mut offset = 0;
        let a = read_le_at::<u8>(&TEST_BUFFER, &mut offset).unwrap();
        let b = read_be_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        let c = read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(a, 0x01);
        assert_eq!(b, 0x0203);
        assert_eq!(c, 0x0706_0504);
        assert_eq!(offset, 7);
    }

    #[test]
    fn read_signed_sign_extends() {
        let data = [0xFF, 0xFE];
        let mut offset = 0;
        assert_eq!(read_be_at::<i16>(&data, &mut offset).unwrap(), -2);

        offset = 0;
        assert_eq!(read_le_at::<i16>(&data, &mut offset).unwrap(), -257);
    }

    #[test]
    fn read_out_of_bounds_keeps_offset() {
        let mut offset = 6;
        let result = read_le_at::<u32>(&TEST_BUFFER, &mut offset);
        assert!(matches!(
            result,
            Err(Error::BufferUnderrun {
                requested: 4,
                remaining: 2
            })
        ));
        assert_eq!(offset, 6);
    }

    #[test]
    fn read_with_offset_past_end() {
        let mut offset = 12;
        let result = read_bytes_at(&TEST_BUFFER, &mut offset, 1);
        assert!(matches!(
            result,
            Err(Error::BufferUnderrun {
                requested: 1,
                remaining: 0
            })
        ));
        assert_eq!(offset, 12);

        let result = read_bytes_at(&TEST_BUFFER, &mut offset, 0);
        assert!(matches!(
            result,
            Err(Error::BufferUnderrun {
                requested: 0,
                remaining: 0
            })
        ));
        assert_eq!(offset, 12);

        let mut offset = 5;
        assert!(read_bytes_at(&[1, 2, 3], &mut offset, 0).is_err());
        assert!(read_le_at::<u8>(&[1, 2, 3], &mut offset).is_err());
        assert!(read_triad_le_at(&[1, 2, 3], &mut offset).is_err());
        assert_eq!(offset, 5);
    }

    #[test]
    fn read_zero_bytes_at_end() {
        let mut offset = TEST_BUFFER.len();
        let bytes = read_bytes_at(&TEST_BUFFER, &mut offset, 0).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(offset, TEST_BUFFER.len());
    }

    #[test]
    fn write_le_and_be() {
        let mut out = Vec::new();
        assert_eq!(write_le(&mut out, 0x1234u16), 2);
        assert_eq!(write_be(&mut out, 0x1234u16), 2);
        assert_eq!(write_be(&mut out, -1i32), 4);
        assert_eq!(out, [0x34, 0x12, 0x12, 0x34, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn float_bit_patterns() {
        let mut out = Vec::new();
        write_be(&mut out, 1.0f32);
        assert_eq!(out, [0x3F, 0x80, 0x00, 0x00]);

        out.clear();
        write_le(&mut out, 1.0f64);
        assert_eq!(out, [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F]);

        let nan = f32::from_bits(0x7FC0_1234);
        out.clear();
        write_le(&mut out, nan);
        let mut offset = 0;
        let back = read_le_at::<f32>(&out, &mut offset).unwrap();
        assert_eq!(back.to_bits(), 0x7FC0_1234);
    }

    #[test]
    fn triad_layout() {
        let mut out = Vec::new();
        write_triad_be(&mut out, 0x0012_3456);
        write_triad_le(&mut out, 0x0012_3456);
        assert_eq!(out, [0x12, 0x34, 0x56, 0x56, 0x34, 0x12]);

        let mut offset = 0;
        assert_eq!(read_triad_be_at(&out, &mut offset).unwrap(), 0x12_3456);
        assert_eq!(read_triad_le_at(&out, &mut offset).unwrap(), 0x12_3456);
        assert_eq!(offset, 6);
    }

    #[test]
    fn triad_write_masks_high_bits() {
        let mut out = Vec::new();
        write_triad_be(&mut out, 0xAB12_3456);
        assert_eq!(out, [0x12, 0x34, 0x56]);

        out.clear();
        write_triad_le(&mut out, 0xFFFF_FFFF);
        assert_eq!(out, [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn triad_underrun() {
        let mut offset = 0;
        assert!(matches!(
            read_triad_le_at(&[0x01, 0x02], &mut offset),
            Err(Error::BufferUnderrun { .. })
        ));
        assert_eq!(offset, 0);
    }
}
