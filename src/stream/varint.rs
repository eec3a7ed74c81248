//! Variable-length integer encoding (LEB128 with zigzag for signed values).
//!
//! Each encoded byte carries 7 payload bits in its low bits and a continuation flag in its
//! high bit. Bytes are emitted least significant group first. Signed values are zigzag-mapped
//! to unsigned ones before encoding so that small negative numbers stay short:
//!
//! | Signed | Zigzag |
//! |--------|--------|
//! | 0      | 0      |
//! | -1     | 1      |
//! | 1      | 2      |
//! | -2     | 3      |
//!
//! A 32-bit value takes at most [`MAX_VARINT_BYTES`] bytes and a 64-bit value at most
//! [`MAX_VARLONG_BYTES`]. Decoding input that keeps the continuation bit set past that budget
//! fails with [`crate::Error::VarIntTooLong`].
//!
//! # Examples
//!
//! ```rust
//! use binstream::stream::varint::{decode_var_u32, encode_var_u32};
//!
//! let mut out = Vec::new();
//! encode_var_u32(300, &mut out);
//! assert_eq!(out, [0xAC, 0x02]);
//!
//! let mut offset = 0;
//! assert_eq!(decode_var_u32(&out, &mut offset)?, 300);
//! assert_eq!(offset, 2);
//! # Ok::<(), binstream::Error>(())
//! ```

use crate::{Error, Result};

/// Low 7 bits of an encoded byte hold payload.
pub const VARINT_PAYLOAD_MASK: u8 = 0x7F;

/// High bit of an encoded byte signals that more bytes follow.
pub const VARINT_CONTINUATION_BIT: u8 = 0x80;

/// Maximum encoded length of a 32-bit value.
pub const MAX_VARINT_BYTES: usize = 5;

/// Maximum encoded length of a 64-bit value.
pub const MAX_VARLONG_BYTES: usize = 10;

const PAYLOAD_BITS: u32 = 7;

/// Maps a signed 32-bit value onto the unsigned range so small magnitudes stay small.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn zigzag_encode_32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag_encode_32`].
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn zigzag_decode_32(raw: u32) -> i32 {
    ((raw >> 1) as i32) ^ -((raw & 1) as i32)
}

/// Maps a signed 64-bit value onto the unsigned range so small magnitudes stay small.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn zigzag_encode_64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode_64`].
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn zigzag_decode_64(raw: u64) -> i64 {
    ((raw >> 1) as i64) ^ -((raw & 1) as i64)
}

/// Number of bytes [`encode_var_u32`] produces for `value`.
#[must_use]
pub const fn var_u32_len(value: u32) -> usize {
    let bits = u32::BITS - (value | 1).leading_zeros();
    bits.div_ceil(PAYLOAD_BITS) as usize
}

/// Number of bytes [`encode_var_u64`] produces for `value`.
#[must_use]
pub const fn var_u64_len(value: u64) -> usize {
    let bits = u64::BITS - (value | 1).leading_zeros();
    bits.div_ceil(PAYLOAD_BITS) as usize
}

/// Appends the LEB128 encoding of `value` and returns the number of bytes written.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_var_u32(mut value: u32, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    while value >> PAYLOAD_BITS != 0 {
        out.push((value as u8 & VARINT_PAYLOAD_MASK) | VARINT_CONTINUATION_BIT);
        value >>= PAYLOAD_BITS;
    }
    out.push(value as u8);
    out.len() - start
}

/// Appends the LEB128 encoding of `value` and returns the number of bytes written.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_var_u64(mut value: u64, out: &mut Vec<u8>) -> usize {
    let start = out.len();
    while value >> PAYLOAD_BITS != 0 {
        out.push((value as u8 & VARINT_PAYLOAD_MASK) | VARINT_CONTINUATION_BIT);
        value >>= PAYLOAD_BITS;
    }
    out.push(value as u8);
    out.len() - start
}

/// Reads up to `max_bytes` LEB128 bytes at `offset` into a u64 accumulator.
///
/// Payload bits above the 64-bit accumulator are discarded. Callers narrow the result to
/// their own width.
fn decode_groups(data: &[u8], offset: &mut usize, max_bytes: usize) -> Result<u64> {
    let mut position = *offset;
    let mut value = 0u64;

    for index in 0..max_bytes {
        let Some(&byte) = data.get(position) else {
            log::debug!(
                "varint truncated at offset {} after {} bytes",
                *offset,
                index
            );
            return Err(underrun_error!(1, 0));
        };
        position += 1;

        value |= u64::from(byte & VARINT_PAYLOAD_MASK) << (PAYLOAD_BITS as usize * index);

        if byte & VARINT_CONTINUATION_BIT == 0 {
            *offset = position;
            return Ok(value);
        }
    }

    log::debug!(
        "varint at offset {} not terminated within {} bytes",
        *offset,
        max_bytes
    );
    Err(Error::VarIntTooLong { max_bytes })
}

/// Decodes an unsigned 32-bit LEB128 value at `offset`, advancing the offset on success.
///
/// Bits of the fifth byte that do not fit into 32 bits are discarded.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if the data ends before a terminating byte and
/// [`crate::Error::VarIntTooLong`] if no terminating byte appears within 5 bytes. The offset
/// is left untouched on failure.
///
/// A terminating fifth byte whose payload exceeds 32 bits is not an error: the excess bits
/// are dropped, so `[FF FF FF FF 7F]` decodes to `u32::MAX`.
///
/// # Examples
///
/// ```rust
/// use binstream::{stream::varint::decode_var_u32, Error};
///
/// let mut offset = 0;
/// assert_eq!(decode_var_u32(&[0x80, 0x01], &mut offset)?, 128);
///
/// let mut offset = 0;
/// let overlong = [0x80, 0x80, 0x80, 0x80, 0x80];
/// assert!(matches!(
///     decode_var_u32(&overlong, &mut offset),
///     Err(Error::VarIntTooLong { max_bytes: 5 })
/// ));
/// # Ok::<(), binstream::Error>(())
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn decode_var_u32(data: &[u8], offset: &mut usize) -> Result<u32> {
    decode_groups(data, offset, MAX_VARINT_BYTES).map(|value| value as u32)
}

/// Decodes an unsigned 64-bit LEB128 value at `offset`, advancing the offset on success.
///
/// Bits of the tenth byte that do not fit into 64 bits are discarded.
///
/// # Errors
/// Returns [`crate::Error::BufferUnderrun`] if the data ends before a terminating byte and
/// [`crate::Error::VarIntTooLong`] if no terminating byte appears within 10 bytes. The offset
/// is left untouched on failure.
///
/// A terminating tenth byte whose payload exceeds 64 bits is not an error: only its lowest
/// bit is kept and the rest are dropped.
pub fn decode_var_u64(data: &[u8], offset: &mut usize) -> Result<u64> {
    decode_groups(data, offset, MAX_VARLONG_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_u32(value: u32) -> Vec<u8> {
        let mut out = Vec::new();
        encode_var_u32(value, &mut out);
        out
    }

    fn encoded_u64(value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        encode_var_u64(value, &mut out);
        out
    }

    #[test]
    fn test_encode_boundaries() {
        assert_eq!(encoded_u32(0), [0x00]);
        assert_eq!(encoded_u32(1), [0x01]);
        assert_eq!(encoded_u32(127), [0x7F]);
        assert_eq!(encoded_u32(128), [0x80, 0x01]);
        assert_eq!(encoded_u32(16_383), [0xFF, 0x7F]);
        assert_eq!(encoded_u32(16_384), [0x80, 0x80, 0x01]);
        assert_eq!(encoded_u32(u32::MAX), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
    }

    #[test]
    fn test_encode_u64_max() {
        assert_eq!(
            encoded_u64(u64::MAX),
            [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]
        );
        assert_eq!(encoded_u64(1 << 35), [0x80, 0x80, 0x80, 0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_len_matches_encoding() {
        for value in [0u32, 1, 127, 128, 16_383, 16_384, 0x0FFF_FFFF, 0x1000_0000, u32::MAX] {
            assert_eq!(var_u32_len(value), encoded_u32(value).len(), "value {value}");
        }
        for value in [0u64, 127, 128, u64::from(u32::MAX), 1 << 56, 1 << 63, u64::MAX] {
            assert_eq!(var_u64_len(value), encoded_u64(value).len(), "value {value}");
        }
    }

    #[test]
    fn test_decode_boundaries() {
        let test_cases = vec![
            (vec![0x00], 0),
            (vec![0x7F], 127),
            (vec![0x80, 0x01], 128),
            (vec![0xFF, 0x7F], 16_383),
            (vec![0x80, 0x80, 0x80, 0x80, 0x01], 0x1000_0000),
            (vec![0xFF, 0xFF, 0xFF, 0xFF, 0x0F], u32::MAX),
        ];

        for (input, expected) in test_cases {
            let mut offset = 0;
            assert_eq!(decode_var_u32(&input, &mut offset).unwrap(), expected);
            assert_eq!(offset, input.len());
        }
    }

    #[test]
    fn test_decode_discards_overflow_bits() {
        // The fifth byte carries 7 payload bits but only 4 fit into a u32
        let mut offset = 0;
        let value = decode_var_u32(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F], &mut offset).unwrap();
        assert_eq!(value, u32::MAX);
        assert_eq!(offset, 5);

        let mut offset = 0;
        let mut data = vec![0xFF; 9];
        data.push(0x7F);
        let value = decode_var_u64(&data, &mut offset).unwrap();
        assert_eq!(value, u64::MAX);
        assert_eq!(offset, 10);
    }

    #[test]
    fn test_decode_too_long() {
        let mut offset = 0;
        let result = decode_var_u32(&[0x80, 0x80, 0x80, 0x80, 0x80], &mut offset);
        assert!(matches!(result, Err(Error::VarIntTooLong { max_bytes: 5 })));
        assert_eq!(offset, 0);

        let mut offset = 0;
        let result = decode_var_u64(&[0xFF; 11], &mut offset);
        assert!(matches!(result, Err(Error::VarIntTooLong { max_bytes: 10 })));
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_decode_truncated() {
        let mut offset = 0;
        let result = decode_var_u32(&[0x80, 0x80], &mut offset);
        assert!(matches!(result, Err(Error::BufferUnderrun { .. })));
        assert_eq!(offset, 0);

        let mut offset = 0;
        assert!(matches!(
            decode_var_u64(&[], &mut offset),
            Err(Error::BufferUnderrun { .. })
        ));
    }

    #[test]
    fn test_decode_from_offset() {
        let data = [0xAA, 0xAC, 0x02, 0xBB];
        let mut offset = 1;
        assert_eq!(decode_var_u64(&data, &mut offset).unwrap(), 300);
        assert_eq!(offset, 3);
    }

    #[test]
    fn test_zigzag_32() {
        assert_eq!(zigzag_encode_32(0), 0);
        assert_eq!(zigzag_encode_32(-1), 1);
        assert_eq!(zigzag_encode_32(1), 2);
        assert_eq!(zigzag_encode_32(-2), 3);
        assert_eq!(zigzag_encode_32(i32::MAX), u32::MAX - 1);
        assert_eq!(zigzag_encode_32(i32::MIN), u32::MAX);

        for value in [0, 1, -1, 63, -64, 1000, -1000, i32::MAX, i32::MIN] {
            assert_eq!(zigzag_decode_32(zigzag_encode_32(value)), value);
        }
    }

    #[test]
    fn test_zigzag_64() {
        assert_eq!(zigzag_encode_64(-1), 1);
        assert_eq!(zigzag_encode_64(1), 2);
        assert_eq!(zigzag_encode_64(i64::MIN), u64::MAX);
        assert_eq!(zigzag_decode_64(u64::MAX), i64::MIN);
        assert_eq!(zigzag_decode_64(u64::MAX - 1), i64::MAX);
    }
}
