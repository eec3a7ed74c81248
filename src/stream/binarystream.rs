//! Growable, cursor-based byte stream with typed reads and writes.
//!
//! This module provides the [`crate::stream::binarystream::ByteStream`] type, which owns a byte
//! buffer and a single read/write cursor. Writes append to the end of the buffer and move the
//! cursor forward by the number of bytes produced; reads slice at the cursor and move it
//! forward by the number of bytes consumed.
//!
//! # Key Components
//!
//! ## Buffer & Cursor
//! - [`ByteStream::append`] / [`ByteStream::get`] - Raw byte access
//! - [`ByteStream::offset`], [`ByteStream::remaining`], [`ByteStream::flip`], [`ByteStream::reset`]
//! - [`ByteStream::set_buffer`] - Re-point the stream at externally supplied data
//!
//! ## Fixed-Width Codecs
//! - `bool`, `byte`, `short`, `triad`, `int`, `long`, `float`, `double` in big-endian form and
//!   their `l`-prefixed little-endian counterparts
//!
//! ## Variable-Length Codecs
//! - [`ByteStream::get_unsigned_var_int`] / [`ByteStream::get_var_int`] - 32-bit LEB128 (+ zigzag)
//! - [`ByteStream::get_unsigned_var_long`] / [`ByteStream::get_var_long`] - 64-bit LEB128 (+ zigzag)
//!
//! # Usage Examples
//!
//! ```rust
//! use binstream::ByteStream;
//!
//! let mut stream = ByteStream::new();
//! stream.put_byte(0x05).put_short(0x1234).put_var_int(-1).put_string("hi");
//! assert_eq!(stream.buffer(), &[0x05, 0x12, 0x34, 0x01, b'h', b'i']);
//!
//! stream.flip();
//! assert_eq!(stream.get_byte()?, 0x05);
//! assert_eq!(stream.get_short()?, 0x1234);
//! assert_eq!(stream.get_var_int()?, -1);
//! assert_eq!(stream.get_string(2)?, "hi");
//! assert!(stream.is_eof());
//! # Ok::<(), binstream::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`ByteStream`] performs no locking. It is `Send` and `Sync` as plain owned data, and every
//! mutating operation takes `&mut self`, so sharing one stream between threads requires the
//! caller to provide mutual exclusion (e.g. a `Mutex`).

use std::fmt::Write as _;

use crate::{
    stream::{
        config::StreamConfig,
        io::{
            self, read_be_at, read_bytes_at, read_le_at, read_triad_be_at, read_triad_le_at,
            write_triad_be, write_triad_le, Primitive,
        },
        varint::{
            decode_var_u32, decode_var_u64, encode_var_u32, encode_var_u64, zigzag_decode_32,
            zigzag_decode_64, zigzag_encode_32, zigzag_encode_64,
        },
    },
    Result,
};

/// A growable byte buffer with a single read/write cursor.
///
/// `ByteStream` is the sole entity of this crate. It combines an owned `Vec<u8>` with an
/// offset into it, and offers paired `get_*` / `put_*` operations for every supported wire
/// type. Both the producer and the consumer of a byte sequence must issue the same sequence of
/// calls; the stream itself carries no type information.
///
/// # Cursor Invariant
///
/// `0 <= offset() <= len()` holds after every successful operation. A read that cannot be
/// satisfied fails with [`crate::Error::BufferUnderrun`] and leaves the cursor where it was.
///
/// # Write Semantics
///
/// Writes always append to the end of the buffer and advance the cursor by the number of
/// bytes written, regardless of where the cursor currently is. Writing into a freshly created
/// stream therefore leaves the cursor at the end; call [`ByteStream::flip`] before reading
/// the written data back.
///
/// Fixed-width writes never fail. Values wider than the field are truncated to it, which for
/// the typed arguments of this API only concerns triads (masked to 24 bits).
///
/// # Examples
///
/// ```rust
/// use binstream::ByteStream;
///
/// let mut stream = ByteStream::from_bytes(&[0x00, 0x00, 0x01, 0x00]);
/// assert_eq!(stream.offset(), 0);
/// assert_eq!(stream.get_triad()?, 1);
/// assert_eq!(stream.remaining(), 1);
/// # Ok::<(), binstream::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ByteStream {
    /// The bytes written to or supplied to the stream
    buffer: Vec<u8>,
    /// Current read/write position within the buffer
    offset: usize,
    /// Allocation behaviour
    config: StreamConfig,
}

impl ByteStream {
    /// Creates an empty stream with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StreamConfig::default())
    }

    /// Creates an empty stream using the allocation settings of `config`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::{ByteStream, StreamConfig};
    ///
    /// let stream = ByteStream::with_config(StreamConfig::packet());
    /// assert!(stream.is_empty());
    /// assert!(stream.capacity() >= 1500);
    /// ```
    #[must_use]
    pub fn with_config(config: StreamConfig) -> Self {
        ByteStream {
            buffer: Vec::with_capacity(config.initial_capacity),
            offset: 0,
            config,
        }
    }

    /// Creates an empty stream with at least `capacity` bytes reserved.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(StreamConfig::default().with_initial_capacity(capacity))
    }

    /// Creates a stream seeded with a copy of `bytes`, positioned at the start.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut stream = Self::with_capacity(bytes.len());
        stream.append(bytes);
        stream.offset = 0;
        stream
    }

    /// Returns the configuration the stream was created with.
    #[must_use]
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /*
     * Buffer & cursor management
     */

    /// Appends raw bytes to the end of the buffer and advances the cursor by their length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::ByteStream;
    ///
    /// let mut stream = ByteStream::new();
    /// stream.append(&[0x01, 0x02]).append(&[0x03]);
    /// assert_eq!(stream.buffer(), &[0x01, 0x02, 0x03]);
    /// assert_eq!(stream.offset(), 3);
    /// ```
    pub fn append(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(bytes);
        self.offset += bytes.len();
        self
    }

    /// Decodes hex-encoded text and appends the resulting bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidInput`] if `text` is not valid hex (odd length or a
    /// non-hex character). Nothing is appended in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::ByteStream;
    ///
    /// let mut stream = ByteStream::new();
    /// stream.append_hex("deadBEEF")?;
    /// assert_eq!(stream.buffer(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    /// assert!(stream.append_hex("abc").is_err());
    /// # Ok::<(), binstream::Error>(())
    /// ```
    pub fn append_hex(&mut self, text: &str) -> Result<&mut Self> {
        let bytes = hex::decode(text).map_err(|e| {
            log::debug!("rejected hex input of {} chars: {}", text.len(), e);
            invalid_input_error!("Invalid hex input - {}", e)
        })?;

        Ok(self.append(&bytes))
    }

    /// Appends a sequence of byte values given as integers.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidInput`] if any value lies outside `0..=255`. The values
    /// are validated before anything is appended.
    pub fn append_values(&mut self, values: &[i64]) -> Result<&mut Self> {
        let mut bytes = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            let Ok(byte) = u8::try_from(*value) else {
                log::debug!("rejected byte value {} at index {}", value, index);
                return Err(invalid_input_error!(
                    "Value {} at index {} is not a byte",
                    value,
                    index
                ));
            };
            bytes.push(byte);
        }

        Ok(self.append(&bytes))
    }

    /// Reads `len` bytes at the cursor and advances the cursor past them.
    ///
    /// The returned slice borrows the stream, so it cannot outlive the next mutation. Use
    /// `.to_vec()` to keep the bytes longer.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than `len` bytes remain. The cursor is
    /// not moved in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::{ByteStream, Error};
    ///
    /// let mut stream = ByteStream::from_bytes(&[0x01, 0x02, 0x03]);
    /// assert_eq!(stream.get(2)?, &[0x01, 0x02]);
    /// assert!(matches!(stream.get(2), Err(Error::BufferUnderrun { .. })));
    /// assert_eq!(stream.offset(), 2);
    /// # Ok::<(), binstream::Error>(())
    /// ```
    pub fn get(&mut self, len: usize) -> Result<&[u8]> {
        read_bytes_at(&self.buffer, &mut self.offset, len)
    }

    /// Reads every byte after the cursor and moves the cursor to the end.
    pub fn get_remaining(&mut self) -> &[u8] {
        let start = self.offset;
        self.offset = self.buffer.len();
        &self.buffer[start..]
    }

    /// Peeks at the byte under the cursor without advancing.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the cursor is at the end of the buffer.
    pub fn peek_byte(&self) -> Result<u8> {
        self.buffer
            .get(self.offset)
            .copied()
            .ok_or(underrun_error!(1, 0))
    }

    /// Clears the buffer and moves the cursor back to 0.
    ///
    /// Depending on [`StreamConfig::release_on_reset`] the allocation is either kept for reuse
    /// or released.
    pub fn reset(&mut self) {
        log::trace!(
            "resetting stream of {} bytes (release: {})",
            self.buffer.len(),
            self.config.release_on_reset
        );

        if self.config.release_on_reset {
            self.buffer = Vec::new();
        } else {
            self.buffer.clear();
        }
        self.offset = 0;
    }

    /// Replaces the buffer and the cursor wholesale.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOffset`] if `offset` is greater than `buffer.len()`. The
    /// stream is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::{ByteStream, Error};
    ///
    /// let mut stream = ByteStream::new();
    /// stream.set_buffer(vec![0xAA, 0xBB], 1)?;
    /// assert_eq!(stream.get_byte()?, 0xBB);
    ///
    /// assert!(matches!(
    ///     stream.set_buffer(vec![0x00], 2),
    ///     Err(Error::InvalidOffset { offset: 2, length: 1 })
    /// ));
    /// # Ok::<(), binstream::Error>(())
    /// ```
    pub fn set_buffer(&mut self, buffer: Vec<u8>, offset: usize) -> Result<()> {
        if offset > buffer.len() {
            log::debug!(
                "rejected offset {} for replacement buffer of {} bytes",
                offset,
                buffer.len()
            );
            return Err(crate::Error::InvalidOffset {
                offset,
                length: buffer.len(),
            });
        }

        log::trace!(
            "replacing buffer of {} bytes with {} bytes at offset {}",
            self.buffer.len(),
            buffer.len(),
            offset
        );
        self.buffer = buffer;
        self.offset = offset;
        Ok(())
    }

    /// Moves the cursor back to 0 without touching the buffer, for a fresh read pass.
    pub fn flip(&mut self) -> &mut Self {
        self.offset = 0;
        self
    }

    /// Execute a closure transactionally, rolling back the cursor on failure.
    ///
    /// The cursor is saved, the closure runs, and if it returns `Err` the cursor is restored.
    /// Bytes appended by the closure are kept either way; only the position is rolled back.
    ///
    /// # Errors
    /// Returns any error produced by `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::ByteStream;
    ///
    /// let mut stream = ByteStream::from_bytes(&[0x01, 0x02, 0x03]);
    /// let result = stream.transactional(|s| {
    ///     s.get_short()?;
    ///     s.get_short()
    /// });
    /// assert!(result.is_err());
    /// assert_eq!(stream.offset(), 0);
    /// ```
    pub fn transactional<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved_offset = self.offset;
        let result = f(self);
        if result.is_err() {
            self.offset = saved_offset;
        }
        result
    }

    /// Current cursor position, in bytes from the start of the buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total number of bytes in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of bytes the buffer can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Number of unread bytes after the cursor.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    /// Returns `true` if there are unread bytes after the cursor.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.offset < self.buffer.len()
    }

    /// Returns `true` if the cursor is at the end of the buffer.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        !self.has_more_data()
    }

    /// The whole buffer, independent of the cursor.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the stream and returns its buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Renders the whole buffer as lowercase hex, optionally with a space between bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::ByteStream;
    ///
    /// let stream = ByteStream::from_bytes(&[0x0A, 0xFF, 0x00]);
    /// assert_eq!(stream.to_hex(false), "0aff00");
    /// assert_eq!(stream.to_hex(true), "0a ff 00");
    /// ```
    #[must_use]
    pub fn to_hex(&self, spaced: bool) -> String {
        if !spaced {
            return hex::encode(&self.buffer);
        }

        let mut out = String::with_capacity(self.buffer.len() * 3);
        for (index, byte) in self.buffer.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail
            let _ = write!(out, "{byte:02x}");
        }
        out
    }

    /*
     * Generic fixed-width access
     */

    /// Reads a `T` in little-endian byte order at the cursor.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than `T::SIZE` bytes remain.
    pub fn read_le<T: Primitive>(&mut self) -> Result<T> {
        read_le_at::<T>(&self.buffer, &mut self.offset)
    }

    /// Reads a `T` in big-endian byte order at the cursor.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than `T::SIZE` bytes remain.
    pub fn read_be<T: Primitive>(&mut self) -> Result<T> {
        read_be_at::<T>(&self.buffer, &mut self.offset)
    }

    /// Appends a `T` in little-endian byte order.
    pub fn write_le<T: Primitive>(&mut self, value: T) -> &mut Self {
        self.offset += io::write_le(&mut self.buffer, value);
        self
    }

    /// Appends a `T` in big-endian byte order.
    pub fn write_be<T: Primitive>(&mut self, value: T) -> &mut Self {
        self.offset += io::write_be(&mut self.buffer, value);
        self
    }

    /*
     * Single byte
     */

    /// Reads a one-byte boolean. `0x00` is `false`, any other value is `true`.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the buffer is exhausted.
    pub fn get_bool(&mut self) -> Result<bool> {
        Ok(self.get_byte()? != 0)
    }

    /// Writes a one-byte boolean as `0x01` or `0x00`.
    pub fn put_bool(&mut self, value: bool) -> &mut Self {
        self.put_byte(u8::from(value))
    }

    /// Reads an unsigned byte.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the buffer is exhausted.
    pub fn get_byte(&mut self) -> Result<u8> {
        self.read_le::<u8>()
    }

    /// Writes an unsigned byte.
    pub fn put_byte(&mut self, value: u8) -> &mut Self {
        self.write_le(value)
    }

    /// Reads a signed byte.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if the buffer is exhausted.
    pub fn get_signed_byte(&mut self) -> Result<i8> {
        self.read_le::<i8>()
    }

    /// Writes a signed byte.
    pub fn put_signed_byte(&mut self, value: i8) -> &mut Self {
        self.write_le(value)
    }

    /*
     * 16-bit
     */

    /// Reads an unsigned 16-bit big-endian value.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn get_short(&mut self) -> Result<u16> {
        self.read_be::<u16>()
    }

    /// Writes an unsigned 16-bit big-endian value.
    pub fn put_short(&mut self, value: u16) -> &mut Self {
        self.write_be(value)
    }

    /// Reads a signed 16-bit big-endian value.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn get_signed_short(&mut self) -> Result<i16> {
        self.read_be::<i16>()
    }

    /// Writes a signed 16-bit big-endian value.
    pub fn put_signed_short(&mut self, value: i16) -> &mut Self {
        self.write_be(value)
    }

    /// Reads an unsigned 16-bit little-endian value.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn get_lshort(&mut self) -> Result<u16> {
        self.read_le::<u16>()
    }

    /// Writes an unsigned 16-bit little-endian value.
    pub fn put_lshort(&mut self, value: u16) -> &mut Self {
        self.write_le(value)
    }

    /// Reads a signed 16-bit little-endian value.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 2 bytes remain.
    pub fn get_signed_lshort(&mut self) -> Result<i16> {
        self.read_le::<i16>()
    }

    /// Writes a signed 16-bit little-endian value.
    pub fn put_signed_lshort(&mut self, value: i16) -> &mut Self {
        self.write_le(value)
    }

    /*
     * 24-bit
     */

    /// Reads an unsigned 24-bit big-endian value.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 3 bytes remain.
    pub fn get_triad(&mut self) -> Result<u32> {
        read_triad_be_at(&self.buffer, &mut self.offset)
    }

    /// Writes the low 24 bits of `value` in big-endian order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::ByteStream;
    ///
    /// let mut stream = ByteStream::new();
    /// stream.put_triad(0x0100_0001);
    /// assert_eq!(stream.buffer(), &[0x00, 0x00, 0x01]);
    /// ```
    pub fn put_triad(&mut self, value: u32) -> &mut Self {
        self.offset += write_triad_be(&mut self.buffer, value);
        self
    }

    /// Reads an unsigned 24-bit little-endian value.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 3 bytes remain.
    pub fn get_ltriad(&mut self) -> Result<u32> {
        read_triad_le_at(&self.buffer, &mut self.offset)
    }

    /// Writes the low 24 bits of `value` in little-endian order.
    pub fn put_ltriad(&mut self, value: u32) -> &mut Self {
        self.offset += write_triad_le(&mut self.buffer, value);
        self
    }

    /*
     * 32-bit
     */

    /// Reads a signed 32-bit big-endian value.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_int(&mut self) -> Result<i32> {
        self.read_be::<i32>()
    }

    /// Writes a signed 32-bit big-endian value.
    pub fn put_int(&mut self, value: i32) -> &mut Self {
        self.write_be(value)
    }

    /// Reads a signed 32-bit little-endian value.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_lint(&mut self) -> Result<i32> {
        self.read_le::<i32>()
    }

    /// Writes a signed 32-bit little-endian value.
    pub fn put_lint(&mut self, value: i32) -> &mut Self {
        self.write_le(value)
    }

    /// Reads an IEEE-754 single precision value in big-endian order.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_float(&mut self) -> Result<f32> {
        self.read_be::<f32>()
    }

    /// Writes an IEEE-754 single precision value in big-endian order.
    pub fn put_float(&mut self, value: f32) -> &mut Self {
        self.write_be(value)
    }

    /// Reads an IEEE-754 single precision value in little-endian order.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 4 bytes remain.
    pub fn get_lfloat(&mut self) -> Result<f32> {
        self.read_le::<f32>()
    }

    /// Writes an IEEE-754 single precision value in little-endian order.
    pub fn put_lfloat(&mut self, value: f32) -> &mut Self {
        self.write_le(value)
    }

    /*
     * 64-bit
     */

    /// Reads an IEEE-754 double precision value in big-endian order.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn get_double(&mut self) -> Result<f64> {
        self.read_be::<f64>()
    }

    /// Writes an IEEE-754 double precision value in big-endian order.
    pub fn put_double(&mut self, value: f64) -> &mut Self {
        self.write_be(value)
    }

    /// Reads an IEEE-754 double precision value in little-endian order.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn get_ldouble(&mut self) -> Result<f64> {
        self.read_le::<f64>()
    }

    /// Writes an IEEE-754 double precision value in little-endian order.
    pub fn put_ldouble(&mut self, value: f64) -> &mut Self {
        self.write_le(value)
    }

    /// Reads a 64-bit big-endian value: the high 32-bit half followed by the low half.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn get_long(&mut self) -> Result<i64> {
        self.read_be::<i64>()
    }

    /// Writes a 64-bit big-endian value: the high 32-bit half followed by the low half.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::ByteStream;
    ///
    /// let mut stream = ByteStream::new();
    /// stream.put_long(0x0000_0001_0000_0002);
    /// assert_eq!(stream.buffer(), &[0, 0, 0, 1, 0, 0, 0, 2]);
    /// ```
    pub fn put_long(&mut self, value: i64) -> &mut Self {
        self.write_be(value)
    }

    /// Reads a 64-bit little-endian value: the low 32-bit half followed by the high half.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than 8 bytes remain.
    pub fn get_llong(&mut self) -> Result<i64> {
        self.read_le::<i64>()
    }

    /// Writes a 64-bit little-endian value: the low 32-bit half followed by the high half.
    pub fn put_llong(&mut self, value: i64) -> &mut Self {
        self.write_le(value)
    }

    /*
     * Variable-length integers
     */

    /// Reads an unsigned 32-bit LEB128 value.
    ///
    /// # Errors
    /// Returns [`crate::Error::VarIntTooLong`] if no terminating byte appears within 5 bytes
    /// and [`crate::Error::BufferUnderrun`] if the buffer ends first. The cursor is not moved
    /// on failure.
    pub fn get_unsigned_var_int(&mut self) -> Result<u32> {
        decode_var_u32(&self.buffer, &mut self.offset)
    }

    /// Writes an unsigned 32-bit LEB128 value (1 to 5 bytes).
    pub fn put_unsigned_var_int(&mut self, value: u32) -> &mut Self {
        self.offset += encode_var_u32(value, &mut self.buffer);
        self
    }

    /// Reads a zigzag-encoded signed 32-bit LEB128 value.
    ///
    /// # Errors
    /// Same as [`ByteStream::get_unsigned_var_int`].
    pub fn get_var_int(&mut self) -> Result<i32> {
        self.get_unsigned_var_int().map(zigzag_decode_32)
    }

    /// Writes a zigzag-encoded signed 32-bit LEB128 value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binstream::ByteStream;
    ///
    /// let mut stream = ByteStream::new();
    /// stream.put_var_int(-1).put_var_int(1).put_var_int(-65);
    /// assert_eq!(stream.buffer(), &[0x01, 0x02, 0x81, 0x01]);
    /// ```
    pub fn put_var_int(&mut self, value: i32) -> &mut Self {
        self.put_unsigned_var_int(zigzag_encode_32(value))
    }

    /// Reads an unsigned 64-bit LEB128 value.
    ///
    /// # Errors
    /// Returns [`crate::Error::VarIntTooLong`] if no terminating byte appears within 10 bytes
    /// and [`crate::Error::BufferUnderrun`] if the buffer ends first. The cursor is not moved
    /// on failure.
    pub fn get_unsigned_var_long(&mut self) -> Result<u64> {
        decode_var_u64(&self.buffer, &mut self.offset)
    }

    /// Writes an unsigned 64-bit LEB128 value (1 to 10 bytes).
    pub fn put_unsigned_var_long(&mut self, value: u64) -> &mut Self {
        self.offset += encode_var_u64(value, &mut self.buffer);
        self
    }

    /// Reads a zigzag-encoded signed 64-bit LEB128 value.
    ///
    /// # Errors
    /// Same as [`ByteStream::get_unsigned_var_long`].
    pub fn get_var_long(&mut self) -> Result<i64> {
        self.get_unsigned_var_long().map(zigzag_decode_64)
    }

    /// Writes a zigzag-encoded signed 64-bit LEB128 value.
    pub fn put_var_long(&mut self, value: i64) -> &mut Self {
        self.put_unsigned_var_long(zigzag_encode_64(value))
    }

    /*
     * Strings
     */

    /// Appends the UTF-8 bytes of `value` without any length prefix.
    ///
    /// Framing the string (e.g. with a preceding var-int length) is up to the caller.
    pub fn put_string(&mut self, value: &str) -> &mut Self {
        self.append(value.as_bytes())
    }

    /// Reads `len` bytes and decodes them as UTF-8.
    ///
    /// # Errors
    /// Returns [`crate::Error::BufferUnderrun`] if fewer than `len` bytes remain or
    /// [`crate::Error::Malformed`] if the bytes are not valid UTF-8. The cursor is not moved
    /// on failure.
    pub fn get_string(&mut self, len: usize) -> Result<String> {
        self.transactional(|stream| {
            let start = stream.offset;
            let bytes = stream.get(len)?;

            std::str::from_utf8(bytes).map(str::to_owned).map_err(|e| {
                malformed_error!(
                    "Invalid UTF-8 string at offset {}-{}: {}",
                    start,
                    start + len,
                    e
                )
            })
        })
    }
}

impl From<Vec<u8>> for ByteStream {
    /// Takes ownership of `buffer` without copying; the cursor starts at 0.
    fn from(buffer: Vec<u8>) -> Self {
        ByteStream {
            buffer,
            offset: 0,
            config: StreamConfig::default(),
        }
    }
}

impl From<&[u8]> for ByteStream {
    fn from(bytes: &[u8]) -> Self {
        ByteStream::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for ByteStream {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}

impl std::io::Write for ByteStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
