//! Byte stream abstraction and its wire codecs.
//!
//! This module provides everything needed to turn typed values into a byte sequence and back.
//! Producer and consumer agree on a sequence of typed calls out-of-band (a protocol schema);
//! the stream guarantees that each call reads or writes exactly the documented bytes.
//!
//! # Architecture
//!
//! - **Buffer store** - An owned `Vec<u8>` that only grows on write and is sliced on read
//! - **Cursor** - A single offset advanced by every read and write
//! - **Codecs** - Fixed-width ([`crate::stream::io`]) and variable-length
//!   ([`crate::stream::varint`]) encoders and decoders
//!
//! # Key Components
//!
//! - [`crate::stream::binarystream::ByteStream`] - The stream entity with all typed operations
//! - [`crate::stream::config::StreamConfig`] - Allocation behaviour of a stream
//! - [`crate::stream::io`] - Endian-aware primitive conversion on slices
//! - [`crate::stream::varint`] - LEB128 and zigzag helpers
//!
//! # Wire Layout
//!
//! | Codec | Width | Order |
//! |-------|-------|-------|
//! | bool, byte | 1 | - |
//! | short / lshort | 2 | BE / LE |
//! | triad / ltriad | 3 | BE / LE |
//! | int / lint, float / lfloat | 4 | BE / LE |
//! | long / llong, double / ldouble | 8 | BE / LE |
//! | var int / var long | 1-5 / 1-10 | LEB128 |
//!
//! # Examples
//!
//! ```rust
//! use binstream::ByteStream;
//!
//! let mut stream = ByteStream::new();
//! stream.put_lint(-7).put_unsigned_var_long(1 << 40);
//!
//! stream.flip();
//! assert_eq!(stream.get_lint()?, -7);
//! assert_eq!(stream.get_unsigned_var_long()?, 1 << 40);
//! # Ok::<(), binstream::Error>(())
//! ```

pub mod binarystream;
pub mod config;
pub mod io;
pub mod varint;

pub use binarystream::ByteStream;
pub use config::StreamConfig;
