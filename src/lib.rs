// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! # binstream
//!
//! A sequential binary codec: a cursor over a growable byte buffer with typed reads and writes
//! for booleans, fixed-width integers in both byte orders, IEEE-754 floats, 24-bit triads and
//! LEB128 variable-length integers (zigzag-encoded when signed).
//!
//! The crate underlies wire-protocol and save-format serialization where encoder and decoder
//! must agree byte-for-byte on layout. It deliberately knows nothing about framing, transport
//! or the meaning of the values it moves.
//!
//! # Features
//!
//! - **Byte-exact codecs** - Every width and byte order is fixed and documented
//! - **Bounds-checked reads** - Short input yields [`Error::BufferUnderrun`], never padded data
//! - **No partial reads** - A failing read leaves the cursor where it was
//! - **Wrapping writes** - Triads are masked to 24 bits instead of rejected
//!
//! # Quick Start
//!
//! ```rust
//! use binstream::prelude::*;
//!
//! let mut stream = ByteStream::new();
//! stream
//!     .put_bool(true)
//!     .put_short(0x1234)
//!     .put_ltriad(0x00AB_CDEF)
//!     .put_var_int(-300)
//!     .put_double(0.5);
//!
//! stream.flip();
//! assert!(stream.get_bool()?);
//! assert_eq!(stream.get_short()?, 0x1234);
//! assert_eq!(stream.get_ltriad()?, 0x00AB_CDEF);
//! assert_eq!(stream.get_var_int()?, -300);
//! assert_eq!(stream.get_double()?, 0.5);
//! assert_eq!(stream.remaining(), 0);
//! # Ok::<(), binstream::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]. See [`Error`] for the possible failures.

#![doc(html_no_source)]
#![deny(missing_docs)]

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use binstream::prelude::*;
///
/// let mut stream = ByteStream::with_config(StreamConfig::packet());
/// stream.put_int(1);
/// # Ok::<(), binstream::Error>(())
/// ```
pub mod prelude;

/// Byte stream, configuration and wire codecs
///
/// # Key Types
///
/// - [`stream::ByteStream`] - Cursor-based growable byte buffer
/// - [`stream::StreamConfig`] - Allocation behaviour
/// - [`stream::io::Primitive`] - Endian-aware conversion trait
///
/// # Key Modules
///
/// - [`stream::io`] - Fixed-width readers/writers on slices
/// - [`stream::varint`] - LEB128 and zigzag helpers
pub mod stream;

/// `binstream` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `binstream` Error type
///
/// The main error type for all operations in this crate.
///
/// # Examples
///
/// ```rust
/// use binstream::{ByteStream, Error};
///
/// let mut stream = ByteStream::from_bytes(&[0xFF; 5]);
/// match stream.get_var_int() {
///     Ok(value) => println!("Decoded {}", value),
///     Err(Error::VarIntTooLong { max_bytes }) => println!("No terminator in {} bytes", max_bytes),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// The byte stream entity and its configuration.
pub use stream::{ByteStream, StreamConfig};

/// Endian-aware conversion trait implemented for all fixed-width primitives.
pub use stream::io::Primitive;
