//! # binstream Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the binstream library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all binstream operations
pub use crate::Error;

/// The result type used throughout binstream
pub use crate::Result;

// ================================================================================================
// Stream
// ================================================================================================

/// Cursor-based byte stream and its allocation settings
pub use crate::stream::{ByteStream, StreamConfig};

/// Endian-aware primitive conversion
pub use crate::stream::io::Primitive;

// ================================================================================================
// Variable-Length Encoding
// ================================================================================================

/// LEB128 byte budgets and zigzag mapping
pub use crate::stream::varint::{
    zigzag_decode_32, zigzag_decode_64, zigzag_encode_32, zigzag_encode_64, MAX_VARINT_BYTES,
    MAX_VARLONG_BYTES,
};
