use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! invalid_input_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidInput {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidInput {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! underrun_error {
    ($requested:expr, $remaining:expr) => {
        crate::Error::BufferUnderrun {
            requested: $requested,
            remaining: $remaining,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every error is raised at the point where it is detected and is never retried or recovered
/// internally. A failing read never commits a partial cursor movement, so after any error the
/// stream is positioned exactly where it was before the call.
///
/// # Error Categories
///
/// ## Read Errors
/// - [`Error::BufferUnderrun`] - A read asked for more bytes than remain after the cursor
/// - [`Error::VarIntTooLong`] - A variable-length integer did not terminate within its byte budget
/// - [`Error::Malformed`] - The bytes were read but could not be decoded (e.g. invalid UTF-8)
///
/// ## Write / Positioning Errors
/// - [`Error::InvalidInput`] - An append received something that is not a byte sequence
/// - [`Error::InvalidOffset`] - An explicit cursor override points past the end of the buffer
///
/// Truncating writes (e.g. a triad above `0xFF_FFFF`) are intentional wire semantics and are
/// never reported as errors.
///
/// # Examples
///
/// ```rust
/// use binstream::{ByteStream, Error};
///
/// let mut stream = ByteStream::from_bytes(&[0x01]);
/// match stream.get_int() {
///     Ok(value) => println!("int: {}", value),
///     Err(Error::BufferUnderrun { requested, remaining }) => {
///         eprintln!("needed {} bytes, only {} left", requested, remaining);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read requested more bytes than remain between the cursor and the end of the buffer.
    ///
    /// The data is never padded with zeroes or wrapped around; the caller always sees this
    /// error instead of a silently truncated value.
    ///
    /// # Fields
    ///
    /// * `requested` - Number of bytes the read needed
    /// * `remaining` - Number of bytes that were available after the cursor
    #[error("Buffer underrun - requested {requested} bytes, {remaining} remaining")]
    BufferUnderrun {
        /// Number of bytes the read needed
        requested: usize,
        /// Number of bytes that were available after the cursor
        remaining: usize,
    },

    /// A variable-length integer kept its continuation bit set past the maximum byte count
    /// for its width (5 bytes for 32-bit, 10 bytes for 64-bit values).
    #[error("Variable-length integer exceeds {max_bytes} bytes")]
    VarIntTooLong {
        /// The byte budget that was exhausted
        max_bytes: usize,
    },

    /// An append or buffer replacement received a value that cannot be interpreted as bytes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was rejected
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid input - {file}:{line}: {message}")]
    InvalidInput {
        /// The message to be printed for the InvalidInput error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An explicit cursor override was outside `[0, length]`.
    #[error("Invalid offset {offset} for a buffer of {length} bytes")]
    InvalidOffset {
        /// The rejected offset
        offset: usize,
        /// Length of the buffer the offset was meant for
        length: usize,
    },

    /// Bytes were available but their content could not be decoded.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}
