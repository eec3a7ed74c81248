//! Allocation behaviour of a [`crate::ByteStream`].
//!
//! The wire format itself is fixed; the only tunable aspect of a stream is how it manages
//! the memory behind its buffer.

/// Configuration for buffer allocation of a [`crate::ByteStream`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Number of bytes reserved when the stream is created (default: 0)
    pub initial_capacity: usize,

    /// Drop the allocation on `reset()` instead of clearing it for reuse (default: false)
    pub release_on_reset: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            release_on_reset: false,
        }
    }
}

impl StreamConfig {
    /// Creates a configuration sized for a single network datagram
    ///
    /// Reserves one Ethernet MTU and keeps the allocation across resets, which suits a
    /// stream that is reset and refilled once per outgoing packet.
    #[must_use]
    pub fn packet() -> Self {
        Self {
            initial_capacity: 1500,
            release_on_reset: false,
        }
    }

    /// Creates a configuration that never holds on to memory it does not currently need
    #[must_use]
    pub fn compact() -> Self {
        Self {
            initial_capacity: 0,
            release_on_reset: true,
        }
    }

    /// Sets the number of bytes reserved up front
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets whether `reset()` releases the allocation
    #[must_use]
    pub fn with_release_on_reset(mut self, release_on_reset: bool) -> Self {
        self.release_on_reset = release_on_reset;
        self
    }
}
