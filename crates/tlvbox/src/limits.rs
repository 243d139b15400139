//! Decode ceilings for untrusted input.
//!
//! The wire format bounds neither the nesting depth of containers nor the
//! size of a buffer. Every [`TlvBox`](crate::TlvBox) carries a
//! [`DecodeLimits`] and hands it down to the containers nested inside it.

use serde::{Deserialize, Serialize};

/// Default nesting ceiling.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Default ceiling on the bytes a single decode may consume (64 MiB).
pub const DEFAULT_MAX_INPUT_LEN: usize = 64 * 1024 * 1024;

/// Limits applied while decoding.
///
/// The top-level container sits at depth 0. Every nested decode copies its
/// payload out of the enclosing container, so `max_input_len` also caps the
/// total bytes decoded along a chain of nested containers, from the outermost
/// one down to the deepest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeLimits {
    /// Deepest nesting level a nested decode may reach.
    pub max_depth: u32,
    /// Largest input slice, in bytes, accepted by one decode call, and the
    /// ceiling on bytes decoded along one nesting chain.
    pub max_input_len: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

impl DecodeLimits {
    /// No ceilings at all, matching producers that trust their input.
    pub fn unlimited() -> Self {
        Self {
            max_depth: u32::MAX,
            max_input_len: usize::MAX,
        }
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }
}
