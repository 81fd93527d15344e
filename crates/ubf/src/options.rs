//! Conversion limits shared by the encoder and the decoder.

/// Default maximum nesting depth. The root object counts as depth 1.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default maximum declared length of a string (in bytes) or container (in entries).
pub const DEFAULT_MAX_LENGTH: usize = 64 * 1024 * 1024;

/// Limits applied to one conversion.
///
/// Encoder and decoder built from the same options accept exactly the same
/// trees, so anything one side produces the other side reads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UbfOptions {
    /// Maximum container nesting, root object included.
    pub max_depth: usize,
    /// Maximum declared string byte length or container entry count.
    pub max_length: usize,
}

impl Default for UbfOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl UbfOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Caps declared lengths. Values above `i32::MAX` are clamped since the
    /// wire length field is a signed 32-bit integer.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.min(i32::MAX as usize);
        self
    }
}
