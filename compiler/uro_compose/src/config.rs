//! Composition settings.

/// Default characters per line of the origin's embedded kernel.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Default ceiling on any single stage source.
pub const DEFAULT_MAX_SOURCE_LEN: usize = 16 * 1024 * 1024;

/// Configuration for [`ChainComposer`](crate::ChainComposer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComposeConfig {
    /// Characters per line of the embedded kernel. Zero is treated as one.
    pub line_width: usize,
    /// Largest stage source, in bytes, before composition fails.
    pub max_source_len: usize,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        ComposeConfig {
            line_width: DEFAULT_LINE_WIDTH,
            max_source_len: DEFAULT_MAX_SOURCE_LEN,
        }
    }
}
