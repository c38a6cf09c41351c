//! Representation failures raised while generating a stage.

use thiserror::Error;

/// A backend cannot encode a payload.
///
/// Always fatal to composition: a relay that is almost right is broken.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RepresentationError {
    /// A byte has no spelling in the target language's literal syntax.
    #[error("{language} cannot represent byte 0x{byte:02x} at offset {offset}")]
    Unrepresentable {
        language: &'static str,
        offset: usize,
        byte: u8,
    },

    /// A sequence would change how the target language reads the source.
    #[error("{language} cannot represent `{sequence}` at offset {offset}")]
    ForbiddenSequence {
        language: &'static str,
        offset: usize,
        sequence: &'static str,
    },

    /// The print primitive appends a newline, but the payload lacks one.
    #[error("{language} always ends its output with a newline, but the payload does not")]
    MissingTerminator { language: &'static str },

    /// The generated source exceeds the configured stage size.
    #[error("{language} source would be {len} bytes, over the limit of {limit}")]
    TooLarge {
        language: &'static str,
        len: usize,
        limit: usize,
    },

    /// The origin's self-embedding literal cannot hold the kernel text.
    #[error("{language} origin cannot embed the kernel: {reason} at offset {offset}")]
    Unembeddable {
        language: &'static str,
        offset: usize,
        reason: &'static str,
    },
}

impl RepresentationError {
    /// Name of the backend that failed.
    pub fn language(&self) -> &'static str {
        match self {
            RepresentationError::Unrepresentable { language, .. }
            | RepresentationError::ForbiddenSequence { language, .. }
            | RepresentationError::MissingTerminator { language }
            | RepresentationError::TooLarge { language, .. }
            | RepresentationError::Unembeddable { language, .. } => language,
        }
    }

    /// Offset of the offending byte in the payload, when there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            RepresentationError::Unrepresentable { offset, .. }
            | RepresentationError::ForbiddenSequence { offset, .. }
            | RepresentationError::Unembeddable { offset, .. } => Some(*offset),
            RepresentationError::MissingTerminator { .. }
            | RepresentationError::TooLarge { .. } => None,
        }
    }
}
