//! Payload: the exact bytes a stage must print.

use std::fmt;
use std::str::Utf8Error;
use std::sync::Arc;

/// Immutable bytes threaded through the relay.
///
/// Each composition step produces a fresh `Payload`; nothing mutates one in
/// place. Clones share the same allocation, so a `Relay` can hold every
/// stage source without copying.
///
/// Payloads are usually UTF-8 but need not be: a Brainfuck tape can print
/// any byte, while the string-literal strategies go through [`as_str`].
///
/// [`as_str`]: Payload::as_str
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Payload(Arc<[u8]>);

impl Payload {
    /// Create a payload from owned or borrowed bytes.
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        Payload(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The payload as text, failing at the first byte that is not UTF-8.
    #[inline]
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::new(Vec::new())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::new(text.into_bytes())
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::new(text.as_bytes())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::new(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::new(bytes)
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 48;
        if self.0.len() <= PREVIEW {
            write!(f, "Payload({:?})", String::from_utf8_lossy(&self.0))
        } else {
            let head = String::from_utf8_lossy(&self.0[..PREVIEW]);
            write!(f, "Payload({head:?}.. {} bytes)", self.0.len())
        }
    }
}

/// Offset of the first byte where `expected` and `actual` differ.
///
/// When one is a prefix of the other, the divergence is at the end of the
/// shorter one. Returns `None` when both are identical.
pub fn first_divergence(expected: &[u8], actual: &[u8]) -> Option<usize> {
    let common = expected.len().min(actual.len());
    if let Some(pos) = expected[..common]
        .iter()
        .zip(&actual[..common])
        .position(|(a, b)| a != b)
    {
        return Some(pos);
    }
    if expected.len() == actual.len() {
        None
    } else {
        Some(common)
    }
}
