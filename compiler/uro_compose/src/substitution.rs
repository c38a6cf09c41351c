//! Placeholder substitution for text nested inside the origin program.
//!
//! The origin stores its kernel in a Ruby `%w(...)` word array, where
//! whitespace splits words and a backslash escapes the next character.
//! Substitution replaces those characters with a backtick followed by a
//! one-character code, and doubles literal backticks, so the stored text is
//! one unbroken word sequence and decoding is unambiguous.

use thiserror::Error;

/// Introduces every placeholder.
pub const ESCAPE: u8 = b'`';

/// Risky byte and the code that follows [`ESCAPE`] in its placeholder.
/// The first entry makes the pass injective. Every entry is ASCII, so the
/// pass never splits a UTF-8 sequence.
const TABLE: &[(u8, u8)] = &[
    (ESCAPE, ESCAPE),
    (b' ', b'_'),
    (b'\n', b'n'),
    (b'\t', b't'),
    (b'\r', b'r'),
    (b'\\', b'/'),
];

/// Malformed substituted text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("escape at offset {offset} is not followed by a code")]
    Dangling { offset: usize },
    #[error("unknown placeholder code 0x{code:02x} at offset {offset}")]
    UnknownCode { offset: usize, code: u8 },
}

/// The substitution and its inverse, in Rust and as Ruby code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionPass;

impl SubstitutionPass {
    /// Replace every risky byte with its placeholder.
    pub fn substitute(&self, text: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() + text.len() / 4);
        for &b in text {
            match TABLE.iter().find(|(risky, _)| *risky == b) {
                Some(&(_, code)) => out.extend_from_slice(&[ESCAPE, code]),
                None => out.push(b),
            }
        }
        out
    }

    /// Inverse of [`substitute`](Self::substitute).
    pub fn restore(&self, text: &[u8]) -> Result<Vec<u8>, RestoreError> {
        let mut out = Vec::with_capacity(text.len());
        let mut bytes = text.iter().copied().enumerate();
        while let Some((offset, b)) = bytes.next() {
            if b != ESCAPE {
                out.push(b);
                continue;
            }
            let (_, code) = bytes.next().ok_or(RestoreError::Dangling { offset })?;
            let (risky, _) = TABLE
                .iter()
                .find(|(_, known)| *known == code)
                .ok_or(RestoreError::UnknownCode { offset, code })?;
            out.push(*risky);
        }
        Ok(out)
    }

    /// Ruby method call that restores substituted text, to be appended to
    /// the expression producing it:
    ///
    /// ```text
    /// .gsub(/`(.)/){["`",32.chr,10.chr,9.chr,13.chr,92.chr]["`_ntr/".index($1)]}
    /// ```
    ///
    /// Contains no whitespace or backslash, so it can sit inside the
    /// origin's `%q(...)`.
    pub fn ruby_restorer(&self) -> String {
        let risky: Vec<String> = TABLE
            .iter()
            .map(|&(b, _)| {
                if b.is_ascii_graphic() && b != b'\\' && b != b'"' {
                    format!("\"{}\"", char::from(b))
                } else {
                    format!("{b}.chr")
                }
            })
            .collect();
        let codes: String = TABLE.iter().map(|&(_, code)| char::from(code)).collect();
        format!(
            ".gsub(/{}(.)/){{[{}][\"{codes}\".index($1)]}}",
            char::from(ESCAPE),
            risky.join(",")
        )
    }
}

#[cfg(test)]
mod tests;
