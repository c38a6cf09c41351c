//! The payload cut into chunks, each printed by its own statement.
//!
//! Used where a single literal would break a compiler limit (Java's 64K
//! constant pool entries, Pascal's 255-character strings) or where a
//! language cannot hold a raw newline inside one literal.

use uro_ir::RepresentationError;

use super::{check_alphabet, escape_into, Escapes};
use crate::runtime::{ruby_str, ruby_table, Kernel, RuntimeCall};

/// How the payload is cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Split {
    /// One piece per line, each keeping its newline.
    Lines,
    /// Pieces of at most this many characters. Zero cuts by line.
    Width(usize),
}

impl Split {
    fn pieces(self, text: &str) -> Vec<&str> {
        match self {
            Split::Width(width) if width > 0 => {
                let mut pieces = Vec::with_capacity(text.len() / width + 1);
                let mut start = 0;
                for (count, (at, _)) in text.char_indices().enumerate() {
                    if count > 0 && count % width == 0 {
                        pieces.push(&text[start..at]);
                        start = at;
                    }
                }
                if start < text.len() {
                    pieces.push(&text[start..]);
                }
                pieces
            }
            _ => text.split_inclusive('\n').collect(),
        }
    }

    /// Width as the runtime mirror sees it.
    pub const fn ruby_width(self) -> usize {
        match self {
            Split::Lines => 0,
            Split::Width(width) => width,
        }
    }
}

/// `prefix` + items joined by `separator` + `suffix`, where each item is
/// `item_prefix` + escaped piece + `item_suffix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceArray {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub item_prefix: &'static str,
    pub item_suffix: &'static str,
    pub separator: &'static str,
    pub escapes: Escapes,
    pub split: Split,
}

impl PieceArray {
    pub fn render(
        &self,
        language: &'static str,
        payload: &str,
    ) -> Result<String, RepresentationError> {
        check_alphabet(language, payload, self.escapes)?;

        let pieces = self.split.pieces(payload);
        let overhead = self.item_prefix.len() + self.item_suffix.len() + self.separator.len();
        let mut out = String::with_capacity(
            self.prefix.len()
                + payload.len()
                + payload.len() / 8
                + pieces.len() * overhead
                + self.suffix.len(),
        );
        out.push_str(self.prefix);
        for (i, piece) in pieces.into_iter().enumerate() {
            if i > 0 {
                out.push_str(self.separator);
            }
            out.push_str(self.item_prefix);
            escape_into(&mut out, piece, self.escapes);
            out.push_str(self.item_suffix);
        }
        out.push_str(self.suffix);
        Ok(out)
    }

    /// `xp[s, prefix, suffix, item_prefix, item_suffix, separator, escapes, width]`
    pub fn runtime_call(&self) -> RuntimeCall {
        RuntimeCall::new(
            Kernel::Pieces,
            vec![
                ruby_str(self.prefix),
                ruby_str(self.suffix),
                ruby_str(self.item_prefix),
                ruby_str(self.item_suffix),
                ruby_str(self.separator),
                ruby_table(self.escapes),
                self.split.ruby_width().to_string(),
            ],
        )
    }
}
