//! Quoting strategies.

mod escape;
mod pieces;
mod tape;
mod verbatim;

pub use escape::{EscapeLiteral, Terminator};
pub use pieces::{PieceArray, Split};
pub use tape::Tape;
pub use verbatim::Verbatim;

use uro_ir::RepresentationError;

use crate::runtime::{Kernel, RuntimeCall};

/// Characters a literal must spell differently, paired with the spelling.
///
/// Every spelling starts with a character that is itself escaped, so a
/// reader can always tell an escape from plain text.
pub type Escapes = &'static [(char, &'static str)];

/// How a language embeds a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Escape(EscapeLiteral),
    Pieces(PieceArray),
    Tape(Tape),
    Verbatim(Verbatim),
}

impl Strategy {
    /// Render the source of a program printing `payload`.
    ///
    /// A tape prints any bytes; the literal strategies need UTF-8 and
    /// report the first invalid byte as unrepresentable. `language` only
    /// labels errors.
    pub fn render<P: AsRef<[u8]> + ?Sized>(
        &self,
        language: &'static str,
        payload: &P,
    ) -> Result<String, RepresentationError> {
        let bytes = payload.as_ref();
        match self {
            Strategy::Escape(literal) => literal.render(language, as_text(language, bytes)?),
            Strategy::Pieces(pieces) => pieces.render(language, as_text(language, bytes)?),
            Strategy::Tape(tape) => Ok(tape.render(bytes)),
            Strategy::Verbatim(verbatim) => verbatim.render(language, as_text(language, bytes)?),
        }
    }

    pub fn runtime_call(&self) -> RuntimeCall {
        match self {
            Strategy::Escape(literal) => literal.runtime_call(),
            Strategy::Pieces(pieces) => pieces.runtime_call(),
            Strategy::Tape(tape) => tape.runtime_call(),
            Strategy::Verbatim(_) => RuntimeCall::identity(),
        }
    }

    pub fn kernel(&self) -> Option<Kernel> {
        match self {
            Strategy::Escape(_) => Some(Kernel::Escape),
            Strategy::Pieces(_) => Some(Kernel::Pieces),
            Strategy::Tape(_) => Some(Kernel::Tape),
            Strategy::Verbatim(_) => None,
        }
    }
}

fn as_text<'a>(language: &'static str, bytes: &'a [u8]) -> Result<&'a str, RepresentationError> {
    std::str::from_utf8(bytes).map_err(|e| {
        let offset = e.valid_up_to();
        RepresentationError::Unrepresentable {
            language,
            offset,
            byte: bytes[offset],
        }
    })
}

/// Characters every literal strategy accepts without an escape.
fn is_plain(c: char) -> bool {
    c == '\n' || c == ' ' || c.is_ascii_graphic()
}

pub(crate) fn lookup(escapes: Escapes, c: char) -> Option<&'static str> {
    escapes
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, spelling)| *spelling)
}

/// Reject the first character that has no spelling in the literal.
fn check_alphabet(
    language: &'static str,
    text: &str,
    escapes: Escapes,
) -> Result<(), RepresentationError> {
    match text
        .char_indices()
        .find(|&(_, c)| !is_plain(c) && lookup(escapes, c).is_none())
    {
        Some((offset, _)) => Err(RepresentationError::Unrepresentable {
            language,
            offset,
            byte: text.as_bytes()[offset],
        }),
        None => Ok(()),
    }
}

fn escape_into(out: &mut String, text: &str, escapes: Escapes) {
    for c in text.chars() {
        match lookup(escapes, c) {
            Some(spelling) => out.push_str(spelling),
            None => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests;
