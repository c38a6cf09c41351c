//! A single string literal handed to the language's print primitive.

use uro_ir::RepresentationError;

use super::{check_alphabet, escape_into, Escapes};
use crate::runtime::{ruby_str, ruby_table, Kernel, RuntimeCall};

/// What the print primitive does after the literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// Prints the literal and nothing else.
    Exact,
    /// Appends a newline, so the payload's own final newline is left out
    /// of the literal.
    Newline,
}

impl Terminator {
    fn strip<'a>(
        self,
        language: &'static str,
        payload: &'a str,
    ) -> Result<&'a str, RepresentationError> {
        match self {
            Terminator::Exact => Ok(payload),
            Terminator::Newline => payload
                .strip_suffix('\n')
                .ok_or(RepresentationError::MissingTerminator { language }),
        }
    }

    /// Bytes dropped from the end of the payload before quoting.
    pub const fn trimmed(self) -> usize {
        match self {
            Terminator::Exact => 0,
            Terminator::Newline => 1,
        }
    }
}

/// `prefix` + escaped payload + `suffix`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EscapeLiteral {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub escapes: Escapes,
    pub terminator: Terminator,
}

impl EscapeLiteral {
    pub fn render(
        &self,
        language: &'static str,
        payload: &str,
    ) -> Result<String, RepresentationError> {
        let body = self.terminator.strip(language, payload)?;
        check_alphabet(language, body, self.escapes)?;

        let mut out = String::with_capacity(
            self.prefix.len() + body.len() + body.len() / 8 + self.suffix.len(),
        );
        out.push_str(self.prefix);
        escape_into(&mut out, body, self.escapes);
        out.push_str(self.suffix);
        Ok(out)
    }

    /// `xe[s, prefix, suffix, escapes, trimmed]`
    pub fn runtime_call(&self) -> RuntimeCall {
        RuntimeCall::new(
            Kernel::Escape,
            vec![
                ruby_str(self.prefix),
                ruby_str(self.suffix),
                ruby_table(self.escapes),
                self.terminator.trimmed().to_string(),
            ],
        )
    }
}
