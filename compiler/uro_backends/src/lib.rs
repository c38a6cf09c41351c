//! Language backends for the Uroboros quine relay.
//!
//! A backend turns a payload into the source of a program that prints that
//! payload byte-for-byte. Every backend is a static [`Language`]: a
//! [`LanguageSpec`] (file name, toolchain steps) plus a quoting [`Strategy`].
//!
//! # Strategies
//!
//! | Strategy | Shape of the generated source |
//! |----------|-------------------------------|
//! | [`EscapeLiteral`] | one string literal passed to the print primitive |
//! | [`PieceArray`] | the payload split into chunks, one print per chunk |
//! | [`Tape`] | a Brainfuck program emitting the bytes by delta |
//! | [`Verbatim`] | the payload itself, for languages that echo plain text |
//!
//! Each strategy also has a Ruby mirror ([`runtime`]) so the origin program
//! can regenerate the first stage at run time.

mod registry;
pub mod runtime;
mod strategy;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

use uro_ir::{LanguageSpec, Payload, RepresentationError};

pub use registry::{find, standard, ORIGIN};
pub use registry::{
    AWK, BASH, BRAINFUCK, C, COMMON_LISP, CPP, CSHARP, D, GO, HASKELL, JAVA, JAVASCRIPT, LUA,
    OCAML, PASCAL, PERL, PHP, POSTSCRIPT, PYTHON, R, RUST, SCHEME, TCL,
};
pub use runtime::{Kernel, RuntimeCall};
pub use strategy::{
    EscapeLiteral, Escapes, PieceArray, Split, Strategy, Tape, Terminator, Verbatim,
};

/// Produces the source of a program that prints a given payload.
///
/// Implementations must be pure: the same payload always yields the same
/// source, and nothing is cached between calls.
pub trait LanguageBackend: Send + Sync {
    fn spec(&self) -> &LanguageSpec;

    /// Source text of a program whose stdout is exactly `payload`.
    fn generate(&self, payload: &Payload) -> Result<Payload, RepresentationError>;

    /// The Ruby expression fragments that perform `generate` at run time.
    fn runtime_call(&self) -> RuntimeCall;

    fn name(&self) -> &'static str {
        self.spec().name
    }
}

/// A relay language: where its source goes and how it quotes text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    pub spec: LanguageSpec,
    pub strategy: Strategy,
}

impl Language {
    /// Ruby kernel lambda this language needs, if any.
    pub fn kernel(&self) -> Option<Kernel> {
        self.strategy.kernel()
    }
}

impl LanguageBackend for Language {
    fn spec(&self) -> &LanguageSpec {
        &self.spec
    }

    fn generate(&self, payload: &Payload) -> Result<Payload, RepresentationError> {
        let source = self.strategy.render(self.spec.name, payload)?;
        tracing::trace!(
            language = self.spec.name,
            payload_len = payload.len(),
            source_len = source.len(),
            "generated stage source"
        );
        Ok(Payload::from(source))
    }

    fn runtime_call(&self) -> RuntimeCall {
        self.strategy.runtime_call()
    }
}
