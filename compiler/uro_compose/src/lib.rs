//! Composition of a quine relay.
//!
//! ```text
//! Chain [Ruby, L1, L2, .., Ln]
//!    │
//!    ▼  fold right-to-left: Ln's runtime call innermost, L1's outermost
//! kernel (Ruby) ──substitute──► %w(...) words ──► origin source (stage 0)
//!    │
//!    ▼  unroll: Ln.generate(origin), .., L1.generate(stage 2)
//! Relay [stage 0, stage 1, .., stage n]
//! ```
//!
//! The origin never contains a precomputed copy of stage 1. It rebuilds its
//! own text from `$s` and pushes it through the same transformations at run
//! time, so the prediction from `unroll` and the program's actual output
//! agree by construction.

mod chain;
mod composer;
mod config;
mod error;
pub mod origin;
mod substitution;

pub use chain::Chain;
pub use composer::{ChainComposer, Relay, Stage};
pub use config::{ComposeConfig, DEFAULT_LINE_WIDTH, DEFAULT_MAX_SOURCE_LEN};
pub use error::ComposeError;
pub use substitution::{RestoreError, SubstitutionPass, ESCAPE};

/// Compose the standard relay with default settings.
pub fn compose_standard() -> Result<Relay, ComposeError> {
    ChainComposer::default().compose(&Chain::standard())
}
