//! Core data types shared by every Uroboros crate.
//!
//! # Overview
//!
//! ```text
//! LanguageSpec (static)          Payload (immutable text)
//!     name, source_file              │
//!     steps: [Step]                  ▼
//!        │                     backend.generate() ──► Payload for the previous stage
//!        ▼
//!     compile / run commands with a `{src}` placeholder
//! ```
//!
//! Nothing in this crate knows how a language quotes text. It only names the
//! pieces that the backends, the composer and the verifier pass around.

mod error;
mod language;
mod payload;

pub use error::RepresentationError;
pub use language::{LanguageSpec, Step, StepKind, SRC_PLACEHOLDER};
pub use payload::{first_divergence, Payload};
