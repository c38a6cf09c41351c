//! The self-embedding Ruby program that starts and ends the relay.
//!
//! ```text
//! eval$s=%q(eval((%w(
//! <substituted kernel, cut into lines>
//! )*"").gsub(...)))
//! ```
//!
//! Running it binds `$s` to everything inside `%q(...)`, joins the words,
//! restores the kernel and evaluates it. The kernel rebuilds this exact file
//! with `%(eval$s=%q(#$s))+10.chr` and feeds it through the relay's runtime
//! calls.

use uro_backends::ORIGIN;
use uro_ir::{Payload, RepresentationError};

use crate::substitution::SubstitutionPass;

/// Ruby expression that evaluates to the origin's own source text.
pub const SELF_SOURCE: &str = "(%(eval$s=%q(#$s))+10.chr)";

const HEAD: &str = "eval$s=%q(";

/// Build the origin source around `kernel`, cutting the substituted kernel
/// into lines of `width` characters.
pub fn embed(
    kernel: &str,
    pass: &SubstitutionPass,
    width: usize,
) -> Result<Payload, RepresentationError> {
    let body = String::from_utf8(pass.substitute(kernel.as_bytes())).map_err(|e| {
        RepresentationError::Unembeddable {
            language: ORIGIN.name,
            offset: e.utf8_error().valid_up_to(),
            reason: "invalid UTF-8",
        }
    })?;
    check_embeddable(&body)?;

    let restorer = pass.ruby_restorer();
    check_embeddable(&restorer)?;

    let width = width.max(1);
    let mut text = String::with_capacity(body.len() + body.len() / width + 128);
    text.push_str(HEAD);
    text.push_str("eval((%w(\n");
    let chars: Vec<char> = body.chars().collect();
    for line in chars.chunks(width) {
        text.extend(line);
        text.push('\n');
    }
    text.push_str(")*\"\")");
    text.push_str(&restorer);
    text.push_str("))\n");
    Ok(Payload::from(text))
}

/// The text `$s` holds when `source` runs: everything inside `%q(...)`.
pub fn self_text(source: &str) -> Option<&str> {
    source.strip_prefix(HEAD)?.strip_suffix(")\n")
}

/// `%q(...)` ends at the first unbalanced `)` and treats `\` as an escape,
/// so the embedded text must have neither.
fn check_embeddable(text: &str) -> Result<(), RepresentationError> {
    let mut depth = 0usize;
    for (offset, c) in text.char_indices() {
        match c {
            '\\' => {
                return Err(RepresentationError::Unembeddable {
                    language: ORIGIN.name,
                    offset,
                    reason: "backslash",
                })
            }
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(RepresentationError::Unembeddable {
                        language: ORIGIN.name,
                        offset,
                        reason: "unbalanced `)`",
                    })?;
            }
            _ => {}
        }
    }
    if depth > 0 {
        return Err(RepresentationError::Unembeddable {
            language: ORIGIN.name,
            offset: text.len(),
            reason: "unclosed `(`",
        });
    }
    Ok(())
}
