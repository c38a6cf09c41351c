//! Languages that copy text outside their code markers straight to stdout.

use uro_ir::RepresentationError;

/// The payload is the source. Only sequences that would switch the
/// language out of plain-text mode are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verbatim {
    /// Rejected anywhere in the payload.
    pub forbidden: &'static [&'static str],
    /// Rejected only at offset 0.
    pub forbidden_prefixes: &'static [&'static str],
}

impl Verbatim {
    pub fn render(
        &self,
        language: &'static str,
        payload: &str,
    ) -> Result<String, RepresentationError> {
        if let Some(sequence) = self
            .forbidden_prefixes
            .iter()
            .copied()
            .find(|seq| payload.starts_with(seq))
        {
            return Err(RepresentationError::ForbiddenSequence {
                language,
                offset: 0,
                sequence,
            });
        }

        let earliest = self
            .forbidden
            .iter()
            .filter_map(|seq| payload.find(seq).map(|at| (at, *seq)))
            .min_by_key(|&(at, _)| at);
        if let Some((offset, sequence)) = earliest {
            return Err(RepresentationError::ForbiddenSequence {
                language,
                offset,
                sequence,
            });
        }

        Ok(payload.to_owned())
    }
}
