//! Verification failures and their reports.

use std::fmt::{self, Write as _};

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;
use uro_ir::Payload;

/// Bytes of context shown on each side of a divergence.
const WINDOW: usize = 60;

#[derive(Debug, Error)]
pub enum VerifyError {
    /// The stage ran but printed something other than the next stage.
    #[error("stage {stage} ({language}) output diverges from the next stage at byte {offset}")]
    CycleMismatch {
        stage: usize,
        language: &'static str,
        offset: usize,
        expected: Payload,
        actual: Vec<u8>,
    },

    /// A compile or run step exited unsuccessfully.
    #[error("{language}: `{command}` failed ({status})")]
    ToolchainInvocation {
        language: &'static str,
        command: String,
        status: StepStatus,
        stderr: String,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl VerifyError {
    pub(super) fn io(context: String) -> impl FnOnce(std::io::Error) -> VerifyError {
        move |source| VerifyError::Io { context, source }
    }

    /// Long-form report: the ariadne snippet for mismatches, captured stderr
    /// for toolchain failures.
    pub fn report(&self) -> String {
        match self {
            VerifyError::CycleMismatch {
                stage,
                language,
                offset,
                expected,
                actual,
            } => render_mismatch(*stage, language, *offset, expected, actual),
            VerifyError::ToolchainInvocation { stderr, .. } => {
                let mut out = format!("{self}\n");
                for line in stderr.lines().take(20) {
                    let _ = writeln!(out, "  | {line}");
                }
                out
            }
            VerifyError::Io { .. } => format!("{self}\n"),
        }
    }
}

/// Exit code of a failed step; `None` when a signal killed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepStatus(pub Option<i32>);

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "exit status {code}"),
            None => f.write_str("killed by signal"),
        }
    }
}

/// Render a mismatch as a source snippet of the expected text around
/// `offset`, labelled with what the stage printed instead.
pub fn render_mismatch(
    stage: usize,
    language: &str,
    offset: usize,
    expected: &Payload,
    actual: &[u8],
) -> String {
    let expected_text = String::from_utf8_lossy(expected.as_bytes());
    let text: &str = &expected_text;
    let start = floor_char_boundary(text, offset.saturating_sub(WINDOW));
    let end = floor_char_boundary(text, offset.saturating_add(WINDOW).min(text.len()));
    let snippet = &text[start..end];

    // ariadne spans count chars, not bytes.
    let at = text[start..floor_char_boundary(text, offset.min(text.len()))]
        .chars()
        .count();
    let span = at..(at + 1).min(snippet.chars().count().max(at));

    let got = actual.get(offset..).map_or(String::new(), |rest| {
        String::from_utf8_lossy(&rest[..rest.len().min(16)]).into_owned()
    });
    let label = if offset >= actual.len() {
        "output ends here".to_owned()
    } else {
        format!("printed {got:?} here")
    };

    let mut buf = Vec::new();
    let written = Report::build(ReportKind::Error, (), at)
        .with_message(format!(
            "stage {stage} ({language}) did not print the next stage"
        ))
        .with_label(Label::new(span).with_message(label))
        .with_note(format!(
            "expected {} bytes, got {}; first difference at byte {offset}",
            expected.len(),
            actual.len()
        ))
        .with_config(Config::default().with_color(false))
        .finish()
        .write(Source::from(snippet.to_owned()), &mut buf);
    match written {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("stage {stage} ({language}) diverges at byte {offset}\n"),
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
