//! The shell commands that run the relay by hand.

use uro_ir::{LanguageSpec, StepKind};

/// Where the last stage's output goes, so it can be diffed with the origin.
pub const FINAL_OUTPUT: &str = "QR2.rb";

/// Every step in relay order with `{src}` filled in. The output step of
/// each stage redirects into the next stage's file; the last stage writes
/// [`FINAL_OUTPUT`].
pub fn command_listing(specs: &[LanguageSpec]) -> Vec<String> {
    let mut commands = Vec::new();
    for (index, spec) in specs.iter().enumerate() {
        let target = specs
            .get(index + 1)
            .map_or(FINAL_OUTPUT, |next| next.source_file);
        let last = spec.steps.len().saturating_sub(1);
        for (i, step) in spec.steps.iter().enumerate() {
            let command = step.render(spec.source_file);
            if i == last && step.kind == StepKind::Run {
                commands.push(format!("{command} > {target}"));
            } else {
                commands.push(command);
            }
        }
    }
    commands
}
