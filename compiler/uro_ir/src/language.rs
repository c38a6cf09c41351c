//! Static language descriptors.
//!
//! A `LanguageSpec` says where a stage's source is saved and how it is
//! compiled and run. The quoting logic lives in `uro_backends`.

/// Placeholder replaced by the on-disk source file name in step commands.
pub const SRC_PLACEHOLDER: &str = "{src}";

/// Whether a step produces an artifact or the stage's output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Builds an artifact; its stdout is ignored.
    Compile,
    /// Runs the program; stdout of the last run step is the stage output.
    Run,
}

/// One toolchain invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    pub kind: StepKind,
    /// Shell command template containing [`SRC_PLACEHOLDER`] where the
    /// source file name belongs (run steps of compiled languages may not
    /// mention it at all).
    pub command: &'static str,
    /// Ubuntu package providing the toolchain, if any.
    pub package: Option<&'static str>,
}

impl Step {
    pub const fn compile(command: &'static str, package: &'static str) -> Self {
        Step {
            kind: StepKind::Compile,
            command,
            package: Some(package),
        }
    }

    pub const fn run(command: &'static str, package: Option<&'static str>) -> Self {
        Step {
            kind: StepKind::Run,
            command,
            package,
        }
    }

    /// The concrete shell command for a source saved as `source_file`.
    pub fn render(&self, source_file: &str) -> String {
        self.command.replace(SRC_PLACEHOLDER, source_file)
    }
}

/// Static descriptor of one language in the relay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LanguageSpec {
    /// Display name.
    pub name: &'static str,
    /// File name the stage source is saved under, e.g. `QR.rs`.
    pub source_file: &'static str,
    /// Ordered toolchain steps. Only the final step's stdout matters.
    pub steps: &'static [Step],
}

impl LanguageSpec {
    /// Toolchain packages in step order, skipping steps without one.
    pub fn packages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().filter_map(|step| step.package)
    }
}

#[cfg(test)]
mod tests;
