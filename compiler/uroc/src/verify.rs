//! Stage verification: run every stage on its real toolchain and check it
//! prints the next stage.
//!
//! Each stage gets its own scratch directory, so stages are independent and
//! run in parallel on a scoped rayon pool.

mod error;

pub use error::{render_mismatch, StepStatus, VerifyError};

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tempfile::TempDir;
use uro_compose::{Relay, Stage};
use uro_ir::first_divergence;

/// Configuration for the step runner.
#[derive(Clone, Debug)]
pub struct VerifyConfig {
    /// Only verify stages whose language name contains this (case-insensitive).
    pub filter: Option<String>,
    /// Run stages in parallel.
    pub parallel: bool,
    /// Keep stage directories under this path instead of deleting them.
    pub keep: Option<PathBuf>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            filter: None,
            parallel: true,
            keep: None,
        }
    }
}

/// The result of verifying one stage.
#[derive(Debug)]
pub struct StageOutcome {
    pub index: usize,
    pub language: &'static str,
    pub result: Result<Duration, VerifyError>,
}

impl StageOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a verification run, in stage order.
#[derive(Debug, Default)]
pub struct VerifySummary {
    pub outcomes: Vec<StageOutcome>,
    pub elapsed: Duration,
}

impl VerifySummary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(self.failed() > 0)
    }
}

/// Runs stage sources through their toolchains.
pub struct StepRunner {
    config: VerifyConfig,
}

impl StepRunner {
    pub fn new(config: VerifyConfig) -> Self {
        StepRunner { config }
    }

    /// Stage indices selected by the filter.
    pub fn selected(&self, relay: &Relay) -> Vec<usize> {
        let filter = self.config.filter.as_deref().map(str::to_lowercase);
        relay
            .stages()
            .iter()
            .enumerate()
            .filter(|(_, stage)| {
                filter
                    .as_deref()
                    .is_none_or(|f| stage.spec.name.to_lowercase().contains(f))
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Verify every selected stage of `relay`.
    pub fn run(&self, relay: &Relay) -> VerifySummary {
        let start = Instant::now();
        let indices = self.selected(relay);
        tracing::debug!(stages = indices.len(), parallel = self.config.parallel, "verifying");

        let outcomes = if self.config.parallel && indices.len() > 1 {
            self.run_parallel(relay, &indices)
        } else {
            indices
                .iter()
                .map(|&index| self.run_stage(relay, index))
                .collect()
        };

        VerifySummary {
            outcomes,
            elapsed: start.elapsed(),
        }
    }

    /// Run stages on a scoped pool that is torn down before returning.
    fn run_parallel(&self, relay: &Relay, indices: &[usize]) -> Vec<StageOutcome> {
        rayon::ThreadPoolBuilder::new()
            .build_scoped(rayon::ThreadBuilder::run, |pool| {
                pool.install(|| {
                    indices
                        .par_iter()
                        .map(|&index| self.run_stage(relay, index))
                        .collect::<Vec<_>>()
                })
            })
            .unwrap_or_else(|e| {
                tracing::warn!("failed to create thread pool ({e}), running sequentially");
                indices
                    .iter()
                    .map(|&index| self.run_stage(relay, index))
                    .collect()
            })
    }

    /// Write stage `index`, run its steps, and compare the final step's
    /// stdout with the next stage's source.
    pub fn run_stage(&self, relay: &Relay, index: usize) -> StageOutcome {
        let stage = &relay.stages()[index];
        let start = Instant::now();
        let result = self
            .execute(index, stage)
            .and_then(|output| check_output(index, stage, relay, output))
            .map(|()| start.elapsed());
        match &result {
            Ok(elapsed) => {
                tracing::debug!(stage = index, language = stage.spec.name, ?elapsed, "stage ok");
            }
            Err(e) => {
                tracing::debug!(stage = index, language = stage.spec.name, "stage failed: {e}");
            }
        }
        StageOutcome {
            index,
            language: stage.spec.name,
            result,
        }
    }

    /// Run every step of `stage` in a fresh directory; returns the last
    /// step's stdout.
    fn execute(&self, index: usize, stage: &Stage) -> Result<Vec<u8>, VerifyError> {
        let scratch = self.scratch_dir(index, stage)?;
        let dir = scratch.path();
        let source_path = dir.join(stage.spec.source_file);
        std::fs::write(&source_path, stage.source.as_bytes())
            .map_err(VerifyError::io(format!("writing {}", source_path.display())))?;

        let mut stdout = Vec::new();
        for step in stage.spec.steps {
            let command = step.render(stage.spec.source_file);
            tracing::trace!(stage = index, %command, "running step");
            let output = Command::new("sh")
                .arg("-c")
                .arg(&command)
                .current_dir(dir)
                .output()
                .map_err(VerifyError::io(format!("spawning `{command}`")))?;
            if !output.status.success() {
                return Err(VerifyError::ToolchainInvocation {
                    language: stage.spec.name,
                    command,
                    status: StepStatus(output.status.code()),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                });
            }
            stdout = output.stdout;
        }
        Ok(stdout)
    }

    fn scratch_dir(&self, index: usize, stage: &Stage) -> Result<ScratchDir, VerifyError> {
        match &self.config.keep {
            Some(root) => {
                let dir = root.join(format!("{index:02}-{}", dir_name(stage.spec.name)));
                std::fs::create_dir_all(&dir)
                    .map_err(VerifyError::io(format!("creating {}", dir.display())))?;
                Ok(ScratchDir::Kept(dir))
            }
            None => tempfile::Builder::new()
                .prefix(&format!("uroc-{index:02}-"))
                .tempdir()
                .map(ScratchDir::Temp)
                .map_err(VerifyError::io("creating scratch directory".to_owned())),
        }
    }
}

fn check_output(
    index: usize,
    stage: &Stage,
    relay: &Relay,
    actual: Vec<u8>,
) -> Result<(), VerifyError> {
    let expected = relay.expected_output(index);
    match first_divergence(expected.as_bytes(), &actual) {
        None => Ok(()),
        Some(offset) => Err(VerifyError::CycleMismatch {
            stage: index,
            language: stage.spec.name,
            offset,
            expected: expected.clone(),
            actual,
        }),
    }
}

/// File-system friendly form of a language name (`C++` -> `cpp`).
fn dir_name(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            '+' => Some('p'),
            '#' => Some('s'),
            ' ' => Some('-'),
            c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

enum ScratchDir {
    Temp(TempDir),
    Kept(PathBuf),
}

impl ScratchDir {
    fn path(&self) -> &Path {
        match self {
            ScratchDir::Temp(dir) => dir.path(),
            ScratchDir::Kept(dir) => dir,
        }
    }
}
