//! Right-to-left fold of the chain into the origin program, and the unroll
//! that predicts every stage.

use uro_backends::runtime::PRELUDE;
use uro_backends::ORIGIN;
use uro_ir::{LanguageSpec, Payload, RepresentationError};

use crate::origin::{self, SELF_SOURCE};
use crate::substitution::SubstitutionPass;
use crate::{Chain, ComposeConfig, ComposeError};

/// One stage of a composed relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    pub spec: LanguageSpec,
    /// Source text of this stage; the previous stage prints it.
    pub source: Payload,
}

/// A composed relay: every stage's predicted source, origin first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relay {
    stages: Vec<Stage>,
}

impl Relay {
    /// A relay from stages that are already known, origin first. `None`
    /// when `stages` is empty: a relay always has an origin.
    pub fn from_stages(stages: Vec<Stage>) -> Option<Self> {
        (!stages.is_empty()).then_some(Relay { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The origin program: the file a user runs first.
    pub fn origin(&self) -> &Payload {
        &self.stages[0].source
    }

    /// What stage `index` must print: the next stage's source, wrapping
    /// around to the origin.
    pub fn expected_output(&self, index: usize) -> &Payload {
        &self.stages[(index + 1) % self.stages.len()].source
    }

    /// Combined size of all stage sources in bytes.
    pub fn total_len(&self) -> usize {
        self.stages.iter().map(|stage| stage.source.len()).sum()
    }
}

/// Folds a chain into a self-reproducing origin program.
#[derive(Clone, Debug, Default)]
pub struct ChainComposer {
    config: ComposeConfig,
    pass: SubstitutionPass,
}

impl ChainComposer {
    pub fn new(config: ComposeConfig) -> Self {
        ChainComposer {
            config,
            pass: SubstitutionPass,
        }
    }

    /// Compose `chain` into a relay whose origin regenerates itself after
    /// one trip around the chain.
    #[tracing::instrument(level = "debug", skip_all, fields(stages = chain.len()))]
    pub fn compose(&self, chain: &Chain<'_>) -> Result<Relay, ComposeError> {
        let kernel = Self::kernel(chain);
        let origin = origin::embed(&kernel, &self.pass, self.config.line_width)
            .map_err(ComposeError::at_stage(0))?;
        let origin = self
            .check_size(ORIGIN.name, origin)
            .map_err(ComposeError::at_stage(0))?;
        tracing::debug!(
            kernel_len = kernel.len(),
            origin_len = origin.len(),
            "built origin"
        );

        let relay = self.unroll(origin, chain)?;
        tracing::debug!(total_len = relay.total_len(), "unrolled relay");
        Ok(relay)
    }

    /// Wrap `seed` in every backend's runtime call, last backend innermost.
    pub fn fold(seed: &str, chain: &Chain<'_>) -> String {
        chain
            .relay()
            .iter()
            .rev()
            .fold(seed.to_owned(), |inner, backend| {
                backend.runtime_call().wrap(&inner)
            })
    }

    /// The Ruby program the origin evaluates: helpers, the kernels the
    /// chain uses, then one expression printing stage 1.
    pub fn kernel(chain: &Chain<'_>) -> String {
        let mut kernel = String::from(PRELUDE);
        for used in chain.kernels() {
            kernel.push_str(used.definition());
        }
        kernel.push_str("$><<");
        kernel.push_str(&Self::fold(SELF_SOURCE, chain));
        kernel.push('\n');
        kernel
    }

    /// Predict every stage by running the backends from last to first over
    /// the origin.
    pub fn unroll(&self, origin: Payload, chain: &Chain<'_>) -> Result<Relay, ComposeError> {
        let mut stages = Vec::with_capacity(chain.len());
        let mut next = origin.clone();
        for (index, backend) in chain.relay().iter().enumerate().rev() {
            let stage = index + 1;
            let source = backend
                .generate(&next)
                .and_then(|source| self.check_size(backend.name(), source))
                .map_err(ComposeError::at_stage(stage))?;
            tracing::trace!(stage, language = backend.name(), len = source.len(), "stage");
            stages.push(Stage {
                spec: *backend.spec(),
                source: source.clone(),
            });
            next = source;
        }
        stages.push(Stage {
            spec: ORIGIN,
            source: origin,
        });
        stages.reverse();
        Ok(Relay { stages })
    }

    fn check_size(
        &self,
        language: &'static str,
        source: Payload,
    ) -> Result<Payload, RepresentationError> {
        if source.len() > self.config.max_source_len {
            return Err(RepresentationError::TooLarge {
                language,
                len: source.len(),
                limit: self.config.max_source_len,
            });
        }
        Ok(source)
    }
}

#[cfg(test)]
mod tests;
