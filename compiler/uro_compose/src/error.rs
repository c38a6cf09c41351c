use thiserror::Error;
use uro_ir::RepresentationError;

/// Why a relay could not be composed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error("a relay needs at least one language besides the origin")]
    EmptyChain,

    #[error("unknown language `{0}`")]
    UnknownLanguage(String),

    /// Stage `stage` could not be generated. No partial relay is produced.
    #[error("cannot generate stage {stage}: {source}")]
    Representation {
        stage: usize,
        #[source]
        source: RepresentationError,
    },
}

impl ComposeError {
    pub(crate) fn at_stage(stage: usize) -> impl FnOnce(RepresentationError) -> Self {
        move |source| ComposeError::Representation { stage, source }
    }
}
