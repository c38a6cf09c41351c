//! Which languages a relay visits, in order.

use std::fmt;

use uro_backends::{Kernel, LanguageBackend};
use uro_ir::LanguageSpec;

use crate::ComposeError;

/// The origin plus the ordered relay backends. Logically circular: the
/// last backend prints the origin.
#[derive(Clone)]
pub struct Chain<'a> {
    relay: Vec<&'a dyn LanguageBackend>,
}

impl<'a> Chain<'a> {
    /// A chain through `relay`, which must not be empty.
    pub fn new(relay: Vec<&'a dyn LanguageBackend>) -> Result<Self, ComposeError> {
        if relay.is_empty() {
            return Err(ComposeError::EmptyChain);
        }
        Ok(Chain { relay })
    }

    pub fn relay(&self) -> &[&'a dyn LanguageBackend] {
        &self.relay
    }

    /// Number of stages, counting the origin.
    pub fn len(&self) -> usize {
        self.relay.len() + 1
    }

    /// Always false: a chain has at least the origin and one backend.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every stage's spec, origin first.
    pub fn specs(&self) -> Vec<LanguageSpec> {
        std::iter::once(uro_backends::ORIGIN)
            .chain(self.relay.iter().map(|backend| *backend.spec()))
            .collect()
    }

    /// Ruby kernels the relay's runtime calls need, deduplicated in a fixed
    /// order.
    pub fn kernels(&self) -> Vec<Kernel> {
        let mut kernels: Vec<Kernel> = self
            .relay
            .iter()
            .filter_map(|backend| backend.runtime_call().kernel)
            .collect();
        kernels.sort_unstable();
        kernels.dedup();
        kernels
    }
}

impl Chain<'static> {
    /// The built-in ring of languages.
    pub fn standard() -> Self {
        Chain {
            relay: uro_backends::standard()
                .iter()
                .map(|&language| language as &dyn LanguageBackend)
                .collect(),
        }
    }

    /// A chain through the named built-in languages, in the given order.
    pub fn from_names<I, S>(names: I) -> Result<Self, ComposeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let relay = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                uro_backends::find(name)
                    .map(|language| language as &dyn LanguageBackend)
                    .ok_or_else(|| ComposeError::UnknownLanguage(name.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Chain::new(relay)
    }
}

impl fmt::Debug for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entry(&uro_backends::ORIGIN.name)
            .entries(self.relay.iter().map(|backend| backend.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests;
