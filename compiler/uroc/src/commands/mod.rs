//! Command handlers for the `uroc` CLI.
//!
//! Each submodule implements one command. Chain selection and composition
//! are shared and live here; they print the error and exit on failure.

mod generate;
mod langs;
mod readme;
mod verify;

pub use generate::{generate_relay, GenerateOptions};
pub use langs::list_languages;
pub use readme::{write_readme, ReadmeOptions};
pub use verify::verify_relay;

use std::path::Path;

use uro_compose::{Chain, ChainComposer, ComposeConfig, ComposeError, Relay};

/// The chain named by a comma-separated `--langs=` value, or the standard
/// chain.
pub fn resolve_chain(langs: Option<&str>) -> Result<Chain<'static>, ComposeError> {
    match langs {
        None => Ok(Chain::standard()),
        Some(list) => Chain::from_names(list.split(',').filter(|name| !name.trim().is_empty())),
    }
}

/// Compose the selected chain, exiting with status 1 on failure.
pub(crate) fn compose_or_exit(
    langs: Option<&str>,
    config: ComposeConfig,
) -> (Chain<'static>, Relay) {
    let result = resolve_chain(langs).and_then(|chain| {
        let relay = ChainComposer::new(config).compose(&chain)?;
        Ok((chain, relay))
    });
    match result {
        Ok(composed) => composed,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, ComposeError::UnknownLanguage(_)) {
                eprintln!("Run `uroc langs` to list the available languages.");
            }
            std::process::exit(1);
        }
    }
}

/// Write `contents` to `path`, exiting with status 1 on failure.
pub(crate) fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("error: cannot create '{}': {e}", parent.display());
            std::process::exit(1);
        }
    }
    if let Err(e) = std::fs::write(path, contents) {
        eprintln!("error: cannot write '{}': {e}", path.display());
        std::process::exit(1);
    }
}
