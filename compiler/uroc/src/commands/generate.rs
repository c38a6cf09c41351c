//! The `generate` command: compose the relay and write the origin program.

use std::io::Write;
use std::path::PathBuf;

use uro_compose::{ComposeConfig, Relay};

use super::{compose_or_exit, write_file};

/// Options for `uroc generate`.
#[derive(Clone, Debug, Default)]
pub struct GenerateOptions {
    /// Origin output path; stdout when unset and `all_dir` is unset.
    pub output: Option<PathBuf>,
    /// Write every stage, each under its language's file name, here.
    pub all_dir: Option<PathBuf>,
    /// Comma-separated language names; the standard chain when unset.
    pub langs: Option<String>,
    pub config: ComposeConfig,
}

/// Compose the selected relay and write it out.
pub fn generate_relay(options: &GenerateOptions) {
    let (chain, relay) = compose_or_exit(options.langs.as_deref(), options.config);
    tracing::info!(?chain, total_len = relay.total_len(), "composed relay");

    if let Some(dir) = &options.all_dir {
        for stage in relay.stages() {
            write_file(&dir.join(stage.spec.source_file), stage.source.as_bytes());
        }
        eprintln!(
            "wrote {} stages ({} bytes) to {}",
            relay.len(),
            relay.total_len(),
            dir.display()
        );
    }

    match &options.output {
        Some(path) => {
            write_file(path, relay.origin().as_bytes());
            eprintln!("wrote {} ({} bytes)", path.display(), relay.origin().len());
        }
        None if options.all_dir.is_none() => print_origin(&relay),
        None => {}
    }
}

fn print_origin(relay: &Relay) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout
        .write_all(relay.origin().as_bytes())
        .and_then(|()| stdout.flush())
    {
        eprintln!("error: cannot write to stdout: {e}");
        std::process::exit(1);
    }
}
