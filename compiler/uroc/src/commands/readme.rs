//! The `readme` command: render the README for the selected relay.

use std::path::PathBuf;

use uro_report::{render_readme, DpkgProbe, NoProbe, VersionProbe};

use super::{resolve_chain, write_file};

/// Options for `uroc readme`.
#[derive(Clone, Debug, Default)]
pub struct ReadmeOptions {
    /// Output path; stdout when unset.
    pub output: Option<PathBuf>,
    pub langs: Option<String>,
    /// Leave the version column empty instead of asking `dpkg-query`.
    pub no_probe: bool,
}

/// Render and write the README.
pub fn write_readme(options: &ReadmeOptions) {
    let chain = match resolve_chain(options.langs.as_deref()) {
        Ok(chain) => chain,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let probe: Box<dyn VersionProbe> = if options.no_probe {
        Box::new(NoProbe)
    } else {
        Box::new(DpkgProbe::new())
    };
    let readme = render_readme(&chain.specs(), probe.as_ref());

    match &options.output {
        Some(path) => {
            write_file(path, readme.as_bytes());
            eprintln!("wrote {}", path.display());
        }
        None => print!("{readme}"),
    }
}
