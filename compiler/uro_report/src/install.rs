//! The one-line `apt-get` command for every toolchain.

use rustc_hash::FxHashSet;
use uro_ir::LanguageSpec;

/// Longest line before the command wraps.
pub const INSTALL_WIDTH: usize = 70;

const PREFIX: &str = "sudo apt-get install";
const CONTINUATION: &str = " \\\n      ";

/// `sudo apt-get install` with every package once, sorted, wrapped under
/// [`INSTALL_WIDTH`] columns with shell continuations.
pub fn install_command(specs: &[LanguageSpec]) -> String {
    let mut seen = FxHashSet::default();
    let mut packages: Vec<&str> = specs
        .iter()
        .flat_map(LanguageSpec::packages)
        .filter(|package| seen.insert(*package))
        .collect();
    packages.sort_unstable();

    let mut out = String::new();
    let mut line = String::from(PREFIX);
    for package in packages {
        if line.len() + 1 + package.len() > INSTALL_WIDTH {
            out.push_str(&line);
            out.push_str(CONTINUATION);
            line = package.to_owned();
        } else {
            line.push(' ');
            line.push_str(package);
        }
    }
    out.push_str(&line);
    out
}
