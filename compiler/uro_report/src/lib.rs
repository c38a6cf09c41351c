//! Reports derived from a relay's languages: the tested-versions table, the
//! `apt-get` line, the command listing and the README.
//!
//! Nothing here generates code. Every function takes the stage specs in
//! relay order, origin first.

mod commands;
mod install;
mod probe;
mod readme;
mod table;

pub use commands::{command_listing, FINAL_OUTPUT};
pub use install::{install_command, INSTALL_WIDTH};
pub use probe::{DpkgProbe, NoProbe, VersionProbe};
pub use readme::render_readme;
pub use table::{package_rows, render_table, PackageRow};
