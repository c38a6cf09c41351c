//! The README document.

use std::fmt::Write;

use uro_ir::LanguageSpec;

use crate::{
    command_listing, install_command, package_rows, render_table, VersionProbe, FINAL_OUTPUT,
};

/// Render the README for a relay: the language ring, how to install and
/// run every stage, and the table of tested package versions.
pub fn render_readme(specs: &[LanguageSpec], probe: &dyn VersionProbe) -> String {
    let mut out = String::new();
    let _ = write_readme(&mut out, specs, probe);
    out
}

fn write_readme(
    out: &mut String,
    specs: &[LanguageSpec],
    probe: &dyn VersionProbe,
) -> std::fmt::Result {
    let names: Vec<&str> = specs.iter().map(|spec| spec.name).collect();
    let origin_file = specs.first().map_or("QR.rb", |spec| spec.source_file);

    writeln!(out, "# Uroboros\n")?;
    writeln!(out, "### What this is\n")?;
    write_ring(out, &names)?;

    writeln!(out, "### Usage\n")?;
    writeln!(out, "#### 1. Install all interpreters/compilers.\n")?;
    writeln!(
        out,
        "On Ubuntu, the following apt-get command installs all of them.\n"
    )?;
    writeln!(out, "    $ {}\n", install_command(specs))?;

    writeln!(out, "#### 2. Run each program on each interpreter/compiler.\n")?;
    for command in command_listing(specs) {
        writeln!(out, "    $ {command}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "You will see that `{origin_file}` is the same as `{FINAL_OUTPUT}`.\n"
    )?;
    writeln!(out, "    $ diff {origin_file} {FINAL_OUTPUT}\n")?;
    writeln!(
        out,
        "Alternatively, `uroc verify` runs every stage and reports the first\n\
         byte where a stage's output differs from the next source.\n"
    )?;

    writeln!(out, "### Tested interpreter/compiler versions\n")?;
    writeln!(out, "The relay was tested with the following deb packages:\n")?;
    for line in render_table(&package_rows(specs, probe)).lines() {
        writeln!(out, "    {line}")?;
    }
    writeln!(out)?;

    writeln!(out, "### How to re-generate the source\n")?;
    writeln!(out, "    $ uroc generate -o {origin_file}")?;
    writeln!(out, "    $ uroc readme -o README.md")?;
    Ok(())
}

fn write_ring(out: &mut String, names: &[&str]) -> std::fmt::Result {
    let Some((first, rest)) = names.split_first() else {
        return Ok(());
    };
    writeln!(out, "This is a {first} program that generates")?;
    if rest.len() > 3 {
        writeln!(out, "{} program that generates", rest[0])?;
        writeln!(out, "{} program that generates", rest[1])?;
        writeln!(out, "...(through {} languages in total)...", names.len())?;
        writeln!(out, "{} program that generates", rest[rest.len() - 1])?;
    } else {
        for name in rest {
            writeln!(out, "{name} program that generates")?;
        }
    }
    writeln!(out, "the original {first} code again.\n")
}

#[cfg(test)]
mod tests;
