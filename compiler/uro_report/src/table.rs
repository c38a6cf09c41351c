//! The tested-versions table.

use rayon::prelude::*;
use uro_ir::LanguageSpec;

use crate::VersionProbe;

/// One toolchain step of the relay and the package that provides it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageRow {
    pub language: &'static str,
    /// `None` for steps that run a binary built by an earlier step.
    pub package: Option<&'static str>,
    pub version: Option<String>,
}

/// One row per step, in relay order. Versions are probed in parallel.
pub fn package_rows(specs: &[LanguageSpec], probe: &dyn VersionProbe) -> Vec<PackageRow> {
    let steps: Vec<(&'static str, Option<&'static str>)> = specs
        .iter()
        .flat_map(|spec| spec.steps.iter().map(move |step| (spec.name, step.package)))
        .collect();
    steps
        .into_par_iter()
        .map(|(language, package)| PackageRow {
            language,
            package,
            version: package.and_then(|package| probe.version(package)),
        })
        .collect()
}

/// Render rows as a `|`-separated table with a dashed rule under the
/// header. Each column is one wider than its widest cell; trailing spaces
/// are trimmed.
pub fn render_table(rows: &[PackageRow]) -> String {
    let header = ["language", "ubuntu package", "version"];
    let mut cells: Vec<[&str; 3]> = vec![header];
    cells.extend(rows.iter().map(|row| {
        [
            row.language,
            row.package.unwrap_or("(none)"),
            row.version.as_deref().unwrap_or("-"),
        ]
    }));

    let mut widths = [0usize; 3];
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count() + 1);
        }
    }

    let mut lines: Vec<String> = cells.iter().map(|row| join_padded(row, &widths)).collect();
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    lines.insert(1, join_padded(&rule, &widths));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn join_padded(row: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = row
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("|").trim_end().to_owned()
}
