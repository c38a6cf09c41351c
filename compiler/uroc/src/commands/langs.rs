//! The `langs` command: list the built-in languages.

use uro_backends::{standard, LanguageBackend, ORIGIN};

/// Print the origin and every built-in language in standard relay order,
/// with the file each stage is saved under and its install package.
pub fn list_languages() {
    println!("Languages (standard relay order):");
    println!();
    println!("   0  {:<12} {:<9} {}", ORIGIN.name, ORIGIN.source_file, packages(&ORIGIN));
    for (index, language) in standard().iter().enumerate() {
        let spec = language.spec();
        println!(
            "  {:>2}  {:<12} {:<9} {}",
            index + 1,
            spec.name,
            spec.source_file,
            packages(spec)
        );
    }
    println!();
    println!("Select a chain with --langs=<name>,<name>,.. (names or file extensions).");
}

fn packages(spec: &uro_ir::LanguageSpec) -> String {
    spec.packages().collect::<Vec<_>>().join(" ")
}
