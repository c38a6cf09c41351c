use super::*;
use pretty_assertions::assert_eq;
use uro_ir::Step;

use crate::NoProbe;

const fn run(name: &'static str, source_file: &'static str, steps: &'static [Step]) -> LanguageSpec {
    LanguageSpec {
        name,
        source_file,
        steps,
    }
}

const SHORT: [LanguageSpec; 2] = [
    run("Ruby", "QR.rb", &[Step::run("ruby {src}", Some("ruby"))]),
    run("Perl", "QR.pl", &[Step::run("perl {src}", Some("perl"))]),
];

const LONG: [LanguageSpec; 6] = [
    run("Ruby", "QR.rb", &[Step::run("ruby {src}", Some("ruby"))]),
    run("A", "QR.a", &[Step::run("a {src}", Some("a"))]),
    run("B", "QR.b", &[Step::run("b {src}", Some("b"))]),
    run("C", "QR.c", &[Step::run("c {src}", Some("c"))]),
    run("D", "QR.d", &[Step::run("d {src}", Some("d"))]),
    run("E", "QR.e", &[Step::run("e {src}", Some("e"))]),
];

#[test]
fn short_ring_names_every_language() {
    let readme = render_readme(&SHORT, &NoProbe);
    assert!(readme.starts_with(
        "# Uroboros\n\n### What this is\n\n\
         This is a Ruby program that generates\n\
         Perl program that generates\n\
         the original Ruby code again.\n"
    ));
}

#[test]
fn long_ring_is_abbreviated() {
    let readme = render_readme(&LONG, &NoProbe);
    assert!(readme.contains("A program that generates\nB program that generates\n"));
    assert!(readme.contains("...(through 6 languages in total)...\nE program that generates\n"));
    assert!(!readme.contains("C program that generates"));
}

#[test]
fn usage_lists_install_and_commands() {
    let readme = render_readme(&SHORT, &NoProbe);
    assert!(readme.contains("    $ sudo apt-get install perl ruby\n"));
    assert!(readme.contains("    $ ruby QR.rb > QR.pl\n    $ perl QR.pl > QR2.rb\n"));
    assert!(readme.contains("    $ diff QR.rb QR2.rb\n"));
    assert!(readme.contains("    $ uroc generate -o QR.rb\n"));
}

#[test]
fn versions_table_is_indented() {
    let probe = |package: &str| Some(format!("{package}-1.0"));
    let readme = render_readme(&SHORT, &probe);
    let table: Vec<&str> = readme
        .lines()
        .skip_while(|line| !line.contains("language |"))
        .take(4)
        .collect();
    assert_eq!(
        table,
        vec![
            "    language |ubuntu package |version",
            "    ---------|---------------|---------",
            "    Ruby     |ruby           |ruby-1.0",
            "    Perl     |perl           |perl-1.0",
        ]
    );
}
