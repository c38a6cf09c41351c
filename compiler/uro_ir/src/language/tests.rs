use super::*;
use pretty_assertions::assert_eq;

const C: LanguageSpec = LanguageSpec {
    name: "C",
    source_file: "QR.c",
    steps: &[Step::compile("gcc -o QR {src}", "gcc"), Step::run("./QR", None)],
};

const PERL: LanguageSpec = LanguageSpec {
    name: "Perl",
    source_file: "QR.pl",
    steps: &[Step::run("perl {src}", Some("perl"))],
};

#[test]
fn render_substitutes_source_file() {
    assert_eq!(C.steps[0].render(C.source_file), "gcc -o QR QR.c");
    assert_eq!(C.steps[1].render(C.source_file), "./QR");
    assert_eq!(PERL.steps[0].render("x.pl"), "perl x.pl");
}

#[test]
fn step_constructors_set_kind() {
    assert_eq!(C.steps[0].kind, StepKind::Compile);
    assert_eq!(C.steps[0].package, Some("gcc"));
    assert_eq!(PERL.steps[0].kind, StepKind::Run);
}

#[test]
fn packages_skip_steps_without_one() {
    assert_eq!(C.packages().collect::<Vec<_>>(), vec!["gcc"]);
    assert_eq!(PERL.packages().collect::<Vec<_>>(), vec!["perl"]);
}
