use super::*;
use pretty_assertions::assert_eq;

#[test]
fn standard_chain_counts_origin() {
    let chain = Chain::standard();
    assert_eq!(chain.len(), uro_backends::standard().len() + 1);
    let specs = chain.specs();
    assert_eq!(specs.len(), chain.len());
    assert_eq!(specs[0].name, "Ruby");
    assert_eq!(specs[1].name, "Rust");
}

#[test]
fn from_names_keeps_order() {
    let chain = Chain::from_names(["python", "c"]).unwrap();
    let names: Vec<_> = chain.relay().iter().map(|b| b.name()).collect();
    assert_eq!(names, vec!["Python", "C"]);
    assert_eq!(format!("{chain:?}"), "[\"Ruby\", \"Python\", \"C\"]");
}

#[test]
fn from_names_rejects_unknown_and_empty() {
    assert_eq!(
        Chain::from_names(["c", "cobol"]).unwrap_err(),
        ComposeError::UnknownLanguage("cobol".to_owned())
    );
    assert_eq!(
        Chain::from_names(Vec::<String>::new()).unwrap_err(),
        ComposeError::EmptyChain
    );
}

#[test]
fn kernels_are_deduplicated() {
    let chain = Chain::from_names(["bf", "java", "c", "php", "python"]).unwrap();
    assert_eq!(
        chain.kernels(),
        vec![Kernel::Escape, Kernel::Pieces, Kernel::Tape]
    );

    let verbatim_only = Chain::from_names(["php"]).unwrap();
    assert!(verbatim_only.kernels().is_empty());
}

#[test]
fn specs_start_with_origin() {
    let chain = Chain::from_names(["go"]).unwrap();
    let names: Vec<_> = chain.specs().iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Ruby", "Go"]);
}
