use super::*;
use pretty_assertions::assert_eq;
use uro_backends::testing::simulate;
use uro_backends::{
    EscapeLiteral, Language, LanguageBackend, PieceArray, Split, Strategy, Terminator, Verbatim,
};
use uro_ir::Step;

use crate::origin::self_text;
use crate::SubstitutionPass;

const LITERAL: Language = Language {
    spec: LanguageSpec {
        name: "Literal",
        source_file: "QR.lit",
        steps: &[Step::run("lit {src}", None)],
    },
    strategy: Strategy::Escape(EscapeLiteral {
        prefix: "say \"",
        suffix: "\"\n",
        escapes: &[('"', "\\\""), ('\\', "\\\\")],
        terminator: Terminator::Exact,
    }),
};

const WORDS: Language = Language {
    spec: LanguageSpec {
        name: "Words",
        source_file: "QR.words",
        steps: &[Step::run("words {src}", None)],
    },
    strategy: Strategy::Pieces(PieceArray {
        prefix: "",
        suffix: "",
        item_prefix: "echo -n '",
        item_suffix: "'\n",
        separator: "",
        escapes: &[('\'', "'\\''")],
        split: Split::Lines,
    }),
};

const NO_EVAL: Language = Language {
    spec: LanguageSpec {
        name: "NoEval",
        source_file: "QR.noeval",
        steps: &[Step::run("noeval {src}", None)],
    },
    strategy: Strategy::Verbatim(Verbatim {
        forbidden: &["eval"],
        forbidden_prefixes: &[],
    }),
};

fn toy_chain() -> Chain<'static> {
    Chain::new(vec![&LITERAL as &dyn LanguageBackend, &WORDS]).unwrap()
}

/// The kernel an origin program restores from its word array.
fn restored_kernel(origin: &str) -> String {
    let body = self_text(origin).unwrap();
    let words = body
        .split_once("%w(")
        .and_then(|(_, rest)| rest.split_once(")*\"\""))
        .map(|(words, _)| words)
        .unwrap();
    let joined: String = words.split_whitespace().collect();
    String::from_utf8(SubstitutionPass.restore(joined.as_bytes()).unwrap()).unwrap()
}

#[test]
fn toy_chain_closes() {
    let chain = toy_chain();
    let relay = ChainComposer::default().compose(&chain).unwrap();
    assert_eq!(relay.len(), 3);

    let names: Vec<_> = relay.stages().iter().map(|s| s.spec.name).collect();
    assert_eq!(names, vec!["Ruby", "Literal", "Words"]);

    // A prints B, B prints the origin.
    for (index, language) in [LITERAL, WORDS].iter().enumerate() {
        let stage = &relay.stages()[index + 1];
        assert_eq!(
            simulate(&language.strategy, stage.source.as_str().unwrap()).as_deref(),
            Some(relay.expected_output(index + 1).as_bytes()),
            "{}",
            language.name()
        );
    }
    assert_eq!(relay.expected_output(2), relay.origin());
}

#[test]
fn origin_restores_kernel_containing_seed() {
    let chain = toy_chain();
    let relay = ChainComposer::default().compose(&chain).unwrap();
    let kernel = restored_kernel(relay.origin().as_str().unwrap());
    assert_eq!(kernel, ChainComposer::kernel(&chain));
    assert!(kernel.contains(SELF_SOURCE));
    assert!(kernel.starts_with(PRELUDE));
}

#[test]
fn fold_nests_first_backend_outermost() {
    let chain = toy_chain();
    let folded = ChainComposer::fold("S", &chain);
    let expected = LITERAL
        .runtime_call()
        .wrap(&WORDS.runtime_call().wrap("S"));
    assert_eq!(folded, expected);
    assert!(folded.starts_with("xe[xp[S,"));
}

#[test]
fn kernel_defines_only_used_lambdas() {
    let kernel = ChainComposer::kernel(&toy_chain());
    assert!(kernel.contains("xe=->"));
    assert!(kernel.contains("xp=->"));
    assert!(!kernel.contains("xb=->"));
    assert!(kernel.ends_with("]\n"));
}

#[test]
fn compose_is_deterministic() {
    let chain = toy_chain();
    let composer = ChainComposer::default();
    assert_eq!(composer.compose(&chain).unwrap(), composer.compose(&chain).unwrap());
}

#[test]
fn representation_failure_aborts_composition() {
    let chain = Chain::new(vec![&LITERAL as &dyn LanguageBackend, &NO_EVAL]).unwrap();
    let err = ChainComposer::default().compose(&chain).unwrap_err();
    assert_eq!(
        err,
        ComposeError::Representation {
            stage: 2,
            source: RepresentationError::ForbiddenSequence {
                language: "NoEval",
                offset: 0,
                sequence: "eval",
            },
        }
    );
}

#[test]
fn oversized_stage_is_rejected() {
    let composer = ChainComposer::new(ComposeConfig {
        max_source_len: 64,
        ..ComposeConfig::default()
    });
    let err = composer.compose(&toy_chain()).unwrap_err();
    match err {
        ComposeError::Representation { stage, source } => {
            assert_eq!(stage, 0);
            assert!(matches!(
                source,
                RepresentationError::TooLarge { language: "Ruby", limit: 64, .. }
            ));
        }
        other => panic!("expected a representation error, got {other:?}"),
    }
}

#[test]
fn line_width_shapes_origin() {
    let narrow = ChainComposer::new(ComposeConfig {
        line_width: 20,
        ..ComposeConfig::default()
    });
    let relay = narrow.compose(&toy_chain()).unwrap();
    let body = self_text(relay.origin().as_str().unwrap()).unwrap();
    let words = body.split_once("%w(\n").unwrap().1;
    let words = words.split_once("\n)*").unwrap().0;
    assert!(words.lines().all(|line| line.chars().count() <= 20));
    assert!(words.lines().rev().skip(1).all(|line| line.chars().count() == 20));
}

#[test]
fn relay_from_stages_needs_an_origin() {
    assert!(Relay::from_stages(Vec::new()).is_none());

    let origin = Stage {
        spec: ORIGIN,
        source: Payload::from("puts 1\n"),
    };
    let relay = Relay::from_stages(vec![origin.clone()]).unwrap();
    assert_eq!(relay.len(), 1);
    assert_eq!(relay.origin(), &origin.source);
    assert_eq!(relay.expected_output(0), &origin.source);
}
