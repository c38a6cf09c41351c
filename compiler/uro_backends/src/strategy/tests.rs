use super::*;
use pretty_assertions::assert_eq;

const QUOTE: EscapeLiteral = EscapeLiteral {
    prefix: "say(\"",
    suffix: "\")\n",
    escapes: &[('"', "\\\""), ('\\', "\\\\")],
    terminator: Terminator::Exact,
};

const PIECES: PieceArray = PieceArray {
    prefix: "<",
    suffix: ">",
    item_prefix: "[",
    item_suffix: "]",
    separator: ";",
    escapes: &[(']', "\\]"), ('\\', "\\\\")],
    split: Split::Width(3),
};

// Escape literal

#[test]
fn literal_escapes_table_characters() {
    assert_eq!(
        QUOTE.render("T", "a\"b\\c").unwrap(),
        "say(\"a\\\"b\\\\c\")\n"
    );
}

#[test]
fn literal_of_empty_payload_is_prefix_and_suffix() {
    assert_eq!(QUOTE.render("T", "").unwrap(), "say(\"\")\n");
}

#[test]
fn literal_keeps_raw_newlines_not_in_table() {
    assert_eq!(QUOTE.render("T", "a\nb\n").unwrap(), "say(\"a\nb\n\")\n");
}

#[test]
fn literal_rejects_control_bytes_with_offset() {
    let err = QUOTE.render("T", "ok\tno").unwrap_err();
    assert_eq!(
        err,
        RepresentationError::Unrepresentable {
            language: "T",
            offset: 2,
            byte: b'\t',
        }
    );
}

#[test]
fn literal_rejects_non_ascii() {
    let err = QUOTE.render("T", "caf\u{e9}").unwrap_err();
    assert_eq!(err.offset(), Some(3));
}

#[test]
fn newline_terminator_drops_final_newline() {
    let println = EscapeLiteral {
        terminator: Terminator::Newline,
        ..QUOTE
    };
    assert_eq!(println.render("T", "hi\n").unwrap(), "say(\"hi\")\n");
    assert_eq!(println.render("T", "\n\n").unwrap(), "say(\"\n\")\n");
    assert_eq!(
        println.render("T", "hi").unwrap_err(),
        RepresentationError::MissingTerminator { language: "T" }
    );
}

// Piece array

#[test]
fn pieces_split_by_width() {
    assert_eq!(
        PIECES.render("T", "abcdefg").unwrap(),
        "<[abc];[def];[g]>"
    );
}

#[test]
fn pieces_escape_inside_items() {
    assert_eq!(PIECES.render("T", "a]").unwrap(), "<[a\\]]>");
}

#[test]
fn pieces_of_empty_payload_have_no_items() {
    assert_eq!(PIECES.render("T", "").unwrap(), "<>");
}

#[test]
fn pieces_split_by_line_keep_newlines() {
    let lines = PieceArray {
        split: Split::Lines,
        escapes: &[('\n', "\\n")],
        ..PIECES
    };
    assert_eq!(lines.render("T", "a\nb\nc").unwrap(), "<[a\\n];[b\\n];[c]>");
    assert_eq!(lines.render("T", "a\n").unwrap(), "<[a\\n]>");
}

#[test]
fn zero_width_splits_by_line() {
    let zero = PieceArray {
        split: Split::Width(0),
        ..PIECES
    };
    assert_eq!(zero.render("T", "ab\ncd").unwrap(), "<[ab\n];[cd]>");
    assert_eq!(Split::Lines.ruby_width(), 0);
}

// Tape

#[test]
fn tape_walks_by_delta() {
    let tape = Tape {
        prefix: "",
        suffix: "\n",
    };
    assert_eq!(tape.render(b"AC@"), format!("{}.++.---.\n", "+".repeat(65)));
    assert_eq!(tape.render(b"aa"), format!("{}..\n", "+".repeat(97)));
    assert_eq!(tape.render(b""), "\n");
    assert_eq!(tape.render(&[0xff, 0x00]), format!("{}.{}.\n", "+".repeat(255), "-".repeat(255)));
}

// Verbatim

#[test]
fn verbatim_copies_payload() {
    let php = Verbatim {
        forbidden: &["<?"],
        forbidden_prefixes: &["#!"],
    };
    assert_eq!(php.render("PHP", "plain ? text #!\n").unwrap(), "plain ? text #!\n");
}

#[test]
fn verbatim_rejects_earliest_forbidden_sequence() {
    let strict = Verbatim {
        forbidden: &["<?", "??"],
        forbidden_prefixes: &["#!"],
    };
    assert_eq!(
        strict.render("PHP", "x ?? y <?").unwrap_err(),
        RepresentationError::ForbiddenSequence {
            language: "PHP",
            offset: 2,
            sequence: "??",
        }
    );
    assert_eq!(
        strict.render("PHP", "#!/bin/sh").unwrap_err(),
        RepresentationError::ForbiddenSequence {
            language: "PHP",
            offset: 0,
            sequence: "#!",
        }
    );
}

// Dispatch

#[test]
fn strategy_dispatches_to_variant() {
    let tape = Strategy::Tape(Tape {
        prefix: ">",
        suffix: "",
    });
    assert_eq!(tape.render("BF", "\u{1}").unwrap(), ">+.");
    assert_eq!(tape.kernel(), Some(Kernel::Tape));

    let literal = Strategy::Escape(QUOTE);
    assert_eq!(literal.render("T", "x").unwrap(), "say(\"x\")\n");
    assert_eq!(literal.runtime_call().kernel, Some(Kernel::Escape));
}

#[test]
fn text_strategies_reject_invalid_utf8() {
    let bytes: &[u8] = b"ok\xc3(";
    for strategy in [
        Strategy::Escape(QUOTE),
        Strategy::Pieces(PIECES),
        Strategy::Verbatim(Verbatim {
            forbidden: &[],
            forbidden_prefixes: &[],
        }),
    ] {
        assert_eq!(
            strategy.render("T", bytes).unwrap_err(),
            RepresentationError::Unrepresentable {
                language: "T",
                offset: 2,
                byte: 0xc3,
            }
        );
    }
}

#[test]
fn tape_accepts_invalid_utf8() {
    let tape = Strategy::Tape(Tape {
        prefix: "",
        suffix: "",
    });
    let bytes: &[u8] = &[0x80, 0x7f];
    assert_eq!(
        tape.render("BF", bytes).unwrap(),
        format!("{}.-.", "+".repeat(128))
    );
}
