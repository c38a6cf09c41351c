//! The built-in languages.
//!
//! Ordering of [`standard`] matters: each language's source is printed by
//! the language before it, so every literal syntax wraps all the ones that
//! follow. Brainfuck sits last because its delta encoding blows up any
//! text quickly; everything before it escapes backslashes numerically so
//! nested escapes grow linearly.

use uro_ir::{LanguageSpec, Step};

use crate::strategy::{EscapeLiteral, PieceArray, Split, Strategy, Tape, Terminator, Verbatim};
use crate::Language;

/// The language the relay starts and ends in. It has no backend: the
/// composer builds its source as a self-reproducing program.
pub const ORIGIN: LanguageSpec = LanguageSpec {
    name: "Ruby",
    source_file: "QR.rb",
    steps: &[Step::run("ruby {src}", Some("ruby"))],
};

// Shared escape tables

const C_ESCAPES: &[(char, &str)] = &[
    ('"', "\\042"),
    ('?', "\\077"),
    ('\\', "\\134"),
    ('\n', "\\n"),
];

const HEX_ESCAPES: &[(char, &str)] = &[('"', "\\x22"), ('\\', "\\x5c"), ('\n', "\\n")];

const LISP_ESCAPES: &[(char, &str)] = &[('"', "\\\""), ('\\', "\\\\")];

const DECIMAL_ESCAPES: &[(char, &str)] = &[('"', "\\034"), ('\\', "\\092"), ('\n', "\\n")];

const fn literal(
    prefix: &'static str,
    suffix: &'static str,
    escapes: &'static [(char, &'static str)],
) -> Strategy {
    Strategy::Escape(EscapeLiteral {
        prefix,
        suffix,
        escapes,
        terminator: Terminator::Exact,
    })
}

pub static RUST: Language = Language {
    spec: LanguageSpec {
        name: "Rust",
        source_file: "QR.rs",
        steps: &[Step::compile("rustc {src}", "rustc"), Step::run("./QR", None)],
    },
    strategy: literal(
        "fn main(){print!(\"{}\",\"",
        "\");}\n",
        &[('"', "\\x22"), ('\\', "\\x5c")],
    ),
};

pub static SCHEME: Language = Language {
    spec: LanguageSpec {
        name: "Scheme",
        source_file: "QR.scm",
        steps: &[Step::run("guile {src}", Some("guile-3.0"))],
    },
    strategy: literal("(display \"", "\")\n", LISP_ESCAPES),
};

pub static TCL: Language = Language {
    spec: LanguageSpec {
        name: "Tcl",
        source_file: "QR.tcl",
        steps: &[Step::run("tclsh {src}", Some("tcl"))],
    },
    strategy: literal(
        "puts -nonewline \"",
        "\"\n",
        &[
            ('"', "\\042"),
            ('$', "\\044"),
            ('[', "\\133"),
            ('\\', "\\134"),
        ],
    ),
};

pub static AWK: Language = Language {
    spec: LanguageSpec {
        name: "Awk",
        source_file: "QR.awk",
        steps: &[Step::run("gawk -f {src}", Some("gawk"))],
    },
    strategy: literal(
        "BEGIN{printf \"%s\",\"",
        "\"}\n",
        &[('"', "\\042"), ('\\', "\\134"), ('\n', "\\n")],
    ),
};

pub static BASH: Language = Language {
    spec: LanguageSpec {
        name: "Bash",
        source_file: "QR.bash",
        steps: &[Step::run("bash {src}", Some("bash"))],
    },
    strategy: Strategy::Pieces(PieceArray {
        prefix: "",
        suffix: "",
        item_prefix: "printf %s $'",
        item_suffix: "'\n",
        separator: "",
        escapes: &[('\'', "\\x27"), ('\\', "\\x5c"), ('\n', "\\n")],
        split: Split::Lines,
    }),
};

pub static C: Language = Language {
    spec: LanguageSpec {
        name: "C",
        source_file: "QR.c",
        steps: &[Step::compile("gcc -o QR {src}", "gcc"), Step::run("./QR", None)],
    },
    strategy: literal(
        "#include<stdio.h>\nint main(void){fputs(\"",
        "\",stdout);return 0;}\n",
        C_ESCAPES,
    ),
};

pub static CPP: Language = Language {
    spec: LanguageSpec {
        name: "C++",
        source_file: "QR.cpp",
        steps: &[Step::compile("g++ -o QR {src}", "g++"), Step::run("./QR", None)],
    },
    strategy: literal(
        "#include<cstdio>\nint main(){std::fputs(\"",
        "\",stdout);}\n",
        C_ESCAPES,
    ),
};

pub static CSHARP: Language = Language {
    spec: LanguageSpec {
        name: "C#",
        source_file: "QR.cs",
        steps: &[
            Step::compile("mcs {src}", "mono-mcs"),
            Step::run("mono QR.exe", None),
        ],
    },
    strategy: literal(
        "class QR{static void Main(){System.Console.Write(\"",
        "\");}}\n",
        &[('"', "\\u0022"), ('\\', "\\u005c"), ('\n', "\\n")],
    ),
};

pub static COMMON_LISP: Language = Language {
    spec: LanguageSpec {
        name: "Common Lisp",
        source_file: "QR.lisp",
        steps: &[Step::run("sbcl --script {src}", Some("sbcl"))],
    },
    strategy: literal("(write-string \"", "\")\n", LISP_ESCAPES),
};

pub static D: Language = Language {
    spec: LanguageSpec {
        name: "D",
        source_file: "QR.d",
        steps: &[Step::compile("gdc -o QR {src}", "gdc"), Step::run("./QR", None)],
    },
    strategy: literal(
        "import std.stdio;void main(){write(\"",
        "\");}\n",
        &[('"', "\\x22"), ('\\', "\\x5c")],
    ),
};

pub static GO: Language = Language {
    spec: LanguageSpec {
        name: "Go",
        source_file: "QR.go",
        steps: &[Step::run("go run {src}", Some("golang-go"))],
    },
    strategy: literal(
        "package main\nimport\"fmt\"\nfunc main(){fmt.Print(\"",
        "\")}\n",
        HEX_ESCAPES,
    ),
};

pub static HASKELL: Language = Language {
    spec: LanguageSpec {
        name: "Haskell",
        source_file: "QR.hs",
        steps: &[Step::run("runghc {src}", Some("ghc"))],
    },
    strategy: literal(
        "main=putStr\"",
        "\"\n",
        &[('"', "\\\""), ('\\', "\\\\"), ('\n', "\\n")],
    ),
};

pub static JAVA: Language = Language {
    spec: LanguageSpec {
        name: "Java",
        source_file: "QR.java",
        steps: &[
            Step::compile("javac {src}", "default-jdk"),
            Step::run("java QR", None),
        ],
    },
    strategy: Strategy::Pieces(PieceArray {
        prefix: "class QR{public static void main(String[]a){\n",
        suffix: "}}\n",
        item_prefix: "System.out.print(\"",
        item_suffix: "\");\n",
        separator: "",
        escapes: &[('"', "\\042"), ('\\', "\\134"), ('\n', "\\n")],
        split: Split::Width(4096),
    }),
};

pub static JAVASCRIPT: Language = Language {
    spec: LanguageSpec {
        name: "JavaScript",
        source_file: "QR.js",
        steps: &[Step::run("node {src}", Some("nodejs"))],
    },
    strategy: literal("process.stdout.write(\"", "\")\n", HEX_ESCAPES),
};

pub static LUA: Language = Language {
    spec: LanguageSpec {
        name: "Lua",
        source_file: "QR.lua",
        steps: &[Step::run("lua5.3 {src}", Some("lua5.3"))],
    },
    strategy: literal("io.write(\"", "\")\n", DECIMAL_ESCAPES),
};

pub static OCAML: Language = Language {
    spec: LanguageSpec {
        name: "OCaml",
        source_file: "QR.ml",
        steps: &[Step::run("ocaml {src}", Some("ocaml"))],
    },
    strategy: literal("let()=print_string\"", "\"\n", DECIMAL_ESCAPES),
};

pub static PASCAL: Language = Language {
    spec: LanguageSpec {
        name: "Pascal",
        source_file: "QR.pas",
        steps: &[Step::compile("fpc {src}", "fpc"), Step::run("./QR", None)],
    },
    strategy: Strategy::Pieces(PieceArray {
        prefix: "program QR;begin\n",
        suffix: "end.\n",
        item_prefix: "write('",
        item_suffix: "');\n",
        separator: "",
        escapes: &[('\'', "'#39'"), ('\n', "'#10'")],
        split: Split::Width(200),
    }),
};

pub static PERL: Language = Language {
    spec: LanguageSpec {
        name: "Perl",
        source_file: "QR.pl",
        steps: &[Step::run("perl {src}", Some("perl"))],
    },
    strategy: literal(
        "print\"",
        "\"\n",
        &[
            ('"', "\\x22"),
            ('$', "\\x24"),
            ('@', "\\x40"),
            ('\\', "\\x5c"),
        ],
    ),
};

pub static PHP: Language = Language {
    spec: LanguageSpec {
        name: "PHP",
        source_file: "QR.php",
        steps: &[Step::run("php {src}", Some("php-cli"))],
    },
    strategy: Strategy::Verbatim(Verbatim {
        forbidden: &["<?"],
        forbidden_prefixes: &["#!"],
    }),
};

pub static POSTSCRIPT: Language = Language {
    spec: LanguageSpec {
        name: "PostScript",
        source_file: "QR.ps",
        steps: &[Step::run("gs -dNODISPLAY -q {src}", Some("ghostscript"))],
    },
    strategy: Strategy::Pieces(PieceArray {
        prefix: "",
        suffix: "quit\n",
        item_prefix: "(",
        item_suffix: ")print\n",
        separator: "",
        escapes: &[
            ('(', "\\050"),
            (')', "\\051"),
            ('\\', "\\134"),
            ('\n', "\\n"),
        ],
        split: Split::Width(4096),
    }),
};

pub static PYTHON: Language = Language {
    spec: LanguageSpec {
        name: "Python",
        source_file: "QR.py",
        steps: &[Step::run("python3 {src}", Some("python3"))],
    },
    strategy: Strategy::Escape(EscapeLiteral {
        prefix: "print(\"",
        suffix: "\")\n",
        escapes: HEX_ESCAPES,
        terminator: Terminator::Newline,
    }),
};

pub static R: Language = Language {
    spec: LanguageSpec {
        name: "R",
        source_file: "QR.R",
        steps: &[Step::run("Rscript {src}", Some("r-base"))],
    },
    strategy: Strategy::Pieces(PieceArray {
        prefix: "",
        suffix: "",
        item_prefix: "cat(\"",
        item_suffix: "\")\n",
        separator: "",
        escapes: HEX_ESCAPES,
        split: Split::Width(1000),
    }),
};

pub static BRAINFUCK: Language = Language {
    spec: LanguageSpec {
        name: "Brainfuck",
        source_file: "QR.bf",
        steps: &[Step::run("beef {src}", Some("beef"))],
    },
    strategy: Strategy::Tape(Tape {
        prefix: "",
        suffix: "\n",
    }),
};

static STANDARD: [&Language; 23] = [
    &RUST,
    &SCHEME,
    &TCL,
    &AWK,
    &BASH,
    &C,
    &CPP,
    &CSHARP,
    &COMMON_LISP,
    &D,
    &GO,
    &HASKELL,
    &JAVA,
    &JAVASCRIPT,
    &LUA,
    &OCAML,
    &PASCAL,
    &PERL,
    &PHP,
    &POSTSCRIPT,
    &PYTHON,
    &R,
    &BRAINFUCK,
];

/// The standard relay after the origin, in execution order.
pub fn standard() -> &'static [&'static Language] {
    &STANDARD
}

/// Look a built-in language up by display name or source extension,
/// ignoring case (`"c++"`, `"cpp"`, `"Common Lisp"`, `"lisp"`).
pub fn find(name: &str) -> Option<&'static Language> {
    let name = name.trim();
    STANDARD.iter().copied().find(|language| {
        language.spec.name.eq_ignore_ascii_case(name)
            || language
                .spec
                .source_file
                .rsplit_once('.')
                .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(name))
    })
}
