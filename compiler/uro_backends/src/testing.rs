//! Simulated execution of generated sources.
//!
//! Reads a stage source back the way its language would, trusting that each
//! escape spelling means what the table says. This exercises the Rust side
//! of every backend without installing two dozen toolchains; `uroc verify`
//! runs the real ones.
//!
//! The runtime half ([`apply_runtime`]) evaluates a [`RuntimeCall`] from its
//! Ruby argument text alone, so a mismatch between `render` and the data fed
//! to the Ruby lambdas shows up without a Ruby interpreter.

use crate::runtime::{Kernel, RuntimeCall};
use crate::strategy::{EscapeLiteral, Escapes, PieceArray, Strategy, Terminator};

/// The stdout a source written with `strategy` would produce, or `None`
/// when the source is malformed for that strategy.
pub fn simulate(strategy: &Strategy, source: &str) -> Option<Vec<u8>> {
    match strategy {
        Strategy::Escape(literal) => simulate_literal(literal, source).map(String::into_bytes),
        Strategy::Pieces(pieces) => simulate_pieces(pieces, source).map(String::into_bytes),
        Strategy::Tape(_) => run_brainfuck(source),
        Strategy::Verbatim(verbatim) => {
            let opens_code = verbatim
                .forbidden_prefixes
                .iter()
                .any(|seq| source.starts_with(seq))
                || verbatim.forbidden.iter().any(|seq| source.contains(seq));
            (!opens_code).then(|| source.as_bytes().to_vec())
        }
    }
}

fn simulate_literal(literal: &EscapeLiteral, source: &str) -> Option<String> {
    let body = source
        .strip_prefix(literal.prefix)?
        .strip_suffix(literal.suffix)?;
    let (mut text, rest) = unescape(body, literal.escapes, None)?;
    if !rest.is_empty() {
        return None;
    }
    if literal.terminator == Terminator::Newline {
        text.push('\n');
    }
    Some(text)
}

fn simulate_pieces(pieces: &PieceArray, source: &str) -> Option<String> {
    let mut rest = source
        .strip_prefix(pieces.prefix)?
        .strip_suffix(pieces.suffix)?;
    let mut out = String::new();
    let mut first = true;
    while !rest.is_empty() {
        if !first {
            rest = rest.strip_prefix(pieces.separator)?;
        }
        first = false;
        rest = rest.strip_prefix(pieces.item_prefix)?;
        let (text, after) = unescape(rest, pieces.escapes, Some(pieces.item_suffix))?;
        out.push_str(&text);
        rest = after.strip_prefix(pieces.item_suffix)?;
    }
    Some(out)
}

/// Decode literal text up to `stop` (left unconsumed) or the end of input.
///
/// An escape spelling always wins over `stop`. A raw character that the
/// table escapes is a syntax error.
fn unescape<'a>(
    mut rest: &'a str,
    escapes: Escapes,
    stop: Option<&str>,
) -> Option<(String, &'a str)> {
    let mut out = String::new();
    loop {
        let spelled = escapes
            .iter()
            .filter(|(_, spelling)| rest.starts_with(spelling))
            .max_by_key(|(_, spelling)| spelling.len());
        if let Some((c, spelling)) = spelled {
            out.push(*c);
            rest = &rest[spelling.len()..];
            continue;
        }
        if stop.is_some_and(|stop| rest.starts_with(stop)) {
            return Some((out, rest));
        }
        let Some(c) = rest.chars().next() else {
            return stop.is_none().then_some((out, rest));
        };
        if escapes.iter().any(|(key, _)| *key == c) {
            return None;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
}

/// A Brainfuck interpreter with byte cells and an unbounded tape to the
/// right. Returns `None` for unbalanced brackets or a move left of cell 0.
pub fn run_brainfuck(program: &str) -> Option<Vec<u8>> {
    let code = program.as_bytes();
    let mut jump = vec![0usize; code.len()];
    let mut open = Vec::new();
    for (pc, &op) in code.iter().enumerate() {
        match op {
            b'[' => open.push(pc),
            b']' => {
                let start = open.pop()?;
                jump[start] = pc;
                jump[pc] = start;
            }
            _ => {}
        }
    }
    if !open.is_empty() {
        return None;
    }

    let mut tape = vec![0u8; 1];
    let mut ptr = 0usize;
    let mut pc = 0usize;
    let mut out = Vec::new();
    while pc < code.len() {
        match code[pc] {
            b'+' => tape[ptr] = tape[ptr].wrapping_add(1),
            b'-' => tape[ptr] = tape[ptr].wrapping_sub(1),
            b'>' => {
                ptr += 1;
                if ptr == tape.len() {
                    tape.push(0);
                }
            }
            b'<' => ptr = ptr.checked_sub(1)?,
            b'.' => out.push(tape[ptr]),
            b'[' if tape[ptr] == 0 => pc = jump[pc],
            b']' if tape[ptr] != 0 => pc = jump[pc],
            _ => {}
        }
        pc += 1;
    }
    Some(out)
}

/// A decoded runtime argument.
#[derive(Clone, Debug, PartialEq, Eq)]
enum RubyValue {
    Str(String),
    Table(Vec<(String, String)>),
    Int(usize),
}

impl RubyValue {
    fn parse(text: &str) -> Option<RubyValue> {
        if let Some(inner) = text.strip_prefix('{') {
            let inner = inner.strip_suffix('}')?;
            if inner.is_empty() {
                return Some(RubyValue::Table(Vec::new()));
            }
            let mut entries = Vec::new();
            for entry in inner.split(',') {
                let (key, value) = entry.split_once("=>")?;
                entries.push((parse_hex_call(key)?, parse_hex_call(value)?));
            }
            return Some(RubyValue::Table(entries));
        }
        if text.starts_with("h[") {
            return parse_hex_call(text).map(RubyValue::Str);
        }
        text.parse().ok().map(RubyValue::Int)
    }
}

fn parse_hex_call(text: &str) -> Option<String> {
    let digits = text.strip_prefix("h[\"")?.strip_suffix("\"]")?;
    if digits.len() % 2 != 0 {
        return None;
    }
    let bytes = (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    String::from_utf8(bytes).ok()
}

fn replace_chars(text: &str, table: &[(String, String)]) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let mut buf = [0u8; 4];
        let key: &str = c.encode_utf8(&mut buf);
        match table.iter().find(|(k, _)| k == key) {
            Some((_, spelling)) => out.push_str(spelling),
            None => out.push(c),
        }
    }
    out
}

/// Evaluate `call` on `input` the way its Ruby lambda would, using only the
/// argument text the origin embeds.
pub fn apply_runtime(call: &RuntimeCall, input: &str) -> Option<String> {
    let Some(kernel) = call.kernel else {
        return Some(input.to_owned());
    };
    let args = call
        .args
        .iter()
        .map(|arg| RubyValue::parse(arg))
        .collect::<Option<Vec<_>>>()?;

    match (kernel, args.as_slice()) {
        (
            Kernel::Escape,
            [RubyValue::Str(prefix), RubyValue::Str(suffix), RubyValue::Table(table), RubyValue::Int(trim)],
        ) => {
            let kept = input.chars().count().checked_sub(*trim)?;
            let body: String = input.chars().take(kept).collect();
            Some(format!("{prefix}{}{suffix}", replace_chars(&body, table)))
        }
        (
            Kernel::Pieces,
            [RubyValue::Str(prefix), RubyValue::Str(suffix), RubyValue::Str(item_prefix), RubyValue::Str(item_suffix), RubyValue::Str(separator), RubyValue::Table(table), RubyValue::Int(width)],
        ) => {
            let pieces: Vec<String> = if *width > 0 {
                let chars: Vec<char> = input.chars().collect();
                chars
                    .chunks(*width)
                    .map(|chunk| chunk.iter().collect())
                    .collect()
            } else {
                input.split_inclusive('\n').map(str::to_owned).collect()
            };
            let items: Vec<String> = pieces
                .iter()
                .map(|piece| format!("{item_prefix}{}{item_suffix}", replace_chars(piece, table)))
                .collect();
            Some(format!("{prefix}{}{suffix}", items.join(separator)))
        }
        (Kernel::Tape, [RubyValue::Str(prefix), RubyValue::Str(suffix)]) => {
            let mut out = prefix.clone();
            let mut last = 0i16;
            for byte in input.bytes() {
                let delta = i16::from(byte) - last;
                last = i16::from(byte);
                let (step, count) = if delta > 0 { ('+', delta) } else { ('-', -delta) };
                for _ in 0..count {
                    out.push(step);
                }
                out.push('.');
            }
            out.push_str(suffix);
            Some(out)
        }
        _ => None,
    }
}
