//! Ruby mirrors of the quoting strategies.
//!
//! The origin program regenerates the first relay stage when it runs, so
//! every strategy has a Ruby lambda doing what its `render` does. The
//! composer emits the lambdas a chain needs, then nests one call per
//! language around the origin's own source.
//!
//! Strategy data reaches the lambdas hex-encoded (`h["22"]`), which keeps
//! the emitted Ruby free of quotes, backslashes and whitespace-sensitive
//! text whatever the target languages need.

use std::fmt::Write;

use crate::strategy::Escapes;

/// Helpers every kernel uses: `h` decodes hex, `m` applies an escape table.
pub const PRELUDE: &str = concat!(
    "h=->(x){[x].pack(\"H*\").force_encoding(\"utf-8\")}\n",
    "m=->(s,t){s.gsub(/./m){|x|t[x]||x}}\n",
);

/// A Ruby lambda implementing one strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kernel {
    Escape,
    Pieces,
    Tape,
}

impl Kernel {
    pub const ALL: [Kernel; 3] = [Kernel::Escape, Kernel::Pieces, Kernel::Tape];

    /// Name the lambda is bound to.
    pub const fn name(self) -> &'static str {
        match self {
            Kernel::Escape => "xe",
            Kernel::Pieces => "xp",
            Kernel::Tape => "xb",
        }
    }

    /// The lambda definition, one line with its trailing newline.
    pub const fn definition(self) -> &'static str {
        match self {
            Kernel::Escape => "xe=->(s,p,q,t,c){p+m[s[0,s.size-c],t]+q}\n",
            Kernel::Pieces => concat!(
                "xp=->(s,p,q,i,j,k,t,w){p+(w>0 ? s.scan(/.{1,#{w}}/m) : s.lines)",
                ".map{|x|i+m[x,t]+j}*k+q}\n",
            ),
            Kernel::Tape => {
                "xb=->(s,p,q){l=0;p+s.bytes.map{|b|d=b-l;l=b;(d>0 ? \"+\"*d : \"-\"*-d)+\".\"}*\"\"+q}\n"
            }
        }
    }
}

/// One language's step as Ruby: `open` + inner expression + `close`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeCall {
    /// `None` for languages whose source is the payload itself.
    pub kernel: Option<Kernel>,
    /// Ruby expressions for every lambda argument after the payload.
    pub args: Vec<String>,
}

impl RuntimeCall {
    pub fn new(kernel: Kernel, args: Vec<String>) -> Self {
        RuntimeCall {
            kernel: Some(kernel),
            args,
        }
    }

    pub fn identity() -> Self {
        RuntimeCall {
            kernel: None,
            args: Vec::new(),
        }
    }

    pub fn open(&self) -> String {
        self.kernel
            .map_or_else(String::new, |kernel| format!("{}[", kernel.name()))
    }

    pub fn close(&self) -> String {
        if self.kernel.is_none() {
            return String::new();
        }
        let mut out = String::new();
        for arg in &self.args {
            out.push(',');
            out.push_str(arg);
        }
        out.push(']');
        out
    }

    /// The call applied to `inner`.
    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{inner}{}", self.open(), self.close())
    }
}

/// Lowercase hex of `bytes`.
pub fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Ruby expression evaluating to `text`.
///
/// `h` is a local lambda, so it is called with `[]`: `h("..")` would parse
/// as a method call.
pub fn ruby_str(text: &str) -> String {
    format!("h[\"{}\"]", hex(text.as_bytes()))
}

/// Ruby hash literal mapping each escaped character to its spelling.
pub fn ruby_table(escapes: Escapes) -> String {
    let mut out = String::from("{");
    for (i, (key, spelling)) in escapes.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let mut buf = [0u8; 4];
        out.push_str(&ruby_str(key.encode_utf8(&mut buf)));
        out.push_str("=>");
        out.push_str(&ruby_str(spelling));
    }
    out.push('}');
    out
}
