//! Brainfuck output by delta encoding.

use crate::runtime::{ruby_str, Kernel, RuntimeCall};

/// Walks one cell from byte to byte: `+`/`-` by the difference to the
/// previous byte, then `.`. Any byte sequence is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tape {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl Tape {
    pub fn render(&self, payload: &[u8]) -> String {
        let mut out = String::with_capacity(self.prefix.len() + payload.len() * 8);
        out.push_str(self.prefix);
        let mut last = 0u8;
        for &byte in payload {
            let (step, count) = if byte >= last {
                ('+', byte - last)
            } else {
                ('-', last - byte)
            };
            out.extend(std::iter::repeat_n(step, usize::from(count)));
            out.push('.');
            last = byte;
        }
        out.push_str(self.suffix);
        out
    }

    /// `xb[s, prefix, suffix]`
    pub fn runtime_call(&self) -> RuntimeCall {
        RuntimeCall::new(Kernel::Tape, vec![ruby_str(self.prefix), ruby_str(self.suffix)])
    }
}
