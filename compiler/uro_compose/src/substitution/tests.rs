use super::*;
use pretty_assertions::assert_eq;

#[test]
fn risky_characters_become_placeholders() {
    let pass = SubstitutionPass;
    assert_eq!(pass.substitute(b"a b\nc\td\re\\f"), b"a`_b`nc`td`re`/f");
}

#[test]
fn escape_character_is_doubled() {
    let pass = SubstitutionPass;
    assert_eq!(pass.substitute(b"`_"), b"``_");
    assert_eq!(pass.restore(b"``_").unwrap(), b"`_");
}

#[test]
fn other_characters_are_untouched() {
    let pass = SubstitutionPass;
    let text: &[u8] = b"eval$s=%q(#$s)\"'{}[]<>";
    assert_eq!(pass.substitute(text), text);
}

#[test]
fn substituted_text_is_one_word() {
    let substituted = SubstitutionPass.substitute(b"a b\\\n\t\r`");
    assert_eq!(substituted, b"a`_b`/`n`t`r``");
    assert!(!substituted.iter().any(|b| b" \t\n\r\\".contains(b)));
}

#[test]
fn restore_rejects_malformed_text() {
    let pass = SubstitutionPass;
    assert_eq!(
        pass.restore(b"ab`").unwrap_err(),
        RestoreError::Dangling { offset: 2 }
    );
    assert_eq!(
        pass.restore(b"`q").unwrap_err(),
        RestoreError::UnknownCode {
            offset: 0,
            code: b'q'
        }
    );
}

#[test]
fn multibyte_text_passes_through() {
    let pass = SubstitutionPass;
    let text = "caf\u{e9} \u{1f40d}".as_bytes();
    let substituted = pass.substitute(text);
    assert_eq!(substituted, "caf\u{e9}`_\u{1f40d}".as_bytes());
    assert!(std::str::from_utf8(&substituted).is_ok());
    assert_eq!(pass.restore(&substituted).unwrap(), text);
}

#[test]
fn unknown_code_is_shown_in_hex() {
    let err = SubstitutionPass.restore(b"x`\xff").unwrap_err();
    assert_eq!(err.to_string(), "unknown placeholder code 0xff at offset 1");
}

#[test]
fn substitution_distributes_over_concatenation() {
    let pass = SubstitutionPass;
    let (a, b): (&[u8], &[u8]) = (b"xe[ `", b"\\n ]");
    assert_eq!(
        pass.substitute(&[a, b].concat()),
        [pass.substitute(a), pass.substitute(b)].concat()
    );
}

#[test]
fn ruby_restorer_is_generated_from_table() {
    assert_eq!(
        SubstitutionPass.ruby_restorer(),
        ".gsub(/`(.)/){[\"`\",32.chr,10.chr,9.chr,13.chr,92.chr][\"`_ntr/\".index($1)]}"
    );
}

#[test]
fn ruby_restorer_has_no_risky_characters() {
    let restorer = SubstitutionPass.ruby_restorer();
    assert!(!restorer.contains(char::is_whitespace));
    assert!(!restorer.contains('\\'));
}
