//! Property 1: every CR, CRLF, and FF becomes exactly one LF; no U+0000
//! survives preprocessing.

use css_syntax::preprocessor::preprocess_str;

#[test]
fn crlf_cr_ff_all_fold_to_lf() {
    let out = preprocess_str("a\r\nb\rc\u{000C}d");
    assert_eq!(out, vec!['a', '\n', 'b', '\n', 'c', '\n', 'd']);
}

#[test]
fn nul_becomes_replacement_character() {
    let out = preprocess_str("a\u{0000}b");
    assert_eq!(out, vec!['a', '\u{FFFD}', 'b']);
    assert!(!out.contains(&'\u{0000}'));
}

#[test]
fn mixed_newlines_in_one_input() {
    let out = preprocess_str("line1\r\nline2\rline3\nline4");
    let joined: String = out.into_iter().collect();
    assert_eq!(joined, "line1\nline2\nline3\nline4");
}
