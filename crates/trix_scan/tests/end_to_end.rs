//! End-to-end scanning scenarios through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use trix_scan::{
    init_tracing, CharClassifier, ClassifiedChar, ClassifyError, ReverseScanner, ScanConfig,
    ScanError, Scanner, UnicodeClassifier,
};

#[test]
fn word_then_digits() {
    init_tracing();
    let mut s = Scanner::new("Abc 123").unwrap();
    assert_eq!(s.current_char(), Some('A'));
    assert_eq!(
        s.collect(ClassifiedChar::is_alphabetic).unwrap(),
        Some("Abc".to_string())
    );
    assert_eq!(s.current_char(), Some(' '));
    s.pass_whitespace().unwrap();
    assert_eq!(s.scan_digits().unwrap(), Some("123".to_string()));
    assert!(s.is_exhausted());
}

#[test]
fn command_line_style_split() {
    init_tracing();
    let mut s =
        Scanner::new(r#"  grep -n "two words" [a-z+] {x: (1, 2)} path\ with\ spaces  "#).unwrap();
    assert_eq!(
        s.split_all().unwrap(),
        vec![
            "grep",
            "-n",
            "\"two words\"",
            "[a-z+]",
            "{x: (1, 2)}",
            "path with spaces",
        ]
    );
    assert!(s.is_exhausted());
}

#[test]
fn nested_groups_rescan() {
    // A bracketed group can be handed to a fresh scanner for its contents.
    let mut outer = Scanner::new("(alpha (beta gamma) \"delta epsilon\")").unwrap();
    let group = outer.scan_bracketed().unwrap().unwrap();
    assert_eq!(group, "(alpha (beta gamma) \"delta epsilon\")");

    let inner_text = &group[1..group.len() - 1];
    let tokens = Scanner::new(inner_text).unwrap().split_all().unwrap();
    assert_eq!(tokens, vec!["alpha", "(beta gamma)", "\"delta epsilon\""]);
}

#[test]
fn locale_name_split() {
    let mut s = Scanner::new("aa_DJ.iso88591.json").unwrap();
    assert_eq!(s.split_on("_..").unwrap(), vec!["aa", "DJ", "iso88591"]);
    assert_eq!(s.remainder().unwrap(), "json");
}

#[test]
fn reverse_split_keeps_head_as_remainder() {
    let mut s = ReverseScanner::new("Fi-fie-fo-fum! Hello_World.xyz").unwrap();
    assert_eq!(
        s.reverse_split_on(" _.").unwrap(),
        vec!["Hello", "World", "xyz"]
    );
    assert_eq!(s.remainder().unwrap(), "Fi-fie-fo-fum!");
}

#[test]
fn unbalanced_input_is_reported_with_partial_text() {
    let mut s = Scanner::new("ok [1, [2, 3]").unwrap();
    assert_eq!(s.scan_one().unwrap(), Some("ok".to_string()));
    match s.scan_one() {
        Err(ScanError::UnbalancedBracket {
            open,
            close,
            depth,
            partial,
        }) => {
            assert_eq!((open, close, depth), ('[', ']', 1));
            assert_eq!(partial, "[1, [2, 3]");
        }
        other => panic!("expected unbalanced bracket, got {other:?}"),
    }
}

#[test]
fn custom_escape_in_split() {
    let config = ScanConfig::new().with_escape('%');
    let mut s = Scanner::with_config("a%:b:c".chars(), config, UnicodeClassifier).unwrap();
    assert_eq!(s.split_on(":").unwrap(), vec!["a:b"]);
    assert_eq!(s.remainder().unwrap(), "c");
}

/// Refuses control characters other than whitespace.
struct NoControls;

impl CharClassifier for NoControls {
    fn classify(&self, ch: char) -> Result<ClassifiedChar, ClassifyError> {
        if ch.is_control() && !ch.is_whitespace() {
            return Err(ClassifyError::new(ch, "control character"));
        }
        UnicodeClassifier.classify(ch)
    }
}

#[test]
fn classifier_errors_reach_the_caller() {
    let mut s =
        Scanner::with_config("one two\u{0007}three".chars(), ScanConfig::default(), NoControls)
            .unwrap();
    assert_eq!(s.scan_one().unwrap(), Some("one".to_string()));
    assert_eq!(
        s.scan_one(),
        Err(ScanError::Classify(ClassifyError::new(
            '\u{0007}',
            "control character"
        )))
    );
}

#[test]
fn scanners_are_independent() {
    let mut caret = Scanner::with_config(
        "a^ b".chars(),
        ScanConfig::new().with_escape('^'),
        UnicodeClassifier,
    )
    .unwrap();
    let mut backslash = Scanner::new("a^ b").unwrap();
    assert_eq!(caret.split_all().unwrap(), vec!["a b"]);
    assert_eq!(backslash.split_all().unwrap(), vec!["a^", "b"]);
}
