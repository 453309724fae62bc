use pretty_assertions::assert_eq;

use super::*;
use crate::BracketPair;

// === Flags ===

#[test]
fn ascii_digit() {
    let info = UnicodeClassifier::info('7');
    assert!(info.is_digit());
    assert!(info.is_alphanumeric());
    assert!(!info.is_alphabetic());
    assert!(!info.is_whitespace());
}

#[test]
fn non_ascii_decimal_digit() {
    // ARABIC-INDIC DIGIT THREE is Nd.
    assert!(UnicodeClassifier::info('\u{0663}').is_digit());
}

#[test]
fn other_numbers_are_alphanumeric_but_not_digits() {
    // SUPERSCRIPT TWO is No, VULGAR FRACTION ONE HALF is No.
    for ch in ['\u{00B2}', '\u{00BD}'] {
        let info = UnicodeClassifier::info(ch);
        assert!(!info.is_digit(), "{ch:?}");
        assert!(info.is_alphanumeric(), "{ch:?}");
    }
}

#[test]
fn letters() {
    for ch in ['a', 'Z', 'é', 'λ', '漢'] {
        let info = UnicodeClassifier::info(ch);
        assert!(info.is_alphabetic(), "{ch:?}");
        assert!(info.is_alphanumeric(), "{ch:?}");
        assert!(!info.is_digit(), "{ch:?}");
    }
}

#[test]
fn connector_punctuation() {
    assert!(UnicodeClassifier::info('_').is_connector());
    assert!(UnicodeClassifier::info('\u{203F}').is_connector());
    assert!(!UnicodeClassifier::info('-').is_connector());
}

#[test]
fn whitespace_and_space_separators() {
    let space = UnicodeClassifier::info(' ');
    assert!(space.is_whitespace());
    assert!(space.is_space_separator());

    let nbsp = UnicodeClassifier::info('\u{00A0}');
    assert!(nbsp.is_whitespace());
    assert!(nbsp.is_space_separator());

    let tab = UnicodeClassifier::info('\t');
    assert!(tab.is_whitespace());
    assert!(!tab.is_space_separator());

    let newline = UnicodeClassifier::info('\n');
    assert!(newline.is_whitespace());
    assert!(!newline.is_space_separator());
}

// === Line-break classes ===

#[test]
fn quotation_marks() {
    for ch in ['"', '\'', '\u{00AB}', '\u{00BB}', '\u{201C}', '\u{201D}'] {
        assert_eq!(
            UnicodeClassifier::info(ch).line_break(),
            LineBreakClass::Quotation,
            "{ch:?}"
        );
    }
}

#[test]
fn line_ends() {
    for ch in ['\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}'] {
        assert!(UnicodeClassifier::info(ch).is_line_end(), "{ch:?}");
    }
    assert!(!UnicodeClassifier::info(' ').is_line_end());
    assert!(!UnicodeClassifier::info('\t').is_line_end());
}

#[test]
fn ordinary_characters_are_other() {
    for ch in ['a', '1', '(', '_'] {
        assert_eq!(
            UnicodeClassifier::info(ch).line_break(),
            LineBreakClass::Other,
            "{ch:?}"
        );
    }
}

// === Brackets ===

#[test]
fn opening_bracket_carries_pair() {
    assert_eq!(
        UnicodeClassifier::info('[').bracket(),
        Some(BracketPair {
            open: '[',
            close: ']'
        })
    );
    assert_eq!(UnicodeClassifier::info(']').bracket(), None);
}

// === Trait ===

#[test]
fn trait_matches_inherent() {
    let classifier = UnicodeClassifier;
    for ch in ['a', ' ', '"', '(', '9'] {
        assert_eq!(classifier.classify(ch), Ok(UnicodeClassifier::info(ch)));
    }
}

#[test]
fn reference_is_a_classifier() {
    fn classify_with<C: CharClassifier>(
        classifier: C,
        ch: char,
    ) -> Result<ClassifiedChar, ClassifyError> {
        classifier.classify(ch)
    }
    let classifier = UnicodeClassifier;
    assert_eq!(
        classify_with(&classifier, 'x'),
        Ok(UnicodeClassifier::info('x'))
    );
}

#[test]
fn classify_error_display() {
    let err = ClassifyError::new('x', "unsupported plane");
    assert_eq!(err.to_string(), "cannot classify 'x': unsupported plane");
}

mod proptest_flags {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn digits_are_alphanumeric(ch in any::<char>()) {
            let info = UnicodeClassifier::info(ch);
            if info.is_digit() {
                prop_assert!(info.is_alphanumeric());
            }
        }

        #[test]
        fn space_separators_are_whitespace(ch in any::<char>()) {
            let info = UnicodeClassifier::info(ch);
            if info.is_space_separator() {
                prop_assert!(info.is_whitespace());
            }
        }

        #[test]
        fn bracket_pair_opens_with_self(ch in any::<char>()) {
            if let Some(pair) = UnicodeClassifier::info(ch).bracket() {
                prop_assert_eq!(pair.open, ch);
                prop_assert_ne!(pair.close, ch);
            }
        }
    }
}
