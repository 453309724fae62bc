//! The classification seam and its Unicode-backed default.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_linebreak::{break_property, BreakClass};

use crate::{bracket_pair, CharFlags, ClassifiedChar, LineBreakClass};

/// A classifier refused to classify a character.
///
/// The scanner propagates this unchanged to its caller.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("cannot classify {ch:?}: {reason}")]
pub struct ClassifyError {
    pub ch: char,
    pub reason: String,
}

impl ClassifyError {
    pub fn new(ch: char, reason: impl Into<String>) -> Self {
        ClassifyError {
            ch,
            reason: reason.into(),
        }
    }
}

/// Turns a code point into a [`ClassifiedChar`].
///
/// The scanner consults its classifier once per character read and never
/// computes character properties itself.
pub trait CharClassifier {
    fn classify(&self, ch: char) -> Result<ClassifiedChar, ClassifyError>;
}

impl<C: CharClassifier + ?Sized> CharClassifier for &C {
    #[inline]
    fn classify(&self, ch: char) -> Result<ClassifiedChar, ClassifyError> {
        (**self).classify(ch)
    }
}

/// Classifier backed by the Unicode character database. Never fails.
#[derive(Copy, Clone, Debug, Default)]
pub struct UnicodeClassifier;

impl UnicodeClassifier {
    /// Classify `ch` infallibly.
    pub fn info(ch: char) -> ClassifiedChar {
        let category = get_general_category(ch);

        let mut flags = CharFlags::empty();
        flags.set(CharFlags::DIGIT, category == GeneralCategory::DecimalNumber);
        flags.set(CharFlags::ALPHABETIC, ch.is_alphabetic());
        flags.set(CharFlags::ALPHANUMERIC, ch.is_alphanumeric());
        flags.set(
            CharFlags::CONNECTOR,
            category == GeneralCategory::ConnectorPunctuation,
        );
        flags.set(CharFlags::WHITESPACE, ch.is_whitespace());

        ClassifiedChar::new(ch, flags, category, line_break_class(ch), bracket_pair(ch))
    }
}

impl CharClassifier for UnicodeClassifier {
    #[inline]
    fn classify(&self, ch: char) -> Result<ClassifiedChar, ClassifyError> {
        Ok(Self::info(ch))
    }
}

fn line_break_class(ch: char) -> LineBreakClass {
    match break_property(u32::from(ch)) {
        BreakClass::Quotation => LineBreakClass::Quotation,
        BreakClass::Mandatory
        | BreakClass::CarriageReturn
        | BreakClass::LineFeed
        | BreakClass::NextLine => LineBreakClass::LineEnd,
        _ => LineBreakClass::Other,
    }
}

#[cfg(test)]
mod tests;
