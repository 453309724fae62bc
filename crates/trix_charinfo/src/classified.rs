//! The classified character value handed from a classifier to the scanner.

use bitflags::bitflags;
use unicode_general_category::GeneralCategory;

bitflags! {
    /// Boolean character properties, computed once at classification time.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CharFlags: u8 {
        /// Decimal digit (General_Category `Nd`).
        const DIGIT = 1 << 0;
        /// Unicode `Alphabetic`.
        const ALPHABETIC = 1 << 1;
        /// Alphabetic or any numeric category.
        const ALPHANUMERIC = 1 << 2;
        /// Connector punctuation (General_Category `Pc`), e.g. `_`.
        const CONNECTOR = 1 << 3;
        /// Unicode `White_Space`.
        const WHITESPACE = 1 << 4;
    }
}

/// Line-break class tag.
///
/// Only the classes the scanner branches on get their own variant;
/// everything else is [`LineBreakClass::Other`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum LineBreakClass {
    /// Line_Break `QU`: ambiguous quotation marks (`"`, `'`, `«`, `“`, ...).
    Quotation,
    /// Line_Break `BK`, `CR`, `LF` or `NL`: forces a line break.
    LineEnd,
    /// Any other line-break class.
    #[default]
    Other,
}

/// An opening bracket and the character that closes its group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BracketPair {
    pub open: char,
    pub close: char,
}

/// One character plus everything the scanner needs to know about it.
///
/// Immutable once produced by a [`CharClassifier`](crate::CharClassifier).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ClassifiedChar {
    ch: char,
    flags: CharFlags,
    category: GeneralCategory,
    line_break: LineBreakClass,
    bracket: Option<BracketPair>,
}

impl ClassifiedChar {
    /// Assemble a classified character from its parts.
    ///
    /// `bracket` must only be set when `ch` is the opening half of a pair.
    pub const fn new(
        ch: char,
        flags: CharFlags,
        category: GeneralCategory,
        line_break: LineBreakClass,
        bracket: Option<BracketPair>,
    ) -> Self {
        ClassifiedChar {
            ch,
            flags,
            category,
            line_break,
            bracket,
        }
    }

    /// The character itself.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
    }

    #[inline]
    pub const fn flags(&self) -> CharFlags {
        self.flags
    }

    /// Unicode general category.
    #[inline]
    pub const fn category(&self) -> GeneralCategory {
        self.category
    }

    #[inline]
    pub const fn line_break(&self) -> LineBreakClass {
        self.line_break
    }

    /// The pair this character opens, if it is an opening bracket.
    #[inline]
    pub const fn bracket(&self) -> Option<BracketPair> {
        self.bracket
    }

    #[inline]
    pub const fn is_digit(&self) -> bool {
        self.flags.contains(CharFlags::DIGIT)
    }

    #[inline]
    pub const fn is_alphabetic(&self) -> bool {
        self.flags.contains(CharFlags::ALPHABETIC)
    }

    #[inline]
    pub const fn is_alphanumeric(&self) -> bool {
        self.flags.contains(CharFlags::ALPHANUMERIC)
    }

    #[inline]
    pub const fn is_connector(&self) -> bool {
        self.flags.contains(CharFlags::CONNECTOR)
    }

    #[inline]
    pub const fn is_whitespace(&self) -> bool {
        self.flags.contains(CharFlags::WHITESPACE)
    }

    /// True for characters that force a line break.
    #[inline]
    pub fn is_line_end(&self) -> bool {
        self.line_break == LineBreakClass::LineEnd
    }

    /// True for quotation marks (Line_Break `QU`).
    #[inline]
    pub fn is_quotation(&self) -> bool {
        self.line_break == LineBreakClass::Quotation
    }

    /// True for plain spaces (General_Category `Zs`).
    ///
    /// Narrower than [`is_whitespace`](Self::is_whitespace): tabs and line
    /// ends are whitespace but not space separators.
    #[inline]
    pub fn is_space_separator(&self) -> bool {
        self.category == GeneralCategory::SpaceSeparator
    }
}
