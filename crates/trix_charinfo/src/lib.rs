//! Unicode character classification for the trix scanner.
//!
//! The scanner never inspects raw code points itself. Every character it
//! reads is passed through a [`CharClassifier`], which answers the
//! questions the scan recipes ask: is it a digit, a letter, a connector,
//! whitespace, a line end, a quotation mark, an opening bracket (and if
//! so, which character closes it)?
//!
//! [`UnicodeClassifier`] is the default implementation. It derives every
//! answer from the Unicode character database:
//!
//! | Question        | Unicode source                           |
//! |-----------------|------------------------------------------|
//! | digit           | General_Category `Nd`                    |
//! | alphabetic      | `Alphabetic` property                    |
//! | alphanumeric    | `Alphabetic` or General_Category `N*`    |
//! | connector       | General_Category `Pc`                    |
//! | whitespace      | `White_Space` property                   |
//! | line end        | Line_Break `BK`, `CR`, `LF`, `NL`        |
//! | quotation       | Line_Break `QU`                          |
//! | bracket pairing | `Bidi_Paired_Bracket` (opening brackets) |
//!
//! Hosts with their own character database implement [`CharClassifier`]
//! and build [`ClassifiedChar`] values directly.

mod brackets;
mod classified;
mod classifier;

pub use brackets::{bracket_pair, closing_bracket};
pub use classified::{BracketPair, CharFlags, ClassifiedChar, LineBreakClass};
pub use classifier::{CharClassifier, ClassifyError, UnicodeClassifier};
pub use unicode_general_category::GeneralCategory;
