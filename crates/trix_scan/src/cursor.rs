//! One-character lookahead over a stream of classified characters.
//!
//! The cursor owns its character source exclusively: nothing else may
//! advance the underlying iterator. It always holds the fully classified
//! current character (classification happens eagerly on every advance),
//! so there is no hidden "not yet read" state.
//!
//! # States
//!
//! ```text
//! Active ──(source returns None)──> Exhausted
//! ```
//!
//! The transition happens exactly once. No operation leaves `Exhausted`:
//! the source iterator is never polled again, `current()` and `advance()`
//! keep failing with [`ScanError::EndOfInput`].

use tracing::trace;
use trix_charinfo::{CharClassifier, ClassifiedChar};

use crate::ScanError;

/// Single-owner lookahead cursor.
#[derive(Debug)]
pub struct Cursor<I, C> {
    source: I,
    classifier: C,
    /// Character at the logical read position. `None` once exhausted, or
    /// after the classifier rejected the last character read.
    current: Option<ClassifiedChar>,
    exhausted: bool,
    /// Set once the first character has been read.
    started: bool,
    /// Index of `current` in the source (the total length once exhausted).
    pos: usize,
}

impl<I, C> Cursor<I, C>
where
    I: Iterator<Item = char>,
    C: CharClassifier,
{
    /// Create a cursor positioned on the first character of `source`.
    ///
    /// An empty source produces a cursor that is already exhausted.
    pub fn new(
        source: impl IntoIterator<IntoIter = I, Item = char>,
        classifier: C,
    ) -> Result<Self, ScanError> {
        let mut cursor = Cursor {
            source: source.into_iter(),
            classifier,
            current: None,
            exhausted: false,
            started: false,
            pos: 0,
        };
        match cursor.advance() {
            Ok(_) | Err(ScanError::EndOfInput) => Ok(cursor),
            Err(err) => Err(err),
        }
    }

    /// The character at the logical read position.
    #[inline]
    pub fn current(&self) -> Result<ClassifiedChar, ScanError> {
        self.current.ok_or(ScanError::EndOfInput)
    }

    /// Move forward one character and return it.
    ///
    /// Fails with [`ScanError::EndOfInput`] when the source runs dry; the
    /// cursor is exhausted from then on. Classifier failures are returned
    /// unchanged and leave the cursor without a current character.
    pub fn advance(&mut self) -> Result<ClassifiedChar, ScanError> {
        if self.exhausted {
            return Err(ScanError::EndOfInput);
        }
        if self.started {
            self.pos += 1;
        }
        let Some(ch) = self.source.next() else {
            self.exhausted = true;
            self.current = None;
            trace!(pos = self.pos, "character source exhausted");
            return Err(ScanError::EndOfInput);
        };
        self.started = true;
        match self.classifier.classify(ch) {
            Ok(info) => {
                self.current = Some(info);
                Ok(info)
            }
            Err(err) => {
                self.current = None;
                Err(err.into())
            }
        }
    }

    /// True once the source has run dry. Never resets.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Index of the current character, counted in characters.
    ///
    /// Once exhausted this is the number of characters the source held.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Upper bound on the characters left after the current one, when the
    /// source can tell.
    #[inline]
    pub fn remaining_hint(&self) -> Option<usize> {
        self.source.size_hint().1
    }
}
