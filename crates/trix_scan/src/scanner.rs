//! The scanner and its two base operations.
//!
//! Every scan starts at the cursor's current character and ends one
//! character after the last character it consumed. [`Scanner::collect`]
//! and [`Scanner::ignore`] are the only loops that walk the cursor under a
//! predicate; the recipes in `recipes.rs` and the splitters in `split.rs`
//! are built from them, so escape handling and end-of-input tolerance live
//! here and nowhere else.
//!
//! # Escapes
//!
//! When a character accepted by the predicate is the configured escape
//! character, it is consumed and the character after it is taken as data
//! without consulting the predicate. An escape at the very end of the
//! input has nothing to escape and is kept as a literal.
//!
//! # End of Input
//!
//! Running out of characters mid-scan ends the scan normally with what was
//! gathered. A scan that starts on an exhausted cursor reports "no token"
//! (`Ok(None)`).

use std::str::Chars;

use trix_charinfo::{CharClassifier, ClassifiedChar, UnicodeClassifier};

use crate::error::AbsorbEnd;
use crate::{Cursor, ScanBuffer, ScanConfig, ScanError};

/// Character scanner over any `char` source.
///
/// Single-owner and single-threaded: create one per scan task.
#[derive(Debug)]
pub struct Scanner<I, C = UnicodeClassifier> {
    pub(crate) cursor: Cursor<I, C>,
    config: ScanConfig,
}

impl<'a> Scanner<Chars<'a>> {
    /// Scan `text` with the default configuration and Unicode classifier.
    pub fn new(text: &'a str) -> Result<Self, ScanError> {
        Scanner::with_config(text.chars(), ScanConfig::default(), UnicodeClassifier)
    }
}

impl<I, C> Scanner<I, C>
where
    I: Iterator<Item = char>,
    C: CharClassifier,
{
    /// Scan `source` with an explicit configuration and classifier.
    ///
    /// The configuration is validated before the first character is read.
    pub fn with_config(
        source: impl IntoIterator<IntoIter = I, Item = char>,
        config: ScanConfig,
        classifier: C,
    ) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Scanner {
            cursor: Cursor::new(source, classifier)?,
            config,
        })
    }

    #[inline]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// The configured escape character.
    #[inline]
    pub fn escape(&self) -> char {
        self.config.escape
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor<I, C> {
        &self.cursor
    }

    /// Direct cursor access, for callers stepping one character at a time.
    #[inline]
    pub fn cursor_mut(&mut self) -> &mut Cursor<I, C> {
        &mut self.cursor
    }

    /// The current character, or `None` once exhausted.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.cursor.current().ok().map(|c| c.ch())
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Collect characters while `predicate` accepts them.
    ///
    /// Returns `Ok(Some(""))` when the current character is rejected
    /// outright, and `Ok(None)` when the cursor was already exhausted.
    pub fn collect<P>(&mut self, mut predicate: P) -> Result<Option<String>, ScanError>
    where
        P: FnMut(&ClassifiedChar) -> bool,
    {
        let Some(mut current) = self.cursor.current().absorb_end()? else {
            return Ok(None);
        };
        let mut buf = self.buffer();
        while predicate(&current) {
            if current.ch() == self.config.escape {
                match self.cursor.advance().absorb_end()? {
                    Some(escaped) => buf.push(escaped.ch()),
                    None => {
                        buf.push(current.ch());
                        break;
                    }
                }
            } else {
                buf.push(current.ch());
            }
            match self.cursor.advance().absorb_end()? {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(Some(buf.into_string()))
    }

    /// Skip characters while `predicate` accepts them.
    ///
    /// Does not move the cursor if the current character is rejected.
    pub fn ignore<P>(&mut self, mut predicate: P) -> Result<(), ScanError>
    where
        P: FnMut(&ClassifiedChar) -> bool,
    {
        let Some(mut current) = self.cursor.current().absorb_end()? else {
            return Ok(());
        };
        while predicate(&current) {
            if current.ch() == self.config.escape && self.cursor.advance().absorb_end()?.is_none() {
                break;
            }
            match self.cursor.advance().absorb_end()? {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(())
    }

    /// Fresh buffer for one scan, sized by the configured hint but never
    /// larger than what the source can still hold.
    pub(crate) fn buffer(&self) -> ScanBuffer {
        let hint = match self.cursor.remaining_hint() {
            Some(upper) => self.config.buffer_hint.min(upper.saturating_add(1)),
            None => self.config.buffer_hint,
        };
        ScanBuffer::with_hint(hint)
    }
}
