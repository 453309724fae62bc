//! Token recipes composed from `collect` and `ignore`.
//!
//! None of these fail for "didn't match": a recipe that finds nothing of
//! its kind returns `Ok(None)` and leaves the cursor where it was (after
//! any whitespace it was told to pass). Errors are reserved for bracket
//! groups the input opens but never closes, and for classifier failures.

use tracing::{debug, trace};
use trix_charinfo::{BracketPair, CharClassifier, ClassifiedChar};

use crate::error::AbsorbEnd;
use crate::{ScanError, Scanner};

impl<I, C> Scanner<I, C>
where
    I: Iterator<Item = char>,
    C: CharClassifier,
{
    // ─── Skipping ───────────────────────────────────────────────────

    /// Skip whitespace, line ends included.
    pub fn pass_whitespace(&mut self) -> Result<(), ScanError> {
        self.ignore(ClassifiedChar::is_whitespace)
    }

    /// Skip whitespace, then any line-end characters.
    pub fn pass_line_end(&mut self) -> Result<(), ScanError> {
        self.pass_whitespace()?;
        self.ignore(ClassifiedChar::is_line_end)
    }

    // ─── Runs ───────────────────────────────────────────────────────

    /// Collect a run of decimal digits.
    pub fn scan_digits(&mut self) -> Result<Option<String>, ScanError> {
        self.collect(ClassifiedChar::is_digit)
    }

    /// Pass whitespace, then collect an identifier: letters, digits and
    /// connector punctuation, not starting with a digit.
    ///
    /// Returns `Ok(None)` for digit-led input and when no identifier
    /// character is present.
    pub fn scan_identifier(&mut self) -> Result<Option<String>, ScanError> {
        self.pass_whitespace()?;
        let Some(first) = self.cursor.current().absorb_end()? else {
            return Ok(None);
        };
        if first.is_digit() {
            return Ok(None);
        }
        let ident = self.collect(|c| c.is_alphanumeric() || c.is_connector())?;
        Ok(ident.filter(|ident| !ident.is_empty()))
    }

    /// Collect up to, not including, the next `target`.
    ///
    /// The cursor is left on `target` (or exhausted if it never appears).
    pub fn scan_to(&mut self, target: char) -> Result<Option<String>, ScanError> {
        self.collect(|c| c.ch() != target)
    }

    /// Collect from the current character through its next occurrence.
    ///
    /// `"abacab"` scans to `"aba"`, leaving the cursor on `c`. If the
    /// character never recurs, everything up to the end is returned.
    pub fn scan_to_same_char(&mut self) -> Result<Option<String>, ScanError> {
        let Some(first) = self.cursor.current().absorb_end()? else {
            return Ok(None);
        };
        let delimiter = first.ch();
        let mut buf = self.buffer();
        buf.push(delimiter);
        if self.cursor.advance().absorb_end()?.is_none() {
            return Ok(Some(buf.into_string()));
        }
        if let Some(body) = self.scan_to(delimiter)? {
            buf.push_str(&body);
        }
        if self.cursor.current().absorb_end()?.is_some() {
            buf.push(delimiter);
            self.cursor.advance().absorb_end()?;
        }
        Ok(Some(buf.into_string()))
    }

    // ─── Groups ─────────────────────────────────────────────────────

    /// Pass whitespace, then scan a quoted string, quotes included.
    ///
    /// Any Line_Break `QU` character opens a quote; the same character
    /// closes it. Escaped characters inside the quote are taken as data
    /// (the escape itself is dropped). The cursor ends after the closing
    /// quote. A quote that is never closed runs to the end of the input,
    /// so `'n roll` scans whole rather than failing.
    pub fn scan_quoted(&mut self) -> Result<Option<String>, ScanError> {
        self.pass_whitespace()?;
        let Some(open) = self.cursor.current().absorb_end()? else {
            return Ok(None);
        };
        if !open.is_quotation() {
            return Ok(None);
        }

        let quote = open.ch();
        let mut buf = self.buffer();
        buf.push(quote);
        let mut closed = false;
        if self.cursor.advance().absorb_end()?.is_some() {
            if let Some(body) = self.scan_to(quote)? {
                buf.push_str(&body);
            }
            if self.cursor.current().absorb_end()?.is_some() {
                buf.push(quote);
                self.cursor.advance().absorb_end()?;
                closed = true;
            }
        }
        if !closed {
            debug!(?quote, pos = self.cursor.position(), "quote open at end of input");
        }

        let token = buf.into_string();
        trace!(%token, "quoted");
        Ok(Some(token))
    }

    /// Pass whitespace, then scan a bracketed group, brackets included.
    ///
    /// Depth is tracked for the outermost pair only: `(a(b)c)` is one
    /// group, while in `(a[b)c]` the `[` is ordinary data and the group
    /// ends at `)`. An escaped character never changes depth; the escape
    /// and the character after it are both kept, so the group text can be
    /// scanned again by a nested scanner. This differs from the
    /// collect-based recipes, which drop the escape: `(a\)b)` scans to
    /// `(a\)b)`, escape included.
    pub fn scan_bracketed(&mut self) -> Result<Option<String>, ScanError> {
        self.pass_whitespace()?;
        let Some(first) = self.cursor.current().absorb_end()? else {
            return Ok(None);
        };
        let Some(BracketPair { open, close }) = first.bracket() else {
            return Ok(None);
        };

        let escape = self.escape();
        let mut buf = self.buffer();
        buf.push(open);
        let mut depth: u32 = 1;
        while let Some(next) = self.cursor.advance().absorb_end()? {
            let ch = next.ch();
            buf.push(ch);
            if ch == escape {
                match self.cursor.advance().absorb_end()? {
                    Some(escaped) => buf.push(escaped.ch()),
                    None => break,
                }
            } else if ch == open {
                depth += 1;
            } else if ch == close {
                depth -= 1;
                if depth == 0 {
                    self.cursor.advance().absorb_end()?;
                    let token = buf.into_string();
                    trace!(%token, "bracketed");
                    return Ok(Some(token));
                }
            }
        }

        debug!(?open, depth, "unbalanced bracket at end of input");
        Err(ScanError::UnbalancedBracket {
            open,
            close,
            depth,
            partial: buf.into_string(),
        })
    }

    // ─── Tokens ─────────────────────────────────────────────────────

    /// Pass whitespace and scan one token: a quoted string, a bracketed
    /// group, or a run of characters up to the next space separator.
    pub fn scan_one(&mut self) -> Result<Option<String>, ScanError> {
        self.pass_whitespace()?;
        if self.cursor.is_exhausted() {
            return Ok(None);
        }
        if let Some(quoted) = self.scan_quoted()? {
            return Ok(Some(quoted));
        }
        if let Some(group) = self.scan_bracketed()? {
            return Ok(Some(group));
        }
        self.collect(|c| !c.is_space_separator())
    }

    /// Split the rest of the input into tokens.
    ///
    /// Whitespace before each token is skipped; a bare word then runs to
    /// the next space separator, and quotes and brackets keep their inner
    /// whitespace. Runs of whitespace never produce empty tokens.
    pub fn split_all(&mut self) -> Result<Vec<String>, ScanError> {
        let mut tokens = Vec::new();
        loop {
            self.pass_whitespace()?;
            match self.scan_one()? {
                Some(token) if !token.is_empty() => tokens.push(token),
                _ => break,
            }
        }
        debug!(count = tokens.len(), "split_all");
        Ok(tokens)
    }
}
