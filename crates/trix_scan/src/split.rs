//! Multi-delimiter splitting, forward and reverse.
//!
//! Unlike [`Scanner::split_all`], these splits are driven by an explicit
//! delimiter sequence. Each delimiter character is used up by one split,
//! so splitting at three places takes three characters, repeated if need
//! be: `"_.."` splits at the first `_`, then at the next `.`, then at the
//! `.` after that. Whatever follows the last split point stays unscanned
//! until [`remainder`](Scanner::remainder) drains it.

use std::iter::Rev;
use std::str::Chars;

use tracing::debug;
use trix_charinfo::{CharClassifier, UnicodeClassifier};

use crate::error::AbsorbEnd;
use crate::{ScanConfig, ScanError, Scanner};

impl<I, C> Scanner<I, C>
where
    I: Iterator<Item = char>,
    C: CharClassifier,
{
    /// Split at each delimiter in `delimiters`, in order.
    ///
    /// ```
    /// use trix_scan::Scanner;
    ///
    /// let mut s = Scanner::new("aa_DJ.iso88591.json")?;
    /// assert_eq!(s.split_on("_..")?, ["aa", "DJ", "iso88591"]);
    /// assert_eq!(s.remainder()?, "json");
    /// # Ok::<(), trix_scan::ScanError>(())
    /// ```
    ///
    /// If a delimiter is missing, the rest of the input becomes the last
    /// span and the remaining delimiters produce nothing.
    pub fn split_on(&mut self, delimiters: &str) -> Result<Vec<String>, ScanError> {
        self.split_on_chars(delimiters.chars())
    }

    /// [`split_on`](Self::split_on) over any delimiter sequence.
    pub fn split_on_chars(
        &mut self,
        delimiters: impl IntoIterator<Item = char>,
    ) -> Result<Vec<String>, ScanError> {
        let mut spans = Vec::new();
        for delimiter in delimiters {
            let Some(span) = self.scan_to(delimiter)? else {
                break;
            };
            spans.push(span);
            self.cursor.advance().absorb_end()?;
        }
        debug!(count = spans.len(), "split_on");
        Ok(spans)
    }

    /// Drain and return everything not yet scanned.
    ///
    /// Escapes are processed as in every other collect-style scan.
    pub fn remainder(&mut self) -> Result<String, ScanError> {
        Ok(self.collect(|_| true)?.unwrap_or_default())
    }
}

/// Scanner that reads its source from the end.
///
/// Delimiters and results are both given in the forward direction; the
/// reversal is internal.
///
/// ```
/// use trix_scan::ReverseScanner;
///
/// let mut s = ReverseScanner::new("Fi-fie-fo-fum! Hello_World.xyz")?;
/// assert_eq!(s.reverse_split_on(" _.")?, ["Hello", "World", "xyz"]);
/// assert_eq!(s.remainder()?, "Fi-fie-fo-fum!");
/// # Ok::<(), trix_scan::ScanError>(())
/// ```
#[derive(Debug)]
pub struct ReverseScanner<I, C = UnicodeClassifier> {
    inner: Scanner<Rev<I>, C>,
}

impl<'a> ReverseScanner<Chars<'a>> {
    /// Scan `text` backward with the default configuration.
    pub fn new(text: &'a str) -> Result<Self, ScanError> {
        ReverseScanner::with_config(text.chars(), ScanConfig::default(), UnicodeClassifier)
    }
}

impl<I, C> ReverseScanner<I, C>
where
    I: DoubleEndedIterator<Item = char>,
    C: CharClassifier,
{
    /// Scan `source` backward with an explicit configuration and
    /// classifier.
    pub fn with_config(
        source: impl IntoIterator<IntoIter = I, Item = char>,
        config: ScanConfig,
        classifier: C,
    ) -> Result<Self, ScanError> {
        Ok(ReverseScanner {
            inner: Scanner::with_config(source.into_iter().rev(), config, classifier)?,
        })
    }

    /// Split at the last occurrences of `delimiters`, working backward.
    ///
    /// The last delimiter is applied first, against the end of the text.
    /// Spans come back in left-to-right order with their characters in
    /// forward order. `"_"` on `"a_b_c"` yields `["c"]` (remainder
    /// `"a_b"`); `"__"` yields `["b", "c"]` (remainder `"a"`).
    pub fn reverse_split_on(&mut self, delimiters: &str) -> Result<Vec<String>, ScanError> {
        let spans = self.inner.split_on_chars(delimiters.chars().rev())?;
        Ok(spans.iter().rev().map(|span| span.chars().rev().collect()).collect())
    }

    /// Drain everything before the last split point, in forward order.
    pub fn remainder(&mut self) -> Result<String, ScanError> {
        Ok(self.inner.remainder()?.chars().rev().collect())
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }

    /// The underlying scanner, which sees the text back to front.
    #[inline]
    pub fn scanner_mut(&mut self) -> &mut Scanner<Rev<I>, C> {
        &mut self.inner
    }

    pub fn into_inner(self) -> Scanner<Rev<I>, C> {
        self.inner
    }
}
