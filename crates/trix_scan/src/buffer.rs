//! Growable accumulator for collect-style scans.

/// Accumulates matched characters for a single scan operation.
///
/// Created fresh by each operation, read out once with
/// [`into_string`](Self::into_string), then gone. The capacity hint only
/// sizes the first allocation; pushes past it grow the buffer as usual.
#[derive(Debug)]
pub struct ScanBuffer {
    text: String,
}

impl ScanBuffer {
    pub fn with_hint(hint: usize) -> Self {
        ScanBuffer {
            text: String::with_capacity(hint),
        }
    }

    #[inline]
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    #[inline]
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Length of the collected text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Hand the collected text to the caller.
    ///
    /// Short tokens collected into a large buffer give back the unused
    /// capacity, so token lists do not pin one hint-sized allocation per
    /// token.
    pub fn into_string(mut self) -> String {
        if self.text.capacity() > self.text.len().saturating_mul(2) {
            self.text.shrink_to_fit();
        }
        self.text
    }
}
