//! Per-scanner configuration.
//!
//! Every scanner owns its configuration for its whole lifetime. There is
//! no shared default that one scanner could change under another.

use crate::ScanError;

/// Escape character used when none is configured.
pub const DEFAULT_ESCAPE: char = '\\';

/// Initial capacity of each scan buffer when none is configured.
pub const DEFAULT_BUFFER_HINT: usize = 2048;

/// Scanner settings, fixed at construction.
///
/// ```
/// use trix_scan::ScanConfig;
///
/// let config = ScanConfig::new().with_escape('^').with_buffer_hint(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScanConfig {
    /// Character that makes the following character literal data.
    pub escape: char,
    /// Initial buffer capacity for collect-style scans.
    ///
    /// Advisory only: tokens longer than this are still collected whole.
    pub buffer_hint: usize,
}

impl ScanConfig {
    pub const fn new() -> Self {
        ScanConfig {
            escape: DEFAULT_ESCAPE,
            buffer_hint: DEFAULT_BUFFER_HINT,
        }
    }

    #[must_use]
    pub const fn with_escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }

    #[must_use]
    pub const fn with_buffer_hint(mut self, buffer_hint: usize) -> Self {
        self.buffer_hint = buffer_hint;
        self
    }

    /// Reject settings the scanner cannot work with.
    ///
    /// The buffer hint must be positive. The escape character must not be
    /// whitespace, since whitespace skipping would then swallow the
    /// character after every escaped space.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.buffer_hint == 0 {
            return Err(ScanError::InvalidConfig(
                "buffer hint must be positive".into(),
            ));
        }
        if self.escape.is_whitespace() {
            return Err(ScanError::InvalidConfig(format!(
                "escape character {:?} is whitespace",
                self.escape
            )));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}
