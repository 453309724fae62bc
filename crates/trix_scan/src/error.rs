//! Scanner error taxonomy.
//!
//! "No token here" is not an error: recipes report it as `Ok(None)`.
//! [`ScanError::EndOfInput`] is the cursor's exhaustion signal and is
//! absorbed by every scan operation; callers of the recipes only ever see
//! the structural failures and classifier errors.

use trix_charinfo::ClassifyError;

/// Everything that can go wrong while scanning.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ScanError {
    /// The character source has no more characters.
    #[error("end of input")]
    EndOfInput,

    /// Input ended inside a bracketed group.
    ///
    /// `partial` holds everything scanned from the opening bracket on, so
    /// the caller can report or recover the incomplete span.
    #[error("unbalanced {open:?}: input ended at depth {depth} before {close:?}")]
    UnbalancedBracket {
        open: char,
        close: char,
        depth: u32,
        partial: String,
    },

    /// The scanner configuration was rejected.
    #[error("invalid scanner configuration: {0}")]
    InvalidConfig(String),

    /// The character classifier failed; passed through unchanged.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

/// Turns the cursor's exhaustion signal into an absent value.
pub(crate) trait AbsorbEnd<T> {
    fn absorb_end(self) -> Result<Option<T>, ScanError>;
}

impl<T> AbsorbEnd<T> for Result<T, ScanError> {
    #[inline]
    fn absorb_end(self) -> Result<Option<T>, ScanError> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(ScanError::EndOfInput) => Ok(None),
            Err(err) => Err(err),
        }
    }
}
