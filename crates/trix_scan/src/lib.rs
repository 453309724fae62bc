//! Single-pass character scanner.
//!
//! Reads Unicode text one character at a time and produces delimited
//! tokens: quoted strings, bracketed groups (nesting-aware), identifiers,
//! digit runs, and space-delimited words. There is no backtracking; each
//! character is classified once, when the cursor reaches it.
//!
//! # Layers
//!
//! - [`Cursor`]: one-character lookahead over the source, with eager
//!   classification through a [`CharClassifier`] and a terminal
//!   exhausted state.
//! - [`Scanner::collect`] / [`Scanner::ignore`]: the two base loops,
//!   escape-aware and tolerant of running out of input.
//! - Recipes ([`Scanner::scan_quoted`], [`Scanner::scan_bracketed`],
//!   [`Scanner::scan_one`], [`Scanner::split_all`], ...): built only from
//!   the base loops.
//! - Splitters ([`Scanner::split_on`], [`ReverseScanner`]): split at an
//!   explicit sequence of delimiter characters, from either end.
//!
//! # Example
//!
//! ```
//! use trix_scan::Scanner;
//!
//! let mut s = Scanner::new(r#"open "My File.txt" (mode (read write)) now"#)?;
//! assert_eq!(
//!     s.split_all()?,
//!     ["open", "\"My File.txt\"", "(mode (read write))", "now"]
//! );
//! # Ok::<(), trix_scan::ScanError>(())
//! ```
//!
//! # Debugging
//!
//! Scans emit `tracing` events. Call [`init_tracing`] and run with
//! `RUST_LOG=trix_scan=trace` to see them.

mod buffer;
mod config;
mod cursor;
mod error;
mod recipes;
mod scanner;
mod split;

pub use buffer::ScanBuffer;
pub use config::{ScanConfig, DEFAULT_BUFFER_HINT, DEFAULT_ESCAPE};
pub use cursor::Cursor;
pub use error::ScanError;
pub use scanner::Scanner;
pub use split::ReverseScanner;
pub use trix_charinfo::{CharClassifier, ClassifiedChar, ClassifyError, UnicodeClassifier};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=trix_scan=debug` or `RUST_LOG=trix_scan=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
