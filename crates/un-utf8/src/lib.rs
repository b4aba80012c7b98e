//! Validate a byte stream as UTF-8 and resolve every well-formed code point
//! to its Unicode character name.
//!
//! The crate has two halves:
//! - [`CodePointTable`]: a sorted, read-only table of `(code, name)` records
//!   searched by bisection.
//! - [`Scanner`]: a cursor over a byte buffer that classifies each sequence
//!   by its lead byte, checks continuation bytes and overlong encodings, and
//!   yields a [`ScanEvent`] per sequence.
//!
//! ```rust
//! use un_utf8::{CodePointTable, ScanEvent, Scanner};
//!
//! let table = CodePointTable::parse(b"00E9\tLATIN SMALL LETTER E WITH ACUTE\n").unwrap();
//! let mut scanner = Scanner::new(&table, "\u{e9}".as_bytes());
//! match scanner.next() {
//!     Some(ScanEvent::Resolved { code, name, .. }) => {
//!         assert_eq!(code, 0xE9);
//!         assert_eq!(name, "LATIN SMALL LETTER E WITH ACUTE");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert!(scanner.next().is_none());
//! ```
//!
//! With the `std` feature the [`driver`] module wires the table, scanner and
//! output streams together the way the `un-utf8` binary uses them.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod diagnostic;
mod error;
mod scanner;
mod table;

#[cfg(feature = "std")]
pub mod driver;
#[cfg(feature = "std")]
mod options;
#[cfg(feature = "std")]
pub mod report;

pub use diagnostic::{Diagnostic, ScanEvent};
#[cfg(feature = "std")]
pub use error::RunError;
pub use error::{LoadError, RecordError};
#[cfg(feature = "std")]
pub use options::{DEFAULT_RECORDS_PATH, RunOptions};
pub use scanner::{ScanSummary, Scanner, Tier};
pub use table::{CodePointEntry, CodePointName, CodePointTable, MAX_NAME_LEN};
