//! Sorted code point table.
//!
//! Overview
//! - The table is built once from a records source (one `HEX<TAB>NAME` line
//!   per code point), sorted by code, and then only read.
//! - Lookups bisect the sorted entries and hand out borrowed name slices;
//!   entries never leave the table.
//!
//! Invariants
//! - `entries` is sorted ascending by `code` for the lifetime of the table.
//! - Every name is at most [`MAX_NAME_LEN`] bytes.
//! - Duplicate codes are kept in source order; lookup returns the first.

mod records;


use alloc::vec::Vec;
use core::fmt;

use bstr::{BStr, BString, ByteSlice};

use crate::error::{LoadError, RecordError};

/// Longest name, in bytes, a record may carry.
pub const MAX_NAME_LEN: usize = 90;

/// A Unicode character name, bounded to [`MAX_NAME_LEN`] bytes.
///
/// Names are kept as raw bytes: the records format allows any non-newline
/// byte in the name field and output writes them back unchanged.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CodePointName(BString);

impl CodePointName {
    /// Wraps `name`, rejecting it if it is longer than [`MAX_NAME_LEN`].
    pub fn new(name: impl Into<BString>) -> Result<Self, RecordError> {
        let name = name.into();
        if name.len() > MAX_NAME_LEN {
            return Err(RecordError::NameTooLong(name.len()));
        }
        Ok(Self(name))
    }

    /// The name as a byte string.
    pub fn as_bstr(&self) -> &BStr {
        self.0.as_bstr()
    }

    /// The raw name bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for CodePointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for CodePointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl AsRef<[u8]> for CodePointName {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// One record of the table: a code point and its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointEntry {
    code: u32,
    name: CodePointName,
}

impl CodePointEntry {
    /// Creates an entry, enforcing the name length bound.
    pub fn new(code: u32, name: impl Into<BString>) -> Result<Self, RecordError> {
        Ok(Self {
            code,
            name: CodePointName::new(name)?,
        })
    }

    /// The code point value.
    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    /// The recorded name.
    #[inline]
    pub fn name(&self) -> &CodePointName {
        &self.name
    }
}

/// Read-only table mapping code points to names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodePointTable {
    entries: Vec<CodePointEntry>,
}

impl CodePointTable {
    /// Builds a table from unordered entries.
    ///
    /// The sort is stable, so among entries sharing a code the one that came
    /// first stays first and is the one [`lookup`](Self::lookup) returns.
    pub fn from_entries(entries: impl IntoIterator<Item = CodePointEntry>) -> Self {
        let mut entries: Vec<CodePointEntry> = entries.into_iter().collect();
        entries.sort_by_key(CodePointEntry::code);
        Self { entries }
    }

    /// Parses a records source held in memory.
    ///
    /// Blank lines are skipped; any other line that is not `HEX<TAB>NAME`
    /// fails the whole load with [`LoadError::MalformedRecord`].
    pub fn parse(records: &[u8]) -> Result<Self, LoadError> {
        let entries = records::parse_records(records)?;
        let table = Self::from_entries(entries);
        tracing::debug!(entries = table.len(), "parsed code point table");
        Ok(table)
    }

    /// Reads and parses the records file at `path`.
    #[cfg(feature = "std")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read records file");
        Self::parse(&bytes)
    }

    /// Returns the name recorded for `code`, if any.
    #[inline]
    pub fn lookup(&self, code: u32) -> Option<&BStr> {
        self.get(code).map(|entry| entry.name.as_bstr())
    }

    /// Returns the entry recorded for `code`, if any.
    pub fn get(&self, code: u32) -> Option<&CodePointEntry> {
        let slot = self.lower_bound(code);
        self.entries.get(slot).filter(|entry| entry.code == code)
    }

    /// Index of the first entry whose code is not less than `code`.
    ///
    /// Half-open bisection: `[start, end)` shrinks until empty, so an empty
    /// table never indexes and the result may equal `len()`.
    fn lower_bound(&self, code: u32) -> usize {
        let mut start = 0;
        let mut end = self.entries.len();
        while start < end {
            let mid = start + (end - start) / 2;
            if code > self.entries[mid].code {
                start = mid + 1;
            } else {
                end = mid;
            }
        }
        start
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by code.
    pub fn entries(&self) -> &[CodePointEntry] {
        &self.entries
    }
}

impl FromIterator<CodePointEntry> for CodePointTable {
    fn from_iter<I: IntoIterator<Item = CodePointEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
