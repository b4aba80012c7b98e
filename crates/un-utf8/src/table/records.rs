//! `HEX<TAB>NAME` records parsing.

use alloc::vec::Vec;
use core::num::IntErrorKind;

use bstr::ByteSlice;

use super::CodePointEntry;
use crate::error::{LoadError, RecordError};

/// Parses every non-blank line of `records` into an entry, in source order.
pub(super) fn parse_records(records: &[u8]) -> Result<Vec<CodePointEntry>, LoadError> {
    let mut entries = Vec::new();
    // `lines` strips `\n` and `\r\n`; a final line without `\n` can still end in `\r`.
    for (idx, line) in records.lines().enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.trim_with(|c| c.is_ascii_whitespace()).is_empty() {
            continue;
        }
        let entry = parse_record(line).map_err(|reason| LoadError::MalformedRecord {
            line: idx + 1,
            reason,
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Parses one line. The name is everything after the first TAB, verbatim.
pub(super) fn parse_record(line: &[u8]) -> Result<CodePointEntry, RecordError> {
    let (code, name) = line
        .split_once_str("\t")
        .ok_or(RecordError::MissingTab)?;
    CodePointEntry::new(parse_code(code)?, name)
}

fn parse_code(field: &[u8]) -> Result<u32, RecordError> {
    let field = field.trim_with(|c| c.is_ascii_whitespace());
    let digits = field
        .strip_prefix(b"0x")
        .or_else(|| field.strip_prefix(b"0X"))
        .unwrap_or(field);
    if digits.is_empty() {
        return Err(RecordError::EmptyCode);
    }
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(RecordError::InvalidHex);
    }
    // All ASCII hex digits, so this is valid UTF-8.
    let digits = digits.to_str().map_err(|_| RecordError::InvalidHex)?;
    u32::from_str_radix(digits, 16).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => RecordError::CodeOverflow,
        _ => RecordError::InvalidHex,
    })
}
