use bstr::BStr;
use thiserror::Error;

/// One step of a scan: either a resolved name or a byte-level diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent<'t> {
    /// A well-formed sequence whose code point is in the table.
    Resolved {
        /// Decoded code point.
        code: u32,
        /// Offset of the sequence's lead byte.
        position: usize,
        /// Name borrowed from the table.
        name: &'t BStr,
    },
    /// Anything else. The scan continues after it.
    Diagnostic(Diagnostic),
}

impl ScanEvent<'_> {
    /// Offset of the byte the event is reported at.
    pub fn position(&self) -> usize {
        match self {
            ScanEvent::Resolved { position, .. } => *position,
            ScanEvent::Diagnostic(diag) => diag.position(),
        }
    }

    /// The diagnostic, if this event is one.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ScanEvent::Resolved { .. } => None,
            ScanEvent::Diagnostic(diag) => Some(diag),
        }
    }
}

impl From<Diagnostic> for ScanEvent<'_> {
    fn from(diag: Diagnostic) -> Self {
        ScanEvent::Diagnostic(diag)
    }
}

/// A recoverable anomaly found while scanning.
///
/// The `Display` output is the line written to standard error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The byte at `position` cannot start any sequence.
    #[error("Invalid byte: 0x{byte:X} at {position}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Its offset.
        position: usize,
    },
    /// A byte inside a multi-byte sequence is not `10xxxxxx`.
    ///
    /// `position` is the offset of the bad byte, not of the lead byte.
    #[error("Invalid byte: 0x{byte:X} at {position}")]
    InvalidContinuationByte {
        /// The offending byte.
        byte: u8,
        /// Its offset.
        position: usize,
    },
    /// The buffer ends before the sequence started at `position` does.
    #[error("Incomplete code at {position}")]
    Incomplete {
        /// Offset of the lead byte.
        position: usize,
    },
    /// The sequence decodes to a value that fits a shorter sequence.
    #[error("Invalid encoding: 0x{code:X} at {position}")]
    Overlong {
        /// Decoded value.
        code: u32,
        /// Offset of the lead byte.
        position: usize,
    },
    /// The sequence is well formed but the table has no such code.
    #[error("Unknown code: 0x{code:X} at {position}")]
    UnknownCode {
        /// Decoded value.
        code: u32,
        /// Offset of the lead byte.
        position: usize,
    },
}

impl Diagnostic {
    /// Offset the diagnostic is reported at.
    pub fn position(&self) -> usize {
        match *self {
            Diagnostic::InvalidLeadByte { position, .. }
            | Diagnostic::InvalidContinuationByte { position, .. }
            | Diagnostic::Incomplete { position }
            | Diagnostic::Overlong { position, .. }
            | Diagnostic::UnknownCode { position, .. } => position,
        }
    }
}
