//! Scanner: a forward-only cursor that decodes one UTF-8 sequence per step.
//!
//! Each step looks at the byte under the cursor and
//! 1. classifies it as a [`Tier`] lead byte (or reports it as invalid),
//! 2. checks that the whole sequence fits in the buffer,
//! 3. checks every continuation byte,
//! 4. reassembles the payload bits, most significant group first,
//! 5. rejects values that a shorter tier could have held,
//! 6. resolves the value against the [`CodePointTable`].
//!
//! Cursor advancement
//! - Invalid lead byte: one byte.
//! - Truncated sequence: the rest of the buffer, so a scan reports at most one
//!   `Incomplete` and it is always the last event.
//! - Bad continuation byte: the full nominal sequence length, even when the
//!   bad byte is not the last one. The byte after the bad one is not retried
//!   as a lead byte.
//! - Anything else: the sequence length.
//!
//! The cursor never moves backwards and every step advances it by at least
//! one byte, so a scan over `n` bytes yields at most `n` events.

mod tier;


pub use tier::Tier;
use tier::{CONTINUATION_PAYLOAD_BITS, CONTINUATION_PAYLOAD_MASK, is_continuation};

use crate::{
    diagnostic::{Diagnostic, ScanEvent},
    table::CodePointTable,
};

/// Iterator over the [`ScanEvent`]s of one byte buffer.
///
/// ```rust
/// use un_utf8::{CodePointTable, Diagnostic, ScanEvent, Scanner};
///
/// let table = CodePointTable::default();
/// let events: Vec<_> = Scanner::new(&table, &[0xC0, 0x80]).collect();
/// assert_eq!(
///     events,
///     [ScanEvent::Diagnostic(Diagnostic::Overlong { code: 0, position: 0 })]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'t, 'b> {
    table: &'t CodePointTable,
    buffer: &'b [u8],
    position: usize,
    summary: ScanSummary,
}

impl<'t, 'b> Scanner<'t, 'b> {
    /// Starts a scan of `buffer` at offset 0.
    pub fn new(table: &'t CodePointTable, buffer: &'b [u8]) -> Self {
        Self {
            table,
            buffer,
            position: 0,
            summary: ScanSummary::default(),
        }
    }

    /// Offset of the next byte to decode.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet decoded.
    #[inline]
    pub fn remaining(&self) -> &'b [u8] {
        self.buffer.get(self.position..).unwrap_or_default()
    }

    /// Counts of the events yielded so far.
    pub fn summary(&self) -> &ScanSummary {
        &self.summary
    }

    /// Decodes the sequence starting at `position`.
    ///
    /// Returns the event and the number of bytes it consumes. `position` must
    /// be in bounds.
    fn step(&self, position: usize) -> (ScanEvent<'t>, usize) {
        let lead = self.buffer[position];
        let Some(tier) = Tier::classify(lead) else {
            return (
                Diagnostic::InvalidLeadByte {
                    byte: lead,
                    position,
                }
                .into(),
                1,
            );
        };

        let len = tier.len();
        let remaining = self.buffer.len() - position;
        if remaining < len {
            return (Diagnostic::Incomplete { position }.into(), remaining);
        }

        let sequence = &self.buffer[position..position + len];
        let mut code = u32::from(lead & tier.lead_payload_mask());
        for (offset, &byte) in sequence.iter().enumerate().skip(1) {
            if !is_continuation(byte) {
                let diag = Diagnostic::InvalidContinuationByte {
                    byte,
                    position: position + offset,
                };
                return (diag.into(), len);
            }
            code = (code << CONTINUATION_PAYLOAD_BITS)
                | u32::from(byte & CONTINUATION_PAYLOAD_MASK);
        }

        if code < tier.min_code() {
            return (Diagnostic::Overlong { code, position }.into(), len);
        }

        let event = match self.table.lookup(code) {
            Some(name) => ScanEvent::Resolved {
                code,
                position,
                name,
            },
            None => Diagnostic::UnknownCode { code, position }.into(),
        };
        (event, len)
    }
}

impl<'t> Iterator for Scanner<'t, '_> {
    type Item = ScanEvent<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.buffer.len() {
            return None;
        }
        let (event, consumed) = self.step(self.position);
        debug_assert!(consumed > 0, "scanner must make progress");
        self.position += consumed;
        self.summary.record(&event);
        if let ScanEvent::Diagnostic(diag) = &event {
            tracing::trace!(%diag, "scan diagnostic");
        }
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.buffer.len().saturating_sub(self.position);
        (rest.div_ceil(4), Some(rest))
    }
}

impl core::iter::FusedIterator for Scanner<'_, '_> {}

/// Per-kind event counts for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Sequences resolved to a name.
    pub resolved: usize,
    /// Well-formed sequences with no table entry.
    pub unknown: usize,
    /// Overlong encodings.
    pub overlong: usize,
    /// Bytes that cannot start a sequence.
    pub invalid_lead: usize,
    /// Sequences with a bad continuation byte.
    pub invalid_continuation: usize,
    /// Sequences cut off by the end of the buffer.
    pub incomplete: usize,
}

impl ScanSummary {
    fn record(&mut self, event: &ScanEvent<'_>) {
        let counter = match event {
            ScanEvent::Resolved { .. } => &mut self.resolved,
            ScanEvent::Diagnostic(diag) => match diag {
                Diagnostic::UnknownCode { .. } => &mut self.unknown,
                Diagnostic::Overlong { .. } => &mut self.overlong,
                Diagnostic::InvalidLeadByte { .. } => &mut self.invalid_lead,
                Diagnostic::InvalidContinuationByte { .. } => &mut self.invalid_continuation,
                Diagnostic::Incomplete { .. } => &mut self.incomplete,
            },
        };
        *counter += 1;
    }

    /// Total diagnostics of every kind.
    pub fn diagnostics(&self) -> usize {
        self.unknown + self.overlong + self.invalid_lead + self.invalid_continuation + self.incomplete
    }

    /// Whether every sequence resolved to a name.
    pub fn is_clean(&self) -> bool {
        self.diagnostics() == 0
    }
}
