//! Writes scan events to the two output streams.
//!
//! Resolved names go to `out` as raw bytes, one per line. Diagnostics go to
//! `err` using their `Display` form, one per line.

use std::io::{self, Write};

use crate::diagnostic::ScanEvent;

/// Writes one event to the stream it belongs on.
pub fn write_event<O, E>(event: &ScanEvent<'_>, out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match event {
        ScanEvent::Resolved { name, .. } => {
            out.write_all(name)?;
            out.write_all(b"\n")
        }
        ScanEvent::Diagnostic(diag) => writeln!(err, "{diag}"),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use bstr::BStr;

    use super::*;
    use crate::Diagnostic;

    #[test]
    fn names_and_diagnostics_are_split() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let events = [
            ScanEvent::Resolved {
                code: 0x41,
                position: 0,
                name: BStr::new("LATIN CAPITAL LETTER A"),
            },
            ScanEvent::Diagnostic(Diagnostic::UnknownCode {
                code: 0x263A,
                position: 1,
            }),
            ScanEvent::Resolved {
                code: 0x42,
                position: 4,
                name: BStr::new(b"RAW\xFF"),
            },
        ];
        for ev in &events {
            write_event(ev, &mut out, &mut err).unwrap();
        }
        assert_eq!(out, b"LATIN CAPITAL LETTER A\nRAW\xFF\n");
        assert_eq!(err, b"Unknown code: 0x263A at 1\n");
    }
}
