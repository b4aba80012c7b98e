#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use un_utf8::{CodePointEntry, CodePointTable, Diagnostic, ScanEvent, Scanner};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Code points to put in the table; names are derived from the code.
    codes: Vec<u32>,
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let table: CodePointTable = input
        .codes
        .iter()
        .map(|&code| CodePointEntry::new(code, format!("{code:X}")).unwrap())
        .collect();

    let mut scanner = Scanner::new(&table, &input.bytes);
    let mut last = None;
    for event in scanner.by_ref() {
        let pos = event.position();
        assert!(pos < input.bytes.len());
        assert!(last.is_none_or(|l| pos > l), "positions must increase");
        last = Some(pos);

        match event {
            ScanEvent::Resolved { code, name, .. } => {
                assert_eq!(table.lookup(code), Some(name));
            }
            ScanEvent::Diagnostic(Diagnostic::UnknownCode { code, .. }) => {
                assert!(table.lookup(code).is_none());
            }
            ScanEvent::Diagnostic(_) => {}
        }
    }
    assert_eq!(scanner.position(), input.bytes.len());

    // Whatever std accepts as UTF-8 must never be reported as malformed.
    if std::str::from_utf8(&input.bytes).is_ok() {
        let summary = scanner.summary();
        assert_eq!(
            summary.overlong + summary.invalid_lead + summary.invalid_continuation + summary.incomplete,
            0
        );
    }
});
