//! End-to-end run: read the input, load the table, scan, report.

use std::io::{self, Write};

use crate::{
    error::RunError, options::RunOptions, report, scanner::ScanSummary, scanner::Scanner,
    table::CodePointTable,
};

/// Runs one scan as described by `options`.
///
/// The input file is read before the records file, so an unreadable input is
/// reported even when the records file is also missing. Per-byte anomalies
/// are written to `err` and never fail the run.
#[tracing::instrument(level = "debug", skip_all, fields(input = %options.input.display()))]
pub fn run<O, E>(options: &RunOptions, out: &mut O, err: &mut E) -> Result<ScanSummary, RunError>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let input = std::fs::read(&options.input).map_err(|source| RunError::Input {
        path: options.input.clone(),
        source,
    })?;
    tracing::debug!(path = %options.input.display(), bytes = input.len(), "read input");

    let table = CodePointTable::load(&options.records)?;
    tracing::debug!(
        path = %options.records.display(),
        entries = table.len(),
        "loaded code point table"
    );

    Ok(scan(&table, &input, out, err)?)
}

/// Scans `input` against `table`, writing every event as it is produced.
pub fn scan<O, E>(
    table: &CodePointTable,
    input: &[u8],
    out: &mut O,
    err: &mut E,
) -> io::Result<ScanSummary>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut scanner = Scanner::new(table, input);
    for event in scanner.by_ref() {
        report::write_event(&event, out, err)?;
    }
    out.flush()?;
    err.flush()?;

    let summary = *scanner.summary();
    tracing::debug!(
        resolved = summary.resolved,
        unknown = summary.unknown,
        overlong = summary.overlong,
        invalid_lead = summary.invalid_lead,
        invalid_continuation = summary.invalid_continuation,
        incomplete = summary.incomplete,
        "scan finished"
    );
    Ok(summary)
}
