//! Line walking shared by the flat-file generators (`manuf`, `oui`).

use tablegen_common::config::MalformedPolicy;
use tablegen_common::error::TableError;
use tracing::warn;

/// True for lines that carry no record: blank or starting with `#`.
pub fn is_ignorable(line: &str) -> bool {
    let line: &str = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Runs `parse` over every meaningful line of `text`.
///
/// `parse` receives the 1-based line number and the trimmed line. Under
/// [`MalformedPolicy::Abort`] the first error is returned and nothing else is
/// parsed; under [`MalformedPolicy::Skip`] errors are logged and the line is
/// dropped.
pub fn parse_lines<T, F>(text: &str, policy: MalformedPolicy, mut parse: F) -> Result<Vec<T>, TableError>
where
    F: FnMut(usize, &str) -> Result<T, TableError>,
{
    let mut records: Vec<T> = Vec::new();
    let mut skipped: usize = 0;

    for (idx, line) in text.lines().enumerate() {
        if is_ignorable(line) {
            continue;
        }

        match parse(idx + 1, line.trim()) {
            Ok(record) => records.push(record),
            Err(e) => match policy {
                MalformedPolicy::Abort => return Err(e),
                MalformedPolicy::Skip => {
                    warn!("skipping {e}");
                    skipped += 1;
                }
            },
        }
    }

    if skipped > 0 {
        warn!("{skipped} malformed line(s) skipped");
    }

    Ok(records)
}
