use csv::ReaderBuilder;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::domain::extract_domain;
use crate::error::ImportError;
use crate::stats::{DomainCounts, ImportReport};

// The email address lives at a fixed position in the export; there is no
// header-driven column lookup. Exports with a different layout will not work.
pub const EMAIL_FIELD: usize = 2;

pub fn open_input(path: &Path) -> Result<File, ImportError> {
    if path.extension().and_then(OsStr::to_str) != Some("csv") {
        return Err(ImportError::InvalidExtension {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    info!(action = "open", component = "source", path = ?path, "Opened customers file");
    Ok(file)
}

pub fn count_domains<R: Read>(input: R) -> Result<ImportReport, ImportError> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "row_reader",
        "Starting domain extraction from customer records"
    );

    // flexible(true) so a short row surfaces as MissingEmailField with its
    // line number instead of the csv crate's unequal-length error.
    let mut rows = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut counts = DomainCounts::new();
    let mut records_read: u64 = 0;

    for result in rows.records() {
        let record = result?;
        let line = record.position().map_or(0, |position| position.line());

        let email = record
            .get(EMAIL_FIELD)
            .ok_or(ImportError::MissingEmailField {
                line,
                fields: record.len(),
            })?;

        let domain = extract_domain(email)?;
        counts.record(domain);
        records_read += 1;
    }

    let read_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "row_reader",
        records = records_read,
        unique_domains = counts.len(),
        duration_ms = read_time.as_millis(),
        "Finished reading customer records"
    );

    Ok(ImportReport {
        counts,
        records_read,
    })
}
