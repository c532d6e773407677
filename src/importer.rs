use std::time::Instant;
use tracing::info;

use crate::{error::ImportError, reader, stats::ImportReport, Args};

pub fn import_customers(args: &Args) -> Result<ImportReport, ImportError> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "import", path = ?args.input, "Starting customer import");

    let input = reader::open_input(&args.input)?;
    let report = reader::count_domains(input)?;

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "import",
        records = report.records_read,
        unique_domains = report.counts.len(),
        duration_ms = total_time.as_millis(),
        "Import completed successfully"
    );

    Ok(report)
}

pub fn print_domain_counts(report: &ImportReport) {
    for domain in report.counts.sorted_domains() {
        println!("{}, {}", domain, report.counts.get(domain));
    }
}
